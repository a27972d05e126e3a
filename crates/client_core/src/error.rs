use shared::error::ApiError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("{0}")]
    Transport(#[from] reqwest::Error),
    #[error("{message}")]
    Rejected { message: String },
    #[error("unexpected response (HTTP {status}): {detail}")]
    Decode { status: u16, detail: String },
    #[error("invalid server url '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },
}

impl From<ApiError> for StoreError {
    fn from(value: ApiError) -> Self {
        Self::Rejected {
            message: value.message,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Validation,
    Operation,
    Load,
}

/// Errors surfaced by the form controller. `Display` is the text shown in the
/// error region.
#[derive(Debug, Error)]
pub enum ControllerError {
    #[error("{0}")]
    Validation(String),
    #[error("{context}: {source}")]
    Operation {
        context: &'static str,
        #[source]
        source: StoreError,
    },
    #[error("{context}: {source}")]
    Load {
        context: &'static str,
        #[source]
        source: StoreError,
    },
}

impl ControllerError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Validation(_) => ErrorKind::Validation,
            Self::Operation { .. } => ErrorKind::Operation,
            Self::Load { .. } => ErrorKind::Load,
        }
    }

    pub fn message(&self) -> String {
        self.to_string()
    }
}

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Failure payload reported by the contacts server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Error)]
#[error("{message}")]
pub struct ApiError {
    pub message: String,
}

impl ApiError {
    pub const FALLBACK_MESSAGE: &'static str = "request rejected by server";

    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

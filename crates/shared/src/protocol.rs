use serde::{Deserialize, Serialize};

use crate::{domain::Contact, error::ApiError};

/// Response envelope used by every contacts endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiEnvelope<T> {
    pub success: bool,
    // A missing `Option` field already decodes as `None`; `default` here would
    // add a `T: Default` bound to the generic impl.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl<T> ApiEnvelope<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            message: None,
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            message: Some(message.into()),
        }
    }

    /// `success: false` becomes an [`ApiError`] carrying the server message.
    pub fn into_result(self) -> Result<Option<T>, ApiError> {
        if self.success {
            Ok(self.data)
        } else {
            Err(ApiError::new(
                self.message
                    .unwrap_or_else(|| ApiError::FALLBACK_MESSAGE.to_string()),
            ))
        }
    }
}

/// Acknowledgement body for create, update and delete.
pub type AckEnvelope = ApiEnvelope<serde_json::Value>;

pub type ContactListEnvelope = ApiEnvelope<Vec<Contact>>;

//! UI/backend events and error modeling for desktop GUI controller.

use client_core::FormAffordances;
use shared::domain::{Contact, ContactDraft};
use tokio::sync::oneshot;

pub enum UiEvent {
    Info(String),
    ContactsRendered(Vec<Contact>),
    FormFilled(ContactDraft),
    FormCleared,
    AffordancesChanged(FormAffordances),
    Loading(bool),
    Error(UiError),
    ErrorCleared,
    ConfirmRequested {
        prompt: String,
        reply: oneshot::Sender<bool>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiErrorCategory {
    Validation,
    Transport,
    Server,
    Unknown,
}

#[derive(Debug, Clone)]
pub struct UiError {
    category: UiErrorCategory,
    message: String,
}

impl UiError {
    pub fn from_message(message: impl Into<String>) -> Self {
        let message = message.into();
        let lower = message.to_ascii_lowercase();
        let category = if lower.contains("required") || lower.contains("invalid server url") {
            UiErrorCategory::Validation
        } else if lower.contains("error sending request")
            || lower.contains("connection")
            || lower.contains("timed out")
            || lower.contains("dns")
            || lower.contains("no contacts server connected")
            || lower.contains("startup failure")
        {
            UiErrorCategory::Transport
        } else if lower.contains("failed") {
            UiErrorCategory::Server
        } else {
            UiErrorCategory::Unknown
        };

        Self { category, message }
    }

    pub fn category(&self) -> UiErrorCategory {
        self.category
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn hint(&self) -> Option<&'static str> {
        match self.category {
            UiErrorCategory::Transport => Some("Check the server URL and network, then retry."),
            UiErrorCategory::Validation
            | UiErrorCategory::Server
            | UiErrorCategory::Unknown => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_validation_message() {
        let err = UiError::from_message("Name and phone are required");
        assert_eq!(err.category(), UiErrorCategory::Validation);
        assert_eq!(err.hint(), None);
    }

    #[test]
    fn classifies_transport_failure() {
        let err = UiError::from_message(
            "Failed to load contacts: error sending request for url (http://127.0.0.1:5000/contacts)",
        );
        assert_eq!(err.category(), UiErrorCategory::Transport);
        assert!(err.hint().is_some());
    }

    #[test]
    fn classifies_server_rejection() {
        let err = UiError::from_message("Operation failed: duplicate phone");
        assert_eq!(err.category(), UiErrorCategory::Server);
        assert_eq!(err.message(), "Operation failed: duplicate phone");
    }
}

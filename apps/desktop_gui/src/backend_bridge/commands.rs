//! Backend commands queued from UI to backend worker.

use shared::domain::{ContactDraft, ContactId};

pub enum BackendCommand {
    Connect { server_url: String },
    RefreshList,
    Submit { fields: ContactDraft },
    BeginEdit { id: ContactId },
    CancelEdit,
    Delete { id: ContactId },
}

impl BackendCommand {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Connect { .. } => "connect",
            Self::RefreshList => "refresh_list",
            Self::Submit { .. } => "submit",
            Self::BeginEdit { .. } => "begin_edit",
            Self::CancelEdit => "cancel_edit",
            Self::Delete { .. } => "delete",
        }
    }
}

//! Controller UI surface that forwards every view update to the egui thread.

use async_trait::async_trait;
use client_core::{ConfirmPrompt, ContactFormView, ContactsListView, FormAffordances, StatusView};
use crossbeam_channel::{Sender, TrySendError};
use shared::domain::{Contact, ContactDraft};
use tokio::sync::oneshot;

use crate::controller::events::{UiError, UiEvent};

pub struct ChannelUi {
    ui_tx: Sender<UiEvent>,
}

impl ChannelUi {
    pub fn new(ui_tx: Sender<UiEvent>) -> Self {
        Self { ui_tx }
    }

    /// Never blocks the runtime; a dropped confirmation request reads as "no".
    fn emit(&self, event: UiEvent) {
        match self.ui_tx.try_send(event) {
            Ok(()) => {}
            Err(TrySendError::Full(_)) => tracing::warn!("ui event queue is full; event dropped"),
            Err(TrySendError::Disconnected(_)) => tracing::debug!("ui event receiver dropped"),
        }
    }
}

impl ContactsListView for ChannelUi {
    fn render_contacts(&self, contacts: &[Contact]) {
        self.emit(UiEvent::ContactsRendered(contacts.to_vec()));
    }
}

impl ContactFormView for ChannelUi {
    fn fill_form(&self, draft: &ContactDraft) {
        self.emit(UiEvent::FormFilled(draft.clone()));
    }

    fn clear_form(&self) {
        self.emit(UiEvent::FormCleared);
    }

    fn apply_affordances(&self, affordances: FormAffordances) {
        self.emit(UiEvent::AffordancesChanged(affordances));
    }
}

impl StatusView for ChannelUi {
    fn set_loading(&self, loading: bool) {
        self.emit(UiEvent::Loading(loading));
    }

    fn show_error(&self, message: &str) {
        self.emit(UiEvent::Error(UiError::from_message(message)));
    }

    fn hide_error(&self) {
        self.emit(UiEvent::ErrorCleared);
    }
}

#[async_trait]
impl ConfirmPrompt for ChannelUi {
    /// Suspends until the user answers the dialog; a closed window counts as "no".
    async fn confirm(&self, prompt: &str) -> bool {
        let (reply, answer) = oneshot::channel();
        self.emit(UiEvent::ConfirmRequested {
            prompt: prompt.to_string(),
            reply,
        });
        answer.await.unwrap_or(false)
    }
}

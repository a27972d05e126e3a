use shared::domain::{Contact, ContactDraft, ContactId};
use tracing::{debug, info, warn};

use crate::{
    error::ControllerError,
    session::{EditMode, EditSession},
    store::ContactsRemoteStore,
    view::{ContactsUi, LoadingGuard},
};

pub const VALIDATION_MESSAGE: &str = "Name and phone are required";
pub const DELETE_PROMPT: &str = "Are you sure you want to delete this contact?";

const SUBMIT_FAILED: &str = "Operation failed";
const LOAD_CONTACTS_FAILED: &str = "Failed to load contacts";
const LOAD_DETAILS_FAILED: &str = "Failed to load contact details";
const DELETE_FAILED: &str = "Failed to delete contact";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    Created,
    Updated(ContactId),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditOutcome {
    Loaded(Contact),
    /// The id was not in the fetched list; nothing changed.
    NotFound,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    Deleted,
    Declined,
}

/// Owns the create/edit session and reconciles it with the remote collection.
///
/// Every error is shown through the UI's error region before it is returned.
pub struct ContactFormController<S, V> {
    store: S,
    view: V,
    session: EditSession,
}

impl<S, V> ContactFormController<S, V>
where
    S: ContactsRemoteStore,
    V: ContactsUi,
{
    pub fn new(store: S, view: V) -> Self {
        view.clear_form();
        view.apply_affordances(EditMode::Creating.affordances());
        Self {
            store,
            view,
            session: EditSession::new(),
        }
    }

    pub fn session(&self) -> &EditSession {
        &self.session
    }

    pub fn mode(&self) -> EditMode {
        self.session.mode()
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub async fn submit(&mut self, fields: ContactDraft) -> Result<SubmitOutcome, ControllerError> {
        let draft = fields.trimmed();
        if !draft.has_required_fields() {
            return Err(self.surface(ControllerError::Validation(VALIDATION_MESSAGE.into())));
        }

        let outcome = match self.session.mode() {
            EditMode::Editing(id) => self
                .store
                .update(id, &draft)
                .await
                .map(|()| SubmitOutcome::Updated(id)),
            EditMode::Creating => self
                .store
                .create(&draft)
                .await
                .map(|()| SubmitOutcome::Created),
        };
        let outcome = outcome.map_err(|source| {
            self.surface(ControllerError::Operation {
                context: SUBMIT_FAILED,
                source,
            })
        })?;

        info!(?outcome, "contact saved");
        self.reset_form();
        self.reload_after_mutation().await;
        Ok(outcome)
    }

    pub async fn begin_edit(&mut self, id: ContactId) -> Result<EditOutcome, ControllerError> {
        let fetched = {
            let _loading = LoadingGuard::acquire(&self.view);
            self.store.list().await
        };
        let contacts = match fetched {
            Ok(contacts) => contacts,
            Err(source) => {
                self.reset_form();
                return Err(self.surface(ControllerError::Load {
                    context: LOAD_DETAILS_FAILED,
                    source,
                }));
            }
        };

        let Some(contact) = contacts.into_iter().find(|contact| contact.id == id) else {
            debug!(contact_id = %id, "edit target missing from fetched list");
            return Ok(EditOutcome::NotFound);
        };

        self.view.fill_form(&contact.to_draft());
        self.session.begin(id);
        self.view.apply_affordances(self.session.mode().affordances());
        info!(contact_id = %id, "editing contact");
        Ok(EditOutcome::Loaded(contact))
    }

    pub fn cancel_edit(&mut self) {
        self.reset_form();
    }

    pub async fn delete_contact(&mut self, id: ContactId) -> Result<DeleteOutcome, ControllerError> {
        if !self.view.confirm(DELETE_PROMPT).await {
            debug!(contact_id = %id, "delete declined");
            return Ok(DeleteOutcome::Declined);
        }

        self.store.delete(id).await.map_err(|source| {
            self.surface(ControllerError::Operation {
                context: DELETE_FAILED,
                source,
            })
        })?;

        info!(contact_id = %id, "contact deleted");
        self.reload_after_mutation().await;
        Ok(DeleteOutcome::Deleted)
    }

    /// Fetches the collection and renders it; returns the number of rows.
    /// On failure the previously rendered table is left alone.
    pub async fn refresh_list(&self) -> Result<usize, ControllerError> {
        self.view.hide_error();
        let fetched = {
            let _loading = LoadingGuard::acquire(&self.view);
            self.store.list().await
        };
        let contacts = fetched.map_err(|source| {
            self.surface(ControllerError::Load {
                context: LOAD_CONTACTS_FAILED,
                source,
            })
        })?;

        self.view.render_contacts(&contacts);
        Ok(contacts.len())
    }

    // The mutation already succeeded; a failed reload is surfaced on its own.
    async fn reload_after_mutation(&self) {
        if let Err(err) = self.refresh_list().await {
            debug!(error = %err, "reload after mutation failed");
        }
    }

    fn reset_form(&mut self) {
        self.session.reset();
        self.view.clear_form();
        self.view.apply_affordances(self.session.mode().affordances());
    }

    fn surface(&self, err: ControllerError) -> ControllerError {
        warn!(kind = ?err.kind(), error = %err, "contact operation failed");
        self.view.show_error(&err.message());
        err
    }
}

#[cfg(test)]
#[path = "tests/controller_tests.rs"]
mod tests;

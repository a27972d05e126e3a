//! In-memory store and recording UI shared by the controller test suites.

use std::sync::{
    atomic::{AtomicBool, Ordering},
    Mutex,
};

use async_trait::async_trait;
use shared::domain::{Contact, ContactDraft, ContactId};

use crate::{
    error::StoreError,
    session::FormAffordances,
    store::ContactsRemoteStore,
    view::{ConfirmPrompt, ContactFormView, ContactsListView, StatusView},
};

pub fn contact(id: i64, name: &str, phone: &str, email: Option<&str>) -> Contact {
    Contact {
        id: ContactId(id),
        name: name.to_string(),
        phone: phone.to_string(),
        email: email.map(str::to_string),
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreCall {
    List,
    Create(ContactDraft),
    Update(ContactId, ContactDraft),
    Delete(ContactId),
}

pub struct FakeStore {
    contacts: Mutex<Vec<Contact>>,
    calls: Mutex<Vec<StoreCall>>,
    fail_with: Mutex<Option<String>>,
    next_id: Mutex<i64>,
}

impl FakeStore {
    pub fn with_contacts(contacts: Vec<Contact>) -> Self {
        let next_id = contacts.iter().map(|c| c.id.0).max().unwrap_or(0) + 1;
        Self {
            contacts: Mutex::new(contacts),
            calls: Mutex::new(Vec::new()),
            fail_with: Mutex::new(None),
            next_id: Mutex::new(next_id),
        }
    }

    pub fn fail_with(&self, message: Option<&str>) {
        *self.fail_with.lock().expect("fail_with") = message.map(str::to_string);
    }

    pub fn calls(&self) -> Vec<StoreCall> {
        self.calls.lock().expect("calls").clone()
    }

    pub fn contacts(&self) -> Vec<Contact> {
        self.contacts.lock().expect("contacts").clone()
    }

    pub fn remove_silently(&self, id: ContactId) {
        self.contacts.lock().expect("contacts").retain(|c| c.id != id);
    }

    fn record(&self, call: StoreCall) -> Result<(), StoreError> {
        self.calls.lock().expect("calls").push(call);
        match self.fail_with.lock().expect("fail_with").clone() {
            Some(message) => Err(StoreError::Rejected { message }),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl ContactsRemoteStore for FakeStore {
    async fn list(&self) -> Result<Vec<Contact>, StoreError> {
        self.record(StoreCall::List)?;
        Ok(self.contacts())
    }

    async fn create(&self, draft: &ContactDraft) -> Result<(), StoreError> {
        self.record(StoreCall::Create(draft.clone()))?;
        let mut next_id = self.next_id.lock().expect("next_id");
        let email = (!draft.email.is_empty()).then(|| draft.email.clone());
        self.contacts.lock().expect("contacts").push(Contact {
            id: ContactId(*next_id),
            name: draft.name.clone(),
            phone: draft.phone.clone(),
            email,
        });
        *next_id += 1;
        Ok(())
    }

    async fn update(&self, id: ContactId, draft: &ContactDraft) -> Result<(), StoreError> {
        self.record(StoreCall::Update(id, draft.clone()))?;
        let mut contacts = self.contacts.lock().expect("contacts");
        let Some(existing) = contacts.iter_mut().find(|c| c.id == id) else {
            return Err(StoreError::Rejected {
                message: "contact not found".into(),
            });
        };
        existing.name = draft.name.clone();
        existing.phone = draft.phone.clone();
        existing.email = Some(draft.email.clone());
        Ok(())
    }

    async fn delete(&self, id: ContactId) -> Result<(), StoreError> {
        self.record(StoreCall::Delete(id))?;
        self.remove_silently(id);
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiCall {
    Render(Vec<Contact>),
    Fill(ContactDraft),
    Clear,
    Affordances(FormAffordances),
    Loading(bool),
    ShowError(String),
    HideError,
    Confirm(String),
}

pub struct RecordingUi {
    calls: Mutex<Vec<UiCall>>,
    confirm_answer: AtomicBool,
}

impl RecordingUi {
    pub fn new() -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            confirm_answer: AtomicBool::new(true),
        }
    }

    pub fn answer_confirm(&self, answer: bool) {
        self.confirm_answer.store(answer, Ordering::SeqCst);
    }

    pub fn calls(&self) -> Vec<UiCall> {
        self.calls.lock().expect("ui calls").clone()
    }

    pub fn clear_calls(&self) {
        self.calls.lock().expect("ui calls").clear();
    }

    /// Current form contents as the UI would display them.
    pub fn form(&self) -> ContactDraft {
        let mut form = ContactDraft::default();
        for call in self.calls() {
            match call {
                UiCall::Fill(draft) => form = draft,
                UiCall::Clear => form = ContactDraft::default(),
                _ => {}
            }
        }
        form
    }

    /// Visible error text, if any.
    pub fn error(&self) -> Option<String> {
        let mut error = None;
        for call in self.calls() {
            match call {
                UiCall::ShowError(message) => error = Some(message),
                UiCall::HideError => error = None,
                _ => {}
            }
        }
        error
    }

    pub fn affordances(&self) -> Option<FormAffordances> {
        self.calls().into_iter().rev().find_map(|call| match call {
            UiCall::Affordances(affordances) => Some(affordances),
            _ => None,
        })
    }

    pub fn renders(&self) -> Vec<Vec<Contact>> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                UiCall::Render(contacts) => Some(contacts),
                _ => None,
            })
            .collect()
    }

    pub fn loading_calls(&self) -> Vec<bool> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                UiCall::Loading(on) => Some(on),
                _ => None,
            })
            .collect()
    }

    fn push(&self, call: UiCall) {
        self.calls.lock().expect("ui calls").push(call);
    }
}

impl ContactsListView for RecordingUi {
    fn render_contacts(&self, contacts: &[Contact]) {
        self.push(UiCall::Render(contacts.to_vec()));
    }
}

impl ContactFormView for RecordingUi {
    fn fill_form(&self, draft: &ContactDraft) {
        self.push(UiCall::Fill(draft.clone()));
    }

    fn clear_form(&self) {
        self.push(UiCall::Clear);
    }

    fn apply_affordances(&self, affordances: FormAffordances) {
        self.push(UiCall::Affordances(affordances));
    }
}

impl StatusView for RecordingUi {
    fn set_loading(&self, loading: bool) {
        self.push(UiCall::Loading(loading));
    }

    fn show_error(&self, message: &str) {
        self.push(UiCall::ShowError(message.to_string()));
    }

    fn hide_error(&self) {
        self.push(UiCall::HideError);
    }
}

#[async_trait]
impl ConfirmPrompt for RecordingUi {
    async fn confirm(&self, prompt: &str) -> bool {
        self.push(UiCall::Confirm(prompt.to_string()));
        self.confirm_answer.load(Ordering::SeqCst)
    }
}

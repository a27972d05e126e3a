//! Contact form controller and the remote store it reconciles against.

pub mod controller;
pub mod error;
pub mod html;
pub mod session;
pub mod settings;
pub mod store;
pub mod view;

pub use controller::{ContactFormController, DeleteOutcome, EditOutcome, SubmitOutcome};
pub use error::{ControllerError, ErrorKind, StoreError};
pub use session::{EditMode, EditSession, FormAffordances};
pub use settings::{load_settings, ClientSettings};
pub use store::{ContactsRemoteStore, HttpContactsStore};
pub use view::{ConfirmPrompt, ContactFormView, ContactsListView, ContactsUi, LoadingGuard, StatusView};

#[cfg(test)]
#[path = "tests/support.rs"]
mod test_support;

#[cfg(test)]
#[path = "tests/http_store_tests.rs"]
mod http_store_tests;

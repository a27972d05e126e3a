//! UI surfaces the form controller drives. Each front end implements these;
//! methods take `&self` so a loading guard can hold the view while the
//! controller mutates its session.

use async_trait::async_trait;
use shared::domain::{Contact, ContactDraft};

use crate::session::FormAffordances;

/// Renders the contact table, or the empty-state indicator for an empty slice.
pub trait ContactsListView: Send + Sync {
    fn render_contacts(&self, contacts: &[Contact]);
}

pub trait ContactFormView: Send + Sync {
    fn fill_form(&self, draft: &ContactDraft);
    fn clear_form(&self);
    fn apply_affordances(&self, affordances: FormAffordances);
}

pub trait StatusView: Send + Sync {
    fn set_loading(&self, loading: bool);
    fn show_error(&self, message: &str);
    fn hide_error(&self);
}

#[async_trait]
pub trait ConfirmPrompt: Send + Sync {
    async fn confirm(&self, prompt: &str) -> bool;
}

pub trait ContactsUi: ContactsListView + ContactFormView + StatusView + ConfirmPrompt {}

impl<T> ContactsUi for T where T: ContactsListView + ContactFormView + StatusView + ConfirmPrompt {}

/// Shows the loading indicator until dropped.
pub struct LoadingGuard<'a, V: StatusView + ?Sized> {
    view: &'a V,
}

impl<'a, V: StatusView + ?Sized> LoadingGuard<'a, V> {
    pub fn acquire(view: &'a V) -> Self {
        view.set_loading(true);
        Self { view }
    }
}

impl<V: StatusView + ?Sized> Drop for LoadingGuard<'_, V> {
    fn drop(&mut self) {
        self.view.set_loading(false);
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use super::*;

    #[derive(Default)]
    struct LoadingLog(Mutex<Vec<bool>>);

    impl StatusView for LoadingLog {
        fn set_loading(&self, loading: bool) {
            self.0.lock().expect("log").push(loading);
        }

        fn show_error(&self, _message: &str) {}

        fn hide_error(&self) {}
    }

    fn failing_step(view: &LoadingLog) -> Result<(), &'static str> {
        let _guard = LoadingGuard::acquire(view);
        Err("boom")
    }

    #[test]
    fn loading_guard_releases_on_error_path() {
        let view = LoadingLog::default();
        assert!(failing_step(&view).is_err());
        assert_eq!(*view.0.lock().expect("log"), vec![true, false]);
    }
}

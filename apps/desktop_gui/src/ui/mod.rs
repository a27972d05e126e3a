//! UI layer for desktop GUI: app shell with form, table and dialogs.

pub mod app;

pub use app::{DesktopGuiApp, PersistedGuiSettings, SETTINGS_STORAGE_KEY};

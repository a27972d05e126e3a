use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::Context;
use serde::Deserialize;

pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:5000";
pub const SETTINGS_FILE: &str = "contacts.toml";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ClientSettings {
    pub base_url: String,
    pub request_timeout_secs: Option<u64>,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.into(),
            request_timeout_secs: None,
        }
    }
}

/// Defaults, then `contacts.toml` (or `CONTACTS_CONFIG`), then environment.
pub fn load_settings() -> anyhow::Result<ClientSettings> {
    let path = std::env::var("CONTACTS_CONFIG")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(SETTINGS_FILE));
    load_settings_with(&path, |name| std::env::var(name).ok())
}

pub fn load_settings_with(
    path: &Path,
    env: impl Fn(&str) -> Option<String>,
) -> anyhow::Result<ClientSettings> {
    let mut settings = match fs::read_to_string(path) {
        Ok(raw) => toml::from_str::<ClientSettings>(&raw)
            .with_context(|| format!("failed to parse settings file '{}'", path.display()))?,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => ClientSettings::default(),
        Err(err) => {
            return Err(err)
                .with_context(|| format!("failed to read settings file '{}'", path.display()))
        }
    };

    if let Some(v) = env("CONTACTS_BASE_URL") {
        settings.base_url = v;
    }
    if let Some(v) = env("APP__BASE_URL") {
        settings.base_url = v;
    }

    if let Some(v) = env("APP__REQUEST_TIMEOUT_SECS") {
        let parsed = v
            .trim()
            .parse::<u64>()
            .with_context(|| format!("APP__REQUEST_TIMEOUT_SECS is not a number: '{v}'"))?;
        settings.request_timeout_secs = Some(parsed);
    }

    Ok(settings)
}

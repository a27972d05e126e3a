mod backend_bridge;
mod controller;
mod ui;

use anyhow::Context;
use clap::Parser;
use client_core::load_settings;
use crossbeam_channel::bounded;
use eframe::egui;
use tracing_subscriber::EnvFilter;

use backend_bridge::commands::BackendCommand;
use controller::events::UiEvent;
use ui::{DesktopGuiApp, PersistedGuiSettings, SETTINGS_STORAGE_KEY};

#[derive(Parser, Debug)]
struct Args {
    /// Overrides the saved and configured server URL.
    #[arg(long)]
    server_url: Option<String>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();
    let args = Args::parse();
    let configured = load_settings().context("failed to load client settings")?;

    let (cmd_tx, cmd_rx) = bounded::<BackendCommand>(256);
    let (ui_tx, ui_rx) = bounded::<UiEvent>(2048);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Contacts")
            .with_inner_size([960.0, 600.0])
            .with_min_inner_size([720.0, 420.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Contacts",
        options,
        Box::new(move |cc| {
            let persisted = cc.storage.and_then(|storage| {
                storage
                    .get_string(SETTINGS_STORAGE_KEY)
                    .and_then(|text| serde_json::from_str::<PersistedGuiSettings>(&text).ok())
            });
            let mut settings = configured;
            if let Some(server_url) = args
                .server_url
                .or_else(|| persisted.and_then(|p| p.server_url))
            {
                settings.base_url = server_url;
            }
            let server_url = settings.base_url.clone();
            backend_bridge::runtime::launch(cmd_rx, ui_tx, settings);
            Ok(Box::new(DesktopGuiApp::new(cmd_tx, ui_rx, server_url)))
        }),
    )
    .map_err(|err| anyhow::anyhow!("failed to run desktop window: {err}"))
}

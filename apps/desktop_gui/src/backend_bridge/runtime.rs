//! Runtime bridge between UI command queue and backend event intake.

use std::thread;

use client_core::{ClientSettings, ContactFormController, HttpContactsStore};
use crossbeam_channel::{Receiver, Sender};

use crate::backend_bridge::{commands::BackendCommand, surface::ChannelUi};
use crate::controller::events::{UiError, UiEvent};

type Controller = ContactFormController<HttpContactsStore, ChannelUi>;

pub fn launch(cmd_rx: Receiver<BackendCommand>, ui_tx: Sender<UiEvent>, settings: ClientSettings) {
    thread::spawn(move || {
        let runtime = match tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()
        {
            Ok(runtime) => runtime,
            Err(err) => {
                let _ = ui_tx.try_send(UiEvent::Error(UiError::from_message(format!(
                    "backend worker startup failure: failed to build runtime: {err}"
                ))));
                tracing::error!("failed to build backend runtime: {err}");
                return;
            }
        };

        runtime.block_on(async move {
            let mut settings = settings;
            let mut controller = connect(&settings, &ui_tx).await;

            // Commands run one at a time; nothing guards against a repeated submit.
            while let Ok(cmd) = cmd_rx.recv() {
                tracing::debug!(command = cmd.name(), "backend command");
                let cmd = match cmd {
                    BackendCommand::Connect { server_url } => {
                        settings.base_url = server_url;
                        controller = connect(&settings, &ui_tx).await;
                        continue;
                    }
                    other => other,
                };

                let Some(active) = controller.as_mut() else {
                    let _ = ui_tx.try_send(UiEvent::Error(UiError::from_message(
                        "no contacts server connected; check the server URL",
                    )));
                    continue;
                };
                // Failures have already been shown through the UI surface.
                let _ = run_command(active, cmd).await;
            }
            tracing::info!("ui command channel closed; backend worker exiting");
        });
    });
}

/// Builds a controller for the configured server and loads its list.
async fn connect(settings: &ClientSettings, ui_tx: &Sender<UiEvent>) -> Option<Controller> {
    match HttpContactsStore::from_settings(settings) {
        Ok(store) => {
            let _ = ui_tx.try_send(UiEvent::Info(format!("Server: {}", store.base_url())));
            let controller = ContactFormController::new(store, ChannelUi::new(ui_tx.clone()));
            let _ = controller.refresh_list().await;
            Some(controller)
        }
        Err(err) => {
            tracing::warn!("invalid server settings: {err}");
            let _ = ui_tx.try_send(UiEvent::Error(UiError::from_message(err.to_string())));
            None
        }
    }
}

async fn run_command(
    controller: &mut Controller,
    cmd: BackendCommand,
) -> Result<(), client_core::ControllerError> {
    match cmd {
        BackendCommand::Connect { .. } => {}
        BackendCommand::RefreshList => {
            controller.refresh_list().await?;
        }
        BackendCommand::Submit { fields } => {
            controller.submit(fields).await?;
        }
        BackendCommand::BeginEdit { id } => {
            controller.begin_edit(id).await?;
        }
        BackendCommand::CancelEdit => controller.cancel_edit(),
        BackendCommand::Delete { id } => {
            controller.delete_contact(id).await?;
        }
    }
    Ok(())
}

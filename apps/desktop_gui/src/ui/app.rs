use crossbeam_channel::{Receiver, Sender};
use eframe::egui;
use serde::{Deserialize, Serialize};
use shared::domain::{Contact, ContactDraft, ContactId};
use tokio::sync::oneshot;

use client_core::{html::EMPTY_STATE_TEXT, EditMode, FormAffordances};

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::{
    events::{UiError, UiErrorCategory, UiEvent},
    orchestration::dispatch_backend_command,
};

pub const SETTINGS_STORAGE_KEY: &str = "contacts_desk_settings";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PersistedGuiSettings {
    #[serde(default)]
    pub server_url: Option<String>,
}

/// Per-row action, keyed by the contact it was rendered for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RowAction {
    Edit(ContactId),
    Delete(ContactId),
}

impl RowAction {
    fn into_command(self) -> BackendCommand {
        match self {
            Self::Edit(id) => BackendCommand::BeginEdit { id },
            Self::Delete(id) => BackendCommand::Delete { id },
        }
    }
}

struct PendingConfirm {
    prompt: String,
    reply: oneshot::Sender<bool>,
}

pub struct DesktopGuiApp {
    cmd_tx: Sender<BackendCommand>,
    ui_rx: Receiver<UiEvent>,

    server_url: String,
    form: ContactDraft,
    affordances: FormAffordances,
    /// `None` until the first successful load.
    contacts: Option<Vec<Contact>>,
    loading: bool,
    error: Option<UiError>,
    pending_confirm: Option<PendingConfirm>,
    status: String,
}

impl DesktopGuiApp {
    pub fn new(cmd_tx: Sender<BackendCommand>, ui_rx: Receiver<UiEvent>, server_url: String) -> Self {
        Self {
            cmd_tx,
            ui_rx,
            server_url,
            form: ContactDraft::default(),
            affordances: EditMode::Creating.affordances(),
            contacts: None,
            loading: false,
            error: None,
            pending_confirm: None,
            status: String::new(),
        }
    }

    fn dispatch(&mut self, cmd: BackendCommand) {
        dispatch_backend_command(&self.cmd_tx, cmd, &mut self.status);
    }

    fn process_ui_events(&mut self) {
        while let Ok(event) = self.ui_rx.try_recv() {
            match event {
                UiEvent::Info(message) => self.status = message,
                UiEvent::ContactsRendered(contacts) => self.contacts = Some(contacts),
                UiEvent::FormFilled(draft) => self.form = draft,
                UiEvent::FormCleared => self.form = ContactDraft::default(),
                UiEvent::AffordancesChanged(affordances) => self.affordances = affordances,
                UiEvent::Loading(loading) => self.loading = loading,
                UiEvent::Error(err) => self.error = Some(err),
                UiEvent::ErrorCleared => self.error = None,
                UiEvent::ConfirmRequested { prompt, reply } => {
                    // A newer request replaces an unanswered one, which declines it.
                    self.pending_confirm = Some(PendingConfirm { prompt, reply });
                }
            }
        }
    }

    fn show_server_bar(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("server_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label("Server");
                let response = ui.add(
                    egui::TextEdit::singleline(&mut self.server_url).desired_width(280.0),
                );
                let enter = response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
                if ui.button("Connect").clicked() || enter {
                    let server_url = self.server_url.trim().to_string();
                    self.dispatch(BackendCommand::Connect { server_url });
                }
                if ui.button("Refresh").clicked() {
                    self.dispatch(BackendCommand::RefreshList);
                }
                ui.weak(&self.status);
            });
        });
    }

    fn show_form_panel(&mut self, ctx: &egui::Context) {
        egui::SidePanel::left("contact_form")
            .resizable(false)
            .default_width(300.0)
            .show(ctx, |ui| {
                ui.add_space(8.0);
                ui.heading(self.affordances.title);
                ui.add_space(6.0);

                egui::Grid::new("contact_form_fields")
                    .num_columns(2)
                    .spacing([8.0, 8.0])
                    .show(ui, |ui| {
                        ui.label("Name *");
                        ui.text_edit_singleline(&mut self.form.name);
                        ui.end_row();
                        ui.label("Phone *");
                        ui.text_edit_singleline(&mut self.form.phone);
                        ui.end_row();
                        ui.label("Email");
                        ui.text_edit_singleline(&mut self.form.email);
                        ui.end_row();
                    });

                ui.add_space(8.0);
                ui.horizontal(|ui| {
                    if ui.button(self.affordances.submit_label).clicked() {
                        let fields = self.form.clone();
                        self.dispatch(BackendCommand::Submit { fields });
                    }
                    if self.affordances.cancel_visible && ui.button("Cancel").clicked() {
                        self.dispatch(BackendCommand::CancelEdit);
                    }
                });
            });
    }

    fn show_contacts(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Contacts");

            if let Some(err) = &self.error {
                let color = match err.category() {
                    UiErrorCategory::Validation => egui::Color32::from_rgb(230, 160, 40),
                    UiErrorCategory::Transport
                    | UiErrorCategory::Server
                    | UiErrorCategory::Unknown => egui::Color32::from_rgb(220, 70, 70),
                };
                ui.colored_label(color, err.message());
                if let Some(hint) = err.hint() {
                    ui.weak(hint);
                }
            }

            if self.loading {
                ui.horizontal(|ui| {
                    ui.spinner();
                    ui.label("Loading...");
                });
            }

            let Some(contacts) = &self.contacts else {
                return;
            };
            if contacts.is_empty() {
                ui.label(EMPTY_STATE_TEXT);
                return;
            }

            let mut action = None;
            egui::ScrollArea::vertical().show(ui, |ui| {
                egui::Grid::new("contacts_table")
                    .striped(true)
                    .num_columns(4)
                    .spacing([16.0, 6.0])
                    .show(ui, |ui| {
                        ui.strong("Name");
                        ui.strong("Phone");
                        ui.strong("Email");
                        ui.strong("Actions");
                        ui.end_row();

                        for contact in contacts {
                            ui.label(&contact.name);
                            ui.label(&contact.phone);
                            ui.label(contact.email_text());
                            ui.horizontal(|ui| {
                                if ui.button("Edit").clicked() {
                                    action = Some(RowAction::Edit(contact.id));
                                }
                                if ui.button("Delete").clicked() {
                                    action = Some(RowAction::Delete(contact.id));
                                }
                            });
                            ui.end_row();
                        }
                    });
            });

            if let Some(action) = action {
                dispatch_backend_command(&self.cmd_tx, action.into_command(), &mut self.status);
            }
        });
    }

    fn show_confirm_dialog(&mut self, ctx: &egui::Context) {
        let Some(pending) = &self.pending_confirm else {
            return;
        };

        let mut answer = None;
        egui::Window::new("Confirm")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.label(&pending.prompt);
                ui.horizontal(|ui| {
                    if ui.button("Yes").clicked() {
                        answer = Some(true);
                    }
                    if ui.button("No").clicked() {
                        answer = Some(false);
                    }
                });
            });

        if let Some(answer) = answer {
            if let Some(pending) = self.pending_confirm.take() {
                let _ = pending.reply.send(answer);
            }
        }
    }
}

impl eframe::App for DesktopGuiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.process_ui_events();

        self.show_server_bar(ctx);
        self.show_form_panel(ctx);
        self.show_contacts(ctx);
        self.show_confirm_dialog(ctx);

        ctx.request_repaint_after(std::time::Duration::from_millis(100));
    }

    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        let settings = PersistedGuiSettings {
            server_url: Some(self.server_url.clone()),
        };
        if let Ok(serialized) = serde_json::to_string(&settings) {
            storage.set_string(SETTINGS_STORAGE_KEY, serialized);
        }
    }
}

#[cfg(test)]
mod tests {
    use crossbeam_channel::bounded;

    use super::*;

    fn app() -> (DesktopGuiApp, Sender<UiEvent>, Receiver<BackendCommand>) {
        let (cmd_tx, cmd_rx) = bounded(16);
        let (ui_tx, ui_rx) = bounded(16);
        (
            DesktopGuiApp::new(cmd_tx, ui_rx, "http://127.0.0.1:5000".into()),
            ui_tx,
            cmd_rx,
        )
    }

    #[test]
    fn ui_events_update_form_and_mode() {
        let (mut app, ui_tx, _cmd_rx) = app();
        ui_tx
            .send(UiEvent::FormFilled(ContactDraft::new("A", "111", "")))
            .expect("send");
        ui_tx
            .send(UiEvent::AffordancesChanged(
                EditMode::Editing(ContactId(1)).affordances(),
            ))
            .expect("send");
        app.process_ui_events();

        assert_eq!(app.form, ContactDraft::new("A", "111", ""));
        assert_eq!(app.affordances.title, "Edit Contact");

        ui_tx.send(UiEvent::FormCleared).expect("send");
        app.process_ui_events();
        assert_eq!(app.form, ContactDraft::default());
    }

    #[test]
    fn error_events_toggle_banner_without_touching_table() {
        let (mut app, ui_tx, _cmd_rx) = app();
        ui_tx
            .send(UiEvent::ContactsRendered(vec![Contact {
                id: ContactId(1),
                name: "A".into(),
                phone: "111".into(),
                email: None,
            }]))
            .expect("send");
        ui_tx
            .send(UiEvent::Error(UiError::from_message(
                "Failed to load contacts: db down",
            )))
            .expect("send");
        app.process_ui_events();

        assert!(app.error.as_ref().expect("error").message().contains("db down"));
        assert_eq!(app.contacts.as_ref().map(Vec::len), Some(1));

        ui_tx.send(UiEvent::ErrorCleared).expect("send");
        app.process_ui_events();
        assert!(app.error.is_none());
    }

    #[test]
    fn row_actions_carry_their_contact_id() {
        let (mut app, _ui_tx, cmd_rx) = app();
        app.dispatch(RowAction::Delete(ContactId(9)).into_command());

        match cmd_rx.try_recv() {
            Ok(BackendCommand::Delete { id }) => assert_eq!(id, ContactId(9)),
            _ => panic!("expected delete command"),
        }
    }

    #[test]
    fn replaced_confirmation_declines_previous_request() {
        let (mut app, ui_tx, _cmd_rx) = app();
        let (first_reply, mut first_answer) = oneshot::channel();
        let (second_reply, _second_answer) = oneshot::channel();
        ui_tx
            .send(UiEvent::ConfirmRequested {
                prompt: "first".into(),
                reply: first_reply,
            })
            .expect("send");
        ui_tx
            .send(UiEvent::ConfirmRequested {
                prompt: "second".into(),
                reply: second_reply,
            })
            .expect("send");
        app.process_ui_events();

        assert_eq!(
            app.pending_confirm.as_ref().map(|p| p.prompt.as_str()),
            Some("second")
        );
        assert!(first_answer.try_recv().is_err());
    }
}

//! Terminal rendering of the contact form and table.

use std::{
    io::{self, Write},
    sync::Mutex,
};

use async_trait::async_trait;
use client_core::{
    html::{render_contacts_table, EMPTY_STATE_TEXT},
    ConfirmPrompt, ContactFormView, ContactsListView, FormAffordances, StatusView,
};
use shared::domain::{Contact, ContactDraft};
use tokio::io::{AsyncBufReadExt, BufReader};

pub struct TerminalUi {
    html: bool,
    assume_yes: bool,
    form: Mutex<ContactDraft>,
}

impl TerminalUi {
    pub fn new(html: bool, assume_yes: bool) -> Self {
        Self {
            html,
            assume_yes,
            form: Mutex::new(ContactDraft::default()),
        }
    }

    /// Values currently loaded into the form.
    pub fn form(&self) -> ContactDraft {
        self.form
            .lock()
            .map(|form| form.clone())
            .unwrap_or_default()
    }

    fn set_form(&self, draft: ContactDraft) {
        if let Ok(mut form) = self.form.lock() {
            *form = draft;
        }
    }
}

impl ContactsListView for TerminalUi {
    fn render_contacts(&self, contacts: &[Contact]) {
        let rendered = if self.html {
            render_contacts_table(contacts)
        } else {
            format_table(contacts)
        };
        print!("{rendered}");
        let _ = io::stdout().flush();
    }
}

impl ContactFormView for TerminalUi {
    fn fill_form(&self, draft: &ContactDraft) {
        self.set_form(draft.clone());
    }

    fn clear_form(&self) {
        self.set_form(ContactDraft::default());
    }

    fn apply_affordances(&self, affordances: FormAffordances) {
        tracing::debug!(title = affordances.title, "form mode");
    }
}

impl StatusView for TerminalUi {
    fn set_loading(&self, loading: bool) {
        if loading {
            eprintln!("Loading...");
        }
    }

    fn show_error(&self, message: &str) {
        eprintln!("error: {message}");
    }

    fn hide_error(&self) {}
}

#[async_trait]
impl ConfirmPrompt for TerminalUi {
    async fn confirm(&self, prompt: &str) -> bool {
        if self.assume_yes {
            return true;
        }
        eprint!("{prompt} [y/N] ");
        let _ = io::stderr().flush();

        let mut line = String::new();
        let mut stdin = BufReader::new(tokio::io::stdin());
        match stdin.read_line(&mut line).await {
            Ok(_) => is_yes(&line),
            Err(err) => {
                tracing::warn!("failed to read confirmation: {err}");
                false
            }
        }
    }
}

fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}

pub fn format_table(contacts: &[Contact]) -> String {
    if contacts.is_empty() {
        return format!("{EMPTY_STATE_TEXT}\n");
    }

    let header = ["ID", "Name", "Phone", "Email"];
    let rows: Vec<[String; 4]> = contacts
        .iter()
        .map(|c| {
            [
                c.id.to_string(),
                c.name.clone(),
                c.phone.clone(),
                c.email_text().to_string(),
            ]
        })
        .collect();

    let mut widths = header.map(|h| h.chars().count());
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    let mut push_row = |cells: [&str; 4]| {
        let line = cells
            .iter()
            .zip(widths)
            .map(|(cell, width)| format!("{cell:<width$}"))
            .collect::<Vec<_>>()
            .join("  ");
        out.push_str(line.trim_end());
        out.push('\n');
    };
    push_row(header);
    for row in &rows {
        push_row([&row[0], &row[1], &row[2], &row[3]]);
    }
    out
}

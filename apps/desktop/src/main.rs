use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use client_core::{load_settings, ContactFormController, EditOutcome, HttpContactsStore};
use shared::domain::{ContactDraft, ContactId};
use tracing_subscriber::EnvFilter;

mod terminal;

use terminal::TerminalUi;

#[derive(Parser, Debug)]
#[command(name = "contacts", about = "Manage contacts on a contacts server")]
struct Args {
    /// Overrides `base_url` from contacts.toml / environment.
    #[arg(long, global = true)]
    server_url: Option<String>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List all contacts.
    List {
        #[arg(long)]
        html: bool,
    },
    /// Create a contact.
    Add {
        #[arg(long)]
        name: String,
        #[arg(long)]
        phone: String,
        #[arg(long, default_value = "")]
        email: String,
    },
    /// Load a contact and update the given fields.
    Edit {
        id: i64,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        phone: Option<String>,
        #[arg(long)]
        email: Option<String>,
    },
    /// Delete a contact after confirmation.
    Delete {
        id: i64,
        #[arg(long)]
        yes: bool,
    },
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();
    let args = Args::parse();

    let mut settings = load_settings()?;
    if let Some(server_url) = args.server_url {
        settings.base_url = server_url;
    }
    let store = HttpContactsStore::from_settings(&settings)
        .with_context(|| format!("cannot use server url '{}'", settings.base_url))?;

    let (html, assume_yes) = match &args.command {
        Command::List { html } => (*html, false),
        Command::Delete { yes, .. } => (false, *yes),
        _ => (false, false),
    };
    let mut controller = ContactFormController::new(store, TerminalUi::new(html, assume_yes));

    let ok = match args.command {
        Command::List { .. } => controller.refresh_list().await.is_ok(),
        Command::Add { name, phone, email } => controller
            .submit(ContactDraft { name, phone, email })
            .await
            .is_ok(),
        Command::Edit {
            id,
            name,
            phone,
            email,
        } => match controller.begin_edit(ContactId(id)).await {
            Ok(EditOutcome::Loaded(_)) => {
                let mut draft = controller.view().form();
                if let Some(name) = name {
                    draft.name = name;
                }
                if let Some(phone) = phone {
                    draft.phone = phone;
                }
                if let Some(email) = email {
                    draft.email = email;
                }
                controller.submit(draft).await.is_ok()
            }
            Ok(EditOutcome::NotFound) => {
                eprintln!("contact {id} not found");
                false
            }
            Err(_) => false,
        },
        Command::Delete { id, .. } => controller.delete_contact(ContactId(id)).await.is_ok(),
    };

    Ok(if ok {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

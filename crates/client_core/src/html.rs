//! HTML rendering of the contact table.

use std::fmt::Write as _;

use shared::domain::Contact;

pub const EMPTY_STATE_TEXT: &str = "No contacts yet";

pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

/// One row per contact with edit/delete buttons keyed by `data-contact-id`,
/// or the empty-state paragraph when there are none.
pub fn render_contacts_table(contacts: &[Contact]) -> String {
    if contacts.is_empty() {
        return format!("<p class=\"empty-message\">{EMPTY_STATE_TEXT}</p>\n");
    }

    let mut out = String::from(
        "<table class=\"contacts-table\">\n<thead><tr><th>Name</th><th>Phone</th><th>Email</th><th>Actions</th></tr></thead>\n<tbody>\n",
    );
    for contact in contacts {
        let _ = writeln!(
            out,
            "<tr><td>{}</td><td>{}</td><td>{}</td><td class=\"action-buttons\">\
             <button class=\"edit-btn\" data-contact-id=\"{id}\">Edit</button>\
             <button class=\"delete-btn\" data-contact-id=\"{id}\">Delete</button></td></tr>",
            escape_html(&contact.name),
            escape_html(&contact.phone),
            escape_html(contact.email_text()),
            id = contact.id,
        );
    }
    out.push_str("</tbody>\n</table>\n");
    out
}

use shared::domain::ContactId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditMode {
    #[default]
    Creating,
    Editing(ContactId),
}

/// Labels and visibility the form shows for a given mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormAffordances {
    pub title: &'static str,
    pub submit_label: &'static str,
    pub cancel_visible: bool,
}

impl EditMode {
    pub fn affordances(self) -> FormAffordances {
        match self {
            Self::Creating => FormAffordances {
                title: "Add New Contact",
                submit_label: "Add Contact",
                cancel_visible: false,
            },
            Self::Editing(_) => FormAffordances {
                title: "Edit Contact",
                submit_label: "Update Contact",
                cancel_visible: true,
            },
        }
    }
}

/// Client-local edit state. Only the controller mutates it.
#[derive(Debug, Clone, Default)]
pub struct EditSession {
    mode: EditMode,
}

impl EditSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(&self) -> EditMode {
        self.mode
    }

    pub fn editing_id(&self) -> Option<ContactId> {
        match self.mode {
            EditMode::Creating => None,
            EditMode::Editing(id) => Some(id),
        }
    }

    pub fn is_editing(&self) -> bool {
        self.editing_id().is_some()
    }

    pub(crate) fn begin(&mut self, id: ContactId) {
        self.mode = EditMode::Editing(id);
    }

    pub(crate) fn reset(&mut self) {
        self.mode = EditMode::Creating;
    }
}

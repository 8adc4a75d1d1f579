use crate::client::models::user::UserRecord;

/// Input of the record form, addressed by the same names the inputs carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Id,
    Name,
    Email,
}

impl FormField {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "id" => Some(FormField::Id),
            "name" => Some(FormField::Name),
            "email" => Some(FormField::Email),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            FormField::Id => "id",
            FormField::Name => "name",
            FormField::Email => "email",
        }
    }
}

/// What the parent has to do with a submitted draft.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormIntent {
    Create(UserRecord),
    Update(UserRecord),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserFormState {
    pub draft: UserRecord,
    pub is_editing: bool,
}

impl UserFormState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads `user` into the form, replacing whatever was typed so far.
    pub fn set_edit_target(&mut self, user: &UserRecord) {
        self.draft = user.clone();
        self.is_editing = true;
    }

    pub fn field_changed(&mut self, field: FormField, value: String) {
        match field {
            FormField::Id => self.draft.id = value,
            FormField::Name => self.draft.name = value,
            FormField::Email => self.draft.email = value,
        }
    }

    /// Same as [`field_changed`](Self::field_changed) but keyed by input name.
    /// Unknown names are ignored.
    pub fn named_field_changed(&mut self, name: &str, value: String) {
        if let Some(field) = FormField::from_name(name) {
            self.field_changed(field, value);
        }
    }

    pub fn value(&self, field: FormField) -> &str {
        match field {
            FormField::Id => &self.draft.id,
            FormField::Name => &self.draft.name,
            FormField::Email => &self.draft.email,
        }
    }

    /// Every input is required.
    pub fn is_complete(&self) -> bool {
        !self.draft.id.is_empty() && !self.draft.name.is_empty() && !self.draft.email.is_empty()
    }

    pub fn submit_label(&self) -> &'static str {
        if self.is_editing { "Update User" } else { "Add User" }
    }

    /// Turns the draft into an intent and resets the form. The reset does not
    /// wait for the parent to act on the intent.
    pub fn submit(&mut self) -> FormIntent {
        let user = std::mem::take(&mut self.draft);
        let intent = if self.is_editing {
            FormIntent::Update(user)
        } else {
            FormIntent::Create(user)
        };
        self.is_editing = false;
        intent
    }
}

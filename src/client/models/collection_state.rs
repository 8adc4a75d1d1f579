use crate::client::models::errors::OperationFailure;
use crate::client::models::user::UserRecord;

/// Outcome of an operation on the collection, fed to [`CollectionState::reduce`].
#[derive(Debug, Clone, PartialEq)]
pub enum UserAction {
    Loaded(Vec<UserRecord>),
    LoadFailed,
    Created(UserRecord),
    Deleted(String),
    DeleteFailed,
    EditSelected(UserRecord),
    Updated(UserRecord),
    UpdateFailed,
}

impl UserAction {
    pub fn name(&self) -> &'static str {
        match self {
            UserAction::Loaded(_) => "load",
            UserAction::LoadFailed => "load_failed",
            UserAction::Created(_) => "create",
            UserAction::Deleted(_) => "delete",
            UserAction::DeleteFailed => "delete_failed",
            UserAction::EditSelected(_) => "edit",
            UserAction::Updated(_) => "update",
            UserAction::UpdateFailed => "update_failed",
        }
    }

    pub fn failure(&self) -> Option<OperationFailure> {
        match self {
            UserAction::LoadFailed => Some(OperationFailure::Fetch),
            UserAction::DeleteFailed => Some(OperationFailure::Delete),
            UserAction::UpdateFailed => Some(OperationFailure::Update),
            _ => None,
        }
    }
}

/// Everything the user list view knows: the records in display order, the
/// record loaded into the form (if any) and the last error.
///
/// Never mutated in place; every change goes through [`CollectionState::reduce`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CollectionState {
    users: Vec<UserRecord>,
    user_to_edit: Option<UserRecord>,
    error: Option<String>,
}

impl CollectionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn users(&self) -> &[UserRecord] {
        &self.users
    }

    pub fn user_to_edit(&self) -> Option<&UserRecord> {
        self.user_to_edit.as_ref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn reduce(self, action: UserAction) -> Self {
        if let Some(failure) = action.failure() {
            // Slot singolo: l'ultimo errore sovrascrive il precedente.
            // Collezione e selezione restano invariate.
            return Self {
                error: Some(failure.message().to_string()),
                ..self
            };
        }

        match action {
            UserAction::Loaded(users) => Self { users, ..self },
            UserAction::Created(user) => {
                let mut users = self.users;
                users.push(user);
                Self { users, ..self }
            }
            UserAction::Deleted(id) => Self {
                users: self.users.into_iter().filter(|u| u.id != id).collect(),
                ..self
            },
            UserAction::EditSelected(user) => Self {
                user_to_edit: Some(user),
                ..self
            },
            UserAction::Updated(updated) => Self {
                users: self
                    .users
                    .into_iter()
                    .map(|u| if u.id == updated.id { updated.clone() } else { u })
                    .collect(),
                user_to_edit: None,
                ..self
            },
            UserAction::LoadFailed | UserAction::DeleteFailed | UserAction::UpdateFailed => self,
        }
    }
}

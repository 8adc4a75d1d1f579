use std::future::Future;

use log::debug;

use crate::client::models::collection_state::{CollectionState, UserAction};
use crate::client::models::errors::OperationFailure;
use crate::client::models::user::UserRecord;
use crate::client::services::users_service::UsersService;

/// Owns the users collection shown by the list view and keeps it in sync with
/// the remote endpoint.
///
/// Remote operations come in two flavours:
/// - `*_task` methods return a `'static` future resolving to the [`UserAction`]
///   to apply. The GUI hands these to the runtime and feeds the result back
///   through [`apply`](Self::apply) when it arrives.
/// - `load`, `delete` and `update` await the same future, apply it, and report
///   the outcome to the caller.
///
/// Nothing coordinates overlapping calls: results are applied in whatever
/// order they complete.
#[derive(Debug)]
pub struct UserListController {
    state: CollectionState,
    service: UsersService,
}

impl UserListController {
    /// Builds the controller with an empty collection together with the
    /// initial load, which the caller must run exactly once.
    pub fn init(service: UsersService) -> (Self, impl Future<Output = UserAction> + Send + 'static) {
        let controller = Self {
            state: CollectionState::new(),
            service,
        };
        let initial_load = controller.load_task();
        (controller, initial_load)
    }

    pub fn state(&self) -> &CollectionState {
        &self.state
    }

    pub fn apply(&mut self, action: UserAction) {
        debug!("[CONTROLLER] applying '{}'", action.name());
        let state = std::mem::take(&mut self.state);
        self.state = state.reduce(action);
    }

    pub fn load_task(&self) -> impl Future<Output = UserAction> + Send + 'static {
        let service = self.service.clone();
        async move {
            match service.list().await {
                Ok(users) => UserAction::Loaded(users),
                Err(e) => {
                    debug!("[CONTROLLER] load failed: {:#}", e);
                    UserAction::LoadFailed
                }
            }
        }
    }

    pub fn delete_task(&self, id: String) -> impl Future<Output = UserAction> + Send + 'static {
        let service = self.service.clone();
        async move {
            match service.delete(&id).await {
                Ok(()) => UserAction::Deleted(id),
                Err(e) => {
                    debug!("[CONTROLLER] delete of '{}' failed: {:#}", id, e);
                    UserAction::DeleteFailed
                }
            }
        }
    }

    pub fn update_task(&self, user: UserRecord) -> impl Future<Output = UserAction> + Send + 'static {
        let service = self.service.clone();
        async move {
            match service.update(&user).await {
                Ok(updated) => UserAction::Updated(updated),
                Err(e) => {
                    debug!("[CONTROLLER] update of '{}' failed: {:#}", user.id, e);
                    UserAction::UpdateFailed
                }
            }
        }
    }

    pub async fn load(&mut self) -> Result<(), OperationFailure> {
        let action = self.load_task().await;
        self.finish(action)
    }

    /// Local only: the new record is never sent to the endpoint.
    pub fn create(&mut self, user: UserRecord) {
        self.apply(UserAction::Created(user));
    }

    pub async fn delete(&mut self, id: &str) -> Result<(), OperationFailure> {
        let action = self.delete_task(id.to_string()).await;
        self.finish(action)
    }

    pub fn edit(&mut self, user: UserRecord) {
        self.apply(UserAction::EditSelected(user));
    }

    pub async fn update(&mut self, user: UserRecord) -> Result<(), OperationFailure> {
        let action = self.update_task(user).await;
        self.finish(action)
    }

    fn finish(&mut self, action: UserAction) -> Result<(), OperationFailure> {
        let outcome = match action.failure() {
            Some(failure) => Err(failure),
            None => Ok(()),
        };
        self.apply(action);
        outcome
    }
}

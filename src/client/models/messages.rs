use crate::client::models::collection_state::UserAction;
use crate::client::models::user::UserRecord;

#[derive(Debug, Clone)]
pub enum Message {
    // Record form
    // `name` is the input name: "id", "name" or "email"
    FormInputChanged { name: &'static str, value: String },
    SubmitForm,
    // Row buttons of the user list
    EditUser(UserRecord),
    DeleteUser(String),
    // Result of a remote call, applied by the controller
    UserActionCompleted(UserAction),
}

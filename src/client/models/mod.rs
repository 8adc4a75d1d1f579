pub mod collection_state;
pub mod errors;
pub mod form_state;
pub mod messages;
pub mod user;

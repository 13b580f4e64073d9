pub mod auth;
pub mod documents;
pub mod forms;
pub mod language;

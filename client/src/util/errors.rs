//! Inline messages for failed backend and auth calls.

#[cfg(test)]
#[path = "errors_test.rs"]
mod errors_test;

use contract::{ApiError, AuthError};

use super::i18n::{Language, translate};

/// `NotAuthenticated` asks the user to log in, backend messages are shown
/// verbatim, anything else gets the generic failure text.
pub fn api_error_text(language: Language, error: &ApiError) -> String {
    match error {
        ApiError::NotAuthenticated => translate(language, "error.notAuthenticated").to_owned(),
        ApiError::Backend { message, .. } => message.clone(),
        ApiError::Transport(_) | ApiError::Decode(_) => translate(language, "error.generic").to_owned(),
    }
}

/// Login failures: rejected credentials versus everything else.
pub fn login_error_text(language: Language, error: &AuthError) -> String {
    match error {
        AuthError::InvalidCredentials(_) => translate(language, "login.invalid").to_owned(),
        _ => translate(language, "login.failed").to_owned(),
    }
}

/// Provider message for forms that surface it directly (sign-up, password).
pub fn auth_error_text(language: Language, error: &AuthError) -> String {
    match error {
        AuthError::NotAuthenticated => translate(language, "error.notAuthenticated").to_owned(),
        AuthError::InvalidCredentials(message) | AuthError::Provider { message, .. } => message.clone(),
        AuthError::Transport(_) | AuthError::Decode(_) | AuthError::Storage(_) => {
            translate(language, "error.generic").to_owned()
        }
    }
}

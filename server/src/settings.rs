//! Process settings read from the environment.

#[cfg(test)]
#[path = "settings_test.rs"]
mod settings_test;

use crate::error::ServerError;

pub const DEFAULT_PORT: u16 = 3000;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Settings {
    pub port: u16,
}

impl Settings {
    /// # Errors
    ///
    /// Returns [`ServerError::InvalidPort`] when `PORT` is set but not a port number.
    pub fn from_env() -> Result<Self, ServerError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub(crate) fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ServerError> {
        let port = match lookup("PORT").map(|raw| raw.trim().to_owned()).filter(|raw| !raw.is_empty()) {
            Some(raw) => raw
                .parse()
                .map_err(|source| ServerError::InvalidPort { value: raw, source })?,
            None => DEFAULT_PORT,
        };
        Ok(Self { port })
    }

    pub fn bind_addr(&self) -> String {
        format!("0.0.0.0:{}", self.port)
    }
}

//! Session model shared by the store, the identity providers and the views.
//!
//! DESIGN
//! ======
//! `AuthState` is handed out as an immutable snapshot. `is_authenticated` is
//! derived from the presence of a session and is never stored, so the user id
//! and the bearer token in a snapshot always come from the same provider event.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use serde::{Deserialize, Serialize};

/// Identity of the signed-in user as reported by the identity provider.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Opaque identifier issued by the provider.
    pub id: String,
    /// Account email; empty when the provider did not report one.
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub avatar_url: Option<String>,
    /// `displayName` metadata captured at sign-up.
    #[serde(default)]
    pub display_name: Option<String>,
}

impl User {
    /// Name to show in headers: display name when set, otherwise the email.
    #[must_use]
    pub fn label(&self) -> &str {
        match self.display_name.as_deref().map(str::trim) {
            Some(name) if !name.is_empty() => name,
            _ => &self.email,
        }
    }

    /// Uppercased first character of the label, or `"?"` when both are empty.
    #[must_use]
    pub fn initial(&self) -> String {
        self.label()
            .trim()
            .chars()
            .next()
            .map_or_else(|| "?".to_owned(), |c| c.to_uppercase().collect())
    }
}

/// An authenticated session: the user plus the bearer credential for it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub access_token: String,
    #[serde(default)]
    pub refresh_token: Option<String>,
    /// Expiry as unix seconds, when the provider reported one.
    #[serde(default)]
    pub expires_at: Option<i64>,
    pub user: User,
}

impl Session {
    /// Whether the access token expires within `margin` seconds of `now`.
    #[must_use]
    pub fn expires_within(&self, now: i64, margin: i64) -> bool {
        self.expires_at.is_some_and(|at| at - now <= margin)
    }

    #[must_use]
    pub fn is_expired(&self, now: i64) -> bool {
        self.expires_within(now, 0)
    }
}

/// Kind of change carried by a provider notification.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AuthEvent {
    SignedIn,
    SignedOut,
    TokenRefreshed,
    UserUpdated,
}

/// Lifecycle phase of the session store.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    /// Process start; nothing has been asked of the provider yet.
    Uninitialized,
    /// The one-shot startup session check is in flight.
    Resolving,
    Authenticated,
    Anonymous,
}

/// Snapshot of the authentication state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthState {
    pub session: Option<Session>,
    /// True only until the startup session check (or a newer event) settles.
    pub loading: bool,
}

impl Default for AuthState {
    fn default() -> Self {
        Self { session: None, loading: true }
    }
}

impl AuthState {
    #[must_use]
    pub fn anonymous() -> Self {
        Self { session: None, loading: false }
    }

    #[must_use]
    pub fn authenticated(session: Session) -> Self {
        Self { session: Some(session), loading: false }
    }

    #[must_use]
    pub fn user(&self) -> Option<&User> {
        self.session.as_ref().map(|s| &s.user)
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.session.is_some()
    }

    #[must_use]
    pub fn access_token(&self) -> Option<&str> {
        self.session.as_ref().map(|s| s.access_token.as_str())
    }
}

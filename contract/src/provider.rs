//! Identity-provider seam consumed by the session store.

use crate::session::{AuthEvent, Session};
use crate::subscription::Subscription;

/// Failure reported by an identity provider.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    /// The provider rejected the email/password pair.
    #[error("invalid login credentials: {0}")]
    InvalidCredentials(String),
    #[error("identity provider returned {status}: {message}")]
    Provider { status: u16, message: String },
    #[error("identity provider unreachable: {0}")]
    Transport(String),
    #[error("unexpected identity provider response: {0}")]
    Decode(String),
    #[error("not authenticated")]
    NotAuthenticated,
    #[error("session storage failed: {0}")]
    Storage(String),
}

/// Payload of a session change notification.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionChange {
    pub event: AuthEvent,
    pub session: Option<Session>,
}

/// Result of a sign-up request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SignUpOutcome {
    /// The account exists but the email must be confirmed before signing in.
    ConfirmationRequired,
    /// The provider auto-confirmed the account and opened a session.
    SignedIn(Session),
}

/// Hosted identity service operations used by the client.
#[async_trait::async_trait(?Send)]
pub trait IdentityProvider {
    /// The session the provider currently holds, refreshed if near expiry.
    async fn current_session(&self) -> Result<Option<Session>, AuthError>;

    /// Register for change notifications until the guard is released.
    fn subscribe(&self, listener: Box<dyn Fn(&SessionChange)>) -> Subscription;

    async fn sign_in_with_password(&self, email: &str, password: &str) -> Result<Session, AuthError>;

    async fn sign_up(&self, email: &str, password: &str, display_name: &str) -> Result<SignUpOutcome, AuthError>;

    async fn update_password(&self, new_password: &str) -> Result<(), AuthError>;

    /// End the session. Local state is cleared even when this returns an error.
    async fn sign_out(&self) -> Result<(), AuthError>;
}

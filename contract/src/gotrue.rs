//! Supabase Auth (GoTrue) identity provider over the [`Transport`] seam.
//!
//! SYSTEM CONTEXT
//! ==============
//! The hosted identity service issues and validates sessions; this adapter
//! only speaks its REST surface, persists the session through a
//! [`SessionStorage`] and fans out change notifications. The browser build
//! persists to `localStorage`, the CLI to a JSON file.
//!
//! TRADE-OFFS
//! ==========
//! A refresh that the provider rejects signs the user out locally. A refresh
//! that never reached the provider is reported as an error and the stored
//! session is kept, so a network blip does not log anyone out.

#[cfg(test)]
#[path = "gotrue_test.rs"]
mod gotrue_test;

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use serde::Deserialize;

use crate::config::SphereConfig;
use crate::provider::{AuthError, IdentityProvider, SessionChange, SignUpOutcome};
use crate::session::{AuthEvent, Session, User};
use crate::subscription::{Listeners, Subscription};
use crate::transport::{HttpRequest, HttpResponse, Method, Transport, error_message};

/// Refresh sessions this many seconds before they expire.
pub const REFRESH_MARGIN_SECS: i64 = 30;

const ERROR_KEYS: &[&str] = &["error_description", "msg", "message", "error"];

/// Key/value persistence for the serialized session.
pub trait SessionStorage {
    /// # Errors
    ///
    /// Returns [`AuthError::Storage`] when the backing store is unavailable.
    fn load(&self, key: &str) -> Result<Option<String>, AuthError>;

    /// # Errors
    ///
    /// Returns [`AuthError::Storage`] when the value cannot be written.
    fn save(&self, key: &str, value: &str) -> Result<(), AuthError>;

    /// # Errors
    ///
    /// Returns [`AuthError::Storage`] when the value cannot be removed.
    fn remove(&self, key: &str) -> Result<(), AuthError>;
}

/// Process-local storage; sessions vanish with the process.
#[derive(Clone, Debug, Default)]
pub struct MemoryStorage {
    values: Rc<RefCell<HashMap<String, String>>>,
}

impl SessionStorage for MemoryStorage {
    fn load(&self, key: &str) -> Result<Option<String>, AuthError> {
        Ok(self.values.borrow().get(key).cloned())
    }

    fn save(&self, key: &str, value: &str) -> Result<(), AuthError> {
        self.values.borrow_mut().insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), AuthError> {
        self.values.borrow_mut().remove(key);
        Ok(())
    }
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
    #[serde(default)]
    refresh_token: Option<String>,
    #[serde(default)]
    expires_in: Option<i64>,
    #[serde(default)]
    expires_at: Option<i64>,
    user: WireUser,
}

#[derive(Debug, Deserialize)]
struct WireUser {
    id: String,
    #[serde(default)]
    email: Option<String>,
    #[serde(default)]
    user_metadata: UserMetadata,
}

#[derive(Debug, Default, Deserialize)]
struct UserMetadata {
    #[serde(default)]
    avatar_url: Option<String>,
    #[serde(default, rename = "displayName")]
    display_name: Option<String>,
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

impl From<WireUser> for User {
    fn from(wire: WireUser) -> Self {
        Self {
            id: wire.id,
            email: wire.email.unwrap_or_default(),
            avatar_url: non_empty(wire.user_metadata.avatar_url),
            display_name: non_empty(wire.user_metadata.display_name),
        }
    }
}

impl TokenResponse {
    fn into_session(self, now: i64) -> Session {
        let expires_at = self.expires_at.or_else(|| self.expires_in.map(|secs| now + secs));
        Session {
            access_token: self.access_token,
            refresh_token: self.refresh_token,
            expires_at,
            user: self.user.into(),
        }
    }
}

/// Identity provider backed by the Supabase Auth REST API.
pub struct GoTrueProvider<T, S> {
    auth_url: String,
    anon_key: String,
    storage_key: String,
    transport: T,
    storage: S,
    clock: fn() -> i64,
    listeners: Listeners<SessionChange>,
}

impl<T: Transport, S: SessionStorage> GoTrueProvider<T, S> {
    /// `clock` returns the current unix time in seconds.
    pub fn new(config: &SphereConfig, transport: T, storage: S, clock: fn() -> i64) -> Self {
        Self {
            auth_url: format!("{}/auth/v1", config.supabase_url),
            anon_key: config.anon_key.clone(),
            storage_key: config.storage_key(),
            transport,
            storage,
            clock,
            listeners: Listeners::new(),
        }
    }

    #[must_use]
    pub fn storage_key(&self) -> &str {
        &self.storage_key
    }

    fn request(&self, method: Method, path: &str) -> HttpRequest {
        HttpRequest::new(method, format!("{}{path}", self.auth_url))
            .header("apikey", &self.anon_key)
            .header("Content-Type", "application/json")
    }

    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, AuthError> {
        let response = self
            .transport
            .send(request)
            .await
            .map_err(|e| AuthError::Transport(e.0))?;
        if response.is_success() {
            Ok(response)
        } else {
            Err(provider_error(&response))
        }
    }

    fn stored_session(&self) -> Result<Option<Session>, AuthError> {
        let Some(raw) = self.storage.load(&self.storage_key)? else {
            return Ok(None);
        };
        match serde_json::from_str::<Session>(&raw) {
            Ok(session) => Ok(Some(session)),
            Err(e) => {
                log::warn!("discarding unreadable stored session: {e}");
                self.storage.remove(&self.storage_key)?;
                Ok(None)
            }
        }
    }

    fn persist(&self, session: &Session) -> Result<(), AuthError> {
        let raw = serde_json::to_string(session).map_err(|e| AuthError::Storage(e.to_string()))?;
        self.storage.save(&self.storage_key, &raw)
    }

    fn clear(&self) {
        if let Err(e) = self.storage.remove(&self.storage_key) {
            log::warn!("failed to clear stored session: {e}");
        }
    }

    fn emit(&self, event: AuthEvent, session: Option<Session>) {
        self.listeners.emit(&SessionChange { event, session });
    }

    fn decode_token(&self, response: &HttpResponse) -> Result<Session, AuthError> {
        let token: TokenResponse = response.json().map_err(|e| AuthError::Decode(e.to_string()))?;
        Ok(token.into_session((self.clock)()))
    }

    async fn refresh(&self, refresh_token: &str) -> Result<Session, AuthError> {
        let request = self
            .request(Method::Post, "/token?grant_type=refresh_token")
            .json(&serde_json::json!({ "refresh_token": refresh_token }))
            .map_err(|e| AuthError::Decode(e.to_string()))?;
        let response = self.send(request).await?;
        self.decode_token(&response)
    }

    fn expire_locally(&self) {
        self.clear();
        self.emit(AuthEvent::SignedOut, None);
    }
}

fn provider_error(response: &HttpResponse) -> AuthError {
    let message = error_message(&response.body, ERROR_KEYS)
        .unwrap_or_else(|| format!("request failed with status {}", response.status));
    AuthError::Provider { status: response.status, message }
}

#[async_trait::async_trait(?Send)]
impl<T: Transport, S: SessionStorage> IdentityProvider for GoTrueProvider<T, S> {
    async fn current_session(&self) -> Result<Option<Session>, AuthError> {
        let Some(session) = self.stored_session()? else {
            return Ok(None);
        };
        let now = (self.clock)();
        if !session.expires_within(now, REFRESH_MARGIN_SECS) {
            return Ok(Some(session));
        }

        let Some(refresh_token) = session.refresh_token.clone() else {
            if session.is_expired(now) {
                self.expire_locally();
                return Ok(None);
            }
            return Ok(Some(session));
        };

        match self.refresh(&refresh_token).await {
            Ok(fresh) => {
                self.persist(&fresh)?;
                self.emit(AuthEvent::TokenRefreshed, Some(fresh.clone()));
                Ok(Some(fresh))
            }
            Err(e @ AuthError::Transport(_)) => Err(e),
            Err(e) => {
                log::warn!("session refresh rejected, signing out: {e}");
                self.expire_locally();
                Ok(None)
            }
        }
    }

    fn subscribe(&self, listener: Box<dyn Fn(&SessionChange)>) -> Subscription {
        self.listeners.subscribe(listener)
    }

    async fn sign_in_with_password(&self, email: &str, password: &str) -> Result<Session, AuthError> {
        let request = self
            .request(Method::Post, "/token?grant_type=password")
            .json(&serde_json::json!({ "email": email, "password": password }))
            .map_err(|e| AuthError::Decode(e.to_string()))?;
        let response = self.send(request).await.map_err(|e| match e {
            AuthError::Provider { status: 400, message } => AuthError::InvalidCredentials(message),
            other => other,
        })?;
        let session = self.decode_token(&response)?;
        self.persist(&session)?;
        self.emit(AuthEvent::SignedIn, Some(session.clone()));
        Ok(session)
    }

    async fn sign_up(&self, email: &str, password: &str, display_name: &str) -> Result<SignUpOutcome, AuthError> {
        let request = self
            .request(Method::Post, "/signup")
            .json(&serde_json::json!({
                "email": email,
                "password": password,
                "data": { "displayName": display_name },
            }))
            .map_err(|e| AuthError::Decode(e.to_string()))?;
        let response = self.send(request).await?;
        let body: serde_json::Value = response.json().map_err(|e| AuthError::Decode(e.to_string()))?;
        if body.get("access_token").is_none() {
            return Ok(SignUpOutcome::ConfirmationRequired);
        }
        let session = self.decode_token(&response)?;
        self.persist(&session)?;
        self.emit(AuthEvent::SignedIn, Some(session.clone()));
        Ok(SignUpOutcome::SignedIn(session))
    }

    async fn update_password(&self, new_password: &str) -> Result<(), AuthError> {
        let Some(session) = self.current_session().await? else {
            return Err(AuthError::NotAuthenticated);
        };
        let request = self
            .request(Method::Put, "/user")
            .bearer(&session.access_token)
            .json(&serde_json::json!({ "password": new_password }))
            .map_err(|e| AuthError::Decode(e.to_string()))?;
        let response = self.send(request).await?;
        let user: WireUser = response.json().map_err(|e| AuthError::Decode(e.to_string()))?;
        let updated = Session { user: user.into(), ..session };
        self.persist(&updated)?;
        self.emit(AuthEvent::UserUpdated, Some(updated));
        Ok(())
    }

    async fn sign_out(&self) -> Result<(), AuthError> {
        let stored = match self.stored_session() {
            Ok(stored) => stored,
            Err(e) => {
                log::warn!("could not read stored session during sign-out: {e}");
                None
            }
        };
        let remote = match stored {
            Some(session) => {
                let request = self.request(Method::Post, "/logout").bearer(&session.access_token);
                self.send(request).await.map(|_| ())
            }
            None => Ok(()),
        };
        self.expire_locally();
        remote
    }
}

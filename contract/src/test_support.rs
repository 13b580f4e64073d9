//! Hand-written fakes shared by the unit tests.

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::rc::Rc;

use tokio::sync::Notify;

use crate::provider::{AuthError, IdentityProvider, SessionChange, SignUpOutcome};
use crate::session::{AuthEvent, Session, User};
use crate::subscription::{Listeners, Subscription};
use crate::transport::{HttpRequest, HttpResponse, Transport, TransportError};

pub fn user(id: &str, email: &str) -> User {
    User { id: id.to_owned(), email: email.to_owned(), avatar_url: None, display_name: None }
}

pub fn session(id: &str, token: &str) -> Session {
    Session {
        access_token: token.to_owned(),
        refresh_token: Some(format!("refresh-{token}")),
        expires_at: None,
        user: user(id, &format!("{id}@example.com")),
    }
}

// =============================================================
// Scripted transport
// =============================================================

/// Replays queued responses and records every request it was given.
#[derive(Clone, Default)]
pub struct ScriptedTransport {
    responses: Rc<RefCell<VecDeque<Result<HttpResponse, TransportError>>>>,
    requests: Rc<RefCell<Vec<HttpRequest>>>,
}

impl ScriptedTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(&self, status: u16, body: &str) -> &Self {
        self.responses
            .borrow_mut()
            .push_back(Ok(HttpResponse { status, body: body.to_owned() }));
        self
    }

    pub fn fail(&self, message: &str) -> &Self {
        self.responses
            .borrow_mut()
            .push_back(Err(TransportError(message.to_owned())));
        self
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests.borrow().clone()
    }

    pub fn request_count(&self) -> usize {
        self.requests.borrow().len()
    }

    pub fn last_request(&self) -> Option<HttpRequest> {
        self.requests.borrow().last().cloned()
    }
}

#[async_trait::async_trait(?Send)]
impl Transport for ScriptedTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        self.requests.borrow_mut().push(request);
        self.responses
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(TransportError("no scripted response".to_owned())))
    }
}

// =============================================================
// Fake identity provider
// =============================================================

#[derive(Default)]
struct FakeProviderInner {
    stored: RefCell<Option<Session>>,
    startup_error: RefCell<Option<AuthError>>,
    sign_in_result: RefCell<Option<Result<Session, AuthError>>>,
    sign_out_error: RefCell<Option<AuthError>>,
    sign_up_result: RefCell<Option<Result<SignUpOutcome, AuthError>>>,
    gate: RefCell<Option<Rc<Notify>>>,
    current_session_calls: Cell<u32>,
    sign_out_calls: Cell<u32>,
    listeners: Listeners<SessionChange>,
}

/// In-memory provider with scripted outcomes and an optional startup gate.
#[derive(Clone, Default)]
pub struct FakeProvider {
    inner: Rc<FakeProviderInner>,
}

impl FakeProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_session(session: Session) -> Self {
        let provider = Self::new();
        provider.inner.stored.replace(Some(session));
        provider
    }

    /// Fail the next `current_session` call.
    pub fn fail_next_lookup(&self, error: AuthError) {
        self.inner.startup_error.replace(Some(error));
    }

    pub fn sign_in_returns(&self, result: Result<Session, AuthError>) {
        self.inner.sign_in_result.replace(Some(result));
    }

    pub fn sign_out_fails(&self, error: AuthError) {
        self.inner.sign_out_error.replace(Some(error));
    }

    pub fn sign_up_returns(&self, result: Result<SignUpOutcome, AuthError>) {
        self.inner.sign_up_result.replace(Some(result));
    }

    /// Hold the next `current_session` call until the returned handle is notified.
    pub fn hold_current_session(&self) -> Rc<Notify> {
        let notify = Rc::new(Notify::new());
        self.inner.gate.replace(Some(Rc::clone(&notify)));
        notify
    }

    /// Drop the stored session without notifying listeners, as when another
    /// tab clears shared storage.
    pub fn forget_session(&self) {
        self.inner.stored.replace(None);
    }

    /// Simulate a provider-side change (sign-in elsewhere, refresh, expiry).
    pub fn emit(&self, event: AuthEvent, session: Option<Session>) {
        self.inner.stored.replace(session.clone());
        self.inner.listeners.emit(&SessionChange { event, session });
    }

    pub fn listener_count(&self) -> usize {
        self.inner.listeners.len()
    }

    pub fn current_session_calls(&self) -> u32 {
        self.inner.current_session_calls.get()
    }

    pub fn sign_out_calls(&self) -> u32 {
        self.inner.sign_out_calls.get()
    }
}

#[async_trait::async_trait(?Send)]
impl IdentityProvider for FakeProvider {
    async fn current_session(&self) -> Result<Option<Session>, AuthError> {
        self.inner.current_session_calls.set(self.inner.current_session_calls.get() + 1);
        // Capture the answer before waiting so a held call returns stale data.
        let answer = match self.inner.startup_error.borrow_mut().take() {
            Some(error) => Err(error),
            None => Ok(self.inner.stored.borrow().clone()),
        };
        let gate = self.inner.gate.borrow_mut().take();
        if let Some(gate) = gate {
            gate.notified().await;
        }
        answer
    }

    fn subscribe(&self, listener: Box<dyn Fn(&SessionChange)>) -> Subscription {
        self.inner.listeners.subscribe(listener)
    }

    async fn sign_in_with_password(&self, _email: &str, _password: &str) -> Result<Session, AuthError> {
        let result = self
            .inner
            .sign_in_result
            .borrow_mut()
            .take()
            .unwrap_or_else(|| Err(AuthError::InvalidCredentials("Invalid login credentials".to_owned())));
        if let Ok(session) = &result {
            self.inner.stored.replace(Some(session.clone()));
        }
        result
    }

    async fn sign_up(&self, _email: &str, _password: &str, _display_name: &str) -> Result<SignUpOutcome, AuthError> {
        self.inner
            .sign_up_result
            .borrow_mut()
            .take()
            .unwrap_or(Ok(SignUpOutcome::ConfirmationRequired))
    }

    async fn update_password(&self, _new_password: &str) -> Result<(), AuthError> {
        Ok(())
    }

    async fn sign_out(&self) -> Result<(), AuthError> {
        self.inner.sign_out_calls.set(self.inner.sign_out_calls.get() + 1);
        self.inner.stored.replace(None);
        match self.inner.sign_out_error.borrow_mut().take() {
            Some(error) => Err(error),
            None => Ok(()),
        }
    }
}

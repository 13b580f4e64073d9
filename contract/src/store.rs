//! Single-writer session store.
//!
//! SYSTEM CONTEXT
//! ==============
//! The store is the only shared mutable state in the client. Views read
//! snapshots and observe changes through [`SessionStore::watch`]; only the
//! store's own operations and its provider subscription write.
//!
//! ORDERING
//! ========
//! Two sources feed the store: the startup `current_session` query and the
//! provider's change notifications. Every applied write bumps a generation
//! counter. The startup query records the generation when it begins and
//! applies its result only if nothing was applied in the meantime, so a slow
//! startup answer cannot overwrite a newer notification.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::backend::{ApiError, SessionSource};
use crate::provider::{AuthError, IdentityProvider, SessionChange, SignUpOutcome};
use crate::session::{AuthState, Phase, Session, User};
use crate::subscription::{Listeners, Subscription};

struct StoreInner<P> {
    provider: P,
    state: RefCell<Rc<AuthState>>,
    generation: Cell<u64>,
    started: Cell<bool>,
    observers: Listeners<Rc<AuthState>>,
    provider_subscription: RefCell<Option<Subscription>>,
}

impl<P> StoreInner<P> {
    fn apply(&self, session: Option<Session>) {
        self.generation.set(self.generation.get() + 1);
        let next = Rc::new(AuthState { session, loading: false });
        self.state.replace(Rc::clone(&next));
        log::debug!(
            "session store: generation={} authenticated={}",
            self.generation.get(),
            next.is_authenticated()
        );
        self.observers.emit(&next);
    }

    fn resolve_startup(&self, ticket: u64, session: Option<Session>) {
        if self.generation.get() == ticket {
            self.apply(session);
        } else {
            log::debug!("session store: discarding startup result superseded by a newer event");
        }
    }
}

/// Owner of the current [`AuthState`].
pub struct SessionStore<P> {
    inner: Rc<StoreInner<P>>,
}

impl<P> Clone for SessionStore<P> {
    fn clone(&self) -> Self {
        Self { inner: Rc::clone(&self.inner) }
    }
}

impl<P: IdentityProvider + 'static> SessionStore<P> {
    /// Create an uninitialized store; call [`SessionStore::start`] once mounted.
    pub fn new(provider: P) -> Self {
        Self {
            inner: Rc::new(StoreInner {
                provider,
                state: RefCell::new(Rc::new(AuthState::default())),
                generation: Cell::new(0),
                started: Cell::new(false),
                observers: Listeners::new(),
                provider_subscription: RefCell::new(None),
            }),
        }
    }

    #[must_use]
    pub fn provider(&self) -> &P {
        &self.inner.provider
    }

    /// Subscribe to provider changes and run the one startup session check.
    ///
    /// Later calls are no-ops. Startup failures are logged and resolve to
    /// an anonymous state without retry.
    pub async fn start(&self) {
        if self.inner.started.replace(true) {
            return;
        }

        let weak = Rc::downgrade(&self.inner);
        let subscription = self.inner.provider.subscribe(Box::new(move |change: &SessionChange| {
            if let Some(inner) = weak.upgrade() {
                log::debug!("session store: provider event {:?}", change.event);
                inner.apply(change.session.clone());
            }
        }));
        self.inner.provider_subscription.replace(Some(subscription));

        let ticket = self.inner.generation.get();
        let session = match self.inner.provider.current_session().await {
            Ok(session) => session,
            Err(e) => {
                log::warn!("startup session check failed: {e}");
                None
            }
        };
        self.inner.resolve_startup(ticket, session);
    }

    /// Release the provider subscription. Dropping the last store handle does
    /// the same.
    pub fn stop(&self) {
        let subscription = self.inner.provider_subscription.borrow_mut().take();
        if let Some(subscription) = subscription {
            subscription.unsubscribe();
        }
    }

    #[must_use]
    pub fn snapshot(&self) -> Rc<AuthState> {
        Rc::clone(&self.inner.state.borrow())
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        let state = self.snapshot();
        if state.loading {
            if self.inner.started.get() { Phase::Resolving } else { Phase::Uninitialized }
        } else if state.is_authenticated() {
            Phase::Authenticated
        } else {
            Phase::Anonymous
        }
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.inner.state.borrow().is_authenticated()
    }

    /// Observe every replacement of the state until the guard is released.
    pub fn watch(&self, listener: impl Fn(&Rc<AuthState>) + 'static) -> Subscription {
        self.inner.observers.subscribe(listener)
    }

    /// Password sign-in with the failure reason preserved.
    ///
    /// # Errors
    ///
    /// Returns the provider's [`AuthError`]; the current state is untouched.
    pub async fn try_login(&self, email: &str, password: &str) -> Result<User, AuthError> {
        let session = self.inner.provider.sign_in_with_password(email, password).await?;
        let user = session.user.clone();
        self.inner.apply(Some(session));
        Ok(user)
    }

    /// Password sign-in reduced to success or failure; the reason is logged.
    pub async fn login(&self, email: &str, password: &str) -> bool {
        match self.try_login(email, password).await {
            Ok(_) => true,
            Err(e) => {
                log::warn!("login failed: {e}");
                false
            }
        }
    }

    /// Sign out remotely, then clear the local session whatever the outcome.
    pub async fn logout(&self) {
        if let Err(e) = self.inner.provider.sign_out().await {
            log::warn!("remote sign-out failed, clearing local session anyway: {e}");
        }
        self.inner.apply(None);
    }

    /// Create an account; a session returned by the provider is applied.
    ///
    /// # Errors
    ///
    /// Returns the provider's [`AuthError`].
    pub async fn sign_up(&self, username: &str, email: &str, password: &str) -> Result<SignUpOutcome, AuthError> {
        let outcome = self.inner.provider.sign_up(email, password, username).await?;
        if let SignUpOutcome::SignedIn(session) = &outcome {
            self.inner.apply(Some(session.clone()));
        }
        Ok(outcome)
    }

    /// Change the signed-in user's password.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::NotAuthenticated`] without a session, otherwise the
    /// provider's error.
    pub async fn update_password(&self, new_password: &str) -> Result<(), AuthError> {
        if !self.is_authenticated() {
            return Err(AuthError::NotAuthenticated);
        }
        self.inner.provider.update_password(new_password).await
    }

    /// Fresh per-call session lookup used for bearer credentials.
    ///
    /// Anonymous stores answer `None` without asking the provider. When the
    /// provider no longer holds a session the store drops to Anonymous.
    ///
    /// # Errors
    ///
    /// Returns the provider's [`AuthError`]; the current state is untouched.
    pub async fn current_session(&self) -> Result<Option<Session>, AuthError> {
        if !self.is_authenticated() {
            return Ok(None);
        }
        let session = self.inner.provider.current_session().await?;
        if session.is_none() && self.is_authenticated() {
            log::info!("session store: provider holds no session, clearing local state");
            self.inner.apply(None);
        }
        Ok(session)
    }
}

#[async_trait::async_trait(?Send)]
impl<P: IdentityProvider + 'static> SessionSource for SessionStore<P> {
    async fn current_session(&self) -> Result<Option<Session>, ApiError> {
        SessionStore::current_session(self).await.map_err(|e| {
            log::warn!("session lookup failed: {e}");
            ApiError::from(e)
        })
    }
}

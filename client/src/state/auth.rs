//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Bridges the `contract` session store into Leptos: the store stays the only
//! writer, and a watch subscription mirrors each replaced snapshot into an
//! `RwSignal<AuthState>` that route guards and user-aware components read.

use std::rc::Rc;

use contract::{AuthState, SphereConfig, Subscription, User};
use leptos::prelude::*;

use crate::net::api::{self, SphereBackend, SphereStore};

struct Services {
    store: SphereStore,
    backend: Rc<SphereBackend>,
    _watch: Subscription,
}

/// Reactive handle to the session store and the backend client.
#[derive(Clone, Copy)]
pub struct AuthContext {
    pub state: RwSignal<AuthState>,
    services: StoredValue<Services, LocalStorage>,
}

impl AuthContext {
    /// Build the store for `config`, provide it as context, and start the
    /// one startup session check in the browser.
    pub fn install(config: &SphereConfig) -> Self {
        let store = api::session_store(config);
        let backend = Rc::new(api::backend(config, store.clone()));
        let state = RwSignal::new((*store.snapshot()).clone());
        let watch = store.watch(move |next| state.set((**next).clone()));
        let services = StoredValue::new_local(Services { store: store.clone(), backend, _watch: watch });
        let ctx = Self { state, services };
        provide_context(ctx);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            store.start().await;
        });

        on_cleanup(move || {
            services.try_with_value(|s| s.store.stop());
        });
        ctx
    }

    pub fn store(&self) -> Option<SphereStore> {
        self.services.try_with_value(|s| s.store.clone())
    }

    pub fn backend(&self) -> Option<Rc<SphereBackend>> {
        self.services.try_with_value(|s| Rc::clone(&s.backend))
    }

    /// Current user, tracked.
    pub fn user(&self) -> Option<User> {
        self.state.with(|s| s.user().cloned())
    }

    pub fn is_authenticated(&self) -> bool {
        self.state.with(AuthState::is_authenticated)
    }
}

pub fn use_auth() -> AuthContext {
    expect_context::<AuthContext>()
}

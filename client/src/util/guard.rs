//! Route guard for signed-in pages.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every protected page applies identical behavior: render a placeholder
//! while the startup session check runs, send anonymous visitors to
//! `/login`, and render the page otherwise. There is no return-to link.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use contract::AuthState;
use leptos::prelude::*;
use leptos_router::NavigateOptions;

pub const LOGIN_PATH: &str = "/login";

/// What a protected page should do for a given auth snapshot.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    /// The startup check is still running; never redirect here.
    Pending,
    Redirect,
    Allow,
}

pub fn guard(state: &AuthState) -> GuardDecision {
    if state.loading {
        GuardDecision::Pending
    } else if state.is_authenticated() {
        GuardDecision::Allow
    } else {
        GuardDecision::Redirect
    }
}

/// Redirect to `/login` whenever auth has loaded and no user is present.
pub fn install_unauth_redirect<F>(auth: RwSignal<AuthState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if auth.with(guard) == GuardDecision::Redirect {
            navigate(LOGIN_PATH, NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });
}

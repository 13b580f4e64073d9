//! Wrapper that renders its children only for a signed-in user.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::state::auth::use_auth;
use crate::state::language::{tr, use_language};
use crate::util::guard::{GuardDecision, guard, install_unauth_redirect};

/// Shows "Loading..." while the startup check runs, "Redirecting..." once it
/// settled without a session, and the children otherwise.
#[component]
pub fn RequireAuth(children: ChildrenFn) -> impl IntoView {
    let auth = use_auth();
    let language = use_language();
    install_unauth_redirect(auth.state, use_navigate());

    let placeholder = move || {
        if auth.state.with(|s| s.loading) { tr(language, "common.loading")() } else { tr(language, "common.redirecting")() }
    };

    view! {
        <Show
            when=move || auth.state.with(guard) == GuardDecision::Allow
            fallback=move || {
                view! {
                    <div class="page-placeholder">
                        <p>{placeholder}</p>
                    </div>
                }
            }
        >
            {children()}
        </Show>
    }
}

//! Shared page chrome: logo, primary navigation, account menu and language
//! selector.
//!
//! DESIGN
//! ======
//! Every page renders inside `Layout` with its own route as `active`. The
//! account area reads the session snapshot only; logging out goes through the
//! store, and protected pages then redirect through their own guard.

#[cfg(test)]
#[path = "layout_test.rs"]
mod layout_test;

use leptos::prelude::*;

use crate::state::auth::use_auth;
use crate::state::language::{choose, tr, use_language};
use crate::util::i18n::Language;
use crate::util::liveness::Liveness;

/// Primary navigation entries: route and label key.
pub const NAV_ITEMS: [(&str, &str); 3] = [("/", "nav.home"), ("/upload", "nav.upload"), ("/analyzer", "nav.analyzer")];

/// Whether the nav entry for `path` is highlighted when `active` is shown.
pub fn is_active(path: &str, active: &str) -> bool {
    if path == "/" {
        active == "/"
    } else {
        active == path || active.starts_with(&format!("{path}/"))
    }
}

#[component]
pub fn Layout(active: &'static str, children: Children) -> impl IntoView {
    let auth = use_auth();
    let language = use_language();
    let menu_open = RwSignal::new(false);
    let busy = RwSignal::new(false);
    let alive = Liveness::install();

    let on_logout = move |_| {
        menu_open.set(false);
        if busy.get() {
            return;
        }
        busy.set(true);

        #[cfg(feature = "hydrate")]
        {
            let store = auth.store();
            let alive = alive.clone();
            leptos::task::spawn_local(async move {
                if let Some(store) = store {
                    store.logout().await;
                }
                if alive.is_alive() {
                    busy.set(false);
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = &alive;
    };

    let initial = move || auth.user().map_or_else(|| "?".to_owned(), |u| u.initial());

    view! {
        <div class="layout">
            <header class="site-header">
                <a href="/" class="site-header__logo">
                    <span class="site-header__logo-mark" aria-hidden="true">"S"</span>
                    <span class="site-header__logo-text">"phere"</span>
                </a>
                <nav class="site-header__nav">
                    {NAV_ITEMS
                        .into_iter()
                        .map(|(path, key)| {
                            view! {
                                <a
                                    href=path
                                    class="site-header__nav-link"
                                    class:site-header__nav-link--active=is_active(path, active)
                                >
                                    {tr(language, key)}
                                </a>
                            }
                        })
                        .collect_view()}
                </nav>
                <div class="site-header__actions">
                    <Show
                        when=move || auth.is_authenticated()
                        fallback=move || {
                            view! {
                                <Show when=move || !auth.state.with(|s| s.loading)>
                                    <a href="/login" class="site-header__login">
                                        {tr(language, "nav.login")}
                                    </a>
                                </Show>
                            }
                        }
                    >
                        <div class="avatar-menu">
                            <button
                                class="avatar-menu__trigger"
                                title=move || auth.user().map(|u| u.label().to_owned()).unwrap_or_default()
                                on:click=move |_| menu_open.update(|open| *open = !*open)
                            >
                                {initial}
                            </button>
                            {
                                let on_logout = on_logout.clone();
                                view! {
                            <Show when=move || menu_open.get()>
                                <div class="avatar-menu__content">
                                    <a href="/profile" class="avatar-menu__item">
                                        {tr(language, "nav.profile")}
                                    </a>
                                    <a href="/history" class="avatar-menu__item">
                                        {tr(language, "nav.history")}
                                    </a>
                                    <hr class="avatar-menu__separator" />
                                    <button
                                        class="avatar-menu__item avatar-menu__item--danger"
                                        disabled=move || busy.get()
                                        on:click=on_logout.clone()
                                    >
                                        {tr(language, "nav.logout")}
                                    </button>
                                </div>
                            </Show>
                                }
                            }
                        </div>
                    </Show>
                    <select
                        class="language-select"
                        prop:value=move || language.get().code()
                        on:change=move |ev| {
                            if let Some(next) = Language::parse(&event_target_value(&ev)) {
                                choose(language, next);
                            }
                        }
                    >
                        {Language::ALL
                            .into_iter()
                            .map(|l| view! { <option value=l.code()>{l.code()}</option> })
                            .collect_view()}
                    </select>
                </div>
            </header>
            <main class="layout__main">{children()}</main>
        </div>
    }
}

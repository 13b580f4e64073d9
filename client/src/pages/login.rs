//! Email + password login page.

use leptos::prelude::*;
#[cfg(feature = "hydrate")]
use leptos_router::{NavigateOptions, hooks::use_navigate};

use crate::components::layout::Layout;
use crate::state::auth::use_auth;
use crate::state::forms::LoginDraft;
use crate::state::language::{tr, use_language};
use crate::util::i18n::translate;
#[cfg(feature = "hydrate")]
use crate::util::liveness::Liveness;

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = use_auth();
    let language = use_language();
    let draft = RwSignal::new(LoginDraft::default());
    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);
    #[cfg(feature = "hydrate")]
    let navigate = use_navigate();
    #[cfg(feature = "hydrate")]
    let alive = Liveness::install();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let value = draft.get();
        if let Err(e) = value.validate() {
            error.set(Some(translate(language.get(), e.message_key()).to_owned()));
            return;
        }
        busy.set(true);
        error.set(None);

        #[cfg(feature = "hydrate")]
        {
            let Some(store) = auth.store() else {
                busy.set(false);
                return;
            };
            let navigate = navigate.clone();
            let alive = alive.clone();
            leptos::task::spawn_local(async move {
                let result = store.try_login(value.email.trim(), &value.password).await;
                if !alive.is_alive() {
                    return;
                }
                busy.set(false);
                match result {
                    Ok(_) => navigate("/", NavigateOptions::default()),
                    Err(e) => error.set(Some(crate::util::errors::login_error_text(language.get_untracked(), &e))),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = auth;
    };

    view! {
        <Layout active="/login">
            <div class="auth-page">
                <section class="auth-page__intro">
                    <h1>{tr(language, "login.welcome")} " " <span>{tr(language, "login.sphere")}</span></h1>
                    <p>{tr(language, "login.enhance")}</p>
                    <p>{tr(language, "login.analyze")}</p>
                    <p>{tr(language, "login.save")} " " {tr(language, "login.smart")}</p>
                </section>
                <form class="auth-card" on:submit=on_submit>
                    <h2 class="auth-card__title">{tr(language, "login.memberLogin")}</h2>
                    <input
                        class="auth-input"
                        type="email"
                        autocomplete="email"
                        placeholder=tr(language, "signup.email")
                        prop:value=move || draft.with(|d| d.email.clone())
                        on:input=move |ev| draft.update(|d| d.email = event_target_value(&ev))
                    />
                    <input
                        class="auth-input"
                        type="password"
                        autocomplete="current-password"
                        placeholder=tr(language, "login.password")
                        prop:value=move || draft.with(|d| d.password.clone())
                        on:input=move |ev| draft.update(|d| d.password = event_target_value(&ev))
                    />
                    <Show when=move || error.get().is_some()>
                        <p class="auth-card__error">{move || error.get().unwrap_or_default()}</p>
                    </Show>
                    <button class="auth-button" type="submit" disabled=move || busy.get()>
                        {move || {
                            if busy.get() { tr(language, "login.signingIn")() } else { tr(language, "login.loginButton")() }
                        }}
                    </button>
                    <a href="/signup" class="auth-card__link">{tr(language, "login.createAccount")}</a>
                </form>
            </div>
            <footer class="auth-footer">
                <span>{tr(language, "login.privacyPolicy")}</span>
                <span>{tr(language, "login.termsOfService")}</span>
                <span>{tr(language, "login.help")}</span>
            </footer>
        </Layout>
    }
}

//! Account registration page.
//!
//! The username is stored as `displayName` metadata. When the provider
//! requires email confirmation the page shows a notice instead of signing in.

use leptos::prelude::*;
#[cfg(feature = "hydrate")]
use leptos_router::{NavigateOptions, hooks::use_navigate};

use crate::components::layout::Layout;
use crate::state::auth::use_auth;
use crate::state::forms::SignUpDraft;
use crate::state::language::{tr, use_language};
use crate::util::i18n::translate;
#[cfg(feature = "hydrate")]
use crate::util::liveness::Liveness;

#[component]
pub fn SignUpPage() -> impl IntoView {
    let auth = use_auth();
    let language = use_language();
    let draft = RwSignal::new(SignUpDraft::default());
    let error = RwSignal::new(None::<String>);
    let notice = RwSignal::new(false);
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
        notice.set(false);

        #[cfg(feature = "hydrate")]
        {
            let Some(store) = auth.store() else {
                busy.set(false);
                return;
            };
            let navigate = navigate.clone();
            let alive = alive.clone();
            leptos::task::spawn_local(async move {
                let result = store.sign_up(value.username.trim(), value.email.trim(), &value.password).await;
                if !alive.is_alive() {
                    return;
                }
                busy.set(false);
                match result {
                    Ok(contract::SignUpOutcome::ConfirmationRequired) => {
                        notice.set(true);
                        draft.set(SignUpDraft::default());
                    }
                    Ok(contract::SignUpOutcome::SignedIn(_)) => navigate("/", NavigateOptions::default()),
                    Err(e) => error.set(Some(crate::util::errors::auth_error_text(language.get_untracked(), &e))),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = auth;
    };

    let input = move |kind: &'static str,
                      autocomplete: &'static str,
                      label: &'static str,
                      get: fn(&SignUpDraft) -> String,
                      set: fn(&mut SignUpDraft, String)| {
        view! {
            <input
                class="auth-input"
                type=kind
                autocomplete=autocomplete
                placeholder=tr(language, label)
                prop:value=move || draft.with(get)
                on:input=move |ev| draft.update(|d| set(d, event_target_value(&ev)))
            />
        }
    };

    view! {
        <Layout active="/signup">
            <div class="auth-page">
                <section class="auth-page__intro">
                    <h1>{tr(language, "signup.join")} " " <span>{tr(language, "signup.sphere")}</span></h1>
                    <p>{tr(language, "signup.partner")}</p>
                </section>
                <form class="auth-card" on:submit=on_submit>
                    {input("text", "username", "login.username", |d| d.username.clone(), |d, v| d.username = v)}
                    {input("email", "email", "signup.email", |d| d.email.clone(), |d, v| d.email = v)}
                    {input("password", "new-password", "login.password", |d| d.password.clone(), |d, v| d.password = v)}
                    {input(
                        "password",
                        "new-password",
                        "signup.confirmPassword",
                        |d| d.confirm_password.clone(),
                        |d, v| d.confirm_password = v,
                    )}
                    <Show when=move || error.get().is_some()>
                        <p class="auth-card__error">{move || error.get().unwrap_or_default()}</p>
                    </Show>
                    <Show when=move || notice.get()>
                        <p class="auth-card__notice">{tr(language, "signup.confirmationSent")}</p>
                    </Show>
                    <button class="auth-button" type="submit" disabled=move || busy.get()>
                        {tr(language, "signup.signupButton")}
                    </button>
                    <p class="auth-card__link">
                        {tr(language, "signup.alreadyAccount")} " " <a href="/login">{tr(language, "signup.signin")}</a>
                    </p>
                </form>
            </div>
        </Layout>
    }
}

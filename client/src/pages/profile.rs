//! Account details, password change and sign out.

use leptos::prelude::*;

use crate::components::layout::Layout;
use crate::components::require_auth::RequireAuth;
use crate::state::auth::use_auth;
use crate::state::forms::PasswordDraft;
use crate::state::language::{tr, use_language};
use crate::util::i18n::translate;
use crate::util::liveness::Liveness;

#[component]
pub fn ProfilePage() -> impl IntoView {
    view! {
        <Layout active="/profile">
            <RequireAuth>
                <ProfilePanel />
            </RequireAuth>
        </Layout>
    }
}

#[component]
fn ProfilePanel() -> impl IntoView {
    let auth = use_auth();
    let language = use_language();
    let draft = RwSignal::new(PasswordDraft::default());
    let message = RwSignal::new(None::<(bool, String)>);
    let busy = RwSignal::new(false);
    let alive = Liveness::install();
    let sign_out_alive = alive.clone();

    let on_change_password = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let value = draft.get();
        if let Err(e) = value.validate() {
            message.set(Some((false, translate(language.get(), e.message_key()).to_owned())));
            return;
        }
        busy.set(true);
        message.set(None);

        #[cfg(feature = "hydrate")]
        {
            let Some(store) = auth.store() else {
                busy.set(false);
                return;
            };
            let alive = alive.clone();
            leptos::task::spawn_local(async move {
                let result = store.update_password(&value.new_password).await;
                if !alive.is_alive() {
                    return;
                }
                busy.set(false);
                match result {
                    Ok(()) => {
                        draft.set(PasswordDraft::default());
                        message.set(Some((true, translate(language.get_untracked(), "profile.passwordUpdated").to_owned())));
                    }
                    Err(e) => {
                        message.set(Some((false, crate::util::errors::auth_error_text(language.get_untracked(), &e))));
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = &alive;
    };

    let on_sign_out = move |_| {
        if busy.get() {
            return;
        }
        busy.set(true);
        #[cfg(feature = "hydrate")]
        {
            let Some(store) = auth.store() else {
                busy.set(false);
                return;
            };
            let alive = sign_out_alive.clone();
            leptos::task::spawn_local(async move {
                store.logout().await;
                if alive.is_alive() {
                    busy.set(false);
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = &sign_out_alive;
    };

    let user = move || auth.user();
    let name = move || user().map(|u| u.label().to_owned()).unwrap_or_default();
    let email = move || user().map(|u| u.email).unwrap_or_default();
    let id = move || user().map(|u| u.id).unwrap_or_default();
    let initial = move || user().map_or_else(|| "?".to_owned(), |u| u.initial());

    view! {
        <div class="profile-page">
            <aside class="profile-page__sidebar">
                <a href="/profile" class="profile-page__tab profile-page__tab--active">
                    {tr(language, "nav.profile")}
                </a>
                <a href="/history" class="profile-page__tab">
                    {tr(language, "nav.history")}
                </a>
                <button class="profile-page__sign-out" disabled=move || busy.get() on:click=on_sign_out>
                    {tr(language, "profile.signOut")}
                </button>
            </aside>
            <section class="profile-page__content">
                <div class="profile-card">
                    <div class="profile-card__avatar">
                        {move || match user().and_then(|u| u.avatar_url) {
                            Some(src) => view! { <img src=src alt="" /> }.into_any(),
                            None => view! { <span>{initial}</span> }.into_any(),
                        }}
                    </div>
                    <div class="profile-card__identity">
                        <h1>{name}</h1>
                        <p class="profile-card__id">"ID: " {id}</p>
                        <p class="profile-card__email">"Email: " {email}</p>
                    </div>
                </div>
                <form class="profile-password" on:submit=on_change_password>
                    <h2>{tr(language, "profile.changePassword")}</h2>
                    <input
                        class="profile-password__input"
                        type="password"
                        autocomplete="new-password"
                        placeholder=tr(language, "profile.newPassword")
                        prop:value=move || draft.with(|d| d.new_password.clone())
                        on:input=move |ev| draft.update(|d| d.new_password = event_target_value(&ev))
                    />
                    <input
                        class="profile-password__input"
                        type="password"
                        autocomplete="new-password"
                        placeholder=tr(language, "profile.confirmNewPassword")
                        prop:value=move || draft.with(|d| d.confirm_password.clone())
                        on:input=move |ev| draft.update(|d| d.confirm_password = event_target_value(&ev))
                    />
                    {move || {
                        message
                            .get()
                            .map(|(ok, text)| {
                                view! {
                                    <p class="profile-password__message" class:profile-password__message--ok=ok>
                                        {text}
                                    </p>
                                }
                            })
                    }}
                    <button class="profile-password__submit" type="submit" disabled=move || busy.get()>
                        {tr(language, "profile.updatePassword")}
                    </button>
                </form>
            </section>
        </div>
    }
}

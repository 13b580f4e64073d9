//! Project metadata form that generates an RFP or TOR proposal.

use contract::{Proposal, ProposalKind};
use leptos::prelude::*;

use crate::components::layout::Layout;
use crate::components::proposal_view::ProposalView;
use crate::components::require_auth::RequireAuth;
use crate::state::auth::use_auth;
use crate::state::forms::{FormDraft, field_keys, is_multiline};
use crate::state::language::{tr, use_language};
use crate::util::i18n::translate;
use crate::util::liveness::Liveness;

#[component]
pub fn UploadPage() -> impl IntoView {
    view! {
        <Layout active="/upload">
            <RequireAuth>
                <UploadForm />
            </RequireAuth>
        </Layout>
    }
}

#[component]
fn UploadForm() -> impl IntoView {
    let auth = use_auth();
    let language = use_language();
    let draft = RwSignal::new(FormDraft::default());
    let result = RwSignal::new(None::<Proposal>);
    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);
    let alive = Liveness::install();

    let on_generate = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let request = match draft.with(FormDraft::to_request) {
            Ok(request) => request,
            Err(e) => {
                error.set(Some(translate(language.get(), e.message_key()).to_owned()));
                return;
            }
        };
        busy.set(true);
        error.set(None);
        result.set(None);

        #[cfg(feature = "hydrate")]
        {
            let Some(backend) = auth.backend() else {
                busy.set(false);
                return;
            };
            let alive = alive.clone();
            leptos::task::spawn_local(async move {
                let response = backend.generate_proposal(&request).await;
                if !alive.is_alive() {
                    return;
                }
                busy.set(false);
                match response {
                    Ok(proposal) => result.set(Some(proposal)),
                    Err(e) => error.set(Some(crate::util::errors::api_error_text(language.get_untracked(), &e))),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = (auth, &alive, request);
    };

    let field_input = move |field: &'static str| {
        let (label, placeholder) = field_keys(field);
        let value = move || draft.with(|d| d.get(field).to_owned());
        let control = if is_multiline(field) {
            view! {
                <textarea
                    class="upload-form__input upload-form__input--multiline"
                    rows="3"
                    placeholder=tr(language, placeholder)
                    prop:value=value
                    on:input=move |ev| draft.update(|d| d.set(field, event_target_value(&ev)))
                ></textarea>
            }
            .into_any()
        } else {
            view! {
                <input
                    class="upload-form__input"
                    type="text"
                    placeholder=tr(language, placeholder)
                    prop:value=value
                    on:input=move |ev| draft.update(|d| d.set(field, event_target_value(&ev)))
                />
            }
            .into_any()
        };
        view! {
            <label class="upload-form__field">
                <span class="upload-form__label">{tr(language, label)}</span>
                {control}
            </label>
        }
    };

    view! {
        <div class="upload-page">
            <header class="upload-page__header">
                <h1>{tr(language, "upload.title")}</h1>
                <p>{tr(language, "upload.subtitle")}</p>
            </header>
            <form class="upload-form" on:submit=on_generate>
                <div class="upload-form__kind" role="radiogroup">
                    <span class="upload-form__label">{tr(language, "upload.documentType")}</span>
                    {ProposalKind::ALL
                        .into_iter()
                        .map(|kind| {
                            view! {
                                <button
                                    type="button"
                                    class="upload-form__kind-option"
                                    class:upload-form__kind-option--active=move || draft.with(|d| d.kind == kind)
                                    on:click=move |_| draft.update(|d| d.switch_kind(kind))
                                >
                                    {kind.as_str()}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
                {move || draft.with(|d| d.kind).fields().iter().map(|&field| field_input(field)).collect_view()}
                <Show when=move || error.get().is_some()>
                    <p class="upload-form__error">{move || error.get().unwrap_or_default()}</p>
                </Show>
                <button class="upload-form__submit" type="submit" disabled=move || busy.get()>
                    {move || {
                        if busy.get() { tr(language, "upload.generating")() } else { tr(language, "upload.generate")() }
                    }}
                </button>
                <p class="upload-form__note">{tr(language, "upload.secureNote")}</p>
            </form>
            {move || {
                result
                    .get()
                    .map(|proposal| {
                        view! {
                            <section class="upload-page__result">
                                <h2>{tr(language, "upload.resultTitle")}</h2>
                                <ProposalView proposal=proposal />
                            </section>
                        }
                    })
            }}
        </div>
    }
}

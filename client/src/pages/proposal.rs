//! Stored proposal for one document, reached from the history list.

use contract::Proposal;
use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::components::layout::Layout;
use crate::components::proposal_view::ProposalView;
use crate::components::require_auth::RequireAuth;
use crate::state::auth::use_auth;
use crate::state::language::{tr, use_language};
use crate::util::liveness::Liveness;

#[component]
pub fn ProposalPage() -> impl IntoView {
    view! {
        <Layout active="/history">
            <RequireAuth>
                <ProposalLoader />
            </RequireAuth>
        </Layout>
    }
}

#[component]
fn ProposalLoader() -> impl IntoView {
    let auth = use_auth();
    let language = use_language();
    let params = use_params_map();
    let proposal = RwSignal::new(None::<Proposal>);
    let error = RwSignal::new(None::<String>);
    let loading = RwSignal::new(false);
    let alive = Liveness::install();

    // Reload when the route parameter changes without remounting.
    Effect::new(move || {
        let Some(document_id) = params.with(|p| p.get("document_id")).filter(|id| !id.is_empty()) else {
            return;
        };
        loading.set(true);
        error.set(None);
        proposal.set(None);

        #[cfg(feature = "hydrate")]
        {
            let Some(backend) = auth.backend() else {
                loading.set(false);
                return;
            };
            let alive = alive.clone();
            leptos::task::spawn_local(async move {
                let result = backend.view_proposal(&document_id).await;
                if !alive.is_alive() {
                    return;
                }
                loading.set(false);
                match result {
                    Ok(found) => proposal.set(Some(found)),
                    Err(e) => error.set(Some(crate::util::errors::api_error_text(language.get_untracked(), &e))),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = (auth, &alive, document_id);
    });

    view! {
        <div class="proposal-page">
            <a href="/history" class="proposal-page__back">{tr(language, "history.back")}</a>
            <h1>{tr(language, "proposal.title")}</h1>
            <Show when=move || loading.get()>
                <p class="proposal-page__status">{tr(language, "common.loading")}</p>
            </Show>
            <Show when=move || error.get().is_some()>
                <p class="proposal-page__error">{move || error.get().unwrap_or_default()}</p>
            </Show>
            {move || proposal.get().map(|found| view! { <ProposalView proposal=found /> })}
        </div>
    }
}

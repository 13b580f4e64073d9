//! Generated-document history: search, view, download and delete.

use contract::DocumentSummary;
use leptos::prelude::*;

use crate::components::layout::Layout;
use crate::components::require_auth::RequireAuth;
use crate::pages::document_list::load_documents;
use crate::state::auth::use_auth;
use crate::state::documents::DocumentsState;
use crate::state::language::{tr, use_language};
use crate::util::liveness::Liveness;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum RowAction {
    Download,
    Delete,
}

#[component]
pub fn HistoryPage() -> impl IntoView {
    view! {
        <Layout active="/history">
            <RequireAuth>
                <HistoryList />
            </RequireAuth>
        </Layout>
    }
}

#[component]
fn HistoryList() -> impl IntoView {
    let auth = use_auth();
    let language = use_language();
    let documents = RwSignal::new(DocumentsState::default());
    // Document id with a request in flight; one row action at a time.
    let pending = RwSignal::new(None::<String>);
    let error = RwSignal::new(None::<String>);
    let alive = Liveness::install();

    load_documents(auth, documents, language, alive.clone());

    let run = Callback::new(move |(document_id, action): (String, RowAction)| {
        if pending.with_untracked(Option::is_some) {
            return;
        }
        pending.set(Some(document_id.clone()));
        error.set(None);

        #[cfg(feature = "hydrate")]
        {
            let Some(backend) = auth.backend() else {
                pending.set(None);
                return;
            };
            let alive = alive.clone();
            leptos::task::spawn_local(async move {
                let result = match action {
                    RowAction::Download => backend.export_pdf(&document_id).await.map(|link| open_in_new_tab(&link.url)),
                    RowAction::Delete => backend.delete_document(&document_id).await,
                };
                if !alive.is_alive() {
                    return;
                }
                pending.set(None);
                match result {
                    Ok(()) if action == RowAction::Delete => {
                        documents.update(|d| d.remove(&document_id));
                        load_documents(auth, documents, language, alive);
                    }
                    Ok(()) => {}
                    Err(e) => error.set(Some(crate::util::errors::api_error_text(language.get_untracked(), &e))),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = (&alive, action);
    });

    view! {
        <div class="history-page">
            <header class="history-page__header">
                <h1>{tr(language, "history.title")}</h1>
                <p>{tr(language, "history.subtitle")}</p>
            </header>
            <input
                class="history-page__search"
                type="search"
                placeholder=tr(language, "history.searchAnalysis")
                prop:value=move || documents.with(|d| d.query.clone())
                on:input=move |ev| documents.update(|d| d.query = event_target_value(&ev))
            />
            <Show when=move || documents.with(|d| d.error.is_some()) || error.get().is_some()>
                <p class="history-page__error">
                    {move || error.get().or_else(|| documents.with(|d| d.error.clone())).unwrap_or_default()}
                </p>
            </Show>
            <Show
                when=move || documents.with(|d| !d.loading || !d.items.is_empty())
                fallback=move || view! { <p class="history-page__status">{tr(language, "common.loading")}</p> }
            >
                <Show
                    when=move || documents.with(|d| !d.filtered().is_empty())
                    fallback=move || {
                        view! {
                            <div class="history-page__empty">
                                <p>{tr(language, "profile.noHistory")}</p>
                                <a href="/upload">{tr(language, "profile.uploadToSee")}</a>
                            </div>
                        }
                    }
                >
                    <ul class="history-list">
                        <For
                            each=move || documents.with(DocumentsState::filtered)
                            key=|doc| doc.document_id.clone()
                            children=move |doc| view! { <HistoryRow doc=doc pending=pending run=run /> }
                        />
                    </ul>
                </Show>
            </Show>
        </div>
    }
}

#[component]
fn HistoryRow(
    doc: DocumentSummary,
    pending: RwSignal<Option<String>>,
    run: Callback<(String, RowAction)>,
) -> impl IntoView {
    let language = use_language();
    let id = doc.document_id.clone();
    let busy = {
        let id = id.clone();
        move || pending.with(|p| p.as_deref() == Some(id.as_str()))
    };
    let download_id = id.clone();
    let delete_id = id.clone();

    view! {
        <li class="history-list__row">
            <div class="history-list__meta">
                <span class="history-list__name">{doc.project_name}</span>
                <span class="history-list__id">{id.clone()}</span>
            </div>
            <div class="history-list__actions">
                <a class="history-list__action" href=format!("/proposal/{id}")>
                    {tr(language, "history.view")}
                </a>
                <button
                    class="history-list__action"
                    disabled=move || pending.with(Option::is_some)
                    on:click=move |_| run.run((download_id.clone(), RowAction::Download))
                >
                    {tr(language, "history.download")}
                </button>
                <button
                    class="history-list__action history-list__action--danger"
                    class:history-list__action--busy=busy
                    disabled=move || pending.with(Option::is_some)
                    on:click=move |_| run.run((delete_id.clone(), RowAction::Delete))
                >
                    {tr(language, "history.delete")}
                </button>
            </div>
        </li>
    }
}

#[cfg(feature = "hydrate")]
fn open_in_new_tab(url: &str) {
    let Some(window) = web_sys::window() else {
        return;
    };
    if let Err(e) = window.open_with_url_and_target(url, "_blank") {
        log::warn!("could not open export link: {e:?}");
    }
}

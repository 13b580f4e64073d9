//! Document analysis page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Lists the user's uploaded documents, runs the analysis function on the
//! selected one, and renders the structured result: summary, extracted
//! fields, differentiators, risks and recommendations.

use contract::Analysis;
use leptos::prelude::*;

use crate::components::layout::Layout;
use crate::components::require_auth::RequireAuth;
use crate::pages::document_list::load_documents;
use crate::state::auth::use_auth;
use crate::state::documents::DocumentsState;
use crate::state::language::{tr, use_language};
use crate::util::liveness::Liveness;

#[component]
pub fn AnalyzerPage() -> impl IntoView {
    view! {
        <Layout active="/analyzer">
            <RequireAuth>
                <AnalyzerPanel />
            </RequireAuth>
        </Layout>
    }
}

#[component]
fn AnalyzerPanel() -> impl IntoView {
    let auth = use_auth();
    let language = use_language();
    let documents = RwSignal::new(DocumentsState::default());
    let selected = RwSignal::new(String::new());
    let analysis = RwSignal::new(None::<Analysis>);
    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);
    let alive = Liveness::install();

    load_documents(auth, documents, language, alive.clone());

    let on_analyze = move |_| {
        let document_id = selected.get();
        if busy.get() || document_id.is_empty() {
            return;
        }
        busy.set(true);
        error.set(None);
        analysis.set(None);

        #[cfg(feature = "hydrate")]
        {
            let Some(backend) = auth.backend() else {
                busy.set(false);
                return;
            };
            let alive = alive.clone();
            leptos::task::spawn_local(async move {
                let result = backend.analyze_document(&document_id).await;
                if !alive.is_alive() {
                    return;
                }
                busy.set(false);
                match result {
                    Ok(found) => analysis.set(Some(found)),
                    Err(e) => error.set(Some(crate::util::errors::api_error_text(language.get_untracked(), &e))),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = (&alive, document_id);
    };

    let count = move |list: fn(&Analysis) -> usize| move || analysis.with(|a| a.as_ref().map_or(0, list));

    view! {
        <div class="analyzer-page">
            <header class="analyzer-page__header">
                <h1>{tr(language, "analyzer.title")}</h1>
                <p>{tr(language, "analyzer.subtitle")}</p>
            </header>
            <div class="analyzer-page__controls">
                <select
                    class="analyzer-page__select"
                    prop:value=move || selected.get()
                    on:change=move |ev| selected.set(event_target_value(&ev))
                >
                    <option value="">
                        {move || {
                            if documents.with(|d| !d.loading && d.items.is_empty()) {
                                tr(language, "analyzer.noDocuments")()
                            } else {
                                tr(language, "analyzer.selectDocument")()
                            }
                        }}
                    </option>
                    <For
                        each=move || documents.get().items
                        key=|doc| doc.document_id.clone()
                        children=move |doc| {
                            let label = if doc.project_name.is_empty() { doc.document_id.clone() } else { doc.project_name.clone() };
                            view! { <option value=doc.document_id>{label}</option> }
                        }
                    />
                </select>
                <button
                    class="analyzer-page__analyze"
                    disabled=move || busy.get() || selected.with(String::is_empty)
                    on:click=on_analyze
                >
                    {move || {
                        if busy.get() { tr(language, "analyzer.analyzing")() } else { tr(language, "analyzer.analyze")() }
                    }}
                </button>
            </div>
            <Show when=move || documents.with(|d| d.error.is_some())>
                <p class="analyzer-page__error">{move || documents.with(|d| d.error.clone().unwrap_or_default())}</p>
            </Show>
            <Show when=move || error.get().is_some()>
                <p class="analyzer-page__error">{move || error.get().unwrap_or_default()}</p>
            </Show>

            <div class="insight-cards">
                <InsightCard
                    count=Signal::derive(count(|a| a.fields.len()))
                    label="analyzer.findings"
                    description="analyzer.findingsDesc"
                />
                <InsightCard
                    count=Signal::derive(count(|a| a.risks.len()))
                    label="analyzer.issues"
                    description="analyzer.issuesDesc"
                />
                <InsightCard
                    count=Signal::derive(count(|a| a.recommendations.len()))
                    label="analyzer.recommendations"
                    description="analyzer.recommendationsDesc"
                />
            </div>

            {move || analysis.get().map(|found| view! { <AnalysisResult analysis=found /> })}
        </div>
    }
}

#[component]
fn InsightCard(count: Signal<usize>, label: &'static str, description: &'static str) -> impl IntoView {
    let language = use_language();
    view! {
        <div class="insight-card">
            <span class="insight-card__count">{move || count.get()}</span>
            <span class="insight-card__label">{tr(language, label)}</span>
            <p class="insight-card__description">{tr(language, description)}</p>
        </div>
    }
}

#[component]
fn AnalysisResult(analysis: Analysis) -> impl IntoView {
    let language = use_language();
    if analysis.is_empty() {
        return view! { <p class="analysis-result__empty">{tr(language, "analyzer.noResult")}</p> }.into_any();
    }

    let Analysis { summary, fields, differentiators, risks, recommendations } = analysis;
    let list = |title: &'static str, items: Vec<String>| {
        (!items.is_empty()).then(|| {
            view! {
                <section class="analysis-result__section">
                    <h3>{tr(language, title)}</h3>
                    <ul>{items.into_iter().map(|item| view! { <li>{item}</li> }).collect_view()}</ul>
                </section>
            }
        })
    };

    view! {
        <div class="analysis-result">
            <h2>{tr(language, "analyzer.resultsTitle")}</h2>
            <p class="analysis-result__subtitle">{tr(language, "analyzer.resultsSubtitle")}</p>
            {summary
                .map(|text| {
                    view! {
                        <section class="analysis-result__section">
                            <h3>{tr(language, "analyzer.executiveSummary")}</h3>
                            <p class="analysis-result__summary">{text}</p>
                        </section>
                    }
                })}
            {(!fields.is_empty())
                .then(|| {
                    view! {
                        <section class="analysis-result__section">
                            <h3>{tr(language, "analyzer.fields")}</h3>
                            <dl class="analysis-result__fields">
                                {fields
                                    .into_iter()
                                    .map(|(name, value)| {
                                        view! {
                                            <dt>{contract::section_title(&name)}</dt>
                                            <dd>{value}</dd>
                                        }
                                    })
                                    .collect_view()}
                            </dl>
                        </section>
                    }
                })}
            {list("analyzer.differentiators", differentiators)}
            {list("analyzer.issues", risks)}
            {list("analyzer.recommendations", recommendations)}
        </div>
    }
    .into_any()
}

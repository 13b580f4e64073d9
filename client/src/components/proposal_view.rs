//! Collapsible rendering of generated proposal sections.

use contract::Proposal;
use leptos::prelude::*;

use crate::state::language::{tr, use_language};

#[component]
pub fn ProposalView(proposal: Proposal) -> impl IntoView {
    let language = use_language();
    if proposal.is_empty() {
        return view! { <p class="proposal-view__empty">{tr(language, "proposal.empty")}</p> }.into_any();
    }

    view! {
        <div class="proposal-view">
            {proposal
                .sections
                .into_iter()
                .enumerate()
                .map(|(index, section)| {
                    view! {
                        <details class="proposal-view__section" open={index == 0}>
                            <summary class="proposal-view__title">{section.title}</summary>
                            <div class="proposal-view__body">{section.body}</div>
                        </details>
                    }
                })
                .collect_view()}
        </div>
    }
    .into_any()
}

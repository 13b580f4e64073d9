//! Shared document-list fetch for the analyzer and history pages.

use contract::ApiError;
use leptos::prelude::*;

use crate::state::auth::AuthContext;
use crate::state::documents::DocumentsState;
use crate::util::i18n::Language;
use crate::util::liveness::Liveness;

/// Fetch the signed-in user's documents into `documents`.
///
/// Skips when a load is already running and fails at once without a
/// backend. Results for an unmounted view are dropped.
pub(crate) fn load_documents(
    auth: AuthContext,
    documents: RwSignal<DocumentsState>,
    language: RwSignal<Language>,
    alive: Liveness,
) {
    if documents.with_untracked(|d| d.loading) {
        return;
    }
    let mut backend = None;
    documents.update(|d| {
        backend = d.start_load(auth.backend(), || {
            crate::util::errors::api_error_text(language.get_untracked(), &ApiError::NotAuthenticated)
        });
    });
    let Some(backend) = backend else {
        return;
    };

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let result = backend.list_documents().await;
        if !alive.is_alive() {
            return;
        }
        match result {
            Ok(items) => documents.update(|d| d.loaded(items)),
            Err(e) => {
                let message = crate::util::errors::api_error_text(language.get_untracked(), &e);
                documents.update(|d| d.failed(message));
            }
        }
    });
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (backend, alive);
    }
}

//! Document list shown by the analyzer and history views.

#[cfg(test)]
#[path = "documents_test.rs"]
mod documents_test;

use contract::DocumentSummary;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DocumentsState {
    pub items: Vec<DocumentSummary>,
    pub loading: bool,
    /// Translated message from the last failed call.
    pub error: Option<String>,
    pub query: String,
}

impl DocumentsState {
    /// Begin a load through `backend` unless one is already running.
    ///
    /// Returns the backend to fetch with. Without one the load fails at once
    /// with `unavailable` so the view never stays on its loading indicator.
    pub fn start_load<B>(&mut self, backend: Option<B>, unavailable: impl FnOnce() -> String) -> Option<B> {
        if self.loading {
            return None;
        }
        match backend {
            Some(backend) => {
                self.begin_load();
                Some(backend)
            }
            None => {
                self.failed(unavailable());
                None
            }
        }
    }

    pub fn begin_load(&mut self) {
        self.loading = true;
        self.error = None;
    }

    pub fn loaded(&mut self, items: Vec<DocumentSummary>) {
        self.items = items;
        self.loading = false;
        self.error = None;
    }

    pub fn failed(&mut self, message: String) {
        self.loading = false;
        self.error = Some(message);
    }

    /// Drop a document after a successful delete.
    pub fn remove(&mut self, document_id: &str) {
        self.items.retain(|d| d.document_id != document_id);
    }

    /// Items matching the search box, in backend order.
    pub fn filtered(&self) -> Vec<DocumentSummary> {
        self.items.iter().filter(|d| d.matches(&self.query)).cloned().collect()
    }
}

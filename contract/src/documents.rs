#[cfg(test)]
#[path = "documents_test.rs"]
mod documents_test;

use serde::{Deserialize, Serialize};

/// One row of the "list documents" response.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentSummary {
    pub document_id: String,
    #[serde(default)]
    pub project_name: String,
}

impl DocumentSummary {
    /// Case-insensitive project-name match; an empty query matches everything.
    #[must_use]
    pub fn matches(&self, query: &str) -> bool {
        let query = query.trim();
        query.is_empty() || self.project_name.to_lowercase().contains(&query.to_lowercase())
    }
}

/// Download location returned by the PDF export.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportLink {
    pub url: String,
}

//! Typed contract for the hosted document functions.
//!
//! Every call asks its [`SessionSource`] for the current session, so a token
//! rotated by a refresh is picked up on the next request. Without a session
//! the call fails with [`ApiError::NotAuthenticated`] before touching the
//! transport. A lookup that cannot reach the identity provider surfaces as
//! [`ApiError::Transport`].

#[cfg(test)]
#[path = "backend_test.rs"]
mod backend_test;

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::analysis::Analysis;
use crate::documents::{DocumentSummary, ExportLink};
use crate::proposal::{GenerateRequest, Proposal};
use crate::provider::AuthError;
use crate::session::Session;
use crate::transport::{HttpRequest, HttpResponse, Method, Transport, error_message};

const ERROR_KEYS: &[&str] = &["error", "message"];

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("not signed in")]
    NotAuthenticated,
    #[error("network error: {0}")]
    Transport(String),
    #[error("{message}")]
    Backend { status: u16, message: String },
    #[error("unexpected response: {0}")]
    Decode(String),
}

impl From<AuthError> for ApiError {
    fn from(error: AuthError) -> Self {
        match error {
            AuthError::Transport(message) => Self::Transport(message),
            AuthError::Decode(message) => Self::Decode(message),
            _ => Self::NotAuthenticated,
        }
    }
}

/// Where backend calls get their bearer credential.
#[async_trait::async_trait(?Send)]
pub trait SessionSource {
    /// `Ok(None)` means signed out; a lookup that could not complete is an error.
    async fn current_session(&self) -> Result<Option<Session>, ApiError>;
}

/// Named hosted functions.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Function {
    ListDocuments,
    AnalyzeDocument,
    GenerateProposal,
    ExportPdf,
    ViewProposal,
    DeleteDocument,
}

impl Function {
    pub const ALL: [Self; 6] = [
        Self::ListDocuments,
        Self::AnalyzeDocument,
        Self::GenerateProposal,
        Self::ExportPdf,
        Self::ViewProposal,
        Self::DeleteDocument,
    ];

    #[must_use]
    pub fn slug(self) -> &'static str {
        match self {
            Self::ListDocuments => "list-analyzer",
            Self::AnalyzeDocument => "smooth-responder",
            Self::GenerateProposal => "generate-proposal",
            Self::ExportPdf => "export-pdf",
            Self::ViewProposal => "view-proposal",
            Self::DeleteDocument => "delete-document",
        }
    }

    #[must_use]
    pub fn method(self) -> Method {
        match self {
            Self::ListDocuments | Self::ViewProposal => Method::Get,
            Self::AnalyzeDocument | Self::GenerateProposal | Self::ExportPdf => Method::Post,
            Self::DeleteDocument => Method::Delete,
        }
    }
}

/// Message for a failed call: the body's `error`, then `message`, then a
/// status fallback.
#[must_use]
pub fn backend_error_message(status: u16, body: &str) -> String {
    error_message(body, ERROR_KEYS).unwrap_or_else(|| format!("request failed with status {status}"))
}

pub struct BackendClient<T, S> {
    functions_url: String,
    transport: T,
    sessions: S,
}

impl<T: Transport, S: SessionSource> BackendClient<T, S> {
    pub fn new(functions_url: impl Into<String>, transport: T, sessions: S) -> Self {
        let functions_url = functions_url.into().trim_end_matches('/').to_owned();
        Self { functions_url, transport, sessions }
    }

    /// `{functions_url}/{slug}` plus a percent-encoded query string.
    #[must_use]
    pub fn url(&self, function: Function, query: &[(&str, &str)]) -> String {
        let base = format!("{}/{}", self.functions_url, function.slug());
        if query.is_empty() {
            return base;
        }
        let encoded = url::form_urlencoded::Serializer::new(String::new())
            .extend_pairs(query)
            .finish();
        format!("{base}?{encoded}")
    }

    async fn session(&self) -> Result<Session, ApiError> {
        self.sessions.current_session().await?.ok_or(ApiError::NotAuthenticated)
    }

    async fn send(
        &self,
        session: &Session,
        function: Function,
        query: &[(&str, &str)],
        body: Option<Value>,
    ) -> Result<HttpResponse, ApiError> {
        let mut request = HttpRequest::new(function.method(), self.url(function, query))
            .bearer(&session.access_token)
            .header("Content-Type", "application/json");
        if let Some(body) = body {
            request = request.json(&body).map_err(|e| ApiError::Decode(e.to_string()))?;
        }
        log::debug!("backend: {} {}", function.method().as_str(), function.slug());
        let response = self
            .transport
            .send(request)
            .await
            .map_err(|e| ApiError::Transport(e.0))?;
        if !response.is_success() {
            let message = backend_error_message(response.status, &response.body);
            log::warn!("backend: {} failed with {}: {message}", function.slug(), response.status);
            return Err(ApiError::Backend { status: response.status, message });
        }
        Ok(response)
    }

    async fn call<R: DeserializeOwned>(
        &self,
        function: Function,
        query: &[(&str, &str)],
        body: Option<Value>,
    ) -> Result<R, ApiError> {
        let session = self.session().await?;
        let response = self.send(&session, function, query, body).await?;
        decode(&response)
    }

    /// Documents owned by the signed-in user.
    ///
    /// # Errors
    ///
    /// See [`ApiError`]; a non-array body is [`ApiError::Decode`].
    pub async fn list_documents(&self) -> Result<Vec<DocumentSummary>, ApiError> {
        let session = self.session().await?;
        let response = self
            .send(&session, Function::ListDocuments, &[("user_id", session.user.id.as_str())], None)
            .await?;
        decode(&response)
    }

    /// # Errors
    ///
    /// See [`ApiError`]; a non-object body is [`ApiError::Decode`].
    pub async fn analyze_document(&self, document_id: &str) -> Result<Analysis, ApiError> {
        let body = serde_json::json!({ "document_id": document_id });
        let value: Value = self.call(Function::AnalyzeDocument, &[], Some(body)).await?;
        Analysis::from_value(value).map_err(ApiError::Decode)
    }

    /// # Errors
    ///
    /// See [`ApiError`].
    pub async fn generate_proposal(&self, request: &GenerateRequest) -> Result<Proposal, ApiError> {
        let body = serde_json::to_value(request).map_err(|e| ApiError::Decode(e.to_string()))?;
        let value: Value = self.call(Function::GenerateProposal, &[], Some(body)).await?;
        Proposal::from_response(value).map_err(ApiError::Decode)
    }

    /// # Errors
    ///
    /// See [`ApiError`]; a 2xx body carrying `error` is [`ApiError::Backend`].
    pub async fn export_pdf(&self, document_id: &str) -> Result<ExportLink, ApiError> {
        let body = serde_json::json!({ "documentId": document_id });
        let value: Value = self.call(Function::ExportPdf, &[], Some(body)).await?;
        reject_error_body(&value)?;
        serde_json::from_value(value).map_err(|e| ApiError::Decode(e.to_string()))
    }

    /// # Errors
    ///
    /// See [`ApiError`].
    pub async fn view_proposal(&self, document_id: &str) -> Result<Proposal, ApiError> {
        let value: Value = self
            .call(Function::ViewProposal, &[("document_id", document_id)], None)
            .await?;
        Proposal::from_response(value).map_err(ApiError::Decode)
    }

    /// # Errors
    ///
    /// See [`ApiError`]; a 2xx body carrying `error` is [`ApiError::Backend`].
    pub async fn delete_document(&self, document_id: &str) -> Result<(), ApiError> {
        let value: Value = self
            .call(Function::DeleteDocument, &[("document_id", document_id)], None)
            .await?;
        reject_error_body(&value)
    }
}

fn decode<R: DeserializeOwned>(response: &HttpResponse) -> Result<R, ApiError> {
    response.json().map_err(|e| ApiError::Decode(e.to_string()))
}

fn reject_error_body(value: &Value) -> Result<(), ApiError> {
    match value.get("error").and_then(Value::as_str) {
        Some(message) if !message.trim().is_empty() => Err(ApiError::Backend { status: 200, message: message.to_owned() }),
        _ => Ok(()),
    }
}

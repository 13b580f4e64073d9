use std::cell::{Cell, RefCell};

use super::*;
use crate::proposal::ProposalKind;
use crate::test_support::{ScriptedTransport, session};

/// Session source that hands out a scripted sequence of lookups.
struct Sessions {
    queue: RefCell<Vec<Result<Option<Session>, ApiError>>>,
    calls: Cell<u32>,
}

impl Sessions {
    fn fixed(session: Option<Session>) -> Self {
        Self { queue: RefCell::new(vec![Ok(session)]), calls: Cell::new(0) }
    }

    fn failing(error: ApiError) -> Self {
        Self { queue: RefCell::new(vec![Err(error)]), calls: Cell::new(0) }
    }

    fn sequence(sessions: Vec<Option<Session>>) -> Self {
        let queue = sessions.into_iter().rev().map(Ok).collect();
        Self { queue: RefCell::new(queue), calls: Cell::new(0) }
    }
}

#[async_trait::async_trait(?Send)]
impl SessionSource for Sessions {
    async fn current_session(&self) -> Result<Option<Session>, ApiError> {
        self.calls.set(self.calls.get() + 1);
        let mut queue = self.queue.borrow_mut();
        if queue.len() > 1 {
            queue.pop().unwrap_or(Ok(None))
        } else {
            queue.last().cloned().unwrap_or(Ok(None))
        }
    }
}

fn client(transport: &ScriptedTransport, sessions: Sessions) -> BackendClient<ScriptedTransport, Sessions> {
    BackendClient::new("https://proj.supabase.co/functions/v1/", transport.clone(), sessions)
}

fn signed_in() -> Sessions {
    Sessions::fixed(Some(session("u1", "tok-1")))
}

// =============================================================
// Contract basics
// =============================================================

#[test]
fn every_function_has_a_distinct_slug() {
    let mut slugs: Vec<&str> = Function::ALL.iter().map(|f| f.slug()).collect();
    slugs.sort_unstable();
    slugs.dedup();
    assert_eq!(slugs.len(), Function::ALL.len());
}

#[test]
fn url_percent_encodes_query_values() {
    let client = client(&ScriptedTransport::new(), signed_in());
    assert_eq!(
        client.url(Function::ViewProposal, &[("document_id", "a b&c")]),
        "https://proj.supabase.co/functions/v1/view-proposal?document_id=a+b%26c"
    );
    assert_eq!(client.url(Function::ExportPdf, &[]), "https://proj.supabase.co/functions/v1/export-pdf");
}

#[test]
fn error_message_prefers_error_then_message_then_status() {
    assert_eq!(backend_error_message(400, r#"{"error":"bad id","message":"ignored"}"#), "bad id");
    assert_eq!(backend_error_message(500, r#"{"message":"boom"}"#), "boom");
    assert_eq!(backend_error_message(502, "<html>gateway</html>"), "request failed with status 502");
    assert_eq!(backend_error_message(404, r#"{"error":""}"#), "request failed with status 404");
}

#[tokio::test]
async fn no_session_never_reaches_transport() {
    let transport = ScriptedTransport::new();
    let client = client(&transport, Sessions::fixed(None));

    assert_eq!(client.list_documents().await, Err(ApiError::NotAuthenticated));
    assert_eq!(client.analyze_document("d1").await, Err(ApiError::NotAuthenticated));
    assert_eq!(client.delete_document("d1").await, Err(ApiError::NotAuthenticated));
    assert_eq!(transport.request_count(), 0);
}

#[tokio::test]
async fn session_is_fetched_for_every_call() {
    let transport = ScriptedTransport::new();
    transport.respond(200, "[]").respond(200, "[]");
    let client = client(
        &transport,
        Sessions::sequence(vec![Some(session("u1", "tok-1")), Some(session("u1", "tok-2"))]),
    );

    client.list_documents().await.unwrap();
    client.list_documents().await.unwrap();

    let tokens: Vec<Option<String>> = transport
        .requests()
        .iter()
        .map(|r| r.header_value("Authorization").map(ToOwned::to_owned))
        .collect();
    assert_eq!(tokens, vec![Some("Bearer tok-1".to_owned()), Some("Bearer tok-2".to_owned())]);
    assert_eq!(client.sessions.calls.get(), 2);
}

#[tokio::test]
async fn non_success_status_is_backend_error() {
    let transport = ScriptedTransport::new();
    transport.respond(500, r#"{"error":"Document not found"}"#);

    let err = client(&transport, signed_in()).analyze_document("missing").await.unwrap_err();

    assert_eq!(err, ApiError::Backend { status: 500, message: "Document not found".to_owned() });
}

#[tokio::test]
async fn transport_failure_is_reported() {
    let transport = ScriptedTransport::new();
    transport.fail("connection refused");
    let err = client(&transport, signed_in()).list_documents().await.unwrap_err();
    assert_eq!(err, ApiError::Transport("connection refused".to_owned()));
}

#[tokio::test]
async fn unreachable_session_lookup_is_transport_error() {
    let transport = ScriptedTransport::new();
    let client = client(&transport, Sessions::failing(ApiError::Transport("offline".to_owned())));

    assert_eq!(client.list_documents().await, Err(ApiError::Transport("offline".to_owned())));
    assert_eq!(transport.request_count(), 0);
}

#[test]
fn auth_errors_keep_their_category() {
    assert_eq!(ApiError::from(AuthError::Transport("offline".to_owned())), ApiError::Transport("offline".to_owned()));
    assert_eq!(ApiError::from(AuthError::Decode("bad json".to_owned())), ApiError::Decode("bad json".to_owned()));
    assert_eq!(ApiError::from(AuthError::NotAuthenticated), ApiError::NotAuthenticated);
    assert_eq!(
        ApiError::from(AuthError::Provider { status: 400, message: "invalid_grant".to_owned() }),
        ApiError::NotAuthenticated
    );
}

// =============================================================
// Per-function shapes
// =============================================================

#[tokio::test]
async fn list_documents_parses_rows_in_order() {
    let transport = ScriptedTransport::new();
    transport.respond(200, r#"[{"document_id":"d1","project_name":"Acme Plan"},{"document_id":"d2","project_name":"Beta"}]"#);

    let docs = client(&transport, signed_in()).list_documents().await.unwrap();

    assert_eq!(docs[0], DocumentSummary { document_id: "d1".to_owned(), project_name: "Acme Plan".to_owned() });
    assert_eq!(docs[1].document_id, "d2");
    let request = transport.last_request().unwrap();
    assert_eq!(request.method, Method::Get);
    assert_eq!(request.url, "https://proj.supabase.co/functions/v1/list-analyzer?user_id=u1");
    assert_eq!(request.header_value("content-type"), Some("application/json"));
    assert_eq!(request.body, None);
}

#[tokio::test]
async fn list_documents_rejects_non_array_body() {
    let transport = ScriptedTransport::new();
    transport.respond(200, r#"{"documents":[]}"#);
    let err = client(&transport, signed_in()).list_documents().await.unwrap_err();
    assert!(matches!(err, ApiError::Decode(_)));
}

#[tokio::test]
async fn analyze_document_posts_document_id() {
    let transport = ScriptedTransport::new();
    transport.respond(200, r#"{"result":"Summary text","risks":["Scope creep"]}"#);

    let analysis = client(&transport, signed_in()).analyze_document("d1").await.unwrap();

    assert_eq!(analysis.summary.as_deref(), Some("Summary text"));
    assert_eq!(analysis.risks, vec!["Scope creep"]);
    let request = transport.last_request().unwrap();
    assert_eq!(request.method, Method::Post);
    assert_eq!(request.body.as_deref(), Some(r#"{"document_id":"d1"}"#));
}

#[tokio::test]
async fn generate_proposal_yields_titled_section() {
    let transport = ScriptedTransport::new();
    transport.respond(200, r#"{"proposal":{"executive_summary":"We propose a phased rollout."}}"#);
    let request = GenerateRequest::new(ProposalKind::Rfp, [("Project_Name", "Acme Plan")]);

    let proposal = client(&transport, signed_in()).generate_proposal(&request).await.unwrap();

    assert_eq!(proposal.sections.len(), 1);
    assert_eq!(proposal.sections[0].title, "Executive Summary");
    assert_eq!(proposal.sections[0].body, "We propose a phased rollout.");
    let sent: Value = serde_json::from_str(&transport.last_request().unwrap().body.unwrap()).unwrap();
    assert_eq!(sent["type"], "RFP");
    assert_eq!(sent["fields"]["Project_Name"], "Acme Plan");
}

#[tokio::test]
async fn export_pdf_returns_link() {
    let transport = ScriptedTransport::new();
    transport.respond(200, r#"{"url":"https://cdn.example.com/d1.pdf"}"#);

    let link = client(&transport, signed_in()).export_pdf("d1").await.unwrap();

    assert_eq!(link.url, "https://cdn.example.com/d1.pdf");
    assert_eq!(transport.last_request().unwrap().body.as_deref(), Some(r#"{"documentId":"d1"}"#));
}

#[tokio::test]
async fn export_pdf_error_in_success_body_is_backend_error() {
    let transport = ScriptedTransport::new();
    transport.respond(200, r#"{"error":"PDF not ready"}"#);
    let err = client(&transport, signed_in()).export_pdf("d1").await.unwrap_err();
    assert_eq!(err, ApiError::Backend { status: 200, message: "PDF not ready".to_owned() });
}

#[tokio::test]
async fn view_proposal_uses_query_parameter() {
    let transport = ScriptedTransport::new();
    transport.respond(200, r#"{"proposal":{"scope":"All of it"}}"#);

    let proposal = client(&transport, signed_in()).view_proposal("d1").await.unwrap();

    assert_eq!(proposal.sections[0].title, "Scope");
    assert_eq!(
        transport.last_request().unwrap().url,
        "https://proj.supabase.co/functions/v1/view-proposal?document_id=d1"
    );
}

#[tokio::test]
async fn delete_document_accepts_empty_object_and_empty_body() {
    let transport = ScriptedTransport::new();
    transport.respond(200, "{}").respond(204, "");
    let client = client(&transport, signed_in());

    assert_eq!(client.delete_document("d1").await, Ok(()));
    assert_eq!(client.delete_document("d2").await, Ok(()));
    assert_eq!(transport.last_request().unwrap().method, Method::Delete);
}

#[tokio::test]
async fn delete_document_error_in_success_body_is_backend_error() {
    let transport = ScriptedTransport::new();
    transport.respond(200, r#"{"error":"not owner"}"#);
    let err = client(&transport, signed_in()).delete_document("d1").await.unwrap_err();
    assert!(matches!(err, ApiError::Backend { message, .. } if message == "not owner"));
}

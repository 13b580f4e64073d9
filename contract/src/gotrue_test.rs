use std::cell::RefCell;
use std::rc::Rc;

use super::*;
use crate::test_support::{ScriptedTransport, session};

const NOW: i64 = 1_700_000_000;

fn fixed_clock() -> i64 {
    NOW
}

fn config() -> SphereConfig {
    SphereConfig::from_parts("https://proj.supabase.co", "anon-key", None).unwrap()
}

fn provider(transport: &ScriptedTransport, storage: &MemoryStorage) -> GoTrueProvider<ScriptedTransport, MemoryStorage> {
    GoTrueProvider::new(&config(), transport.clone(), storage.clone(), fixed_clock)
}

fn token_body(user_id: &str, access: &str) -> String {
    serde_json::json!({
        "access_token": access,
        "refresh_token": format!("refresh-{access}"),
        "expires_in": 3600,
        "token_type": "bearer",
        "user": {
            "id": user_id,
            "email": format!("{user_id}@example.com"),
            "user_metadata": { "displayName": "Nok", "avatar_url": "" }
        }
    })
    .to_string()
}

fn store_session(storage: &MemoryStorage, session: &Session) {
    storage
        .save("sb-proj-auth-token", &serde_json::to_string(session).unwrap())
        .unwrap();
}

fn record(provider: &GoTrueProvider<ScriptedTransport, MemoryStorage>) -> (Rc<RefCell<Vec<AuthEvent>>>, Subscription) {
    let events = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&events);
    let sub = provider.subscribe(Box::new(move |change: &SessionChange| sink.borrow_mut().push(change.event)));
    (events, sub)
}

// =============================================================
// current_session
// =============================================================

#[tokio::test]
async fn current_session_is_none_without_stored_value() {
    let transport = ScriptedTransport::new();
    let provider = provider(&transport, &MemoryStorage::default());

    assert_eq!(provider.current_session().await, Ok(None));
    assert_eq!(transport.request_count(), 0);
}

#[tokio::test]
async fn current_session_returns_fresh_stored_session_without_network() {
    let transport = ScriptedTransport::new();
    let storage = MemoryStorage::default();
    let mut stored = session("u1", "tok-1");
    stored.expires_at = Some(NOW + 3600);
    store_session(&storage, &stored);

    let got = provider(&transport, &storage).current_session().await.unwrap();

    assert_eq!(got, Some(stored));
    assert_eq!(transport.request_count(), 0);
}

#[tokio::test]
async fn unreadable_stored_session_is_discarded() {
    let storage = MemoryStorage::default();
    storage.save("sb-proj-auth-token", "{not json").unwrap();
    let provider = provider(&ScriptedTransport::new(), &storage);

    assert_eq!(provider.current_session().await, Ok(None));
    assert_eq!(storage.load("sb-proj-auth-token").unwrap(), None);
}

#[tokio::test]
async fn near_expiry_session_is_refreshed_and_persisted() {
    let transport = ScriptedTransport::new();
    transport.respond(200, &token_body("u1", "tok-2"));
    let storage = MemoryStorage::default();
    let mut stored = session("u1", "tok-1");
    stored.expires_at = Some(NOW + 10);
    store_session(&storage, &stored);
    let provider = provider(&transport, &storage);
    let (events, _sub) = record(&provider);

    let got = provider.current_session().await.unwrap().unwrap();

    assert_eq!(got.access_token, "tok-2");
    assert_eq!(got.expires_at, Some(NOW + 3600));
    assert_eq!(*events.borrow(), vec![AuthEvent::TokenRefreshed]);
    let request = transport.last_request().unwrap();
    assert_eq!(request.url, "https://proj.supabase.co/auth/v1/token?grant_type=refresh_token");
    assert!(request.body.unwrap().contains("refresh-tok-1"));
    let persisted: Session = serde_json::from_str(&storage.load("sb-proj-auth-token").unwrap().unwrap()).unwrap();
    assert_eq!(persisted.access_token, "tok-2");
}

#[tokio::test]
async fn rejected_refresh_signs_out_locally() {
    let transport = ScriptedTransport::new();
    transport.respond(400, r#"{"error":"invalid_grant","error_description":"Refresh Token Not Found"}"#);
    let storage = MemoryStorage::default();
    let mut stored = session("u1", "tok-1");
    stored.expires_at = Some(NOW - 5);
    store_session(&storage, &stored);
    let provider = provider(&transport, &storage);
    let (events, _sub) = record(&provider);

    assert_eq!(provider.current_session().await, Ok(None));
    assert_eq!(*events.borrow(), vec![AuthEvent::SignedOut]);
    assert_eq!(storage.load("sb-proj-auth-token").unwrap(), None);
}

#[tokio::test]
async fn unreachable_refresh_keeps_stored_session() {
    let transport = ScriptedTransport::new();
    transport.fail("offline");
    let storage = MemoryStorage::default();
    let mut stored = session("u1", "tok-1");
    stored.expires_at = Some(NOW + 5);
    store_session(&storage, &stored);
    let provider = provider(&transport, &storage);

    let err = provider.current_session().await.unwrap_err();

    assert_eq!(err, AuthError::Transport("offline".to_owned()));
    assert!(storage.load("sb-proj-auth-token").unwrap().is_some());
}

#[tokio::test]
async fn expired_session_without_refresh_token_is_dropped() {
    let storage = MemoryStorage::default();
    let mut stored = session("u1", "tok-1");
    stored.refresh_token = None;
    stored.expires_at = Some(NOW - 1);
    store_session(&storage, &stored);

    assert_eq!(provider(&ScriptedTransport::new(), &storage).current_session().await, Ok(None));
}

// =============================================================
// sign-in / sign-up
// =============================================================

#[tokio::test]
async fn sign_in_sends_apikey_and_persists_session() {
    let transport = ScriptedTransport::new();
    transport.respond(200, &token_body("u1", "tok-1"));
    let storage = MemoryStorage::default();
    let provider = provider(&transport, &storage);
    let (events, _sub) = record(&provider);

    let session = provider.sign_in_with_password("nok@example.com", "secret").await.unwrap();

    assert_eq!(session.user.display_name.as_deref(), Some("Nok"));
    assert_eq!(session.user.avatar_url, None);
    let request = transport.last_request().unwrap();
    assert_eq!(request.method, Method::Post);
    assert_eq!(request.url, "https://proj.supabase.co/auth/v1/token?grant_type=password");
    assert_eq!(request.header_value("apikey"), Some("anon-key"));
    assert_eq!(*events.borrow(), vec![AuthEvent::SignedIn]);
    assert!(storage.load(provider.storage_key()).unwrap().is_some());
}

#[tokio::test]
async fn sign_in_rejection_is_invalid_credentials() {
    let transport = ScriptedTransport::new();
    transport.respond(400, r#"{"error":"invalid_grant","error_description":"Invalid login credentials"}"#);
    let storage = MemoryStorage::default();

    let err = provider(&transport, &storage)
        .sign_in_with_password("nok@example.com", "wrongpassword")
        .await
        .unwrap_err();

    assert_eq!(err, AuthError::InvalidCredentials("Invalid login credentials".to_owned()));
    assert_eq!(storage.load("sb-proj-auth-token").unwrap(), None);
}

#[tokio::test]
async fn sign_in_server_error_keeps_status() {
    let transport = ScriptedTransport::new();
    transport.respond(503, "");

    let err = provider(&transport, &MemoryStorage::default())
        .sign_in_with_password("nok@example.com", "secret")
        .await
        .unwrap_err();

    assert_eq!(err, AuthError::Provider { status: 503, message: "request failed with status 503".to_owned() });
}

#[tokio::test]
async fn sign_up_sends_display_name_and_reports_confirmation() {
    let transport = ScriptedTransport::new();
    transport.respond(200, r#"{"id":"u1","email":"nok@example.com","confirmation_sent_at":"2024-01-01T00:00:00Z"}"#);
    let storage = MemoryStorage::default();

    let outcome = provider(&transport, &storage)
        .sign_up("nok@example.com", "secret1", "Nok")
        .await
        .unwrap();

    assert_eq!(outcome, SignUpOutcome::ConfirmationRequired);
    let body: serde_json::Value = serde_json::from_str(&transport.last_request().unwrap().body.unwrap()).unwrap();
    assert_eq!(body["data"]["displayName"], "Nok");
    assert_eq!(storage.load("sb-proj-auth-token").unwrap(), None);
}

#[tokio::test]
async fn sign_up_with_immediate_session_signs_in() {
    let transport = ScriptedTransport::new();
    transport.respond(200, &token_body("u1", "tok-1"));

    let outcome = provider(&transport, &MemoryStorage::default())
        .sign_up("nok@example.com", "secret1", "Nok")
        .await
        .unwrap();

    assert!(matches!(outcome, SignUpOutcome::SignedIn(s) if s.access_token == "tok-1"));
}

// =============================================================
// password / sign-out
// =============================================================

#[tokio::test]
async fn update_password_uses_bearer_and_emits_user_updated() {
    let transport = ScriptedTransport::new();
    transport.respond(200, r#"{"id":"u1","email":"u1@example.com","user_metadata":{"displayName":"Nok"}}"#);
    let storage = MemoryStorage::default();
    store_session(&storage, &session("u1", "tok-1"));
    let provider = provider(&transport, &storage);
    let (events, _sub) = record(&provider);

    provider.update_password("newsecret").await.unwrap();

    let request = transport.last_request().unwrap();
    assert_eq!(request.method, Method::Put);
    assert_eq!(request.url, "https://proj.supabase.co/auth/v1/user");
    assert_eq!(request.header_value("authorization"), Some("Bearer tok-1"));
    assert_eq!(*events.borrow(), vec![AuthEvent::UserUpdated]);
}

#[tokio::test]
async fn update_password_without_session_is_not_authenticated() {
    let transport = ScriptedTransport::new();
    let err = provider(&transport, &MemoryStorage::default())
        .update_password("newsecret")
        .await
        .unwrap_err();
    assert_eq!(err, AuthError::NotAuthenticated);
    assert_eq!(transport.request_count(), 0);
}

#[tokio::test]
async fn sign_out_clears_storage_even_when_remote_fails() {
    let transport = ScriptedTransport::new();
    transport.fail("offline");
    let storage = MemoryStorage::default();
    store_session(&storage, &session("u1", "tok-1"));
    let provider = provider(&transport, &storage);
    let (events, _sub) = record(&provider);

    let result = provider.sign_out().await;

    assert_eq!(result, Err(AuthError::Transport("offline".to_owned())));
    assert_eq!(storage.load("sb-proj-auth-token").unwrap(), None);
    assert_eq!(*events.borrow(), vec![AuthEvent::SignedOut]);
    assert_eq!(transport.last_request().unwrap().url, "https://proj.supabase.co/auth/v1/logout");
}

#[tokio::test]
async fn sign_out_without_session_skips_network() {
    let transport = ScriptedTransport::new();
    assert_eq!(provider(&transport, &MemoryStorage::default()).sign_out().await, Ok(()));
    assert_eq!(transport.request_count(), 0);
}

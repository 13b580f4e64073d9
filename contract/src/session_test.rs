use super::*;

fn user(email: &str, display_name: Option<&str>) -> User {
    User {
        id: "u1".to_owned(),
        email: email.to_owned(),
        avatar_url: None,
        display_name: display_name.map(ToOwned::to_owned),
    }
}

// =============================================================
// User labels
// =============================================================

#[test]
fn label_prefers_display_name() {
    assert_eq!(user("a@b.com", Some("Nok")).label(), "Nok");
}

#[test]
fn label_falls_back_to_email_for_blank_display_name() {
    assert_eq!(user("a@b.com", Some("  ")).label(), "a@b.com");
    assert_eq!(user("a@b.com", None).label(), "a@b.com");
}

#[test]
fn initial_uppercases_first_character() {
    assert_eq!(user("zed@example.com", None).initial(), "Z");
    assert_eq!(user("a@b.com", Some("somchai")).initial(), "S");
}

#[test]
fn initial_is_question_mark_without_name_or_email() {
    assert_eq!(user("", None).initial(), "?");
}

// =============================================================
// Session expiry
// =============================================================

#[test]
fn expires_within_uses_margin() {
    let session = Session {
        access_token: "t".to_owned(),
        refresh_token: None,
        expires_at: Some(1_000),
        user: user("a@b.com", None),
    };
    assert!(!session.expires_within(900, 30));
    assert!(session.expires_within(975, 30));
    assert!(session.is_expired(1_000));
    assert!(!session.is_expired(999));
}

#[test]
fn session_without_expiry_never_expires() {
    let session = Session {
        access_token: "t".to_owned(),
        refresh_token: None,
        expires_at: None,
        user: user("a@b.com", None),
    };
    assert!(!session.expires_within(i64::MAX - 1, 30));
}

// =============================================================
// AuthState
// =============================================================

#[test]
fn default_state_is_loading_without_user() {
    let state = AuthState::default();
    assert!(state.loading);
    assert!(!state.is_authenticated());
    assert!(state.user().is_none());
}

#[test]
fn authenticated_state_derives_user_and_token() {
    let state = AuthState::authenticated(Session {
        access_token: "tok".to_owned(),
        refresh_token: None,
        expires_at: None,
        user: user("a@b.com", None),
    });
    assert!(!state.loading);
    assert!(state.is_authenticated());
    assert_eq!(state.access_token(), Some("tok"));
    assert_eq!(state.user().map(|u| u.email.as_str()), Some("a@b.com"));
}

use super::*;
use crate::util::i18n::{Language, translate};

#[test]
fn new_draft_is_empty() {
    let draft = FormDraft::new(ProposalKind::Rfp);
    assert_eq!(draft.get("Project_Name"), "");
}

#[test]
fn set_ignores_fields_outside_schema() {
    let mut draft = FormDraft::new(ProposalKind::Rfp);
    draft.set("Qualifications", "PhD".to_owned());
    assert_eq!(draft.get("Qualifications"), "");
}

#[test]
fn set_overwrites_existing_value() {
    let mut draft = FormDraft::new(ProposalKind::Rfp);
    draft.set("Budget", "1M".to_owned());
    draft.set("Budget", "2M".to_owned());
    assert_eq!(draft.get("Budget"), "2M");
}

#[test]
fn missing_project_name_blocks_request() {
    let mut draft = FormDraft::new(ProposalKind::Rfp);
    draft.set("Budget", "1M".to_owned());
    draft.set("Project_Name", "   ".to_owned());
    assert_eq!(draft.to_request(), Err(DraftError::MissingProjectName));
}

#[test]
fn request_carries_all_schema_fields() {
    let mut draft = FormDraft::new(ProposalKind::Tor);
    draft.set("Project_Name", "Acme Plan".to_owned());
    draft.set("Background", "Legacy system".to_owned());

    let request = draft.to_request().unwrap();

    assert_eq!(request.kind, ProposalKind::Tor);
    assert_eq!(request.fields.len(), ProposalKind::Tor.fields().len());
    assert_eq!(request.fields["Background"], "Legacy system");
    assert_eq!(request.fields["Qualifications"], "");
}

#[test]
fn switching_kind_keeps_shared_fields_only() {
    let mut draft = FormDraft::new(ProposalKind::Rfp);
    draft.set("Project_Name", "Acme Plan".to_owned());
    draft.set("Constraints", "No weekends".to_owned());

    draft.switch_kind(ProposalKind::Tor);

    assert_eq!(draft.get("Project_Name"), "Acme Plan");
    assert_eq!(draft.get("Constraints"), "");
}

#[test]
fn every_schema_field_has_translated_label() {
    for kind in ProposalKind::ALL {
        for field in kind.fields() {
            let (label, placeholder) = field_keys(field);
            assert_ne!(translate(Language::En, label), label, "{field} label");
            assert_ne!(translate(Language::Th, placeholder), placeholder, "{field} placeholder");
        }
    }
}

#[test]
fn login_requires_both_fields() {
    let draft = LoginDraft { email: "nok@example.com".to_owned(), password: String::new() };
    assert_eq!(draft.validate(), Err(DraftError::MissingField));
    let draft = LoginDraft { email: "nok@example.com".to_owned(), password: "secret".to_owned() };
    assert_eq!(draft.validate(), Ok(()));
}

#[test]
fn sign_up_rules() {
    let mut draft = SignUpDraft {
        username: "nok".to_owned(),
        email: "nok@example.com".to_owned(),
        password: "secret1".to_owned(),
        confirm_password: "secret2".to_owned(),
    };
    assert_eq!(draft.validate(), Err(DraftError::PasswordMismatch));

    draft.password = "abc".to_owned();
    draft.confirm_password = "abc".to_owned();
    assert_eq!(draft.validate(), Err(DraftError::PasswordTooShort));

    draft.password = "secret1".to_owned();
    draft.confirm_password = "secret1".to_owned();
    assert_eq!(draft.validate(), Ok(()));

    draft.username = " ".to_owned();
    assert_eq!(draft.validate(), Err(DraftError::MissingField));
}

#[test]
fn password_draft_uses_same_rules() {
    let draft = PasswordDraft { new_password: "12345".to_owned(), confirm_password: "12345".to_owned() };
    assert_eq!(draft.validate(), Err(DraftError::PasswordTooShort));
    let draft = PasswordDraft { new_password: String::new(), confirm_password: String::new() };
    assert_eq!(draft.validate(), Err(DraftError::MissingField));
}

#[test]
fn every_error_has_a_message() {
    for error in [
        DraftError::MissingField,
        DraftError::MissingProjectName,
        DraftError::PasswordMismatch,
        DraftError::PasswordTooShort,
    ] {
        let key = error.message_key();
        assert_ne!(translate(Language::En, key), key);
    }
}

use serde_json::json;

use super::*;

#[test]
fn parses_every_recognised_key() {
    let analysis = Analysis::from_value(json!({
        "result": "Build a booking portal.",
        "fields": { "Budget": "1.2M THB", "Timeline": 6 },
        "differentiators": ["Local team", "Fixed price"],
        "risks": "Tight deadline",
        "recommendations": [],
        "model": "ignored"
    }))
    .unwrap();

    assert_eq!(analysis.summary.as_deref(), Some("Build a booking portal."));
    assert_eq!(
        analysis.fields,
        vec![("Budget".to_owned(), "1.2M THB".to_owned()), ("Timeline".to_owned(), "6".to_owned())]
    );
    assert_eq!(analysis.differentiators, vec!["Local team", "Fixed price"]);
    assert_eq!(analysis.risks, vec!["Tight deadline"]);
    assert!(analysis.recommendations.is_empty());
}

#[test]
fn accepts_alternate_key_names() {
    let analysis = Analysis::from_value(json!({
        "summary": "Short",
        "extracted_fields": { "Project_Name": "Acme Plan" }
    }))
    .unwrap();
    assert_eq!(analysis.summary.as_deref(), Some("Short"));
    assert_eq!(analysis.fields[0].1, "Acme Plan");
}

#[test]
fn null_primary_key_falls_through_to_alternate() {
    let analysis = Analysis::from_value(json!({ "result": null, "summary": "From summary" })).unwrap();
    assert_eq!(analysis.summary.as_deref(), Some("From summary"));
}

#[test]
fn empty_object_is_empty_analysis() {
    let analysis = Analysis::from_value(json!({})).unwrap();
    assert!(analysis.is_empty());
}

#[test]
fn non_object_body_is_rejected() {
    let err = Analysis::from_value(json!(["not", "an", "object"])).unwrap_err();
    assert!(err.contains("an array"));
}

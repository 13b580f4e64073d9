use super::*;

fn doc(id: &str, name: &str) -> DocumentSummary {
    DocumentSummary { document_id: id.to_owned(), project_name: name.to_owned() }
}

#[test]
fn filtered_follows_query() {
    let mut state = DocumentsState::default();
    state.loaded(vec![doc("d1", "Bridge Repair"), doc("d2", "School Wifi"), doc("d3", "bridge survey")]);

    state.query = "BRIDGE".to_owned();
    let ids: Vec<_> = state.filtered().into_iter().map(|d| d.document_id).collect();
    assert_eq!(ids, ["d1", "d3"]);

    state.query.clear();
    assert_eq!(state.filtered().len(), 3);
}

#[test]
fn failure_keeps_previous_items() {
    let mut state = DocumentsState::default();
    state.loaded(vec![doc("d1", "Bridge Repair")]);
    state.begin_load();
    assert!(state.loading);

    state.failed("boom".to_owned());

    assert!(!state.loading);
    assert_eq!(state.error.as_deref(), Some("boom"));
    assert_eq!(state.items.len(), 1);
}

#[test]
fn begin_load_clears_error() {
    let mut state = DocumentsState::default();
    state.failed("boom".to_owned());
    state.begin_load();
    assert_eq!(state.error, None);
}

#[test]
fn remove_drops_only_matching_id() {
    let mut state = DocumentsState::default();
    state.loaded(vec![doc("d1", "A"), doc("d2", "B")]);
    state.remove("d1");
    assert_eq!(state.items, vec![doc("d2", "B")]);
}

#[test]
fn start_load_without_backend_fails_instead_of_hanging() {
    let mut state = DocumentsState::default();

    let backend = state.start_load(None::<()>, || "Please log in".to_owned());

    assert_eq!(backend, None);
    assert!(!state.loading);
    assert_eq!(state.error.as_deref(), Some("Please log in"));
    assert_eq!(state.start_load(Some(7), String::new), Some(7));
    assert!(state.loading);
}

#[test]
fn start_load_skips_while_running() {
    let mut state = DocumentsState::default();
    assert_eq!(state.start_load(Some("first"), String::new), Some("first"));

    assert_eq!(state.start_load(Some("second"), String::new), None);
    assert!(state.loading);
}

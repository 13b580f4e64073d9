use super::*;

#[test]
fn home_is_only_active_on_root() {
    assert!(is_active("/", "/"));
    assert!(!is_active("/", "/upload"));
}

#[test]
fn nested_routes_keep_parent_active() {
    assert!(is_active("/analyzer", "/analyzer"));
    assert!(is_active("/analyzer", "/analyzer/d1"));
    assert!(!is_active("/analyzer", "/analyzer-old"));
}

#[test]
fn nav_labels_are_translated() {
    use crate::util::i18n::translate;
    for (_, key) in NAV_ITEMS {
        for language in Language::ALL {
            assert_ne!(translate(language, key), key);
        }
    }
}

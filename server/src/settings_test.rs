use super::*;

fn lookup(port: Option<&'static str>) -> impl Fn(&str) -> Option<String> {
    move |key| (key == "PORT").then_some(port).flatten().map(str::to_owned)
}

#[test]
fn port_defaults_when_unset() {
    let settings = Settings::from_lookup(lookup(None)).unwrap();
    assert_eq!(settings.port, DEFAULT_PORT);
    assert_eq!(settings.bind_addr(), "0.0.0.0:3000");
}

#[test]
fn blank_port_uses_default() {
    assert_eq!(Settings::from_lookup(lookup(Some("  "))).unwrap().port, DEFAULT_PORT);
}

#[test]
fn port_is_parsed() {
    assert_eq!(Settings::from_lookup(lookup(Some("8080"))).unwrap().port, 8080);
}

#[test]
fn invalid_port_is_an_error() {
    let err = Settings::from_lookup(lookup(Some("eighty"))).unwrap_err();
    assert!(matches!(err, ServerError::InvalidPort { ref value, .. } if value == "eighty"));
    assert!(err.to_string().starts_with("invalid PORT \"eighty\""));
}

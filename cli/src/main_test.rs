use clap::CommandFactory;

use super::*;

fn strings(raw: &[&str]) -> Vec<String> {
    raw.iter().map(|s| (*s).to_owned()).collect()
}

#[test]
fn cli_definition_is_consistent() {
    Cli::command().debug_assert();
}

#[test]
fn parses_docs_generate_with_repeated_fields() {
    let cli = Cli::try_parse_from([
        "sphere-cli",
        "--supabase-url",
        "https://proj.supabase.co",
        "--anon-key",
        "anon",
        "docs",
        "generate",
        "--type",
        "tor",
        "-f",
        "Project_Name=Acme",
        "-f",
        "Budget=1M",
    ])
    .unwrap();

    let Command::Docs(DocsCommand { command: DocsSubcommand::Generate { kind, fields } }) = cli.command else {
        panic!("expected docs generate");
    };
    assert_eq!(kind, "tor");
    assert_eq!(fields, strings(&["Project_Name=Acme", "Budget=1M"]));
}

#[test]
fn parse_field_splits_on_first_equals() {
    assert_eq!(parse_field("Budget=1M=THB").unwrap(), ("Budget", "1M=THB"));
    assert_eq!(parse_field(" Timeline =Q3").unwrap(), ("Timeline", "Q3"));
}

#[test]
fn parse_field_rejects_missing_name_or_separator() {
    assert!(matches!(parse_field("Budget"), Err(CliError::InvalidField(_))));
    assert!(matches!(parse_field("=1M"), Err(CliError::InvalidField(_))));
}

#[test]
fn generate_request_requires_project_name() {
    let err = generate_request("RFP", &strings(&["Budget=1M"])).unwrap_err();
    assert!(matches!(err, CliError::MissingField("Project_Name")));
}

#[test]
fn generate_request_rejects_unknown_kind() {
    let err = generate_request("SOW", &strings(&["Project_Name=Acme"])).unwrap_err();
    assert_eq!(err.to_string(), "unknown proposal type `SOW`; expected RFP or TOR");
}

#[test]
fn generate_request_uses_schema_of_kind() {
    let request = generate_request("tor", &strings(&["Project_Name=Acme", "Constraints=none"])).unwrap();
    assert_eq!(request.kind, ProposalKind::Tor);
    assert_eq!(request.project_name(), "Acme");
    assert!(!request.fields.contains_key("Constraints"));
}

#[test]
fn now_secs_is_after_2020() {
    assert!(now_secs() > 1_577_836_800);
}

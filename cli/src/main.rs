//! `sphere-cli`: drive a Sphere deployment from a terminal.
//!
//! Uses the same session store and backend contract as the web client, with
//! `reqwest` for HTTP and a JSON file for the persisted session.

mod http;
mod storage;

#[cfg(test)]
#[path = "main_test.rs"]
mod main_test;

use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use clap::{Args, Parser, Subcommand};
use contract::config::{ENV_FUNCTIONS_URL, ENV_SUPABASE_ANON_KEY, ENV_SUPABASE_URL};
use contract::{
    ApiError, AuthError, BackendClient, ConfigError, GenerateRequest, GoTrueProvider, ProposalKind, SessionStore,
    SignUpOutcome, SphereConfig,
};
use serde_json::Value;
use tracing_subscriber::EnvFilter;

use crate::http::ReqwestTransport;
use crate::storage::FileStorage;

type CliStore = SessionStore<GoTrueProvider<ReqwestTransport, FileStorage>>;

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Auth(#[from] AuthError),
    #[error(transparent)]
    Api(#[from] ApiError),
    #[error("not signed in; run `sphere-cli login` first")]
    NotSignedIn,
    #[error("invalid field `{0}`; expected NAME=VALUE")]
    InvalidField(String),
    #[error("unknown proposal type `{0}`; expected RFP or TOR")]
    InvalidKind(String),
    #[error("`{0}` is required")]
    MissingField(&'static str),
    #[error("invalid JSON payload: {0}")]
    InvalidJson(#[from] serde_json::Error),
}

#[derive(Parser, Debug)]
#[command(name = "sphere-cli", about = "Sphere session and document function CLI")]
struct Cli {
    #[arg(long, env = ENV_SUPABASE_URL)]
    supabase_url: String,

    #[arg(long, env = ENV_SUPABASE_ANON_KEY, hide_env_values = true)]
    anon_key: String,

    /// Defaults to `{supabase_url}/functions/v1`.
    #[arg(long, env = ENV_FUNCTIONS_URL)]
    functions_url: Option<String>,

    #[arg(long, env = "SPHERE_SESSION_FILE", default_value = ".sphere/session.json")]
    session_file: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Sign in with email and password.
    Login {
        email: String,
        #[arg(long, env = "SPHERE_PASSWORD", hide_env_values = true)]
        password: String,
    },
    /// Register a new account.
    SignUp {
        #[arg(long)]
        username: String,
        email: String,
        #[arg(long, env = "SPHERE_PASSWORD", hide_env_values = true)]
        password: String,
    },
    Logout,
    Whoami,
    Docs(DocsCommand),
}

#[derive(Args, Debug)]
struct DocsCommand {
    #[command(subcommand)]
    command: DocsSubcommand,
}

#[derive(Subcommand, Debug)]
enum DocsSubcommand {
    List {
        /// Case-insensitive project name filter.
        #[arg(long)]
        search: Option<String>,
    },
    Analyze {
        document_id: String,
    },
    Generate {
        #[arg(long = "type", default_value = "RFP")]
        kind: String,
        /// Schema field as NAME=VALUE, repeatable.
        #[arg(long = "field", short = 'f')]
        fields: Vec<String>,
    },
    Export {
        document_id: String,
    },
    View {
        document_id: String,
    },
    Delete {
        document_id: String,
    },
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    if let Err(e) = run(cli).await {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), CliError> {
    let config = SphereConfig::from_parts(&cli.supabase_url, &cli.anon_key, cli.functions_url.as_deref())?;
    let transport = ReqwestTransport::new();
    let store = SessionStore::new(GoTrueProvider::new(
        &config,
        transport.clone(),
        FileStorage::new(&cli.session_file),
        now_secs,
    ));
    store.start().await;

    match cli.command {
        Command::Login { email, password } => {
            let user = store.try_login(email.trim(), &password).await?;
            println!("signed in as {}", user.label());
            Ok(())
        }
        Command::SignUp { username, email, password } => {
            match store.sign_up(username.trim(), email.trim(), &password).await? {
                SignUpOutcome::ConfirmationRequired => println!("check {} to confirm the account", email.trim()),
                SignUpOutcome::SignedIn(session) => println!("signed in as {}", session.user.label()),
            }
            Ok(())
        }
        Command::Logout => {
            store.logout().await;
            println!("signed out");
            Ok(())
        }
        Command::Whoami => {
            let snapshot = store.snapshot();
            let user = snapshot.user().ok_or(CliError::NotSignedIn)?;
            print_json(&serde_json::to_value(user)?)
        }
        Command::Docs(docs) => {
            let backend = BackendClient::new(config.functions_url.clone(), transport, store.clone());
            run_docs(&store, &backend, docs).await
        }
    }
}

async fn run_docs(
    store: &CliStore,
    backend: &BackendClient<ReqwestTransport, CliStore>,
    docs: DocsCommand,
) -> Result<(), CliError> {
    if !store.is_authenticated() {
        return Err(CliError::NotSignedIn);
    }
    match docs.command {
        DocsSubcommand::List { search } => {
            let query = search.unwrap_or_default();
            let items: Vec<_> = backend.list_documents().await?.into_iter().filter(|d| d.matches(&query)).collect();
            print_json(&serde_json::to_value(items)?)
        }
        DocsSubcommand::Analyze { document_id } => {
            let analysis = backend.analyze_document(&document_id).await?;
            print_json(&serde_json::to_value(analysis)?)
        }
        DocsSubcommand::Generate { kind, fields } => {
            let request = generate_request(&kind, &fields)?;
            let proposal = backend.generate_proposal(&request).await?;
            print_json(&serde_json::to_value(proposal)?)
        }
        DocsSubcommand::Export { document_id } => {
            let link = backend.export_pdf(&document_id).await?;
            println!("{}", link.url);
            Ok(())
        }
        DocsSubcommand::View { document_id } => {
            let proposal = backend.view_proposal(&document_id).await?;
            print_json(&serde_json::to_value(proposal)?)
        }
        DocsSubcommand::Delete { document_id } => {
            backend.delete_document(&document_id).await?;
            println!("deleted {document_id}");
            Ok(())
        }
    }
}

/// Split a `NAME=VALUE` argument.
fn parse_field(raw: &str) -> Result<(&str, &str), CliError> {
    match raw.split_once('=') {
        Some((name, value)) if !name.trim().is_empty() => Ok((name.trim(), value)),
        _ => Err(CliError::InvalidField(raw.to_owned())),
    }
}

fn generate_request(kind: &str, fields: &[String]) -> Result<GenerateRequest, CliError> {
    let kind = ProposalKind::parse(kind).ok_or_else(|| CliError::InvalidKind(kind.to_owned()))?;
    let pairs = fields.iter().map(|raw| parse_field(raw)).collect::<Result<Vec<_>, _>>()?;
    for (name, _) in &pairs {
        if !kind.fields().contains(name) {
            tracing::warn!(field = name, kind = kind.as_str(), "field is not part of the schema; dropping it");
        }
    }
    let request = GenerateRequest::new(kind, pairs);
    if request.project_name().is_empty() {
        return Err(CliError::MissingField(contract::proposal::REQUIRED_FIELD));
    }
    Ok(request)
}

fn now_secs() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |d| i64::try_from(d.as_secs()).unwrap_or(i64::MAX))
}

fn print_json(value: &Value) -> Result<(), CliError> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

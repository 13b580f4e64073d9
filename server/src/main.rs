mod error;
mod routes;
mod settings;

use tracing_subscriber::EnvFilter;

use crate::error::ServerError;
use crate::settings::Settings;

#[tokio::main]
async fn main() {
    if let Err(e) = dotenvy::dotenv() {
        if !e.not_found() {
            eprintln!("ignoring .env: {e}");
        }
    }
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    if let Err(e) = run().await {
        tracing::error!(error = %e, "sphere server stopped");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), ServerError> {
    let settings = Settings::from_env()?;
    let app = routes::app()?;

    let addr = settings.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|source| ServerError::Bind { addr: addr.clone(), source })?;

    tracing::info!(%addr, "sphere listening");
    axum::serve(listener, app).await?;
    Ok(())
}

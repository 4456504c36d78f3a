mod cli;
mod config;
mod errors;
mod i18n;
mod llm_client;
mod models;
mod presentation;
mod roadmap;
mod routes;
mod state;
mod wizard;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use tokio::io::BufReader;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::cli::{Cli, Command};
use crate::config::{Config, API_KEY_VAR};
use crate::i18n::Language;
use crate::llm_client::GeminiClient;
use crate::routes::build_router;
use crate::state::AppState;
use crate::wizard::{HttpRoadmapSource, Wizard};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::from_env()?;

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match cli.command.unwrap_or(Command::Serve) {
        Command::Serve => serve(config).await,
        Command::Wizard { api_url, lang } => {
            let base_url = api_url.unwrap_or_else(|| config.navigator_api_url.clone());
            let language = lang.as_deref().map(Language::from_code).unwrap_or_default();
            run_wizard(&base_url, language).await
        }
    }
}

async fn serve(config: Config) -> Result<()> {
    info!("Starting Navigator API v{}", env!("CARGO_PKG_VERSION"));

    if config.api_key().is_none() {
        warn!("{API_KEY_VAR} is not set; roadmap requests will fail until it is configured");
    }

    let generator = GeminiClient::new(config.gemini_api_base.clone(), config.model_max_retries)?;
    info!(
        "Gemini client initialized (model: {}, timeout: {:?}, retries: {})",
        llm_client::MODEL,
        config.model_timeout,
        config.model_max_retries
    );

    let state = AppState {
        generator: Arc::new(generator),
        config: config.clone(),
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

async fn run_wizard(base_url: &str, language: Language) -> Result<()> {
    info!("Wizard using API at {base_url}");
    let source = HttpRoadmapSource::new(base_url)?;
    let mut wizard = Wizard::new(language);
    let stdin = BufReader::new(tokio::io::stdin());
    let mut stdout = std::io::stdout();
    crate::wizard::terminal::run(&mut wizard, &source, stdin, &mut stdout).await
}

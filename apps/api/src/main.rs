mod acquisition;
mod config;
mod errors;
mod generation;
mod jobs;
mod llm_client;
mod matching;
mod models;
mod render;
mod report;
mod routes;
mod session;
mod state;

use std::net::SocketAddr;
use std::path::Path;
use std::sync::Arc;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::acquisition::transcribe::HttpTranscriber;
use crate::config::Config;
use crate::llm_client::GeminiClient;
use crate::routes::build_router;
use crate::session::new_session_store;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            let crate_name = env!("CARGO_PKG_NAME").replace('-', "_");
            EnvFilter::new(format!("{}={}", crate_name, &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Udaan API v{}", env!("CARGO_PKG_VERSION"));

    // Load the job table once; it is read-only for the process lifetime.
    // A missing or malformed table is fatal — every matching view needs it.
    let jobs = Arc::new(jobs::load_job_table(Path::new(&config.jobs_csv_path))?);
    info!(
        "Job table loaded: {} postings from {}",
        jobs.len(),
        config.jobs_csv_path
    );

    // Initialize LLM client
    let llm = GeminiClient::new(config.gemini_api_key.clone());
    info!("LLM client initialized (model: {})", llm_client::MODEL);

    // Initialize transcription client
    let transcriber = Arc::new(HttpTranscriber::new(config.transcribe_url.clone()));
    info!("Transcriber initialized ({})", config.transcribe_url);

    // Build app state
    let state = AppState {
        jobs,
        sessions: new_session_store(),
        llm,
        transcriber,
        config: config.clone(),
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: tighten CORS in production

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

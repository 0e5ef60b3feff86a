pub mod config;
pub mod error;
pub mod models;
pub mod routes;
pub mod services;

use std::sync::Arc;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use recitation_core::Scorer;
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::ServerConfig;
use crate::services::progress::ProgressService;
use crate::services::transcription::TranscriptionService;
use crate::services::verses::VerseService;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<ServerConfig>,
    pub scorer: Scorer,
    pub verses: Arc<VerseService>,
    pub transcription: Arc<TranscriptionService>,
    pub progress: Arc<ProgressService>,
}

impl AppState {
    /// Assemble state from already-built services.
    pub fn new(
        config: ServerConfig,
        verses: VerseService,
        transcription: TranscriptionService,
    ) -> Self {
        Self {
            scorer: Scorer::new(config.thresholds, config.locale),
            config: Arc::new(config),
            verses: Arc::new(verses),
            transcription: Arc::new(transcription),
            progress: Arc::new(ProgressService::new()),
        }
    }

    /// Load the verse corpus and connect the transcription client.
    pub fn from_config(config: ServerConfig) -> anyhow::Result<Self> {
        let verses = match &config.verses_path {
            Some(path) => VerseService::load(path)?,
            None => {
                tracing::warn!("VERSES_PATH not set, verse lookup disabled");
                VerseService::empty()
            }
        };

        if config.whisper_url.is_none() {
            tracing::warn!("WHISPER_URL not set, transcription disabled");
        }
        let transcription =
            TranscriptionService::new(config.whisper_url.clone(), config.whisper_timeout)?;

        Ok(Self::new(config, verses, transcription))
    }
}

/// Build the router with all routes.
pub fn build_router(state: AppState) -> Router {
    let max_upload_bytes = state.config.max_upload_bytes;

    Router::new()
        .route("/health", get(routes::health::health))
        .route("/api/model/info", get(routes::health::model_info))
        .route("/api/compare", post(routes::compare::compare))
        .route("/api/transcribe", post(routes::transcribe::transcribe))
        .route("/api/verses/:page/:ayah", get(routes::verses::get))
        .route(
            "/api/progress",
            get(routes::progress::summary).delete(routes::progress::clear),
        )
        .fallback(routes::not_found)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive())
                .layer(DefaultBodyLimit::max(max_upload_bytes)),
        )
        .with_state(state)
}

/// Log filter directive: `RUST_LOG`, then `LOG_LEVEL`, then `info`.
fn log_filter<F>(lookup: F) -> String
where
    F: Fn(&str) -> Option<String>,
{
    let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

    get("RUST_LOG")
        .or_else(|| {
            get("LOG_LEVEL").map(|level| match level.trim().to_ascii_lowercase().as_str() {
                "warning" => "warn".to_string(),
                "critical" => "error".to_string(),
                other => other.to_string(),
            })
        })
        .unwrap_or_else(|| "info".into())
}

pub async fn run() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(log_filter(|key| {
            std::env::var(key).ok()
        })))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ServerConfig::from_env()?;

    tracing::info!("Initializing recitation server...");
    tracing::info!("Model: {}", config.model_name);
    tracing::info!("Feedback locale: {}", config.locale.as_str());

    let addr = config.bind_addr();
    let state = AppState::from_config(config)?;
    let app = build_router(state);

    tracing::info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

//! Common test utilities and fixtures for integration tests.
//!
//! This module provides shared test infrastructure including:
//! - TestContext for building the app over an in-memory verse corpus
//! - A stand-in Whisper server for transcription tests

pub mod fixtures;

use std::time::Duration;

use axum::{http::StatusCode, routing::post, Router};
use axum_test::TestServer;

use recitation_backend::config::ServerConfig;
use recitation_backend::services::transcription::TranscriptionService;
use recitation_backend::services::verses::VerseService;
use recitation_backend::{build_router, AppState};

/// Test context holding the application router.
pub struct TestContext {
    pub state: AppState,
    app: Router,
}

impl TestContext {
    /// Context with the sample corpus and transcription disabled.
    pub fn new() -> Self {
        Self::with_config(ServerConfig::default(), TranscriptionService::disabled())
    }

    /// Context with the sample corpus and a custom configuration.
    pub fn with_config(config: ServerConfig, transcription: TranscriptionService) -> Self {
        let verses = VerseService::from_json(fixtures::SAMPLE_CORPUS)
            .expect("Sample corpus must parse");
        let state = AppState::new(config, verses, transcription);
        let app = build_router(state.clone());
        Self { state, app }
    }

    /// Context whose transcription client talks to a fake Whisper server
    /// answering every request with `body`.
    pub async fn with_whisper_response(body: &'static str) -> Self {
        Self::with_whisper_status(StatusCode::OK, body).await
    }

    /// Like `with_whisper_response`, with a chosen HTTP status.
    pub async fn with_whisper_status(status: StatusCode, body: &'static str) -> Self {
        let url = spawn_fake_whisper(status, body).await;
        let transcription = TranscriptionService::new(Some(url), Duration::from_secs(5))
            .expect("Failed to build transcription client");
        Self::with_config(ServerConfig::default(), transcription)
    }

    /// Get the router for use with axum-test.
    pub fn router(&self) -> Router {
        self.app.clone()
    }

    pub fn server(&self) -> TestServer {
        TestServer::new(self.router()).expect("Failed to start test server")
    }
}

/// Start a Whisper stand-in on an ephemeral port and return its base URL.
async fn spawn_fake_whisper(status: StatusCode, body: &'static str) -> String {
    let app = Router::new().route("/transcribe", post(move || async move { (status, body) }));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind fake whisper server");
    let addr = listener.local_addr().expect("No local address");
    tokio::spawn(async move {
        axum::serve(listener, app).await.ok();
    });
    format!("http://{}", addr)
}

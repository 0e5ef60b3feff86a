//! Health and model information endpoints

use axum::{extract::State, Json};
use chrono::Utc;

use crate::config::{MAX_AUDIO_SECONDS, TARGET_SAMPLE_RATE};
use crate::models::{HealthResponse, ModelInfoResponse};
use crate::AppState;

/// GET /health
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        model: state.config.model_name.clone(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        verses_loaded: state.verses.len(),
        transcription_configured: state.transcription.is_configured(),
        timestamp: Utc::now(),
    })
}

/// GET /api/model/info
pub async fn model_info(State(state): State<AppState>) -> Json<ModelInfoResponse> {
    Json(ModelInfoResponse {
        model_name: state.config.model_name.clone(),
        target_sample_rate: TARGET_SAMPLE_RATE,
        max_audio_length: MAX_AUDIO_SECONDS,
        max_upload_bytes: state.config.max_upload_bytes,
        specialized_for: "Quranic Arabic recitation".to_string(),
        languages: vec!["ar".to_string()],
        feedback_locale: state.scorer.locale,
        thresholds: state.scorer.thresholds,
    })
}

//! Practice progress endpoints

use axum::{extract::State, Json};

use crate::models::{ClearProgressResponse, ProgressSummary};
use crate::AppState;

/// GET /api/progress
pub async fn summary(State(state): State<AppState>) -> Json<ProgressSummary> {
    Json(state.progress.summary().await)
}

/// DELETE /api/progress
pub async fn clear(State(state): State<AppState>) -> Json<ClearProgressResponse> {
    let cleared = state.progress.clear().await;
    tracing::info!("Cleared progress for {} verses", cleared);
    Json(ClearProgressResponse { cleared })
}

//! Recitation comparison endpoint

use axum::{extract::State, Json};

use crate::error::{ApiError, Result};
use crate::models::{CompareRequest, CompareResponse};
use crate::routes::verses;
use crate::services::verses::strip_verse_numbers;
use crate::AppState;

/// POST /api/compare
/// Scores a transcription against the given text or a corpus verse
pub async fn compare(
    State(state): State<AppState>,
    Json(request): Json<CompareRequest>,
) -> Result<Json<CompareResponse>> {
    let position = request.page.zip(request.ayah);

    let expected = match (request.expected, position) {
        (Some(expected), _) => strip_verse_numbers(&expected),
        (None, Some((page, ayah))) => verses::lookup(&state, page, ayah)?,
        (None, None) => {
            return Err(ApiError::BadRequest(
                "Provide expected text or both page and ayah".to_string(),
            ))
        }
    };
    let transcribed = request.transcribed.unwrap_or_default();

    let result = state.scorer.compare(&transcribed, &expected);

    let progress = match position {
        Some((page, ayah)) => Some(state.progress.record_attempt(page, ayah, &result).await),
        None => None,
    };

    Ok(Json(CompareResponse { result, progress }))
}

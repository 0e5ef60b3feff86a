//! Audio transcription endpoint

use std::time::Instant;

use axum::{
    extract::{Multipart, Query, State},
    Json,
};

use crate::error::{ApiError, Result};
use crate::models::{TranscribeResponse, VerseQuery};
use crate::routes::verses;
use crate::services::transcription::AudioUpload;
use crate::AppState;

/// POST /api/transcribe?page=&ayah=
/// Transcribes the uploaded `file`; scores it when a verse is named
pub async fn transcribe(
    State(state): State<AppState>,
    Query(query): Query<VerseQuery>,
    mut multipart: Multipart,
) -> Result<Json<TranscribeResponse>> {
    let start = Instant::now();

    // Resolve the verse first so a bad position fails before the slow call
    let expected = match query.position() {
        Some((page, ayah)) => Some(verses::lookup(&state, page, ayah)?),
        None => None,
    };

    let mut upload = None;
    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some("file") {
            continue;
        }
        let file_name = field.file_name().unwrap_or_default().to_string();
        if file_name.is_empty() {
            return Err(ApiError::BadRequest("No file selected".to_string()));
        }
        let content_type = field.content_type().map(str::to_string);
        let bytes = field.bytes().await?;
        upload = Some(AudioUpload {
            file_name,
            content_type,
            bytes: bytes.to_vec(),
        });
        break;
    }
    let upload = upload.ok_or_else(|| ApiError::BadRequest("No audio file provided".to_string()))?;

    tracing::info!(
        "Processing file: {} ({} bytes, {})",
        upload.file_name,
        upload.bytes.len(),
        upload.content_type.as_deref().unwrap_or("unknown type")
    );

    let text = state.transcription.transcribe(upload).await?;

    let (comparison, progress) = match (expected, query.position()) {
        (Some(expected), Some((page, ayah))) => {
            let result = state.scorer.compare(&text, &expected);
            let progress = state.progress.record_attempt(page, ayah, &result).await;
            (Some(result), Some(progress))
        }
        _ => (None, None),
    };

    let processing_time_ms = start.elapsed().as_millis() as u64;
    tracing::info!("Transcription completed in {} ms", processing_time_ms);

    Ok(Json(TranscribeResponse {
        text,
        processing_time_ms,
        comparison,
        progress,
    }))
}

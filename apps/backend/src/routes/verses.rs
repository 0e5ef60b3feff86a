//! Verse lookup endpoint

use axum::{
    extract::{Path, State},
    Json,
};

use crate::error::{ApiError, Result};
use crate::models::VerseResponse;
use crate::AppState;

/// GET /api/verses/:page/:ayah
pub async fn get(
    State(state): State<AppState>,
    Path((page, ayah)): Path<(u32, u32)>,
) -> Result<Json<VerseResponse>> {
    let text = lookup(&state, page, ayah)?;
    Ok(Json(VerseResponse { page, ayah, text }))
}

/// Verse text for a position, or 404.
pub(crate) fn lookup(state: &AppState, page: u32, ayah: u32) -> Result<String> {
    state
        .verses
        .get_verse_text(page, ayah)
        .map(str::to_string)
        .ok_or_else(|| ApiError::NotFound(format!("Verse page {} ayah {}", page, ayah)))
}

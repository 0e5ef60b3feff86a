pub mod compare;
pub mod health;
pub mod progress;
pub mod transcribe;
pub mod verses;

use axum::http::Uri;

use crate::error::ApiError;

/// Routes listed in the 404 body for unknown paths.
pub const ENDPOINTS: &[&str] = &[
    "GET /health",
    "GET /api/model/info",
    "POST /api/compare",
    "POST /api/transcribe",
    "GET /api/verses/:page/:ayah",
    "GET /api/progress",
    "DELETE /api/progress",
];

/// Fallback for paths no route matches.
pub async fn not_found(uri: Uri) -> ApiError {
    ApiError::NotFound(format!(
        "{} (available endpoints: {})",
        uri.path(),
        ENDPOINTS.join(", ")
    ))
}

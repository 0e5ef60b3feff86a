//! API request and response types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub use recitation_core::{
    ComparisonResult, FeedbackTier, Locale, ReviewWord, ScoringThresholds, WordAnalysis,
    WordAnalysisEntry, WordStatus,
};

pub use crate::services::progress::{ProgressSummary, VerseProgress};

/// Verse position in the mushaf.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct VerseQuery {
    pub page: Option<u32>,
    pub ayah: Option<u32>,
}

impl VerseQuery {
    /// Both numbers, when both were given.
    pub fn position(&self) -> Option<(u32, u32)> {
        self.page.zip(self.ayah)
    }
}

/// POST /api/compare body.
///
/// `expected` may be omitted when `page` and `ayah` identify a verse in the
/// corpus. A missing `transcribed` is scored as silence.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CompareRequest {
    pub transcribed: Option<String>,
    pub expected: Option<String>,
    pub page: Option<u32>,
    pub ayah: Option<u32>,
}

/// Scoring result, plus the verse progress when a verse was named.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompareResponse {
    #[serde(flatten)]
    pub result: ComparisonResult,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub progress: Option<VerseProgress>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TranscribeResponse {
    pub text: String,
    pub processing_time_ms: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comparison: Option<ComparisonResult>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub progress: Option<VerseProgress>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerseResponse {
    pub page: u32,
    pub ayah: u32,
    pub text: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    pub status: String,
    pub model: String,
    pub version: String,
    pub verses_loaded: usize,
    pub transcription_configured: bool,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelInfoResponse {
    pub model_name: String,
    pub target_sample_rate: u32,
    pub max_audio_length: u32,
    pub max_upload_bytes: usize,
    pub specialized_for: String,
    pub languages: Vec<String>,
    pub feedback_locale: Locale,
    pub thresholds: ScoringThresholds,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClearProgressResponse {
    pub cleared: usize,
}

//! Result types produced by the scorer.
//!
//! Field names serialize in camelCase to match the JSON consumed by the
//! mobile client.

use serde::{Deserialize, Serialize};

/// Classification of one aligned word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WordStatus {
    /// Identical after diacritic removal.
    Perfect,
    /// At or above the word-correct threshold.
    Correct,
    /// At or above the word-partial threshold.
    Partial,
    Incorrect,
}

impl WordStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Perfect => "perfect",
            Self::Correct => "correct",
            Self::Partial => "partial",
            Self::Incorrect => "incorrect",
        }
    }

    /// Whether the word needs another look (partial or incorrect).
    pub fn needs_review(self) -> bool {
        matches!(self, Self::Partial | Self::Incorrect)
    }
}

/// Comparison of one transcribed word against the expected word at the same
/// position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WordAnalysisEntry {
    /// Empty when the recitation has fewer words than the verse.
    pub transcribed: String,
    /// Empty when the recitation has more words than the verse.
    pub expected: String,
    pub is_correct: bool,
    pub similarity: u8,
    pub tashkeel_accuracy: u8,
    pub status: WordStatus,
}

/// Word-level aggregate.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WordAnalysis {
    pub correct_words: usize,
    /// Number of words in the expected verse.
    pub total_words: usize,
    pub word_accuracy: u8,
    /// Like `word_accuracy`, with partially correct words counted as half.
    pub partial_accuracy: u8,
    pub word_analysis: Vec<WordAnalysisEntry>,
}

/// Discrete feedback band keyed by whole-text accuracy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FeedbackTier {
    Excellent,
    VeryGood,
    Good,
    NeedsReview,
    NeedsOverhaul,
}

impl FeedbackTier {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Excellent => "excellent",
            Self::VeryGood => "very_good",
            Self::Good => "good",
            Self::NeedsReview => "needs_review",
            Self::NeedsOverhaul => "needs_overhaul",
        }
    }
}

/// A mistaken word surfaced in the feedback.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewWord {
    pub expected: String,
    pub transcribed: String,
    pub similarity: u8,
}

/// Full outcome of scoring one recitation attempt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonResult {
    /// Whole-text similarity, diacritics and digits ignored.
    pub accuracy: u8,
    pub tashkeel_accuracy: u8,
    pub is_correct: bool,
    pub is_full_correct: bool,
    pub should_proceed: bool,
    pub word_analysis: WordAnalysis,
    pub tier: FeedbackTier,
    pub feedback: String,
    pub detailed_feedback: String,
    pub recommendation: String,
    pub words_to_review: Vec<ReviewWord>,
}

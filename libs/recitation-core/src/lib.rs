//! Scoring engine for Quran recitation practice.
//!
//! Provides:
//! - Arabic text normalization (diacritics, tatweel, digit glyphs)
//! - Edit-distance similarity (Levenshtein)
//! - Positional word alignment and per-word classification
//! - Tashkeel (diacritic) accuracy
//! - Tiered, localized feedback and the proceed decision
//!
//! Every function is pure; nothing is kept between calls.

pub mod compare;
pub mod config;
pub mod error;
pub mod feedback;
pub mod normalize;
pub mod similarity;
pub mod tashkeel;
pub mod types;
pub mod words;

pub use compare::{compare_recitation, Scorer};
pub use config::{Locale, ScoringThresholds};
pub use error::{ConfigError, Result};
pub use feedback::{select_tier, synthesize, Feedback};
pub use normalize::{clean_text, extract_diacritics, remove_diacritics};
pub use similarity::{levenshtein_distance, similarity};
pub use tashkeel::tashkeel_accuracy;
pub use types::{
    ComparisonResult, FeedbackTier, ReviewWord, WordAnalysis, WordAnalysisEntry, WordStatus,
};
pub use words::analyze_words;

//! Error types for recitation-core.
//!
//! Scoring itself is total over any pair of strings; only configuration can
//! be rejected.

use thiserror::Error;

/// Result type alias using ConfigError.
pub type Result<T> = std::result::Result<T, ConfigError>;

/// Errors raised when validating scoring thresholds.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("threshold {name} is {value}, must be at most 100")]
    OutOfRange { name: &'static str, value: u8 },

    #[error("threshold {higher} ({higher_value}) must be above {lower} ({lower_value})")]
    NotDescending {
        higher: &'static str,
        higher_value: u8,
        lower: &'static str,
        lower_value: u8,
    },

    #[error("unknown locale: {0}")]
    UnknownLocale(String),
}

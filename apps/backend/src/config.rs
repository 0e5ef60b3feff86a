//! Server configuration read from the environment.

use std::path::PathBuf;
use std::time::Duration;

use recitation_core::{Locale, ScoringThresholds};
use thiserror::Error;

/// Model served by the default Whisper backend.
pub const DEFAULT_MODEL_NAME: &str = "tarteel-ai/whisper-tiny-ar-quran";

/// Sample rate the Whisper backend resamples audio to.
pub const TARGET_SAMPLE_RATE: u32 = 16_000;

/// Longest audio clip the Whisper backend decodes in one pass, in seconds.
pub const MAX_AUDIO_SECONDS: u32 = 30;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {key}: {value}")]
    Invalid { key: &'static str, value: String },

    #[error("invalid SCORING_THRESHOLDS: {0}")]
    Thresholds(#[from] serde_json::Error),

    #[error(transparent)]
    Scoring(#[from] recitation_core::ConfigError),
}

/// Settings for the HTTP service.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub model_name: String,
    /// Base URL of the Whisper transcription server; transcription is
    /// disabled when unset.
    pub whisper_url: Option<String>,
    pub whisper_timeout: Duration,
    /// JSON verse corpus; the verse endpoints return 404 when unset.
    pub verses_path: Option<PathBuf>,
    pub max_upload_bytes: usize,
    pub locale: Locale,
    pub thresholds: ScoringThresholds,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 5000,
            model_name: DEFAULT_MODEL_NAME.to_string(),
            whisper_url: None,
            whisper_timeout: Duration::from_secs(60),
            verses_path: None,
            max_upload_bytes: 50 * 1024 * 1024,
            locale: Locale::default(),
            thresholds: ScoringThresholds::default(),
        }
    }
}

impl ServerConfig {
    /// Read settings from process environment variables.
    ///
    /// Recognized variables:
    /// - HOST, PORT
    /// - MODEL_NAME
    /// - WHISPER_URL, WHISPER_TIMEOUT_SECS
    /// - VERSES_PATH
    /// - MAX_UPLOAD_BYTES
    /// - FEEDBACK_LOCALE (`ar` or `en`)
    /// - SCORING_THRESHOLDS (JSON object, missing fields keep their defaults)
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build settings from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(host) = get("HOST") {
            config.host = host;
        }
        if let Some(port) = get("PORT") {
            config.port = parse("PORT", &port)?;
        }
        if let Some(model_name) = get("MODEL_NAME") {
            config.model_name = model_name;
        }
        if let Some(url) = get("WHISPER_URL") {
            config.whisper_url = Some(url.trim_end_matches('/').to_string());
        }
        if let Some(secs) = get("WHISPER_TIMEOUT_SECS") {
            config.whisper_timeout = Duration::from_secs(parse("WHISPER_TIMEOUT_SECS", &secs)?);
        }
        if let Some(path) = get("VERSES_PATH") {
            config.verses_path = Some(PathBuf::from(path));
        }
        if let Some(bytes) = get("MAX_UPLOAD_BYTES") {
            config.max_upload_bytes = parse("MAX_UPLOAD_BYTES", &bytes)?;
        }
        if let Some(locale) = get("FEEDBACK_LOCALE") {
            config.locale = Locale::parse(&locale)?;
        }
        if let Some(json) = get("SCORING_THRESHOLDS") {
            config.thresholds = serde_json::from_str(&json)?;
        }

        config.thresholds.validate()?;
        Ok(config)
    }

    /// Socket address string to bind.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse<T: std::str::FromStr>(key: &'static str, value: &str) -> Result<T, ConfigError> {
    value.trim().parse().map_err(|_| ConfigError::Invalid {
        key,
        value: value.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::collections::HashMap;

    fn from_pairs(pairs: &[(&str, &str)]) -> Result<ServerConfig, ConfigError> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ServerConfig::from_lookup(|key| map.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = from_pairs(&[]).unwrap();
        assert_eq!(config.bind_addr(), "0.0.0.0:5000");
        assert_eq!(config.model_name, DEFAULT_MODEL_NAME);
        assert_eq!(config.max_upload_bytes, 50 * 1024 * 1024);
        assert!(config.whisper_url.is_none());
        assert_eq!(config.locale, Locale::Arabic);
        assert_eq!(config.thresholds, ScoringThresholds::default());
    }

    #[test]
    fn test_overrides() {
        let config = from_pairs(&[
            ("PORT", "8080"),
            ("WHISPER_URL", "http://localhost:5001/"),
            ("WHISPER_TIMEOUT_SECS", "5"),
            ("FEEDBACK_LOCALE", "en"),
            ("SCORING_THRESHOLDS", r#"{"proceed": 60}"#),
        ])
        .unwrap();
        assert_eq!(config.port, 8080);
        assert_eq!(config.whisper_url.as_deref(), Some("http://localhost:5001"));
        assert_eq!(config.whisper_timeout, Duration::from_secs(5));
        assert_eq!(config.locale, Locale::English);
        assert_eq!(config.thresholds.proceed, 60);
        assert_eq!(config.thresholds.word_correct, 90);
    }

    #[test]
    fn test_blank_values_are_ignored() {
        let config = from_pairs(&[("PORT", "  "), ("WHISPER_URL", "")]).unwrap();
        assert_eq!(config.port, 5000);
        assert!(config.whisper_url.is_none());
    }

    #[test]
    fn test_invalid_port() {
        let err = from_pairs(&[("PORT", "abc")]).unwrap_err();
        assert_eq!(err.to_string(), "invalid value for PORT: abc");
    }

    #[test]
    fn test_invalid_thresholds_rejected() {
        let err = from_pairs(&[("SCORING_THRESHOLDS", r#"{"tierGood": 99}"#)]).unwrap_err();
        assert!(matches!(err, ConfigError::Scoring(_)));

        let err = from_pairs(&[("SCORING_THRESHOLDS", "not json")]).unwrap_err();
        assert!(matches!(err, ConfigError::Thresholds(_)));
    }

    #[test]
    fn test_unknown_locale() {
        let err = from_pairs(&[("FEEDBACK_LOCALE", "fr")]).unwrap_err();
        assert_eq!(err.to_string(), "unknown locale: fr");
    }
}

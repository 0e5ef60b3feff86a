//! Client for the external Whisper transcription server.
//!
//! The server answers `POST /transcribe` (multipart field `file`) with either
//! a plain-text body, a JSON string, `{"text": ...}`, or an array of such
//! objects. All shapes are reduced to a single string here so the scorer only
//! ever receives text.

use std::time::Duration;

use reqwest::multipart::{Form, Part};
use reqwest::Client;
use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TranscriptionError {
    #[error("transcription backend is not configured")]
    NotConfigured,

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Backend error: {status} - {message}")]
    Backend { status: u16, message: String },
}

/// Audio upload forwarded to the backend.
#[derive(Debug, Clone)]
pub struct AudioUpload {
    pub file_name: String,
    pub content_type: Option<String>,
    pub bytes: Vec<u8>,
}

/// HTTP client for the Whisper server.
pub struct TranscriptionService {
    client: Client,
    endpoint: Option<String>,
}

impl TranscriptionService {
    /// Create a client for `base_url`; `None` disables transcription.
    pub fn new(base_url: Option<String>, timeout: Duration) -> Result<Self, TranscriptionError> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            endpoint: base_url.map(|url| format!("{}/transcribe", url.trim_end_matches('/'))),
        })
    }

    /// Client with transcription disabled.
    pub fn disabled() -> Self {
        Self {
            client: Client::new(),
            endpoint: None,
        }
    }

    pub fn is_configured(&self) -> bool {
        self.endpoint.is_some()
    }

    /// Send audio to the backend and return the recognized text.
    ///
    /// Failures are reported once; retrying is left to the client.
    pub async fn transcribe(&self, upload: AudioUpload) -> Result<String, TranscriptionError> {
        let endpoint = self
            .endpoint
            .as_deref()
            .ok_or(TranscriptionError::NotConfigured)?;

        let size = upload.bytes.len();
        let mut part = Part::bytes(upload.bytes).file_name(upload.file_name);
        if let Some(content_type) = upload.content_type.as_deref() {
            part = part.mime_str(content_type)?;
        }
        let form = Form::new().part("file", part);

        tracing::debug!("Forwarding {} bytes to {}", size, endpoint);

        let response = self.client.post(endpoint).multipart(form).send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(TranscriptionError::Backend {
                status: status.as_u16(),
                message: body,
            });
        }

        Ok(extract_text(&body))
    }
}

/// Reduce any supported response body to the transcribed text.
pub fn extract_text(body: &str) -> String {
    match serde_json::from_str::<Value>(body) {
        Ok(Value::String(text)) => text.trim().to_string(),
        Ok(value @ Value::Object(_)) => text_field(&value).unwrap_or_default(),
        Ok(Value::Array(items)) => items
            .iter()
            .filter_map(|item| match item {
                Value::String(text) => Some(text.trim().to_string()),
                other => text_field(other),
            })
            .filter(|text| !text.is_empty())
            .collect::<Vec<_>>()
            .join(" "),
        // plain text, or a bare number/bool that happens to be valid JSON
        _ => body.trim().to_string(),
    }
}

fn text_field(value: &Value) -> Option<String> {
    value
        .get("text")
        .and_then(Value::as_str)
        .map(|text| text.trim().to_string())
}

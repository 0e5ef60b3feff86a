//! Verse corpus lookup.
//!
//! The corpus is a JSON array of `{ "page": 1, "ayah": 1, "text": "..." }`
//! records loaded once at start-up. Verse-number tokens (e.g. `﴿١﴾`) are
//! removed on load so the scorer only ever sees recitable words.

use std::collections::HashMap;
use std::path::Path;

use recitation_core::normalize::is_numeral_token;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum VerseError {
    #[error("failed to read verse corpus: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid verse corpus: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid verse position page {page}, ayah {ayah}")]
    InvalidPosition { page: u32, ayah: u32 },

    #[error("duplicate verse page {page}, ayah {ayah}")]
    Duplicate { page: u32, ayah: u32 },
}

/// One verse as stored in the corpus file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerseRecord {
    pub page: u32,
    pub ayah: u32,
    pub text: String,
}

/// In-memory verse corpus keyed by (page, ayah).
#[derive(Debug, Default)]
pub struct VerseService {
    verses: HashMap<(u32, u32), String>,
}

impl VerseService {
    /// Corpus with no verses.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Load the corpus from a JSON file.
    pub fn load(path: &Path) -> Result<Self, VerseError> {
        let content = std::fs::read_to_string(path)?;
        let service = Self::from_json(&content)?;
        tracing::info!("Loaded {} verses from {}", service.len(), path.display());
        Ok(service)
    }

    /// Parse the corpus from JSON text.
    pub fn from_json(json: &str) -> Result<Self, VerseError> {
        let records: Vec<VerseRecord> = serde_json::from_str(json)?;
        Self::from_records(records)
    }

    /// Build the corpus from records; page and ayah numbers start at 1.
    pub fn from_records(records: Vec<VerseRecord>) -> Result<Self, VerseError> {
        let mut verses = HashMap::with_capacity(records.len());
        for record in records {
            let (page, ayah) = (record.page, record.ayah);
            if page == 0 || ayah == 0 {
                return Err(VerseError::InvalidPosition { page, ayah });
            }
            if verses
                .insert((page, ayah), strip_verse_numbers(&record.text))
                .is_some()
            {
                return Err(VerseError::Duplicate { page, ayah });
            }
        }
        Ok(Self { verses })
    }

    /// Canonical text of a verse, without verse-number tokens.
    pub fn get_verse_text(&self, page: u32, ayah: u32) -> Option<&str> {
        self.verses.get(&(page, ayah)).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.verses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.verses.is_empty()
    }
}

/// Drop verse-number tokens and collapse whitespace.
pub fn strip_verse_numbers(text: &str) -> String {
    text.split_whitespace()
        .filter(|token| !is_numeral_token(token))
        .collect::<Vec<_>>()
        .join(" ")
}

//! In-memory practice progress.
//!
//! Lives only as long as the process; nothing is persisted.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use recitation_core::ComparisonResult;
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;

/// Attempts on one verse.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerseProgress {
    pub page: u32,
    pub ayah: u32,
    pub attempts: u32,
    pub best_accuracy: u8,
    pub last_accuracy: u8,
    /// Set once an attempt reaches the proceed threshold; never cleared.
    pub completed: bool,
    pub last_attempt_at: DateTime<Utc>,
}

/// All tracked verses, ordered by page then ayah.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressSummary {
    pub completed_count: usize,
    pub verses: Vec<VerseProgress>,
}

#[derive(Debug, Default)]
pub struct ProgressService {
    verses: RwLock<HashMap<(u32, u32), VerseProgress>>,
}

impl ProgressService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a scored attempt and return the updated verse progress.
    pub async fn record_attempt(
        &self,
        page: u32,
        ayah: u32,
        result: &ComparisonResult,
    ) -> VerseProgress {
        let now = Utc::now();
        let mut verses = self.verses.write().await;
        let entry = verses.entry((page, ayah)).or_insert_with(|| VerseProgress {
            page,
            ayah,
            attempts: 0,
            best_accuracy: 0,
            last_accuracy: 0,
            completed: false,
            last_attempt_at: now,
        });

        entry.attempts += 1;
        entry.best_accuracy = entry.best_accuracy.max(result.accuracy);
        entry.last_accuracy = result.accuracy;
        entry.last_attempt_at = now;
        if result.should_proceed && !entry.completed {
            entry.completed = true;
            tracing::info!("Verse {}:{} completed", page, ayah);
        }

        entry.clone()
    }

    pub async fn get(&self, page: u32, ayah: u32) -> Option<VerseProgress> {
        self.verses.read().await.get(&(page, ayah)).cloned()
    }

    pub async fn summary(&self) -> ProgressSummary {
        let verses = self.verses.read().await;
        let mut list: Vec<VerseProgress> = verses.values().cloned().collect();
        list.sort_by_key(|v| (v.page, v.ayah));

        ProgressSummary {
            completed_count: list.iter().filter(|v| v.completed).count(),
            verses: list,
        }
    }

    /// Forget all progress; returns how many verses were cleared.
    pub async fn clear(&self) -> usize {
        let mut verses = self.verses.write().await;
        let cleared = verses.len();
        verses.clear();
        cleared
    }
}

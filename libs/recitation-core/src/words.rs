//! Word-level alignment and analysis.
//!
//! Words are aligned by position only: the i-th transcribed word is compared
//! with the i-th expected word. A single inserted or skipped word therefore
//! shifts every later comparison, and a recitation with the right words in the
//! wrong order scores low. Re-aligning (e.g. by longest common subsequence)
//! would change scores and is intentionally not done here.

use crate::config::ScoringThresholds;
use crate::normalize::remove_diacritics;
use crate::similarity::{percentage, ratio_percentage, similarity};
use crate::tashkeel::tashkeel_accuracy;
use crate::types::{WordAnalysis, WordAnalysisEntry, WordStatus};

/// Compare two texts word by word.
///
/// `total_words` is the expected word count; extra transcribed words still get
/// an entry but can never raise the accuracy.
pub fn analyze_words(
    transcribed: &str,
    expected: &str,
    thresholds: &ScoringThresholds,
) -> WordAnalysis {
    let transcribed_words: Vec<&str> = transcribed.split_whitespace().collect();
    let expected_words: Vec<&str> = expected.split_whitespace().collect();

    let len = transcribed_words.len().max(expected_words.len());
    let entries: Vec<WordAnalysisEntry> = (0..len)
        .map(|i| {
            analyze_word(
                transcribed_words.get(i).copied().unwrap_or_default(),
                expected_words.get(i).copied().unwrap_or_default(),
                thresholds,
            )
        })
        .collect();

    let total_words = expected_words.len();
    let correct_words = entries.iter().filter(|e| e.is_correct).count();
    let partial_only = entries
        .iter()
        .filter(|e| e.status == WordStatus::Partial)
        .count();

    WordAnalysis {
        correct_words,
        total_words,
        word_accuracy: percentage(correct_words, total_words),
        partial_accuracy: ratio_percentage(
            correct_words as f64 + 0.5 * partial_only as f64,
            total_words,
        ),
        word_analysis: entries,
    }
}

/// Score a single aligned word pair.
pub fn analyze_word(
    transcribed: &str,
    expected: &str,
    thresholds: &ScoringThresholds,
) -> WordAnalysisEntry {
    let word_similarity = similarity(&remove_diacritics(transcribed), &remove_diacritics(expected));
    let is_correct = word_similarity >= thresholds.word_correct;

    let status = if word_similarity == 100 {
        WordStatus::Perfect
    } else if is_correct {
        WordStatus::Correct
    } else if word_similarity >= thresholds.word_partial {
        WordStatus::Partial
    } else {
        WordStatus::Incorrect
    };

    WordAnalysisEntry {
        transcribed: transcribed.to_string(),
        expected: expected.to_string(),
        is_correct,
        similarity: word_similarity,
        tashkeel_accuracy: tashkeel_accuracy(transcribed, expected),
        status,
    }
}

//! Scoring a transcribed recitation against the expected verse text.

use crate::config::{Locale, ScoringThresholds};
use crate::feedback::synthesize;
use crate::normalize::{clean_text, remove_diacritics};
use crate::similarity::similarity;
use crate::tashkeel::tashkeel_accuracy;
use crate::types::ComparisonResult;
use crate::words::analyze_words;

/// Scores recitations with a fixed set of thresholds and feedback locale.
///
/// Holds no per-call state, so one scorer can be shared across threads.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Scorer {
    pub thresholds: ScoringThresholds,
    pub locale: Locale,
}

impl Scorer {
    pub fn new(thresholds: ScoringThresholds, locale: Locale) -> Self {
        Self { thresholds, locale }
    }

    /// Score `transcribed` against `expected`.
    ///
    /// `expected` must already be free of verse-number tokens. Whole-text
    /// accuracy ignores diacritics and digits; tashkeel is scored separately.
    pub fn compare(&self, transcribed: &str, expected: &str) -> ComparisonResult {
        let t = &self.thresholds;

        let accuracy = similarity(
            &clean_text(&remove_diacritics(transcribed)),
            &clean_text(&remove_diacritics(expected)),
        );
        let tashkeel = tashkeel_accuracy(transcribed, expected);
        let word_analysis = analyze_words(transcribed, expected, t);
        let feedback = synthesize(accuracy, tashkeel, &word_analysis, t, self.locale);

        tracing::debug!(
            accuracy,
            tashkeel_accuracy = tashkeel,
            word_accuracy = word_analysis.word_accuracy,
            tier = feedback.tier.as_str(),
            "Scored recitation"
        );

        ComparisonResult {
            accuracy,
            tashkeel_accuracy: tashkeel,
            is_correct: accuracy >= t.is_correct,
            is_full_correct: accuracy >= t.full_correct && tashkeel >= t.full_correct_tashkeel,
            should_proceed: accuracy >= t.proceed,
            word_analysis,
            tier: feedback.tier,
            feedback: feedback.feedback,
            detailed_feedback: feedback.detailed_feedback,
            recommendation: feedback.recommendation,
            words_to_review: feedback.words_to_review,
        }
    }
}

/// Score with the default thresholds and Arabic feedback.
pub fn compare_recitation(transcribed: &str, expected: &str) -> ComparisonResult {
    Scorer::default().compare(transcribed, expected)
}

//! Scoring configuration.

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};

/// Percentage thresholds used by the word analyzer and feedback synthesizer.
///
/// Every value is a percentage in `0..=100`. Deserialization fills missing
/// fields from [`ScoringThresholds::default`], so partial overrides work.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ScoringThresholds {
    /// Minimum word similarity for a word to count as correct.
    pub word_correct: u8,
    /// Minimum word similarity for a word to count as partially correct.
    pub word_partial: u8,
    /// Minimum whole-text accuracy for `is_correct`.
    pub is_correct: u8,
    /// Minimum whole-text accuracy for `is_full_correct`.
    pub full_correct: u8,
    /// Minimum tashkeel accuracy for `is_full_correct`.
    pub full_correct_tashkeel: u8,
    /// Minimum whole-text accuracy to move on to the next verse.
    pub proceed: u8,
    pub tier_excellent: u8,
    pub tier_very_good: u8,
    pub tier_good: u8,
    pub tier_needs_review: u8,
    /// Tashkeel accuracy below which a diacritics reminder is added.
    pub tashkeel_warning: u8,
    /// How many mistaken words the feedback lists.
    pub max_review_words: usize,
}

impl Default for ScoringThresholds {
    fn default() -> Self {
        Self {
            word_correct: 90,
            word_partial: 70,
            is_correct: 80,
            full_correct: 95,
            full_correct_tashkeel: 90,
            proceed: 75,
            tier_excellent: 95,
            tier_very_good: 85,
            tier_good: 70,
            tier_needs_review: 50,
            tashkeel_warning: 70,
            max_review_words: 3,
        }
    }
}

impl ScoringThresholds {
    /// Check that all percentages are in range and the bands are ordered.
    pub fn validate(&self) -> Result<()> {
        let percentages = [
            ("wordCorrect", self.word_correct),
            ("wordPartial", self.word_partial),
            ("isCorrect", self.is_correct),
            ("fullCorrect", self.full_correct),
            ("fullCorrectTashkeel", self.full_correct_tashkeel),
            ("proceed", self.proceed),
            ("tierExcellent", self.tier_excellent),
            ("tierVeryGood", self.tier_very_good),
            ("tierGood", self.tier_good),
            ("tierNeedsReview", self.tier_needs_review),
            ("tashkeelWarning", self.tashkeel_warning),
        ];
        for (name, value) in percentages {
            if value > 100 {
                return Err(ConfigError::OutOfRange { name, value });
            }
        }

        // equal word thresholds are allowed and leave no partial band
        if self.word_correct < self.word_partial {
            return Err(ConfigError::NotDescending {
                higher: "wordCorrect",
                higher_value: self.word_correct,
                lower: "wordPartial",
                lower_value: self.word_partial,
            });
        }

        let ordered = [
            (("tierExcellent", self.tier_excellent), ("tierVeryGood", self.tier_very_good)),
            (("tierVeryGood", self.tier_very_good), ("tierGood", self.tier_good)),
            (("tierGood", self.tier_good), ("tierNeedsReview", self.tier_needs_review)),
        ];
        for ((higher, higher_value), (lower, lower_value)) in ordered {
            if higher_value <= lower_value {
                return Err(ConfigError::NotDescending {
                    higher,
                    higher_value,
                    lower,
                    lower_value,
                });
            }
        }

        Ok(())
    }
}

/// Language of the feedback messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Locale {
    #[default]
    Arabic,
    English,
}

impl Locale {
    /// BCP 47 language tag.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Arabic => "ar",
            Self::English => "en",
        }
    }

    /// Parse from a language tag such as `ar`, `en` or `en-US`.
    pub fn parse(tag: &str) -> Result<Self> {
        let primary = tag.split(['-', '_']).next().unwrap_or_default();
        match primary.to_ascii_lowercase().as_str() {
            "ar" | "arabic" => Ok(Self::Arabic),
            "en" | "english" => Ok(Self::English),
            _ => Err(ConfigError::UnknownLocale(tag.to_string())),
        }
    }
}

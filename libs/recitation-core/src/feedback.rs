//! Feedback messages for a scored recitation.
//!
//! The message content is a fixed table: one headline, detail and
//! recommendation per tier and locale. Only the list of words to review and
//! the diacritics reminder vary with the input.

use serde::{Deserialize, Serialize};

use crate::config::{Locale, ScoringThresholds};
use crate::types::{FeedbackTier, ReviewWord, WordAnalysis};

/// Messages for one tier.
struct TierMessages {
    headline: &'static str,
    detail: &'static str,
    recommendation: &'static str,
}

/// Locale-specific sentences that are not tied to a tier.
struct Extras {
    review_prefix: &'static str,
    tashkeel_warning: &'static str,
    list_separator: &'static str,
}

const ARABIC_TIERS: [TierMessages; 5] = [
    TierMessages {
        headline: "ممتاز! تلاوة صحيحة",
        detail: "قراءتك مطابقة للآية، أحسنت.",
        recommendation: "يمكنك الانتقال إلى الآية التالية.",
    },
    TierMessages {
        headline: "جيد جداً",
        detail: "قراءتك قريبة جداً من الآية مع أخطاء بسيطة.",
        recommendation: "يمكنك المتابعة أو إعادة المحاولة لإتقان التلاوة.",
    },
    TierMessages {
        headline: "جيد",
        detail: "قراءتك تحتاج إلى بعض التحسين.",
        recommendation: "راجع الكلمات المشار إليها ثم أعد المحاولة.",
    },
    TierMessages {
        headline: "يحتاج إلى مراجعة",
        detail: "في قراءتك عدة أخطاء.",
        recommendation: "اقرأ الآية من المصحف بتأنٍّ قبل إعادة المحاولة.",
    },
    TierMessages {
        headline: "يحتاج إلى مراجعة شاملة",
        detail: "قراءتك بعيدة عن نص الآية.",
        recommendation: "استمع إلى تلاوة الآية وراجعها كاملة ثم أعد المحاولة.",
    },
];

const ARABIC_EXTRAS: Extras = Extras {
    review_prefix: "كلمات تحتاج إلى مراجعة:",
    tashkeel_warning: "انتبه إلى التشكيل وحركات الحروف.",
    list_separator: "، ",
};

const ENGLISH_TIERS: [TierMessages; 5] = [
    TierMessages {
        headline: "Excellent! Correct recitation",
        detail: "Your recitation matches the verse.",
        recommendation: "You can move on to the next verse.",
    },
    TierMessages {
        headline: "Very good",
        detail: "Your recitation is very close to the verse with minor mistakes.",
        recommendation: "You can continue, or try again to perfect it.",
    },
    TierMessages {
        headline: "Good",
        detail: "Your recitation needs some improvement.",
        recommendation: "Review the highlighted words and try again.",
    },
    TierMessages {
        headline: "Needs review",
        detail: "Your recitation has several mistakes.",
        recommendation: "Read the verse carefully from the mushaf before trying again.",
    },
    TierMessages {
        headline: "Needs a full review",
        detail: "Your recitation is far from the verse text.",
        recommendation: "Listen to the verse, review it in full, then try again.",
    },
];

const ENGLISH_EXTRAS: Extras = Extras {
    review_prefix: "Words to review:",
    tashkeel_warning: "Pay attention to the diacritics (tashkeel).",
    list_separator: ", ",
};

/// Human-readable feedback for one attempt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Feedback {
    pub tier: FeedbackTier,
    pub feedback: String,
    pub detailed_feedback: String,
    pub recommendation: String,
    pub words_to_review: Vec<ReviewWord>,
}

/// Pick the tier for a whole-text accuracy; the highest matching band wins.
pub fn select_tier(accuracy: u8, thresholds: &ScoringThresholds) -> FeedbackTier {
    if accuracy >= thresholds.tier_excellent {
        FeedbackTier::Excellent
    } else if accuracy >= thresholds.tier_very_good {
        FeedbackTier::VeryGood
    } else if accuracy >= thresholds.tier_good {
        FeedbackTier::Good
    } else if accuracy >= thresholds.tier_needs_review {
        FeedbackTier::NeedsReview
    } else {
        FeedbackTier::NeedsOverhaul
    }
}

/// Up to `limit` partial or incorrect words that have an expected counterpart.
pub fn words_to_review(analysis: &WordAnalysis, limit: usize) -> Vec<ReviewWord> {
    analysis
        .word_analysis
        .iter()
        .filter(|e| e.status.needs_review() && !e.expected.is_empty())
        .take(limit)
        .map(|e| ReviewWord {
            expected: e.expected.clone(),
            transcribed: e.transcribed.clone(),
            similarity: e.similarity,
        })
        .collect()
}

/// Build the feedback messages for an attempt.
pub fn synthesize(
    accuracy: u8,
    tashkeel_accuracy: u8,
    analysis: &WordAnalysis,
    thresholds: &ScoringThresholds,
    locale: Locale,
) -> Feedback {
    let tier = select_tier(accuracy, thresholds);
    let (tiers, extras) = match locale {
        Locale::Arabic => (&ARABIC_TIERS, &ARABIC_EXTRAS),
        Locale::English => (&ENGLISH_TIERS, &ENGLISH_EXTRAS),
    };
    let messages = &tiers[tier_index(tier)];
    let review = words_to_review(analysis, thresholds.max_review_words);

    let mut detailed_feedback = messages.detail.to_string();
    if !review.is_empty() {
        let listed = review
            .iter()
            .map(|w| format!("«{}» ({}%)", w.expected, w.similarity))
            .collect::<Vec<_>>()
            .join(extras.list_separator);
        detailed_feedback.push(' ');
        detailed_feedback.push_str(extras.review_prefix);
        detailed_feedback.push(' ');
        detailed_feedback.push_str(&listed);
    }
    if tashkeel_accuracy < thresholds.tashkeel_warning {
        detailed_feedback.push(' ');
        detailed_feedback.push_str(extras.tashkeel_warning);
    }

    Feedback {
        tier,
        feedback: messages.headline.to_string(),
        detailed_feedback,
        recommendation: messages.recommendation.to_string(),
        words_to_review: review,
    }
}

fn tier_index(tier: FeedbackTier) -> usize {
    match tier {
        FeedbackTier::Excellent => 0,
        FeedbackTier::VeryGood => 1,
        FeedbackTier::Good => 2,
        FeedbackTier::NeedsReview => 3,
        FeedbackTier::NeedsOverhaul => 4,
    }
}

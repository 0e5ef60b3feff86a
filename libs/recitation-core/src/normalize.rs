//! Arabic text normalization for recitation comparison.
//!
//! Two normalized forms are used by the scorer:
//! - "no-diacritics" ([`remove_diacritics`]): tashkeel, Quranic annotation
//!   marks and tatweel removed, whitespace collapsed.
//! - "clean" ([`clean_text`]): the above plus removal of digit glyphs.
//!
//! All functions are total: any input, including the empty string, yields a
//! valid (possibly empty) output.

use unicode_normalization::UnicodeNormalization;

/// Arabic tatweel (kashida), used for elongation only.
pub const TATWEEL: char = '\u{0640}';

/// Whether `c` is a tashkeel mark or a Quranic annotation sign.
///
/// Covers fathatan through sukun (U+064B–U+0652), superscript alef (U+0670)
/// and the Quranic annotation block (U+06D6–U+06ED).
pub fn is_diacritic(c: char) -> bool {
    matches!(c, '\u{064B}'..='\u{0652}' | '\u{0670}' | '\u{06D6}'..='\u{06ED}')
}

/// Whether `c` is an Arabic-Indic, Extended Arabic-Indic or ASCII digit.
pub fn is_digit_glyph(c: char) -> bool {
    matches!(c, '\u{0660}'..='\u{0669}' | '\u{06F0}'..='\u{06F9}' | '0'..='9')
}

/// Whether a whitespace-free token is a verse number, e.g. `١٢`, `﴿٣﴾` or `(7)`.
pub fn is_numeral_token(token: &str) -> bool {
    let mut has_digit = false;
    for c in token.chars() {
        if is_digit_glyph(c) {
            has_digit = true;
        } else if !matches!(c, '\u{06DD}' | '\u{FD3E}' | '\u{FD3F}' | '(' | ')' | '[' | ']') {
            return false;
        }
    }
    has_digit
}

/// Remove diacritics and tatweel, collapse whitespace and trim.
pub fn remove_diacritics(text: &str) -> String {
    normalize_with(text, |c| is_diacritic(c) || c == TATWEEL)
}

/// Remove diacritics, tatweel and digit glyphs, collapse whitespace and trim.
pub fn clean_text(text: &str) -> String {
    normalize_with(text, |c| is_diacritic(c) || c == TATWEEL || is_digit_glyph(c))
}

/// Keep only the diacritic marks of `text`, in their original order.
///
/// This is the complement of [`remove_diacritics`] restricted to marks;
/// tatweel carries no vocalization and is not returned.
pub fn extract_diacritics(text: &str) -> String {
    text.nfd().filter(|&c| is_diacritic(c)).collect()
}

fn normalize_with(text: &str, drop: impl Fn(char) -> bool) -> String {
    let stripped: String = text.nfd().filter(|&c| !drop(c)).collect();
    collapse_whitespace(&stripped)
}

/// Trim and collapse runs of whitespace to a single space.
fn collapse_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const BISMILLAH: &str = "بِسْمِ اللَّهِ الرَّحْمَنِ الرَّحِيمِ";

    #[test]
    fn test_remove_diacritics() {
        assert_eq!(remove_diacritics(BISMILLAH), "بسم الله الرحمن الرحيم");
        assert_eq!(remove_diacritics("الرَّحْمَٰنِ"), "الرحمن");
    }

    #[test]
    fn test_remove_tatweel_and_whitespace() {
        assert_eq!(remove_diacritics("  الـــله \t\n  الصمد "), "الله الصمد");
    }

    #[test]
    fn test_hamza_letters_are_decomposed() {
        assert_eq!(remove_diacritics("أحد"), "\u{0627}\u{0654}\u{062D}\u{062F}");
        assert_eq!(remove_diacritics("أحد"), remove_diacritics("\u{0627}\u{0654}حد"));
    }

    #[test]
    fn test_remove_diacritics_keeps_digits() {
        assert_eq!(remove_diacritics("الحمد ١٢ 3"), "الحمد ١٢ 3");
    }

    #[test]
    fn test_clean_text_strips_all_digit_glyphs() {
        assert_eq!(clean_text("الحَمْدُ ١٢ ۴ 7 لله"), "الحمد لله");
        assert_eq!(clean_text("١٢٣"), "");
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(remove_diacritics(""), "");
        assert_eq!(clean_text(""), "");
        assert_eq!(extract_diacritics(""), "");
        assert_eq!(remove_diacritics("   "), "");
    }

    #[test]
    fn test_idempotence() {
        let samples = [
            BISMILLAH,
            "مَٰلِكِ يَوْمِ ٱلدِّينِ",
            "إِيَّاكَ نَعْبُدُ وَإِيَّاكَ نَسْتَعِينُ ۝٥",
            "آمَنُوا",
            "plain ascii  text 42",
        ];
        for s in samples {
            let once = remove_diacritics(s);
            assert_eq!(remove_diacritics(&once), once);
            let cleaned = clean_text(s);
            assert_eq!(clean_text(&cleaned), cleaned);
        }
    }

    #[test]
    fn test_extract_diacritics() {
        assert_eq!(extract_diacritics("بِسْمِ"), "\u{0650}\u{0652}\u{0650}");
        assert_eq!(extract_diacritics("بسم الله"), "");
    }

    #[test]
    fn test_extract_is_complement_of_remove() {
        let marks = extract_diacritics(BISMILLAH);
        assert!(marks.chars().all(is_diacritic));
        assert!(remove_diacritics(BISMILLAH).chars().all(|c| !is_diacritic(c)));
    }

    #[test]
    fn test_extract_orders_shadda_canonically() {
        // shadda+fatha and fatha+shadda are the same vocalization
        assert_eq!(
            extract_diacritics("\u{0644}\u{0651}\u{064E}"),
            extract_diacritics("\u{0644}\u{064E}\u{0651}")
        );
    }

    #[test]
    fn test_is_numeral_token() {
        assert!(is_numeral_token("١٢"));
        assert!(is_numeral_token("﴿٣﴾"));
        assert!(is_numeral_token("(7)"));
        assert!(is_numeral_token("۝٥"));
        assert!(!is_numeral_token("الله"));
        assert!(!is_numeral_token("﴿﴾"));
        assert!(!is_numeral_token(""));
    }
}

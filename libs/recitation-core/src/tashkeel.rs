//! Tashkeel (diacritic) accuracy.

use crate::normalize::extract_diacritics;
use crate::similarity::similarity;

/// Similarity (0 to 100) of the diacritic marks of two texts.
///
/// When `expected` carries no marks there is nothing to score and the result
/// is 100, whatever `transcribed` contains.
pub fn tashkeel_accuracy(transcribed: &str, expected: &str) -> u8 {
    let expected_marks = extract_diacritics(expected);
    if expected_marks.is_empty() {
        return 100;
    }

    let transcribed_marks = extract_diacritics(transcribed);
    similarity(&transcribed_marks, &expected_marks)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_no_expected_marks_is_perfect() {
        assert_eq!(tashkeel_accuracy("", "بسم الله"), 100);
        assert_eq!(tashkeel_accuracy("بِسْمِ", "بسم"), 100);
        assert_eq!(tashkeel_accuracy("anything", ""), 100);
    }

    #[test]
    fn test_identical_marks() {
        assert_eq!(tashkeel_accuracy("الرَّحْمَنِ", "الرَّحْمَنِ"), 100);
    }

    #[test]
    fn test_missing_marks() {
        assert_eq!(tashkeel_accuracy("الرحمن", "الرَّحْمَنِ"), 0);
    }

    #[test]
    fn test_one_wrong_vowel() {
        // kasra vs fatha on the last letter: 2 of 3 marks agree
        assert_eq!(tashkeel_accuracy("بِسْمَ", "بِسْمِ"), 67);
    }

    #[test]
    fn test_base_letters_are_ignored() {
        assert_eq!(tashkeel_accuracy("كِتْبِ", "بِسْمِ"), 100);
    }
}

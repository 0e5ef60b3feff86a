//! Edit-distance based string similarity.
//!
//! Lengths and distances are measured in UTF-16 code units so that scores
//! agree with the mobile client, which computes them on JavaScript strings.
//! Arabic script lives entirely in the BMP, so for verse text this is the
//! same as counting `char`s.

/// Calculate Levenshtein distance between two strings.
pub fn levenshtein_distance(a: &str, b: &str) -> usize {
    let a_units: Vec<u16> = a.encode_utf16().collect();
    let b_units: Vec<u16> = b.encode_utf16().collect();
    distance_units(&a_units, &b_units)
}

fn distance_units(a: &[u16], b: &[u16]) -> usize {
    let m = a.len();
    let n = b.len();

    if m == 0 {
        return n;
    }
    if n == 0 {
        return m;
    }

    // Two rows instead of the full matrix
    let mut prev = (0..=n).collect::<Vec<_>>();
    let mut curr = vec![0; n + 1];

    for i in 1..=m {
        curr[0] = i;

        for j in 1..=n {
            let cost = usize::from(a[i - 1] != b[j - 1]);

            curr[j] = (prev[j] + 1) // deletion
                .min(curr[j - 1] + 1) // insertion
                .min(prev[j - 1] + cost); // substitution
        }

        std::mem::swap(&mut prev, &mut curr);
    }

    prev[n]
}

/// Similarity percentage (0 to 100) based on Levenshtein distance.
///
/// Identical strings (including two empty strings) score 100, and an empty
/// string against a non-empty one scores 0.
pub fn similarity(a: &str, b: &str) -> u8 {
    if a == b {
        return 100;
    }
    if a.is_empty() || b.is_empty() {
        return 0;
    }

    let a_units: Vec<u16> = a.encode_utf16().collect();
    let b_units: Vec<u16> = b.encode_utf16().collect();
    let max_len = a_units.len().max(b_units.len());
    let distance = distance_units(&a_units, &b_units);

    percentage(max_len - distance, max_len)
}

/// `round(100 * part / whole)` clamped to 0..=100, or 0 when `whole` is zero.
pub(crate) fn percentage(part: usize, whole: usize) -> u8 {
    ratio_percentage(part as f64, whole)
}

/// Like [`percentage`] for a fractional numerator.
pub(crate) fn ratio_percentage(part: f64, whole: usize) -> u8 {
    if whole == 0 {
        return 0;
    }
    (100.0 * part / whole as f64).round().clamp(0.0, 100.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_levenshtein_distance() {
        assert_eq!(levenshtein_distance("", ""), 0);
        assert_eq!(levenshtein_distance("abc", "abc"), 0);
        assert_eq!(levenshtein_distance("abc", ""), 3);
        assert_eq!(levenshtein_distance("", "abc"), 3);
        assert_eq!(levenshtein_distance("kitten", "sitting"), 3);
        assert_eq!(levenshtein_distance("saturday", "sunday"), 3);
    }

    #[test]
    fn test_levenshtein_arabic() {
        assert_eq!(levenshtein_distance("الرحمن", "الرحيم"), 2);
        assert_eq!(levenshtein_distance("بسم", "باسم"), 1);
    }

    #[test]
    fn test_levenshtein_symmetric() {
        let pairs = [("kitten", "sitting"), ("الحمد", "حمد"), ("", "x")];
        for (a, b) in pairs {
            assert_eq!(levenshtein_distance(a, b), levenshtein_distance(b, a));
        }
    }

    #[test]
    fn test_distance_counts_utf16_units() {
        // U+1D11E is a surrogate pair in UTF-16
        assert_eq!(levenshtein_distance("\u{1D11E}", ""), 2);
    }

    #[test]
    fn test_similarity_reflexive() {
        for s in ["", "a", "بسم الله", "kitten"] {
            assert_eq!(similarity(s, s), 100);
        }
    }

    #[test]
    fn test_similarity_empty() {
        assert_eq!(similarity("", ""), 100);
        assert_eq!(similarity("", "x"), 0);
        assert_eq!(similarity("الله", ""), 0);
    }

    #[test]
    fn test_similarity_rounding() {
        // (7 - 3) / 7 = 57.14
        assert_eq!(similarity("kitten", "sitting"), 57);
        // (6 - 2) / 6 = 66.67
        assert_eq!(similarity("الرحمن", "الرحيم"), 67);
        // (2 - 1) / 2 = 50
        assert_eq!(similarity("ab", "ac"), 50);
        assert_eq!(similarity("abc", "xyz"), 0);
    }

    #[test]
    fn test_percentage_guards_zero() {
        assert_eq!(percentage(0, 0), 0);
        assert_eq!(percentage(3, 4), 75);
        assert_eq!(ratio_percentage(2.5, 4), 63);
    }
}

//! Character-multiset similarity for fuzzy station names.
//!
//! The score is a Dice coefficient over character counts: order and
//! position are ignored, so anagrams score 1.0. It is not an edit distance.

use std::collections::HashMap;

/// Similarity of two strings in `[0, 1]`, ignoring case.
///
/// Counts the characters the two lowercased strings share (as multisets)
/// and returns `2 * common / (len(a) + len(b))`, or `0.0` when nothing is
/// shared. Total over all inputs: empty strings score `0.0`.
///
/// # Examples
///
/// ```
/// use rail_client::similarity::similarity;
///
/// assert_eq!(similarity("Lod", "lod"), 1.0);
/// assert_eq!(similarity("abba", "baba"), 1.0);
/// assert_eq!(similarity("abc", "xyz"), 0.0);
/// assert_eq!(similarity("", "Lod"), 0.0);
/// ```
pub fn similarity(a: &str, b: &str) -> f64 {
    let a = a.to_lowercase();
    let b = b.to_lowercase();

    let counts_a = char_counts(&a);
    let counts_b = char_counts(&b);

    let common: usize = counts_a
        .iter()
        .map(|(c, &n)| counts_b.get(c).map_or(0, |&m| n.min(m)))
        .sum();

    if common == 0 {
        return 0.0;
    }

    let total = a.chars().count() + b.chars().count();
    2.0 * common as f64 / total as f64
}

fn char_counts(s: &str) -> HashMap<char, usize> {
    let mut counts = HashMap::new();
    for c in s.chars() {
        *counts.entry(c).or_insert(0) += 1;
    }
    counts
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identical_strings_score_one() {
        assert_eq!(similarity("Haifa Hof HaCarmel", "Haifa Hof HaCarmel"), 1.0);
    }

    #[test]
    fn case_is_ignored() {
        assert_eq!(similarity("HAIFA", "haifa"), 1.0);
    }

    #[test]
    fn anagrams_score_one() {
        assert_eq!(similarity("abba", "baba"), 1.0);
        assert_eq!(similarity("listen", "silent"), 1.0);
    }

    #[test]
    fn disjoint_strings_score_zero() {
        assert_eq!(similarity("abc", "xyz"), 0.0);
    }

    #[test]
    fn empty_strings_score_zero() {
        assert_eq!(similarity("", ""), 0.0);
        assert_eq!(similarity("", "Lod"), 0.0);
        assert_eq!(similarity("Lod", ""), 0.0);
    }

    #[test]
    fn counts_repeated_characters_once_per_occurrence() {
        // "aab" vs "abb": common = min(2,1) + min(1,2) = 2
        assert_eq!(similarity("aab", "abb"), 4.0 / 6.0);
    }

    #[test]
    fn one_dropped_character() {
        // 17 shared characters out of 18 + 17
        let score = similarity("Haifa Hof HaCarml", "Haifa Hof HaCarmel");
        assert!((score - 34.0 / 35.0).abs() < 1e-12);
    }

    #[test]
    fn counts_characters_not_bytes() {
        assert_eq!(similarity("חיפה", "חיפה"), 1.0);
        // 3 of 4 Hebrew letters shared
        assert_eq!(similarity("חיפה", "חיפ"), 6.0 / 7.0);
    }
}

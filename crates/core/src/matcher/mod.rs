//! Fuzzy title matching.
//!
//! Used by the legacy lookup path: when a record carries no IMDb id,
//! the title scraped from IMDb is scored against every catalog title
//! and the best match above a threshold wins.

use strsim::levenshtein;

/// Minimum similarity a fuzzy title match must strictly exceed.
pub const MATCH_THRESHOLD: f64 = 0.5;

/// Normalized Levenshtein similarity between two strings, in [0, 1].
///
/// Case-insensitive: the edit distance is computed over the lowercased
/// strings. Two empty strings count as identical.
pub fn similarity(a: &str, b: &str) -> f64 {
    let max_len = a.chars().count().max(b.chars().count());
    if max_len == 0 {
        return 1.0;
    }

    let distance = levenshtein(&a.to_lowercase(), &b.to_lowercase());
    let score = (max_len as f64 - distance as f64) / max_len as f64;
    score.clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_similarity_identical() {
        assert_eq!(similarity("Anniyan", "Anniyan"), 1.0);
    }

    #[test]
    fn test_similarity_both_empty() {
        assert_eq!(similarity("", ""), 1.0);
    }

    #[test]
    fn test_similarity_one_empty() {
        assert_eq!(similarity("abc", ""), 0.0);
    }

    #[test]
    fn test_similarity_symmetric() {
        let pairs = [
            ("kitten", "sitting"),
            ("Anniyan", "Aparichit"),
            ("", "x"),
            ("same", "same"),
        ];
        for (a, b) in pairs {
            assert_eq!(similarity(a, b), similarity(b, a));
        }
    }

    #[test]
    fn test_similarity_case_insensitive() {
        assert_eq!(similarity("ANNIYAN", "anniyan"), 1.0);
    }

    #[test]
    fn test_similarity_known_distance() {
        // levenshtein("kitten", "sitting") == 3, max_len == 7
        let expected = (7.0 - 3.0) / 7.0;
        assert!((similarity("kitten", "sitting") - expected).abs() < 1e-9);
    }

    #[test]
    fn test_similarity_bounded() {
        for (a, b) in [("a", "zzzzzzzzzz"), ("xy", "ab"), ("longer one", "s")] {
            let s = similarity(a, b);
            assert!((0.0..=1.0).contains(&s), "{} out of bounds", s);
        }
    }

    #[test]
    fn test_levenshtein_zero_iff_equal_normalized() {
        assert_eq!(levenshtein("movie", "movie"), 0);
        assert_ne!(levenshtein("movie", "movies"), 0);
        // Case difference disappears after normalization.
        assert_eq!(similarity("Movie", "mOVIE"), 1.0);
    }

    #[test]
    fn test_levenshtein_triangle_inequality() {
        let triples = [
            ("kitten", "sitting", "mitten"),
            ("anniyan", "aparichit", "anniyan 2005"),
            ("", "abc", "abcdef"),
        ];
        for (a, b, c) in triples {
            let ab = levenshtein(a, b);
            let bc = levenshtein(b, c);
            let ac = levenshtein(a, c);
            assert!(ac <= ab + bc, "d({a},{c}) > d({a},{b}) + d({b},{c})");
        }
    }
}

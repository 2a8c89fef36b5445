//! Edit-distance similarity used by the spelling grader.

/// Levenshtein distance between two strings (unit-cost insertions,
/// deletions and substitutions), computed over chars.
pub fn levenshtein_distance(a: &str, b: &str) -> usize {
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();

    let m = a_chars.len();
    let n = b_chars.len();

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
            let cost = if a_chars[i - 1] == b_chars[j - 1] { 0 } else { 1 };

            curr[j] = (prev[j] + 1) // deletion
                .min(curr[j - 1] + 1) // insertion
                .min(prev[j - 1] + cost); // substitution
        }

        std::mem::swap(&mut prev, &mut curr);
    }

    prev[n]
}

/// Normalized similarity score in `[0, 1]`.
///
/// Case-insensitive. Identical strings (including both empty) score 1;
/// an empty string against a non-empty one scores 0; anything else is
/// `1 - distance / max(len)`.
pub fn similarity(a: &str, b: &str) -> f64 {
    let a = a.to_lowercase();
    let b = b.to_lowercase();

    if a == b {
        return 1.0;
    }
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }

    let max_len = a.chars().count().max(b.chars().count());
    let distance = levenshtein_distance(&a, &b);
    1.0 - (distance as f64 / max_len as f64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distance_basics() {
        assert_eq!(levenshtein_distance("", ""), 0);
        assert_eq!(levenshtein_distance("abc", "abc"), 0);
        assert_eq!(levenshtein_distance("abc", ""), 3);
        assert_eq!(levenshtein_distance("", "abc"), 3);
        assert_eq!(levenshtein_distance("kitten", "sitting"), 3);
        assert_eq!(levenshtein_distance("saturday", "sunday"), 3);
    }

    #[test]
    fn identical_strings_score_one() {
        assert_eq!(similarity("elephant", "elephant"), 1.0);
        assert_eq!(similarity("", ""), 1.0);
        assert_eq!(similarity("Hello", "hello"), 1.0);
    }

    #[test]
    fn empty_against_non_empty_scores_zero() {
        assert_eq!(similarity("", "elephant"), 0.0);
        assert_eq!(similarity("elephant", ""), 0.0);
    }

    #[test]
    fn score_is_symmetric() {
        let pairs = [("elefant", "elephant"), ("banana", "elephant"), ("a", "ab")];
        for (a, b) in pairs {
            assert_eq!(similarity(a, b), similarity(b, a));
        }
    }

    #[test]
    fn score_stays_in_unit_interval() {
        let pairs = [
            ("kitten", "sitting"),
            ("xyz", "abc"),
            ("short", "a much longer string entirely"),
        ];
        for (a, b) in pairs {
            let s = similarity(a, b);
            assert!((0.0..=1.0).contains(&s), "similarity({a}, {b}) = {s}");
        }
    }

    #[test]
    fn near_miss_scores_high() {
        // one deletion on an 8-letter word
        assert!(similarity("elefant", "elephant") > 0.7);
        assert!(similarity("banana", "elephant") < 0.5);
    }
}

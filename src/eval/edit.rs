//! Character-level edit distance and the normalized proxy score.

/// Levenshtein distance between two strings, counted in characters.
pub fn edit_distance(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    if a.is_empty() {
        return b.len();
    }
    if b.is_empty() {
        return a.len();
    }

    // Two-row DP over the shorter string.
    let (a, b) = if a.len() < b.len() { (a, b) } else { (b, a) };
    let mut prev: Vec<usize> = (0..=a.len()).collect();
    let mut curr = vec![0usize; a.len() + 1];

    for (j, bc) in b.iter().enumerate() {
        curr[0] = j + 1;
        for (i, ac) in a.iter().enumerate() {
            let substitution = prev[i] + usize::from(ac != bc);
            curr[i + 1] = substitution.min(prev[i + 1] + 1).min(curr[i] + 1);
        }
        std::mem::swap(&mut prev, &mut curr);
    }
    prev[a.len()]
}

/// Edit distance divided by the longer string's length, in [0, 1].
///
/// Two empty strings are identical, so their distance is 0.0.
pub fn normalized_edit_distance(a: &str, b: &str) -> f64 {
    let longest = a.chars().count().max(b.chars().count());
    if longest == 0 {
        return 0.0;
    }
    edit_distance(a, b) as f64 / longest as f64
}

/// `1 - normalized_edit_distance`: a cheap similarity proxy over raw
/// sequences, used during validation steps instead of the full structural
/// metric.
pub fn approximate_edit_score(a: &str, b: &str) -> f64 {
    1.0 - normalized_edit_distance(a, b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edit_distance_basic() {
        assert_eq!(edit_distance("kitten", "sitting"), 3);
        assert_eq!(edit_distance("", "abc"), 3);
        assert_eq!(edit_distance("abc", ""), 3);
        assert_eq!(edit_distance("same", "same"), 0);
    }

    #[test]
    fn test_edit_distance_counts_chars_not_bytes() {
        assert_eq!(edit_distance("Café", "Cafe"), 1);
        assert_eq!(edit_distance("縁側", "縁"), 1);
    }

    #[test]
    fn test_approximate_edit_score_identical() {
        assert_eq!(approximate_edit_score("100.00", "100.00"), 1.0);
    }

    #[test]
    fn test_approximate_edit_score_one_deletion() {
        // 1 - 1/6
        let score = approximate_edit_score("100.00", "100.0");
        assert!((score - (1.0 - 1.0 / 6.0)).abs() < 1e-12);
    }

    #[test]
    fn test_normalized_edit_distance_bounds() {
        assert_eq!(normalized_edit_distance("", ""), 0.0);
        assert_eq!(normalized_edit_distance("abc", "xyz"), 1.0);
        let d = normalized_edit_distance("<s_total>12.50</s_total>", "<s_total>13.00</s_total>");
        assert!(d > 0.0 && d < 1.0);
    }
}

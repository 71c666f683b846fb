use fxhash::FxHashMap;

use crate::error::MetricError;
use crate::score::percent;

/// Cosine similarity between the term-frequency vectors of two sequences.
///
/// The vocabulary is the union of unique tokens across both inputs; each
/// sequence becomes a frequency vector over that vocabulary and the score is
/// `dot / (‖v1‖·‖v2‖) * 100`, rounded to two decimals.
///
/// Empty input is a precondition violation and fails with
/// [`MetricError::EmptyInput`] — callers are expected to gate on normalized
/// content first. A zero-magnitude vector (unreachable with non-empty token
/// sequences, kept as a guard) yields `0.0` instead of dividing by zero.
pub fn cosine(tokens1: &[String], tokens2: &[String]) -> Result<f64, MetricError> {
    if tokens1.is_empty() || tokens2.is_empty() {
        return Err(MetricError::EmptyInput);
    }

    // One map over the union vocabulary; each entry holds the frequency of
    // the token in either sequence.
    let mut frequencies: FxHashMap<&str, (u64, u64)> = FxHashMap::default();
    for token in tokens1 {
        frequencies.entry(token.as_str()).or_default().0 += 1;
    }
    for token in tokens2 {
        frequencies.entry(token.as_str()).or_default().1 += 1;
    }

    let mut dot = 0.0f64;
    let mut norm1 = 0.0f64;
    let mut norm2 = 0.0f64;
    for &(count1, count2) in frequencies.values() {
        let (x, y) = (count1 as f64, count2 as f64);
        dot += x * y;
        norm1 += x * x;
        norm2 += y * y;
    }

    if norm1 == 0.0 || norm2 == 0.0 {
        return Ok(0.0);
    }

    Ok(percent(dot / (norm1.sqrt() * norm2.sqrt())))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn toks(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn self_similarity_is_full() {
        let a = toks(&["one", "two", "two", "three"]);
        assert_eq!(cosine(&a, &a).unwrap(), 100.0);
    }

    #[test]
    fn symmetric() {
        let a = toks(&["rust", "memory", "safety"]);
        let b = toks(&["rust", "thread", "safety", "safety"]);
        assert_eq!(cosine(&a, &b).unwrap(), cosine(&b, &a).unwrap());
    }

    #[test]
    fn empty_input_is_rejected() {
        let a = toks(&["token"]);
        assert_eq!(cosine(&a, &[]), Err(MetricError::EmptyInput));
        assert_eq!(cosine(&[], &a), Err(MetricError::EmptyInput));
        assert_eq!(cosine(&[], &[]), Err(MetricError::EmptyInput));
    }

    #[test]
    fn disjoint_vocabulary_scores_zero() {
        let a = toks(&["alpha", "beta"]);
        let b = toks(&["gamma", "delta"]);
        assert_eq!(cosine(&a, &b).unwrap(), 0.0);
    }

    #[test]
    fn frequency_matters() {
        // Same unique tokens, different frequencies: score stays below 100
        // but well above the disjoint case.
        let a = toks(&["a", "a", "a", "b"]);
        let b = toks(&["a", "b", "b", "b"]);
        let score = cosine(&a, &b).unwrap();
        assert!(score > 0.0 && score < 100.0, "got {score}");
        // dot = 3*1 + 1*3 = 6, norms = sqrt(10) each -> 0.6
        assert_eq!(score, 60.0);
    }

    #[test]
    fn score_is_rounded_to_two_decimals() {
        // dot = 1, norms = sqrt(2)*sqrt(2) = 2 -> 50.0; pick a case with a
        // repeating expansion instead: ["a","b"] vs ["a","c","d"]
        // dot = 1, norm1 = sqrt(2), norm2 = sqrt(3) -> 40.8248...
        let a = toks(&["a", "b"]);
        let b = toks(&["a", "c", "d"]);
        assert_eq!(cosine(&a, &b).unwrap(), 40.82);
    }
}

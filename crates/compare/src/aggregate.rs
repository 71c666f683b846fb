//! The fixed aggregation formula.
//!
//! `word_likeness` and `jaccard` are both token-overlap measures, so they
//! are first averaged into a single lexical-overlap term; that term is then
//! combined evenly with the two embedding scores and the vector-space score
//! in a four-way mean:
//!
//! ```text
//! round(((word_likeness + jaccard) / 2 + token_closeness + raw_text_closeness + cosine) / 4, 2)
//! ```
//!
//! The weighting is a compatibility contract, not a tuned optimum: scores
//! must stay bit-for-bit stable across releases, so the formula is
//! hardcoded rather than configurable.
//!
//! When the embedding terms are unavailable (degraded mode) the remaining
//! lexical terms are averaged instead:
//!
//! ```text
//! round(((word_likeness + jaccard) / 2 + cosine) / 2, 2)
//! ```

use metrics::round2;

use crate::types::MetricScores;

/// Combine the per-metric scores into one aggregate percentage.
///
/// The caller guarantees the scores came from non-empty token sequences;
/// this function is pure arithmetic over the record.
pub fn aggregate(scores: &MetricScores) -> f64 {
    let lexical_overlap = (scores.word_likeness + scores.jaccard) / 2.0;
    match (scores.token_closeness, scores.raw_text_closeness) {
        (Some(token_closeness), Some(raw_text_closeness)) => round2(
            (lexical_overlap + token_closeness + raw_text_closeness + scores.cosine) / 4.0,
        ),
        _ => round2((lexical_overlap + scores.cosine) / 2.0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full(word_likeness: f64, jaccard: f64, token: f64, raw: f64, cosine: f64) -> MetricScores {
        MetricScores {
            word_likeness,
            jaccard,
            cosine,
            token_closeness: Some(token),
            raw_text_closeness: Some(raw),
        }
    }

    #[test]
    fn worked_example() {
        // ((80 + 60)/2 + 90 + 70 + 50) / 4 = (70 + 210) / 4 = 70.0
        let scores = full(80.0, 60.0, 90.0, 70.0, 50.0);
        assert_eq!(aggregate(&scores), 70.0);
    }

    #[test]
    fn all_maxed_scores_aggregate_to_full() {
        let scores = full(100.0, 100.0, 100.0, 100.0, 100.0);
        assert_eq!(aggregate(&scores), 100.0);
    }

    #[test]
    fn all_zero_scores_aggregate_to_zero() {
        let scores = full(0.0, 0.0, 0.0, 0.0, 0.0);
        assert_eq!(aggregate(&scores), 0.0);
    }

    #[test]
    fn result_is_rounded_to_two_decimals() {
        // (33.335 + 10 + 10 + 10) / 4 has a long decimal expansion.
        let scores = full(33.33, 33.34, 10.0, 10.0, 10.0);
        let value = aggregate(&scores);
        assert_eq!(value, round2(value));
    }

    #[test]
    fn degraded_mode_averages_lexical_terms() {
        let scores = MetricScores {
            word_likeness: 80.0,
            jaccard: 60.0,
            cosine: 50.0,
            token_closeness: None,
            raw_text_closeness: None,
        };
        // ((80 + 60)/2 + 50) / 2 = 60.0
        assert_eq!(aggregate(&scores), 60.0);
    }

    #[test]
    fn overlap_pair_is_halved_before_the_mean() {
        // Moving weight between word_likeness and jaccard must not change
        // the aggregate: they share one slot.
        let a = full(100.0, 0.0, 40.0, 40.0, 40.0);
        let b = full(0.0, 100.0, 40.0, 40.0, 40.0);
        assert_eq!(aggregate(&a), aggregate(&b));
    }
}

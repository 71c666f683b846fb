use fxhash::FxHashSet;

use crate::score::percent;

/// Jaccard similarity between the unique-token sets of two sequences.
///
/// Order and repetition are ignored; the score is
/// `|intersection| / |union| * 100`, rounded to two decimals. When both
/// inputs are empty the union is empty and the score is defined as `0.0`
/// rather than an error.
pub fn jaccard(tokens1: &[String], tokens2: &[String]) -> f64 {
    let set1: FxHashSet<&str> = tokens1.iter().map(String::as_str).collect();
    let set2: FxHashSet<&str> = tokens2.iter().map(String::as_str).collect();

    let union = set1.union(&set2).count();
    if union == 0 {
        return 0.0;
    }
    let intersection = set1.intersection(&set2).count();

    percent(intersection as f64 / union as f64)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn toks(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn identical_sequences_score_full() {
        let a = toks(&["the", "quick", "brown", "fox"]);
        assert_eq!(jaccard(&a, &a), 100.0);
    }

    #[test]
    fn symmetric() {
        let a = toks(&["rust", "borrow", "checker"]);
        let b = toks(&["rust", "garbage", "collector"]);
        assert_eq!(jaccard(&a, &b), jaccard(&b, &a));
    }

    #[test]
    fn repetition_does_not_change_the_set() {
        let a = toks(&["word", "word", "word"]);
        let b = toks(&["word"]);
        assert_eq!(jaccard(&a, &b), 100.0);
    }

    #[test]
    fn partial_overlap() {
        // intersection {b, c} = 2, union {a, b, c, d} = 4
        let a = toks(&["a", "b", "c"]);
        let b = toks(&["b", "c", "d"]);
        assert_eq!(jaccard(&a, &b), 50.0);
    }

    #[test]
    fn disjoint_sequences_score_zero() {
        let a = toks(&["alpha"]);
        let b = toks(&["omega"]);
        assert_eq!(jaccard(&a, &b), 0.0);
    }

    #[test]
    fn both_empty_is_defined_zero() {
        assert_eq!(jaccard(&[], &[]), 0.0);
    }

    #[test]
    fn one_empty_scores_zero() {
        let a = toks(&["something"]);
        assert_eq!(jaccard(&a, &[]), 0.0);
        assert_eq!(jaccard(&[], &a), 0.0);
    }

    #[test]
    fn rounding_to_two_decimals() {
        // intersection 1, union 3 -> 33.333... -> 33.33
        let a = toks(&["x", "y"]);
        let b = toks(&["y", "z"]);
        assert_eq!(jaccard(&a, &b), 33.33);
    }
}

//! Order-sensitive sequence alignment.
//!
//! Implements the classic matching-block ratio: repeatedly find the longest
//! contiguous block common to both sequences, recurse into the regions left
//! and right of it, and score `2 * M / T` where `M` is the summed length of
//! all matched blocks and `T` the combined input length. This is alignment,
//! not edit distance — permuting one input changes the score.
//!
//! The functions are generic over the element type so the same machinery
//! serves token sequences and raw-text lines.

use std::hash::Hash;

use fxhash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::score::percent;

/// A maximal run of elements common to both sequences.
///
/// `a` and `b` are the start offsets in the first and second sequence,
/// `len` the number of matching elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchingBlock {
    pub a: usize,
    pub b: usize,
    pub len: usize,
}

/// Find the longest block of `a[alo..ahi]` matching inside `b[blo..bhi]`.
///
/// Ties resolve to the earliest start in `a`, then the earliest start in
/// `b`, which keeps block selection deterministic.
fn longest_match<T: Eq + Hash>(
    a: &[T],
    b2j: &FxHashMap<&T, Vec<usize>>,
    alo: usize,
    ahi: usize,
    blo: usize,
    bhi: usize,
) -> MatchingBlock {
    let mut best = MatchingBlock {
        a: alo,
        b: blo,
        len: 0,
    };
    // j2len[j] = length of the longest match ending at a[i-1], b[j].
    let mut j2len: FxHashMap<usize, usize> = FxHashMap::default();

    for i in alo..ahi {
        let mut next: FxHashMap<usize, usize> = FxHashMap::default();
        if let Some(positions) = b2j.get(&a[i]) {
            // Positions were collected by scanning `b` front to back, so
            // they are already ascending.
            for &j in positions {
                if j < blo {
                    continue;
                }
                if j >= bhi {
                    break;
                }
                let run = if j > blo {
                    j2len.get(&(j - 1)).copied().unwrap_or(0) + 1
                } else {
                    1
                };
                next.insert(j, run);
                if run > best.len {
                    best = MatchingBlock {
                        a: i + 1 - run,
                        b: j + 1 - run,
                        len: run,
                    };
                }
            }
        }
        j2len = next;
    }

    best
}

/// All matching blocks between two sequences, sorted by position.
///
/// Blocks are selected longest-first: the longest common block splits both
/// sequences, and the regions before and after it are searched recursively.
/// Blocks never overlap.
pub fn matching_blocks<T: Eq + Hash>(a: &[T], b: &[T]) -> Vec<MatchingBlock> {
    let mut b2j: FxHashMap<&T, Vec<usize>> = FxHashMap::default();
    for (j, element) in b.iter().enumerate() {
        b2j.entry(element).or_default().push(j);
    }

    let mut blocks = Vec::new();
    let mut pending = vec![(0usize, a.len(), 0usize, b.len())];
    while let Some((alo, ahi, blo, bhi)) = pending.pop() {
        let found = longest_match(a, &b2j, alo, ahi, blo, bhi);
        if found.len == 0 {
            continue;
        }
        if alo < found.a && blo < found.b {
            pending.push((alo, found.a, blo, found.b));
        }
        if found.a + found.len < ahi && found.b + found.len < bhi {
            pending.push((found.a + found.len, ahi, found.b + found.len, bhi));
        }
        blocks.push(found);
    }

    blocks.sort_by_key(|block| (block.a, block.b));
    blocks
}

/// Alignment ratio in `[0, 1]`.
///
/// Two empty sequences are degenerately equal and score `1.0`; one empty
/// side scores `0.0`. Both are defined results, not errors.
pub fn sequence_ratio<T: Eq + Hash>(a: &[T], b: &[T]) -> f64 {
    let total = a.len() + b.len();
    if total == 0 {
        return 1.0;
    }
    let matched: usize = matching_blocks(a, b).iter().map(|block| block.len).sum();
    2.0 * matched as f64 / total as f64
}

/// [`sequence_ratio`] scaled to a two-decimal percentage score.
pub fn sequence_similarity<T: Eq + Hash>(a: &[T], b: &[T]) -> f64 {
    percent(sequence_ratio(a, b))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn toks(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn both_empty_is_fully_similar() {
        let empty: Vec<String> = Vec::new();
        assert_eq!(sequence_ratio(&empty, &empty), 1.0);
        assert_eq!(sequence_similarity(&empty, &empty), 100.0);
    }

    #[test]
    fn one_empty_scores_zero() {
        let a = toks(&["x"]);
        let empty: Vec<String> = Vec::new();
        assert_eq!(sequence_ratio(&empty, &a), 0.0);
        assert_eq!(sequence_ratio(&a, &empty), 0.0);
    }

    #[test]
    fn self_similarity_is_one() {
        let a = toks(&["the", "quick", "brown", "fox"]);
        assert_eq!(sequence_ratio(&a, &a), 1.0);
    }

    #[test]
    fn ratio_is_symmetric() {
        let a = toks(&["shared", "prefix", "then", "something", "else"]);
        let b = toks(&["shared", "prefix", "then", "different", "tail", "words"]);
        assert_eq!(sequence_ratio(&a, &b), sequence_ratio(&b, &a));
    }

    #[test]
    fn order_sensitivity() {
        let a = toks(&["one", "two", "three", "four"]);
        let mut shuffled = a.clone();
        shuffled.reverse();
        // Same multiset, different order: alignment must drop.
        assert!(sequence_ratio(&a, &shuffled) < 1.0);
    }

    #[test]
    fn known_partial_ratio() {
        // Matches: "a b" (2) + "d" (1) = 3, T = 8 -> 2*3/8 = 0.75
        let a = toks(&["a", "b", "c", "d"]);
        let b = toks(&["a", "b", "x", "d"]);
        assert_eq!(sequence_ratio(&a, &b), 0.75);
        assert_eq!(sequence_similarity(&a, &b), 75.0);
    }

    #[test]
    fn blocks_are_sorted_and_disjoint() {
        let a = toks(&["a", "b", "z", "c", "d"]);
        let b = toks(&["a", "b", "q", "c", "d"]);
        let blocks = matching_blocks(&a, &b);
        assert_eq!(
            blocks,
            vec![
                MatchingBlock { a: 0, b: 0, len: 2 },
                MatchingBlock { a: 3, b: 3, len: 2 },
            ]
        );
    }

    #[test]
    fn longest_block_wins_over_first_block() {
        // A greedy left-to-right scan would lock onto the single "x";
        // longest-first selection must prefer the 3-long run.
        let a = toks(&["x", "p", "q", "r"]);
        let b = toks(&["p", "q", "r", "x"]);
        let blocks = matching_blocks(&a, &b);
        assert_eq!(blocks, vec![MatchingBlock { a: 1, b: 0, len: 3 }]);
        assert_eq!(sequence_ratio(&a, &b), 0.75);
    }

    #[test]
    fn works_over_lines_too() {
        let a = vec!["fn main() {", "    println!(\"hi\");", "}"];
        let b = vec!["fn main() {", "    println!(\"bye\");", "}"];
        // 2 of 3 lines match -> 2*2/6
        let ratio = sequence_ratio(&a, &b);
        assert!((ratio - 2.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn repeated_elements_align_once() {
        let a = toks(&["w", "w", "w"]);
        let b = toks(&["w"]);
        // One matched element, T = 4 -> 0.5
        assert_eq!(sequence_ratio(&a, &b), 0.5);
    }
}

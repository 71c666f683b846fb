//! txtsim lexical metrics layer.
//!
//! Pure, deterministic similarity measures over token sequences. Each metric
//! takes two sequences and returns a percentage score in `[0, 100]` rounded
//! to two decimals; none of them touches I/O or global state, so results are
//! reproducible on any machine.
//!
//! ## What we provide
//!
//! - [`jaccard`] — set overlap of unique tokens
//! - [`cosine`] — term-frequency vectors compared in vector space
//! - [`sequence_ratio`] / [`sequence_similarity`] — order-sensitive
//!   matching-block alignment over any `Eq + Hash` sequence
//!
//! ## Defined zero-cases vs. errors
//!
//! Two degenerate inputs are *defined*, not errors: `jaccard` of two empty
//! sequences is `0.0`, and `sequence_ratio` of two empty sequences is `1.0`
//! (one empty side yields `0.0`). `cosine` is different: calling it with an
//! empty sequence is a caller contract violation and fails with
//! [`MetricError::EmptyInput`].

mod cosine;
mod error;
mod jaccard;
mod score;
mod sequence;

pub use crate::cosine::cosine;
pub use crate::error::MetricError;
pub use crate::jaccard::jaccard;
pub use crate::score::round2;
pub use crate::sequence::{matching_blocks, sequence_ratio, sequence_similarity, MatchingBlock};

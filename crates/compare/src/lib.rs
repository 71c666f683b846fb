//! # txtsim comparison engine (`compare`)
//!
//! ## Purpose
//!
//! `compare` sits on top of the stage crates (`normalize`, `metrics`,
//! `semantic`) and turns two documents into one aggregate similarity
//! percentage. It owns the orchestration concerns: resolving per-stage
//! configuration, enforcing the non-empty-content precondition, fanning the
//! independent metrics out (optionally in parallel), applying the embedding
//! availability policy, and combining everything with the fixed aggregation
//! weights.
//!
//! ## Core types
//!
//! - [`Comparator`]: reusable engine holding the normalizer and embedding
//!   backend; build once, compare many pairs.
//! - [`CompareConfig`]: engine knobs — embedding policy, parallelism, the
//!   optional raw-line alignment score.
//! - [`MetricScores`]: typed record of the five named per-metric scores.
//! - [`ComparisonReport`]: aggregate score plus the full breakdown.
//! - [`EmbeddingPolicy`]: what happens when the embedding backend cannot be
//!   loaded — `Abort` (default) fails the comparison, `Degrade` drops the
//!   two embedding terms and averages the remaining lexical metrics.
//!
//! ## Example
//!
//! ```
//! use compare::{Comparator, CompareConfig};
//! use normalize::{Document, NormalizeConfig};
//! use semantic::SemanticConfig;
//!
//! let comparator = Comparator::new(
//!     &NormalizeConfig::default(),
//!     &SemanticConfig::default(),
//!     CompareConfig::default(),
//! )
//! .expect("default configs are valid");
//!
//! let left = Document::from_text("The quick brown fox jumps over the lazy dog.");
//! let right = Document::from_text("A quick brown fox jumped over a lazy dog.");
//! let report = comparator.compare(&left, &right).expect("both documents have content");
//!
//! assert!(report.aggregate > 0.0 && report.aggregate <= 100.0);
//! println!("similarity: {:.2}% {:?}", report.aggregate, report.scores);
//! ```
//!
//! ## Observability
//!
//! The engine never prints. It emits `tracing` debug events per stage, and a
//! [`CompareMetrics`] recorder installed via [`set_compare_metrics`] observes
//! per-comparison latency and outcome — typically wired once at startup.

pub mod aggregate;
pub mod engine;
pub mod observe;
pub mod types;

pub use crate::aggregate::aggregate;
pub use crate::engine::Comparator;
pub use crate::observe::{set_compare_metrics, CompareMetrics};
pub use crate::types::{
    CompareConfig, CompareError, ComparisonReport, EmbeddingPolicy, MetricScores,
};

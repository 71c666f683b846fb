use metrics::MetricError;
use normalize::NormalizeError;
use semantic::SemanticError;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// What to do when the embedding backend cannot be loaded.
///
/// `Abort`, the default, fails the whole comparison with the backend error
/// and returns no partial score. `Degrade` instead runs
/// the lexical metrics only; the report marks the embedding terms as
/// unavailable and the aggregate uses the degraded weighting (see
/// [`aggregate`](crate::aggregate::aggregate)).
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum EmbeddingPolicy {
    #[default]
    Abort,
    Degrade,
}

/// Engine configuration for a [`Comparator`](crate::Comparator).
///
/// Cheap to clone and serde-friendly so it can be embedded in a larger
/// configuration file.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CompareConfig {
    /// Configuration schema version. Must be >= 1.
    pub version: u32,
    /// Behavior when the embedding backend is unavailable.
    #[serde(default)]
    pub embedding_policy: EmbeddingPolicy,
    /// Evaluate independent metrics concurrently. Results are identical
    /// either way; this only trades wall-clock for threads.
    #[serde(default)]
    pub use_parallel: bool,
    /// Also compute the sequence-alignment score over raw text lines and
    /// report it alongside the aggregate (it does not participate in the
    /// aggregate formula).
    #[serde(default = "CompareConfig::default_include_line_ratio")]
    pub include_line_ratio: bool,
}

impl CompareConfig {
    pub(crate) fn default_include_line_ratio() -> bool {
        true
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), CompareError> {
        if self.version == 0 {
            return Err(CompareError::InvalidConfig(
                "config version must be >= 1".into(),
            ));
        }
        Ok(())
    }
}

impl Default for CompareConfig {
    fn default() -> Self {
        Self {
            version: 1,
            embedding_policy: EmbeddingPolicy::default(),
            use_parallel: false,
            include_line_ratio: Self::default_include_line_ratio(),
        }
    }
}

/// The five named per-metric scores feeding the aggregate.
///
/// All values are percentages in `[0, 100]`. The two embedding-based terms
/// are `None` only under [`EmbeddingPolicy::Degrade`] when the backend was
/// unavailable.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct MetricScores {
    /// Sequence-alignment score over the normalized token sequences.
    pub word_likeness: f64,
    /// Set-overlap score over unique normalized tokens.
    pub jaccard: f64,
    /// Term-frequency cosine score over normalized tokens.
    pub cosine: f64,
    /// Embedding similarity over the normalized token text.
    pub token_closeness: Option<f64>,
    /// Embedding similarity over the raw document text.
    pub raw_text_closeness: Option<f64>,
}

impl MetricScores {
    /// Whether both embedding-based terms are present.
    pub fn embedding_available(&self) -> bool {
        self.token_closeness.is_some() && self.raw_text_closeness.is_some()
    }
}

/// Everything a caller learns from one comparison.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ComparisonReport {
    /// The aggregate similarity percentage, rounded to two decimals.
    pub aggregate: f64,
    /// Per-metric breakdown for display and debugging.
    pub scores: MetricScores,
    /// Sequence-alignment score over raw text lines, when configured.
    pub line_likeness: Option<f64>,
    /// True when the embedding backend was unavailable and the aggregate
    /// used the degraded weighting.
    pub embedding_degraded: bool,
}

/// Errors produced by the comparison engine.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CompareError {
    /// Invalid engine configuration.
    #[error("invalid compare config: {0}")]
    InvalidConfig(String),
    /// One or both documents normalized to an empty token sequence; an
    /// aggregate over no content would be meaningless, so the comparison
    /// aborts instead of reporting a degenerate score.
    #[error("one or both documents have no comparable tokens after normalization")]
    InsufficientContent,
    /// Normalization stage failed.
    #[error("normalize error: {0}")]
    Normalize(#[from] NormalizeError),
    /// A lexical metric rejected its input.
    #[error("metric error: {0}")]
    Metric(#[from] MetricError),
    /// The semantic stage failed.
    #[error("semantic error: {0}")]
    Semantic(#[from] SemanticError),
}

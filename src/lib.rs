//! Workspace umbrella crate for txtsim.
//!
//! This crate stitches the stage crates together so callers can go from two
//! files on disk to one aggregate similarity percentage with a single API
//! entry point. The stages themselves live in their own crates:
//!
//! - `normalize` — raw text → filtered, lemmatized token sequence
//! - `metrics` — Jaccard, term-frequency cosine, sequence alignment
//! - `semantic` — centroid word-vector similarity over pluggable backends
//! - `compare` — orchestration, policy, and the fixed aggregation weights
//!
//! The facade adds the input surface: reading documents from disk with a
//! distinguishable error when the source is missing (never a silently empty
//! string), and the YAML configuration file that wires every stage.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

pub use compare::{
    aggregate, set_compare_metrics, CompareConfig, CompareError, CompareMetrics, Comparator,
    ComparisonReport, EmbeddingPolicy, MetricScores,
};
pub use metrics::{
    cosine, jaccard, matching_blocks, round2, sequence_ratio, sequence_similarity, MatchingBlock,
    MetricError,
};
pub use normalize::{
    normalize, supported_languages, Document, Lemmatizer, NormalizeConfig, NormalizeError,
    Normalizer, SnowballLemmatizer,
};
pub use semantic::{
    embedding_similarity, load_backend, similarity_with, Lexicon, SemanticConfig, SemanticError,
    StubVectors, WordVectors,
};

mod config;

pub use crate::config::{ConfigLoadError, TxtsimConfig};

/// Errors that can occur while driving a comparison end-to-end.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// An input document could not be obtained. The comparison aborts; no
    /// partial score is returned.
    #[error("failed to read {path}: {source}")]
    Source {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// The comparison itself failed.
    #[error(transparent)]
    Compare(#[from] CompareError),
    /// The configuration file could not be loaded.
    #[error(transparent)]
    Config(#[from] ConfigLoadError),
}

/// Read a UTF-8 text file fully into memory as a [`Document`].
///
/// Any read failure — missing file, permissions, invalid UTF-8 — surfaces
/// as [`PipelineError::Source`] naming the offending path.
pub fn read_document(
    path: impl AsRef<Path>,
    language: impl Into<String>,
) -> Result<Document, PipelineError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| PipelineError::Source {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(Document::new(content, language))
}

/// Compare two files on disk under an explicit configuration.
pub fn compare_files(
    left: impl AsRef<Path>,
    right: impl AsRef<Path>,
    cfg: &TxtsimConfig,
) -> Result<ComparisonReport, PipelineError> {
    tracing::debug!(
        left = %left.as_ref().display(),
        right = %right.as_ref().display(),
        "comparing files"
    );
    let comparator = Comparator::new(&cfg.normalize, &cfg.semantic, cfg.compare.clone())?;
    let left = read_document(left, cfg.normalize.language.clone())?;
    let right = read_document(right, cfg.normalize.language.clone())?;
    Ok(comparator.compare(&left, &right)?)
}

/// Compare two files on disk with default configuration.
pub fn compare_files_default(
    left: impl AsRef<Path>,
    right: impl AsRef<Path>,
) -> Result<ComparisonReport, PipelineError> {
    compare_files(left, right, &TxtsimConfig::default())
}

//! txtsim semantic similarity.
//!
//! This crate scores two texts by where they land in embedding space. Each
//! text collapses to a centroid vector — the average of the word vectors of
//! every recognized word — and the score is the cosine between the two
//! centroids, expressed as an integer percentage (truncated, not rounded).
//!
//! The word-vector source is behind the [`WordVectors`] trait. Two backends
//! ship with the crate:
//!
//! - **Lexicon** — word2vec-style text file, loaded once per path and cached
//!   process-wide so repeated comparisons don't pay the load again.
//! - **Stub** — deterministic hash-derived vectors. No assets, no I/O;
//!   meant for tests and for running without a model download.
//!
//! A lexicon that cannot be read (or parsed) surfaces as
//! [`SemanticError::ModelUnavailable`]; whether the caller aborts or
//! degrades to lexical metrics only is decided above this crate.

mod backend;
mod config;
mod error;
mod lexicon;
mod stub;

pub use crate::backend::{cosine_between, vectorize, WordVectors};
pub use crate::config::SemanticConfig;
pub use crate::error::SemanticError;
pub use crate::lexicon::{load_backend, Lexicon};
pub use crate::stub::StubVectors;

/// Score two texts against a loaded backend.
///
/// Out-of-vocabulary words contribute nothing to a centroid; a text with no
/// recognized words collapses to the zero vector and scores `0.0` against
/// anything. The result is an integer percentage in `[0, 100]` carried as
/// `f64`, truncated from the raw cosine (negative cosines clamp to zero —
/// scores are percentages, not correlations).
pub fn similarity_with(backend: &dyn WordVectors, text1: &str, text2: &str) -> f64 {
    let centroid1 = vectorize(text1, backend);
    let centroid2 = vectorize(text2, backend);
    let sim = cosine_between(&centroid1, &centroid2).max(0.0);
    // A cosine one ulp under 1.0 must still truncate to 100.
    (sim * 100.0 + 1e-6).trunc().min(100.0)
}

/// Resolve the backend for `cfg` and score two texts.
///
/// Fails with [`SemanticError::ModelUnavailable`] when the configured
/// backend cannot be loaded; the comparison itself cannot fail.
pub fn embedding_similarity(
    text1: &str,
    text2: &str,
    cfg: &SemanticConfig,
) -> Result<f64, SemanticError> {
    let backend = load_backend(cfg)?;
    Ok(similarity_with(backend.as_ref(), text1, text2))
}

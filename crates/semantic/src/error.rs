use thiserror::Error;

/// Errors surfaced by the semantic similarity layer.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SemanticError {
    /// Configuration is inconsistent (unknown backend, missing path, ...).
    #[error("invalid semantic config: {0}")]
    InvalidConfig(String),
    /// The embedding backend could not be loaded or parsed.
    #[error("embedding backend unavailable: {0}")]
    ModelUnavailable(String),
}

use thiserror::Error;

/// Errors that can occur while normalizing text.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum NormalizeError {
    #[error("invalid normalize configuration: {0}")]
    InvalidConfig(String),
    #[error("no stopword or base-form resources for language {0:?}")]
    UnsupportedLanguage(String),
}

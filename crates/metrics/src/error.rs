use thiserror::Error;

/// Errors that can occur while computing a lexical metric.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MetricError {
    #[error("token sequences must not be empty")]
    EmptyInput,
}

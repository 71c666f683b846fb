use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::SemanticError;

/// Runtime configuration describing which embedding backend to use.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SemanticConfig {
    /// Backend selector: `"stub"` (deterministic hash vectors, no assets)
    /// or `"lexicon"` (word2vec-style text file at [`lexicon_path`](Self::lexicon_path)).
    pub backend: String,

    /// Vector dimensionality for the stub backend. A lexicon carries its
    /// own dimensionality and ignores this field.
    pub dimension: usize,

    /// Path to the word-vector file; required when `backend` is `"lexicon"`.
    pub lexicon_path: Option<PathBuf>,
}

impl Default for SemanticConfig {
    fn default() -> Self {
        Self {
            backend: "stub".into(),
            dimension: 300,
            lexicon_path: None,
        }
    }
}

impl SemanticConfig {
    pub fn validate(&self) -> Result<(), SemanticError> {
        match self.backend.as_str() {
            "stub" => {
                if self.dimension == 0 {
                    return Err(SemanticError::InvalidConfig(
                        "dimension must be >= 1".into(),
                    ));
                }
            }
            "lexicon" => {
                if self.lexicon_path.is_none() {
                    return Err(SemanticError::InvalidConfig(
                        "lexicon backend requires lexicon_path".into(),
                    ));
                }
            }
            other => {
                return Err(SemanticError::InvalidConfig(format!(
                    "unknown backend {other:?}, expected \"stub\" or \"lexicon\""
                )));
            }
        }
        Ok(())
    }
}

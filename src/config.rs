//! YAML configuration file support.
//!
//! All stage configurations live in one file and load at startup. Missing
//! sections fall back to their defaults, so the minimal useful config is
//! just a version line.
//!
//! ```yaml
//! version: "1.0"
//! name: "coursework scan"
//!
//! normalize:
//!   version: 1
//!   language: "english"
//!   normalize_unicode: true
//!
//! semantic:
//!   backend: "lexicon"
//!   dimension: 300
//!   lexicon_path: "./models/glove.6B.300d.txt"
//!
//! compare:
//!   version: 1
//!   embedding_policy: "abort"
//!   use_parallel: false
//!   include_line_ratio: true
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use compare::CompareConfig;
use normalize::NormalizeConfig;
use semantic::SemanticConfig;

/// Errors that can occur when loading a configuration file.
#[derive(Debug, Error)]
pub enum ConfigLoadError {
    #[error("failed to read config file: {0}")]
    FileRead(#[from] std::io::Error),

    #[error("failed to parse YAML: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    #[error("validation error: {0}")]
    Validation(String),

    #[error("unsupported config version: {0}")]
    UnsupportedVersion(String),
}

/// Top-level configuration for the whole pipeline.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TxtsimConfig {
    /// Configuration format version.
    pub version: String,

    /// Optional configuration name/description.
    #[serde(default)]
    pub name: Option<String>,

    /// Normalization stage configuration.
    #[serde(default)]
    pub normalize: NormalizeConfig,

    /// Embedding backend configuration.
    #[serde(default)]
    pub semantic: SemanticConfig,

    /// Comparison engine configuration.
    #[serde(default)]
    pub compare: CompareConfig,
}

impl TxtsimConfig {
    /// Load a YAML configuration file from the given path.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigLoadError> {
        let content = fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parse YAML configuration from a string.
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigLoadError> {
        let config: TxtsimConfig = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration, including every stage section.
    fn validate(&self) -> Result<(), ConfigLoadError> {
        match self.version.as_str() {
            "1.0" | "1" => {}
            v => return Err(ConfigLoadError::UnsupportedVersion(v.to_string())),
        }

        self.normalize
            .validate()
            .map_err(|err| ConfigLoadError::Validation(err.to_string()))?;
        self.semantic
            .validate()
            .map_err(|err| ConfigLoadError::Validation(err.to_string()))?;
        self.compare
            .validate()
            .map_err(|err| ConfigLoadError::Validation(err.to_string()))?;
        Ok(())
    }
}

impl Default for TxtsimConfig {
    fn default() -> Self {
        Self {
            version: "1.0".to_string(),
            name: None,
            normalize: NormalizeConfig::default(),
            semantic: SemanticConfig::default(),
            compare: CompareConfig::default(),
        }
    }
}

//! Configuration for the normalization pipeline.

use serde::{Deserialize, Serialize};

/// Controls how raw text is reduced to comparable tokens.
///
/// The config is cheap to clone and serde-friendly so it can live inside a
/// larger configuration file. For a given `version`, output is stable across
/// machines, operating systems and locales; any behavior change (including
/// bug fixes that alter output) must bump `version`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NormalizeConfig {
    /// Semantic version of the normalization behavior. Must be >= 1;
    /// version 0 is reserved and rejected.
    pub version: u32,

    /// Language tag used to resolve stopword and base-form resources,
    /// e.g. `"english"` or the ISO code `"en"`. See
    /// [`supported_languages`](crate::supported_languages) for the accepted
    /// set; anything else fails with
    /// [`NormalizeError::UnsupportedLanguage`](crate::NormalizeError::UnsupportedLanguage).
    pub language: String,

    /// If true, apply Unicode NFKC normalization before tokenizing so
    /// composed and decomposed inputs produce identical tokens. Disable
    /// only when inputs are known to be pre-normalized.
    pub normalize_unicode: bool,
}

impl Default for NormalizeConfig {
    fn default() -> Self {
        Self {
            version: 1,
            language: "english".into(),
            normalize_unicode: true,
        }
    }
}

impl NormalizeConfig {
    /// Validate the configuration, including language resolution.
    pub fn validate(&self) -> Result<(), crate::NormalizeError> {
        if self.version == 0 {
            return Err(crate::NormalizeError::InvalidConfig(
                "config version must be >= 1".into(),
            ));
        }
        if self.language.trim().is_empty() {
            return Err(crate::NormalizeError::InvalidConfig(
                "language must not be empty".into(),
            ));
        }
        crate::language::resolve(&self.language)?;
        Ok(())
    }
}

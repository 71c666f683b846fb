use std::borrow::Cow;

use fxhash::FxHashSet;
use unicode_normalization::UnicodeNormalization;
use unicode_segmentation::UnicodeSegmentation;

use crate::config::NormalizeConfig;
use crate::error::NormalizeError;
use crate::language;
use crate::lemma::{Lemmatizer, SnowballLemmatizer};

/// Reusable normalization pipeline for one language.
///
/// Construction resolves the language resources once (stopword set and
/// base-form backend); [`Normalizer::normalize`] is then a pure function of
/// its input and can be called any number of times. Higher layers that
/// compare many document pairs should hold on to one `Normalizer` rather
/// than rebuilding the resources per call.
pub struct Normalizer {
    cfg: NormalizeConfig,
    stopwords: FxHashSet<String>,
    lemmatizer: Box<dyn Lemmatizer>,
}

impl Normalizer {
    /// Build a pipeline with the default Snowball base-form backend.
    pub fn new(cfg: &NormalizeConfig) -> Result<Self, NormalizeError> {
        cfg.validate()?;
        let (_, algorithm) = language::resolve(&cfg.language)?;
        Self::with_lemmatizer(cfg, Box::new(SnowballLemmatizer::new(algorithm)))
    }

    /// Build a pipeline with a custom base-form backend.
    pub fn with_lemmatizer(
        cfg: &NormalizeConfig,
        lemmatizer: Box<dyn Lemmatizer>,
    ) -> Result<Self, NormalizeError> {
        cfg.validate()?;
        let (stopword_language, _) = language::resolve(&cfg.language)?;
        let stopwords: FxHashSet<String> = stop_words::get(stopword_language).into_iter().collect();
        Ok(Self {
            cfg: cfg.clone(),
            stopwords,
            lemmatizer,
        })
    }

    /// The configuration this pipeline was built from.
    pub fn config(&self) -> &NormalizeConfig {
        &self.cfg
    }

    /// Normalize raw text into an ordered token sequence.
    ///
    /// Steps, in order: Unicode NFKC (when configured), UAX #29 word
    /// segmentation, rejection of tokens containing non-alphabetic
    /// characters, lowercasing, stopword removal, base-form reduction. Each
    /// step is total over its input; an empty result is valid.
    pub fn normalize(&self, text: &str) -> Vec<String> {
        let text: Cow<str> = if self.cfg.normalize_unicode {
            Cow::Owned(text.nfkc().collect::<String>())
        } else {
            Cow::Borrowed(text)
        };

        let mut tokens = Vec::new();
        for word in text.unicode_words() {
            if !word.chars().all(char::is_alphabetic) {
                continue;
            }
            let lowered = word.to_lowercase();
            if self.stopwords.contains(&lowered) {
                continue;
            }
            // No known base form keeps the token unchanged.
            let token = self.lemmatizer.lemma(&lowered).unwrap_or(lowered);
            tokens.push(token);
        }
        tokens
    }
}

/// One-shot convenience over [`Normalizer`].
///
/// Builds the pipeline for `cfg` and runs it on `text`. Fails with
/// [`NormalizeError::UnsupportedLanguage`] when no resources exist for the
/// configured language.
pub fn normalize(text: &str, cfg: &NormalizeConfig) -> Result<Vec<String>, NormalizeError> {
    Ok(Normalizer::new(cfg)?.normalize(text))
}

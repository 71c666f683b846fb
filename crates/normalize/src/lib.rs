//! txtsim text normalization layer.
//!
//! This crate turns raw document text into the token representation every
//! downstream metric consumes. Same text and config in, same tokens out —
//! no I/O, no locale dependence, no hidden state.
//!
//! ## What we do
//!
//! - Optional Unicode normalization (NFKC by default, configurable)
//! - Word-boundary tokenization per UAX #29
//! - Filtering of anything that is not purely alphabetic
//! - Lowercasing and language-specific stopword removal
//! - Reduction of each surviving token to a base form
//!
//! ## Invariants worth knowing
//!
//! - Every output token is non-empty, lowercase and alphabetic-only
//! - Token order and repetition are preserved; later stages rely on both
//! - An empty output is a valid result, not an error — it is the *caller's*
//!   decision whether an empty sequence is acceptable
//! - Unknown language tags fail with [`NormalizeError::UnsupportedLanguage`]
//!
//! The base-form step is behind the [`Lemmatizer`] trait so another NLP
//! backend can be substituted; the default is Snowball stemming.

mod config;
mod document;
mod error;
mod language;
mod lemma;
mod pipeline;

pub use crate::config::NormalizeConfig;
pub use crate::document::Document;
pub use crate::error::NormalizeError;
pub use crate::language::supported_languages;
pub use crate::lemma::{Lemmatizer, SnowballLemmatizer};
pub use crate::pipeline::{normalize, Normalizer};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn basic_normalize_default() {
        let cfg = NormalizeConfig::default();
        let tokens = normalize("The quick brown foxes were jumping!", &cfg)
            .expect("english is supported");

        // "the" and "were" are stopwords; the rest survives in order,
        // reduced to base forms.
        assert_eq!(tokens, vec!["quick", "brown", "fox", "jump"]);
    }

    #[test]
    fn numbers_and_mixed_tokens_are_dropped() {
        let cfg = NormalizeConfig::default();
        let tokens = normalize("version 2 of file2 shipped yesterday", &cfg).unwrap();

        assert!(!tokens.iter().any(|t| t.contains('2')));
        assert!(tokens.contains(&"version".to_string()));
        assert!(tokens.contains(&"ship".to_string()));
    }

    #[test]
    fn output_tokens_are_lowercase_alphabetic() {
        let cfg = NormalizeConfig::default();
        let tokens = normalize("Mixed CASE Text, with punctuation; and UTF-8 arrows →", &cfg).unwrap();

        for token in &tokens {
            assert!(
                token.chars().all(|c| c.is_alphabetic() && c.is_lowercase()),
                "token {token:?} violates the lowercase-alphabetic invariant"
            );
        }
    }

    #[test]
    fn repetition_and_order_preserved() {
        let cfg = NormalizeConfig::default();
        let tokens = normalize("wolves wolves sheep wolves", &cfg).unwrap();
        assert_eq!(tokens, vec!["wolv", "wolv", "sheep", "wolv"]);
    }

    #[test]
    fn empty_result_is_not_an_error() {
        let cfg = NormalizeConfig::default();
        let tokens = normalize("42 17 99 --- !!!", &cfg).unwrap();
        assert!(tokens.is_empty());
    }

    #[test]
    fn unknown_language_rejected() {
        let cfg = NormalizeConfig {
            language: "klingon".into(),
            ..Default::default()
        };
        let result = normalize("nuqneH", &cfg);
        assert!(matches!(
            result,
            Err(NormalizeError::UnsupportedLanguage(lang)) if lang == "klingon"
        ));
    }

    #[test]
    fn nfkc_equivalence() {
        let cfg = NormalizeConfig::default();
        let composed = normalize("r\u{00E9}sum\u{00E9} writing", &cfg).unwrap();
        let decomposed = normalize("re\u{0301}sume\u{0301} writing", &cfg).unwrap();
        assert_eq!(composed, decomposed);
    }
}

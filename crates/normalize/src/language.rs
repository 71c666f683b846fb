//! Language tag resolution.
//!
//! A language is supported when both resource providers cover it: the NLTK
//! stopword lists shipped by the `stop-words` crate and the Snowball
//! algorithms shipped by `rust-stemmers`. Tags are matched
//! case-insensitively and accept either the English name or the two-letter
//! ISO code.

use rust_stemmers::Algorithm;
use stop_words::LANGUAGE;

use crate::error::NormalizeError;

/// Languages accepted by [`NormalizeConfig::language`](crate::NormalizeConfig).
pub fn supported_languages() -> &'static [&'static str] {
    &[
        "english",
        "french",
        "german",
        "spanish",
        "italian",
        "portuguese",
        "russian",
    ]
}

pub(crate) fn resolve(tag: &str) -> Result<(LANGUAGE, Algorithm), NormalizeError> {
    match tag.to_lowercase().as_str() {
        "english" | "en" => Ok((LANGUAGE::English, Algorithm::English)),
        "french" | "fr" => Ok((LANGUAGE::French, Algorithm::French)),
        "german" | "de" => Ok((LANGUAGE::German, Algorithm::German)),
        "spanish" | "es" => Ok((LANGUAGE::Spanish, Algorithm::Spanish)),
        "italian" | "it" => Ok((LANGUAGE::Italian, Algorithm::Italian)),
        "portuguese" | "pt" => Ok((LANGUAGE::Portuguese, Algorithm::Portuguese)),
        "russian" | "ru" => Ok((LANGUAGE::Russian, Algorithm::Russian)),
        _ => Err(NormalizeError::UnsupportedLanguage(tag.to_string())),
    }
}

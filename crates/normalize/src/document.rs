use serde::{Deserialize, Serialize};

/// A raw document paired with the language it should be normalized under.
///
/// Plain immutable data: construction stores the text as-is and performs no
/// tokenization or other derived computation. Normalization is an explicit,
/// separate step (see [`normalize`](crate::normalize)).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Document {
    content: String,
    language: String,
}

impl Document {
    /// Create a document with an explicit language tag.
    pub fn new(content: impl Into<String>, language: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            language: language.into(),
        }
    }

    /// Create an English document.
    pub fn from_text(content: impl Into<String>) -> Self {
        Self::new(content, "english")
    }

    /// The raw text content.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// The language tag this document should be normalized under.
    pub fn language(&self) -> &str {
        &self.language
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stores_content_verbatim() {
        let doc = Document::new("  Raw   TEXT, untouched!  ", "english");
        assert_eq!(doc.content(), "  Raw   TEXT, untouched!  ");
        assert_eq!(doc.language(), "english");
    }

    #[test]
    fn from_text_defaults_to_english() {
        let doc = Document::from_text("hello");
        assert_eq!(doc.language(), "english");
    }
}

//! File-backed word vectors.
//!
//! Parses the word2vec text format: one `word v1 v2 … vN` row per line, with
//! an optional `count dimension` header. Loading a lexicon is the only
//! expensive call in this crate, so loaded instances are cached process-wide
//! keyed by path — comparisons after the first reuse the parsed table.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};

use fxhash::FxHashMap;
use once_cell::sync::Lazy;

use crate::backend::WordVectors;
use crate::config::SemanticConfig;
use crate::error::SemanticError;
use crate::stub::StubVectors;

static LOADED: Lazy<RwLock<FxHashMap<PathBuf, Arc<Lexicon>>>> =
    Lazy::new(|| RwLock::new(FxHashMap::default()));

/// An in-memory word-vector table parsed from a word2vec-style text file.
#[derive(Debug)]
pub struct Lexicon {
    vectors: FxHashMap<String, Vec<f32>>,
    dimension: usize,
}

impl Lexicon {
    /// Parse a lexicon file. Any read or format problem is reported as
    /// [`SemanticError::ModelUnavailable`] with the offending path.
    pub fn from_path(path: &Path) -> Result<Self, SemanticError> {
        let content = fs::read_to_string(path).map_err(|err| {
            SemanticError::ModelUnavailable(format!("{}: {err}", path.display()))
        })?;
        Self::from_str_impl(&content)
            .map_err(|msg| SemanticError::ModelUnavailable(format!("{}: {msg}", path.display())))
    }

    fn from_str_impl(content: &str) -> Result<Self, String> {
        let mut vectors: FxHashMap<String, Vec<f32>> = FxHashMap::default();
        let mut dimension: Option<usize> = None;

        for (line_no, line) in content.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            let mut fields = line.split_whitespace();
            let word = fields.next().expect("non-empty line has a first field");
            let values: Vec<f32> = fields
                .map(str::parse)
                .collect::<Result<_, _>>()
                .map_err(|err| format!("line {}: {err}", line_no + 1))?;

            // word2vec text files may lead with a `count dimension` header.
            if line_no == 0 && values.len() == 1 && word.parse::<usize>().is_ok() {
                continue;
            }
            if values.is_empty() {
                return Err(format!("line {}: no vector values", line_no + 1));
            }
            match dimension {
                None => dimension = Some(values.len()),
                Some(expected) if expected != values.len() => {
                    return Err(format!(
                        "line {}: expected {expected} values, found {}",
                        line_no + 1,
                        values.len()
                    ));
                }
                Some(_) => {}
            }
            vectors.insert(word.to_lowercase(), values);
        }

        let dimension = dimension.ok_or_else(|| "lexicon contains no vectors".to_string())?;
        Ok(Self { vectors, dimension })
    }

    /// Number of words in the table.
    pub fn len(&self) -> usize {
        self.vectors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vectors.is_empty()
    }
}

impl WordVectors for Lexicon {
    fn dimension(&self) -> usize {
        self.dimension
    }

    fn vector(&self, word: &str) -> Option<Vec<f32>> {
        self.vectors.get(word).cloned()
    }
}

/// Resolve the backend described by `cfg`.
///
/// Stub backends are constructed on the fly (they hold no data); lexicon
/// backends are loaded once per path and shared afterwards, so the cost of
/// parsing a large vector file is amortized across comparisons.
pub fn load_backend(cfg: &SemanticConfig) -> Result<Arc<dyn WordVectors>, SemanticError> {
    cfg.validate()?;
    match cfg.backend.as_str() {
        "stub" => Ok(Arc::new(StubVectors::new(cfg.dimension))),
        "lexicon" => {
            let path = cfg
                .lexicon_path
                .as_ref()
                .expect("validate() enforces lexicon_path");
            let cached = {
                let guard = LOADED.read().unwrap_or_else(|poisoned| poisoned.into_inner());
                guard.get(path.as_path()).cloned()
            };
            if let Some(lexicon) = cached {
                return Ok(lexicon);
            }
            let lexicon = Arc::new(Lexicon::from_path(path)?);
            let mut guard = LOADED.write().unwrap_or_else(|poisoned| poisoned.into_inner());
            let entry = guard.entry(path.clone()).or_insert_with(|| lexicon);
            Ok(entry.clone())
        }
        _ => unreachable!("validate() rejects unknown backends"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    use tempfile::NamedTempFile;

    fn write_lexicon(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().expect("temp file");
        file.write_all(content.as_bytes()).expect("write lexicon");
        file
    }

    #[test]
    fn parses_word_rows() {
        let file = write_lexicon("cat 1.0 0.0\ndog 0.0 1.0\n");
        let lexicon = Lexicon::from_path(file.path()).unwrap();
        assert_eq!(lexicon.len(), 2);
        assert_eq!(lexicon.dimension(), 2);
        assert_eq!(lexicon.vector("cat"), Some(vec![1.0, 0.0]));
        assert_eq!(lexicon.vector("bird"), None);
    }

    #[test]
    fn skips_word2vec_header() {
        let file = write_lexicon("2 3\ncat 1.0 0.0 0.5\ndog 0.0 1.0 0.5\n");
        let lexicon = Lexicon::from_path(file.path()).unwrap();
        assert_eq!(lexicon.len(), 2);
        assert_eq!(lexicon.dimension(), 3);
    }

    #[test]
    fn lookup_is_lowercased_at_ingest() {
        let file = write_lexicon("Paris 0.1 0.2\n");
        let lexicon = Lexicon::from_path(file.path()).unwrap();
        assert!(lexicon.vector("paris").is_some());
    }

    #[test]
    fn missing_file_is_model_unavailable() {
        let err = Lexicon::from_path(Path::new("/definitely/not/here.vec")).unwrap_err();
        assert!(matches!(err, SemanticError::ModelUnavailable(_)));
    }

    #[test]
    fn ragged_rows_rejected() {
        let file = write_lexicon("cat 1.0 0.0\ndog 0.5\n");
        let err = Lexicon::from_path(file.path()).unwrap_err();
        assert!(matches!(err, SemanticError::ModelUnavailable(msg) if msg.contains("expected 2")));
    }

    #[test]
    fn non_numeric_value_rejected() {
        let file = write_lexicon("cat one two\n");
        assert!(Lexicon::from_path(file.path()).is_err());
    }

    #[test]
    fn empty_lexicon_rejected() {
        let file = write_lexicon("\n\n");
        assert!(Lexicon::from_path(file.path()).is_err());
    }

    #[test]
    fn load_backend_caches_per_path() {
        let file = write_lexicon("cat 1.0 0.0\n");
        let cfg = SemanticConfig {
            backend: "lexicon".into(),
            lexicon_path: Some(file.path().to_path_buf()),
            ..Default::default()
        };
        let first = load_backend(&cfg).unwrap();
        let second = load_backend(&cfg).unwrap();
        assert!(Arc::ptr_eq(&first, &second));
    }

    #[test]
    fn load_backend_missing_lexicon_fails() {
        let cfg = SemanticConfig {
            backend: "lexicon".into(),
            lexicon_path: Some(PathBuf::from("/nope/words.vec")),
            ..Default::default()
        };
        assert!(matches!(
            load_backend(&cfg),
            Err(SemanticError::ModelUnavailable(_))
        ));
    }
}

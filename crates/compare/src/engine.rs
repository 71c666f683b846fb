use std::sync::Arc;
use std::time::Instant;

use metrics::{cosine, jaccard, sequence_similarity};
use normalize::{Document, NormalizeConfig, Normalizer};
use semantic::{load_backend, similarity_with, SemanticConfig, SemanticError, WordVectors};

use crate::aggregate::aggregate;
use crate::observe::metrics_recorder;
use crate::types::{
    CompareConfig, CompareError, ComparisonReport, EmbeddingPolicy, MetricScores,
};


/// Reusable comparison engine.
///
/// Construction resolves everything expensive or fallible up front: the
/// normalizer's language resources and the embedding backend. `compare` is
/// then a pure function of its two documents — no shared mutable state, so
/// one `Comparator` can serve any number of independent runs.
pub struct Comparator {
    normalizer: Normalizer,
    backend: Option<Arc<dyn WordVectors>>,
    cfg: CompareConfig,
}

impl Comparator {
    /// Build an engine from explicit per-stage configs.
    ///
    /// When the embedding backend cannot be loaded the behavior follows
    /// `cfg.embedding_policy`: `Abort` surfaces the error here, `Degrade`
    /// records the condition and continues with lexical metrics only.
    pub fn new(
        normalize_cfg: &NormalizeConfig,
        semantic_cfg: &SemanticConfig,
        cfg: CompareConfig,
    ) -> Result<Self, CompareError> {
        cfg.validate()?;
        let normalizer = Normalizer::new(normalize_cfg)?;
        let backend = match load_backend(semantic_cfg) {
            Ok(backend) => Some(backend),
            // Only an unavailable backend is degradable; a misconfigured
            // one always aborts.
            Err(err @ SemanticError::ModelUnavailable(_))
                if cfg.embedding_policy == EmbeddingPolicy::Degrade =>
            {
                tracing::warn!(
                    error = %err,
                    "embedding backend unavailable, degrading to lexical metrics"
                );
                None
            }
            Err(err) => return Err(err.into()),
        };
        Ok(Self {
            normalizer,
            backend,
            cfg,
        })
    }

    /// Compare two documents and produce a full report.
    ///
    /// Documents are normalized under the engine's configured language; a
    /// differing `Document::language` tag is logged, not an error. Fails
    /// with [`CompareError::InsufficientContent`] when either document
    /// normalizes to an empty token sequence.
    pub fn compare(
        &self,
        left: &Document,
        right: &Document,
    ) -> Result<ComparisonReport, CompareError> {
        let started = Instant::now();
        let result = self.compare_inner(left, right);
        if let Some(recorder) = metrics_recorder() {
            let outcome = result
                .as_ref()
                .map(|report| report.aggregate)
                .map_err(Clone::clone);
            recorder.record_compare(started.elapsed(), &outcome);
        }
        result
    }

    /// Convenience wrapper over [`Comparator::compare`] for raw strings.
    pub fn compare_texts(
        &self,
        left: &str,
        right: &str,
    ) -> Result<ComparisonReport, CompareError> {
        let language = self.normalizer.config().language.clone();
        self.compare(
            &Document::new(left, language.clone()),
            &Document::new(right, language),
        )
    }

    fn compare_inner(
        &self,
        left: &Document,
        right: &Document,
    ) -> Result<ComparisonReport, CompareError> {
        let engine_language = &self.normalizer.config().language;
        for doc in [left, right] {
            if !doc.language().eq_ignore_ascii_case(engine_language) {
                tracing::debug!(
                    document_language = doc.language(),
                    engine_language = %engine_language,
                    "document language tag differs from engine language"
                );
            }
        }

        let tokens_left = self.normalizer.normalize(left.content());
        let tokens_right = self.normalizer.normalize(right.content());
        tracing::debug!(
            left_tokens = tokens_left.len(),
            right_tokens = tokens_right.len(),
            "normalized document pair"
        );
        if tokens_left.is_empty() || tokens_right.is_empty() {
            return Err(CompareError::InsufficientContent);
        }

        // The metrics are independent of each other; `use_parallel` only
        // changes scheduling, never values.
        let (lexical, embedding) = if self.cfg.use_parallel {
            rayon::join(
                || self.lexical_scores(left, right, &tokens_left, &tokens_right),
                || self.embedding_scores(left, right, &tokens_left, &tokens_right),
            )
        } else {
            (
                self.lexical_scores(left, right, &tokens_left, &tokens_right),
                self.embedding_scores(left, right, &tokens_left, &tokens_right),
            )
        };
        let lexical = lexical?;
        let (token_closeness, raw_text_closeness) = match embedding {
            Some((token, raw)) => (Some(token), Some(raw)),
            None => (None, None),
        };

        let scores = MetricScores {
            word_likeness: lexical.word_likeness,
            jaccard: lexical.jaccard,
            cosine: lexical.cosine,
            token_closeness,
            raw_text_closeness,
        };
        let report = ComparisonReport {
            aggregate: aggregate(&scores),
            scores,
            line_likeness: lexical.line_likeness,
            embedding_degraded: self.backend.is_none(),
        };
        tracing::debug!(aggregate = report.aggregate, "comparison complete");
        Ok(report)
    }

    fn lexical_scores(
        &self,
        left: &Document,
        right: &Document,
        tokens_left: &[String],
        tokens_right: &[String],
    ) -> Result<LexicalScores, CompareError> {
        let word_likeness = sequence_similarity(tokens_left, tokens_right);
        let jaccard_score = jaccard(tokens_left, tokens_right);
        // Token sequences are non-empty here, so `cosine` cannot reject
        // them; the `?` covers the contract anyway.
        let cosine_score = cosine(tokens_left, tokens_right)?;
        let line_likeness = self.cfg.include_line_ratio.then(|| {
            let lines_left: Vec<&str> = left.content().lines().collect();
            let lines_right: Vec<&str> = right.content().lines().collect();
            sequence_similarity(&lines_left, &lines_right)
        });
        Ok(LexicalScores {
            word_likeness,
            jaccard: jaccard_score,
            cosine: cosine_score,
            line_likeness,
        })
    }

    fn embedding_scores(
        &self,
        left: &Document,
        right: &Document,
        tokens_left: &[String],
        tokens_right: &[String],
    ) -> Option<(f64, f64)> {
        let backend = self.backend.as_deref()?;
        let token_closeness = similarity_with(
            backend,
            &tokens_left.join(" "),
            &tokens_right.join(" "),
        );
        let raw_text_closeness = similarity_with(backend, left.content(), right.content());
        Some((token_closeness, raw_text_closeness))
    }
}

struct LexicalScores {
    word_likeness: f64,
    jaccard: f64,
    cosine: f64,
    line_likeness: Option<f64>,
}

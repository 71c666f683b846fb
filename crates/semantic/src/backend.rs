//! The word-vector capability and centroid arithmetic.

use unicode_segmentation::UnicodeSegmentation;

/// A source of fixed-dimensional word vectors.
///
/// Implementations must be deterministic: the same word always maps to the
/// same vector (or consistently to none). Anything satisfying this trait —
/// static embeddings, a contextual model's token layer, a test stub — can
/// drive the semantic metric.
pub trait WordVectors: Send + Sync {
    /// Dimensionality of every vector this backend produces.
    fn dimension(&self) -> usize;

    /// The vector for `word`, or `None` when the word is out of vocabulary.
    /// `word` is always lowercase.
    fn vector(&self, word: &str) -> Option<Vec<f32>>;
}

/// Collapse a text to its centroid vector.
///
/// Words are segmented per UAX #29 and lowercased; each recognized word's
/// vector is accumulated and the sum averaged. Out-of-vocabulary words are
/// skipped. A text with no recognized words yields the zero vector.
pub fn vectorize(text: &str, backend: &dyn WordVectors) -> Vec<f32> {
    let mut centroid = vec![0.0f32; backend.dimension()];
    let mut recognized = 0usize;

    for word in text.unicode_words() {
        let lowered = word.to_lowercase();
        if let Some(vector) = backend.vector(&lowered) {
            debug_assert_eq!(vector.len(), centroid.len());
            for (slot, value) in centroid.iter_mut().zip(vector.iter()) {
                *slot += value;
            }
            recognized += 1;
        }
    }

    if recognized > 0 {
        let count = recognized as f32;
        for slot in centroid.iter_mut() {
            *slot /= count;
        }
    }
    centroid
}

/// Cosine similarity between two vectors in `[-1, 1]`.
///
/// Accumulates in `f64` for stability; a zero-magnitude vector on either
/// side yields `0.0` rather than dividing by zero.
pub fn cosine_between(v1: &[f32], v2: &[f32]) -> f64 {
    let mut dot = 0.0f64;
    let mut norm1 = 0.0f64;
    let mut norm2 = 0.0f64;
    for (&x, &y) in v1.iter().zip(v2.iter()) {
        let (x, y) = (x as f64, y as f64);
        dot += x * y;
        norm1 += x * x;
        norm2 += y * y;
    }
    if norm1 == 0.0 || norm2 == 0.0 {
        return 0.0;
    }
    (dot / (norm1.sqrt() * norm2.sqrt())).clamp(-1.0, 1.0)
}

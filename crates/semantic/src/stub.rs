use fxhash::hash64;

use crate::backend::WordVectors;

/// Deterministic asset-free backend.
///
/// Every word gets a reproducible pseudo-vector derived from its hash:
/// sinusoid values seeded by the word bytes, so equal words always map to
/// equal vectors and different words land elsewhere in the space. Cheap
/// enough for tests and for running the full pipeline without downloading
/// a model; it carries no actual semantics.
#[derive(Debug, Clone)]
pub struct StubVectors {
    dimension: usize,
}

impl StubVectors {
    pub fn new(dimension: usize) -> Self {
        Self { dimension }
    }
}

impl WordVectors for StubVectors {
    fn dimension(&self) -> usize {
        self.dimension
    }

    fn vector(&self, word: &str) -> Option<Vec<f32>> {
        let seed = hash64(word.as_bytes());
        let mut vector = vec![0.0f32; self.dimension];
        for (idx, value) in vector.iter_mut().enumerate() {
            let mixed = seed.rotate_left((idx % 64) as u32) ^ (idx as u64);
            *value = ((mixed as f32) * 0.0001).sin();
        }
        Some(vector)
    }
}

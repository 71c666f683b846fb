//! Score conventions shared by all metrics.
//!
//! A similarity score is a percentage in `[0, 100]` carried as `f64` and
//! rounded to two decimal digits at the metric boundary, so every layer
//! above sees the same precision.

/// Round a score to two decimal digits.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Scale a `[0, 1]` ratio to a clamped two-decimal percentage.
pub(crate) fn percent(ratio: f64) -> f64 {
    round2((ratio * 100.0).clamp(0.0, 100.0))
}

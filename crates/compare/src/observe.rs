// Metrics hooks for the comparison engine.
//
// Callers install a global `CompareMetrics` implementation via
// [`set_compare_metrics`]; every `Comparator::compare` call then reports its
// latency and outcome. This keeps instrumentation decoupled from any
// specific metrics backend and out of the algorithmic code.
use std::sync::{Arc, RwLock};
use std::time::Duration;

use once_cell::sync::OnceCell;

use crate::types::CompareError;

/// Metrics observer for comparison runs.
pub trait CompareMetrics: Send + Sync {
    /// Record the outcome of one comparison.
    ///
    /// `latency` is the wall-clock duration of the full run; `outcome` is
    /// the aggregate score on success or the error that aborted the run.
    fn record_compare(&self, latency: Duration, outcome: &Result<f64, CompareError>);
}

fn metrics_lock() -> &'static RwLock<Option<Arc<dyn CompareMetrics>>> {
    static METRICS: OnceCell<RwLock<Option<Arc<dyn CompareMetrics>>>> = OnceCell::new();
    METRICS.get_or_init(|| RwLock::new(None))
}

pub(crate) fn metrics_recorder() -> Option<Arc<dyn CompareMetrics>> {
    let guard = metrics_lock()
        .read()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    guard.clone()
}

/// Install or clear the global compare metrics recorder.
///
/// Typically called once during startup so every [`Comparator`](crate::Comparator)
/// shares the same metrics backend.
pub fn set_compare_metrics(recorder: Option<Arc<dyn CompareMetrics>>) {
    let lock = metrics_lock();
    let mut guard = lock.write().expect("compare metrics lock poisoned");
    *guard = recorder;
}

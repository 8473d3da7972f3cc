//! Aggregate math over recorded samples.

use crate::model::{HistoryEntry, HistorySummary};

/// Arithmetic mean; 0.0 for an empty sample set (division only happens when
/// there is at least one sample).
pub fn mean(samples: &[f64]) -> f64 {
    if samples.is_empty() {
        return 0.0;
    }
    samples.iter().sum::<f64>() / samples.len() as f64
}

/// Summarize one algorithm's history entry.
pub fn summarize(entry: &HistoryEntry) -> HistorySummary {
    HistorySummary {
        avg_time: mean(&entry.times),
        avg_memory: mean(&entry.memory),
        trials: entry.times.len(),
    }
}

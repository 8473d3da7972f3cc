use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Element type sorted by every procedure. Inputs are in-memory integer
/// sequences generated or supplied by the embedding application.
pub type Value = i64;

/// The seven sorting procedures known to the harness and the history store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum AlgorithmId {
    Selection,
    Bubble,
    Insertion,
    Merge,
    Quick,
    Heap,
    Comb,
}

impl AlgorithmId {
    /// All algorithms in menu order.
    pub const ALL: [AlgorithmId; 7] = [
        AlgorithmId::Selection,
        AlgorithmId::Bubble,
        AlgorithmId::Insertion,
        AlgorithmId::Merge,
        AlgorithmId::Quick,
        AlgorithmId::Heap,
        AlgorithmId::Comb,
    ];

    /// Display name; also the key used in the persisted history file.
    pub fn display_name(self) -> &'static str {
        match self {
            AlgorithmId::Selection => "Selection Sort",
            AlgorithmId::Bubble => "Bubble Sort",
            AlgorithmId::Insertion => "Insertion Sort",
            AlgorithmId::Merge => "Merge Sort",
            AlgorithmId::Quick => "Quick Sort",
            AlgorithmId::Heap => "Heap Sort",
            AlgorithmId::Comb => "Comb Sort",
        }
    }
}

impl fmt::Display for AlgorithmId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for AlgorithmId {
    type Err = String;

    /// Accepts the short form ("quick") or the display name ("Quick Sort"),
    /// case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "selection" | "selection sort" => Ok(AlgorithmId::Selection),
            "bubble" | "bubble sort" => Ok(AlgorithmId::Bubble),
            "insertion" | "insertion sort" => Ok(AlgorithmId::Insertion),
            "merge" | "merge sort" => Ok(AlgorithmId::Merge),
            "quick" | "quick sort" => Ok(AlgorithmId::Quick),
            "heap" | "heap sort" => Ok(AlgorithmId::Heap),
            "comb" | "comb sort" => Ok(AlgorithmId::Comb),
            other => Err(format!(
                "unknown algorithm '{other}' (expected one of: selection, bubble, insertion, merge, quick, heap, comb)"
            )),
        }
    }
}

/// Recorded outcome of one sort execution. Immutable once produced by
/// `Recorder::finalize`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunStats {
    pub algorithm: AlgorithmId,
    pub size: usize,
    pub duration_seconds: f64,
    pub peak_memory_kb: f64,
    pub current_memory_kb: f64,
    pub step_count: u64,
}

impl RunStats {
    /// Reported comparison count. The engine increments one counter per
    /// notified step; failed (non-swapping) comparisons are not counted, so
    /// comparisons and swaps are the same number by construction.
    pub fn comparisons(&self) -> u64 {
        self.step_count
    }

    /// Reported swap count. Same counter as `comparisons`.
    pub fn swaps(&self) -> u64 {
        self.step_count
    }
}

/// Per-algorithm append-only log of past run durations (seconds) and peak
/// memory (KB). The two vectors are index-aligned by run. Unbounded.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub times: Vec<f64>,
    pub memory: Vec<f64>,
}

/// Per-algorithm mapping from input size to the most recent measured
/// duration at that size. Re-running a size overwrites the prior entry.
pub type PerformanceSeries = BTreeMap<AlgorithmId, BTreeMap<usize, f64>>;

/// On-demand aggregate over one algorithm's history.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HistorySummary {
    pub avg_time: f64,
    pub avg_memory: f64,
    pub trials: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_match_history_keys() {
        let names: Vec<&str> = AlgorithmId::ALL.iter().map(|a| a.display_name()).collect();
        assert_eq!(
            names,
            [
                "Selection Sort",
                "Bubble Sort",
                "Insertion Sort",
                "Merge Sort",
                "Quick Sort",
                "Heap Sort",
                "Comb Sort"
            ]
        );
    }

    #[test]
    fn parses_short_and_display_forms() {
        assert_eq!("quick".parse::<AlgorithmId>().unwrap(), AlgorithmId::Quick);
        assert_eq!(
            "Heap Sort".parse::<AlgorithmId>().unwrap(),
            AlgorithmId::Heap
        );
        assert_eq!(
            "SELECTION".parse::<AlgorithmId>().unwrap(),
            AlgorithmId::Selection
        );
        assert!("shell".parse::<AlgorithmId>().is_err());
    }

    #[test]
    fn comparisons_and_swaps_share_the_counter() {
        let stats = RunStats {
            algorithm: AlgorithmId::Bubble,
            size: 5,
            duration_seconds: 0.0,
            peak_memory_kb: 0.0,
            current_memory_kb: 0.0,
            step_count: 7,
        };
        assert_eq!(stats.comparisons(), 7);
        assert_eq!(stats.swaps(), 7);
    }
}

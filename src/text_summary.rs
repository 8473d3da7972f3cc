//! Text summary builder for CLI output.
//!
//! Computes rankings and formats human-readable lines for text mode.

use crate::model::{AlgorithmId, HistorySummary, PerformanceSeries, RunStats};
use std::collections::BTreeMap;

/// Pre-formatted lines for text output.
pub(crate) struct TextSummary {
    pub lines: Vec<String>,
}

/// One-line report for a single run.
pub(crate) fn run_line(stats: &RunStats) -> String {
    format!(
        "{} - Time: {:.6}s | Memory: {:.2} KB | Comparisons: {} | Swaps: {}",
        stats.algorithm,
        stats.duration_seconds,
        stats.peak_memory_kb,
        stats.comparisons(),
        stats.swaps()
    )
}

/// Per-run lines plus rankings by execution time and by peak memory, for a
/// run-all comparison.
pub(crate) fn build_comparison_summary(
    results: &BTreeMap<AlgorithmId, RunStats>,
) -> TextSummary {
    let mut lines = Vec::new();
    for stats in results.values() {
        lines.push(run_line(stats));
    }

    let mut by_time: Vec<&RunStats> = results.values().collect();
    by_time.sort_by(|a, b| a.duration_seconds.total_cmp(&b.duration_seconds));
    lines.push(String::new());
    lines.push("Ranking by execution time:".to_string());
    for (i, stats) in by_time.iter().enumerate() {
        lines.push(format!(
            "{}. {}: {:.6}s",
            i + 1,
            stats.algorithm,
            stats.duration_seconds
        ));
    }

    let mut by_memory: Vec<&RunStats> = results.values().collect();
    by_memory.sort_by(|a, b| a.peak_memory_kb.total_cmp(&b.peak_memory_kb));
    lines.push(String::new());
    lines.push("Ranking by peak memory:".to_string());
    for (i, stats) in by_memory.iter().enumerate() {
        lines.push(format!(
            "{}. {}: {:.2} KB",
            i + 1,
            stats.algorithm,
            stats.peak_memory_kb
        ));
    }

    TextSummary { lines }
}

/// Averages table over the persisted history.
pub(crate) fn build_history_summary(
    summary: &BTreeMap<AlgorithmId, HistorySummary>,
) -> TextSummary {
    let mut lines = Vec::new();
    lines.push(format!(
        "{:<16} {:>14} {:>18} {:>8}",
        "Algorithm", "Avg time (s)", "Avg memory (KB)", "Trials"
    ));
    for id in AlgorithmId::ALL {
        let entry = &summary[&id];
        lines.push(format!(
            "{:<16} {:>14.6} {:>18.2} {:>8}",
            id.display_name(),
            entry.avg_time,
            entry.avg_memory,
            entry.trials
        ));
    }
    TextSummary { lines }
}

/// Size/duration table of the scaling series, one block per algorithm.
pub(crate) fn build_scaling_summary(series: &PerformanceSeries) -> TextSummary {
    let mut lines = Vec::new();
    for (id, points) in series {
        lines.push(format!("{}:", id));
        for (size, duration) in points {
            lines.push(format!("  n = {:>8}: {:.6}s", size, duration));
        }
    }
    TextSummary { lines }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stats(algorithm: AlgorithmId, duration: f64, peak: f64, steps: u64) -> RunStats {
        RunStats {
            algorithm,
            size: 10,
            duration_seconds: duration,
            peak_memory_kb: peak,
            current_memory_kb: 0.0,
            step_count: steps,
        }
    }

    #[test]
    fn run_line_reports_identical_comparison_and_swap_counts() {
        let line = run_line(&stats(AlgorithmId::Quick, 0.001, 12.5, 42));
        assert_eq!(
            line,
            "Quick Sort - Time: 0.001000s | Memory: 12.50 KB | Comparisons: 42 | Swaps: 42"
        );
    }

    #[test]
    fn comparison_summary_ranks_fastest_first() {
        let mut results = BTreeMap::new();
        results.insert(AlgorithmId::Bubble, stats(AlgorithmId::Bubble, 0.9, 1.0, 5));
        results.insert(AlgorithmId::Quick, stats(AlgorithmId::Quick, 0.1, 9.0, 5));
        let summary = build_comparison_summary(&results);
        let time_header = summary
            .lines
            .iter()
            .position(|l| l == "Ranking by execution time:")
            .unwrap();
        assert!(summary.lines[time_header + 1].starts_with("1. Quick Sort"));
        assert!(summary.lines[time_header + 2].starts_with("2. Bubble Sort"));
        let mem_header = summary
            .lines
            .iter()
            .position(|l| l == "Ranking by peak memory:")
            .unwrap();
        assert!(summary.lines[mem_header + 1].starts_with("1. Bubble Sort"));
    }

    #[test]
    fn history_summary_lists_all_seven_algorithms() {
        let summary: BTreeMap<AlgorithmId, HistorySummary> = AlgorithmId::ALL
            .iter()
            .map(|&id| {
                (
                    id,
                    HistorySummary {
                        avg_time: 0.0,
                        avg_memory: 0.0,
                        trials: 0,
                    },
                )
            })
            .collect();
        let text = build_history_summary(&summary);
        // Header plus one row per algorithm.
        assert_eq!(text.lines.len(), 8);
        assert!(text.lines[1].starts_with("Selection Sort"));
        assert!(text.lines[7].starts_with("Comb Sort"));
    }
}

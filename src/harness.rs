//! Benchmark harness.
//!
//! Owns sequence generation, the recorder, the history store, and the
//! per-size performance series, and runs single, all-algorithm, and
//! multi-size scaling benchmarks. Every run executes against a private copy
//! of the input; the caller's sequence is never mutated. Runs are strictly
//! sequential on the calling thread.

use crate::engine::{self, NoopSink, StepSink};
use crate::metrics;
use crate::model::{AlgorithmId, HistorySummary, PerformanceSeries, RunStats, Value};
use crate::recorder::Recorder;
use crate::storage::HistoryStore;
use anyhow::Result;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::BTreeMap;

/// Sequence generation parameters supplied by the embedding application.
#[derive(Debug, Clone, Copy)]
pub struct GenConfig {
    pub size: usize,
    /// Inclusive upper bound; values are drawn uniformly from `1..=max_value`.
    pub max_value: Value,
    /// Fixed seed for reproducible sequences; fresh entropy when absent.
    pub seed: Option<u64>,
}

/// Forwards each step to the recorder and to the registered observer.
struct TeeSink<'a> {
    recorder: &'a mut Recorder,
    observer: &'a mut dyn StepSink,
}

impl StepSink for TeeSink<'_> {
    fn on_step(&mut self, arr: &[Value], a: usize, b: usize) {
        self.recorder.on_step(arr, a, b);
        self.observer.on_step(arr, a, b);
    }
}

pub struct Harness {
    recorder: Recorder,
    history: HistoryStore,
    series: PerformanceSeries,
    numbers: Vec<Value>,
    gen: GenConfig,
    rng: StdRng,
    /// Rendering-collaborator seam; a no-op unless the embedding registers
    /// something. Only animated runs notify it.
    observer: Box<dyn StepSink>,
}

impl Harness {
    pub fn new(gen: GenConfig, history: HistoryStore) -> Self {
        let rng = match gen.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let mut harness = Self {
            recorder: Recorder::new(),
            history,
            series: PerformanceSeries::new(),
            numbers: Vec::new(),
            gen,
            rng,
            observer: Box::new(NoopSink),
        };
        harness.regenerate();
        harness
    }

    /// Register the step observer notified during animated runs. The
    /// observer receives read-only snapshots and must not hold onto them.
    pub fn set_observer(&mut self, observer: Box<dyn StepSink>) {
        self.observer = observer;
    }

    /// The canonical displayed sequence.
    pub fn sequence(&self) -> &[Value] {
        &self.numbers
    }

    pub fn history(&self) -> &HistoryStore {
        &self.history
    }

    pub fn series(&self) -> &PerformanceSeries {
        &self.series
    }

    fn generate_sequence(&mut self, size: usize) -> Vec<Value> {
        (0..size)
            .map(|_| self.rng.gen_range(1..=self.gen.max_value))
            .collect()
    }

    /// Replace the canonical sequence with a fresh random one.
    pub fn regenerate(&mut self) {
        self.numbers = self.generate_sequence(self.gen.size);
    }

    /// Run one algorithm against a private copy of `sequence`, record the
    /// stats, append them to the history store, and persist. When `animate`
    /// the registered observer sees every step and the sorted copy is
    /// promoted to the canonical displayed sequence; otherwise the copy is
    /// discarded.
    pub fn run_single(
        &mut self,
        id: AlgorithmId,
        sequence: &[Value],
        animate: bool,
    ) -> Result<RunStats> {
        let mut working = sequence.to_vec();
        self.recorder.reset();
        if animate {
            let mut sink = TeeSink {
                recorder: &mut self.recorder,
                observer: self.observer.as_mut(),
            };
            engine::sort_with(id, &mut working, &mut sink);
        } else {
            engine::sort_with(id, &mut working, &mut self.recorder);
        }
        let stats = self.recorder.finalize(id, sequence.len());
        self.history
            .append(id, stats.duration_seconds, stats.peak_memory_kb)?;
        if animate {
            self.numbers = working;
        }
        Ok(stats)
    }

    /// Run all seven algorithms against independent copies of the same
    /// initial sequence, never animated. History gets one append per
    /// algorithm; the per-size series is untouched.
    pub fn run_all(&mut self, sequence: &[Value]) -> Result<BTreeMap<AlgorithmId, RunStats>> {
        let mut results = BTreeMap::new();
        for id in AlgorithmId::ALL {
            let stats = self.run_single(id, sequence, false)?;
            results.insert(id, stats);
        }
        Ok(results)
    }

    /// For each size, generate a fresh random sequence and time all seven
    /// algorithms against independent copies, overwriting each algorithm's
    /// series entry for that size. Scaling sweeps do not touch the history
    /// store.
    pub fn run_scaling_benchmark(&mut self, sizes: &[usize]) {
        for &size in sizes {
            let sequence = self.generate_sequence(size);
            for id in AlgorithmId::ALL {
                let mut working = sequence.clone();
                self.recorder.reset();
                engine::sort_with(id, &mut working, &mut self.recorder);
                let stats = self.recorder.finalize(id, size);
                self.series
                    .entry(id)
                    .or_default()
                    .insert(size, stats.duration_seconds);
            }
        }
    }

    /// Per-algorithm averages over the persisted history, computed on
    /// demand.
    pub fn get_history_summary(&self) -> BTreeMap<AlgorithmId, HistorySummary> {
        AlgorithmId::ALL
            .iter()
            .map(|&id| (id, metrics::summarize(self.history.entry(id))))
            .collect()
    }
}

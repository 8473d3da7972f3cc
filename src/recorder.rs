//! Instrumentation recorder: step counting, wall-clock timing, and memory
//! sampling for a single sort run.

use crate::alloc;
use crate::engine::StepSink;
use crate::model::{AlgorithmId, RunStats, Value};
use std::time::{Duration, Instant};

const BYTES_PER_KB: f64 = 1024.0;

/// Aggregates one run's statistics. Owned by the harness; exclusively held
/// for the duration of a run, never shared between runs.
pub struct Recorder {
    step_count: u64,
    started: Instant,
    elapsed: Duration,
    current_memory_kb: f64,
    peak_memory_kb: f64,
}

impl Recorder {
    pub fn new() -> Self {
        Self {
            step_count: 0,
            started: Instant::now(),
            elapsed: Duration::ZERO,
            current_memory_kb: 0.0,
            peak_memory_kb: 0.0,
        }
    }

    /// Zero all counters, drop the allocator watermark to the current
    /// level, and restart the clock.
    pub fn reset(&mut self) {
        self.step_count = 0;
        self.elapsed = Duration::ZERO;
        self.current_memory_kb = 0.0;
        self.peak_memory_kb = 0.0;
        alloc::reset_peak();
        self.started = Instant::now();
    }

    fn sample_memory(&mut self) {
        self.current_memory_kb = alloc::current_bytes() as f64 / BYTES_PER_KB;
        let peak = alloc::peak_bytes() as f64 / BYTES_PER_KB;
        // Monotone within a run.
        if peak > self.peak_memory_kb {
            self.peak_memory_kb = peak;
        }
    }

    /// Take a final sample and snapshot the run into an immutable record.
    pub fn finalize(&mut self, algorithm: AlgorithmId, size: usize) -> RunStats {
        self.elapsed = self.started.elapsed();
        self.sample_memory();
        RunStats {
            algorithm,
            size,
            duration_seconds: self.elapsed.as_secs_f64(),
            peak_memory_kb: self.peak_memory_kb,
            current_memory_kb: self.current_memory_kb,
            step_count: self.step_count,
        }
    }
}

impl StepSink for Recorder {
    /// One increment per notification; the counter is reported as both
    /// comparisons and swaps.
    fn on_step(&mut self, _arr: &[Value], _a: usize, _b: usize) {
        self.step_count += 1;
        self.elapsed = self.started.elapsed();
        self.sample_memory();
    }
}

impl Default for Recorder {
    fn default() -> Self {
        Self::new()
    }
}

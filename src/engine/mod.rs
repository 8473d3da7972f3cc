//! Sorting engine: the seven sort procedures and their step-notification
//! contract.
//!
//! Every procedure sorts ascending in place and invokes the supplied
//! [`StepSink`] once per elementary mutating step, after the mutation has
//! been applied, passing a read-only snapshot of the working sequence and
//! the two indices involved. Correctness of the final order and the total
//! step count are the only observable contract.

mod quadratic;
mod recursive;

pub use quadratic::{bubble_sort, comb_sort, insertion_sort, selection_sort};
pub use recursive::{heap_sort, merge_sort, quick_sort};

use crate::model::{AlgorithmId, Value};

/// Capability invoked at each elementary mutating step of a sort.
///
/// `a == b` is valid: merge sort emits it for every destination write-back.
/// Implementations must not mutate the snapshot.
pub trait StepSink {
    fn on_step(&mut self, arr: &[Value], a: usize, b: usize);
}

/// Default sink for callers that only need the sorted result.
pub struct NoopSink;

impl StepSink for NoopSink {
    fn on_step(&mut self, _arr: &[Value], _a: usize, _b: usize) {}
}

/// Run the procedure identified by `id` against `arr`.
pub fn sort_with(id: AlgorithmId, arr: &mut [Value], sink: &mut dyn StepSink) {
    match id {
        AlgorithmId::Selection => selection_sort(arr, sink),
        AlgorithmId::Bubble => bubble_sort(arr, sink),
        AlgorithmId::Insertion => insertion_sort(arr, sink),
        AlgorithmId::Merge => merge_sort(arr, sink),
        AlgorithmId::Quick => quick_sort(arr, sink),
        AlgorithmId::Heap => heap_sort(arr, sink),
        AlgorithmId::Comb => comb_sort(arr, sink),
    }
}

//! Divide-and-conquer sorts: merge, quick, heap.
//!
//! Each recursive procedure takes the working slice and explicit index
//! bounds rather than closing over shared state, so the recursion is plain
//! functions all the way down.

use super::StepSink;
use crate::model::Value;

/// Merge sort with recursive midpoint split. On merge, every destination
/// index written notifies `(k, k)` whether or not the value changed; the
/// notification marks the write-back, not a swap.
pub fn merge_sort(arr: &mut [Value], sink: &mut dyn StepSink) {
    let n = arr.len();
    merge_rec(arr, 0, n, sink);
}

fn merge_rec(arr: &mut [Value], start: usize, end: usize, sink: &mut dyn StepSink) {
    if end - start > 1 {
        let mid = (start + end) / 2;
        merge_rec(arr, start, mid, sink);
        merge_rec(arr, mid, end, sink);

        let left: Vec<Value> = arr[start..mid].to_vec();
        let right: Vec<Value> = arr[mid..end].to_vec();
        let mut i = 0;
        let mut j = 0;
        for k in start..end {
            if i < left.len() && (j >= right.len() || left[i] < right[j]) {
                arr[k] = left[i];
                i += 1;
            } else {
                arr[k] = right[j];
                j += 1;
            }
            sink.on_step(arr, k, k);
        }
    }
}

/// Quick sort with a Lomuto partition pivoting on the last element. No
/// randomization or median-of-three; already-sorted and reverse-sorted
/// inputs hit the quadratic worst case. Every `arr[j] <= pivot` hit swaps
/// and notifies, including self-swaps where `i == j`.
pub fn quick_sort(arr: &mut [Value], sink: &mut dyn StepSink) {
    let n = arr.len() as isize;
    quick_rec(arr, 0, n - 1, sink);
}

// Signed bounds: the left recursion is (start, i - 1), which underflows
// usize when the pivot lands at index 0.
fn quick_rec(arr: &mut [Value], start: isize, end: isize, sink: &mut dyn StepSink) {
    if start < end {
        let pivot = arr[end as usize];
        let mut i = start;
        for j in start..end {
            if arr[j as usize] <= pivot {
                arr.swap(i as usize, j as usize);
                sink.on_step(arr, i as usize, j as usize);
                i += 1;
            }
        }
        arr.swap(i as usize, end as usize);
        sink.on_step(arr, i as usize, end as usize);
        quick_rec(arr, start, i - 1, sink);
        quick_rec(arr, i + 1, end, sink);
    }
}

/// Heap sort: build a max-heap via recursive sift-down from `n/2 - 1` down
/// to the root, then repeatedly swap the root with the last unsorted
/// element and sift the shrunken heap.
pub fn heap_sort(arr: &mut [Value], sink: &mut dyn StepSink) {
    let n = arr.len();
    for i in (0..n / 2).rev() {
        sift_down(arr, n, i, sink);
    }
    for i in (1..n).rev() {
        arr.swap(0, i);
        sink.on_step(arr, 0, i);
        sift_down(arr, i, 0, sink);
    }
}

fn sift_down(arr: &mut [Value], n: usize, i: usize, sink: &mut dyn StepSink) {
    let mut largest = i;
    let left = 2 * i + 1;
    let right = 2 * i + 2;
    if left < n && arr[left] > arr[largest] {
        largest = left;
    }
    if right < n && arr[right] > arr[largest] {
        largest = right;
    }
    if largest != i {
        arr.swap(i, largest);
        sink.on_step(arr, i, largest);
        sift_down(arr, n, largest, sink);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::test_support::RecordingSink;
    use crate::engine::NoopSink;

    #[test]
    fn merge_interleaved_halves() {
        let mut arr = vec![2, 4, 1, 3];
        let mut sink = RecordingSink::default();
        merge_sort(&mut arr, &mut sink);
        assert_eq!(arr, vec![1, 2, 3, 4]);
        // Final merge writes all four positions in order.
        let tail: Vec<(usize, usize)> = sink
            .steps
            .iter()
            .rev()
            .take(4)
            .rev()
            .map(|(a, b, _)| (*a, *b))
            .collect();
        assert_eq!(tail, vec![(0, 0), (1, 1), (2, 2), (3, 3)]);
    }

    #[test]
    fn quick_pivot_lands_at_front() {
        // Smallest element last forces i == start at pivot placement and
        // exercises the (start, i - 1) recursion with i == 0.
        let mut arr = vec![3, 2, 1];
        quick_sort(&mut arr, &mut NoopSink);
        assert_eq!(arr, vec![1, 2, 3]);
    }

    #[test]
    fn quick_two_elements_sorted_still_notifies() {
        // [1, 2]: j = 0 hits arr[0] <= pivot (self-swap), then the pivot
        // self-swaps into place.
        let mut arr = vec![1, 2];
        let mut sink = RecordingSink::default();
        quick_sort(&mut arr, &mut sink);
        assert_eq!(arr, vec![1, 2]);
        let pairs: Vec<(usize, usize)> = sink.steps.iter().map(|(a, b, _)| (*a, *b)).collect();
        assert_eq!(pairs, vec![(0, 0), (1, 1)]);
    }

    #[test]
    fn heap_sorts_with_duplicate_values() {
        let mut arr = vec![5, 1, 5, 3, 5, 2];
        heap_sort(&mut arr, &mut NoopSink);
        assert_eq!(arr, vec![1, 2, 3, 5, 5, 5]);
    }

    #[test]
    fn heap_two_elements() {
        let mut arr = vec![2, 1];
        let mut sink = RecordingSink::default();
        heap_sort(&mut arr, &mut sink);
        assert_eq!(arr, vec![1, 2]);
        // Build phase finds the heap already valid; extraction swaps once.
        assert_eq!(sink.steps.len(), 1);
        assert_eq!((sink.steps[0].0, sink.steps[0].1), (0, 1));
    }
}

//! Exchange-based sorts: selection, bubble, insertion, comb.

use super::StepSink;
use crate::model::Value;

/// Selection sort. One swap (and one notification) per position whose
/// minimum lands elsewhere; positions already holding their minimum are
/// silent.
pub fn selection_sort(arr: &mut [Value], sink: &mut dyn StepSink) {
    let n = arr.len();
    for i in 0..n {
        let mut min_index = i;
        for j in i + 1..n {
            if arr[j] < arr[min_index] {
                min_index = j;
            }
        }
        if min_index != i {
            arr.swap(i, min_index);
            sink.on_step(arr, i, min_index);
        }
    }
}

/// Bubble sort with standard adjacent passes.
pub fn bubble_sort(arr: &mut [Value], sink: &mut dyn StepSink) {
    let n = arr.len();
    for i in 0..n {
        for j in 0..n.saturating_sub(i + 1) {
            if arr[j] > arr[j + 1] {
                arr.swap(j, j + 1);
                sink.on_step(arr, j, j + 1);
            }
        }
    }
}

/// Insertion sort, shifting left via adjacent swaps.
pub fn insertion_sort(arr: &mut [Value], sink: &mut dyn StepSink) {
    for i in 1..arr.len() {
        let mut j = i;
        while j > 0 && arr[j] < arr[j - 1] {
            arr.swap(j, j - 1);
            sink.on_step(arr, j, j - 1);
            j -= 1;
        }
    }
}

/// Comb sort. The gap starts at the sequence length and shrinks by a factor
/// of 1.3 each pass (`gap * 10 / 13` in integer math), floored at 1;
/// terminates once a gap-1 pass completes without a swap.
pub fn comb_sort(arr: &mut [Value], sink: &mut dyn StepSink) {
    let n = arr.len();
    let mut gap = n;
    let mut done = false;
    while !done {
        gap = gap * 10 / 13;
        if gap <= 1 {
            gap = 1;
            done = true;
        }
        let mut i = 0;
        while i + gap < n {
            if arr[i] > arr[i + gap] {
                arr.swap(i, i + gap);
                sink.on_step(arr, i, i + gap);
                done = false;
            }
            i += 1;
        }
    }
}

use std::cmp::Reverse;
use std::collections::BinaryHeap;

/// Heap-driven variant of [`merge_dedup`](super::merge_dedup).
///
/// Keeps one heap entry per non-exhausted input, keyed by the value under its cursor.
/// Output is identical to the cursor-scan version.
pub fn merge_dedup_heap<S: AsRef<[i64]>>(seqs: &[S]) -> Vec<i64> {
    let capacity: usize = seqs.iter().map(|s| s.as_ref().len()).sum();
    if capacity == 0 {
        return Vec::new();
    }

    // (value, sequence index, cursor position)
    let mut heap: BinaryHeap<Reverse<(i64, usize, usize)>> = seqs
        .iter()
        .enumerate()
        .filter_map(|(idx, seq)| seq.as_ref().first().map(|&head| Reverse((head, idx, 0))))
        .collect();

    let mut merged: Vec<i64> = Vec::with_capacity(capacity);

    while let Some(Reverse((value, idx, pos))) = heap.pop() {
        if merged.last() != Some(&value) {
            merged.push(value);
        }

        let seq = seqs[idx].as_ref();
        let mut next = pos + 1;
        // Skip the run of equal values in this input before re-queueing it
        while seq.get(next) == Some(&value) {
            next += 1;
        }
        if let Some(&head) = seq.get(next) {
            heap.push(Reverse((head, idx, next)));
        }
    }

    merged
}

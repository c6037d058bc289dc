/// Merges ascending sequences and removes duplicates.
///
/// Every input must be sorted ascending; repeated values inside one input are fine.
/// A value present in several inputs is consumed from all of them in the same step,
/// so each distinct value is appended exactly once.
///
/// # Examples
/// ```
/// use numbers_aggregator::merge::merge_dedup;
///
/// let merged = merge_dedup(&[vec![1, 3, 5, 8, 12], vec![1, 3, 7, 8, 10, 16]]);
/// assert_eq!(merged, vec![1, 3, 5, 7, 8, 10, 12, 16]);
/// ```
pub fn merge_dedup<S: AsRef<[i64]>>(seqs: &[S]) -> Vec<i64> {
    let capacity: usize = seqs.iter().map(|s| s.as_ref().len()).sum();
    if capacity == 0 {
        return Vec::new();
    }

    let mut cursors = vec![0usize; seqs.len()];
    let mut merged: Vec<i64> = Vec::with_capacity(capacity);

    loop {
        // Smallest head among the non-exhausted cursors
        let mut min: Option<i64> = None;
        for (seq, &pos) in seqs.iter().zip(cursors.iter()) {
            if let Some(&head) = seq.as_ref().get(pos) {
                min = Some(match min {
                    Some(current) if current <= head => current,
                    _ => head,
                });
            }
        }

        let Some(value) = min else {
            break;
        };

        if merged.last() != Some(&value) {
            merged.push(value);
        }

        for (seq, pos) in seqs.iter().zip(cursors.iter_mut()) {
            if seq.as_ref().get(*pos) == Some(&value) {
                *pos += 1;
            }
        }
    }

    merged
}

//! Sequence algorithms shared by the pipeline stages.

/// Stable ascending merge of two sorted slices.
///
/// Ties are resolved left-first, so equal elements keep their relative order
/// and the result length is always `left.len() + right.len()`.
///
/// # Examples
///
/// ```
/// let merged = seqpipe::util::algo::merge_sorted(&[1, 3, 5], &[2, 3, 4]);
/// assert_eq!(merged, vec![1, 2, 3, 3, 4, 5]);
/// ```
pub fn merge_sorted(left: &[i64], right: &[i64]) -> Vec<i64> {
    let mut merged = Vec::with_capacity(left.len() + right.len());
    let (mut i, mut j) = (0, 0);

    while i < left.len() && j < right.len() {
        if right[j] < left[i] {
            merged.push(right[j]);
            j += 1;
        } else {
            merged.push(left[i]);
            i += 1;
        }
    }
    merged.extend_from_slice(&left[i..]);
    merged.extend_from_slice(&right[j..]);

    merged
}

/// Width of the contiguous run of `key` in a sorted slice.
pub fn equal_range(sorted: &[i64], key: i64) -> usize {
    let lower = sorted.partition_point(|&value| value < key);
    let upper = sorted.partition_point(|&value| value <= key);
    upper - lower
}

/// The `k` largest elements of `values` in ascending order, found by partial
/// selection on a scratch copy. `None` when the slice holds fewer than `k`
/// elements.
pub fn top_k(values: &[i64], k: usize) -> Option<Vec<i64>> {
    if values.len() < k {
        return None;
    }
    if k == 0 {
        return Some(Vec::new());
    }

    let mut scratch = values.to_vec();
    let pivot = scratch.len() - k;
    scratch.select_nth_unstable(pivot);

    let mut top = scratch.split_off(pivot);
    top.sort_unstable();
    Some(top)
}

//! In-place lexicographic permutation stepping.

/// Rearranges `sequence` into its lexicographically next permutation.
///
/// Returns `false` once the last (descending) permutation has been passed; the
/// slice is then back in ascending order. Looping while this returns `true`
/// from an ascending start visits every distinct permutation exactly once.
pub fn next_permutation<T: Ord>(sequence: &mut [T]) -> bool {
    let len = sequence.len();
    if len < 2 {
        return false;
    }

    let Some(pivot) = (0..len - 1)
        .rev()
        .find(|&i| sequence[i] < sequence[i + 1])
    else {
        sequence.reverse();
        return false;
    };

    // A successor exists: pivot + 1 is always larger than the pivot.
    let successor = (pivot + 1..len)
        .rev()
        .find(|&j| sequence[j] > sequence[pivot])
        .unwrap_or(pivot + 1);

    sequence.swap(pivot, successor);
    sequence[pivot + 1..].reverse();
    true
}

//! Lexicographic permutation stepping

/// Advance `items` to the next permutation in lexicographic order
///
/// Returns true when a later permutation was produced. Once the final
/// (descending) permutation is reached, the slice wraps back to sorted
/// order and false is returned, so a do-while style loop starting from
/// the identity visits every permutation exactly once. Repeated values
/// are handled as a multiset: each distinct ordering appears once.
pub fn next_permutation<T: Ord>(items: &mut [T]) -> bool {
    let Some(pivot) = last_ascent(items) else {
        items.reverse();
        return false;
    };
    if let Some(successor) = last_exceeding(items, pivot) {
        items.swap(pivot, successor);
    }
    if let Some(suffix) = items.get_mut(pivot + 1..) {
        suffix.reverse();
    }
    true
}

/// Index of the rightmost position that still ascends into its successor
fn last_ascent<T: Ord>(items: &[T]) -> Option<usize> {
    (0..items.len().saturating_sub(1))
        .rev()
        .find(|&i| match (items.get(i), items.get(i + 1)) {
            (Some(a), Some(b)) => a < b,
            _ => false,
        })
}

/// Rightmost index after `pivot` holding a value greater than the pivot's
///
/// Always succeeds when `pivot` came from [`last_ascent`], since the
/// element directly after the pivot already exceeds it.
fn last_exceeding<T: Ord>(items: &[T], pivot: usize) -> Option<usize> {
    (pivot + 1..items.len())
        .rev()
        .find(|&i| match (items.get(i), items.get(pivot)) {
            (Some(candidate), Some(value)) => candidate > value,
            _ => false,
        })
}

//! Two-segment path stitching for via-queries, and the hop-count helper.

/// Join `first` (origin → junction) and `second` (junction → destination).
///
/// The junction vertex ends `first` and starts `second`; it appears once in
/// the result. If either half is empty there is no path through the
/// junction and the result is empty.
pub fn join_at_junction<T: PartialEq>(mut first: Vec<T>, second: Vec<T>) -> Vec<T> {
    if first.is_empty() || second.is_empty() {
        return Vec::new();
    }
    debug_assert!(first.last() == second.first(), "halves must share the junction");

    first.pop();
    first.extend(second);
    first
}

/// Hop count of a path: vertices minus one, or -1 for the empty "no path".
pub fn path_length<T>(path: &[T]) -> i64 {
    if path.is_empty() {
        -1
    } else {
        path.len() as i64 - 1
    }
}

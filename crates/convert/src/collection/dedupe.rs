//! Order-preserving deduplication and projection

use indexmap::IndexSet;
use std::hash::Hash;

/// Remove repeated elements, keeping first occurrences in order
pub fn dedupe<T: Eq + Hash + Clone>(items: &[T]) -> Vec<T> {
    to_set(items).into_iter().collect()
}

/// Concatenate two slices and remove repeated elements, keeping first occurrences
pub fn merge_dedupe<T: Eq + Hash + Clone>(first: &[T], second: &[T]) -> Vec<T> {
    first
        .iter()
        .chain(second)
        .cloned()
        .collect::<IndexSet<T>>()
        .into_iter()
        .collect()
}

/// Distinct elements of a slice, in first-occurrence order
pub fn to_set<T: Eq + Hash + Clone>(items: &[T]) -> IndexSet<T> {
    items.iter().cloned().collect()
}

/// Extract one field from every element
pub fn project<T, U>(items: &[T], field: impl FnMut(&T) -> U) -> Vec<U> {
    items.iter().map(field).collect()
}

//! Ordering stage — deterministic name ordering of scope members.

use crate::model::Named;

/// Return a copy of `records` sorted by name.
///
/// Decorate-sort-undecorate: each record is paired with its key, the pairs
/// are stably sorted and the keys dropped. Equal names keep their relative
/// order and `records` itself is left untouched.
pub fn sort_by_name<T: Named + Clone>(records: &[T]) -> Vec<T> {
    let mut decorated: Vec<(&str, &T)> = records.iter().map(|r| (r.name(), r)).collect();
    decorated.sort_by(|a, b| a.0.cmp(b.0));
    decorated.into_iter().map(|(_, r)| r.clone()).collect()
}

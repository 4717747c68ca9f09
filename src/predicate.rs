//! Working-set filters. Each returns a new vector preserving input order.

use crate::{
    ast::{Category, Comparison},
    record::Record,
};

/// Records whose state code equals `code` exactly.
pub fn filter_state<'r>(records: &[&'r Record], code: &str) -> Vec<&'r Record> {
    records
        .iter()
        .copied()
        .filter(|r| r.state_code == code)
        .collect()
}

/// Records carrying `category` with a value strictly above or below `threshold`.
///
/// A record without the key is excluded.
pub fn filter_threshold<'r>(
    records: &[&'r Record],
    category: &Category,
    comparison: Comparison,
    threshold: f64,
) -> Vec<&'r Record> {
    records
        .iter()
        .copied()
        .filter(|r| {
            r.figure(category.domain, &category.key)
                .is_some_and(|value| comparison.holds(value, threshold))
        })
        .collect()
}

use indexmap::IndexMap;

use crate::core::data::{ExtractionItem, MergedExtractionItem};

/// Group items by exact key, keeping first-seen key order.
///
/// Occurrences are appended in input order. Params come from the first item
/// of the group that has any.
pub fn merge_results(items: &[ExtractionItem]) -> Vec<MergedExtractionItem> {
    let mut merged: IndexMap<&str, MergedExtractionItem> = IndexMap::new();

    for item in items {
        let entry = merged
            .entry(item.key.as_str())
            .or_insert_with(|| MergedExtractionItem {
                key: item.key.clone(),
                occurrences: Vec::new(),
                has_params: false,
                params: Vec::new(),
            });
        entry.occurrences.push(item.occurrence());
        if !entry.has_params && item.has_params {
            entry.has_params = true;
            entry.params = item.params.clone();
        }
    }

    merged.into_values().collect()
}

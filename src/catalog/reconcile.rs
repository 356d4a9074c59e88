use serde::Serialize;

use crate::catalog::{Catalog, is_untranslated};
use crate::core::data::{contains_placeholder, placeholder_names};

/// Prefix put on a translation whose placeholders don't match the source.
pub const PARAM_MISMATCH_MARKER: &str = "[PARAM_MISMATCH] ";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReconcileOptions {
    /// Drop target keys that are not in the source.
    pub flush: bool,
    /// Overwrite untranslated entries (value == key) with the source value.
    pub remove_untranslated: bool,
    /// Mark translations whose `{name}` placeholders differ from the source.
    pub validate_params: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ReconcileStats {
    pub added: usize,
    pub removed: usize,
    pub unchanged: usize,
    /// Source keys visited.
    pub total: usize,
    /// Entries newly marked with [`PARAM_MISMATCH_MARKER`].
    pub mismatched: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reconciled {
    pub result: Catalog,
    pub stats: ReconcileStats,
}

/// Reconcile `target` against `source`, returning the updated catalog.
pub fn reconcile(source: &Catalog, target: &Catalog, options: &ReconcileOptions) -> Catalog {
    reconcile_with_stats(source, target, options).result
}

/// Reconcile `target` against `source`.
///
/// Target order is kept; new keys are appended in source order.
pub fn reconcile_with_stats(source: &Catalog, target: &Catalog, options: &ReconcileOptions) -> Reconciled {
    let mut result = target.clone();
    let mut stats = ReconcileStats::default();

    if options.flush {
        let before = result.len();
        result.retain(|key, _| source.contains_key(key));
        stats.removed = before - result.len();
    }

    for (key, source_value) in source {
        stats.total += 1;

        let Some(existing) = result.get_mut(key) else {
            result.insert(key.clone(), source_value.clone());
            stats.added += 1;
            continue;
        };

        if options.remove_untranslated && is_untranslated(key, existing) {
            *existing = source_value.clone();
        } else if options.validate_params && contains_placeholder(key) && params_differ(source_value, existing) {
            existing.insert_str(0, PARAM_MISMATCH_MARKER);
            stats.mismatched += 1;
        } else {
            stats.unchanged += 1;
        }
    }

    Reconciled { result, stats }
}

/// Whether placeholder sets differ. Already-marked translations never differ.
fn params_differ(source_value: &str, translation: &str) -> bool {
    if translation.starts_with(PARAM_MISMATCH_MARKER) {
        return false;
    }
    let mut expected = placeholder_names(source_value);
    let mut actual = placeholder_names(translation);
    expected.sort();
    actual.sort();
    expected != actual
}

/// Merge `sources` left to right (later wins), then reconcile `target` against the result.
pub fn merge_multiple(sources: &[Catalog], target: &Catalog, options: &ReconcileOptions) -> Reconciled {
    let mut combined = Catalog::new();
    for source in sources {
        for (key, value) in source {
            combined.insert(key.clone(), value.clone());
        }
    }
    reconcile_with_stats(&combined, target, options)
}

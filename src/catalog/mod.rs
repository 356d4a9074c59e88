//! Locale catalogs: flat key → string JSON maps.
//!
//! - `io`: reading, writing and listing catalog files
//! - `reconcile`: merging extracted keys into existing catalogs
//! - `coverage`: missing/unused keys, coverage, sorting and cleanup
//!
//! Everything except `io` is pure over in-memory maps.

pub mod coverage;
pub mod io;
pub mod reconcile;

use indexmap::IndexMap;

pub use coverage::{Coverage, clean_unused, coverage, find_missing, find_unused, sort_keys};
pub use io::{WriteOptions, list_locale_files, read_catalog, write_catalog};
pub use reconcile::{
    PARAM_MISMATCH_MARKER, ReconcileOptions, ReconcileStats, Reconciled, merge_multiple, reconcile,
    reconcile_with_stats,
};

/// A single locale's translations, in file order.
pub type Catalog = IndexMap<String, String>;

/// A value equal to its own key has not been translated yet.
pub fn is_untranslated(key: &str, value: &str) -> bool {
    key == value
}

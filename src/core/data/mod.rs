//! Data types shared by the extraction pipeline.
//!
//! - `item`: Extracted occurrences and merged catalog keys
//! - `placeholder`: `{name}` placeholder scanning used by extraction and reconciliation

pub mod item;
pub mod placeholder;

pub use item::{ExtractionItem, MergedExtractionItem, Occurrence};
pub use placeholder::{contains_placeholder, placeholder_names};

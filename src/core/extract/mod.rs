//! Translation call extraction.
//!
//! - `call_site`: normalizes swc call shapes into a small tagged union
//! - `walker`: visits a syntax tree and classifies call sites
//! - `pattern`: regex fallback for text that can't be parsed structurally
//! - `script`: built-in JS/TS extraction with the fallback rules
//! - `component`: shared Svelte/Vue flow (structural first, then sections + patterns)

pub mod call_site;
pub mod component;
pub mod options;
pub mod pattern;
pub mod script;
pub mod walker;

pub use options::ExtractOptions;
pub use pattern::{Dialect, PatternExtractor, extract_by_pattern};
pub use script::{ScriptKind, extract_script_file};
pub use walker::{DEFAULT_FUNCTION_NAMES, I18nCall, extract_calls};

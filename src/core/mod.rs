//! Extraction engine.
//!
//! - `parsers`: JS/TS parsing, component section splitting, markup scanners
//! - `extract`: call-site walking, pattern fallback, per-dialect flows
//! - `plugins`: framework plugins and their registry
//! - `file_scanner`: include/exclude file enumeration
//! - `pipeline`: directory, file and in-memory extraction entry points
//! - `merge`: grouping extracted items by key

pub mod data;
pub mod extract;
pub mod file_scanner;
pub mod merge;
pub mod parsers;
pub mod pipeline;
pub mod plugins;

pub use merge::merge_results;
pub use parsers::script::clear_parse_cache;
pub use pipeline::{
    DirectoryExtraction, ExtractionFailure, Progress, extract_from_directory, extract_from_file, extract_from_source,
};
pub use plugins::{Capability, FrameworkPlugin, PluginRegistry};

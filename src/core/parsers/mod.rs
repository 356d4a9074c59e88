//! Source parsers.
//!
//! - `script`: JS/TS structural parsing with swc (strict, tolerant, expression)
//! - `sfc`: boundary-tag splitting of component files into sections
//! - `markup`: structural scanners for Svelte and Vue component markup

pub mod markup;
pub mod script;
pub mod sfc;

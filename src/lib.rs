//! Lingo - translation key extraction and locale catalog maintenance
//!
//! Lingo finds the string literals passed to translation functions (`t('...')`,
//! `$t('...')`, `i18n.t('...')`) in JavaScript, TypeScript, Svelte and Vue
//! sources, and keeps flat JSON locale catalogs in step with them.
//!
//! ## Module Structure
//!
//! - `catalog`: Locale catalog IO, reconciliation and coverage
//! - `cli`: Command-line interface layer
//! - `config`: Configuration file loading and parsing
//! - `core`: Extraction engine (parsers, extractors, plugins, orchestrator)
//! - `utils`: Shared utility functions

pub mod catalog;
pub mod cli;
pub mod config;
pub mod core;
pub mod utils;

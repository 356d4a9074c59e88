//! Built-in JavaScript/TypeScript extraction.
//!
//! JavaScript goes through the error-tolerant parser: a clean tree is walked,
//! a dirty one is replaced by pattern extraction when the caller opted into
//! the fallback, and is an error otherwise. TypeScript parse failures always
//! fall back to pattern extraction.

use std::path::Path;

use tracing::debug;

use crate::core::{
    data::ExtractionItem,
    extract::{
        ExtractOptions,
        pattern::{Dialect, PatternExtractor},
        walker::extract_calls,
    },
    parsers::script::{ParseError, ParseOptions, ParsedScript, parse_script, parse_script_tolerant},
};
use crate::utils::LineIndex;

/// Grammar a piece of script is parsed with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScriptKind {
    JavaScript,
    TypeScript { jsx: bool },
}

impl ScriptKind {
    /// `.ts`/`.tsx` → TypeScript, `.js`/`.jsx`/`.mjs`/`.cjs` → JavaScript.
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext {
            "ts" | "mts" | "cts" => Some(Self::TypeScript { jsx: false }),
            "tsx" => Some(Self::TypeScript { jsx: true }),
            "js" | "jsx" | "mjs" | "cjs" => Some(Self::JavaScript),
            _ => None,
        }
    }

    pub fn from_path(path: &str) -> Option<Self> {
        Path::new(path)
            .extension()
            .and_then(|e| e.to_str())
            .and_then(Self::from_extension)
    }

    fn parse_options(self) -> ParseOptions {
        match self {
            Self::JavaScript => ParseOptions::javascript(),
            Self::TypeScript { jsx } => ParseOptions::typescript(jsx),
        }
    }
}

/// A script embedded in a larger file (or the whole file).
pub struct ScriptSource<'a> {
    pub code: &'a str,
    pub file: &'a str,
    pub kind: ScriptKind,
    /// Line index over the whole enclosing file.
    pub index: &'a LineIndex<'a>,
    /// Where `code` starts inside the enclosing file.
    pub base_offset: usize,
}

/// Extract from a standalone JavaScript/TypeScript file's contents.
pub fn extract_script_file(
    code: &str,
    file: &str,
    kind: ScriptKind,
    options: &ExtractOptions,
) -> Result<Vec<ExtractionItem>, ParseError> {
    let index = LineIndex::new(code);
    extract_script(
        &ScriptSource {
            code,
            file,
            kind,
            index: &index,
            base_offset: 0,
        },
        options,
    )
}

/// Extract translation calls from a script, applying the fallback rules.
pub fn extract_script(source: &ScriptSource<'_>, options: &ExtractOptions) -> Result<Vec<ExtractionItem>, ParseError> {
    let parse_options = source.kind.parse_options().cached().with_path(source.file);

    match source.kind {
        ScriptKind::TypeScript { .. } => match parse_script(source.code, &parse_options) {
            Ok(tree) => Ok(items_from_tree(&tree, source, options)),
            Err(err) => {
                debug!(file = source.file, error = %err, "TypeScript parse failed, using pattern extraction");
                pattern_items(source, options)
            }
        },
        ScriptKind::JavaScript => {
            let parsed = parse_script_tolerant(source.code, &parse_options);
            match (parsed.tree, parsed.diagnostics.into_iter().next()) {
                (Some(tree), None) => Ok(items_from_tree(&tree, source, options)),
                (_, Some(err)) if options.fallback_to_regex => {
                    debug!(file = source.file, error = %err, "JavaScript parse reported errors, using pattern extraction");
                    pattern_items(source, options)
                }
                (_, Some(err)) => Err(err),
                (None, None) => Err(ParseError::new("parser produced no tree").in_file(Some(source.file))),
            }
        }
    }
}

fn items_from_tree(tree: &ParsedScript, source: &ScriptSource<'_>, options: &ExtractOptions) -> Vec<ExtractionItem> {
    extract_calls(tree, &options.function_names)
        .into_iter()
        .map(|call| call.into_item(source.file, source.index, source.base_offset))
        .collect()
}

fn pattern_items(source: &ScriptSource<'_>, options: &ExtractOptions) -> Result<Vec<ExtractionItem>, ParseError> {
    let extractor = PatternExtractor::shared(Dialect::Script, &options.function_names)
        .map_err(|err| ParseError::new(format!("invalid function name pattern: {}", err)).in_file(Some(source.file)))?;
    Ok(extractor.extract_items(source.code, source.file, source.index, source.base_offset))
}

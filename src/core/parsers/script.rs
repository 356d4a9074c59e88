//! Structural parsing of JavaScript/TypeScript source with swc.
//!
//! Two entry points share one parser setup:
//! - [`parse_script`]: strict, any diagnostic becomes a [`ParseError`]
//! - [`parse_script_tolerant`]: returns whatever tree swc recovered plus every diagnostic
//!
//! Successfully parsed trees can be memoized by exact source text (scoped by
//! grammar) so repeated identical input returns the same `Arc`.

use std::{
    collections::HashMap,
    sync::{Arc, LazyLock, Mutex, PoisonError},
};

use swc_common::{BytePos, FileName, GLOBALS, Globals, SourceMap, Spanned, sync::Lrc};
use swc_ecma_ast::{Expr, Module};
use swc_ecma_parser::{EsSyntax, Parser, StringInput, Syntax, TsSyntax, error::Error as SwcError};

use crate::utils::LineIndex;

/// Diagnostic for a structural-parse failure.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{}", describe(.message, .file, .line, .column))]
pub struct ParseError {
    pub message: String,
    pub file: Option<String>,
    pub line: Option<usize>,
    pub column: Option<usize>,
}

fn describe(
    message: &str,
    file: &Option<String>,
    line: &Option<usize>,
    column: &Option<usize>,
) -> String {
    match (file, line, column) {
        (Some(file), Some(line), Some(column)) => format!("{}:{}:{}: {}", file, line, column, message),
        (Some(file), _, _) => format!("{}: {}", file, message),
        (None, Some(line), Some(column)) => format!("{}:{}: {}", line, column, message),
        _ => message.to_string(),
    }
}

impl ParseError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            file: None,
            line: None,
            column: None,
        }
    }

    pub fn at(mut self, line: usize, column: usize) -> Self {
        self.line = Some(line);
        self.column = Some(column);
        self
    }

    pub fn in_file(mut self, file: Option<&str>) -> Self {
        self.file = file.map(str::to_string);
        self
    }
}

/// Grammar and caching options for a parse.
#[derive(Debug, Clone, Default)]
pub struct ParseOptions {
    /// Parse with the TypeScript grammar (type syntax, generics, decorators).
    pub typescript: bool,
    /// Enable JSX element syntax.
    pub jsx: bool,
    /// Memoize successful trees by source text.
    pub use_cache: bool,
    /// Path reported in diagnostics.
    pub source_path: Option<String>,
}

impl ParseOptions {
    pub fn javascript() -> Self {
        Self {
            jsx: true,
            ..Default::default()
        }
    }

    pub fn typescript(jsx: bool) -> Self {
        Self {
            typescript: true,
            jsx,
            ..Default::default()
        }
    }

    pub fn cached(mut self) -> Self {
        self.use_cache = true;
        self
    }

    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.source_path = Some(path.into());
        self
    }

    fn syntax(&self) -> Syntax {
        // Optional chaining, nullish coalescing and dynamic import are always on in swc.
        if self.typescript {
            Syntax::Typescript(TsSyntax {
                tsx: self.jsx,
                decorators: true,
                ..Default::default()
            })
        } else {
            Syntax::Es(EsSyntax {
                jsx: self.jsx,
                decorators: true,
                ..Default::default()
            })
        }
    }
}

/// A parsed module together with the position its source file starts at.
#[derive(Debug)]
pub struct ParsedScript {
    pub module: Module,
    start_pos: BytePos,
}

impl ParsedScript {
    pub fn start_pos(&self) -> BytePos {
        self.start_pos
    }

    /// Byte offset of `pos` within the parsed text.
    pub fn offset_of(&self, pos: BytePos) -> usize {
        pos.0.saturating_sub(self.start_pos.0) as usize
    }
}

/// A single parsed expression (used for template interpolations).
#[derive(Debug)]
pub struct ParsedExpression {
    pub expr: Box<Expr>,
    start_pos: BytePos,
}

impl ParsedExpression {
    pub fn start_pos(&self) -> BytePos {
        self.start_pos
    }

    pub fn offset_of(&self, pos: BytePos) -> usize {
        pos.0.saturating_sub(self.start_pos.0) as usize
    }
}

/// Result of an error-tolerant parse.
#[derive(Debug)]
pub struct TolerantParse {
    /// The (possibly partial) tree, `None` when swc could not produce one.
    pub tree: Option<Arc<ParsedScript>>,
    pub diagnostics: Vec<ParseError>,
}

// ============================================================
// Parse cache
// ============================================================

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct CacheKey {
    typescript: bool,
    jsx: bool,
    source: String,
}

impl CacheKey {
    fn new(source: &str, options: &ParseOptions) -> Self {
        Self {
            typescript: options.typescript,
            jsx: options.jsx,
            source: source.to_string(),
        }
    }
}

static PARSE_CACHE: LazyLock<Mutex<HashMap<CacheKey, Arc<ParsedScript>>>> =
    LazyLock::new(|| Mutex::new(HashMap::new()));

fn cache_get(key: &CacheKey) -> Option<Arc<ParsedScript>> {
    PARSE_CACHE
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .get(key)
        .cloned()
}

fn cache_put(key: CacheKey, tree: Arc<ParsedScript>) {
    PARSE_CACHE
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .insert(key, tree);
}

/// Drop every memoized tree.
pub fn clear_parse_cache() {
    PARSE_CACHE
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .clear();
}

// ============================================================
// Parsing
// ============================================================

struct RawParse<T> {
    result: Result<T, SwcError>,
    recovered: Vec<SwcError>,
    start_pos: BytePos,
}

fn run_parser<T>(
    source: &str,
    options: &ParseOptions,
    parse: impl FnOnce(&mut Parser<swc_ecma_parser::lexer::Lexer<'_>>) -> Result<T, SwcError>,
) -> RawParse<T> {
    // Wrap in GLOBALS.set() for thread safety
    GLOBALS.set(&Globals::new(), || {
        let source_map: Lrc<SourceMap> = Default::default();
        let file_name = match &options.source_path {
            Some(path) => FileName::Real(path.into()),
            None => FileName::Anon,
        };
        let source_file = source_map.new_source_file(file_name.into(), source.to_string());
        let mut parser = Parser::new(options.syntax(), StringInput::from(&*source_file), None);

        let result = parse(&mut parser);
        let recovered = parser.take_errors();

        RawParse {
            result,
            recovered,
            start_pos: source_file.start_pos,
        }
    })
}

fn to_parse_error(
    err: SwcError,
    start_pos: BytePos,
    index: &LineIndex<'_>,
    options: &ParseOptions,
) -> ParseError {
    let lo = err.span().lo;
    let message = err.into_kind().msg().into_owned();
    let error = ParseError::new(message).in_file(options.source_path.as_deref());
    if lo.0 >= start_pos.0 {
        let (line, column) = index.position((lo.0 - start_pos.0) as usize);
        error.at(line, column)
    } else {
        error
    }
}

/// Parse `source` as a module, failing on the first diagnostic.
pub fn parse_script(source: &str, options: &ParseOptions) -> Result<Arc<ParsedScript>, ParseError> {
    let key = options.use_cache.then(|| CacheKey::new(source, options));
    if let Some(key) = &key
        && let Some(hit) = cache_get(key)
    {
        return Ok(hit);
    }

    let raw = run_parser(source, options, |parser| parser.parse_module());
    let index = LineIndex::new(source);

    let module = match raw.result {
        Ok(module) => module,
        Err(err) => return Err(to_parse_error(err, raw.start_pos, &index, options)),
    };
    if let Some(err) = raw.recovered.into_iter().next() {
        return Err(to_parse_error(err, raw.start_pos, &index, options));
    }

    let tree = Arc::new(ParsedScript {
        module,
        start_pos: raw.start_pos,
    });
    if let Some(key) = key {
        cache_put(key, Arc::clone(&tree));
    }
    Ok(tree)
}

/// Parse `source` as a module, keeping partial trees and collecting every diagnostic.
///
/// Only clean parses are memoized; a tree with diagnostics is never served from cache.
pub fn parse_script_tolerant(source: &str, options: &ParseOptions) -> TolerantParse {
    let key = options.use_cache.then(|| CacheKey::new(source, options));
    if let Some(key) = &key
        && let Some(hit) = cache_get(key)
    {
        return TolerantParse {
            tree: Some(hit),
            diagnostics: Vec::new(),
        };
    }

    let raw = run_parser(source, options, |parser| parser.parse_module());
    let index = LineIndex::new(source);
    let start_pos = raw.start_pos;

    let mut diagnostics: Vec<ParseError> = raw
        .recovered
        .into_iter()
        .map(|err| to_parse_error(err, start_pos, &index, options))
        .collect();

    let tree = match raw.result {
        Ok(module) => Some(Arc::new(ParsedScript { module, start_pos })),
        Err(err) => {
            diagnostics.push(to_parse_error(err, start_pos, &index, options));
            None
        }
    };

    if let (Some(key), Some(tree)) = (key, &tree)
        && diagnostics.is_empty()
    {
        cache_put(key, Arc::clone(tree));
    }

    TolerantParse { tree, diagnostics }
}

/// Parse a standalone expression, e.g. the body of a template interpolation.
pub fn parse_expression(source: &str, options: &ParseOptions) -> Result<ParsedExpression, ParseError> {
    let raw = run_parser(source, options, |parser| parser.parse_expr());
    let index = LineIndex::new(source);

    let expr = match raw.result {
        Ok(expr) => expr,
        Err(err) => return Err(to_parse_error(err, raw.start_pos, &index, options)),
    };
    if let Some(err) = raw.recovered.into_iter().next() {
        return Err(to_parse_error(err, raw.start_pos, &index, options));
    }

    Ok(ParsedExpression {
        expr,
        start_pos: raw.start_pos,
    })
}

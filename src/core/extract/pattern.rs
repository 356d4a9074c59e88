//! Pattern-based fallback extraction.
//!
//! Used when structural parsing is unavailable or fails, and for template
//! markup that has no JS grammar. Every pattern is produced by one builder
//! parameterized by quote character and calling convention; the literal
//! body is matched as a run of "not the quote and not a backslash" or
//! "backslash plus any character", so escaped quotes never end a match.
//!
//! Matched literals are normalized in a fixed order:
//! 1. unescape `\'` `\"` `` \` `` `\n` `\t` `\r` `\\`
//! 2. collapse whitespace runs that span a newline into one space
//! 3. trim

use std::{
    collections::{HashMap, HashSet},
    sync::{Arc, LazyLock, Mutex, PoisonError},
};

use regex::Regex;

use crate::core::data::ExtractionItem;
use crate::utils::LineIndex;

const QUOTES: [char; 3] = ['\'', '"', '`'];

/// Source dialect the text comes from; selects the calling conventions scanned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dialect {
    /// Plain JS/TS code.
    Script,
    /// Svelte markup: `{$t('...')}`.
    Svelte,
    /// Vue templates: `{{ $t('...') }}`, `:attr="$t('...')"`, `v-t="'...'"`.
    Vue,
}

/// How a translation call is written in the text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CallConvention {
    /// `$t('...')`, `t('...')`
    Bare,
    /// `this.$t('...')`, `i18n.t('...')`
    Method,
    /// `{$t('...')}`
    BraceWrapped,
    /// `{{ $t('...') }}`
    DoubleBrace,
    /// `:title="$t('...')"`, `v-bind:title="$t('...')"`
    BoundAttribute,
}

impl CallConvention {
    fn for_dialect(dialect: Dialect) -> &'static [CallConvention] {
        match dialect {
            Dialect::Script => &[Self::Bare, Self::Method],
            Dialect::Svelte => &[Self::Bare, Self::Method, Self::BraceWrapped],
            Dialect::Vue => &[
                Self::Bare,
                Self::Method,
                Self::DoubleBrace,
                Self::BoundAttribute,
            ],
        }
    }

    /// `(wrapper prefix, receiver)` for this convention.
    fn parts(self, quote: char) -> (String, &'static str) {
        const NOT_CHAINED: &str = r"(?:^|[^\w$.])";
        const RECEIVER: &str = r"(?:[A-Za-z_$][\w$]*\s*\??\.\s*)+";
        match self {
            Self::Bare => (NOT_CHAINED.to_string(), ""),
            Self::Method => (NOT_CHAINED.to_string(), RECEIVER),
            Self::BraceWrapped => (r"\{\s*".to_string(), ""),
            Self::DoubleBrace => (r"\{\{\s*".to_string(), ""),
            Self::BoundAttribute => {
                let attr_quote = match quote {
                    '\'' => "\"".to_string(),
                    '"' => "'".to_string(),
                    _ => "[\"']".to_string(),
                };
                (format!(r"(?:^|\s)(?::|v-bind:)[\w.:-]+\s*=\s*{}\s*", attr_quote), "")
            }
        }
    }
}

/// Escape-tolerant literal body for `quote`.
fn literal_body(quote: char) -> String {
    let q = regex::escape(&quote.to_string());
    format!(r"(?:[^{q}\\]|\\.)*")
}

/// Build the pattern for one quote style and wrapper.
///
/// Capture group `call` spans the call from receiver to the opening quote,
/// group `key` is the raw literal body.
pub fn build_call_pattern(
    quote: char,
    prefix: &str,
    receiver: &str,
    function_names: &[String],
) -> Result<Regex, regex::Error> {
    let mut names: Vec<String> = function_names.iter().map(|n| regex::escape(n)).collect();
    // Longest first so `$t` wins over `t`
    names.sort_by_key(|n| std::cmp::Reverse(n.len()));
    let q = regex::escape(&quote.to_string());
    Regex::new(&format!(
        r"(?s){prefix}(?P<call>{receiver}(?:{names})\s*\(\s*){q}(?P<key>{body}){q}\s*[,)]",
        names = names.join("|"),
        body = literal_body(quote),
    ))
}

/// `v-t="'literal'"` directive.
fn build_directive_pattern(quote: char) -> Result<Regex, regex::Error> {
    let attr_quote = if quote == '"' { '\'' } else { '"' };
    let q = regex::escape(&quote.to_string());
    Regex::new(&format!(
        r"(?s)(?:^|\s)(?P<call>v-t\s*=\s*{aq}\s*){q}(?P<key>{body}){q}\s*{aq}",
        aq = attr_quote,
        body = literal_body(quote),
    ))
}

static MULTILINE_WHITESPACE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s*\n\s*").unwrap());

/// Normalize a raw matched literal into a catalog key.
pub fn normalize_literal(raw: &str) -> String {
    let unescaped = raw
        .replace("\\'", "'")
        .replace("\\\"", "\"")
        .replace("\\`", "`")
        .replace("\\n", "\n")
        .replace("\\t", "\t")
        .replace("\\r", "\r")
        .replace("\\\\", "\\");
    MULTILINE_WHITESPACE
        .replace_all(&unescaped, " ")
        .trim()
        .to_string()
}

/// Whether a raw template body holds an unescaped `${`.
fn has_interpolation(raw: &str) -> bool {
    let mut chars = raw.chars();
    while let Some(c) = chars.next() {
        match c {
            '\\' => {
                chars.next();
            }
            '$' if chars.clone().next() == Some('{') => return true,
            _ => {}
        }
    }
    false
}

/// A literal found by pattern matching.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatternMatch {
    pub key: String,
    /// Byte offset of the call (receiver or function name) in the scanned text.
    pub offset: usize,
}

/// Compiled pattern battery for one dialect and set of function names.
#[derive(Debug)]
pub struct PatternExtractor {
    patterns: Vec<Regex>,
}

type ExtractorCacheKey = (Dialect, Vec<String>);

static EXTRACTORS: LazyLock<Mutex<HashMap<ExtractorCacheKey, Arc<PatternExtractor>>>> =
    LazyLock::new(|| Mutex::new(HashMap::new()));

impl PatternExtractor {
    pub fn new(dialect: Dialect, function_names: &[String]) -> Result<Self, regex::Error> {
        let mut patterns = Vec::new();
        for &convention in CallConvention::for_dialect(dialect) {
            for quote in QUOTES {
                let (prefix, receiver) = convention.parts(quote);
                patterns.push(build_call_pattern(quote, &prefix, receiver, function_names)?);
            }
        }
        if dialect == Dialect::Vue {
            for quote in ['\'', '"'] {
                patterns.push(build_directive_pattern(quote)?);
            }
        }
        Ok(Self { patterns })
    }

    /// Compiled extractor shared across calls with the same dialect and names.
    pub fn shared(dialect: Dialect, function_names: &[String]) -> Result<Arc<Self>, regex::Error> {
        let key = (dialect, function_names.to_vec());
        let mut cache = EXTRACTORS.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(extractor) = cache.get(&key) {
            return Ok(Arc::clone(extractor));
        }
        let extractor = Arc::new(Self::new(dialect, function_names)?);
        cache.insert(key, Arc::clone(&extractor));
        Ok(extractor)
    }

    /// Every distinct key in `text`, first occurrence wins, in text order.
    pub fn find(&self, text: &str) -> Vec<PatternMatch> {
        let mut matches: Vec<PatternMatch> = Vec::new();
        for pattern in &self.patterns {
            for caps in pattern.captures_iter(text) {
                let (Some(call), Some(key)) = (caps.name("call"), caps.name("key")) else {
                    continue;
                };
                if text[..key.start()].ends_with('`') && has_interpolation(key.as_str()) {
                    continue;
                }
                let key = normalize_literal(key.as_str());
                if key.is_empty() {
                    continue;
                }
                matches.push(PatternMatch {
                    key,
                    offset: call.start(),
                });
            }
        }
        matches.sort_by_key(|m| m.offset);

        let mut seen: HashSet<String> = HashSet::new();
        matches.retain(|m| seen.insert(m.key.clone()));
        matches
    }

    /// Keys only, for generic template scanning.
    pub fn extract_keys(&self, text: &str) -> Vec<String> {
        self.find(text).into_iter().map(|m| m.key).collect()
    }

    /// Positioned items; `text` starts at `base_offset` of the file `index` covers.
    pub fn extract_items(
        &self,
        text: &str,
        file: &str,
        index: &LineIndex<'_>,
        base_offset: usize,
    ) -> Vec<ExtractionItem> {
        self.find(text)
            .into_iter()
            .map(|m| {
                let (line, column) = index.position(base_offset + m.offset);
                ExtractionItem::new(m.key, file, line, column)
            })
            .collect()
    }
}

/// Convenience wrapper: keys found in `text` for a dialect.
pub fn extract_by_pattern(
    text: &str,
    dialect: Dialect,
    function_names: &[String],
) -> Result<Vec<String>, regex::Error> {
    Ok(PatternExtractor::shared(dialect, function_names)?.extract_keys(text))
}

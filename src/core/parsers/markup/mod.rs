//! Structural parsers for component markup.
//!
//! A [`ComponentParser`] turns a `.svelte`/`.vue` file into a flat
//! [`ComponentTree`]: the script blocks plus every embedded expression the
//! template evaluates (interpolations, bound attributes, event handlers,
//! block conditions). Expressions are kept as source slices with their file
//! offset so the JS parser and call-site walker can process them like any
//! other script.
//!
//! Parsers fail on structurally broken markup (unclosed tags, comments,
//! interpolations or quotes) so the caller can fall back to section
//! splitting and pattern extraction.

pub mod svelte;
pub mod vue;

pub use svelte::SvelteMarkupParser;
pub use vue::VueMarkupParser;

use crate::core::parsers::{
    script::ParseError,
    sfc::{declares_module_context, declares_typescript},
};
use crate::utils::LineIndex;

/// One node of interest in a component file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MarkupNode {
    /// A `<script>` block body.
    Script {
        content: String,
        offset: usize,
        typescript: bool,
        module: bool,
    },
    /// A template expression, e.g. the inside of `{...}` or `{{ ... }}`.
    Expression { source: String, offset: usize },
    /// A directive whose value is a string literal key, e.g. `v-t="'Hello'"`.
    /// `raw` is the literal body without quotes, still escaped.
    LiteralKey { raw: String, offset: usize },
}

/// Everything a parser found, in source order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ComponentTree {
    pub nodes: Vec<MarkupNode>,
}

impl ComponentTree {
    /// True when any script block is TypeScript; template expressions use the same grammar.
    pub fn is_typescript(&self) -> bool {
        self.nodes
            .iter()
            .any(|n| matches!(n, MarkupNode::Script { typescript: true, .. }))
    }
}

/// A dialect's structural parser.
pub trait ComponentParser: Send + Sync {
    /// Dialect name, for diagnostics.
    fn name(&self) -> &'static str;

    fn parse(&self, source: &str) -> Result<ComponentTree, ParseError>;
}

// ============================================================
// Shared scanning helpers
// ============================================================

/// Structural error positioned at `offset` in `source`.
pub(crate) fn error_at(source: &str, offset: usize, message: impl Into<String>) -> ParseError {
    let (line, column) = LineIndex::new(source).position(offset);
    ParseError::new(message).at(line, column)
}

/// Case-insensitive ASCII prefix check at `at`.
pub(crate) fn starts_with_ci(source: &str, at: usize, prefix: &str) -> bool {
    source
        .as_bytes()
        .get(at..at + prefix.len())
        .is_some_and(|s| s.eq_ignore_ascii_case(prefix.as_bytes()))
}

/// If `<!--` starts at `at`, return the offset just after its `-->`.
pub(crate) fn skip_comment(source: &str, at: usize) -> Result<Option<usize>, ParseError> {
    if !source[at..].starts_with("<!--") {
        return Ok(None);
    }
    match source[at + 4..].find("-->") {
        Some(end) => Ok(Some(at + 4 + end + 3)),
        None => Err(error_at(source, at, "unclosed comment")),
    }
}

/// A `<script>`/`<style>` element whose body is not markup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct RawElement<'a> {
    pub attrs: &'a str,
    pub body: &'a str,
    pub body_start: usize,
    /// Offset just after the closing tag.
    pub end: usize,
}

impl RawElement<'_> {
    pub fn into_script_node(self) -> MarkupNode {
        MarkupNode::Script {
            content: self.body.to_string(),
            offset: self.body_start,
            typescript: declares_typescript(self.attrs),
            module: declares_module_context(self.attrs),
        }
    }
}

/// If a `<tag ...>` raw-text element starts at `at`, return it.
pub(crate) fn raw_element<'a>(source: &'a str, at: usize, tag: &str) -> Result<Option<RawElement<'a>>, ParseError> {
    let open = format!("<{}", tag);
    if !starts_with_ci(source, at, &open) {
        return Ok(None);
    }
    let after_name = at + open.len();
    match source.as_bytes().get(after_name) {
        Some(b) if b.is_ascii_whitespace() || *b == b'>' || *b == b'/' => {}
        _ => return Ok(None),
    }
    let Some(gt) = source[after_name..].find('>') else {
        return Err(error_at(source, at, format!("unclosed <{}> tag", tag)));
    };
    let open_end = after_name + gt;
    let attrs = source[after_name..open_end].trim_end_matches('/');
    let body_start = open_end + 1;

    let close = format!("</{}", tag);
    let lowered = source[body_start..].to_ascii_lowercase();
    let Some(rel) = lowered.find(&close) else {
        return Err(error_at(source, at, format!("<{}> is never closed", tag)));
    };
    let close_start = body_start + rel;
    let Some(close_gt) = source[close_start..].find('>') else {
        return Err(error_at(source, close_start, format!("unclosed </{}> tag", tag)));
    };

    Ok(Some(RawElement {
        attrs,
        body: &source[body_start..close_start],
        body_start,
        end: close_start + close_gt + 1,
    }))
}

/// Offset of the `}` matching the `{` at `open`, skipping string and
/// template literals (including nested `${...}`).
pub(crate) fn matching_brace(source: &str, open: usize) -> Option<usize> {
    let bytes = source.as_bytes();
    // b'{' = code nesting level, b'`' = inside a template literal
    let mut stack: Vec<u8> = vec![b'{'];
    let mut i = open + 1;

    while i < bytes.len() {
        let c = bytes[i];
        if stack.last() == Some(&b'`') {
            match c {
                b'\\' => i += 1,
                b'`' => {
                    stack.pop();
                }
                b'$' if bytes.get(i + 1) == Some(&b'{') => {
                    stack.push(b'{');
                    i += 1;
                }
                _ => {}
            }
        } else {
            match c {
                b'\'' | b'"' => i = string_end(bytes, i)?,
                b'`' => stack.push(b'`'),
                b'{' => stack.push(b'{'),
                b'}' => {
                    stack.pop();
                    if stack.is_empty() {
                        return Some(i);
                    }
                }
                _ => {}
            }
        }
        i += 1;
    }
    None
}

/// Offset of the closing quote for the string starting at `start`.
fn string_end(bytes: &[u8], start: usize) -> Option<usize> {
    let quote = bytes[start];
    let mut i = start + 1;
    while i < bytes.len() {
        match bytes[i] {
            b'\\' => i += 1,
            b'\n' => return None,
            c if c == quote => return Some(i),
            _ => {}
        }
        i += 1;
    }
    None
}

/// Trim whitespace around `source[start..end]`, returning the narrowed range.
pub(crate) fn trim_range(source: &str, start: usize, end: usize) -> (usize, usize) {
    let slice = &source[start..end];
    let lead = slice.len() - slice.trim_start().len();
    let trail = slice.len() - slice.trim_end().len();
    if lead == slice.len() {
        return (start, start);
    }
    (start + lead, end - trail)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use crate::core::parsers::markup::*;

    #[test]
    fn test_matching_brace_simple() {
        let src = "{a + {b: 1}} tail";
        assert_eq!(matching_brace(src, 0), Some(11));
    }

    #[test]
    fn test_matching_brace_ignores_braces_in_strings() {
        let src = r#"{t('}{', "}") }"#;
        assert_eq!(matching_brace(src, 0), Some(src.len() - 1));
    }

    #[test]
    fn test_matching_brace_template_literal() {
        let src = "{`a ${ {x: 1}.x } }` }";
        assert_eq!(matching_brace(src, 0), Some(src.len() - 1));
    }

    #[test]
    fn test_matching_brace_escaped_quote() {
        let src = r"{t('Don\'t')}";
        assert_eq!(matching_brace(src, 0), Some(src.len() - 1));
    }

    #[test]
    fn test_matching_brace_unbalanced() {
        assert_eq!(matching_brace("{a + {b}", 0), None);
        assert_eq!(matching_brace("{t('open}", 0), None);
    }

    #[test]
    fn test_raw_element() {
        let src = "<p/><script lang=\"ts\">let a = 1;</SCRIPT>after";
        let el = raw_element(src, 4, "script").unwrap().unwrap();
        assert_eq!(el.body, "let a = 1;");
        assert_eq!(&src[el.end..], "after");
        assert!(declares_typescript(el.attrs));
    }

    #[test]
    fn test_raw_element_needs_tag_boundary() {
        assert!(raw_element("<scripts>", 0, "script").unwrap().is_none());
    }

    #[test]
    fn test_raw_element_unclosed() {
        let err = raw_element("\n<script>let a;", 1, "script").unwrap_err();
        assert_eq!((err.line, err.column), (Some(2), Some(1)));
    }

    #[test]
    fn test_skip_comment() {
        assert_eq!(skip_comment("<!-- x -->y", 0).unwrap(), Some(10));
        assert_eq!(skip_comment("<p>", 0).unwrap(), None);
        assert!(skip_comment("<!-- open", 0).is_err());
    }

    #[test]
    fn test_trim_range() {
        assert_eq!(trim_range("{  a  }", 1, 6), (3, 4));
        assert_eq!(trim_range("{   }", 1, 4), (1, 1));
    }
}

//! Svelte component scanner.
//!
//! Every `{...}` outside script/style/comments is an expression: text
//! interpolations, attribute values, and block tags. Block tags contribute
//! only their expression part:
//!
//! ```text
//! {#if cond}          → cond
//! {:else if cond}     → cond
//! {#each items as x}  → items
//! {#await p then v}   → p
//! {#key value}        → value
//! {@html content}     → content
//! {@render snip()}    → snip()
//! {@const x = expr}   → expr
//! {:else} {/if} ...   → nothing
//! ```

use crate::core::parsers::{
    markup::{
        ComponentParser, ComponentTree, MarkupNode, error_at, matching_brace, raw_element, skip_comment,
        trim_range,
    },
    script::ParseError,
};

/// Built-in structural parser for `.svelte` files.
#[derive(Debug, Clone, Copy, Default)]
pub struct SvelteMarkupParser;

impl ComponentParser for SvelteMarkupParser {
    fn name(&self) -> &'static str {
        "svelte"
    }

    fn parse(&self, source: &str) -> Result<ComponentTree, ParseError> {
        let mut nodes = Vec::new();
        let bytes = source.as_bytes();
        let mut i = 0;

        while i < bytes.len() {
            match bytes[i] {
                b'<' => {
                    if let Some(end) = skip_comment(source, i)? {
                        i = end;
                    } else if let Some(script) = raw_element(source, i, "script")? {
                        i = script.end;
                        nodes.push(script.into_script_node());
                    } else if let Some(style) = raw_element(source, i, "style")? {
                        i = style.end;
                    } else {
                        i += 1;
                    }
                }
                b'{' => {
                    let Some(close) = matching_brace(source, i) else {
                        return Err(error_at(source, i, "unclosed `{` expression"));
                    };
                    if let Some((start, end)) = block_expression(source, i + 1, close) {
                        nodes.push(MarkupNode::Expression {
                            source: source[start..end].to_string(),
                            offset: start,
                        });
                    }
                    i = close + 1;
                }
                b'}' => return Err(error_at(source, i, "unexpected `}`")),
                _ => i += 1,
            }
        }

        Ok(ComponentTree { nodes })
    }
}

/// Range of the evaluated expression inside `{...}` spanning `start..end`.
fn block_expression(source: &str, start: usize, end: usize) -> Option<(usize, usize)> {
    let (start, end) = trim_range(source, start, end);
    let inner = &source[start..end];
    let first = inner.chars().next()?;

    let (start, end) = match first {
        '#' | ':' | '@' => {
            let word_len = inner.find(char::is_whitespace).unwrap_or(inner.len());
            let word = &inner[..word_len];
            let rest = start + word_len;
            match word {
                "#if" | "#key" | "@html" | "@render" => (rest, end),
                "#each" => (rest, cut_at(source, rest, end, " as ")),
                "#await" => (rest, cut_at(source, rest, end, " then ")),
                ":else" => {
                    let rest_text = source[rest..end].trim_start();
                    let keyword = rest_text.strip_prefix("if")?;
                    if !keyword.starts_with(char::is_whitespace) {
                        return None;
                    }
                    (end - keyword.len(), end)
                }
                "@const" => {
                    let eq = source[rest..end].find('=')?;
                    (rest + eq + 1, end)
                }
                _ => return None,
            }
        }
        '/' => return None,
        _ => (start, end),
    };

    let (start, end) = trim_range(source, start, end);
    (start < end).then_some((start, end))
}

fn cut_at(source: &str, start: usize, end: usize, marker: &str) -> usize {
    source[start..end]
        .find(marker)
        .map_or(end, |pos| start + pos)
}

//! Vue single-file-component scanner.
//!
//! Expressions come from `{{ ... }}` interpolations and from directive
//! attributes: `:prop` / `v-bind:prop`, `@event` / `v-on:event`, `v-if`,
//! `v-else-if`, `v-show`, `v-html`, `v-text` and the iterable of `v-for`.
//! `v-t="'Key'"` yields the literal directly.

use crate::core::parsers::{
    markup::{
        ComponentParser, ComponentTree, MarkupNode, error_at, matching_brace, raw_element, skip_comment,
        trim_range,
    },
    script::ParseError,
};

/// Built-in structural parser for `.vue` files.
#[derive(Debug, Clone, Copy, Default)]
pub struct VueMarkupParser;

impl ComponentParser for VueMarkupParser {
    fn name(&self) -> &'static str {
        "vue"
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
                    } else if bytes.get(i + 1).is_some_and(|b| b.is_ascii_alphabetic()) {
                        i = parse_tag(source, i, &mut nodes)?;
                    } else if matches!(bytes.get(i + 1), Some(b'/' | b'!')) {
                        let Some(gt) = source[i..].find('>') else {
                            return Err(error_at(source, i, "unclosed tag"));
                        };
                        i += gt + 1;
                    } else {
                        i += 1;
                    }
                }
                b'{' if bytes.get(i + 1) == Some(&b'{') => {
                    let close = matching_brace(source, i + 1)
                        .filter(|&close| bytes.get(close + 1) == Some(&b'}'))
                        .ok_or_else(|| error_at(source, i, "unclosed `{{` interpolation"))?;
                    push_expression(source, i + 2, close, &mut nodes);
                    i = close + 2;
                }
                _ => i += 1,
            }
        }

        Ok(ComponentTree { nodes })
    }
}

fn push_expression(source: &str, start: usize, end: usize, nodes: &mut Vec<MarkupNode>) {
    let (start, end) = trim_range(source, start, end);
    if start < end {
        nodes.push(MarkupNode::Expression {
            source: source[start..end].to_string(),
            offset: start,
        });
    }
}

/// Scan an opening tag starting at `at`, collecting directive expressions.
/// Returns the offset just after the tag.
fn parse_tag(source: &str, at: usize, nodes: &mut Vec<MarkupNode>) -> Result<usize, ParseError> {
    let bytes = source.as_bytes();
    let unclosed = || error_at(source, at, "unclosed tag");

    let mut i = at + 1;
    while i < bytes.len() && !is_name_end(bytes[i]) {
        i += 1;
    }

    loop {
        while i < bytes.len() && bytes[i].is_ascii_whitespace() {
            i += 1;
        }
        match bytes.get(i) {
            None => return Err(unclosed()),
            Some(b'>') => return Ok(i + 1),
            Some(b'/') if bytes.get(i + 1) == Some(&b'>') => return Ok(i + 2),
            Some(b'/' | b'=') => {
                i += 1;
                continue;
            }
            Some(_) => {}
        }

        let name_start = i;
        while i < bytes.len() && !is_name_end(bytes[i]) && bytes[i] != b'=' {
            i += 1;
        }
        let name = &source[name_start..i];

        while i < bytes.len() && bytes[i].is_ascii_whitespace() {
            i += 1;
        }
        if bytes.get(i) != Some(&b'=') {
            continue;
        }
        i += 1;
        while i < bytes.len() && bytes[i].is_ascii_whitespace() {
            i += 1;
        }

        let (value_start, value_end) = match bytes.get(i) {
            None => return Err(unclosed()),
            Some(&quote @ (b'"' | b'\'')) => {
                let Some(len) = source[i + 1..].find(quote as char) else {
                    return Err(error_at(source, i, format!("unclosed attribute value for `{}`", name)));
                };
                let range = (i + 1, i + 1 + len);
                i = range.1 + 1;
                range
            }
            Some(_) => {
                let start = i;
                while i < bytes.len() && !bytes[i].is_ascii_whitespace() && bytes[i] != b'>' {
                    i += 1;
                }
                (start, i)
            }
        };

        attribute_node(source, name, value_start, value_end, nodes);
    }
}

fn is_name_end(b: u8) -> bool {
    b.is_ascii_whitespace() || b == b'>' || b == b'/'
}

fn attribute_node(source: &str, name: &str, start: usize, end: usize, nodes: &mut Vec<MarkupNode>) {
    match name {
        "v-t" => {
            let (start, end) = trim_range(source, start, end);
            let value = &source[start..end];
            let quoted = value.len() >= 2
                && matches!(value.as_bytes()[0], b'\'' | b'"' | b'`')
                && value.as_bytes()[0] == value.as_bytes()[value.len() - 1];
            if quoted {
                nodes.push(MarkupNode::LiteralKey {
                    raw: value[1..value.len() - 1].to_string(),
                    offset: start,
                });
            } else {
                push_expression(source, start, end, nodes);
            }
        }
        "v-for" => {
            let value = &source[start..end];
            let iterable = [" in ", " of "]
                .iter()
                .filter_map(|sep| value.find(sep).map(|pos| pos + sep.len()))
                .min();
            if let Some(offset) = iterable {
                push_expression(source, start + offset, end, nodes);
            }
        }
        "v-if" | "v-else-if" | "v-show" | "v-html" | "v-text" => push_expression(source, start, end, nodes),
        _ if name.starts_with(':')
            || name.starts_with('@')
            || name.starts_with("v-bind:")
            || name.starts_with("v-on:") =>
        {
            push_expression(source, start, end, nodes)
        }
        _ => {}
    }
}

//! Shared extraction flow for component files (Svelte, Vue).
//!
//! 1. Structural path: parse the markup, walk script blocks and every
//!    template expression with the call-site walker.
//! 2. Section fallback, taken when there is no parser, the parse fails, or
//!    the structural path finds nothing: split into sections, walk script
//!    sections, scan the template with the dialect's patterns.
//! 3. Deduplicate by key, earliest occurrence in the file wins.

use std::collections::HashSet;

use anyhow::Result;
use tracing::debug;

use crate::core::{
    data::ExtractionItem,
    extract::{
        ExtractOptions,
        pattern::{Dialect, PatternExtractor, normalize_literal},
        script::{ScriptKind, ScriptSource, extract_script},
        walker::{extract_calls, extract_calls_from_expr},
    },
    parsers::{
        markup::{ComponentParser, MarkupNode},
        script::{ParseError, ParseOptions, parse_expression, parse_script},
        sfc::split_sections,
    },
};
use crate::utils::LineIndex;

/// Extract from a component file's contents.
pub fn extract_component(
    code: &str,
    file: &str,
    dialect: Dialect,
    parser: Option<&dyn ComponentParser>,
    options: &ExtractOptions,
) -> Result<Vec<ExtractionItem>> {
    let index = LineIndex::new(code);

    if let Some(parser) = parser {
        match structural_items(code, file, parser, &index, options) {
            Ok(items) if !items.is_empty() => return Ok(dedup_by_key(items)),
            Ok(_) => debug!(file, parser = parser.name(), "no calls found structurally, scanning sections"),
            Err(err) => debug!(file, parser = parser.name(), error = %err, "component parse failed, scanning sections"),
        }
    }

    let items = section_items(code, file, dialect, &index, options)?;
    Ok(dedup_by_key(items))
}

fn structural_items(
    code: &str,
    file: &str,
    parser: &dyn ComponentParser,
    index: &LineIndex<'_>,
    options: &ExtractOptions,
) -> Result<Vec<ExtractionItem>, ParseError> {
    let tree = parser.parse(code).map_err(|err| err.in_file(Some(file)))?;
    let names = &options.function_names;
    let expr_options = if tree.is_typescript() {
        ParseOptions::typescript(false)
    } else {
        ParseOptions::javascript()
    };

    let mut items = Vec::new();
    for node in &tree.nodes {
        match node {
            MarkupNode::Script {
                content,
                offset,
                typescript,
                ..
            } => {
                let script_options = if *typescript {
                    ParseOptions::typescript(false)
                } else {
                    ParseOptions::javascript()
                };
                let script = parse_script(content, &script_options.cached().with_path(file))?;
                items.extend(
                    extract_calls(&script, names)
                        .into_iter()
                        .map(|call| call.into_item(file, index, *offset)),
                );
            }
            MarkupNode::Expression { source, offset } => {
                // Parenthesized so the whole slice has to be one expression
                let wrapped = format!("({}\n)", source);
                let (calls, base) = match parse_expression(&wrapped, &expr_options) {
                    Ok(expr) => (extract_calls_from_expr(&expr, names), offset.saturating_sub(1)),
                    // Event handlers may hold statements: `a(); b()`
                    Err(_) => match parse_script(source, &expr_options) {
                        Ok(script) => (extract_calls(&script, names), *offset),
                        Err(err) => {
                            debug!(file, offset, error = %err, "skipping unparseable template expression");
                            continue;
                        }
                    },
                };
                items.extend(calls.into_iter().map(|call| call.into_item(file, index, base)));
            }
            MarkupNode::LiteralKey { raw, offset } => {
                let key = normalize_literal(raw);
                if !key.is_empty() {
                    let (line, column) = index.position(*offset);
                    items.push(ExtractionItem::new(key, file, line, column));
                }
            }
        }
    }
    Ok(items)
}

fn section_items(
    code: &str,
    file: &str,
    dialect: Dialect,
    index: &LineIndex<'_>,
    options: &ExtractOptions,
) -> Result<Vec<ExtractionItem>> {
    let sections = split_sections(code);
    let mut items = Vec::new();

    for section in sections.scripts() {
        let kind = if section.is_typescript() {
            ScriptKind::TypeScript { jsx: false }
        } else {
            ScriptKind::JavaScript
        };
        items.extend(extract_script(
            &ScriptSource {
                code: &section.content,
                file,
                kind,
                index,
                base_offset: section.start_offset,
            },
            options,
        )?);
    }

    if let Some(template) = &sections.template {
        let extractor = PatternExtractor::shared(dialect, &options.function_names)?;
        items.extend(extractor.extract_items(&template.content, file, index, template.start_offset));
    }

    Ok(items)
}

/// Keep the earliest occurrence of each key.
pub fn dedup_by_key(mut items: Vec<ExtractionItem>) -> Vec<ExtractionItem> {
    items.sort_by_key(|item| (item.line, item.column));
    let mut seen = HashSet::new();
    items.retain(|item| seen.insert(item.key.clone()));
    items
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use crate::core::extract::component::*;
    use crate::core::parsers::markup::{SvelteMarkupParser, VueMarkupParser};

    fn keys(items: &[ExtractionItem]) -> Vec<&str> {
        items.iter().map(|i| i.key.as_str()).collect()
    }

    const SVELTE: &str = r#"<script>
  const greeting = $t('Hello {name}', { values: { name } });
</script>

<h1>{greeting}</h1>
<p title={$t('Tooltip')}>{$t('Body')}</p>
{#if ok}<span>{$t('Hello {name}')}</span>{/if}
"#;

    #[test]
    fn test_svelte_structural() {
        let items =
            extract_component(SVELTE, "A.svelte", Dialect::Svelte, Some(&SvelteMarkupParser), &ExtractOptions::default())
                .unwrap();
        assert_eq!(keys(&items), vec!["Hello {name}", "Tooltip", "Body"]);
        assert_eq!((items[0].line, items[0].column), (2, 20));
        assert_eq!(items[0].params, vec!["name"]);
        assert_eq!((items[1].line, items[1].column), (6, 11));
    }

    #[test]
    fn test_svelte_without_parser_uses_sections() {
        let items = extract_component(SVELTE, "A.svelte", Dialect::Svelte, None, &ExtractOptions::default()).unwrap();
        assert_eq!(keys(&items), vec!["Hello {name}", "Tooltip", "Body"]);
        assert_eq!((items[2].line, items[2].column), (6, 27));
    }

    #[test]
    fn test_broken_markup_falls_back() {
        let code = "<p>{$t('Unclosed')</p>";
        let items =
            extract_component(code, "B.svelte", Dialect::Svelte, Some(&SvelteMarkupParser), &ExtractOptions::default())
                .unwrap();
        assert_eq!(keys(&items), vec!["Unclosed"]);
    }

    #[test]
    fn test_empty_structural_result_falls_back() {
        // Not a valid expression, so the structural walk finds nothing
        let code = "<p>{$t('Partial') +}</p>";
        let items =
            extract_component(code, "C.svelte", Dialect::Svelte, Some(&SvelteMarkupParser), &ExtractOptions::default())
                .unwrap();
        assert_eq!(keys(&items), vec!["Partial"]);
    }

    #[test]
    fn test_interpolated_template_yields_nothing() {
        let code = "<p>{$t(`Hello ${name}`)}</p>";
        let items =
            extract_component(code, "D.svelte", Dialect::Svelte, Some(&SvelteMarkupParser), &ExtractOptions::default())
                .unwrap();
        assert!(items.is_empty());

        let code = "<p>{{ $t(`Hi ${user}`) }}</p>\n<span>{{ t(`Plain`) }}</span>";
        let items = extract_component(code, "E.vue", Dialect::Vue, None, &ExtractOptions::default()).unwrap();
        assert_eq!(keys(&items), vec!["Plain"]);
    }

    #[test]
    fn test_vue_structural() {
        let code = r#"<template>
  <div :title="$t('Title')">{{ $t('Hello') }}</div>
  <span v-t="'Directive'"></span>
  <button @click="save(); notify(t('Saved'))">{{ t('Hello') }}</button>
</template>
<script setup lang="ts">
const label: string = t('Script')
</script>
"#;
        let items =
            extract_component(code, "V.vue", Dialect::Vue, Some(&VueMarkupParser), &ExtractOptions::default()).unwrap();
        assert_eq!(keys(&items), vec!["Title", "Hello", "Directive", "Saved", "Script"]);
        assert_eq!((items[4].line, items[4].column), (7, 23));
    }

    #[test]
    fn test_vue_section_fallback() {
        let code = r#"<template>
  <p>{{ $t('Mustache') }}</p>
  <input :placeholder="t('Bound')">
  <span v-t="'It\'s directive'"></span>
</template>
<script>
export default { computed: { x() { return this.$t('Method') } } }
</script>
"#;
        let items = extract_component(code, "V.vue", Dialect::Vue, None, &ExtractOptions::default()).unwrap();
        assert_eq!(keys(&items), vec!["Mustache", "Bound", "It's directive", "Method"]);
    }

    #[test]
    fn test_dedup_by_key_keeps_earliest() {
        let items = vec![
            ExtractionItem::new("B", "f", 3, 1),
            ExtractionItem::new("A", "f", 2, 1),
            ExtractionItem::new("B", "f", 1, 5),
        ];
        let deduped = dedup_by_key(items);
        assert_eq!(keys(&deduped), vec!["B", "A"]);
        assert_eq!(deduped[0].line, 1);
    }
}

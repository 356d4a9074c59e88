//! Call-site walker: finds translation calls in a swc syntax tree.
//!
//! Every call expression is normalized into a [`CallSite`] and then
//! classified against the configured function names. Only literal keys
//! survive classification:
//!
//! - `'text'` / `"text"` → key
//! - `` `text` `` → key (raw text)
//! - `` `Hi ${name}` `` → rejected, dynamic content can't be a catalog key
//! - `cond ? 'A' : 'B'` → one call per branch, only if every branch is literal
//! - anything else (identifiers, objects, numbers, ...) → rejected

use swc_common::BytePos;
use swc_ecma_ast::{CallExpr, OptCall};
use swc_ecma_visit::{Visit, VisitWith};
use tracing::trace;

use super::call_site::{CallSite, CalleeKind, TaggedArgument};
use crate::core::{
    data::{ExtractionItem, placeholder_names},
    parsers::script::{ParsedExpression, ParsedScript},
};
use crate::utils::LineIndex;

/// Translation function names matched when none are configured.
pub const DEFAULT_FUNCTION_NAMES: &[&str] = &["$t", "t"];

pub fn default_function_names() -> Vec<String> {
    DEFAULT_FUNCTION_NAMES.iter().map(|s| s.to_string()).collect()
}

/// How the key literal was written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyKind {
    String,
    Template,
}

/// A qualifying translation call with a literal key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct I18nCall {
    /// Resolved callee name (`t`, `$t`, ...).
    pub name: String,
    pub callee: CalleeKind,
    pub key: String,
    pub kind: KeyKind,
    /// Declared `values` names, or placeholders scanned from the key.
    pub params: Vec<String>,
    /// Byte offset of the call within the parsed text.
    pub offset: usize,
}

impl I18nCall {
    /// Convert into an item positioned in the enclosing file.
    ///
    /// `base_offset` is where the parsed text starts inside the file that
    /// `index` was built over.
    pub fn into_item(self, file: &str, index: &LineIndex<'_>, base_offset: usize) -> ExtractionItem {
        let (line, column) = index.position(base_offset + self.offset);
        trace!(
            file,
            line,
            column,
            function = %self.name,
            callee = ?self.callee,
            key_kind = ?self.kind,
            key = %self.key,
            "translation call"
        );
        ExtractionItem::with_params(self.key, file, line, column, self.params)
    }
}

/// Classify a call site, producing one call per literal key.
pub fn classify(site: &CallSite, function_names: &[String]) -> Vec<I18nCall> {
    if !function_names.iter().any(|name| *name == site.name) {
        return Vec::new();
    }
    let Some(first) = site.arguments.first() else {
        return Vec::new();
    };
    let Some(keys) = literal_keys(first) else {
        return Vec::new();
    };
    let declared = site
        .arguments
        .get(1)
        .and_then(TaggedArgument::declared_params);

    keys.into_iter()
        .map(|(key, kind)| {
            let params = match declared {
                Some(names) => names.to_vec(),
                None => placeholder_names(&key),
            };
            I18nCall {
                name: site.name.clone(),
                callee: site.callee_kind,
                key,
                kind,
                params,
                offset: site.offset,
            }
        })
        .collect()
}

/// Literal keys an argument stands for, or `None` if any part is dynamic.
fn literal_keys(arg: &TaggedArgument) -> Option<Vec<(String, KeyKind)>> {
    match arg {
        TaggedArgument::Str(value) => Some(vec![(value.clone(), KeyKind::String)]),
        TaggedArgument::Template(raw) => Some(vec![(raw.clone(), KeyKind::Template)]),
        TaggedArgument::Conditional {
            consequent,
            alternate,
        } => {
            let mut keys = literal_keys(consequent)?;
            keys.extend(literal_keys(alternate)?);
            Some(keys)
        }
        TaggedArgument::InterpolatedTemplate
        | TaggedArgument::Object { .. }
        | TaggedArgument::Other => None,
    }
}

/// AST visitor collecting qualifying calls in source order.
pub struct CallSiteWalker<'a> {
    function_names: &'a [String],
    start_pos: BytePos,
    calls: Vec<I18nCall>,
}

impl<'a> CallSiteWalker<'a> {
    pub fn new(function_names: &'a [String], start_pos: BytePos) -> Self {
        Self {
            function_names,
            start_pos,
            calls: Vec::new(),
        }
    }

    pub fn into_calls(self) -> Vec<I18nCall> {
        self.calls
    }

    fn offset_of(&self, pos: BytePos) -> usize {
        pos.0.saturating_sub(self.start_pos.0) as usize
    }
}

impl Visit for CallSiteWalker<'_> {
    fn visit_call_expr(&mut self, node: &CallExpr) {
        if let Some(site) = CallSite::from_call(node, self.offset_of(node.span.lo)) {
            self.calls.extend(classify(&site, self.function_names));
        }
        node.visit_children_with(self);
    }

    fn visit_opt_call(&mut self, node: &OptCall) {
        if let Some(site) = CallSite::from_opt_call(node, self.offset_of(node.span.lo)) {
            self.calls.extend(classify(&site, self.function_names));
        }
        node.visit_children_with(self);
    }
}

/// Find every qualifying call in a parsed module.
pub fn extract_calls(tree: &ParsedScript, function_names: &[String]) -> Vec<I18nCall> {
    let mut walker = CallSiteWalker::new(function_names, tree.start_pos());
    tree.module.visit_with(&mut walker);
    walker.into_calls()
}

/// Find every qualifying call in a standalone expression.
pub fn extract_calls_from_expr(parsed: &ParsedExpression, function_names: &[String]) -> Vec<I18nCall> {
    let mut walker = CallSiteWalker::new(function_names, parsed.start_pos());
    parsed.expr.visit_with(&mut walker);
    walker.into_calls()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use crate::core::extract::walker::*;
    use crate::core::parsers::script::{ParseOptions, parse_script};

    fn keys(code: &str) -> Vec<String> {
        calls(code).into_iter().map(|c| c.key).collect()
    }

    fn calls(code: &str) -> Vec<I18nCall> {
        let tree = parse_script(code, &ParseOptions::typescript(true)).unwrap();
        extract_calls(&tree, &default_function_names())
    }

    #[test]
    fn test_string_literal_keys() {
        assert_eq!(keys(r#"$t('Hello'); t("World");"#), vec!["Hello", "World"]);
    }

    #[test]
    fn test_member_calls() {
        let code = r#"
            this.$t('From this');
            i18n.t('From i18n');
            obj.prop.t('Deep');
        "#;
        assert_eq!(keys(code), vec!["From this", "From i18n", "Deep"]);
    }

    #[test]
    fn test_unknown_function_is_ignored() {
        assert!(keys("translate('Nope'); alert('No');").is_empty());
    }

    #[test]
    fn test_custom_function_names() {
        let tree = parse_script("translate('Yes'); t('No');", &ParseOptions::javascript()).unwrap();
        let found = extract_calls(&tree, &["translate".to_string()]);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].key, "Yes");
    }

    #[test]
    fn test_plain_template_literal() {
        let found = calls("t(`Plain template`);");
        assert_eq!(found[0].key, "Plain template");
        assert_eq!(found[0].kind, KeyKind::Template);
    }

    #[test]
    fn test_call_records_callee_shape() {
        let found = calls("t('Direct'); this.$t('Member');");
        assert_eq!((found[0].name.as_str(), found[0].callee), ("t", CalleeKind::Identifier));
        assert_eq!((found[1].name.as_str(), found[1].callee), ("$t", CalleeKind::MemberTrailingProperty));
        assert_eq!(found[0].kind, KeyKind::String);
    }

    #[test]
    fn test_interpolated_template_rejected() {
        assert!(keys("$t(`Hello ${name}`);").is_empty());
    }

    #[test]
    fn test_ternary_yields_both_branches() {
        assert_eq!(keys("$t(condition ? 'Yes' : 'No');"), vec!["Yes", "No"]);
    }

    #[test]
    fn test_ternary_with_identifier_branch_yields_nothing() {
        assert!(keys("$t(condition ? 'Yes' : other);").is_empty());
        assert!(keys("$t(condition ? other : 'No');").is_empty());
    }

    #[test]
    fn test_nested_ternary() {
        assert_eq!(keys("t(a ? 'One' : b ? 'Two' : 'Three');"), vec!["One", "Two", "Three"]);
    }

    #[test]
    fn test_rejected_first_arguments() {
        assert!(keys("t({ key: 'x' }); t(name); t(42); t();").is_empty());
    }

    #[test]
    fn test_values_object_declares_params() {
        let found = calls("t('Hello {name}', { values: { name: user, extra: 1 } });");
        assert_eq!(found[0].params, vec!["name", "extra"]);
    }

    #[test]
    fn test_params_scanned_from_key_without_values() {
        let found = calls("t('Hello {name}, you have {count}');");
        assert_eq!(found[0].params, vec!["name", "count"]);
        let found = calls("t('No params');");
        assert!(found[0].params.is_empty());
    }

    #[test]
    fn test_nested_call_in_argument() {
        assert_eq!(keys("alert(t('Inner'));"), vec!["Inner"]);
    }

    #[test]
    fn test_calls_inside_jsx_and_classes() {
        let code = r#"
            class Page {
                render() { return <div title={this.$t('Title')}>{t('Body')}</div>; }
            }
        "#;
        assert_eq!(keys(code), vec!["Title", "Body"]);
    }

    #[test]
    fn test_into_item_position() {
        let code = "const a = 1;\n  t('Key');";
        let found = calls(code);
        let index = LineIndex::new(code);
        let item = found[0].clone().into_item("a.ts", &index, 0);
        assert_eq!((item.line, item.column), (2, 3));
        assert_eq!(item.file, "a.ts");
    }

    #[test]
    fn test_classify_requires_matching_name() {
        let site = CallSite {
            callee_kind: CalleeKind::Identifier,
            name: "x".into(),
            arguments: vec![TaggedArgument::Str("k".into())],
            offset: 0,
        };
        assert!(classify(&site, &default_function_names()).is_empty());
    }
}

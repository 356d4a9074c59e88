use serde::Serialize;

use super::placeholder::placeholder_names;

/// One occurrence of a translatable literal found in source code.
///
/// `has_params` is true exactly when `params` is non-empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractionItem {
    /// The literal string; doubles as the catalog key.
    pub key: String,
    pub file: String,
    /// 1-based line of the call or expression.
    pub line: usize,
    /// 1-based column of the call or expression.
    pub column: usize,
    pub has_params: bool,
    /// Placeholder names, ordered and deduplicated.
    pub params: Vec<String>,
}

impl ExtractionItem {
    /// Create an item whose params are scanned from `{name}` tokens in the key.
    pub fn new(key: impl Into<String>, file: impl Into<String>, line: usize, column: usize) -> Self {
        let key = key.into();
        let params = placeholder_names(&key);
        Self::with_params(key, file, line, column, params)
    }

    /// Create an item with explicitly declared params (e.g. from a `values` object).
    pub fn with_params(
        key: impl Into<String>,
        file: impl Into<String>,
        line: usize,
        column: usize,
        params: Vec<String>,
    ) -> Self {
        let mut deduped: Vec<String> = Vec::with_capacity(params.len());
        for param in params {
            if !deduped.contains(&param) {
                deduped.push(param);
            }
        }
        Self {
            key: key.into(),
            file: file.into(),
            line,
            column,
            has_params: !deduped.is_empty(),
            params: deduped,
        }
    }

    pub fn occurrence(&self) -> Occurrence {
        Occurrence {
            file: self.file.clone(),
            line: self.line,
            column: self.column,
        }
    }
}

/// A single `(file, line, column)` location of a key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Occurrence {
    pub file: String,
    pub line: usize,
    pub column: usize,
}

/// One catalog key with every location it was found at.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MergedExtractionItem {
    pub key: String,
    /// Occurrences in discovery order.
    pub occurrences: Vec<Occurrence>,
    pub has_params: bool,
    pub params: Vec<String>,
}

#[cfg(test)]
mod tests {
    use crate::core::data::item::*;

    #[test]
    fn test_new_scans_params_from_key() {
        let item = ExtractionItem::new("Hello {name}", "a.js", 1, 1);
        assert!(item.has_params);
        assert_eq!(item.params, vec!["name"]);
    }

    #[test]
    fn test_new_without_tokens_has_no_params() {
        let item = ExtractionItem::new("Hello", "a.js", 1, 1);
        assert!(!item.has_params);
        assert!(item.params.is_empty());
    }

    #[test]
    fn test_with_params_dedups() {
        let item = ExtractionItem::with_params(
            "{a} {b}",
            "a.js",
            1,
            1,
            vec!["a".into(), "b".into(), "a".into()],
        );
        assert_eq!(item.params, vec!["a", "b"]);
    }

    #[test]
    fn test_serializes_camel_case() {
        let item = ExtractionItem::new("Hi {name}", "a.js", 2, 3);
        let json = serde_json::to_string(&item).unwrap();
        assert!(json.contains("\"hasParams\":true"));
        assert!(json.contains("\"params\":[\"name\"]"));
    }
}

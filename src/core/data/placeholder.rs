use std::sync::LazyLock;

use regex::Regex;

/// Matches a `{name}` placeholder token. Nested braces never form a token.
static PLACEHOLDER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\{\s*([^{}\s]+)\s*\}").unwrap()
});

/// Placeholder names in `text`, in order of first appearance, deduplicated.
///
/// ```
/// use lingo::core::data::placeholder_names;
///
/// assert_eq!(placeholder_names("Hi {name}, {count} new for {name}"), vec!["name", "count"]);
/// assert!(placeholder_names("No tokens").is_empty());
/// ```
pub fn placeholder_names(text: &str) -> Vec<String> {
    let mut names: Vec<String> = Vec::new();
    for caps in PLACEHOLDER.captures_iter(text) {
        let name = &caps[1];
        if !names.iter().any(|n| n == name) {
            names.push(name.to_string());
        }
    }
    names
}

/// Whether `text` contains at least one `{name}` token.
pub fn contains_placeholder(text: &str) -> bool {
    PLACEHOLDER.is_match(text)
}

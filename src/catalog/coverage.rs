use std::cmp::Ordering;

use serde::Serialize;

use crate::catalog::{Catalog, is_untranslated};

/// Translation coverage of one target catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Coverage {
    pub total: usize,
    pub translated: usize,
    pub missing: usize,
    /// Rounded, 0..=100. An empty source is fully covered.
    pub percentage: u32,
}

fn is_translated(key: &str, value: &str) -> bool {
    !value.is_empty() && !is_untranslated(key, value)
}

/// Source keys the target lacks, leaves empty, or leaves untranslated. Source order.
pub fn find_missing(source: &Catalog, target: &Catalog) -> Vec<String> {
    source
        .keys()
        .filter(|key| !target.get(*key).is_some_and(|value| is_translated(key, value)))
        .cloned()
        .collect()
}

/// Target keys not in the source. Target order.
pub fn find_unused(source: &Catalog, target: &Catalog) -> Vec<String> {
    target
        .keys()
        .filter(|key| !source.contains_key(*key))
        .cloned()
        .collect()
}

pub fn coverage(source: &Catalog, target: &Catalog) -> Coverage {
    let total = source.len();
    let translated = source
        .keys()
        .filter(|key| target.get(*key).is_some_and(|value| is_translated(key, value)))
        .count();
    let percentage = if total == 0 {
        100
    } else {
        (100.0 * translated as f64 / total as f64).round() as u32
    };

    Coverage {
        total,
        translated,
        missing: total - translated,
        percentage,
    }
}

/// Case-insensitive order; on a tie lowercase sorts first (`a` < `A` < `b`).
fn compare_keys(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| b.cmp(a))
}

/// Copy of `catalog` with keys in dictionary order.
pub fn sort_keys(catalog: &Catalog) -> Catalog {
    let mut sorted = catalog.clone();
    sorted.sort_by(|a, _, b, _| compare_keys(a, b));
    sorted
}

/// Drop blank entries, and untranslated ones when `remove_untranslated` is set.
pub fn clean_unused(catalog: &Catalog, remove_untranslated: bool) -> Catalog {
    catalog
        .iter()
        .filter(|(key, value)| {
            !value.trim().is_empty() && !(remove_untranslated && is_untranslated(key, value))
        })
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use crate::catalog::coverage::*;

    fn catalog(pairs: &[(&str, &str)]) -> Catalog {
        pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
    }

    #[test]
    fn test_find_missing_in_source_order() {
        let source = catalog(&[("a", "A"), ("b", "B"), ("c", "C")]);
        let target = catalog(&[("a", "甲")]);
        assert_eq!(find_missing(&source, &target), vec!["b", "c"]);
    }

    #[test]
    fn test_find_missing_counts_empty_and_untranslated() {
        let source = catalog(&[("Save", "Save"), ("Open", "Open"), ("Close", "Close")]);
        let target = catalog(&[("Close", "Fermer"), ("Save", "Save"), ("Open", "")]);
        assert_eq!(find_missing(&source, &target), vec!["Save", "Open"]);
    }

    #[test]
    fn test_coverage_scenario() {
        let source = catalog(&[("a", "A"), ("b", "B"), ("c", "C")]);
        let target = catalog(&[("a", "甲")]);
        assert_eq!(
            coverage(&source, &target),
            Coverage {
                total: 3,
                translated: 1,
                missing: 2,
                percentage: 33,
            }
        );
    }

    #[test]
    fn test_coverage_empty_source_is_complete() {
        let target = catalog(&[("x", "y")]);
        assert_eq!(coverage(&Catalog::new(), &target).percentage, 100);
        assert_eq!(coverage(&Catalog::new(), &Catalog::new()).percentage, 100);
    }

    #[test]
    fn test_coverage_rounds() {
        let source = catalog(&[("a", "A"), ("b", "B"), ("c", "C")]);
        let target = catalog(&[("a", "1"), ("b", "2")]);
        assert_eq!(coverage(&source, &target).percentage, 67);
    }

    #[test]
    fn test_coverage_bounds() {
        let source = catalog(&[("a", "A"), ("b", "B")]);
        for target in [
            Catalog::new(),
            catalog(&[("a", "a")]),
            catalog(&[("a", "1"), ("b", "2"), ("extra", "3")]),
        ] {
            let percentage = coverage(&source, &target).percentage;
            assert!(percentage <= 100);
        }
    }

    #[test]
    fn test_find_unused_in_target_order() {
        let source = catalog(&[("a", "A")]);
        let target = catalog(&[("z", "1"), ("a", "2"), ("m", "3")]);
        assert_eq!(find_unused(&source, &target), vec!["z", "m"]);
    }

    #[test]
    fn test_sort_keys() {
        let sorted = sort_keys(&catalog(&[("banana", "1"), ("Apple", "2"), ("apple", "3"), ("cherry", "4")]));
        assert_eq!(sorted.keys().collect::<Vec<_>>(), vec!["apple", "Apple", "banana", "cherry"]);
    }

    #[test]
    fn test_clean_unused() {
        let input = catalog(&[("a", "A"), ("b", ""), ("c", "  "), ("d", "d")]);
        assert_eq!(clean_unused(&input, false), catalog(&[("a", "A"), ("d", "d")]));
        assert_eq!(clean_unused(&input, true), catalog(&[("a", "A")]));
    }
}

// src/extractors/options.rs

// --- Imports ---
use crate::extractors::pattern::{ExtractionPattern, Mode};
use crate::extractors::scanner::scan_all;
use crate::extractors::sort::sort_variable_values;
use crate::utils::error::PatternError;
use crate::variable::models::{RawItem, VariableOption, VariableSort};
use std::collections::HashSet;

/// Resolves raw query results into deduplicated, sorted options.
///
/// An empty `pattern` lets every item through. The result may be empty; the
/// caller substitutes [`VariableOption::none`] in that case.
pub fn resolve_options(
    pattern: &str,
    sort: VariableSort,
    items: &[RawItem],
) -> Result<Vec<VariableOption>, PatternError> {
    let pattern = ExtractionPattern::compile_optional(pattern)?;
    let options = extract_options(items, pattern.as_ref());
    let options = dedupe_options(options);
    tracing::debug!("Resolved {} raw items into {} options", items.len(), options.len());
    Ok(sort_variable_values(options, sort))
}

/// Applies `pattern` to each item. Output keeps input order and may fan out
/// one item into several options.
pub fn extract_options(items: &[RawItem], pattern: Option<&ExtractionPattern>) -> Vec<VariableOption> {
    let mut options = Vec::with_capacity(items.len());
    for item in items {
        extract_item(item, pattern, &mut options);
    }
    options
}

fn extract_item(item: &RawItem, pattern: Option<&ExtractionPattern>, out: &mut Vec<VariableOption>) {
    let (text, value) = item.resolve();

    let Some(pattern) = pattern else {
        out.push(VariableOption::new(text, value));
        return;
    };

    let target = match pattern.mode() {
        Mode::Text => &text,
        Mode::Value | Mode::None => &value,
    };
    let matches = scan_all(target, pattern.regex());

    if matches.is_empty() {
        tracing::trace!("Skipping '{}': no match", target);
        return;
    }

    // Named groups win. Empty captures do not count.
    let value_group = matches.iter().find_map(|m| non_empty(&m.named_value));
    let text_group = matches.iter().find_map(|m| non_empty(&m.named_text));

    if let (Some(v), Some(t)) = (value_group.or(text_group), text_group.or(value_group)) {
        out.push(VariableOption::new(t, v));
        return;
    }

    let with_groups = matches.iter().find(|m| m.has_positional_groups());
    match with_groups {
        Some(_) if matches.len() > 1 => {
            for m in &matches {
                let group = m.group(1).unwrap_or_default();
                out.push(VariableOption::new(group, group));
            }
        }
        Some(first) => {
            let group = first.group(1).unwrap_or_default();
            out.push(VariableOption::new(group, group));
        }
        None => out.push(VariableOption::new(text, value)),
    }
}

fn non_empty(group: &Option<String>) -> Option<&str> {
    group.as_deref().filter(|s| !s.is_empty())
}

/// Drops options whose `value` was already seen, keeping the first.
pub fn dedupe_options(options: Vec<VariableOption>) -> Vec<VariableOption> {
    let mut seen = HashSet::with_capacity(options.len());
    options
        .into_iter()
        .filter(|option| seen.insert(option.value.clone()))
        .collect()
}

// --- Tests ---
#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    fn opt(text: &str, value: &str) -> VariableOption {
        VariableOption::new(text, value)
    }

    fn resolve(pattern: &str, items: &[RawItem]) -> Vec<VariableOption> {
        resolve_options(pattern, VariableSort::DISABLED, items).unwrap()
    }

    #[test]
    fn duplicates_collapse_without_pattern() {
        let items = [RawItem::new("a", "a"), RawItem::new("a", "a")];
        assert_eq!(resolve("", &items), vec![opt("a", "a")]);
    }

    #[test]
    fn positional_group_extracts_value() {
        let items = [RawItem::with_value("region-us"), RawItem::with_value("region-eu")];
        assert_eq!(resolve("/region-(.*)/", &items), vec![opt("us", "us"), opt("eu", "eu")]);
    }

    #[test]
    fn named_value_group_extracts_value() {
        let items = [RawItem::with_value("host1"), RawItem::with_value("host2")];
        assert_eq!(resolve(r"/host(?<value>\d+)/", &items), vec![opt("1", "1"), opt("2", "2")]);
    }

    #[test]
    fn unmatched_items_are_filtered() {
        let items = [RawItem::with_value("alpha"), RawItem::with_value("beta")];
        assert!(resolve("gamma", &items).is_empty());
        assert_eq!(resolve("alp", &items), vec![opt("alpha", "alpha")]);
    }

    #[test]
    fn named_text_and_value_groups_split() {
        let items = [RawItem::with_value("us-east=1"), RawItem::with_value("eu-west=2")];
        let options = resolve(r"/(?<text>[a-z-]+)=(?<value>\d+)/", &items);
        assert_eq!(options, vec![opt("us-east", "1"), opt("eu-west", "2")]);
    }

    #[test]
    fn named_text_alone_fills_value() {
        let items = [RawItem::with_value("name:web")];
        assert_eq!(resolve(r"/name:(?<text>\w+)/", &items), vec![opt("web", "web")]);
    }

    #[test]
    fn empty_named_group_falls_through_to_positional() {
        // The named group is also group 1, so rule (c) still picks the empty capture.
        let items = [RawItem::with_value("host")];
        assert_eq!(resolve(r"/host(?<value>\d*)/", &items), vec![opt("", "")]);
    }

    #[test]
    fn many_matches_fan_out() {
        let items = [RawItem::with_value("a=1,b=2,c=3"), RawItem::with_value("d=4")];
        let options = resolve(r"/=(\d)/", &items);
        assert_eq!(options, vec![opt("1", "1"), opt("2", "2"), opt("3", "3"), opt("4", "4")]);
    }

    #[test]
    fn fan_out_keeps_trailing_empty_match() {
        // `.*` matches "abc", then the empty string at the end, then stops.
        let items = [RawItem::with_value("abc")];
        assert_eq!(resolve("/(.*)/", &items), vec![opt("abc", "abc"), opt("", "")]);
    }

    #[test]
    fn ungrouped_match_keeps_original_identity() {
        let items = [RawItem::new("Web Server", "web-1"), RawItem::new("DB", "db-1")];
        let options = resolve("/web/", &items);
        assert_eq!(options, vec![opt("Web Server", "web-1")]);
    }

    #[test]
    fn text_mode_matches_against_text() {
        let items = [RawItem::new("Web Server", "web-1"), RawItem::new("DB", "db-1")];
        assert_eq!(resolve("text/Web/", &items), vec![opt("Web Server", "web-1")]);
        assert!(resolve("value/Web/", &items).is_empty());
        assert_eq!(resolve("value/db-(\\d)/", &items), vec![opt("1", "1")]);
    }

    #[test]
    fn numeric_items_are_matched_as_strings() {
        let items: Vec<RawItem> = serde_json::from_str(r#"[{"value": 10}, {"value": 205}]"#).unwrap();
        assert_eq!(resolve(r"/^2(\d+)/", &items), vec![opt("05", "05")]);
    }

    #[test]
    fn non_participating_group_yields_empty_string() {
        let items = [RawItem::with_value("ac")];
        assert_eq!(resolve("/a(b)?c/", &items), vec![opt("", "")]);
    }

    #[test]
    fn invalid_meta_flag_is_not_swallowed() {
        let err = resolve_options("foo/a/", VariableSort::DISABLED, &[RawItem::with_value("a")]).unwrap_err();
        assert!(matches!(err, PatternError::InvalidMetaFlag(_)));
    }

    #[test]
    fn resolution_applies_sort_after_dedup() {
        let items = [RawItem::with_value("b"), RawItem::with_value("a"), RawItem::with_value("b")];
        let options = resolve_options("", VariableSort::ALPHABETICAL_DESC, &items).unwrap();
        assert_eq!(options, vec![opt("b", "b"), opt("a", "a")]);
    }

    fn raw_item() -> impl Strategy<Value = RawItem> {
        prop_oneof![
            ("[a-c]{0,3}", "[a-c]{0,3}").prop_map(|(t, v)| RawItem::new(t, v)),
            "[a-c]{0,3}".prop_map(RawItem::with_text),
            any::<i64>().prop_map(RawItem::with_value),
        ]
    }

    proptest! {
        #[test]
        fn no_pattern_is_identity(items in prop::collection::vec(raw_item(), 0..20)) {
            let options = extract_options(&items, None);
            prop_assert_eq!(options.len(), items.len());
            for (option, item) in options.iter().zip(&items) {
                let (text, value) = item.resolve();
                prop_assert_eq!(&option.text, &text);
                prop_assert_eq!(&option.value, &value);
                prop_assert!(!option.selected);
            }
        }

        #[test]
        fn dedupe_is_idempotent(items in prop::collection::vec(raw_item(), 0..20)) {
            let once = dedupe_options(extract_options(&items, None));
            let twice = dedupe_options(once.clone());
            prop_assert_eq!(&once, &twice);
            let values: HashSet<_> = once.iter().map(|o| o.value.as_str()).collect();
            prop_assert_eq!(values.len(), once.len());
        }
    }
}

// src/extractors/sort.rs
use crate::variable::models::{VariableOption, VariableSort};
use once_cell::sync::Lazy;
use regex::Regex;

// First run of ASCII digits anywhere in an option's text.
static NUMERIC_KEY_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[0-9]+").expect("Failed to compile NUMERIC_KEY_RE")
});

/// Orders options by `sort`. All strategies are stable; descending codes
/// reverse the ascending result as a whole, tie groups included.
pub fn sort_variable_values(mut options: Vec<VariableOption>, sort: VariableSort) -> Vec<VariableOption> {
    if sort.is_disabled() {
        return options;
    }

    match sort.sort_type() {
        1 => options.sort_by(|a, b| a.text.cmp(&b.text)),
        2 => {
            let mut keyed: Vec<(f64, VariableOption)> =
                options.into_iter().map(|o| (numeric_key(&o.text), o)).collect();
            keyed.sort_by(|a, b| a.0.total_cmp(&b.0));
            options = keyed.into_iter().map(|(_, o)| o).collect();
        }
        3 => options.sort_by_cached_key(|o| o.text.to_lowercase()),
        other => tracing::debug!("Sort type {} applies no ordering", other),
    }

    if sort.is_descending() {
        options.reverse();
    }
    options
}

/// Numeric sort key: the first digit run of `text`, or `-1` when there is none.
fn numeric_key(text: &str) -> f64 {
    NUMERIC_KEY_RE
        .find(text)
        .and_then(|m| m.as_str().parse::<f64>().ok())
        .unwrap_or(-1.0)
}

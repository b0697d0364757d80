// src/variable/mod.rs
pub mod models;

use crate::extractors::options::resolve_options;
use crate::utils::error::PatternError;
use models::{QueryVariable, RawItem, VariableOption};

/// Resolves `results` with the variable's sort code and stores the options.
///
/// `templated_regex` is the variable's extraction pattern after template
/// interpolation. Prepends "All" when the variable includes it and falls back
/// to the "None" sentinel when nothing resolves. On error the variable is left
/// untouched.
pub fn update_variable_options(
    variable: &mut QueryVariable,
    results: &[RawItem],
    templated_regex: &str,
) -> Result<(), PatternError> {
    let mut options = resolve_options(templated_regex, variable.sort, results)?;

    if variable.include_all {
        options.insert(0, VariableOption::all());
    }

    if options.is_empty() {
        tracing::debug!("No options resolved for variable '{}', using None sentinel", variable.name);
        options.push(VariableOption::none());
    }

    variable.options = options;
    Ok(())
}

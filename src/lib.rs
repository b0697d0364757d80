// src/lib.rs
//! Resolves raw "metric find" query results into the option list of a
//! query-driven dashboard variable.

pub mod extractors;
pub mod storage;
pub mod utils;
pub mod variable;

pub use extractors::{resolve_options, ExtractionPattern, Mode};
pub use variable::models::{QueryVariable, RawItem, Scalar, VariableOption, VariableSort};
pub use variable::update_variable_options;

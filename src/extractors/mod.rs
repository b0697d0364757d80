// src/extractors/mod.rs
pub mod options;
pub mod pattern;
pub mod scanner;
pub mod sort;

// Re-export key extraction types for convenience
pub use options::{dedupe_options, extract_options, resolve_options};
pub use pattern::{ExtractionPattern, Mode};
pub use scanner::{scan_all, ScanMatch};
pub use sort::sort_variable_values;

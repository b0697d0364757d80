// src/storage/mod.rs
use crate::utils::error::StorageError;
use crate::variable::models::{RawItem, VariableOption};
use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;

/// Reads raw query results and writes resolved options.
/// A missing path means stdin / stdout.
pub struct StorageManager {
    input: Option<PathBuf>,
    output: Option<PathBuf>,
    pretty: bool,
}

impl StorageManager {
    pub fn new(input: Option<PathBuf>, output: Option<PathBuf>, pretty: bool) -> Self {
        Self { input, output, pretty }
    }

    /// Loads the raw items from the input file or stdin
    pub fn load_raw_items(&self) -> Result<Vec<RawItem>, StorageError> {
        match &self.input {
            Some(path) => {
                tracing::info!("Reading raw items from {}", path.display());
                let file = fs::File::open(path).map_err(StorageError::Io)?;
                parse_raw_items(io::BufReader::new(file))
            }
            None => {
                tracing::info!("Reading raw items from stdin");
                parse_raw_items(io::stdin().lock())
            }
        }
    }

    /// Saves the options as JSON to the output file or stdout
    pub fn save_options(&self, options: &[VariableOption]) -> Result<(), StorageError> {
        match &self.output {
            Some(path) => {
                let file = fs::File::create(path).map_err(StorageError::Io)?;
                write_options(io::BufWriter::new(file), options, self.pretty)?;
                tracing::info!("Saved {} options to {}", options.len(), path.display());
            }
            None => write_options(io::stdout().lock(), options, self.pretty)?,
        }
        Ok(())
    }
}

/// Parses a JSON array of raw items. Items with neither `text` nor `value` are rejected.
pub fn parse_raw_items<R: Read>(reader: R) -> Result<Vec<RawItem>, StorageError> {
    let items: Vec<RawItem> = serde_json::from_reader(reader)
        .map_err(|e| StorageError::Serialization(e.to_string()))?;

    if let Some(index) = items.iter().position(RawItem::is_empty) {
        return Err(StorageError::MissingField { index });
    }

    tracing::debug!("Parsed {} raw items", items.len());
    Ok(items)
}

pub fn write_options<W: Write>(mut writer: W, options: &[VariableOption], pretty: bool) -> Result<(), StorageError> {
    let result = if pretty {
        serde_json::to_writer_pretty(&mut writer, options)
    } else {
        serde_json::to_writer(&mut writer, options)
    };
    result.map_err(|e| StorageError::Serialization(e.to_string()))?;

    writer.write_all(b"\n")?;
    writer.flush()?;
    Ok(())
}

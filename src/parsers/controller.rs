//! Loader for the controller's positional CSV datalog export.
//!
//! The export starts with a two-row preamble (a tool banner and the
//! controller's own header line, which is not trusted); data begins on the
//! third row. Fields are comma-separated floats in registry order.
//!
//! Rows with missing or unparseable fields are dropped, matching the
//! upstream tooling's drop-any-NA behavior. Rows wider than the registry
//! mean the export layout has drifted and fail the whole file.

use std::path::Path;

use thiserror::Error;

use super::types::Table;
use crate::schema::{Schema, SchemaError};

/// Number of preamble rows before data begins
const PREAMBLE_ROWS: usize = 2;

/// Errors raised while loading a datalog file
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("failed to read file: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Schema(#[from] SchemaError),

    #[error("malformed datalog: {0}")]
    Malformed(String),
}

/// Load and parse a datalog file against the given registry
pub fn parse_file(path: &Path, schema: &Schema) -> Result<Table, ParseError> {
    let contents = std::fs::read_to_string(path)?;
    parse(&contents, schema)
}

/// Parse datalog contents against the given registry
pub fn parse(contents: &str, schema: &Schema) -> Result<Table, ParseError> {
    let mut rows: Vec<Vec<f64>> = Vec::new();
    let mut dropped = 0usize;

    for (line_no, line) in contents.lines().enumerate().skip(PREAMBLE_ROWS) {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let fields: Vec<&str> = line.split(',').collect();
        if fields.len() > schema.width() {
            return Err(ParseError::Malformed(format!(
                "row {} has {} fields, registry has {}",
                line_no + 1,
                fields.len(),
                schema.width()
            )));
        }

        // A short row or an unparseable cell is a row with missing values
        let values: Vec<f64> = fields
            .iter()
            .filter_map(|field| field.trim().parse::<f64>().ok())
            .filter(|v| v.is_finite())
            .collect();

        if values.len() == schema.width() {
            rows.push(values);
        } else {
            dropped += 1;
        }
    }

    if dropped > 0 {
        tracing::debug!("dropped {} rows with missing values", dropped);
    }

    if rows.is_empty() {
        return Err(ParseError::Malformed("no complete data rows".to_string()));
    }

    Ok(Table::new(schema.clone(), rows)?)
}

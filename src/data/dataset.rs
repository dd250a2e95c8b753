//! Delimited-text dataset loader.
//!
//! Format:
//! - one example per line, values separated by a single character
//! - consecutive separators collapse; surrounding whitespace is ignored
//! - a token that is not a number reads as `0.0`
//! - short rows are padded with `0.0`; wider rows are rejected
//! - blank lines are skipped
use std::io::BufRead;

use log::{debug, warn};

use crate::error::{DatasetError, NnError};

/// Rows of a fixed width, already parsed to `f64`.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    columns: usize,
    rows: Vec<Vec<f64>>,
}

impl Dataset {
    /// Reads every line of `reader` into a row of exactly `columns` values.
    pub fn load<R: BufRead>(reader: R, columns: usize, separator: char) -> Result<Dataset, DatasetError> {
        let mut rows = Vec::new();

        for (idx, line) in reader.lines().enumerate() {
            let line = line?;
            let line_no = idx + 1;
            if line.trim().is_empty() {
                continue;
            }

            let tokens: Vec<&str> = line
                .split(separator)
                .map(str::trim)
                .filter(|t| !t.is_empty())
                .collect();
            if tokens.len() > columns {
                return Err(DatasetError::TooManyColumns {
                    line: line_no,
                    expected: columns,
                    got: tokens.len(),
                });
            }

            let mut row = vec![0.0; columns];
            for (cell, token) in row.iter_mut().zip(&tokens) {
                *cell = parse_lenient(token, line_no);
            }
            rows.push(row);
        }

        if rows.is_empty() {
            return Err(DatasetError::Empty);
        }
        debug!("loaded {} rows of {} columns", rows.len(), columns);
        Ok(Dataset { columns, rows })
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn rows(&self) -> &[Vec<f64>] {
        &self.rows
    }
}

/// Reads the class index stored in `row[column]`.
///
/// The value is truncated toward zero and must land in `0..classes`.
pub fn class_label(row: &[f64], column: usize, classes: usize) -> Result<usize, NnError> {
    let value = *row.get(column).ok_or(NnError::IndexOutOfRange {
        index: column,
        len: row.len(),
    })?;
    if !value.is_finite() || value < 0.0 || value.trunc() as usize >= classes {
        return Err(NnError::InvalidLabel { value, classes });
    }
    Ok(value.trunc() as usize)
}

fn parse_lenient(token: &str, line_no: usize) -> f64 {
    token.parse::<f64>().unwrap_or_else(|_| {
        warn!("line {line_no}: '{token}' is not a number, reading it as 0.0");
        0.0
    })
}

//! Summary Reporter Module
//! Derives the season year from the input file name and writes the one-row
//! R² summary CSV (header + values) to the given writer.

use crate::metrics::SUMMARY_COLUMNS;
use polars::prelude::*;
use std::collections::HashMap;
use std::io::Write;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReportError {
    #[error("file name {0:?} does not match the <name>-<name>-<year>.csv pattern")]
    FileNamePattern(String),
    #[error("no R² value computed for summary column {0}")]
    MissingMetric(&'static str),
    #[error("failed to write summary CSV: {0}")]
    Csv(#[from] PolarsError),
    #[error("failed to flush summary CSV: {0}")]
    Io(#[from] std::io::Error),
}

/// Derive the season year from the input file name.
///
/// The `.csv` suffix is stripped and the name split on `-`; at least three
/// segments are required and the trailing segment must be all digits, so
/// `cy-young-stats-2018.csv` yields `"2018"`.
pub fn year_from_path(path: &Path) -> Result<String, ReportError> {
    let name = path
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| ReportError::FileNamePattern(path.display().to_string()))?;

    let stem = name.strip_suffix(".csv").unwrap_or(name);
    let segments: Vec<&str> = stem.split('-').collect();
    if segments.len() < 3 {
        return Err(ReportError::FileNamePattern(name.to_string()));
    }

    let year = segments[segments.len() - 1];
    if year.is_empty() || !year.chars().all(|c| c.is_ascii_digit()) {
        return Err(ReportError::FileNamePattern(name.to_string()));
    }

    Ok(year.to_string())
}

/// Write the two-line summary CSV: the fixed
/// `Year,ERA,SO,W,W-L%,WHIP,ERA+,WAR` header and one row with each R²
/// formatted to six fractional digits.
pub fn write_summary<W: Write>(
    mut writer: W,
    year: &str,
    r_squared_by_key: &HashMap<&'static str, f64>,
) -> Result<(), ReportError> {
    let mut columns = vec![Column::new("Year".into(), vec![year.to_string()])];
    for key in SUMMARY_COLUMNS {
        let value = r_squared_by_key
            .get(key)
            .ok_or(ReportError::MissingMetric(key))?;
        columns.push(Column::new(key.into(), vec![format!("{value:.6}")]));
    }

    let mut df = DataFrame::new(columns)?;
    CsvWriter::new(&mut writer)
        .include_header(true)
        .finish(&mut df)?;
    writer.flush()?;
    Ok(())
}

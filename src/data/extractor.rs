//! Sample Extractor Module
//! Pulls the votes column and one metric column out of the loaded frame by
//! fixed index, parsing every cell as f64.

use polars::prelude::*;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExtractError {
    #[error("column access failed: {0}")]
    Csv(#[from] PolarsError),
    #[error("column index {index} out of range: file has {width} columns")]
    MissingColumn { index: usize, width: usize },
    #[error("line {line}, column {column}: empty field")]
    EmptyField { line: usize, column: usize },
    #[error("line {line}, column {column}: cannot parse {value:?} as a number")]
    BadNumber {
        line: usize,
        column: usize,
        value: String,
    },
}

/// Paired samples for one metric: `votes[i]` and `values[i]` come from the
/// same data row, and both vectors match the row count exactly.
#[derive(Debug, Clone, PartialEq)]
pub struct MetricSamples {
    pub votes: Vec<f64>,
    pub values: Vec<f64>,
}

/// Extract (votes, metric) sample pairs from every data row.
///
/// A non-numeric or empty cell aborts with an error naming the CSV line
/// (header = line 1) and column. No rows are skipped silently.
pub fn extract_samples(
    df: &DataFrame,
    votes_col: usize,
    metric_col: usize,
) -> Result<MetricSamples, ExtractError> {
    let votes = parse_column(df, votes_col)?;
    let values = parse_column(df, metric_col)?;
    Ok(MetricSamples { votes, values })
}

fn parse_column(df: &DataFrame, index: usize) -> Result<Vec<f64>, ExtractError> {
    let column = df.select_at_idx(index).ok_or(ExtractError::MissingColumn {
        index,
        width: df.width(),
    })?;
    let cells = column.str()?;

    let mut parsed = Vec::with_capacity(df.height());
    for (row, cell) in cells.into_iter().enumerate() {
        // Data row 0 is line 2 of the file (line 1 is the header).
        let line = row + 2;
        let cell = cell.ok_or(ExtractError::EmptyField {
            line,
            column: index,
        })?;
        let value = cell
            .trim()
            .parse::<f64>()
            .map_err(|_| ExtractError::BadNumber {
                line,
                column: index,
                value: cell.to_string(),
            })?;
        parsed.push(value);
    }

    Ok(parsed)
}

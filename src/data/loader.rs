//! CSV Data Loader Module
//! Loads a season stats CSV into a DataFrame using Polars.

use polars::prelude::*;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LoaderError {
    #[error("cannot open {0}: no such file")]
    FileNotFound(PathBuf),
    #[error("failed to read CSV: {0}")]
    Csv(#[from] PolarsError),
    #[error("{0} contains a header but no data rows")]
    NoData(PathBuf),
}

/// Load the season CSV, dropping the header row.
///
/// Schema inference is disabled so every column comes back as a string;
/// individual cells are parsed downstream, which keeps the all-or-nothing
/// contract (one bad cell aborts the run with its row and column).
pub fn load_stats_csv(path: &Path) -> Result<DataFrame, LoaderError> {
    if !path.is_file() {
        return Err(LoaderError::FileNotFound(path.to_path_buf()));
    }

    let df = LazyCsvReader::new(path)
        .with_has_header(true)
        .with_infer_schema_length(Some(0))
        .finish()?
        .collect()?;

    if df.height() == 0 {
        return Err(LoaderError::NoData(path.to_path_buf()));
    }

    Ok(df)
}

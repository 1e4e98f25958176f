//! Error handling for the data module

use polars::prelude::PolarsError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DatasetError {
    /// The dataset file does not exist or cannot be opened.
    #[error("Cannot read dataset {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Polars failed to parse the CSV or cast a column.
    #[error("CSV error: {0}")]
    Csv(#[from] PolarsError),

    /// A required column is absent from the header.
    #[error("Missing required column `{0}`")]
    MissingColumn(&'static str),

    /// A `dteday` value is not a recognised date.
    #[error("Row {row}: cannot parse date {value:?}")]
    MalformedDate { row: usize, value: String },

    /// A value is null, out of range, or of the wrong kind.
    #[error("Row {row}: invalid value in column `{column}`: {reason}")]
    MalformedValue {
        row: usize,
        column: &'static str,
        reason: String,
    },

    /// `cnt` differs from `casual + registered`.
    #[error("Row {row}: cnt {total} != casual {casual} + registered {registered}")]
    InconsistentCounts {
        row: usize,
        casual: u64,
        registered: u64,
        total: u64,
    },

    /// The file has a header but no data rows.
    #[error("Dataset contains no rows")]
    Empty,
}

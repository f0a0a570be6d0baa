//! Failures while persisting a run.
//!
//! The observer keeps only the first of these and lets the run finish; see
//! `MetricsOutputObserver::take_error`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum OutputError {
    /// Output directory could not be created or a file could not be opened.
    #[error("run output unavailable: {0}")]
    Io(#[from] std::io::Error),

    /// A metrics or snapshot row could not be written to its CSV file.
    #[error("failed writing run CSV: {0}")]
    Csv(#[from] csv::Error),

    #[cfg(feature = "sqlite")]
    #[error("failed writing run database: {0}")]
    Sqlite(#[from] rusqlite::Error),
}

pub type OutputResult<T> = Result<T, OutputError>;

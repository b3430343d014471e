use std::path::PathBuf;
use thiserror::Error;

/// Failures of a single pipeline run. None of them are retried.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// The input path does not exist.
    #[error("CSV file not found: {}", .0.display())]
    InputNotFound(PathBuf),
    /// The input cannot be read as a flat, single-column list of addresses.
    #[error("malformed input at line {line}: {reason}")]
    MalformedInput { line: u64, reason: String },
    /// Anything else, e.g. I/O or encoding failures.
    #[error("internal error: {0}")]
    Internal(String),
}

impl From<std::io::Error> for PipelineError {
    fn from(err: std::io::Error) -> Self {
        PipelineError::Internal(err.to_string())
    }
}

/// Column-count and line-structure checks happen on parsed records, so
/// anything the csv reader itself rejects (I/O, invalid UTF-8) is internal.
impl From<csv::Error> for PipelineError {
    fn from(err: csv::Error) -> Self {
        PipelineError::Internal(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, PipelineError>;

//! Error taxonomy shared across commands.
//!
//! Per-record failures (`RecordError`) are accumulated into reports; only
//! `AppError` aborts a whole run (exit code 2 upstream).

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
/// Decision Logic failure.
pub enum ClassifyError {
    #[error("no rule in the table matched the ticket attributes")]
    Unclassifiable,
}

#[derive(Debug, Error)]
/// A dataset line that cannot enter aggregate computations.
pub enum RecordError {
    /// The line is not valid JSON at all.
    #[error("line {line}: malformed record: {detail}")]
    Malformed { line: usize, detail: String },
    /// The line parses as JSON but violates the ticket schema
    /// (unknown field, value outside an enumeration, bad id format).
    #[error("line {line}: schema mismatch: {detail}")]
    Schema { line: usize, detail: String },
}

impl RecordError {
    pub fn line(&self) -> usize {
        match self {
            RecordError::Malformed { line, .. } | RecordError::Schema { line, .. } => *line,
        }
    }
}

#[derive(Debug, Error)]
/// Catastrophic conditions that abort the whole operation.
pub enum AppError {
    #[error("{}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error(transparent)]
    Classify(#[from] ClassifyError),
    #[error("cannot allocate {count} ids after TKT-{last:05}: id space ends at TKT-99999")]
    IdSpaceExhausted { last: u32, count: usize },
}

impl AppError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        AppError::Io {
            path: path.into(),
            source,
        }
    }
}

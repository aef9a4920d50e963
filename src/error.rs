//! Error taxonomy for the benchmark core.
//!
//! Every failure is surfaced to the caller with enough context (operation,
//! offending value) to report to a user. Nothing is retried and no partial
//! results are returned: an operation either fully completes or yields only
//! an error.

use std::io;
use std::path::PathBuf;

/// Unified error type for loading, selection, and querying.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The record source could not be opened or read.
    #[error("source unavailable: {path}: {source}")]
    SourceUnavailable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A row failed type validation during load. The whole load aborts;
    /// the store is never left partially populated.
    #[error("malformed record at line {line}: {source}")]
    MalformedRecord {
        line: u64,
        #[source]
        source: csv::Error,
    },

    /// A caller-supplied argument was rejected before any algorithm ran.
    #[error("invalid argument for {what}: {value:?}")]
    InvalidArgument { what: &'static str, value: String },

    /// The caller selected a sorting strategy this crate does not provide.
    #[error("unknown strategy: {0:?} (expected bubble, insertion, or merge)")]
    UnknownStrategy(String),

    /// The caller selected a field outside the record's declared field set.
    #[error("unknown field: {0:?} (expected ID, FirstName, or LastName)")]
    UnknownField(String),
}

/// Result type alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

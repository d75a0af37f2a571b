//! Ingestion error types.
//!
//! These never leave [`crate::ingest::ingest`]; they are logged and counted.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while reading one source document.
#[derive(Debug, Error)]
pub enum IngestError {
    /// The document could not be read.
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The document is not valid JSON.
    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },

    /// The document parsed but has no row array in a known place.
    #[error("no record array in {path}")]
    NoRows { path: PathBuf },

    /// Neither the document nor its file name names a year.
    #[error("cannot resolve a year for {path}")]
    NoYear { path: PathBuf },
}

impl IngestError {
    /// Returns `true` when the source simply was not there.
    pub fn is_missing(&self) -> bool {
        matches!(self, Self::Io { source, .. } if source.kind() == std::io::ErrorKind::NotFound)
    }
}

/// Convenience alias for ingestion results.
pub type IngestResult<T> = std::result::Result<T, IngestError>;

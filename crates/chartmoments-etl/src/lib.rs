//! Ingestion and merge for chartmoments.
//!
//! Loads the primary bulk source, scans the supplemental per-year files,
//! repairs supplemental rows, and merges everything into one corpus.
//! Nothing here fails outward: missing or malformed sources shrink the
//! corpus and show up in the [`IngestReport`].

#![deny(unsafe_code)]
#![warn(missing_debug_implementations)]

pub mod config;
pub mod error;
pub mod ingest;

pub use config::Config;
pub use error::{IngestError, IngestResult};
pub use ingest::{ingest, IngestReport, Ingested};

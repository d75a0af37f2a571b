//! Core domain model for chartmoments.
//!
//! This crate defines the chart record ("moment"), chart-name
//! canonicalization, the immutable corpus with its summary stats, and the
//! ordered repair pipeline that fixes artist/title drift in scraped rows.

#![deny(unsafe_code)]
#![warn(missing_debug_implementations)]

pub mod error;
pub mod model;
pub mod repair;

pub use error::{Error, Result};
pub use model::{canonicalize_chart, Corpus, Record, Stats};
pub use repair::{Fields, RepairContext, RepairOutcome, RepairPipeline};

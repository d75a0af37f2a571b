//! Retrieval for chartmoments.
//!
//! Builds the by-year and by-year-and-chart indexes over an ingested corpus
//! and answers top-N, number-one and random-pick queries against them.
//! Everything is read-only once built; the process-wide engine is created
//! on first use and shared from then on.

#![deny(unsafe_code)]
#![warn(missing_debug_implementations)]

pub mod engine;
pub mod index;
pub mod query;

pub use engine::{engine, init, ChartEngine, DEFAULT_TOP_LIMIT};
pub use index::ChartIndex;
pub use query::{FallbackPolicy, PickMeta, RandomPick, Strategy};

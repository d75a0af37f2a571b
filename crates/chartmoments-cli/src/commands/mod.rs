pub mod config;
pub mod query;
pub mod repair;
pub mod stats;

use anyhow::{Context, Result};
use serde::Serialize;

use chartmoments_core::Record;

pub use query::{show_number_one, show_random, show_top};
pub use repair::run_repair;
pub use stats::show_stats;

/// Print a value as pretty JSON on stdout.
fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    let out = serde_json::to_string_pretty(value).context("Failed to serialize output")?;
    println!("{out}");
    Ok(())
}

/// One record on one line: rank, artist, title, chart.
fn format_record(record: &Record) -> String {
    let rank = record
        .rank
        .map_or_else(|| "  -".to_string(), |r| format!("{r:>3}"));
    format!(
        "{rank}  {} - {}  [{}]",
        record.artist, record.title, record.chart
    )
}

//! The primary bulk source.
//!
//! A JSON array of records, or an object holding one under a known key.
//! Records are trusted as clean and are not repaired.

use serde_json::{Map, Value};
use std::path::{Path, PathBuf};

use chartmoments_core::model::chart::BILLBOARD_HOT_100;
use chartmoments_core::model::{normalize_rank, parse_year};
use chartmoments_core::Record;

use super::fields::{self, Field};
use crate::error::{IngestError, IngestResult};

/// Keys that may hold the record array in an object-shaped document.
const RECORD_KEYS: &[&str] = &["records", "moments", "data", "rows"];

/// Records read from one primary candidate.
#[derive(Debug)]
pub struct PrimaryLoad {
    pub path: PathBuf,
    pub records: Vec<Record>,
    pub rejected: usize,
}

/// Try each candidate in order; the first that parses and yields at least
/// one record wins.
pub fn load_first(candidates: &[PathBuf]) -> Option<PrimaryLoad> {
    for path in candidates {
        match load(path) {
            Ok(load) if !load.records.is_empty() => {
                log::info!(
                    "Loaded {} primary records from {} ({} rejected)",
                    load.records.len(),
                    path.display(),
                    load.rejected
                );
                return Some(load);
            }
            Ok(_) => log::warn!("Primary candidate {} has no usable records", path.display()),
            Err(e) if e.is_missing() => {
                log::debug!("Primary candidate {} not found", path.display());
            }
            Err(e) => log::warn!("Skipping primary candidate: {e}"),
        }
    }
    None
}

/// Read and parse one primary document.
pub fn load(path: &Path) -> IngestResult<PrimaryLoad> {
    let content = std::fs::read_to_string(path).map_err(|source| IngestError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let doc: Value = serde_json::from_str(&content).map_err(|source| IngestError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    let rows = record_array(&doc).ok_or_else(|| IngestError::NoRows {
        path: path.to_path_buf(),
    })?;

    let mut records = Vec::with_capacity(rows.len());
    let mut rejected = 0;
    for row in rows {
        match row.as_object().and_then(parse_record) {
            Some(record) => records.push(record),
            None => rejected += 1,
        }
    }

    Ok(PrimaryLoad {
        path: path.to_path_buf(),
        records,
        rejected,
    })
}

fn record_array(doc: &Value) -> Option<&Vec<Value>> {
    match doc {
        Value::Array(rows) => Some(rows),
        Value::Object(obj) => RECORD_KEYS
            .iter()
            .find_map(|key| obj.get(*key).and_then(Value::as_array)),
        _ => None,
    }
}

fn parse_record(row: &Map<String, Value>) -> Option<Record> {
    let year = fields::lookup(row, Field::Year).and_then(parse_year)?;
    let chart = fields::text(row, Field::Chart).unwrap_or_else(|| BILLBOARD_HOT_100.to_string());
    let rank = fields::lookup(row, Field::Rank).and_then(normalize_rank);
    let artist = fields::text(row, Field::Artist).unwrap_or_default();
    let title = fields::text(row, Field::Title).unwrap_or_default();

    Record::try_new(year, &chart, rank, &artist, &title)
        .map_err(|e| log::debug!("Rejected primary row {row:?}: {e}"))
        .ok()
}

//! Supplemental per-year chart files.
//!
//! Each document is one chart-year: an array of rows, or an object with a
//! `rows`/`data`/`chart` array. Rows need a rank and at least one of
//! artist/title, and every accepted row is repaired before it is kept.

use regex::Regex;
use serde_json::{Map, Value};
use std::path::Path;
use std::sync::OnceLock;
use walkdir::WalkDir;

use chartmoments_core::model::{canonicalize_chart, normalize_rank, parse_year};
use chartmoments_core::{Record, RepairPipeline};

use super::fields::{self, Field};
use super::IngestReport;
use crate::error::{IngestError, IngestResult};

const ROW_KEYS: &[&str] = &["rows", "data", "chart"];

/// One parsed supplemental document.
#[derive(Debug)]
struct Document {
    year: i32,
    chart: Option<String>,
    rows: Vec<Value>,
}

fn is_json_file(path: &Path) -> bool {
    path.extension()
        .is_some_and(|ext| ext.to_string_lossy().eq_ignore_ascii_case("json"))
}

/// Load and repair every supplemental document in `dir`.
///
/// Files are visited in file-name order. A missing directory yields no
/// records.
pub fn load_dir(
    dir: &Path,
    default_chart: &str,
    pipeline: &RepairPipeline,
    report: &mut IngestReport,
) -> Vec<Record> {
    if !dir.is_dir() {
        log::info!("No supplemental directory at {}", dir.display());
        return Vec::new();
    }

    let mut records = Vec::new();

    for entry in WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
        .into_iter()
        .filter_map(Result::ok)
    {
        let path = entry.path();
        if !path.is_file() || !is_json_file(path) {
            continue;
        }

        let doc = match read_document(path) {
            Ok(doc) => doc,
            Err(e) => {
                log::warn!("Skipping supplemental file: {e}");
                report.supplemental_files_skipped += 1;
                continue;
            }
        };
        report.supplemental_files += 1;

        let chart = doc.chart.as_deref().unwrap_or(default_chart);
        let before = records.len();
        for row in &doc.rows {
            if let Some(record) = process_row(row, doc.year, chart, pipeline, report) {
                records.push(record);
            }
        }

        log::debug!(
            "Read {}: {} of {} rows kept for {}",
            path.display(),
            records.len() - before,
            doc.rows.len(),
            doc.year
        );
    }

    records
}

fn read_document(path: &Path) -> IngestResult<Document> {
    let content = std::fs::read_to_string(path).map_err(|source| IngestError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let value: Value = serde_json::from_str(&content).map_err(|source| IngestError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    let (rows, header) = match value {
        Value::Array(rows) => (rows, None),
        Value::Object(mut obj) => {
            let rows = ROW_KEYS
                .iter()
                .find_map(|key| match obj.remove(*key) {
                    Some(Value::Array(rows)) => Some(rows),
                    Some(other) => {
                        obj.insert((*key).to_string(), other);
                        None
                    }
                    None => None,
                })
                .ok_or_else(|| IngestError::NoRows {
                    path: path.to_path_buf(),
                })?;
            (rows, Some(obj))
        }
        _ => {
            return Err(IngestError::NoRows {
                path: path.to_path_buf(),
            })
        }
    };

    let year = header
        .as_ref()
        .and_then(|h| fields::lookup(h, Field::Year))
        .and_then(parse_year)
        .or_else(|| {
            path.file_stem()
                .and_then(|stem| year_from_file_name(&stem.to_string_lossy()))
        })
        .ok_or_else(|| IngestError::NoYear {
            path: path.to_path_buf(),
        })?;

    let chart = header
        .as_ref()
        .and_then(|h| fields::text(h, Field::Chart))
        .map(|c| canonicalize_chart(&c));

    Ok(Document { year, chart, rows })
}

// Literal patterns; compilation cannot fail.
#[allow(clippy::expect_used)]
fn digit_runs() -> &'static Regex {
    static DIGITS: OnceLock<Regex> = OnceLock::new();
    DIGITS.get_or_init(|| Regex::new(r"\d+").expect("digit-run pattern is valid"))
}

#[allow(clippy::expect_used)]
fn century_year() -> &'static Regex {
    static YEAR: OnceLock<Regex> = OnceLock::new();
    YEAR.get_or_init(|| {
        Regex::new(r"(?:^|\D)((?:19|20)\d{2})").expect("century-year pattern is valid")
    })
}

/// Resolve a chart year from a file name.
///
/// A `19xx`/`20xx` opening a digit run wins, so dated stems such as
/// `top40_198401` or `hot100_19841231` resolve to their year. Failing that,
/// a 2-digit run in `80..=99` is read as 1980-1999.
pub fn year_from_file_name(name: &str) -> Option<i32> {
    if let Some(year) = century_year().captures(name).and_then(|c| c.get(1)) {
        return year.as_str().parse().ok();
    }

    digit_runs()
        .find_iter(name)
        .map(|m| m.as_str())
        .filter(|r| r.len() == 2)
        .filter_map(|r| r.parse::<i32>().ok())
        .find(|yy| (80..=99).contains(yy))
        .map(|yy| 1900 + yy)
}

fn process_row(
    row: &Value,
    year: i32,
    chart: &str,
    pipeline: &RepairPipeline,
    report: &mut IngestReport,
) -> Option<Record> {
    let Some(row) = row.as_object() else {
        report.rows_missing_fields += 1;
        return None;
    };

    let artist = fields::text(row, Field::Artist);
    let title = fields::text(row, Field::Title);
    if artist.is_none() && title.is_none() {
        report.rows_missing_fields += 1;
        return None;
    }

    let Some(rank) = row_rank(row) else {
        report.rows_missing_rank += 1;
        return None;
    };

    let outcome = pipeline.run(
        artist.as_deref().unwrap_or_default(),
        title.as_deref().unwrap_or_default(),
        year,
        Some(rank),
    );
    if outcome.changed() {
        report.rows_repaired += 1;
    }

    match Record::try_new(
        year,
        chart,
        Some(rank),
        &outcome.fields.artist,
        &outcome.fields.title,
    ) {
        Ok(record) => Some(record),
        Err(e) => {
            log::debug!("Dropped {year} #{rank} after repair: {e}");
            report.rows_dropped_after_repair += 1;
            None
        }
    }
}

fn row_rank(row: &Map<String, Value>) -> Option<u32> {
    fields::lookup(row, Field::Rank).and_then(normalize_rank)
}

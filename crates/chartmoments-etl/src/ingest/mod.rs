//! Corpus construction: primary source, supplemental files, merge.

pub mod fields;
pub mod primary;
pub mod supplemental;

use serde::Serialize;
use std::path::PathBuf;
use std::time::Instant;

use chartmoments_core::repair::overrides::OVERRIDES_VERSION;
use chartmoments_core::{Corpus, RepairPipeline};

use crate::config::Config;

/// Diagnostic counters from one ingestion run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct IngestReport {
    /// The primary candidate that was used, if any.
    pub primary_path: Option<PathBuf>,
    pub primary_records: usize,
    pub primary_rejected: usize,

    pub supplemental_files: usize,
    pub supplemental_files_skipped: usize,
    pub supplemental_records: usize,

    /// Rows with neither artist nor title.
    pub rows_missing_fields: usize,
    /// Rows without a usable rank.
    pub rows_missing_rank: usize,
    /// Rows left with an empty artist or title after repair.
    pub rows_dropped_after_repair: usize,
    /// Rows the repair pipeline rewrote.
    pub rows_repaired: usize,
}

impl IngestReport {
    pub fn total_records(&self) -> usize {
        self.primary_records + self.supplemental_records
    }
}

/// A built corpus and how it was built.
#[derive(Debug, Clone, Default)]
pub struct Ingested {
    pub corpus: Corpus,
    pub report: IngestReport,
}

/// Build the corpus from the configured sources.
///
/// Never fails: absent or unreadable sources contribute nothing and are
/// reflected in the report. Primary records are taken as they are;
/// supplemental rows go through the repair pipeline first.
pub fn ingest(config: &Config) -> Ingested {
    let started = Instant::now();
    let mut report = IngestReport::default();

    let mut records = Vec::new();
    if let Some(primary) = primary::load_first(&config.primary_candidate_paths()) {
        report.primary_path = Some(primary.path);
        report.primary_records = primary.records.len();
        report.primary_rejected = primary.rejected;
        records = primary.records;
    } else {
        log::warn!("No primary chart source found; continuing with supplemental data only");
    }

    let pipeline = RepairPipeline::standard();
    log::debug!("Repair overrides table v{}", OVERRIDES_VERSION);
    let supplemental = supplemental::load_dir(
        &config.supplemental_dir,
        &config.supplemental_chart,
        &pipeline,
        &mut report,
    );
    report.supplemental_records = supplemental.len();
    records.extend(supplemental);

    log::info!(
        "Corpus built in {:?}: {} primary + {} supplemental records \
         ({} repaired, {} rows rejected)",
        started.elapsed(),
        report.primary_records,
        report.supplemental_records,
        report.rows_repaired,
        report.rows_missing_fields + report.rows_missing_rank + report.rows_dropped_after_repair
    );

    Ingested {
        corpus: Corpus::new(records),
        report,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn config_for(dir: &TempDir) -> Config {
        Config::default()
            .with_primary_path(dir.path().join("moments.json"))
            .with_supplemental_dir(dir.path().join("top40"))
    }

    #[test]
    fn test_ingest_nothing_on_disk() {
        let dir = TempDir::new().unwrap();
        let ingested = ingest(&config_for(&dir));
        assert!(ingested.corpus.is_empty());
        assert!(ingested.report.primary_path.is_none());
        assert_eq!(ingested.report.total_records(), 0);
    }

    #[test]
    fn test_ingest_merges_primary_then_supplemental() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join("moments.json"),
            r#"[{"year": 1984, "chart": "Billboard Hot 100", "rank": 1,
                 "artist": "Prince", "title": "When Doves Cry"}]"#,
        )
        .unwrap();
        fs::create_dir(dir.path().join("top40")).unwrap();
        fs::write(
            dir.path().join("top40").join("1984.json"),
            r#"[{"rank": 10, "artist": "Chameleon Culture Club", "title": "Karma"}]"#,
        )
        .unwrap();

        let ingested = ingest(&config_for(&dir));
        let records = ingested.corpus.records();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].artist, "Prince");
        assert_eq!(records[1].artist, "Culture Club");
        assert_eq!(records[1].title, "Karma Chameleon");
        assert_eq!(records[1].chart, "Top40Weekly Top 100");
        assert_eq!(ingested.report.rows_repaired, 1);
        assert_eq!(ingested.report.total_records(), 2);
    }

    #[test]
    fn test_primary_rows_are_not_repaired() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join("moments.json"),
            r#"[{"year": 1984, "chart": "Billboard Hot 100", "rank": 10,
                 "artist": "Chameleon Culture Club", "title": "Karma"}]"#,
        )
        .unwrap();

        let ingested = ingest(&config_for(&dir));
        assert_eq!(ingested.corpus.records()[0].artist, "Chameleon Culture Club");
        assert_eq!(ingested.report.rows_repaired, 0);
    }

    #[test]
    fn test_ingest_is_reproducible() {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join("top40")).unwrap();
        for year in [1986, 1984, 1985] {
            fs::write(
                dir.path().join("top40").join(format!("top40_{year}.json")),
                r#"[
                    {"rank": 1, "artist": "A", "title": "B"},
                    {"rank": 2, "artist": "C", "title": "D"}
                ]"#,
            )
            .unwrap();
        }

        let first = ingest(&config_for(&dir));
        let second = ingest(&config_for(&dir));
        assert_eq!(first.report, second.report);
        let years = |i: &Ingested| i.corpus.records().iter().map(|r| r.year).collect::<Vec<_>>();
        assert_eq!(years(&first), years(&second));
        assert_eq!(years(&first), vec![1984, 1984, 1985, 1985, 1986, 1986]);
    }
}

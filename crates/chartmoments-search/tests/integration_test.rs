//! End-to-end tests: source files on disk through ingestion, indexing and
//! queries.

use std::fs;
use std::path::Path;
use tempfile::TempDir;

use chartmoments_core::model::chart::{BILLBOARD_HOT_100, TOP40_WEEKLY};
use chartmoments_etl::Config;
use chartmoments_search::{ChartEngine, Strategy, DEFAULT_TOP_LIMIT};

fn write_fixture(root: &Path) -> Config {
    let mut rows = Vec::new();
    // Primary file lists 1988 in reverse chart order on purpose.
    for rank in (1..=12).rev() {
        rows.push(format!(
            r#"{{"year": 1988, "chart": "Billboard Hot 100", "rank": {rank},
                "artist": "Artist {rank:02}", "title": "Song {rank}"}}"#
        ));
    }
    rows.push(
        r#"{"year": 1988, "chart": "Billboard Hot 100", "rank": 0,
            "artist": "Zero", "title": "Ranked Zero"}"#
            .to_string(),
    );
    rows.push(
        r#"{"year": 1990, "chart": "Billboard Year-End", "rank": 1,
            "artist": "Wilson Phillips", "title": "Hold On"}"#
            .to_string(),
    );
    let primary = root.join("moments.json");
    fs::write(&primary, format!(r#"{{"records": [{}]}}"#, rows.join(","))).unwrap();

    let supplemental = root.join("top40weekly");
    fs::create_dir(&supplemental).unwrap();
    fs::write(
        supplemental.join("top40weekly_1984.json"),
        r#"[
            {"rank": 8, "artist": "Heart Yes", "title": "Owner of a Lonely"},
            {"rank": 10, "artist": "Chameleon Culture Club", "title": "Karma"},
            {"rank": 1, "artist": "Prince", "title": "When Doves Cry"}
        ]"#,
    )
    .unwrap();

    Config::default()
        .with_primary_path(primary)
        .with_supplemental_dir(supplemental)
}

#[test]
fn test_top_ten_for_1988_in_rank_order() {
    let dir = TempDir::new().unwrap();
    let engine = ChartEngine::build(&write_fixture(dir.path()));

    let top = engine.top_by_year(1988, Some(BILLBOARD_HOT_100), DEFAULT_TOP_LIMIT);
    assert_eq!(top.len(), 10);
    let ranks: Vec<u32> = top.iter().filter_map(|r| r.rank).collect();
    assert_eq!(ranks, (1..=10).collect::<Vec<_>>());
    assert_eq!(top[0].artist, "Artist 01");
}

#[test]
fn test_zero_rank_never_survives() {
    let dir = TempDir::new().unwrap();
    let engine = ChartEngine::build(&write_fixture(dir.path()));

    assert!(engine.corpus().records().iter().all(|r| r.rank != Some(0)));
    let pool = engine.pool_for_year(1988, Some(BILLBOARD_HOT_100));
    assert_eq!(pool.last().map(|r| r.artist.as_str()), Some("Zero"));
    assert_eq!(pool.last().and_then(|r| r.rank), None);
}

#[test]
fn test_rank_monotonic_for_every_year_chart() {
    let dir = TempDir::new().unwrap();
    let engine = ChartEngine::build(&write_fixture(dir.path()));

    for year in [1984, 1988, 1990] {
        for (chart, _) in engine.charts_for_year(year) {
            let ranks: Vec<u32> = engine
                .top_by_year(year, Some(chart), 100)
                .iter()
                .filter_map(|r| r.rank)
                .collect();
            assert!(ranks.windows(2).all(|w| w[0] <= w[1]), "{year} {chart}");
        }
    }
}

#[test]
fn test_supplemental_rows_repaired_and_queryable() {
    let dir = TempDir::new().unwrap();
    let engine = ChartEngine::build(&write_fixture(dir.path()));

    let top = engine.top_by_year(1984, Some("Top40Weekly"), DEFAULT_TOP_LIMIT);
    let pairs: Vec<(&str, &str)> = top
        .iter()
        .map(|r| (r.artist.as_str(), r.title.as_str()))
        .collect();
    assert_eq!(
        pairs,
        vec![
            ("Prince", "When Doves Cry"),
            ("Yes", "Owner of a Lonely Heart"),
            ("Culture Club", "Karma Chameleon"),
        ]
    );
    assert_eq!(engine.report().rows_repaired, 2);
}

#[test]
fn test_misses_are_empty_results() {
    let dir = TempDir::new().unwrap();
    let engine = ChartEngine::build(&write_fixture(dir.path()));

    assert!(engine.number_one_by_year(1975, Some(BILLBOARD_HOT_100)).is_none());
    assert!(engine.pool_for_year(2099, None).is_empty());
    assert!(!engine.has_year_chart(1975, BILLBOARD_HOT_100));
    assert_eq!(engine.year_chart_count(1988, BILLBOARD_HOT_100), 13);

    let pick = engine.pick_random_by_year_with_meta(2099, TOP40_WEEKLY);
    assert!(pick.record.is_none());
    assert_eq!(pick.meta.strategy, Strategy::None);
    assert_eq!(pick.meta.pool_size, 0);
}

#[test]
fn test_random_pick_falls_back_to_primary_chart() {
    let dir = TempDir::new().unwrap();
    let engine = ChartEngine::build(&write_fixture(dir.path()));

    let pick = engine.pick_random_by_year_with_meta(1988, TOP40_WEEKLY);
    assert_eq!(pick.meta.strategy, Strategy::Fallback);
    assert_eq!(pick.meta.chart.as_deref(), Some(BILLBOARD_HOT_100));
    assert_eq!(pick.meta.pool_size, 13);

    let pick = engine.pick_random_by_year_with_meta(1990, TOP40_WEEKLY);
    assert_eq!(pick.meta.strategy, Strategy::Backup);
    assert_eq!(pick.record.map(|r| r.artist.as_str()), Some("Wilson Phillips"));
}

#[test]
fn test_stats_cover_both_sources() {
    let dir = TempDir::new().unwrap();
    let engine = ChartEngine::build(&write_fixture(dir.path()));

    let stats = engine.stats();
    assert_eq!(stats.total_records, 17);
    assert_eq!(stats.min_year, Some(1984));
    assert_eq!(stats.max_year, Some(1990));
    assert_eq!(
        stats.chart_names,
        vec![
            "Billboard Hot 100".to_string(),
            "Billboard Year-End Hot 100".to_string(),
            "Top40Weekly Top 100".to_string(),
        ]
    );
}

#[test]
fn test_rebuild_is_structurally_identical() {
    let dir = TempDir::new().unwrap();
    let config = write_fixture(dir.path());
    let first = ChartEngine::build(&config);
    let second = ChartEngine::build(&config);

    assert_eq!(first.stats(), second.stats());
    assert_eq!(first.report(), second.report());
    for year in [1984, 1988, 1990] {
        let a: Vec<_> = first.pool_for_year(year, None).iter().map(|r| (**r).clone()).collect();
        let b: Vec<_> = second.pool_for_year(year, None).iter().map(|r| (**r).clone()).collect();
        assert_eq!(a, b);
    }
}

#[test]
fn test_missing_sources_give_empty_engine() {
    let dir = TempDir::new().unwrap();
    let config = Config::default()
        .with_primary_path(dir.path().join("absent.json"))
        .with_supplemental_dir(dir.path().join("absent"));
    let engine = ChartEngine::build(&config);

    assert_eq!(engine.stats().total_records, 0);
    assert!(engine.top_by_year(1988, Some(BILLBOARD_HOT_100), DEFAULT_TOP_LIMIT).is_empty());
    assert_eq!(
        engine.pick_random_by_year_with_meta(1988, BILLBOARD_HOT_100).meta.strategy,
        Strategy::None
    );
}

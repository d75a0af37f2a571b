//! The query engine and its process-wide instance.

use rand::Rng;
use std::sync::{Arc, OnceLock};
use std::time::Instant;

use chartmoments_core::{canonicalize_chart, Corpus, Record, Stats};
use chartmoments_etl::{ingest, Config, IngestReport, Ingested};

use crate::index::{rank_key, ChartIndex};
use crate::query::{FallbackPolicy, PickMeta, RandomPick, Strategy};

/// Entries returned by a top-N query when the caller has no preference.
pub const DEFAULT_TOP_LIMIT: usize = 10;

static ENGINE: OnceLock<ChartEngine> = OnceLock::new();

/// The shared engine, built from [`Config::load`] on first call.
///
/// Concurrent first calls build exactly once; every caller sees the same
/// instance. A configuration error falls back to the defaults.
pub fn engine() -> &'static ChartEngine {
    ENGINE.get_or_init(|| {
        let config = Config::load().unwrap_or_else(|e| {
            log::warn!("Failed to load configuration, using defaults: {e:#}");
            Config::default()
        });
        ChartEngine::build(&config)
    })
}

/// Build the shared engine from an explicit configuration.
///
/// Has no effect if the engine already exists; the existing instance is
/// returned either way.
pub fn init(config: &Config) -> &'static ChartEngine {
    ENGINE.get_or_init(|| ChartEngine::build(config))
}

/// An immutable corpus with its indexes, answering retrieval queries.
///
/// Nothing here mutates after construction, so a shared reference may be
/// used from any number of threads.
#[derive(Debug, Clone)]
pub struct ChartEngine {
    corpus: Corpus,
    index: ChartIndex,
    stats: Stats,
    report: IngestReport,
    policy: FallbackPolicy,
}

impl ChartEngine {
    /// Ingest the configured sources and index the result.
    pub fn build(config: &Config) -> Self {
        let Ingested { corpus, report } = ingest(config);
        Self::assemble(corpus, report, FallbackPolicy::from_config(config))
    }

    /// Index an already-built corpus.
    pub fn from_corpus(corpus: Corpus, policy: FallbackPolicy) -> Self {
        Self::assemble(corpus, IngestReport::default(), policy)
    }

    fn assemble(corpus: Corpus, report: IngestReport, policy: FallbackPolicy) -> Self {
        let started = Instant::now();
        let index = ChartIndex::build(&corpus);
        let stats = corpus.stats();

        log::info!(
            "Indexed {} records over {} years in {:?}",
            stats.total_records,
            index.years().count(),
            started.elapsed()
        );

        Self {
            corpus,
            index,
            stats,
            report,
            policy,
        }
    }

    /// Records for a year, optionally restricted to one chart.
    ///
    /// With a chart the bucket is rank-sorted; without one it is in corpus
    /// order. Unknown years and charts give an empty slice.
    pub fn pool_for_year(&self, year: i32, chart: Option<&str>) -> &[Arc<Record>] {
        match chart {
            Some(chart) => self.index.year_chart(year, &canonicalize_chart(chart)),
            None => self.index.year(year),
        }
    }

    /// Up to `limit` records for a year, best rank first.
    ///
    /// When no record in the pool carries a rank, the records are ordered
    /// by artist instead.
    pub fn top_by_year(&self, year: i32, chart: Option<&str>, limit: usize) -> Vec<&Record> {
        if limit == 0 {
            return Vec::new();
        }

        let mut top: Vec<&Record> = self
            .pool_for_year(year, chart)
            .iter()
            .map(AsRef::as_ref)
            .collect();

        if !top.iter().any(|r| r.is_ranked()) {
            top.sort_by_cached_key(|r| r.artist.to_lowercase());
        } else if chart.is_none() {
            top.sort_by_key(|r| rank_key(r));
        }

        top.truncate(limit);
        top
    }

    /// The best-ranked record for a year, if any.
    pub fn number_one_by_year(&self, year: i32, chart: Option<&str>) -> Option<&Record> {
        self.top_by_year(year, chart, 1).into_iter().next()
    }

    /// A uniformly random record for a year, walking the fallback chain.
    pub fn pick_random_by_year_with_meta(&self, year: i32, chart: &str) -> RandomPick<'_> {
        self.pick_random_by_year_with_meta_using(&mut rand::rng(), year, chart)
    }

    /// Like [`Self::pick_random_by_year_with_meta`], drawing from `rng`.
    pub fn pick_random_by_year_with_meta_using<R: Rng>(
        &self,
        rng: &mut R,
        year: i32,
        chart: &str,
    ) -> RandomPick<'_> {
        let requested = canonicalize_chart(chart);

        for (strategy, tier_chart) in self.policy.tiers(&requested) {
            let pool = self.index.year_chart(year, &tier_chart);
            if let Some(record) = choose(rng, pool) {
                log::debug!("Random pick for {year} {requested} via {strategy} ({tier_chart})");
                return RandomPick {
                    record: Some(record),
                    meta: PickMeta {
                        strategy,
                        requested_chart: requested,
                        chart: Some(tier_chart),
                        pool_size: pool.len(),
                    },
                };
            }
        }

        let pool = self.index.year(year);
        match choose(rng, pool) {
            Some(record) => RandomPick {
                record: Some(record),
                meta: PickMeta {
                    strategy: Strategy::AnyChart,
                    requested_chart: requested,
                    chart: Some(record.chart.clone()),
                    pool_size: pool.len(),
                },
            },
            None => RandomPick {
                record: None,
                meta: PickMeta::none(requested),
            },
        }
    }

    pub fn has_year_chart(&self, year: i32, chart: &str) -> bool {
        self.year_chart_count(year, chart) > 0
    }

    pub fn year_chart_count(&self, year: i32, chart: &str) -> usize {
        self.pool_for_year(year, Some(chart)).len()
    }

    /// Charts with data for a year and their record counts.
    pub fn charts_for_year(&self, year: i32) -> Vec<(&str, usize)> {
        self.index.charts_for_year(year).collect()
    }

    pub fn stats(&self) -> &Stats {
        &self.stats
    }

    /// Counters from the ingestion run that built this engine.
    pub fn report(&self) -> &IngestReport {
        &self.report
    }

    pub fn corpus(&self) -> &Corpus {
        &self.corpus
    }
}

fn choose<'a, R: Rng>(rng: &mut R, pool: &'a [Arc<Record>]) -> Option<&'a Record> {
    if pool.is_empty() {
        return None;
    }
    Some(pool[rng.random_range(0..pool.len())].as_ref())
}

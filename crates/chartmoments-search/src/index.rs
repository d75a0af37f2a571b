//! Year and year/chart indexes.

use std::collections::BTreeMap;
use std::sync::Arc;

use chartmoments_core::{Corpus, Record};

/// Both lookup structures over one corpus.
///
/// Buckets hold shared references to the corpus records, never copies.
#[derive(Debug, Clone, Default)]
pub struct ChartIndex {
    /// Year to records in corpus order.
    by_year: BTreeMap<i32, Vec<Arc<Record>>>,

    /// Year to chart to records sorted by rank, unranked last.
    by_year_chart: BTreeMap<i32, BTreeMap<String, Vec<Arc<Record>>>>,
}

impl ChartIndex {
    pub fn build(corpus: &Corpus) -> Self {
        let mut by_year: BTreeMap<i32, Vec<Arc<Record>>> = BTreeMap::new();
        let mut by_year_chart: BTreeMap<i32, BTreeMap<String, Vec<Arc<Record>>>> =
            BTreeMap::new();

        for record in corpus.records() {
            by_year
                .entry(record.year)
                .or_default()
                .push(Arc::clone(record));
            by_year_chart
                .entry(record.year)
                .or_default()
                .entry(record.chart.clone())
                .or_default()
                .push(Arc::clone(record));
        }

        for bucket in by_year_chart.values_mut().flat_map(BTreeMap::values_mut) {
            sort_by_rank(bucket);
        }

        Self {
            by_year,
            by_year_chart,
        }
    }

    /// All records for `year`, in corpus order.
    pub fn year(&self, year: i32) -> &[Arc<Record>] {
        self.by_year
            .get(&year)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Records for `year` on `chart`, rank-sorted. `chart` must already be
    /// canonical.
    pub fn year_chart(&self, year: i32, chart: &str) -> &[Arc<Record>] {
        self.by_year_chart
            .get(&year)
            .and_then(|charts| charts.get(chart))
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Charts with data for `year`, by name.
    pub fn charts_for_year(&self, year: i32) -> impl Iterator<Item = (&str, usize)> + '_ {
        self.by_year_chart
            .get(&year)
            .into_iter()
            .flat_map(|charts| charts.iter().map(|(name, bucket)| (name.as_str(), bucket.len())))
    }

    /// Indexed years, ascending.
    pub fn years(&self) -> impl Iterator<Item = i32> + '_ {
        self.by_year.keys().copied()
    }
}

/// Sort key placing ranked records first, ascending, then unranked ones.
pub(crate) fn rank_key(record: &Record) -> (bool, Option<u32>) {
    (record.rank.is_none(), record.rank)
}

/// Stable, so ties and the unranked tail keep their incoming order.
fn sort_by_rank(records: &mut [Arc<Record>]) {
    records.sort_by_key(|r| rank_key(r));
}

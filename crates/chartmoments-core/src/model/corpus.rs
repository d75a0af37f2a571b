use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::sync::Arc;

use crate::model::record::Record;

/// The merged, repaired set of records.
///
/// Immutable once built. Records are reference-counted so indexes can share
/// them without copying.
#[derive(Debug, Clone, Default)]
pub struct Corpus {
    records: Vec<Arc<Record>>,
}

impl Corpus {
    #[must_use]
    pub fn new(records: Vec<Record>) -> Self {
        Self {
            records: records.into_iter().map(Arc::new).collect(),
        }
    }

    /// Records in insertion order.
    pub fn records(&self) -> &[Arc<Record>] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Summarize the corpus for diagnostics.
    pub fn stats(&self) -> Stats {
        let mut chart_names = BTreeSet::new();
        let mut min_year: Option<i32> = None;
        let mut max_year: Option<i32> = None;

        for record in &self.records {
            chart_names.insert(record.chart.as_str());
            min_year = Some(min_year.map_or(record.year, |y| y.min(record.year)));
            max_year = Some(max_year.map_or(record.year, |y| y.max(record.year)));
        }

        Stats {
            total_records: self.records.len(),
            min_year,
            max_year,
            chart_names: chart_names.into_iter().map(String::from).collect(),
        }
    }
}

/// Derived summary of a corpus. Never consulted for query answers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stats {
    pub total_records: usize,
    pub min_year: Option<i32>,
    pub max_year: Option<i32>,

    /// Distinct chart names, sorted.
    pub chart_names: Vec<String>,
}

//! Random-pick fallback chain and the metadata reported with each pick.

use serde::Serialize;
use std::collections::HashMap;

use chartmoments_core::model::chart::{BILLBOARD_HOT_100, BILLBOARD_YEAR_END, TOP40_WEEKLY};
use chartmoments_core::{canonicalize_chart, Record};
use chartmoments_etl::Config;

/// Which tier of the fallback chain produced a pick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    /// The chart the caller asked for.
    Requested,
    /// The single chart configured in place of the requested one.
    Fallback,
    /// The fixed backup chart.
    Backup,
    /// Any record for the year, whatever its chart.
    AnyChart,
    /// Nothing for the year at all.
    None,
}

impl Strategy {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Requested => "requested",
            Self::Fallback => "fallback",
            Self::Backup => "backup",
            Self::AnyChart => "any_chart",
            Self::None => "none",
        }
    }
}

impl std::fmt::Display for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Provenance of a random pick.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PickMeta {
    pub strategy: Strategy,

    /// The requested chart, canonicalized.
    pub requested_chart: String,

    /// Chart the record was drawn from. `None` when nothing was found.
    pub chart: Option<String>,

    /// Size of the pool the pick was drawn from.
    pub pool_size: usize,
}

impl PickMeta {
    pub fn none(requested_chart: String) -> Self {
        Self {
            strategy: Strategy::None,
            requested_chart,
            chart: None,
            pool_size: 0,
        }
    }
}

/// A random record with its provenance.
#[derive(Debug, Clone, Serialize)]
pub struct RandomPick<'a> {
    pub record: Option<&'a Record>,
    pub meta: PickMeta,
}

/// Charts tried, in order, when the requested chart has nothing for a year.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FallbackPolicy {
    fallback_charts: HashMap<String, String>,
    backup_chart: Option<String>,
}

impl Default for FallbackPolicy {
    fn default() -> Self {
        Self::new(
            HashMap::from([(TOP40_WEEKLY.to_string(), BILLBOARD_HOT_100.to_string())]),
            Some(BILLBOARD_YEAR_END.to_string()),
        )
    }
}

impl FallbackPolicy {
    /// Build a policy. Chart names on both sides are canonicalized.
    pub fn new(fallback_charts: HashMap<String, String>, backup_chart: Option<String>) -> Self {
        Self {
            fallback_charts: fallback_charts
                .into_iter()
                .map(|(from, to)| (canonicalize_chart(&from), canonicalize_chart(&to)))
                .collect(),
            backup_chart: backup_chart.map(|c| canonicalize_chart(&c)),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.fallback_charts.clone(), config.backup_chart.clone())
    }

    /// A policy with no fallback and no backup: requested chart, then any.
    pub fn requested_only() -> Self {
        Self::new(HashMap::new(), None)
    }

    pub fn fallback_for(&self, chart: &str) -> Option<&str> {
        self.fallback_charts.get(chart).map(String::as_str)
    }

    pub fn backup_chart(&self) -> Option<&str> {
        self.backup_chart.as_deref()
    }

    /// The chart-specific tiers for a canonical requested chart.
    ///
    /// A tier naming a chart already listed is left out.
    pub fn tiers(&self, requested: &str) -> Vec<(Strategy, String)> {
        let mut tiers = vec![(Strategy::Requested, requested.to_string())];

        let candidates = [
            (Strategy::Fallback, self.fallback_for(requested)),
            (Strategy::Backup, self.backup_chart()),
        ];
        for (strategy, chart) in candidates {
            if let Some(chart) = chart {
                if !tiers.iter().any(|(_, tried)| tried == chart) {
                    tiers.push((strategy, chart.to_string()));
                }
            }
        }

        tiers
    }
}

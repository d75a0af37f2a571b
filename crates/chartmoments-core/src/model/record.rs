use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{Error, Result};
use crate::model::chart::canonicalize_chart;

/// Lowest and highest chart position a rank may take.
pub const MIN_RANK: u32 = 1;
pub const MAX_RANK: u32 = 100;

/// One chart entry: which song held which position, on which chart, in
/// which year.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Record {
    pub year: i32,
    pub chart: String,

    /// Chart position in `1..=100`, or `None` when the source had no usable
    /// rank. Never `Some(0)`.
    pub rank: Option<u32>,

    pub artist: String,
    pub title: String,
}

impl Record {
    /// Build a record, enforcing the model invariants.
    ///
    /// The chart is canonicalized, an out-of-range rank becomes `None`, and
    /// artist/title are whitespace-normalized.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidYear`] when `year` is not a 4-digit year and
    /// [`Error::EmptyField`] when artist or title is blank.
    pub fn try_new(
        year: i32,
        chart: &str,
        rank: Option<u32>,
        artist: &str,
        title: &str,
    ) -> Result<Self> {
        if !is_four_digit_year(i64::from(year)) {
            return Err(Error::InvalidYear(i64::from(year)));
        }

        let artist = collapse_whitespace(artist);
        if artist.is_empty() {
            return Err(Error::EmptyField("artist"));
        }
        let title = collapse_whitespace(title);
        if title.is_empty() {
            return Err(Error::EmptyField("title"));
        }

        Ok(Self {
            year,
            chart: canonicalize_chart(chart),
            rank: rank.filter(|r| (MIN_RANK..=MAX_RANK).contains(r)),
            artist,
            title,
        })
    }

    /// Returns `true` when the record carries a chart position.
    pub const fn is_ranked(&self) -> bool {
        self.rank.is_some()
    }
}

/// Normalize a raw rank value from a source document.
///
/// Accepts JSON integers and numeric strings (`"7"`, `"#7"`, `"7."`).
/// Values outside `1..=100` and non-numeric input yield `None`; a zero rank
/// is never produced.
#[allow(clippy::cast_possible_truncation)]
pub fn normalize_rank(value: &Value) -> Option<u32> {
    let n = match value {
        Value::Number(n) => n.as_i64().or_else(|| {
            n.as_f64()
                .filter(|f| f.fract() == 0.0)
                .map(|f| f as i64)
        })?,
        Value::String(s) => {
            let s = s.trim();
            let s = s.strip_prefix('#').unwrap_or(s);
            let s = s.strip_suffix('.').unwrap_or(s);
            s.trim().parse::<i64>().ok()?
        }
        _ => return None,
    };

    u32::try_from(n)
        .ok()
        .filter(|r| (MIN_RANK..=MAX_RANK).contains(r))
}

/// Parse a 4-digit year from a JSON integer or numeric string.
pub fn parse_year(value: &Value) -> Option<i32> {
    let n = match value {
        Value::Number(n) => n.as_i64()?,
        Value::String(s) => s.trim().parse::<i64>().ok()?,
        _ => return None,
    };

    if is_four_digit_year(n) {
        i32::try_from(n).ok()
    } else {
        None
    }
}

fn is_four_digit_year(n: i64) -> bool {
    (1000..=9999).contains(&n)
}

/// Trim and collapse runs of whitespace into single spaces.
pub fn collapse_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

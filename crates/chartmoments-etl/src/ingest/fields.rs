//! Tolerant field matching for historical row spellings.
//!
//! Keys are compared after lowercasing and dropping everything that is not
//! a letter or digit, so `Song Title`, `song_title` and `songTitle` all
//! match the `songtitle` alias.

use serde_json::{Map, Value};

const RANK_ALIASES: &[&str] = &["rank", "position", "pos", "#", "no", "number", "place"];
const ARTIST_ALIASES: &[&str] = &["artist", "artistname", "artists", "performer"];
const TITLE_ALIASES: &[&str] = &["title", "song", "songtitle", "track", "name"];
const CHART_ALIASES: &[&str] = &["chart", "chartname"];
const YEAR_ALIASES: &[&str] = &["year", "chartyear"];

/// A supported row field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Rank,
    Artist,
    Title,
    Chart,
    Year,
}

impl Field {
    fn aliases(self) -> &'static [&'static str] {
        match self {
            Self::Rank => RANK_ALIASES,
            Self::Artist => ARTIST_ALIASES,
            Self::Title => TITLE_ALIASES,
            Self::Chart => CHART_ALIASES,
            Self::Year => YEAR_ALIASES,
        }
    }
}

/// Lowercase and keep only alphanumerics; a key made only of `#` stays `#`.
fn normalize_key(key: &str) -> String {
    let normalized: String = key
        .chars()
        .filter(|c| c.is_alphanumeric())
        .flat_map(char::to_lowercase)
        .collect();
    if normalized.is_empty() && key.trim() == "#" {
        return "#".to_string();
    }
    normalized
}

/// Find the value stored under any alias of `field`.
///
/// Aliases are tried in their declared order, so an exact `rank` key beats
/// a looser `number` key in the same row.
pub fn lookup<'a>(row: &'a Map<String, Value>, field: Field) -> Option<&'a Value> {
    let keys: Vec<(String, &Value)> = row.iter().map(|(k, v)| (normalize_key(k), v)).collect();

    field.aliases().iter().find_map(|alias| {
        keys.iter()
            .find(|(k, v)| k == alias && !v.is_null())
            .map(|(_, v)| *v)
    })
}

/// Read a field as trimmed text; numbers are rendered, blanks are `None`.
pub fn text(row: &Map<String, Value>, field: Field) -> Option<String> {
    let value = match lookup(row, field)? {
        Value::String(s) => chartmoments_core::model::collapse_whitespace(s),
        Value::Number(n) => n.to_string(),
        _ => return None,
    };
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}

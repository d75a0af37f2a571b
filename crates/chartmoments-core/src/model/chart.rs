//! Chart-name canonicalization.
//!
//! Canonicalization is a pure table lookup: a recognized alias is rewritten
//! to its canonical long name, anything else is returned unchanged.

pub const BILLBOARD_HOT_100: &str = "Billboard Hot 100";
pub const BILLBOARD_YEAR_END: &str = "Billboard Year-End Hot 100";
pub const TOP40_WEEKLY: &str = "Top40Weekly Top 100";
pub const UK_SINGLES: &str = "UK Singles Chart";

/// Every canonical chart name known to the model.
pub const CANONICAL_CHARTS: &[&str] = &[
    BILLBOARD_HOT_100,
    BILLBOARD_YEAR_END,
    TOP40_WEEKLY,
    UK_SINGLES,
];

/// Alias to canonical name. Matched case-insensitively on trimmed input.
const CHART_ALIASES: &[(&str, &str)] = &[
    ("Billboard", BILLBOARD_HOT_100),
    ("Hot 100", BILLBOARD_HOT_100),
    ("Billboard Hot100", BILLBOARD_HOT_100),
    ("billboard_hot_100", BILLBOARD_HOT_100),
    ("Billboard Year-End", BILLBOARD_YEAR_END),
    ("Billboard Year End Hot 100", BILLBOARD_YEAR_END),
    ("Year-End Hot 100", BILLBOARD_YEAR_END),
    ("Top40Weekly", TOP40_WEEKLY),
    ("Top 40 Weekly", TOP40_WEEKLY),
    ("top40weekly.com", TOP40_WEEKLY),
    ("Top40Weekly Top100", TOP40_WEEKLY),
    ("UK Singles", UK_SINGLES),
    ("Official UK Singles Chart", UK_SINGLES),
];

/// Rewrite a raw chart name to its canonical spelling.
///
/// Unrecognized names pass through untouched, so they never compare equal
/// to a canonical name.
pub fn canonicalize_chart(raw: &str) -> String {
    let trimmed = raw.trim();

    if let Some(canonical) = CANONICAL_CHARTS
        .iter()
        .find(|name| name.eq_ignore_ascii_case(trimmed))
    {
        return (*canonical).to_string();
    }

    for &(alias, canonical) in CHART_ALIASES {
        if alias.eq_ignore_ascii_case(trimmed) {
            return canonical.to_string();
        }
    }

    raw.to_string()
}

/// Returns `true` when `name` is spelled exactly like a canonical chart.
pub fn is_canonical_chart(name: &str) -> bool {
    CANONICAL_CHARTS.contains(&name)
}

//! Exact-match corrections for rows no heuristic fixes safely.
//!
//! Each entry was observed verbatim in a supplemental file. Entries are
//! matched on all four keys against the raw row, never generalized, and
//! win over anything the earlier passes produced. Add an entry only with
//! the source row in hand.

use super::{Fields, RepairContext};

/// One correction: the raw row as scraped and the pair it should become.
#[derive(Debug, Clone, Copy)]
pub struct Override {
    pub year: i32,
    pub rank: u32,
    pub artist: &'static str,
    pub title: &'static str,
    pub fixed_artist: &'static str,
    pub fixed_title: &'static str,
}

/// Table revision, bumped whenever an entry is added or changed.
pub const OVERRIDES_VERSION: u32 = 3;

pub const OVERRIDES: &[Override] = &[
    Override {
        year: 1983,
        rank: 1,
        artist: "Police",
        title: "Every Breath You Take The",
        fixed_artist: "The Police",
        fixed_title: "Every Breath You Take",
    },
    Override {
        year: 1984,
        rank: 21,
        artist: "Pink Houses John Cougar Mellencamp",
        title: "",
        fixed_artist: "John Cougar Mellencamp",
        fixed_title: "Pink Houses",
    },
    Override {
        year: 1985,
        rank: 1,
        artist: "Whisper Wham! featuring George Michael",
        title: "Careless",
        fixed_artist: "Wham! featuring George Michael",
        fixed_title: "Careless Whisper",
    },
    Override {
        year: 1986,
        rank: 12,
        artist: "Hornsby & The Range",
        title: "The Way It Is Bruce",
        fixed_artist: "Bruce Hornsby & The Range",
        fixed_title: "The Way It Is",
    },
    Override {
        year: 1987,
        rank: 9,
        artist: "Mellencamp John Cougar",
        title: "Paper in Fire",
        fixed_artist: "John Cougar Mellencamp",
        fixed_title: "Paper in Fire",
    },
    Override {
        year: 1989,
        rank: 30,
        artist: "Edie Brickell & New Bohemians What I",
        title: "Am",
        fixed_artist: "Edie Brickell & New Bohemians",
        fixed_title: "What I Am",
    },
];

/// Look up a correction for a raw row.
pub fn lookup(year: i32, rank: Option<u32>, raw: &Fields) -> Option<&'static Override> {
    let rank = rank?;
    OVERRIDES.iter().find(|o| {
        o.year == year && o.rank == rank && o.artist == raw.artist && o.title == raw.title
    })
}

/// Pass 8: apply the exact-match table.
pub fn apply(_fields: &Fields, ctx: &RepairContext) -> Option<Fields> {
    lookup(ctx.year, ctx.rank, &ctx.raw).map(|o| Fields::new(o.fixed_artist, o.fixed_title))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repair::RepairPipeline;

    #[test]
    fn test_override_requires_all_keys() {
        let raw = Fields::new("Police", "Every Breath You Take The");
        assert!(lookup(1983, Some(1), &raw).is_some());
        assert!(lookup(1984, Some(1), &raw).is_none());
        assert!(lookup(1983, Some(2), &raw).is_none());
        assert!(lookup(1983, None, &raw).is_none());
        assert!(lookup(1983, Some(1), &Fields::new("Police", "Every Breath You Take")).is_none());
    }

    #[test]
    fn test_override_wins_over_earlier_passes() {
        let outcome = RepairPipeline::standard().run(
            "Edie Brickell & New Bohemians What I",
            "Am",
            1989,
            Some(30),
        );
        assert_eq!(
            outcome.fields,
            Fields::new("Edie Brickell & New Bohemians", "What I Am")
        );
        assert_eq!(outcome.applied.last(), Some(&"exact_overrides"));
    }

    #[test]
    fn test_override_entries_are_unique() {
        for (i, a) in OVERRIDES.iter().enumerate() {
            for b in &OVERRIDES[i + 1..] {
                let same_key = a.year == b.year
                    && a.rank == b.rank
                    && a.artist == b.artist
                    && a.title == b.title;
                assert!(!same_key, "duplicate override for {} #{}", a.year, a.rank);
            }
        }
    }

    #[test]
    fn test_override_targets_are_non_empty() {
        for o in OVERRIDES {
            assert!(!o.fixed_artist.trim().is_empty());
            assert!(!o.fixed_title.trim().is_empty());
        }
    }
}

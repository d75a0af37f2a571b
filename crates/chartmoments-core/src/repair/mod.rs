//! Artist/title repair for scraped chart rows.
//!
//! Supplemental chart scrapes split multi-column text badly, so words of a
//! song title end up in the artist field and vice versa. The pipeline fixes
//! a known family of these shapes with an ordered list of guarded passes.
//! Each pass is a pure function that either declines (its guard did not
//! match) or returns a rewritten pair for the next pass to inspect.
//!
//! Order matters: entity decoding changes token counts, token-moving passes
//! assume the simpler shapes are already gone, spelling canonicalization
//! must see the final token order, and exact-match overrides win over
//! everything.
//!
//! The pipeline is not idempotent over its own output; run it once, on raw
//! rows only.
//!
//! # Example
//!
//! ```
//! use chartmoments_core::RepairPipeline;
//!
//! let pipeline = RepairPipeline::standard();
//! let outcome = pipeline.run("Chameleon Culture Club", "Karma", 1984, Some(10));
//! assert_eq!(outcome.fields.artist, "Culture Club");
//! assert_eq!(outcome.fields.title, "Karma Chameleon");
//! ```

pub mod overrides;
pub mod passes;
pub mod tokens;
pub mod vocab;

use serde::{Deserialize, Serialize};

/// The artist/title pair a pass inspects and rewrites.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Fields {
    pub artist: String,
    pub title: String,
}

impl Fields {
    #[must_use]
    pub fn new(artist: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            artist: artist.into(),
            title: title.into(),
        }
    }
}

/// Record keys available to every pass.
#[derive(Debug, Clone)]
pub struct RepairContext {
    pub year: i32,
    pub rank: Option<u32>,

    /// The pair exactly as it appeared in the source row.
    pub raw: Fields,
}

/// A named, guarded transformation.
///
/// `apply` returns `None` when the guard does not match.
#[derive(Debug, Clone, Copy)]
pub struct RepairPass {
    pub name: &'static str,
    pub apply: fn(&Fields, &RepairContext) -> Option<Fields>,
}

/// Result of running the pipeline over one row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RepairOutcome {
    pub fields: Fields,

    /// Names of the passes that rewrote the pair, in order.
    pub applied: Vec<&'static str>,
}

impl RepairOutcome {
    pub fn changed(&self) -> bool {
        !self.applied.is_empty()
    }
}

/// An ordered sequence of repair passes.
#[derive(Debug, Clone)]
pub struct RepairPipeline {
    passes: Vec<RepairPass>,
}

impl Default for RepairPipeline {
    fn default() -> Self {
        Self::standard()
    }
}

impl RepairPipeline {
    /// The eight passes, in their required order.
    #[must_use]
    pub fn standard() -> Self {
        Self {
            passes: vec![
                RepairPass {
                    name: "decode_entities",
                    apply: passes::decode_entities,
                },
                RepairPass {
                    name: "short_title_long_artist",
                    apply: passes::short_title_long_artist,
                },
                RepairPass {
                    name: "leading_title_word",
                    apply: passes::leading_title_word,
                },
                RepairPass {
                    name: "embedded_title_words",
                    apply: passes::embedded_title_words,
                },
                RepairPass {
                    name: "two_token_front_spill",
                    apply: passes::two_token_front_spill,
                },
                RepairPass {
                    name: "title_tail_into_artist",
                    apply: passes::title_tail_into_artist,
                },
                RepairPass {
                    name: "canonical_act_spelling",
                    apply: passes::canonical_act_spelling,
                },
                RepairPass {
                    name: "exact_overrides",
                    apply: overrides::apply,
                },
            ],
        }
    }

    /// Build a pipeline from an explicit pass list.
    #[must_use]
    pub fn with_passes(passes: Vec<RepairPass>) -> Self {
        Self { passes }
    }

    pub fn passes(&self) -> &[RepairPass] {
        &self.passes
    }

    /// Run every pass in order over a raw pair.
    pub fn run(&self, artist: &str, title: &str, year: i32, rank: Option<u32>) -> RepairOutcome {
        let raw = Fields::new(artist.trim(), title.trim());
        let ctx = RepairContext {
            year,
            rank,
            raw: raw.clone(),
        };

        let mut fields = raw;
        let mut applied = Vec::new();

        for pass in &self.passes {
            if let Some(next) = (pass.apply)(&fields, &ctx) {
                if next != fields {
                    log::debug!(
                        "repair {}: ({:?}, {:?}) -> ({:?}, {:?})",
                        pass.name,
                        fields.artist,
                        fields.title,
                        next.artist,
                        next.title
                    );
                    applied.push(pass.name);
                    fields = next;
                }
            }
        }

        RepairOutcome { fields, applied }
    }
}

pub mod chart;
pub mod corpus;
pub mod record;

pub use chart::{canonicalize_chart, is_canonical_chart, CANONICAL_CHARTS};
pub use corpus::{Corpus, Stats};
pub use record::{collapse_whitespace, normalize_rank, parse_year, Record};

//! Closed word lists consulted by the repair passes.
//!
//! Every list is matched case-insensitively against whole tokens.

/// Trailing words that mark a two-token collective act ("Culture Club").
pub const COLLECTIVE_SUFFIXES: &[&str] = &[
    "Band", "Gang", "Club", "Boys", "Brothers", "Sisters", "Crew", "Orchestra", "Experience",
    "Project", "Family", "Machine", "Posse", "Connection", "Express", "Company", "Kids", "Tribe",
    "Singers", "Trio", "Quartet", "League", "Revue",
];

/// Words that commonly open a song title and leak into the artist field.
pub const TITLE_WORDS: &[&str] = &[
    "I", "You", "Me", "My", "Your", "We", "She", "He", "It", "Love", "Heart", "Baby", "Tonight",
    "Forever", "Lonely", "Crazy", "Dance", "Again", "Now", "Don't", "Say",
];

/// Words that join two acts or two halves of an act.
pub const CONNECTORS: &[&str] = &["and", "&", "the"];

/// Closed-class words a well-formed title does not end on.
pub const HANG_WORDS: &[&str] = &[
    // articles
    "a", "an", "the",
    // prepositions
    "of", "to", "in", "on", "at", "for", "with", "by", "from", "into", "onto", "about", "over",
    "under", "like", "as", "than", "through", "without",
    // conjunctions
    "and", "&", "or", "but", "nor", "so", "if", "because",
];

/// Given names frequent enough in the chart era to anchor a personal name.
pub const GIVEN_NAMES: &[&str] = &[
    "Al", "Barbra", "Billy", "Bob", "Bonnie", "Bruce", "Bryan", "Carly", "Cyndi", "Daryl",
    "David", "Debbie", "Diana", "Don", "Donna", "Elton", "Elvis", "Gloria", "George", "Glenn",
    "Huey", "James", "Janet", "Jim", "John", "Kenny", "Kim", "Laura", "Lionel", "Marvin",
    "Michael", "Olivia", "Patti", "Paul", "Paula", "Peter", "Phil", "Richard", "Rick", "Robert",
    "Rod", "Sheena", "Steve", "Stevie", "Tina", "Tom", "Whitney",
];

/// Generational suffixes that close a personal name ("Ray Parker Jr.").
pub const NAME_SUFFIXES: &[&str] = &["Jr.", "Jr", "Sr.", "Sr", "II", "III"];

/// Single-word acts whose name a spilled title word tends to precede.
pub const MONONYMS: &[&str] = &[
    "Madonna", "Prince", "Yes", "Heart", "Toto", "Queen", "Blondie", "Genesis", "Journey",
    "Foreigner", "Chicago", "Survivor", "Europe", "Boston", "Kansas", "Sade", "Cher", "Sting",
    "Wham!", "Eurythmics", "Starship", "Styx", "ABBA", "Falco", "Berlin", "Asia", "Poison",
    "Whitesnake", "Bananarama", "Nena", "Tiffany", "DeBarge", "Exile",
];

/// Returns `true` when `token` appears in `list`, ignoring ASCII case.
pub fn contains(list: &[&str], token: &str) -> bool {
    list.iter().any(|w| w.eq_ignore_ascii_case(token))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_ignores_case() {
        assert!(contains(COLLECTIVE_SUFFIXES, "club"));
        assert!(contains(HANG_WORDS, "The"));
        assert!(!contains(GIVEN_NAMES, "Chameleon"));
    }
}

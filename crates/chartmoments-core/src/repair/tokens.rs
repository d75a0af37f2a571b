//! Token helpers shared by the repair passes.

use super::vocab;

pub fn split(s: &str) -> Vec<&str> {
    s.split_whitespace().collect()
}

pub fn join(tokens: &[&str]) -> String {
    tokens.join(" ")
}

/// A token starting (after any opening punctuation) with an uppercase
/// letter or a digit.
pub fn is_capitalized(token: &str) -> bool {
    token
        .chars()
        .find(|c| c.is_alphanumeric())
        .is_some_and(|c| c.is_uppercase() || c.is_ascii_digit())
}

pub fn is_connector(token: &str) -> bool {
    vocab::contains(vocab::CONNECTORS, token)
}

pub fn is_bare_connector(token: &str) -> bool {
    token == "&" || token.eq_ignore_ascii_case("and")
}

pub fn is_hang_word(token: &str) -> bool {
    vocab::contains(vocab::HANG_WORDS, token)
}

pub fn is_title_word(token: &str) -> bool {
    vocab::contains(vocab::TITLE_WORDS, token)
}

pub fn is_given_name(token: &str) -> bool {
    vocab::contains(vocab::GIVEN_NAMES, token)
}

/// Capitalized, and not a closed-class word.
pub fn is_name_shaped(token: &str) -> bool {
    is_capitalized(token) && !is_hang_word(token)
}

/// One to three name-shaped tokens that do not open with a title word.
pub fn is_proper_run(tokens: &[&str]) -> bool {
    (1..=3).contains(&tokens.len())
        && tokens.iter().all(|t| is_name_shaped(t))
        && !is_title_word(tokens[0])
}

/// Two trailing tokens that read like "Given Surname".
pub fn is_personal_name(first: &str, last: &str) -> bool {
    is_given_name(first) && is_capitalized(last) && !is_hang_word(last)
}

/// Case-insensitive whole-token membership.
pub fn contains_token(tokens: &[&str], needle: &str) -> bool {
    tokens.iter().any(|t| t.eq_ignore_ascii_case(needle))
}

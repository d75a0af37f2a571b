//! The token-level repair passes, in pipeline order.
//!
//! Every pass is total: it returns `None` when its guard does not hold and
//! never panics on odd input.

use super::tokens::{
    contains_token, is_bare_connector, is_capitalized, is_connector, is_given_name, is_hang_word,
    is_name_shaped, is_personal_name, is_proper_run, is_title_word, join, split,
};
use super::vocab;
use super::{Fields, RepairContext};

/// Longest title tail that may be handed back to the artist.
const MAX_TAIL_RUN: usize = 6;

/// Encoded punctuation left behind by the scrape, decoded in this order.
/// `&amp;` goes last so `&amp;quot;` decodes only one level.
const ENTITIES: &[(&str, &str)] = &[
    ("&quot;", "\""),
    ("&#34;", "\""),
    ("&#39;", "'"),
    ("&#039;", "'"),
    ("&apos;", "'"),
    ("&lt;", "<"),
    ("&gt;", ">"),
    ("&amp;", "&"),
];

/// Variant spellings of known collective acts, rewritten to one form.
const ACT_SPELLINGS: &[(&str, &str)] = &[
    ("Hall & Oates", "Daryl Hall & John Oates"),
    ("Hall and Oates", "Daryl Hall & John Oates"),
    ("Daryl Hall and John Oates", "Daryl Hall & John Oates"),
    ("Kool and the Gang", "Kool & The Gang"),
    ("Kool & the Gang", "Kool & The Gang"),
    ("The Gang Kool &", "Kool & The Gang"),
    ("Huey Lewis and the News", "Huey Lewis & The News"),
    ("Huey Lewis & the News", "Huey Lewis & The News"),
    ("The News Huey Lewis &", "Huey Lewis & The News"),
    ("Prince and the Revolution", "Prince & The Revolution"),
    ("Prince & the Revolution", "Prince & The Revolution"),
    ("Tom Petty and the Heartbreakers", "Tom Petty & The Heartbreakers"),
    ("Tom Petty & the Heartbreakers", "Tom Petty & The Heartbreakers"),
    ("Bob Seger and the Silver Bullet Band", "Bob Seger & The Silver Bullet Band"),
    ("Bob Seger & the Silver Bullet Band", "Bob Seger & The Silver Bullet Band"),
    ("Club Culture", "Culture Club"),
    ("Wham", "Wham!"),
];

fn decode(s: &str) -> String {
    ENTITIES
        .iter()
        .fold(s.to_string(), |acc, (from, to)| acc.replace(*from, to))
}

/// Pass 1: decode a fixed set of HTML entities in both fields.
pub fn decode_entities(fields: &Fields, _ctx: &RepairContext) -> Option<Fields> {
    if !fields.artist.contains('&') && !fields.title.contains('&') {
        return None;
    }
    Some(Fields::new(decode(&fields.artist), decode(&fields.title)))
}

/// Pass 2: a short title next to a long artist.
///
/// The trailing one or two artist tokens are the real act; the leading
/// tokens belong at the end of the title.
pub fn short_title_long_artist(fields: &Fields, _ctx: &RepairContext) -> Option<Fields> {
    let artist = split(&fields.artist);
    let title = split(&fields.title);

    if title.len() > 2 || artist.len() < 3 {
        return None;
    }
    // Multi-act credits and "The ..." band names are left alone.
    if artist
        .iter()
        .any(|t| is_bare_connector(t) || t.contains(',') || t.eq_ignore_ascii_case("with"))
        || artist[0].eq_ignore_ascii_case("the")
    {
        return None;
    }

    let last = artist[artist.len() - 1];
    let second_last = artist[artist.len() - 2];
    // A trailing "Jr." belongs to the name before it; the split point is unknowable.
    if vocab::contains(vocab::NAME_SUFFIXES, last) {
        return None;
    }
    let core = if vocab::contains(vocab::COLLECTIVE_SUFFIXES, last)
        || is_personal_name(second_last, last)
    {
        2
    } else {
        1
    };

    let (moved, kept) = artist.split_at(artist.len() - core);
    // "Tears for Fears", "Men at Work": the act itself runs across a hang word.
    if moved.last().is_some_and(|t| is_hang_word(t)) {
        return None;
    }

    let mut new_title = title;
    new_title.extend_from_slice(moved);
    Some(Fields::new(join(kept), join(&new_title)))
}

/// Pass 3: a title word sitting in front of an otherwise clean act name.
///
/// The word moves to the end of the title.
pub fn leading_title_word(fields: &Fields, _ctx: &RepairContext) -> Option<Fields> {
    let artist = split(&fields.artist);
    let (first, rest) = artist.split_first()?;

    if !is_title_word(first) || !is_proper_run(rest) {
        return None;
    }

    let mut title = split(&fields.title);
    title.push(*first);
    Some(Fields::new(join(rest), join(&title)))
}

/// Pass 4: leading artist tokens that open the title.
///
/// Strips title words off the front of the artist and prepends them, as a
/// group, to the title.
pub fn embedded_title_words(fields: &Fields, _ctx: &RepairContext) -> Option<Fields> {
    let artist = split(&fields.artist);
    let title = split(&fields.title);

    if artist.len() < 2 || title.len() > 5 {
        return None;
    }

    let mut taken = 0;
    while taken < artist.len() - 1 {
        let token = artist[taken];
        if !is_title_word(token) || is_connector(token) {
            break;
        }
        let next = artist[taken + 1];
        if is_connector(next) || is_hang_word(next) || !is_capitalized(next) {
            break;
        }
        taken += 1;
    }

    if taken == 0 {
        return None;
    }

    let mut new_title = artist[..taken].to_vec();
    new_title.extend(title);
    Some(Fields::new(join(&artist[taken..]), join(&new_title)))
}

/// Pass 5: one title word spilled in front of a single-word act.
pub fn two_token_front_spill(fields: &Fields, _ctx: &RepairContext) -> Option<Fields> {
    let artist = split(&fields.artist);
    let &[first, second] = artist.as_slice() else {
        return None;
    };
    let title = split(&fields.title);

    if contains_token(&title, first)
        || !is_capitalized(first)
        || !is_capitalized(second)
        || first.eq_ignore_ascii_case("the")
        || !vocab::contains(vocab::MONONYMS, second)
    {
        return None;
    }

    let mut new_title = title;
    new_title.push(first);
    Some(Fields::new(second, join(&new_title)))
}

/// Pass 6: the head of the artist name stranded at the end of the title.
///
/// Two shapes are recognized. A title ending in a bare connector
/// ("... Paul McCartney &") hands its trailing name run to the artist,
/// joined in front of the existing credit. A title ending in a given name
/// next to a one-word artist ("Billie Jean Michael" / "Jackson") hands over
/// just that name.
pub fn title_tail_into_artist(fields: &Fields, _ctx: &RepairContext) -> Option<Fields> {
    let title = split(&fields.title);
    let artist = split(&fields.artist);

    if title.len() < 2 {
        return None;
    }
    let last = title[title.len() - 1];

    let start = if is_bare_connector(last) {
        connector_run_start(&title)?
    } else if artist.len() == 1 && is_capitalized(artist[0]) && is_given_name(last) {
        title.len() - 1
    } else {
        return None;
    };

    let (kept, run) = title.split_at(start);
    let Some(tail) = kept.last() else {
        return None;
    };
    if is_hang_word(tail) {
        return None;
    }

    let mut new_artist = run.to_vec();
    new_artist.extend(artist);
    Some(Fields::new(join(&new_artist), join(kept)))
}

/// Start index of the longest trailing run ending in a connector whose
/// first token anchors a name. Leaves at least one title token.
fn connector_run_start(title: &[&str]) -> Option<usize> {
    let end = title.len() - 1;
    let lowest = title.len().saturating_sub(MAX_TAIL_RUN).max(1);

    let mut start = end;
    while start > lowest {
        let candidate = title[start - 1];
        if is_name_shaped(candidate) || is_connector(candidate) {
            start -= 1;
        } else {
            break;
        }
    }

    (start..end).find(|&i| is_given_name(title[i]) || title[i].eq_ignore_ascii_case("the"))
}

/// Pass 7: rewrite variant spellings of known acts.
pub fn canonical_act_spelling(fields: &Fields, _ctx: &RepairContext) -> Option<Fields> {
    ACT_SPELLINGS
        .iter()
        .find(|(variant, _)| *variant == fields.artist)
        .map(|(_, canonical)| Fields::new(*canonical, fields.title.clone()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx() -> RepairContext {
        RepairContext {
            year: 1984,
            rank: Some(1),
            raw: Fields::new("", ""),
        }
    }

    fn run(
        pass: fn(&Fields, &RepairContext) -> Option<Fields>,
        artist: &str,
        title: &str,
    ) -> Option<Fields> {
        pass(&Fields::new(artist, title), &ctx())
    }

    #[test]
    fn test_decode_entities() {
        let out = run(decode_entities, "Simon &amp; Garfunkel", "&quot;Cecilia&quot;").unwrap();
        assert_eq!(out, Fields::new("Simon & Garfunkel", "\"Cecilia\""));

        let out = run(decode_entities, "A", "Don&#39;t &lt;Stop&gt;").unwrap();
        assert_eq!(out.title, "Don't <Stop>");

        assert!(run(decode_entities, "Toto", "Africa").is_none());
    }

    #[test]
    fn test_decode_entities_single_level() {
        let out = run(decode_entities, "A", "&amp;quot;").unwrap();
        assert_eq!(out.title, "&quot;");
    }

    #[test]
    fn test_short_title_long_artist_collective_suffix() {
        let out = run(short_title_long_artist, "Chameleon Culture Club", "Karma").unwrap();
        assert_eq!(out, Fields::new("Culture Club", "Karma Chameleon"));
    }

    #[test]
    fn test_short_title_long_artist_personal_name() {
        let out = run(short_title_long_artist, "It Michael Jackson", "Beat").unwrap();
        assert_eq!(out, Fields::new("Michael Jackson", "Beat It"));

        // Title too long for this pass.
        assert!(run(short_title_long_artist, "Ghost Ray Parker Jr.", "Who You Gonna").is_none());
    }

    #[test]
    fn test_short_title_long_artist_single_core() {
        let out = run(short_title_long_artist, "Lonely Heart Yes", "Owner").unwrap();
        assert_eq!(out, Fields::new("Yes", "Owner Lonely Heart"));
    }

    #[test]
    fn test_short_title_long_artist_moves_lowercase_words() {
        let out = run(
            short_title_long_artist,
            "Eclipse of the Heart Bonnie Tyler",
            "Total",
        )
        .unwrap();
        assert_eq!(out, Fields::new("Bonnie Tyler", "Total Eclipse of the Heart"));

        let out = run(short_title_long_artist, "of the Tiger Survivor", "Eye").unwrap();
        assert_eq!(out, Fields::new("Survivor", "Eye of the Tiger"));
    }

    #[test]
    fn test_short_title_long_artist_guards() {
        assert!(run(short_title_long_artist, "Earth, Wind & Fire", "September").is_none());
        assert!(run(short_title_long_artist, "The Human League", "Mirror Man").is_none());
        assert!(run(short_title_long_artist, "Culture Club", "Karma").is_none());
        assert!(run(short_title_long_artist, "Tears for Fears", "Shout").is_none());
        assert!(run(short_title_long_artist, "Men at Work", "Down Under").is_none());
        assert!(run(short_title_long_artist, "Frankie Goes to Hollywood", "Relax").is_none());
        assert!(run(short_title_long_artist, "Ray Parker Jr.", "Ghostbusters").is_none());
    }

    #[test]
    fn test_leading_title_word() {
        let out = run(leading_title_word, "Heart Yes", "Owner of a Lonely").unwrap();
        assert_eq!(out, Fields::new("Yes", "Owner of a Lonely Heart"));

        assert!(run(leading_title_word, "Heart", "Alone").is_none());
        assert!(run(leading_title_word, "Love and Rockets", "So Alive").is_none());
        assert!(run(leading_title_word, "Yes", "Owner of a Lonely Heart").is_none());
    }

    #[test]
    fn test_embedded_title_words() {
        let out = run(
            embedded_title_words,
            "Tonight Peabo Bryson & Roberta Flack",
            "I Celebrate My Love",
        )
        .unwrap();
        assert_eq!(
            out,
            Fields::new("Peabo Bryson & Roberta Flack", "Tonight I Celebrate My Love")
        );
    }

    #[test]
    fn test_embedded_title_words_keeps_order() {
        let out = run(embedded_title_words, "Baby I Lionel Richie", "Love You").unwrap();
        assert_eq!(out, Fields::new("Lionel Richie", "Baby I Love You"));
    }

    #[test]
    fn test_embedded_title_words_guards() {
        assert!(run(embedded_title_words, "Love and Rockets", "So Alive").is_none());
        assert!(run(embedded_title_words, "Love", "Me Do").is_none());
        let long_title = "One Two Three Four Five Six";
        assert!(run(embedded_title_words, "Tonight Peabo Bryson", long_title).is_none());
        assert!(run(embedded_title_words, "Michael Jackson", "Thriller").is_none());
    }

    #[test]
    fn test_two_token_front_spill() {
        let out = run(two_token_front_spill, "Girl Madonna", "Material").unwrap();
        assert_eq!(out, Fields::new("Madonna", "Material Girl"));

        assert!(run(two_token_front_spill, "Michael Jackson", "Billie Jean").is_none());
        assert!(run(two_token_front_spill, "The Heart", "Alone").is_none());
        assert!(run(two_token_front_spill, "Girl Madonna", "Material Girl").is_none());
        assert!(run(two_token_front_spill, "girl Madonna", "Material").is_none());
    }

    #[test]
    fn test_title_tail_connector_run() {
        let out = run(
            title_tail_into_artist,
            "Stevie Wonder",
            "Ebony and Ivory Paul McCartney &",
        )
        .unwrap();
        assert_eq!(
            out,
            Fields::new("Paul McCartney & Stevie Wonder", "Ebony and Ivory")
        );
    }

    #[test]
    fn test_title_tail_given_name() {
        let out = run(title_tail_into_artist, "Jackson", "Billie Jean Michael").unwrap();
        assert_eq!(out, Fields::new("Michael Jackson", "Billie Jean"));
    }

    #[test]
    fn test_title_tail_skips_hang_word_split() {
        // Moving "Paul" would leave "Talk to".
        assert!(run(title_tail_into_artist, "Simon", "Talk to Paul").is_none());
        assert!(run(title_tail_into_artist, "Yes", "Owner of a Lonely Heart").is_none());
    }

    #[test]
    fn test_title_tail_requires_anchor() {
        assert!(run(title_tail_into_artist, "Wonder", "Ebony Ivory Duet &").is_none());
        assert!(run(title_tail_into_artist, "The Police", "Every Breath You Take").is_none());
    }

    #[test]
    fn test_canonical_act_spelling() {
        let out = run(canonical_act_spelling, "Hall & Oates", "Maneater").unwrap();
        assert_eq!(out, Fields::new("Daryl Hall & John Oates", "Maneater"));

        let out = run(canonical_act_spelling, "The Gang Kool &", "Joanna").unwrap();
        assert_eq!(out.artist, "Kool & The Gang");

        assert!(run(canonical_act_spelling, "kool and the gang", "Joanna").is_none());
    }
}

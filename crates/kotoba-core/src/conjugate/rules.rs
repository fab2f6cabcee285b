//! Suffix rules for each word family. Every function is total: the i-adjective
//! rules drop the final character whatever it is, and the irregular rules drop
//! the final two.

use super::{NegativeStyle, Polarity, Tense};

/// `s` without its last `n` characters (empty if `s` is shorter).
fn drop_last(s: &str, n: usize) -> &str {
    if n == 0 {
        return s;
    }
    let cut = s
        .char_indices()
        .rev()
        .nth(n - 1)
        .map(|(i, _)| i)
        .unwrap_or(0);
    &s[..cut]
}

// --- Short (plain) forms ---

pub fn noun_short_form(dict_form: &str, tense: Tense, polarity: Polarity) -> String {
    let suffix = match (tense, polarity) {
        (Tense::Past, Polarity::Negative) => "じゃなかった",
        (Tense::Past, Polarity::Positive) => "だった",
        (Tense::NonPast, Polarity::Negative) => "じゃない",
        (Tense::NonPast, Polarity::Positive) => "だ",
    };
    format!("{dict_form}{suffix}")
}

/// な-adjectives conjugate like nouns.
pub fn na_adj_short_form(dict_form: &str, tense: Tense, polarity: Polarity) -> String {
    noun_short_form(dict_form, tense, polarity)
}

pub fn i_adj_short_form(dict_form: &str, tense: Tense, polarity: Polarity) -> String {
    let stem = drop_last(dict_form, 1);
    match (tense, polarity) {
        (Tense::Past, Polarity::Negative) => format!("{stem}くなかった"),
        (Tense::Past, Polarity::Positive) => format!("{stem}かった"),
        (Tense::NonPast, Polarity::Negative) => format!("{stem}くない"),
        (Tense::NonPast, Polarity::Positive) => dict_form.to_string(),
    }
}

/// いい and compounds ending in it (かっこいい) conjugate from よい.
pub fn irr_adj_short_form(dict_form: &str, tense: Tense, polarity: Polarity) -> String {
    let stem = drop_last(dict_form, 2);
    let ending = match (tense, polarity) {
        (Tense::Past, Polarity::Negative) => "よくなかった",
        (Tense::Past, Polarity::Positive) => "よかった",
        (Tense::NonPast, Polarity::Negative) => "よくない",
        (Tense::NonPast, Polarity::Positive) => "いい",
    };
    format!("{stem}{ending}")
}

// --- Long (polite) forms ---

/// Polite noun forms.
///
/// The non-past negative is じゃありませんです, not the usual じゃありません.
/// The textbook decks were generated with this form, so it stays until the
/// politeness levels are unified with the verb conjugator.
pub fn noun_long_form(dict_form: &str, tense: Tense, polarity: Polarity) -> String {
    let suffix = match (tense, polarity) {
        (Tense::Past, Polarity::Negative) => "じゃありませんでした",
        (Tense::Past, Polarity::Positive) => "でした",
        (Tense::NonPast, Polarity::Negative) => "じゃありませんです",
        (Tense::NonPast, Polarity::Positive) => "です",
    };
    format!("{dict_form}{suffix}")
}

pub fn na_adj_long_form(
    dict_form: &str,
    tense: Tense,
    polarity: Polarity,
    style: NegativeStyle,
) -> String {
    match (polarity, style) {
        (Polarity::Positive, _) | (Polarity::Negative, NegativeStyle::Conservative) => {
            noun_long_form(dict_form, tense, polarity)
        }
        (Polarity::Negative, NegativeStyle::Colloquial) => {
            format!("{}です", na_adj_short_form(dict_form, tense, polarity))
        }
    }
}

pub fn i_adj_long_form(
    dict_form: &str,
    tense: Tense,
    polarity: Polarity,
    style: NegativeStyle,
) -> String {
    let stem = drop_last(dict_form, 1);
    match (polarity, style, tense) {
        (Polarity::Positive, _, Tense::Past) => format!("{stem}かったです"),
        (Polarity::Positive, _, Tense::NonPast) => format!("{dict_form}です"),
        (Polarity::Negative, NegativeStyle::Colloquial, _) => {
            format!("{}です", i_adj_short_form(dict_form, tense, polarity))
        }
        (Polarity::Negative, NegativeStyle::Conservative, Tense::Past) => {
            format!("{stem}くありませんでした")
        }
        (Polarity::Negative, NegativeStyle::Conservative, Tense::NonPast) => {
            format!("{stem}くありません")
        }
    }
}

pub fn irr_adj_long_form(dict_form: &str, tense: Tense, polarity: Polarity) -> String {
    format!("{}です", irr_adj_short_form(dict_form, tense, polarity))
}

// --- Te form ---

pub fn noun_te_form(dict_form: &str) -> String {
    format!("{dict_form}で")
}

pub fn na_adj_te_form(dict_form: &str) -> String {
    noun_te_form(dict_form)
}

pub fn i_adj_te_form(dict_form: &str) -> String {
    format!("{}くて", drop_last(dict_form, 1))
}

pub fn irr_adj_te_form(dict_form: &str) -> String {
    format!("{}よくて", drop_last(dict_form, 2))
}

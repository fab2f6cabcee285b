//! Deck builders for conjugation and counter drills.

use kotoba_core::conjugate::{conjugate, te_form, Form, NegativeStyle, Polarity, Tense};
use kotoba_core::counter::CatalogEntry;
use kotoba_core::vocab::VocabEntry;

use crate::{Card, DrillError};

/// One card per word and requested form × tense × polarity.
///
/// Words without a noun or adjective conjugation class are skipped. When the
/// entry has a kanji spelling, its conjugation is accepted as well.
pub fn conjugation_cards<'a>(
    entries: impl IntoIterator<Item = &'a VocabEntry>,
    forms: &[Form],
    style: NegativeStyle,
) -> Vec<Card> {
    let mut deck = Vec::new();
    for entry in entries {
        let Some(class) = entry.conjugation_class() else {
            continue;
        };
        for &form in forms {
            for tense in Tense::ALL {
                for polarity in Polarity::ALL {
                    let prompt = format!(
                        "{} ({}): {form} {tense} {polarity}",
                        entry.written(),
                        entry.english
                    );
                    let mut answers =
                        vec![conjugate(&entry.word, class, form, tense, polarity, style)];
                    if let Some(kanji) = &entry.kanji {
                        answers.push(conjugate(kanji, class, form, tense, polarity, style));
                    }
                    deck.push(Card::new(prompt, answers));
                }
            }
        }
    }
    deck
}

pub fn te_form_cards<'a>(entries: impl IntoIterator<Item = &'a VocabEntry>) -> Vec<Card> {
    entries
        .into_iter()
        .filter_map(|entry| {
            let class = entry.conjugation_class()?;
            let mut answers = vec![te_form(&entry.word, class)];
            if let Some(kanji) = &entry.kanji {
                answers.push(te_form(kanji, class));
            }
            Some(Card::new(
                format!("{} ({}): te-form", entry.written(), entry.english),
                answers,
            ))
        })
        .collect()
}

/// Cards asking for the reading of `n` + counter ("3本" → さんぼん), plus the
/// question word (何本 → なんぼん) when `with_question` is set.
pub fn counter_cards<'a>(
    entries: impl IntoIterator<Item = &'a CatalogEntry>,
    quantities: &[u32],
    with_question: bool,
) -> Result<Vec<Card>, DrillError> {
    let mut deck = Vec::new();
    for entry in entries {
        for &n in quantities {
            let answers = entry.counter.readings(n)?;
            deck.push(Card::new(format!("{n}{}", entry.label), answers));
        }
        if with_question {
            deck.push(Card::new(
                format!("何{}", entry.label),
                vec![entry.counter.question().to_string()],
            ));
        }
    }
    Ok(deck)
}

//! Conjugation of nouns and adjectives.
//!
//! The per-family rules live in [`rules`]; [`conjugate`] and [`te_form`]
//! dispatch on a [`ConjugationClass`]. Verbs are conjugated elsewhere.

pub mod rules;

use std::fmt;

use serde::{Deserialize, Serialize};

pub use rules::{
    i_adj_long_form, i_adj_short_form, i_adj_te_form, irr_adj_long_form, irr_adj_short_form,
    irr_adj_te_form, na_adj_long_form, na_adj_short_form, na_adj_te_form, noun_long_form,
    noun_short_form, noun_te_form,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Tense {
    Past,
    NonPast,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Polarity {
    Positive,
    Negative,
}

/// Plain (short) or polite (long) register.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Form {
    Short,
    Long,
}

/// How polite negatives of adjectives are built.
///
/// `Colloquial` appends です to the plain negative (さむくないです);
/// `Conservative` uses ありません (さむくありません).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NegativeStyle {
    Colloquial,
    #[default]
    Conservative,
}

/// Conjugation family of a noun or adjective.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ConjugationClass {
    Noun,
    NaAdjective,
    IAdjective,
    /// いい and compounds built on it.
    IrregularAdjective,
}

impl Tense {
    pub const ALL: [Tense; 2] = [Tense::NonPast, Tense::Past];
}

impl Polarity {
    pub const ALL: [Polarity; 2] = [Polarity::Positive, Polarity::Negative];
}

impl Form {
    pub const ALL: [Form; 2] = [Form::Short, Form::Long];
}

impl fmt::Display for Tense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Tense::Past => "past",
            Tense::NonPast => "non-past",
        })
    }
}

impl fmt::Display for Polarity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Polarity::Positive => "affirmative",
            Polarity::Negative => "negative",
        })
    }
}

impl fmt::Display for Form {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Form::Short => "short",
            Form::Long => "long",
        })
    }
}

impl fmt::Display for ConjugationClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ConjugationClass::Noun => "noun",
            ConjugationClass::NaAdjective => "na-adjective",
            ConjugationClass::IAdjective => "i-adjective",
            ConjugationClass::IrregularAdjective => "irregular adjective",
        })
    }
}

impl ConjugationClass {
    /// Classify an い-adjective by its ending: いい conjugates from よい.
    pub fn for_i_adjective(dict_form: &str) -> Self {
        if dict_form.ends_with("いい") {
            ConjugationClass::IrregularAdjective
        } else {
            ConjugationClass::IAdjective
        }
    }
}

/// One cell of a conjugation table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConjugatedForm {
    pub form: Form,
    pub tense: Tense,
    pub polarity: Polarity,
    pub surface: String,
}

pub fn conjugate(
    dict_form: &str,
    class: ConjugationClass,
    form: Form,
    tense: Tense,
    polarity: Polarity,
    style: NegativeStyle,
) -> String {
    match (class, form) {
        (ConjugationClass::Noun, Form::Short) => noun_short_form(dict_form, tense, polarity),
        (ConjugationClass::Noun, Form::Long) => noun_long_form(dict_form, tense, polarity),
        (ConjugationClass::NaAdjective, Form::Short) => {
            na_adj_short_form(dict_form, tense, polarity)
        }
        (ConjugationClass::NaAdjective, Form::Long) => {
            na_adj_long_form(dict_form, tense, polarity, style)
        }
        (ConjugationClass::IAdjective, Form::Short) => i_adj_short_form(dict_form, tense, polarity),
        (ConjugationClass::IAdjective, Form::Long) => {
            i_adj_long_form(dict_form, tense, polarity, style)
        }
        (ConjugationClass::IrregularAdjective, Form::Short) => {
            irr_adj_short_form(dict_form, tense, polarity)
        }
        (ConjugationClass::IrregularAdjective, Form::Long) => {
            irr_adj_long_form(dict_form, tense, polarity)
        }
    }
}

pub fn te_form(dict_form: &str, class: ConjugationClass) -> String {
    match class {
        ConjugationClass::Noun => noun_te_form(dict_form),
        ConjugationClass::NaAdjective => na_adj_te_form(dict_form),
        ConjugationClass::IAdjective => i_adj_te_form(dict_form),
        ConjugationClass::IrregularAdjective => irr_adj_te_form(dict_form),
    }
}

/// Every form × tense × polarity combination, short forms first.
pub fn conjugation_table(
    dict_form: &str,
    class: ConjugationClass,
    style: NegativeStyle,
) -> Vec<ConjugatedForm> {
    let mut table = Vec::with_capacity(8);
    for form in Form::ALL {
        for tense in Tense::ALL {
            for polarity in Polarity::ALL {
                table.push(ConjugatedForm {
                    form,
                    tense,
                    polarity,
                    surface: conjugate(dict_form, class, form, tense, polarity, style),
                });
            }
        }
    }
    table
}

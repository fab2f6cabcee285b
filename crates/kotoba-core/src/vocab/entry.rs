use std::fmt;

use serde::Serialize;

use crate::conjugate::ConjugationClass;

/// Part of speech as labelled in the textbook vocabulary index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum WordClass {
    Noun,
    IAdjective,
    NaAdjective,
    UVerb,
    RuVerb,
    IrregularVerb,
    Adverb,
    Particle,
    /// Pre-nominal expression (その___).
    PreNominal,
    /// Noun-forming suffix (___円, ___か月).
    Suffix,
    Expression,
}

/// Verb conjugation class, handed to the external verb conjugator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum VerbClass {
    Ichidan,
    Godan,
    Irregular,
}

impl WordClass {
    pub const ALL: [WordClass; 11] = [
        WordClass::Noun,
        WordClass::IAdjective,
        WordClass::NaAdjective,
        WordClass::UVerb,
        WordClass::RuVerb,
        WordClass::IrregularVerb,
        WordClass::Adverb,
        WordClass::Particle,
        WordClass::PreNominal,
        WordClass::Suffix,
        WordClass::Expression,
    ];

    /// Label used in the textbook index ("n.", "い-adj.", ...).
    pub fn label(self) -> &'static str {
        match self {
            WordClass::Noun => "n.",
            WordClass::IAdjective => "い-adj.",
            WordClass::NaAdjective => "な-adj.",
            WordClass::UVerb => "u-v.",
            WordClass::RuVerb => "ru-v.",
            WordClass::IrregularVerb => "irr-v.",
            WordClass::Adverb => "adv.",
            WordClass::Particle => "part.",
            WordClass::PreNominal => "pre.",
            WordClass::Suffix => "suf.",
            WordClass::Expression => "exp.",
        }
    }

    /// Short name used on the command line and in JSON output.
    pub fn name(self) -> &'static str {
        match self {
            WordClass::Noun => "noun",
            WordClass::IAdjective => "i-adj",
            WordClass::NaAdjective => "na-adj",
            WordClass::UVerb => "u-verb",
            WordClass::RuVerb => "ru-verb",
            WordClass::IrregularVerb => "irr-verb",
            WordClass::Adverb => "adverb",
            WordClass::Particle => "particle",
            WordClass::PreNominal => "pre-nom",
            WordClass::Suffix => "suffix",
            WordClass::Expression => "expression",
        }
    }

    /// Accepts either the textbook label or the short name.
    pub fn from_label(label: &str) -> Option<WordClass> {
        let label = label.trim();
        WordClass::ALL
            .into_iter()
            .find(|c| c.label() == label || c.name() == label)
    }

    pub fn is_verb(self) -> bool {
        self.verb_class().is_some()
    }

    pub fn verb_class(self) -> Option<VerbClass> {
        match self {
            WordClass::RuVerb => Some(VerbClass::Ichidan),
            WordClass::UVerb => Some(VerbClass::Godan),
            WordClass::IrregularVerb => Some(VerbClass::Irregular),
            _ => None,
        }
    }

    /// Conjugation family for nouns and adjectives; `None` for everything
    /// this crate does not conjugate.
    pub fn conjugation_class(self, dict_form: &str) -> Option<ConjugationClass> {
        match self {
            WordClass::Noun => Some(ConjugationClass::Noun),
            WordClass::NaAdjective => Some(ConjugationClass::NaAdjective),
            WordClass::IAdjective => Some(ConjugationClass::for_i_adjective(dict_form)),
            _ => None,
        }
    }
}

impl fmt::Display for WordClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl fmt::Display for VerbClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            VerbClass::Ichidan => "ichidan",
            VerbClass::Godan => "godan",
            VerbClass::Irregular => "irregular",
        })
    }
}

/// Extract lesson numbers from a lesson tag.
///
/// Tags look like `会L11-II`, `読L3-III` or `L1, L2`: every `L` followed by
/// digits contributes one number. Duplicates are dropped, order is kept.
pub fn parse_lessons(tag: &str) -> Vec<u32> {
    let mut lessons = Vec::new();
    let mut chars = tag.chars().peekable();
    while let Some(c) = chars.next() {
        if c != 'L' {
            continue;
        }
        let mut digits = String::new();
        while let Some(d) = chars.next_if(|d| d.is_ascii_digit()) {
            digits.push(d);
        }
        if let Ok(n) = digits.parse::<u32>() {
            if !lessons.contains(&n) {
                lessons.push(n);
            }
        }
    }
    lessons
}

/// One row of the vocabulary list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VocabEntry {
    /// Kana spelling.
    pub word: String,
    pub kanji: Option<String>,
    pub class: WordClass,
    pub english: String,
    pub lessons: Vec<u32>,
}

impl VocabEntry {
    pub fn in_lesson(&self, lesson: u32) -> bool {
        self.lessons.contains(&lesson)
    }

    /// Kanji spelling when there is one, else the kana.
    pub fn written(&self) -> &str {
        self.kanji.as_deref().unwrap_or(&self.word)
    }

    pub fn verb_class(&self) -> Option<VerbClass> {
        self.class.verb_class()
    }

    pub fn conjugation_class(&self) -> Option<ConjugationClass> {
        self.class.conjugation_class(&self.word)
    }
}

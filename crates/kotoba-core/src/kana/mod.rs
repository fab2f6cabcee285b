//! Gojūon phoneme classification and consonant/vowel morphing.
//!
//! Every supported mora sits at exactly one (consonant row, vowel column)
//! cell of the grid held by [`PhonemeTable`]. The voiced rows (g, z, d, b)
//! and the semi-voiced p row are derived from their unvoiced sources through
//! the voicing map rather than listed by hand.

mod morph;
mod table;

use std::fmt;

pub use morph::{morph_consonant, morph_vowel, to_b, to_g, to_p, to_z, MorphRule};
pub use table::PhonemeTable;

/// Leading-consonant row of the syllabary. `A` is the bare-vowel row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ConsonantRow {
    A,
    K,
    G,
    S,
    Z,
    T,
    D,
    N,
    H,
    B,
    P,
    M,
    Y,
    R,
    W,
}

impl ConsonantRow {
    pub const ALL: [ConsonantRow; 15] = [
        ConsonantRow::A,
        ConsonantRow::K,
        ConsonantRow::G,
        ConsonantRow::S,
        ConsonantRow::Z,
        ConsonantRow::T,
        ConsonantRow::D,
        ConsonantRow::N,
        ConsonantRow::H,
        ConsonantRow::B,
        ConsonantRow::P,
        ConsonantRow::M,
        ConsonantRow::Y,
        ConsonantRow::R,
        ConsonantRow::W,
    ];

    /// Short romanized label ("k", "g", ...). The bare-vowel row is "a".
    pub fn label(self) -> &'static str {
        match self {
            ConsonantRow::A => "a",
            ConsonantRow::K => "k",
            ConsonantRow::G => "g",
            ConsonantRow::S => "s",
            ConsonantRow::Z => "z",
            ConsonantRow::T => "t",
            ConsonantRow::D => "d",
            ConsonantRow::N => "n",
            ConsonantRow::H => "h",
            ConsonantRow::B => "b",
            ConsonantRow::P => "p",
            ConsonantRow::M => "m",
            ConsonantRow::Y => "y",
            ConsonantRow::R => "r",
            ConsonantRow::W => "w",
        }
    }

    pub fn from_label(label: &str) -> Option<ConsonantRow> {
        ConsonantRow::ALL.into_iter().find(|row| row.label() == label)
    }
}

impl fmt::Display for ConsonantRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-row", self.label())
    }
}

/// Vowel column of the syllabary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Vowel {
    A,
    I,
    U,
    E,
    O,
}

impl Vowel {
    pub const ALL: [Vowel; 5] = [Vowel::A, Vowel::I, Vowel::U, Vowel::E, Vowel::O];

    pub(crate) fn column(self) -> usize {
        self as usize
    }

    pub fn label(self) -> &'static str {
        match self {
            Vowel::A => "a",
            Vowel::I => "i",
            Vowel::U => "u",
            Vowel::E => "e",
            Vowel::O => "o",
        }
    }

    pub fn from_label(label: &str) -> Option<Vowel> {
        Vowel::ALL.into_iter().find(|v| v.label() == label)
    }
}

impl fmt::Display for Vowel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-column", self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PhonemeError {
    #[error("mora not classified: {0}")]
    Unclassified(char),
    #[error("mora {mora} appears in both {first:?} and {second:?}")]
    Overlap {
        mora: char,
        first: (ConsonantRow, Vowel),
        second: (ConsonantRow, Vowel),
    },
    #[error("no voiced counterpart for {0}")]
    MissingVoicing(char),
    #[error("cannot morph {mora} into {target}")]
    NoMorph { mora: char, target: String },
}

/// Consonant row of `mora`, using the built-in table.
pub fn consonant_class(mora: char) -> Result<ConsonantRow, PhonemeError> {
    PhonemeTable::global().consonant_class(mora)
}

/// Vowel column of `mora`, using the built-in table.
pub fn vowel_class(mora: char) -> Result<Vowel, PhonemeError> {
    PhonemeTable::global().vowel_class(mora)
}

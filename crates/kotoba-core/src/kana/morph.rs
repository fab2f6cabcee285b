use std::fmt;
use std::str::FromStr;

use super::{ConsonantRow, PhonemeError, PhonemeTable, Vowel};

/// Swap the consonant of `mora`, keeping its vowel: `morph_consonant('ほ', P) == 'ぽ'`.
pub fn morph_consonant(mora: char, target: ConsonantRow) -> Result<char, PhonemeError> {
    let table = PhonemeTable::global();
    let vowel = table.vowel_class(mora)?;
    table
        .mora_at(target, vowel)
        .ok_or_else(|| PhonemeError::NoMorph {
            mora,
            target: target.to_string(),
        })
}

/// Swap the vowel of `mora`, keeping its consonant: `morph_vowel('ほ', U) == 'ふ'`.
pub fn morph_vowel(mora: char, target: Vowel) -> Result<char, PhonemeError> {
    let table = PhonemeTable::global();
    let row = table.consonant_class(mora)?;
    table
        .mora_at(row, target)
        .ok_or_else(|| PhonemeError::NoMorph {
            mora,
            target: target.to_string(),
        })
}

pub fn to_p(mora: char) -> Result<char, PhonemeError> {
    morph_consonant(mora, ConsonantRow::P)
}

pub fn to_b(mora: char) -> Result<char, PhonemeError> {
    morph_consonant(mora, ConsonantRow::B)
}

pub fn to_g(mora: char) -> Result<char, PhonemeError> {
    morph_consonant(mora, ConsonantRow::G)
}

pub fn to_z(mora: char) -> Result<char, PhonemeError> {
    morph_consonant(mora, ConsonantRow::Z)
}

/// A sound change applied to the first mora of a counter word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MorphRule {
    #[default]
    Identity,
    Consonant(ConsonantRow),
}

impl MorphRule {
    /// `Identity` passes any character through, including kanji, so only
    /// consonant rules require a classified mora.
    pub fn apply(self, mora: char) -> Result<char, PhonemeError> {
        match self {
            MorphRule::Identity => Ok(mora),
            MorphRule::Consonant(row) => morph_consonant(mora, row),
        }
    }
}

impl fmt::Display for MorphRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MorphRule::Identity => f.write_str("identity"),
            MorphRule::Consonant(row) => f.write_str(row.label()),
        }
    }
}

impl FromStr for MorphRule {
    type Err = String;

    /// Accepts "identity" or a row label such as "p", "b", "g", "z".
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "identity" {
            return Ok(MorphRule::Identity);
        }
        ConsonantRow::from_label(s)
            .map(MorphRule::Consonant)
            .ok_or_else(|| format!("unknown morph rule: {s}"))
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn shortcuts() {
        assert_eq!(to_p('ほ').unwrap(), 'ぽ');
        assert_eq!(to_b('ほ').unwrap(), 'ぼ');
        assert_eq!(to_p('ふ').unwrap(), 'ぷ');
        assert_eq!(to_g('か').unwrap(), 'が');
        assert_eq!(to_z('し').unwrap(), 'じ');
        // already in the target row
        assert_eq!(to_p('ぱ').unwrap(), 'ぱ');
    }

    #[test]
    fn vowel_morph() {
        assert_eq!(morph_vowel('ほ', Vowel::U).unwrap(), 'ふ');
        assert_eq!(morph_vowel('ぱ', Vowel::E).unwrap(), 'ぺ');
    }

    #[test]
    fn morph_into_gap_fails() {
        let err = morph_consonant('に', ConsonantRow::Y).unwrap_err();
        assert!(matches!(err, PhonemeError::NoMorph { mora: 'に', .. }));
        assert!(morph_vowel('わ', Vowel::I).is_err());
    }

    #[test]
    fn morph_unclassified_fails() {
        assert_eq!(to_p('本'), Err(PhonemeError::Unclassified('本')));
    }

    #[test]
    fn rule_identity_passes_kanji() {
        assert_eq!(MorphRule::Identity.apply('円').unwrap(), '円');
        assert!(MorphRule::Consonant(ConsonantRow::P).apply('円').is_err());
    }

    #[test]
    fn rule_from_str() {
        assert_eq!("p".parse::<MorphRule>().unwrap(), MorphRule::Consonant(ConsonantRow::P));
        assert_eq!("identity".parse::<MorphRule>().unwrap(), MorphRule::Identity);
        assert!("q".parse::<MorphRule>().is_err());
        assert_eq!(MorphRule::Consonant(ConsonantRow::B).to_string(), "b");
    }

    fn arb_mora() -> impl Strategy<Value = char> {
        let mut morae: Vec<char> = PhonemeTable::global().morae().collect();
        morae.sort_unstable();
        prop::sample::select(morae)
    }

    fn arb_row() -> impl Strategy<Value = ConsonantRow> {
        prop::sample::select(ConsonantRow::ALL.to_vec())
    }

    proptest! {
        #[test]
        fn morph_keeps_vowel_and_hits_target(mora in arb_mora(), row in arb_row()) {
            let table = PhonemeTable::global();
            match morph_consonant(mora, row) {
                Ok(out) => {
                    prop_assert_eq!(
                        table.vowel_class(out).unwrap(),
                        table.vowel_class(mora).unwrap()
                    );
                    prop_assert_eq!(table.consonant_class(out).unwrap(), row);
                }
                Err(e) => {
                    // only the defective rows have empty cells
                    let is_no_morph = matches!(e, PhonemeError::NoMorph { .. });
                    prop_assert!(is_no_morph);
                    prop_assert!(matches!(row, ConsonantRow::Y | ConsonantRow::W));
                }
            }
        }
    }
}

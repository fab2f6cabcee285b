use std::collections::HashMap;
use std::sync::OnceLock;

use super::{ConsonantRow, PhonemeError, Vowel};

type RowCells = [Option<char>; 5];

/// Unvoiced → voiced pairs. The b → p entries are not voicing proper, but
/// chaining h → b → p is how the p row is derived.
pub(crate) const VOICING: &[(char, char)] = &[
    ('か', 'が'),
    ('き', 'ぎ'),
    ('く', 'ぐ'),
    ('け', 'げ'),
    ('こ', 'ご'),
    ('さ', 'ざ'),
    ('し', 'じ'),
    ('す', 'ず'),
    ('せ', 'ぜ'),
    ('そ', 'ぞ'),
    ('た', 'だ'),
    ('ち', 'ぢ'),
    ('つ', 'づ'),
    ('て', 'で'),
    ('と', 'ど'),
    ('は', 'ば'),
    ('ひ', 'び'),
    ('ふ', 'ぶ'),
    ('へ', 'べ'),
    ('ほ', 'ぼ'),
    ('ば', 'ぱ'),
    ('び', 'ぴ'),
    ('ぶ', 'ぷ'),
    ('べ', 'ぺ'),
    ('ぼ', 'ぽ'),
];

/// Rows written out literally, in a-i-u-e-o column order.
pub(crate) const BASE_ROWS: &[(ConsonantRow, RowCells)] = &[
    (ConsonantRow::A, full('あ', 'い', 'う', 'え', 'お')),
    (ConsonantRow::K, full('か', 'き', 'く', 'け', 'こ')),
    (ConsonantRow::S, full('さ', 'し', 'す', 'せ', 'そ')),
    (ConsonantRow::T, full('た', 'ち', 'つ', 'て', 'と')),
    (ConsonantRow::N, full('な', 'に', 'ぬ', 'ね', 'の')),
    (ConsonantRow::H, full('は', 'ひ', 'ふ', 'へ', 'ほ')),
    (ConsonantRow::M, full('ま', 'み', 'む', 'め', 'も')),
    (
        ConsonantRow::Y,
        [Some('や'), None, Some('ゆ'), None, Some('よ')],
    ),
    (ConsonantRow::R, full('ら', 'り', 'る', 'れ', 'ろ')),
    (ConsonantRow::W, [Some('わ'), None, None, None, Some('を')]),
];

/// (derived row, source row). Sources must already be present when a
/// derived row is built, so order matters: B before P.
pub(crate) const DERIVED_ROWS: &[(ConsonantRow, ConsonantRow)] = &[
    (ConsonantRow::G, ConsonantRow::K),
    (ConsonantRow::Z, ConsonantRow::S),
    (ConsonantRow::D, ConsonantRow::T),
    (ConsonantRow::B, ConsonantRow::H),
    (ConsonantRow::P, ConsonantRow::B),
];

const fn full(a: char, i: char, u: char, e: char, o: char) -> RowCells {
    [Some(a), Some(i), Some(u), Some(e), Some(o)]
}

/// The mora grid and its reverse index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhonemeTable {
    rows: HashMap<ConsonantRow, RowCells>,
    index: HashMap<char, (ConsonantRow, Vowel)>,
    voicing: HashMap<char, char>,
}

impl PhonemeTable {
    /// The built-in gojūon table (validated once, on first use).
    pub fn global() -> &'static PhonemeTable {
        static INSTANCE: OnceLock<PhonemeTable> = OnceLock::new();
        INSTANCE.get_or_init(|| {
            PhonemeTable::build(BASE_ROWS, DERIVED_ROWS, VOICING)
                .expect("built-in phoneme table must partition cleanly")
        })
    }

    /// Build a table from literal rows plus rows derived through `voicing`.
    ///
    /// Fails if any mora lands in more than one cell, or if a derived row's
    /// source contains a mora without a voiced counterpart.
    pub fn build(
        base: &[(ConsonantRow, RowCells)],
        derived: &[(ConsonantRow, ConsonantRow)],
        voicing: &[(char, char)],
    ) -> Result<Self, PhonemeError> {
        let mut table = PhonemeTable {
            rows: HashMap::new(),
            index: HashMap::new(),
            voicing: voicing.iter().copied().collect(),
        };

        for &(row, cells) in base {
            table.insert_row(row, cells)?;
        }
        for &(row, source) in derived {
            let source_cells = table.rows.get(&source).copied().unwrap_or([None; 5]);
            let mut cells = [None; 5];
            for (cell, src) in cells.iter_mut().zip(source_cells) {
                if let Some(mora) = src {
                    let voiced = table
                        .voicing
                        .get(&mora)
                        .copied()
                        .ok_or(PhonemeError::MissingVoicing(mora))?;
                    *cell = Some(voiced);
                }
            }
            table.insert_row(row, cells)?;
        }

        Ok(table)
    }

    fn insert_row(&mut self, row: ConsonantRow, cells: RowCells) -> Result<(), PhonemeError> {
        for (vowel, cell) in Vowel::ALL.into_iter().zip(cells) {
            let Some(mora) = cell else { continue };
            if let Some(&first) = self.index.get(&mora) {
                return Err(PhonemeError::Overlap {
                    mora,
                    first,
                    second: (row, vowel),
                });
            }
            self.index.insert(mora, (row, vowel));
        }
        self.rows.insert(row, cells);
        Ok(())
    }

    pub fn classify(&self, mora: char) -> Result<(ConsonantRow, Vowel), PhonemeError> {
        self.index
            .get(&mora)
            .copied()
            .ok_or(PhonemeError::Unclassified(mora))
    }

    pub fn consonant_class(&self, mora: char) -> Result<ConsonantRow, PhonemeError> {
        self.classify(mora).map(|(row, _)| row)
    }

    pub fn vowel_class(&self, mora: char) -> Result<Vowel, PhonemeError> {
        self.classify(mora).map(|(_, vowel)| vowel)
    }

    /// The mora at a grid cell, if the cell exists (the y and w rows have gaps).
    pub fn mora_at(&self, row: ConsonantRow, vowel: Vowel) -> Option<char> {
        self.rows.get(&row).and_then(|cells| cells[vowel.column()])
    }

    /// All morae of a consonant row, in column order.
    pub fn row_members(&self, row: ConsonantRow) -> Vec<char> {
        self.rows
            .get(&row)
            .map(|cells| cells.iter().flatten().copied().collect())
            .unwrap_or_default()
    }

    /// All morae of a vowel column, in row order.
    pub fn vowel_members(&self, vowel: Vowel) -> Vec<char> {
        ConsonantRow::ALL
            .into_iter()
            .filter_map(|row| self.mora_at(row, vowel))
            .collect()
    }

    pub fn voiced(&self, mora: char) -> Option<char> {
        self.voicing.get(&mora).copied()
    }

    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    pub fn morae(&self) -> impl Iterator<Item = char> + '_ {
        self.index.keys().copied()
    }
}

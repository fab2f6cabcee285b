//! Counter words (助数詞) and their numeral readings.
//!
//! A [`CounterTable`] precomputes the reading of a counter for the digits
//! 1–10 and for the question word なん. Each reading is
//! `prefix + morph(first mora) + rest of the base word`, where the prefix
//! and the sound change default to the plain Sino-Japanese numeral and the
//! identity, and a [`CounterSpec`] overrides them per digit.
//!
//! [`CounterCatalog`] holds the built-in textbook counters, loaded from
//! `default_counters.toml`.

mod catalog;
#[cfg(test)]
mod tests;

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use tracing::{debug, debug_span};

use crate::kana::{MorphRule, PhonemeError};

pub use catalog::{
    parse_counters_toml, CatalogEntry, CounterCatalog, CounterConfigError, DEFAULT_COUNTERS_TOML,
};

/// Standard numeral prefixes for 1–10, indexed by `digit - 1`.
pub const STANDARD_PREFIXES: [&str; 10] = [
    "いち", "に", "さん", "よん", "ご", "ろく", "なな", "はち", "きゅう", "じゅう",
];

/// Prefix for the question form (なん本, "how many").
pub const QUESTION_PREFIX: &str = "なん";

/// Marks an optional prefix in configuration strings: `"*はっ"`.
pub const OPTIONAL_MARKER: char = '*';

const TABLE_SIZE: usize = 11;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CounterError {
    #[error("quantity must be positive")]
    NonPositive,
    #[error("counter word is empty")]
    EmptyBase,
    #[error("quantity key out of range: {0}")]
    KeyOutOfRange(QuantityKey),
    #[error("duplicate {table} override for {key}")]
    DuplicateOverride { key: QuantityKey, table: &'static str },
    #[error("cannot apply morph rule for {key}: {source}")]
    Morph {
        key: QuantityKey,
        #[source]
        source: PhonemeError,
    },
}

/// Key of a counter table entry: a digit 1–10, or the question word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum QuantityKey {
    Digit(u8),
    Question,
}

impl QuantityKey {
    /// Every valid key, digits first.
    pub fn all() -> impl Iterator<Item = QuantityKey> {
        (1..=10)
            .map(QuantityKey::Digit)
            .chain(std::iter::once(QuantityKey::Question))
    }

    pub fn is_valid(self) -> bool {
        match self {
            QuantityKey::Digit(d) => (1..=10).contains(&d),
            QuantityKey::Question => true,
        }
    }

    fn index(self) -> usize {
        match self {
            QuantityKey::Digit(d) => usize::from(d) - 1,
            QuantityKey::Question => TABLE_SIZE - 1,
        }
    }

    fn standard_prefix(self) -> &'static str {
        match self {
            QuantityKey::Digit(d) => STANDARD_PREFIXES[usize::from(d) - 1],
            QuantityKey::Question => QUESTION_PREFIX,
        }
    }
}

impl fmt::Display for QuantityKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QuantityKey::Digit(d) => write!(f, "{d}"),
            QuantityKey::Question => f.write_str("question"),
        }
    }
}

impl FromStr for QuantityKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "question" {
            return Ok(QuantityKey::Question);
        }
        let key = s
            .parse::<u8>()
            .map(QuantityKey::Digit)
            .map_err(|_| format!("invalid quantity key: {s}"))?;
        if key.is_valid() {
            Ok(key)
        } else {
            Err(format!("quantity key out of range: {s}"))
        }
    }
}

/// Numeral prefix of a counter reading.
///
/// `optional` is presentation metadata for front ends (e.g. the glottal
/// はっ in はっかげつ, where はちかげつ is equally accepted). The engine
/// always uses `text`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prefix {
    pub text: String,
    pub optional: bool,
}

impl Prefix {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            optional: false,
        }
    }

    pub fn optional(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            optional: true,
        }
    }

    /// Parse a configuration string, where a leading `*` marks the prefix optional.
    pub fn parse(s: &str) -> Self {
        match s.strip_prefix(OPTIONAL_MARKER) {
            Some(text) => Prefix::optional(text),
            None => Prefix::new(s),
        }
    }
}

impl fmt::Display for Prefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.optional {
            write!(f, "({})", self.text)
        } else {
            f.write_str(&self.text)
        }
    }
}

/// One precomputed reading.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CounterForm {
    pub key: QuantityKey,
    pub prefix: Prefix,
    pub surface: String,
}

/// Immutable construction parameters for a counter table.
///
/// Overrides are collected as given and validated in [`CounterSpec::build`],
/// so a duplicate or out-of-range key is reported rather than silently
/// overwritten.
#[derive(Debug, Clone, Default)]
pub struct CounterSpec {
    base: String,
    prefixes: Vec<(QuantityKey, Prefix)>,
    morphs: Vec<(QuantityKey, MorphRule)>,
}

impl CounterSpec {
    pub fn new(base: impl Into<String>) -> Self {
        Self {
            base: base.into(),
            ..Self::default()
        }
    }

    pub fn prefix(mut self, key: QuantityKey, prefix: Prefix) -> Self {
        self.prefixes.push((key, prefix));
        self
    }

    pub fn morph(mut self, key: QuantityKey, rule: MorphRule) -> Self {
        self.morphs.push((key, rule));
        self
    }

    /// Apply the same morph rule to several keys.
    pub fn morph_all(mut self, keys: &[QuantityKey], rule: MorphRule) -> Self {
        self.morphs.extend(keys.iter().map(|&k| (k, rule)));
        self
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    pub fn build(&self) -> Result<CounterTable, CounterError> {
        let _span = debug_span!("build_counter", base = %self.base).entered();

        let mut chars = self.base.chars();
        let first = chars.next().ok_or(CounterError::EmptyBase)?;
        let rest = chars.as_str();

        let prefixes = collect_overrides(&self.prefixes, "prefix")?;
        let morphs = collect_overrides(&self.morphs, "morph")?;

        let forms = QuantityKey::all()
            .map(|key| {
                let prefix = prefixes
                    .get(&key)
                    .cloned()
                    .unwrap_or_else(|| Prefix::new(key.standard_prefix()));
                let rule = morphs.get(&key).copied().unwrap_or_default();
                let mora = rule
                    .apply(first)
                    .map_err(|source| CounterError::Morph { key, source })?;
                let surface = format!("{}{}{}", prefix.text, mora, rest);
                Ok(CounterForm {
                    key,
                    prefix,
                    surface,
                })
            })
            .collect::<Result<Vec<_>, CounterError>>()?;

        debug!(
            prefix_overrides = prefixes.len(),
            morph_overrides = morphs.len(),
            "counter table built"
        );
        Ok(CounterTable {
            base: self.base.clone(),
            forms,
        })
    }
}

fn collect_overrides<T: Clone>(
    entries: &[(QuantityKey, T)],
    table: &'static str,
) -> Result<BTreeMap<QuantityKey, T>, CounterError> {
    let mut map = BTreeMap::new();
    for (key, value) in entries {
        if !key.is_valid() {
            return Err(CounterError::KeyOutOfRange(*key));
        }
        if map.insert(*key, value.clone()).is_some() {
            return Err(CounterError::DuplicateOverride { key: *key, table });
        }
    }
    Ok(map)
}

/// Precomputed readings of one counter word for 1–10 and なん.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CounterTable {
    base: String,
    forms: Vec<CounterForm>,
}

impl CounterTable {
    pub fn base(&self) -> &str {
        &self.base
    }

    /// Reading of `n` of this counter.
    ///
    /// Only the last digit counts, except that every multiple of ten reads
    /// through the 10 entry (20ドル → じゅうドル), as the drills only pair the
    /// counter with the final numeral.
    pub fn quantity(&self, n: u32) -> Result<&str, CounterError> {
        self.form(n).map(|f| f.surface.as_str())
    }

    pub fn form(&self, n: u32) -> Result<&CounterForm, CounterError> {
        if n == 0 {
            return Err(CounterError::NonPositive);
        }
        let digit = match n % 10 {
            0 => 10,
            d => d as u8,
        };
        Ok(&self.forms[QuantityKey::Digit(digit).index()])
    }

    /// Every accepted reading of `n`: the table reading, then the plain
    /// numeral with the unchanged base when the prefix is optional
    /// (はっかげつ, はちかげつ).
    pub fn readings(&self, n: u32) -> Result<Vec<String>, CounterError> {
        let form = self.form(n)?;
        let mut readings = vec![form.surface.clone()];
        if form.prefix.optional {
            let plain = format!("{}{}", form.key.standard_prefix(), self.base);
            if plain != form.surface {
                readings.push(plain);
            }
        }
        Ok(readings)
    }

    /// The "how many" reading (なんぼん).
    pub fn question(&self) -> &str {
        &self.forms[QuantityKey::Question.index()].surface
    }

    /// `None` for a digit outside 1..=10.
    pub fn entry(&self, key: QuantityKey) -> Option<&CounterForm> {
        if !key.is_valid() {
            return None;
        }
        self.forms.get(key.index())
    }

    pub fn forms(&self) -> &[CounterForm] {
        &self.forms
    }
}

/// A counter, possibly with irregular whole-word readings for specific
/// quantities (人: ひとり, ふたり).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Counter {
    Standard(CounterTable),
    Irregular {
        table: CounterTable,
        exceptions: BTreeMap<u32, String>,
    },
}

impl Counter {
    /// The people counter: ひとり, ふたり, then さんにん, よにん, ...
    pub fn people() -> Result<Counter, CounterError> {
        let table = CounterSpec::new("にん")
            .prefix(QuantityKey::Digit(4), Prefix::new("よ"))
            .build()?;
        Ok(Counter::Irregular {
            table,
            exceptions: BTreeMap::from([(1, "ひとり".to_string()), (2, "ふたり".to_string())]),
        })
    }

    pub fn table(&self) -> &CounterTable {
        match self {
            Counter::Standard(table) | Counter::Irregular { table, .. } => table,
        }
    }

    /// Exceptions match the exact quantity only, so 11 falls through to the
    /// table's last-digit reading (いちにん).
    pub fn quantity(&self, n: u32) -> Result<&str, CounterError> {
        match self {
            Counter::Standard(table) => table.quantity(n),
            Counter::Irregular { table, exceptions } => {
                if n == 0 {
                    return Err(CounterError::NonPositive);
                }
                match exceptions.get(&n) {
                    Some(word) => Ok(word.as_str()),
                    None => table.quantity(n),
                }
            }
        }
    }

    pub fn readings(&self, n: u32) -> Result<Vec<String>, CounterError> {
        match self {
            Counter::Irregular { exceptions, .. } if n > 0 && exceptions.contains_key(&n) => {
                Ok(vec![exceptions[&n].clone()])
            }
            _ => self.table().readings(n),
        }
    }

    pub fn question(&self) -> &str {
        self.table().question()
    }
}

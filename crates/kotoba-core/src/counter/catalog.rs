use std::collections::BTreeMap;
use std::sync::OnceLock;

use serde::Deserialize;
use tracing::{debug, debug_span};

use super::{Counter, CounterError, CounterSpec, Prefix, QuantityKey};
use crate::kana::MorphRule;

pub const DEFAULT_COUNTERS_TOML: &str = include_str!("default_counters.toml");

static CUSTOM_TOML: OnceLock<String> = OnceLock::new();

#[derive(Debug, thiserror::Error)]
pub enum CounterConfigError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("[counters] table is empty")]
    Empty,
    #[error("{context}: invalid quantity key {key:?}")]
    InvalidKey { context: String, key: String },
    #[error("{context}: unknown morph rule {rule:?}")]
    InvalidMorph { context: String, rule: String },
    #[error("{context}: irregular key must be a positive integer, got {key:?}")]
    InvalidIrregular { context: String, key: String },
    #[error("counters.{counter}: unknown prefix set {set:?}")]
    UnknownPrefixSet { counter: String, set: String },
    #[error("counters.{name}: {source}")]
    Counter {
        name: String,
        #[source]
        source: CounterError,
    },
    #[error("counter catalog already initialized")]
    AlreadyInitialized,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct CountersConfig {
    #[serde(default)]
    prefix_sets: BTreeMap<String, BTreeMap<String, String>>,
    #[serde(default)]
    counters: BTreeMap<String, CounterConfig>,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct CounterConfig {
    label: Option<String>,
    base: String,
    prefix_set: Option<String>,
    #[serde(default)]
    prefixes: BTreeMap<String, String>,
    #[serde(default)]
    morph: BTreeMap<String, String>,
    #[serde(default)]
    irregular: BTreeMap<String, String>,
}

/// A named counter from the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogEntry {
    pub name: String,
    /// Written form shown to the learner (本, 時間, ...).
    pub label: String,
    pub counter: Counter,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CounterCatalog {
    entries: BTreeMap<String, CatalogEntry>,
}

impl CounterCatalog {
    /// Set custom TOML before first `global()` call.
    pub fn init_custom(toml_content: String) -> Result<(), CounterConfigError> {
        parse_counters_toml(&toml_content)?;
        CUSTOM_TOML
            .set(toml_content)
            .map_err(|_| CounterConfigError::AlreadyInitialized)
    }

    /// Get or initialize the global catalog.
    pub fn global() -> &'static CounterCatalog {
        static INSTANCE: OnceLock<CounterCatalog> = OnceLock::new();
        INSTANCE.get_or_init(|| {
            let toml_str = CUSTOM_TOML
                .get()
                .map(|s| s.as_str())
                .unwrap_or(DEFAULT_COUNTERS_TOML);
            parse_counters_toml(toml_str).expect("counters TOML must be valid")
        })
    }

    pub fn default_toml() -> &'static str {
        DEFAULT_COUNTERS_TOML
    }

    pub fn get(&self, name: &str) -> Option<&CatalogEntry> {
        self.entries.get(name)
    }

    /// Look up by catalog name first, then by label (so both "sticks" and "本" work).
    pub fn find(&self, name_or_label: &str) -> Option<&CatalogEntry> {
        self.get(name_or_label)
            .or_else(|| self.entries.values().find(|e| e.label == name_or_label))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(|s| s.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = &CatalogEntry> {
        self.entries.values()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Parse and build every counter described by `toml_str`.
pub fn parse_counters_toml(toml_str: &str) -> Result<CounterCatalog, CounterConfigError> {
    let _span = debug_span!("parse_counters_toml").entered();

    let config: CountersConfig =
        toml::from_str(toml_str).map_err(|e| CounterConfigError::Parse(e.to_string()))?;
    if config.counters.is_empty() {
        return Err(CounterConfigError::Empty);
    }

    let mut prefix_sets = BTreeMap::new();
    for (set_name, raw) in &config.prefix_sets {
        let context = format!("prefix_sets.{set_name}");
        prefix_sets.insert(set_name.as_str(), parse_prefixes(&context, raw)?);
    }

    let mut entries = BTreeMap::new();
    for (name, raw) in config.counters {
        let context = format!("counters.{name}");

        // Counter-level prefixes layer over the named set.
        let mut prefixes = match &raw.prefix_set {
            Some(set) => prefix_sets.get(set.as_str()).cloned().ok_or_else(|| {
                CounterConfigError::UnknownPrefixSet {
                    counter: name.clone(),
                    set: set.clone(),
                }
            })?,
            None => BTreeMap::new(),
        };
        prefixes.extend(parse_prefixes(&context, &raw.prefixes)?);

        let mut spec = CounterSpec::new(raw.base.as_str());
        for (key, prefix) in prefixes {
            spec = spec.prefix(key, prefix);
        }
        for (key, rule) in &raw.morph {
            let rule: MorphRule = rule.parse().map_err(|_| CounterConfigError::InvalidMorph {
                context: context.clone(),
                rule: rule.clone(),
            })?;
            spec = spec.morph(parse_key(&context, key)?, rule);
        }

        let table = spec.build().map_err(|source| CounterConfigError::Counter {
            name: name.clone(),
            source,
        })?;

        let counter = if raw.irregular.is_empty() {
            Counter::Standard(table)
        } else {
            let mut exceptions = BTreeMap::new();
            for (key, word) in &raw.irregular {
                let n = key
                    .parse::<u32>()
                    .ok()
                    .filter(|&n| n > 0)
                    .ok_or_else(|| CounterConfigError::InvalidIrregular {
                        context: context.clone(),
                        key: key.clone(),
                    })?;
                exceptions.insert(n, word.clone());
            }
            Counter::Irregular { table, exceptions }
        };

        let label = raw.label.unwrap_or_else(|| raw.base.clone());
        entries.insert(
            name.clone(),
            CatalogEntry {
                name,
                label,
                counter,
            },
        );
    }

    debug!(counters = entries.len(), sets = prefix_sets.len());
    Ok(CounterCatalog { entries })
}

fn parse_key(context: &str, key: &str) -> Result<QuantityKey, CounterConfigError> {
    key.parse().map_err(|_| CounterConfigError::InvalidKey {
        context: context.to_string(),
        key: key.to_string(),
    })
}

fn parse_prefixes(
    context: &str,
    raw: &BTreeMap<String, String>,
) -> Result<BTreeMap<QuantityKey, Prefix>, CounterConfigError> {
    let mut prefixes = BTreeMap::new();
    for (key, text) in raw {
        prefixes.insert(parse_key(context, key)?, Prefix::parse(text));
    }
    Ok(prefixes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::counter::CounterError;

    #[test]
    fn parse_default_toml() {
        let catalog = parse_counters_toml(DEFAULT_COUNTERS_TOML).unwrap();
        assert_eq!(catalog.len(), 13);
        assert!(catalog.names().any(|n| n == "sticks"));
    }

    #[test]
    fn global_matches_default() {
        let catalog = CounterCatalog::global();
        assert_eq!(catalog, &parse_counters_toml(DEFAULT_COUNTERS_TOML).unwrap());
    }

    #[test]
    fn find_by_label() {
        let catalog = CounterCatalog::global();
        assert_eq!(catalog.find("本").unwrap().name, "sticks");
        assert_eq!(catalog.find("minutes").unwrap().label, "分");
        assert!(catalog.find("匹").is_none());
    }

    #[test]
    fn prefix_set_is_layered() {
        let catalog = CounterCatalog::global();
        let spans = catalog.get("month_spans").unwrap().counter.table();
        assert_eq!(spans.quantity(1).unwrap(), "いっかげつ");
        let eight = spans.form(8).unwrap();
        assert_eq!(eight.surface, "はっかげつ");
        assert!(eight.prefix.optional);
        assert_eq!(eight.prefix.to_string(), "(はっ)");
    }

    #[test]
    fn label_defaults_to_base() {
        let toml = r#"
[counters.cups]
base = "はい"
"#;
        let catalog = parse_counters_toml(toml).unwrap();
        assert_eq!(catalog.get("cups").unwrap().label, "はい");
    }

    #[test]
    fn error_empty() {
        let err = parse_counters_toml("[prefix_sets.x]\n1 = \"いっ\"\n").unwrap_err();
        assert!(matches!(err, CounterConfigError::Empty));
    }

    #[test]
    fn error_invalid_toml() {
        let err = parse_counters_toml("not valid toml {{{").unwrap_err();
        assert!(matches!(err, CounterConfigError::Parse(_)));
    }

    #[test]
    fn error_duplicate_key_rejected_by_parser() {
        let toml = r#"
[counters.sticks]
base = "ほん"
prefixes = { 1 = "いっ", 1 = "いち" }
"#;
        let err = parse_counters_toml(toml).unwrap_err();
        assert!(matches!(err, CounterConfigError::Parse(_)));
    }

    #[test]
    fn error_key_out_of_range() {
        let toml = r#"
[counters.sticks]
base = "ほん"
prefixes = { 11 = "じゅういっ" }
"#;
        let err = parse_counters_toml(toml).unwrap_err();
        assert!(matches!(err, CounterConfigError::InvalidKey { .. }));
        assert!(err.to_string().contains("counters.sticks"));
    }

    #[test]
    fn error_unknown_morph() {
        let toml = r#"
[counters.sticks]
base = "ほん"
morph = { 1 = "q" }
"#;
        let err = parse_counters_toml(toml).unwrap_err();
        assert!(matches!(err, CounterConfigError::InvalidMorph { .. }));
    }

    #[test]
    fn error_morph_on_kanji_base() {
        let toml = r#"
[counters.sticks]
base = "本"
morph = { 1 = "p" }
"#;
        let err = parse_counters_toml(toml).unwrap_err();
        assert!(matches!(
            err,
            CounterConfigError::Counter {
                source: CounterError::Morph { .. },
                ..
            }
        ));
    }

    #[test]
    fn error_unknown_prefix_set() {
        let toml = r#"
[counters.sticks]
base = "ほん"
prefix_set = "nope"
"#;
        let err = parse_counters_toml(toml).unwrap_err();
        assert!(matches!(err, CounterConfigError::UnknownPrefixSet { .. }));
    }

    #[test]
    fn error_irregular_zero() {
        let toml = r#"
[counters.people]
base = "にん"
irregular = { 0 = "ゼロにん" }
"#;
        let err = parse_counters_toml(toml).unwrap_err();
        assert!(matches!(err, CounterConfigError::InvalidIrregular { .. }));
    }

    #[test]
    fn error_unknown_field() {
        let toml = r#"
[counters.sticks]
base = "ほん"
prefix = { 1 = "いっ" }
"#;
        let err = parse_counters_toml(toml).unwrap_err();
        assert!(matches!(err, CounterConfigError::Parse(_)));
    }

    #[test]
    fn error_empty_base() {
        let toml = r#"
[counters.blank]
base = ""
"#;
        let err = parse_counters_toml(toml).unwrap_err();
        assert!(matches!(
            err,
            CounterConfigError::Counter {
                source: CounterError::EmptyBase,
                ..
            }
        ));
    }
}

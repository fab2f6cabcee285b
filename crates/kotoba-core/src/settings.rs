//! Global settings loaded from TOML, following the same OnceLock pattern as
//! the counter catalog.
//!
//! - `init_custom(toml_content)` sets a custom TOML before first `settings()` call
//! - `settings()` returns `&'static Settings` (lazy-init singleton)
//! - Default values are embedded via `include_str!("default_settings.toml")`

use std::sync::OnceLock;

use serde::Deserialize;

use crate::conjugate::NegativeStyle;

pub const DEFAULT_SETTINGS_TOML: &str = include_str!("default_settings.toml");

static CUSTOM_TOML: OnceLock<String> = OnceLock::new();

/// Set custom TOML before first `settings()` call.
pub fn init_custom(toml_content: String) -> Result<(), SettingsError> {
    parse_settings_toml(&toml_content)?;
    CUSTOM_TOML
        .set(toml_content)
        .map_err(|_| SettingsError::AlreadyInitialized)
}

/// Get or initialize the global settings singleton.
pub fn settings() -> &'static Settings {
    static INSTANCE: OnceLock<Settings> = OnceLock::new();
    INSTANCE.get_or_init(|| {
        let toml_str = CUSTOM_TOML
            .get()
            .map(|s| s.as_str())
            .unwrap_or(DEFAULT_SETTINGS_TOML);
        parse_settings_toml(toml_str).expect("settings TOML must be valid")
    })
}

/// Returns the embedded default settings TOML content.
pub fn default_toml() -> &'static str {
    DEFAULT_SETTINGS_TOML
}

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: String, reason: String },
    #[error("settings already initialized")]
    AlreadyInitialized,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Settings {
    pub drill: DrillSettings,
    pub conjugation: ConjugationSettings,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DrillSettings {
    pub review_every: usize,
    pub max_attempts: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConjugationSettings {
    #[serde(default)]
    pub negative_style: NegativeStyle,
}

pub fn parse_settings_toml(toml_str: &str) -> Result<Settings, SettingsError> {
    let s: Settings =
        toml::from_str(toml_str).map_err(|e| SettingsError::Parse(e.to_string()))?;
    validate(&s)?;
    Ok(s)
}

fn validate(s: &Settings) -> Result<(), SettingsError> {
    macro_rules! check_positive_usize {
        ($section:ident . $field:ident) => {
            if s.$section.$field == 0 {
                return Err(SettingsError::InvalidValue {
                    field: concat!(stringify!($section), ".", stringify!($field)).to_string(),
                    reason: "must be positive".to_string(),
                });
            }
        };
    }

    check_positive_usize!(drill.review_every);
    check_positive_usize!(drill.max_attempts);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_default_toml() {
        let s = parse_settings_toml(DEFAULT_SETTINGS_TOML).unwrap();
        assert_eq!(s.drill.review_every, 3);
        assert_eq!(s.drill.max_attempts, 2);
        assert_eq!(s.conjugation.negative_style, NegativeStyle::Conservative);
    }

    #[test]
    fn global_matches_default() {
        assert_eq!(
            settings(),
            &parse_settings_toml(DEFAULT_SETTINGS_TOML).unwrap()
        );
    }

    #[test]
    fn parse_valid_custom_toml() {
        let toml = r#"
[drill]
review_every = 5
max_attempts = 1

[conjugation]
negative_style = "colloquial"
"#;
        let s = parse_settings_toml(toml).unwrap();
        assert_eq!(s.drill.review_every, 5);
        assert_eq!(s.drill.max_attempts, 1);
        assert_eq!(s.conjugation.negative_style, NegativeStyle::Colloquial);
    }

    #[test]
    fn negative_style_defaults_to_conservative() {
        let toml = r#"
[drill]
review_every = 2
max_attempts = 3

[conjugation]
"#;
        let s = parse_settings_toml(toml).unwrap();
        assert_eq!(s.conjugation.negative_style, NegativeStyle::Conservative);
    }

    #[test]
    fn reject_zero_review_interval() {
        let toml = r#"
[drill]
review_every = 0
max_attempts = 2

[conjugation]
"#;
        let err = parse_settings_toml(toml).unwrap_err();
        assert!(matches!(
            err,
            SettingsError::InvalidValue { ref field, .. } if field == "drill.review_every"
        ));
    }

    #[test]
    fn reject_zero_attempts() {
        let toml = r#"
[drill]
review_every = 1
max_attempts = 0

[conjugation]
"#;
        let err = parse_settings_toml(toml).unwrap_err();
        assert!(err.to_string().contains("drill.max_attempts"));
    }

    #[test]
    fn reject_unknown_style() {
        let toml = r#"
[drill]
review_every = 1
max_attempts = 1

[conjugation]
negative_style = "formal"
"#;
        assert!(matches!(
            parse_settings_toml(toml).unwrap_err(),
            SettingsError::Parse(_)
        ));
    }

    #[test]
    fn reject_missing_section() {
        let err = parse_settings_toml("[drill]\nreview_every = 1\nmax_attempts = 1\n").unwrap_err();
        assert!(matches!(err, SettingsError::Parse(_)));
    }

    #[test]
    fn reject_invalid_toml() {
        assert!(matches!(
            parse_settings_toml("not valid toml {{{").unwrap_err(),
            SettingsError::Parse(_)
        ));
    }

    #[test]
    fn init_custom_rejects_invalid() {
        assert!(init_custom("[drill]\nreview_every = 0\n".to_string()).is_err());
    }
}

//! Kotoba engine: Japanese study tables for counters and noun/adjective
//! conjugation.
//!
//! Re-exports the `kotoba-core` modules and adds process-level setup: custom
//! configuration files and tracing.

pub mod trace_init;

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

pub use kotoba_core::{conjugate, counter, kana, settings, unicode, vocab};

use counter::{CounterCatalog, CounterConfigError};
use settings::SettingsError;
use tracing::debug;

pub fn engine_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("{}: {source}", path.display())]
    Counters {
        path: PathBuf,
        #[source]
        source: CounterConfigError,
    },
    #[error("{}: {source}", path.display())]
    Settings {
        path: PathBuf,
        #[source]
        source: SettingsError,
    },
}

/// Install custom counter and settings files before the globals are first
/// used. `None` keeps the embedded default.
pub fn load_config(
    counters_path: Option<&Path>,
    settings_path: Option<&Path>,
) -> Result<(), ConfigError> {
    if let Some(path) = counters_path {
        let text = read(path)?;
        CounterCatalog::init_custom(text).map_err(|source| ConfigError::Counters {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), "custom counters loaded");
    }
    if let Some(path) = settings_path {
        let text = read(path)?;
        settings::init_custom(text).map_err(|source| ConfigError::Settings {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), "custom settings loaded");
    }
    Ok(())
}

fn read(path: &Path) -> Result<String, ConfigError> {
    fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn facade_reaches_core() {
        let sticks = counter::CounterCatalog::global().get("sticks").unwrap();
        assert_eq!(sticks.counter.quantity(1).unwrap(), "いっぽん");
        assert!(!engine_version().is_empty());
    }

    #[test]
    fn no_config_is_a_no_op() {
        load_config(None, None).unwrap();
    }

    #[test]
    fn missing_file_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("counters.toml");
        let err = load_config(Some(&path), None).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
        assert!(err.to_string().contains("counters.toml"));
    }

    #[test]
    fn invalid_counters_rejected_before_install() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"[counters.x]\nbase = \"\"\n").unwrap();
        let err = load_config(Some(file.path()), None).unwrap_err();
        assert!(matches!(err, ConfigError::Counters { .. }));
    }

    #[test]
    fn invalid_settings_rejected_before_install() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"[drill]\nreview_every = 0\nmax_attempts = 1\n[conjugation]\n")
            .unwrap();
        let err = load_config(None, Some(file.path())).unwrap_err();
        assert!(matches!(err, ConfigError::Settings { .. }));
    }
}

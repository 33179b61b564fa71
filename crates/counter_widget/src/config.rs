//! Runtime configuration for the counter widget.
//!
//! [`WidgetConfig`] is the single source of truth for mount-time settings,
//! independent of where they came from (file, CLI flags, JavaScript).
//!
//! # Examples
//!
//! ```rust
//! use counter_widget::WidgetConfig;
//!
//! let config = WidgetConfig::from_toml_str("initial_counter = 3").unwrap();
//! assert_eq!(config.initial_counter, 3);
//! assert_eq!(config.increment_label, "Increment counter");
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::{Error, Result};
use crate::state::WidgetState;
use crate::widget::{DEFAULT_DECREMENT_LABEL, DEFAULT_INCREMENT_LABEL, Labels};

const INLINE_SOURCE: &str = "<inline>";

/// Mount-time configuration.
///
/// Every field has a default, so partial files are accepted. Unknown keys are
/// rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct WidgetConfig {
    /// Counter value at mount.
    pub initial_counter: u64,

    /// Whether the error message is showing at mount.
    ///
    /// Only valid together with `initial_counter = 0`.
    pub initial_error: bool,

    /// Label of the increment button.
    pub increment_label: String,

    /// Label of the decrement button.
    pub decrement_label: String,

    /// Log filter used when neither `RUST_LOG` nor `-v` is given.
    pub log_level: String,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            initial_counter: 0,
            initial_error: false,
            increment_label: DEFAULT_INCREMENT_LABEL.to_string(),
            decrement_label: DEFAULT_DECREMENT_LABEL.to_string(),
            log_level: "warn".to_string(),
        }
    }
}

impl WidgetConfig {
    /// Create a new config with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a config file, choosing the parser by extension (`.toml` or
    /// `.json`).
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigRead`] if the file cannot be read,
    /// [`Error::UnsupportedConfigFormat`] for other extensions and
    /// [`Error::ConfigParse`] for malformed content.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let format = ConfigFormat::from_path(path)?;
        let content = fs::read_to_string(path).map_err(|source| Error::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        let config = format.parse(&content, path)?;
        info!(path = %path.display(), "loaded widget config");
        Ok(config)
    }

    /// Parse TOML content.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigParse`] for malformed content.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        ConfigFormat::Toml.parse(content, Path::new(INLINE_SOURCE))
    }

    /// Parse JSON content.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigParse`] for malformed content.
    pub fn from_json_str(content: &str) -> Result<Self> {
        ConfigFormat::Json.parse(content, Path::new(INLINE_SOURCE))
    }

    /// Serialize to pretty JSON.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigParse`] if serialization fails.
    pub fn to_json_pretty(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| Error::ConfigParse {
            path: PathBuf::from(INLINE_SOURCE),
            message: e.to_string(),
        })
    }

    /// The validated mount state.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidState`] when `initial_error` is set with a
    /// non-zero `initial_counter`.
    pub fn initial_state(&self) -> Result<WidgetState> {
        WidgetState::new(self.initial_counter, self.initial_error)
    }

    /// Button labels.
    #[must_use]
    pub fn labels(&self) -> Labels {
        Labels {
            increment: self.increment_label.clone(),
            decrement: self.decrement_label.clone(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ConfigFormat {
    Toml,
    Json,
}

impl ConfigFormat {
    fn from_path(path: &Path) -> Result<Self> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("toml") => Ok(Self::Toml),
            Some(ext) if ext.eq_ignore_ascii_case("json") => Ok(Self::Json),
            _ => Err(Error::UnsupportedConfigFormat {
                path: path.to_path_buf(),
            }),
        }
    }

    fn parse(self, content: &str, path: &Path) -> Result<WidgetConfig> {
        let parsed: std::result::Result<WidgetConfig, String> = match self {
            Self::Toml => toml::from_str(content).map_err(|e| e.to_string()),
            Self::Json => serde_json::from_str(content).map_err(|e| e.to_string()),
        };
        parsed.map_err(|message| Error::ConfigParse {
            path: path.to_path_buf(),
            message,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_use_standard_labels() {
        let config = WidgetConfig::default();
        assert_eq!(config.initial_counter, 0);
        assert!(!config.initial_error);
        assert_eq!(config.increment_label, "Increment counter");
        assert_eq!(config.decrement_label, "Decrement counter");
        assert_eq!(config.log_level, "warn");
    }

    #[test]
    fn partial_toml_keeps_defaults() {
        let config = WidgetConfig::from_toml_str("decrement_label = \"Down\"").unwrap();
        assert_eq!(config.decrement_label, "Down");
        assert_eq!(config.increment_label, "Increment counter");
    }

    #[test]
    fn json_parses() {
        let config =
            WidgetConfig::from_json_str(r#"{"initial_counter": 5, "log_level": "debug"}"#).unwrap();
        assert_eq!(config.initial_counter, 5);
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let err = WidgetConfig::from_toml_str("initial_count = 1").unwrap_err();
        assert!(matches!(err, Error::ConfigParse { .. }));
    }

    #[test]
    fn negative_counter_is_rejected() {
        assert!(WidgetConfig::from_json_str(r#"{"initial_counter": -1}"#).is_err());
    }

    #[test]
    fn initial_state_validates_invariant() {
        let config = WidgetConfig {
            initial_counter: 2,
            initial_error: true,
            ..WidgetConfig::default()
        };
        assert!(matches!(
            config.initial_state(),
            Err(Error::InvalidState { counter: 2 })
        ));

        let config = WidgetConfig {
            initial_error: true,
            ..WidgetConfig::default()
        };
        assert_eq!(config.initial_state().unwrap(), WidgetState::errored());
    }

    #[test]
    fn json_round_trip_preserves_labels() {
        let config = WidgetConfig {
            increment_label: "Up".into(),
            ..WidgetConfig::default()
        };
        let json = config.to_json_pretty().unwrap();
        assert_eq!(WidgetConfig::from_json_str(&json).unwrap(), config);
    }

    #[test]
    fn format_by_extension() {
        assert_eq!(
            ConfigFormat::from_path(Path::new("a.TOML")).unwrap(),
            ConfigFormat::Toml
        );
        assert_eq!(
            ConfigFormat::from_path(Path::new("a.json")).unwrap(),
            ConfigFormat::Json
        );
        assert!(matches!(
            ConfigFormat::from_path(Path::new("a.yaml")),
            Err(Error::UnsupportedConfigFormat { .. })
        ));
    }
}

//! Optional TOML configuration shared by every showcase binary.
//!
//! ```toml
//! color = false
//!
//! [logging]
//! level = "debug"
//! format = "pretty"
//! ```

use serde::Deserialize;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const CONFIG_ENV_VAR: &str = "OOP_SHOWCASE_CONFIG";
pub const DEFAULT_CONFIG_FILE: &str = "oop-showcase.toml";

const LEVELS: [&str; 6] = ["off", "error", "warn", "info", "debug", "trace"];

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid log level '{level}' (expected one of: {})", LEVELS.join(", "))]
    InvalidLogLevel { level: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Compact,
    Pretty,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggingConfig {
    pub level: String,
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
            format: LogFormat::Compact,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ShowcaseConfig {
    pub color: bool,
    pub logging: LoggingConfig,
}

impl Default for ShowcaseConfig {
    fn default() -> Self {
        Self {
            color: true,
            logging: LoggingConfig::default(),
        }
    }
}

impl ShowcaseConfig {
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: ShowcaseConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    /// Resolution order: `$OOP_SHOWCASE_CONFIG`, then `./oop-showcase.toml`
    /// if it exists, then defaults.
    pub fn discover() -> Result<Self, ConfigError> {
        Self::discover_from(env::var_os(CONFIG_ENV_VAR).map(PathBuf::from), Path::new("."))
    }

    fn discover_from(explicit: Option<PathBuf>, dir: &Path) -> Result<Self, ConfigError> {
        if let Some(path) = explicit {
            return Self::from_file(&path);
        }
        let fallback = dir.join(DEFAULT_CONFIG_FILE);
        if fallback.is_file() {
            Self::from_file(&fallback)
        } else {
            Ok(Self::default())
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let level = self.logging.level.to_ascii_lowercase();
        if !LEVELS.contains(&level.as_str()) {
            return Err(ConfigError::InvalidLogLevel {
                level: self.logging.level.clone(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::{tempdir, NamedTempFile};

    #[test]
    fn test_empty_document_gives_defaults() {
        let config = ShowcaseConfig::from_toml_str("").unwrap();
        assert_eq!(config, ShowcaseConfig::default());
        assert!(config.color);
        assert_eq!(config.logging.level, "warn");
        assert_eq!(config.logging.format, LogFormat::Compact);
    }

    #[test]
    fn test_partial_document() {
        let config = ShowcaseConfig::from_toml_str(
            r#"
            color = false

            [logging]
            format = "pretty"
            "#,
        )
        .unwrap();
        assert!(!config.color);
        assert_eq!(config.logging.level, "warn");
        assert_eq!(config.logging.format, LogFormat::Pretty);
    }

    #[test]
    fn test_invalid_level_rejected() {
        let err = ShowcaseConfig::from_toml_str("[logging]\nlevel = \"loud\"").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidLogLevel { ref level } if level == "loud"));
        assert!(err.to_string().contains("off, error, warn, info, debug, trace"));
    }

    #[test]
    fn test_level_is_case_insensitive() {
        let config = ShowcaseConfig::from_toml_str("[logging]\nlevel = \"DEBUG\"").unwrap();
        assert_eq!(config.logging.level, "DEBUG");
    }

    #[test]
    fn test_unknown_key_rejected() {
        let err = ShowcaseConfig::from_toml_str("colour = true").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[logging]\nlevel = \"trace\"").unwrap();

        let config = ShowcaseConfig::from_file(file.path()).unwrap();
        assert_eq!(config.logging.level, "trace");
    }

    #[test]
    fn test_missing_explicit_file_is_an_error() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("nope.toml");
        let err = ShowcaseConfig::discover_from(Some(missing.clone()), dir.path()).unwrap_err();
        match err {
            ConfigError::Read { path, .. } => assert_eq!(path, missing),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_discover_falls_back_to_working_dir_file_then_defaults() {
        let dir = tempdir().unwrap();
        let config = ShowcaseConfig::discover_from(None, dir.path()).unwrap();
        assert_eq!(config, ShowcaseConfig::default());

        fs::write(dir.path().join(DEFAULT_CONFIG_FILE), "color = false").unwrap();
        let config = ShowcaseConfig::discover_from(None, dir.path()).unwrap();
        assert!(!config.color);
    }
}

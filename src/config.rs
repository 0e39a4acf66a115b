//! Configuration file support.
//!
//! Looked up in order:
//! 1. `sqlfn.toml`
//! 2. `.sqlfn/config.toml`
//! 3. `<user config dir>/sqlfn/config.toml`
//!
//! ```toml
//! dialect = "mariadb"
//! parameterize = false
//!
//! [log]
//! level = "debug"
//! format = "json"
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::transpiler::Dialect;

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Dialect used when none is given on the command line
    pub dialect: Dialect,
    /// Extract literals as bind parameters
    pub parameterize: bool,
    pub log: LogConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// tracing filter directive (`info`, `sqlfn=debug`, ...)
    pub level: String,
    pub format: LogFormat,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
            format: LogFormat::Text,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

impl Config {
    /// Candidate config file locations, most specific first.
    pub fn search_paths() -> Vec<PathBuf> {
        let mut paths = vec![
            PathBuf::from("sqlfn.toml"),
            PathBuf::from(".sqlfn").join("config.toml"),
        ];
        if let Some(dir) = dirs::config_dir() {
            paths.push(dir.join("sqlfn").join("config.toml"));
        }
        paths
    }

    /// Load the first config file found, or defaults when there is none.
    pub fn load() -> Result<Self, ConfigError> {
        for path in Self::search_paths() {
            if path.is_file() {
                return Self::from_file(&path);
            }
        }
        Ok(Self::default())
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let display = path.display().to_string();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: display.clone(),
            source,
        })?;
        Self::from_toml_str(&content, &display)
    }

    /// Parse TOML text; `origin` names the source in error messages.
    pub fn from_toml_str(content: &str, origin: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|source| ConfigError::Parse {
            path: origin.to_string(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_when_empty() {
        let config = Config::from_toml_str("", "inline").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.dialect, Dialect::Postgres);
        assert_eq!(config.log.level, "warn");
    }

    #[test]
    fn test_parse_full() {
        let config = Config::from_toml_str(
            r#"
            dialect = "mariadb"
            parameterize = true

            [log]
            level = "sqlfn=debug"
            format = "json"
            "#,
            "inline",
        )
        .unwrap();
        assert_eq!(config.dialect, Dialect::MariaDb);
        assert!(config.parameterize);
        assert_eq!(config.log.level, "sqlfn=debug");
        assert_eq!(config.log.format, LogFormat::Json);
    }

    #[test]
    fn test_unknown_dialect_is_parse_error() {
        let err = Config::from_toml_str("dialect = \"db2\"", "inline").unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
        assert!(err.to_string().contains("inline"));
    }

    #[test]
    fn test_search_paths_start_local() {
        let paths = Config::search_paths();
        assert_eq!(paths[0], PathBuf::from("sqlfn.toml"));
        assert!(paths.len() >= 2);
    }
}

//! Application configuration.
//!
//! An optional JSON file supplies defaults; command-line flags win over it.

use crate::consts::cli_consts::DEFAULT_DATA_PATH;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Cannot read config file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config file {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    /// Dataset path, relative to the working directory unless absolute.
    pub data_path: Option<PathBuf>,
    /// Paint the dark dashboard background.
    pub with_background_color: Option<bool>,
}

impl Config {
    /// Loads configuration from a JSON file at the given path.
    ///
    /// # Errors
    /// Returns a [`ConfigError`] if reading from file fails or JSON is invalid.
    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let buf = fs::read(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Config = serde_json::from_slice(&buf).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(config)
    }

    /// Final dataset path: the flag, then the file value, then `main_data.csv`.
    pub fn resolve_data_path(&self, flag: Option<PathBuf>) -> PathBuf {
        flag.or_else(|| self.data_path.clone())
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_PATH))
    }

    /// Background colours stay on unless the flag or the file turns them off.
    pub fn resolve_background(&self, no_background_flag: bool) -> bool {
        !no_background_flag && self.with_background_color.unwrap_or(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use std::io::Write;
    use tempfile::tempdir;

    #[test]
    // Loading a configuration file should return the values it holds.
    fn test_load_reads_values() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("dashboard.json");
        fs::write(
            &path,
            r#"{ "data_path": "data/hour.csv", "with_background_color": false }"#,
        )
        .unwrap();

        let config = Config::load_from_file(&path).unwrap();
        assert_eq!(config.data_path, Some(PathBuf::from("data/hour.csv")));
        assert_eq!(config.with_background_color, Some(false));
    }

    #[test]
    // Fields left out of the file fall back to defaults.
    fn test_load_accepts_partial_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("dashboard.json");
        fs::write(&path, "{}").unwrap();

        assert_eq!(Config::load_from_file(&path).unwrap(), Config::default());
    }

    #[test]
    // Loading an invalid JSON file should return an error.
    fn test_load_rejects_invalid_json() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("invalid_config.json");

        let mut file = File::create(&path).unwrap();
        writeln!(file, "invalid json").unwrap();

        let result = Config::load_from_file(&path);
        assert!(matches!(result, Err(ConfigError::Parse { .. })));
    }

    #[test]
    fn test_load_missing_file_fails() {
        let dir = tempdir().unwrap();
        let result = Config::load_from_file(&dir.path().join("absent.json"));
        assert!(matches!(result, Err(ConfigError::Read { .. })));
    }

    #[test]
    fn test_flags_override_file_values() {
        let config = Config {
            data_path: Some(PathBuf::from("from_file.csv")),
            with_background_color: Some(true),
        };

        assert_eq!(
            config.resolve_data_path(Some(PathBuf::from("from_flag.csv"))),
            PathBuf::from("from_flag.csv")
        );
        assert_eq!(config.resolve_data_path(None), PathBuf::from("from_file.csv"));
        assert!(!config.resolve_background(true));
        assert!(config.resolve_background(false));
    }

    #[test]
    fn test_defaults_without_file() {
        let config = Config::default();
        assert_eq!(config.resolve_data_path(None), PathBuf::from(DEFAULT_DATA_PATH));
        assert!(config.resolve_background(false));
    }
}

//! Configuration management and validation.
//!
//! Configuration is layered: built-in defaults, then an optional TOML file,
//! then `RESULT_ANALYZER_*` environment variables, then command-line flags
//! (applied by the CLI layer). [`Config::validate`] runs last.

use crate::constants::{
    APP_DIR_NAME, CONFIG_FILE_NAME, DEFAULT_TOP_N, LOG_LEVELS, MAX_WORKERS, env_keys,
};
use crate::app::services::result_extractor::ClassificationPolicy;
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Extraction settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractionConfig {
    /// Require every subject to pass for an overall Pass
    pub strict_subject_check: bool,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            strict_subject_check: true,
        }
    }
}

/// Processing and output settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProcessingConfig {
    /// Documents extracted concurrently by the batch command
    pub workers: usize,

    /// Directory for exported tables
    pub output_path: PathBuf,

    /// Directory of the JSON result store
    pub history_path: PathBuf,

    /// Default length of ranking listings
    pub top_n: usize,
}

impl Default for ProcessingConfig {
    fn default() -> Self {
        Self {
            workers: num_cpus::get().clamp(1, MAX_WORKERS),
            output_path: PathBuf::from("./output"),
            history_path: default_history_path(),
            top_n: DEFAULT_TOP_N,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
        }
    }
}

/// Global configuration for result analysis
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub extraction: ExtractionConfig,
    pub processing: ProcessingConfig,
    pub logging: LoggingConfig,
}

fn default_history_path() -> PathBuf {
    dirs::data_dir()
        .map(|dir| dir.join(APP_DIR_NAME).join("history"))
        .unwrap_or_else(|| PathBuf::from("./history"))
}

impl Config {
    /// `<config_dir>/result-analyzer/config.toml`
    pub fn default_config_path() -> Result<PathBuf> {
        dirs::config_dir()
            .map(|dir| dir.join(APP_DIR_NAME).join(CONFIG_FILE_NAME))
            .ok_or_else(|| Error::configuration("Could not determine the user config directory"))
    }

    /// Parse a TOML config file; missing sections and keys take defaults
    pub fn from_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(Error::file_not_found(path.display().to_string()));
        }

        let contents = std::fs::read_to_string(path)
            .map_err(|e| Error::io(format!("Failed to read config {}", path.display()), e))?;

        toml::from_str(&contents).map_err(|source| Error::ConfigParse {
            path: path.display().to_string(),
            source,
        })
    }

    /// Defaults, then `config_file` when given, then the process environment
    pub fn load_layered(config_file: Option<&Path>) -> Result<Self> {
        let mut config = match config_file {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };

        config.apply_env_overrides_from(|key| std::env::var(key).ok())?;
        Ok(config)
    }

    /// Apply `RESULT_ANALYZER_*` overrides read through `lookup`
    pub fn apply_env_overrides_from<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(value) = lookup(env_keys::STRICT) {
            self.extraction.strict_subject_check = parse_bool(env_keys::STRICT, &value)?;
            debug!("Strict subject check from environment: {}", value);
        }

        if let Some(value) = lookup(env_keys::WORKERS) {
            self.processing.workers = value.trim().parse().map_err(|_| {
                Error::configuration(format!(
                    "{} must be a positive integer, got '{}'",
                    env_keys::WORKERS,
                    value
                ))
            })?;
        }

        if let Some(value) = lookup(env_keys::HISTORY_PATH) {
            self.processing.history_path = PathBuf::from(value);
        }

        if let Some(value) = lookup(env_keys::OUTPUT_PATH) {
            self.processing.output_path = PathBuf::from(value);
        }

        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        if self.processing.workers == 0 {
            return Err(Error::configuration("Worker count must be at least 1"));
        }
        if self.processing.workers > MAX_WORKERS {
            return Err(Error::configuration(format!(
                "Worker count {} exceeds the maximum of {}",
                self.processing.workers, MAX_WORKERS
            )));
        }
        if self.processing.top_n == 0 {
            return Err(Error::configuration("Top-N must be at least 1"));
        }
        if !LOG_LEVELS.contains(&self.logging.level.as_str()) {
            return Err(Error::configuration(format!(
                "Log level '{}' is not one of {}",
                self.logging.level,
                LOG_LEVELS.join(", ")
            )));
        }
        Ok(())
    }

    pub fn policy(&self) -> ClassificationPolicy {
        ClassificationPolicy {
            strict_subject_check: self.extraction.strict_subject_check,
        }
    }

    pub fn with_workers(mut self, workers: usize) -> Self {
        self.processing.workers = workers;
        self
    }

    pub fn with_strict_subject_check(mut self, strict: bool) -> Self {
        self.extraction.strict_subject_check = strict;
        self
    }

    pub fn with_history_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.processing.history_path = path.into();
        self
    }
}

fn parse_bool(key: &str, value: &str) -> Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(Error::configuration(format!(
            "{} must be a boolean, got '{}'",
            key, value
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use tempfile::TempDir;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();

        assert!(config.extraction.strict_subject_check);
        assert!(config.processing.workers >= 1);
        assert_eq!(config.processing.top_n, DEFAULT_TOP_N);
        assert_eq!(config.policy(), ClassificationPolicy::strict());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_from_file_partial_sections() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        std::fs::write(
            &path,
            "[extraction]\nstrict_subject_check = false\n\n[processing]\nworkers = 3\n",
        )
        .unwrap();

        let config = Config::from_file(&path).unwrap();
        assert!(!config.extraction.strict_subject_check);
        assert_eq!(config.processing.workers, 3);
        assert_eq!(config.processing.top_n, DEFAULT_TOP_N);
        assert_eq!(config.logging.level, "warn");
    }

    #[test]
    fn test_from_file_parse_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        std::fs::write(&path, "[processing\nworkers = ").unwrap();

        let result = Config::from_file(&path);
        assert!(matches!(result, Err(Error::ConfigParse { .. })));
    }

    #[test]
    fn test_from_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let result = Config::from_file(&temp_dir.path().join("absent.toml"));
        assert!(matches!(result, Err(Error::FileNotFound { .. })));
    }

    #[test]
    fn test_env_overrides() {
        let mut config = Config::default();
        config
            .apply_env_overrides_from(lookup_from(&[
                (env_keys::STRICT, "false"),
                (env_keys::WORKERS, "6"),
                (env_keys::HISTORY_PATH, "/tmp/history"),
                (env_keys::OUTPUT_PATH, "/tmp/out"),
            ]))
            .unwrap();

        assert!(!config.extraction.strict_subject_check);
        assert_eq!(config.processing.workers, 6);
        assert_eq!(config.processing.history_path, PathBuf::from("/tmp/history"));
        assert_eq!(config.processing.output_path, PathBuf::from("/tmp/out"));
    }

    #[test]
    fn test_env_override_rejects_bad_values() {
        let mut config = Config::default();
        assert!(
            config
                .apply_env_overrides_from(lookup_from(&[(env_keys::STRICT, "maybe")]))
                .is_err()
        );
        assert!(
            config
                .apply_env_overrides_from(lookup_from(&[(env_keys::WORKERS, "-2")]))
                .is_err()
        );
    }

    #[test]
    fn test_validate_bounds() {
        assert!(Config::default().with_workers(0).validate().is_err());
        assert!(Config::default().with_workers(MAX_WORKERS + 1).validate().is_err());
        assert!(Config::default().with_workers(MAX_WORKERS).validate().is_ok());

        let mut config = Config::default();
        config.processing.top_n = 0;
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.logging.level = "loud".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_builders() {
        let config = Config::default()
            .with_strict_subject_check(false)
            .with_history_path("/var/results");

        assert_eq!(config.policy(), ClassificationPolicy::lenient());
        assert_eq!(config.processing.history_path, PathBuf::from("/var/results"));
    }
}

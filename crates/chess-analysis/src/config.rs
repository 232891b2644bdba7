//! Configuration file loading for live analysis.
//!
//! Every field has a default, so an empty file (or no file) yields a working
//! configuration. Command-line flags are applied on top by the binary.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

/// Errors that can occur when loading or parsing configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),
    /// Failed to parse the configuration file as valid TOML.
    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),
    /// Values parsed but do not make sense together.
    #[error("Invalid config: {0}")]
    Invalid(String),
}

/// Settings for the external engine process.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct EngineConfig {
    /// Path to the UCI engine executable. Defaults to "stockfish" in PATH.
    #[serde(default = "default_engine_path")]
    pub path: PathBuf,
    /// Extra command-line arguments for the engine.
    #[serde(default)]
    pub args: Vec<String>,
    /// Number of ranked lines requested (`MultiPV`).
    #[serde(default = "default_num_lines")]
    pub num_lines: usize,
    /// `go depth` for every search.
    #[serde(default = "default_search_depth")]
    pub search_depth: u32,
    /// Transposition table size in megabytes.
    #[serde(default = "default_hash_mb")]
    pub hash_mb: u32,
    /// Delay before restarting a crashed engine.
    #[serde(default = "default_recovery_delay_ms")]
    pub recovery_delay_ms: u64,
}

fn default_engine_path() -> PathBuf {
    PathBuf::from("stockfish")
}

fn default_num_lines() -> usize {
    3
}

fn default_search_depth() -> u32 {
    22
}

fn default_hash_mb() -> u32 {
    32
}

fn default_recovery_delay_ms() -> u64 {
    1000
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            path: default_engine_path(),
            args: Vec::new(),
            num_lines: default_num_lines(),
            search_depth: default_search_depth(),
            hash_mb: default_hash_mb(),
            recovery_delay_ms: default_recovery_delay_ms(),
        }
    }
}

impl EngineConfig {
    pub fn recovery_delay(&self) -> Duration {
        Duration::from_millis(self.recovery_delay_ms)
    }
}

/// Settings for move-quality classification.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct ClassificationConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// Depth both evaluations must reach before a move is labelled.
    #[serde(default = "default_min_depth")]
    pub min_depth: u32,
    /// Depth at which a label becomes final.
    #[serde(default = "default_lock_depth")]
    pub lock_depth: u32,
    /// Locked labels remembered for history navigation.
    #[serde(default = "default_classification_cache_size")]
    pub cache_size: usize,
}

fn default_true() -> bool {
    true
}

fn default_min_depth() -> u32 {
    12
}

fn default_lock_depth() -> u32 {
    18
}

fn default_classification_cache_size() -> usize {
    512
}

impl Default for ClassificationConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            min_depth: default_min_depth(),
            lock_depth: default_lock_depth(),
            cache_size: default_classification_cache_size(),
        }
    }
}

/// Top-level configuration.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct AnalysisConfig {
    #[serde(default)]
    pub engine: EngineConfig,
    #[serde(default)]
    pub classification: ClassificationConfig,
    /// Quiet period before a board change is acted on.
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,
    /// Positions kept by the evaluation cache.
    #[serde(default = "default_eval_cache_size")]
    pub eval_cache_size: usize,
    /// Optional JSON file of extra opening names.
    #[serde(default)]
    pub openings: Option<PathBuf>,
}

fn default_debounce_ms() -> u64 {
    100
}

fn default_eval_cache_size() -> usize {
    crate::cache::EVAL_CACHE_SIZE
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            engine: EngineConfig::default(),
            classification: ClassificationConfig::default(),
            debounce_ms: default_debounce_ms(),
            eval_cache_size: default_eval_cache_size(),
            openings: None,
        }
    }
}

impl AnalysisConfig {
    /// Loads and validates a TOML configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ReadError`] if the file cannot be read,
    /// [`ConfigError::ParseError`] if it is not valid TOML, or
    /// [`ConfigError::Invalid`] if the values are inconsistent.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads `path` if given, otherwise returns the defaults.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(p) => Self::load(p),
            None => Ok(Self::default()),
        }
    }

    /// Checks cross-field constraints.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.engine.num_lines == 0 {
            return Err(ConfigError::Invalid(
                "engine.num_lines must be at least 1".to_string(),
            ));
        }
        if self.engine.search_depth == 0 {
            return Err(ConfigError::Invalid(
                "engine.search_depth must be at least 1".to_string(),
            ));
        }
        if self.classification.lock_depth < self.classification.min_depth {
            return Err(ConfigError::Invalid(format!(
                "classification.lock_depth ({}) is below min_depth ({})",
                self.classification.lock_depth, self.classification.min_depth
            )));
        }
        if self.classification.enabled && self.engine.search_depth < self.classification.min_depth
        {
            return Err(ConfigError::Invalid(format!(
                "engine.search_depth ({}) is below classification.min_depth ({}); no move would be classified",
                self.engine.search_depth, self.classification.min_depth
            )));
        }
        Ok(())
    }

    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }
}

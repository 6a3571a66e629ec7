//! TOML Configuration File Support
//!
//! Startup settings for clockgrid surfaces, read from
//! `~/.config/clockgrid/clockgrid.toml`.
//!
//! # Configuration Priority
//!
//! Configuration values are loaded with the following priority (highest first):
//! 1. CLI arguments (applied by the caller through [`ConfigOverrides`])
//! 2. Environment variables
//! 3. TOML configuration file
//! 4. Default values
//!
//! # Example Configuration
//!
//! ```toml
//! [grid]
//! cols = 9
//!
//! [clock]
//! tick_ms = 500
//!
//! [clue]
//! path = "/home/me/puzzles/clue.txt"
//!
//! [[answers.prefilled]]
//! row = 0
//! col = 0
//! value = "16"
//! ```
//!
//! When both `rows` and `cols` are given, `cols` wins and the row count is
//! derived from it.

use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::answers::{default_prefilled, PrefilledCell, ANSWER_COLS, ANSWER_ROWS};
use crate::grid::GridDimensions;

// =============================================================================
// Error Types
// =============================================================================

/// Errors that can occur when loading configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read config file
    #[error("Failed to read config file at {path}: {source}")]
    ReadError {
        /// The path that was attempted
        path: PathBuf,
        /// The underlying IO error
        source: std::io::Error,
    },

    /// Failed to parse TOML
    #[error("Failed to parse TOML config: {0}")]
    ParseError(#[from] toml::de::Error),

    /// Invalid configuration value
    #[error("Invalid configuration: {0}")]
    ValidationError(String),
}

// =============================================================================
// Configuration Source Tracking
// =============================================================================

/// Tracks where a configuration value came from
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConfigSource {
    /// Value from command-line argument
    Cli,
    /// Value from environment variable
    Env,
    /// Value from TOML configuration file
    File,
    /// Default value
    Default,
}

impl std::fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Cli => write!(f, "CLI"),
            Self::Env => write!(f, "environment"),
            Self::File => write!(f, "config file"),
            Self::Default => write!(f, "default"),
        }
    }
}

// =============================================================================
// TOML Configuration Structures
// =============================================================================

/// Grid section of the TOML configuration
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GridToml {
    /// Initial row count
    pub rows: Option<usize>,

    /// Initial column count
    pub cols: Option<usize>,
}

/// Clock section of the TOML configuration
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ClockToml {
    /// Clock refresh interval in milliseconds
    pub tick_ms: Option<u64>,
}

/// Clue section of the TOML configuration
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ClueToml {
    /// File holding the clue text, replacing the built-in clue
    pub path: Option<PathBuf>,
}

/// Answers section of the TOML configuration
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AnswersToml {
    /// Locked cells, replacing the built-in ones
    pub prefilled: Option<Vec<PrefilledCell>>,
}

/// Top-level TOML configuration structure
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ClockgridToml {
    /// Grid configuration section
    pub grid: GridToml,

    /// Clock configuration section
    pub clock: ClockToml,

    /// Clue configuration section
    pub clue: ClueToml,

    /// Answers configuration section
    pub answers: AnswersToml,
}

// =============================================================================
// Main Configuration Struct
// =============================================================================

/// Resolved configuration for a clockgrid surface
///
/// Use [`load_config`] to load configuration with proper priority handling.
#[derive(Clone, Debug)]
pub struct ClockgridConfig {
    /// Initial grid dimensions for the flexer view
    pub dimensions: GridDimensions,

    /// How often the clock view samples the time
    pub tick: Duration,

    /// Clue file, `None` for the built-in clue
    pub clue_path: Option<PathBuf>,

    /// Locked answer cells
    pub prefilled: Vec<PrefilledCell>,

    /// Path to the config file that was loaded (if any)
    pub config_file_path: Option<PathBuf>,

    /// Source of configuration values
    source: ConfigSource,
}

impl Default for ClockgridConfig {
    fn default() -> Self {
        Self {
            dimensions: GridDimensions::ORIGINAL,
            tick: Duration::from_secs(1),
            clue_path: None,
            prefilled: default_prefilled(),
            config_file_path: None,
            source: ConfigSource::Default,
        }
    }
}

impl ClockgridConfig {
    /// Create a new configuration with default values
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the primary source of this configuration
    #[must_use]
    pub fn source(&self) -> ConfigSource {
        self.source
    }

    /// Set the configuration source
    pub fn set_source(&mut self, source: ConfigSource) {
        self.source = source;
    }

    /// Read the clue text, falling back to the built-in clue
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ReadError`] if a configured clue file cannot be read.
    pub fn clue_text(&self) -> Result<String, ConfigError> {
        match &self.clue_path {
            Some(path) => std::fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
                path: path.clone(),
                source: e,
            }),
            None => Ok(crate::clue::CLUE_TEXT.to_string()),
        }
    }
}

// =============================================================================
// Configuration Loading
// =============================================================================

/// Get the default configuration file path
///
/// Returns `$XDG_CONFIG_HOME/clockgrid/clockgrid.toml` or
/// `~/.config/clockgrid/clockgrid.toml` if `XDG_CONFIG_HOME` is not set.
#[must_use]
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("clockgrid").join("clockgrid.toml"))
}

/// Load configuration from all sources with proper priority
///
/// # Errors
///
/// Returns an error if the config file exists but cannot be parsed, or if
/// a value fails validation. A missing config file is not an error.
pub fn load_config() -> Result<ClockgridConfig, ConfigError> {
    load_config_from_path(default_config_path())
}

/// Load configuration from a specific path
///
/// # Arguments
///
/// * `path` - Optional path to the configuration file. If `None`, only defaults
///   and environment variables are used.
///
/// # Errors
///
/// Returns an error if the specified config file cannot be read or parsed,
/// or if a value fails validation.
pub fn load_config_from_path(path: Option<PathBuf>) -> Result<ClockgridConfig, ConfigError> {
    let mut config = ClockgridConfig::default();

    if let Some(ref config_path) = path {
        if config_path.exists() {
            let toml_content =
                std::fs::read_to_string(config_path).map_err(|e| ConfigError::ReadError {
                    path: config_path.clone(),
                    source: e,
                })?;

            let toml_config: ClockgridToml = toml::from_str(&toml_content)?;
            apply_toml_config(&mut config, &toml_config);
            config.config_file_path = Some(config_path.clone());
            config.source = ConfigSource::File;

            tracing::info!(
                path = %config_path.display(),
                "Loaded configuration from file"
            );
        } else {
            tracing::debug!(
                path = %config_path.display(),
                "Config file not found, using defaults"
            );
        }
    }

    apply_env_config(&mut config);
    validate(&config)?;

    Ok(config)
}

/// Apply TOML configuration values to the config struct
fn apply_toml_config(config: &mut ClockgridConfig, toml: &ClockgridToml) {
    if let Some(rows) = toml.grid.rows {
        config.dimensions.set_rows(rows);
    }
    if let Some(cols) = toml.grid.cols {
        config.dimensions.set_cols(cols);
    }
    if let Some(ms) = toml.clock.tick_ms {
        config.tick = Duration::from_millis(ms);
    }
    if toml.clue.path.is_some() {
        config.clue_path = toml.clue.path.clone();
    }
    if let Some(ref prefilled) = toml.answers.prefilled {
        config.prefilled = prefilled.clone();
    }
}

/// Apply environment variable overrides to the config
fn apply_env_config(config: &mut ClockgridConfig) {
    if let Ok(rows) = std::env::var("CLOCKGRID_ROWS") {
        if let Ok(n) = rows.parse::<usize>() {
            config.dimensions.set_rows(n);
            config.source = ConfigSource::Env;
        }
    }
    if let Ok(cols) = std::env::var("CLOCKGRID_COLS") {
        if let Ok(n) = cols.parse::<usize>() {
            config.dimensions.set_cols(n);
            config.source = ConfigSource::Env;
        }
    }
    if let Ok(tick) = std::env::var("CLOCKGRID_TICK_MS") {
        if let Ok(ms) = tick.parse::<u64>() {
            config.tick = Duration::from_millis(ms);
            config.source = ConfigSource::Env;
        }
    }
    if let Ok(path) = std::env::var("CLOCKGRID_CLUE_PATH") {
        config.clue_path = Some(PathBuf::from(path));
        config.source = ConfigSource::Env;
    }
}

fn validate(config: &ClockgridConfig) -> Result<(), ConfigError> {
    if config.tick.is_zero() {
        return Err(ConfigError::ValidationError(
            "clock tick must be greater than zero".to_string(),
        ));
    }
    if let Some(cell) = config
        .prefilled
        .iter()
        .find(|c| c.row >= ANSWER_ROWS || c.col >= ANSWER_COLS)
    {
        return Err(ConfigError::ValidationError(format!(
            "prefilled cell ({}, {}) is outside the {ANSWER_ROWS}x{ANSWER_COLS} answer sheet",
            cell.row, cell.col
        )));
    }
    Ok(())
}

// =============================================================================
// CLI Override Support
// =============================================================================

/// Builder for applying CLI overrides to configuration
///
/// Use this after [`load_config`] to apply command-line argument overrides.
#[derive(Clone, Debug, Default)]
pub struct ConfigOverrides {
    /// Row count override
    pub rows: Option<usize>,

    /// Column count override (wins over `rows`)
    pub cols: Option<usize>,

    /// Clock tick override (milliseconds)
    pub tick_ms: Option<u64>,

    /// Clue file override
    pub clue_path: Option<PathBuf>,
}

impl ConfigOverrides {
    /// Create a new empty set of overrides
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set row count override
    #[must_use]
    pub fn with_rows(mut self, rows: usize) -> Self {
        self.rows = Some(rows);
        self
    }

    /// Set column count override
    #[must_use]
    pub fn with_cols(mut self, cols: usize) -> Self {
        self.cols = Some(cols);
        self
    }

    /// Set clock tick override
    #[must_use]
    pub fn with_tick_ms(mut self, ms: u64) -> Self {
        self.tick_ms = Some(ms);
        self
    }

    /// Set clue file override
    #[must_use]
    pub fn with_clue_path(mut self, path: PathBuf) -> Self {
        self.clue_path = Some(path);
        self
    }

    /// Apply overrides to a configuration
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ValidationError`] if the result is invalid.
    pub fn apply(&self, config: &mut ClockgridConfig) -> Result<(), ConfigError> {
        if self.rows.is_some()
            || self.cols.is_some()
            || self.tick_ms.is_some()
            || self.clue_path.is_some()
        {
            config.source = ConfigSource::Cli;
        }

        if let Some(rows) = self.rows {
            config.dimensions.set_rows(rows);
        }
        if let Some(cols) = self.cols {
            config.dimensions.set_cols(cols);
        }
        if let Some(ms) = self.tick_ms {
            config.tick = Duration::from_millis(ms);
        }
        if let Some(ref path) = self.clue_path {
            config.clue_path = Some(path.clone());
        }

        validate(config)
    }
}

// =============================================================================
// Tests
// =============================================================================

//! Configuration file loading with precedence handling.
//!
//! Precedence (lowest to highest): Defaults → Config File → Env Vars → CLI Args.

use crate::model::{check_page_size, SortDirection, DEFAULT_PAGE_SIZE, DEFAULT_PAGE_SIZE_OPTIONS};
use serde::Deserialize;
use std::path::PathBuf;
use thiserror::Error;
use tracing::warn;

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV_VAR: &str = "TABULA_CONFIG";

/// Environment variable overriding the default page size.
pub const PAGE_SIZE_ENV_VAR: &str = "TABULA_PAGE_SIZE";

/// Terminal width below which the narrow pagination window is used.
pub const DEFAULT_NARROW_WIDTH: u16 = 60;

/// Default column width in terminal cells.
pub const DEFAULT_COLUMN_WIDTH: u32 = 16;

/// Errors that can occur during config loading.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Config file path contains invalid UTF-8 or cannot be resolved.
    #[error("Invalid config path: {0}")]
    InvalidPath(String),

    /// Failed to read config file (file may not exist or have permission issues).
    #[error("Failed to read config file at {path}: {reason}")]
    ReadError {
        /// Path that failed to read.
        path: PathBuf,
        /// Reason for failure.
        reason: String,
    },

    /// Config file contains invalid TOML syntax.
    #[error("Invalid TOML in {path}: {reason}")]
    ParseError {
        /// Path with invalid TOML.
        path: PathBuf,
        /// Parse error details.
        reason: String,
    },

    /// A setting parsed but is out of range or malformed.
    #[error("Invalid value for {field}: {reason}")]
    InvalidValue {
        /// Setting name.
        field: &'static str,
        /// What is wrong with it.
        reason: String,
    },
}

/// TOML configuration file structure.
///
/// All fields are optional - if not specified, hardcoded defaults are used.
/// Corresponds to `~/.config/tabula/config.toml`.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// Rows per page on startup.
    #[serde(default)]
    pub page_size: Option<usize>,

    /// Page sizes offered by the page-size selector.
    #[serde(default)]
    pub page_size_options: Option<Vec<usize>>,

    /// Columns to show, in order. Empty or absent derives them from the data.
    #[serde(default)]
    pub columns: Option<Vec<String>>,

    /// Columns pinned to the left edge on startup.
    #[serde(default)]
    pub pin_left: Option<Vec<String>>,

    /// Columns pinned to the right edge on startup.
    #[serde(default)]
    pub pin_right: Option<Vec<String>>,

    /// Whether column widths may be changed.
    #[serde(default)]
    pub resizable: Option<bool>,

    /// Terminal width below which the narrow pagination window is used.
    #[serde(default)]
    pub narrow_width: Option<u16>,

    /// Record field providing stable row keys.
    #[serde(default)]
    pub key_field: Option<String>,

    /// Initial width of every column, in cells.
    #[serde(default)]
    pub column_width: Option<u32>,

    /// Artificial delay before each page is answered, in milliseconds.
    #[serde(default)]
    pub latency_ms: Option<u64>,

    /// Path to log file for tracing output.
    #[serde(default)]
    pub log_file_path: Option<PathBuf>,
}

/// Initial sort requested as `column` or `column:asc|desc`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortSpec {
    /// Column id to sort by.
    pub column: String,
    /// Initial direction; `asc` when omitted.
    pub direction: SortDirection,
}

impl std::str::FromStr for SortSpec {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = |reason: String| ConfigError::InvalidValue {
            field: "sort",
            reason,
        };
        let (column, direction) = match s.split_once(':') {
            Some((column, "asc")) => (column, SortDirection::Asc),
            Some((column, "desc")) => (column, SortDirection::Desc),
            Some((_, other)) => {
                return Err(invalid(format!(
                    "direction must be 'asc' or 'desc', got '{}'",
                    other
                )))
            }
            None => (s, SortDirection::Asc),
        };
        let column = column.trim();
        if column.is_empty() {
            return Err(invalid("column name is empty".to_string()));
        }
        Ok(Self {
            column: column.to_string(),
            direction,
        })
    }
}

/// Resolved configuration after applying precedence rules.
///
/// Created by merging defaults, config file, env vars, and CLI args.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    /// Rows per page.
    pub page_size: usize,
    /// Sizes the page-size control cycles through.
    pub page_size_options: Vec<usize>,
    /// Empty means every field of the first record.
    pub columns: Vec<String>,
    /// Columns pinned to the left edge, outermost first.
    pub pin_left: Vec<String>,
    /// Columns pinned to the right edge.
    pub pin_right: Vec<String>,
    /// Sort applied before the first fetch.
    pub sort: Option<SortSpec>,
    /// Columns can be resized by dragging or keys.
    pub resizable: bool,
    /// Terminal width below which the narrow pagination window is used.
    pub narrow_width: u16,
    /// Record field used as the stable row key.
    pub key_field: Option<String>,
    /// Default column width in cells.
    pub column_width: u32,
    /// Artificial delay before each page is answered.
    pub latency_ms: u64,
    /// Path to log file for tracing output.
    pub log_file_path: PathBuf,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            page_size_options: DEFAULT_PAGE_SIZE_OPTIONS.to_vec(),
            columns: Vec::new(),
            pin_left: Vec::new(),
            pin_right: Vec::new(),
            sort: None,
            resizable: true,
            narrow_width: DEFAULT_NARROW_WIDTH,
            key_field: Some("id".to_string()),
            column_width: DEFAULT_COLUMN_WIDTH,
            latency_ms: 0,
            log_file_path: default_log_path(),
        }
    }
}

/// Resolve default log file path.
///
/// Returns `~/.local/state/tabula/tabula.log` on Unix-like systems,
/// or appropriate platform path on other systems.
///
/// If state directory cannot be determined, falls back to current directory.
pub fn default_log_path() -> PathBuf {
    if let Some(state_dir) = dirs::state_dir() {
        state_dir.join("tabula").join("tabula.log")
    } else {
        PathBuf::from("tabula.log")
    }
}

/// Load configuration file from a specific path.
///
/// Returns `Ok(None)` if file doesn't exist (not an error - use defaults).
///
/// # Errors
///
/// Returns error if file exists but has read or parse errors.
pub fn load_config_file(path: impl Into<PathBuf>) -> Result<Option<ConfigFile>, ConfigError> {
    let path = path.into();

    if !path.exists() {
        return Ok(None);
    }

    let contents = std::fs::read_to_string(&path).map_err(|e| ConfigError::ReadError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    let config: ConfigFile = toml::from_str(&contents).map_err(|e| ConfigError::ParseError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    Ok(Some(config))
}

/// Resolve default config file path.
///
/// Returns `~/.config/tabula/config.toml` on Unix, appropriate path on other platforms.
/// Returns `None` if home directory cannot be determined.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("tabula").join("config.toml"))
}

/// Load configuration with precedence handling.
///
/// Precedence (highest to lowest):
/// 1. Explicit `config_path` argument (CLI `--config`)
/// 2. `TABULA_CONFIG` environment variable
/// 3. Default path `~/.config/tabula/config.toml`
///
/// Missing config files are NOT errors - defaults are used.
///
/// # Errors
///
/// Returns error only if a config file exists but cannot be read or parsed.
pub fn load_config_with_precedence(
    config_path: Option<PathBuf>,
) -> Result<Option<ConfigFile>, ConfigError> {
    if let Some(path) = config_path {
        return load_config_file(path);
    }

    if let Ok(env_path) = std::env::var(CONFIG_ENV_VAR) {
        if env_path.trim().is_empty() {
            return Err(ConfigError::InvalidPath(env_path));
        }
        return load_config_file(PathBuf::from(env_path));
    }

    if let Some(default_path) = default_config_path() {
        return load_config_file(default_path);
    }

    Ok(None)
}

/// Merge config file into defaults to create resolved config.
///
/// For each field in `ConfigFile`, if `Some(value)`, use it; otherwise use default.
pub fn merge_config(config_file: Option<ConfigFile>) -> ResolvedConfig {
    let defaults = ResolvedConfig::default();

    let Some(config) = config_file else {
        return defaults;
    };

    ResolvedConfig {
        page_size: config.page_size.unwrap_or(defaults.page_size),
        page_size_options: config
            .page_size_options
            .unwrap_or(defaults.page_size_options),
        columns: config.columns.unwrap_or(defaults.columns),
        pin_left: config.pin_left.unwrap_or(defaults.pin_left),
        pin_right: config.pin_right.unwrap_or(defaults.pin_right),
        sort: defaults.sort,
        resizable: config.resizable.unwrap_or(defaults.resizable),
        narrow_width: config.narrow_width.unwrap_or(defaults.narrow_width),
        key_field: config.key_field.or(defaults.key_field),
        column_width: config.column_width.unwrap_or(defaults.column_width),
        latency_ms: config.latency_ms.unwrap_or(defaults.latency_ms),
        log_file_path: config.log_file_path.unwrap_or(defaults.log_file_path),
    }
}

/// Apply environment variable overrides to resolved config.
///
/// Checks for:
/// - `TABULA_PAGE_SIZE`: Override the startup page size
///
/// # Errors
///
/// `ConfigError::InvalidValue` when `TABULA_PAGE_SIZE` is not a number.
pub fn apply_env_overrides(mut config: ResolvedConfig) -> Result<ResolvedConfig, ConfigError> {
    if let Ok(raw) = std::env::var(PAGE_SIZE_ENV_VAR) {
        config.page_size = raw.trim().parse().map_err(|_| ConfigError::InvalidValue {
            field: "TABULA_PAGE_SIZE",
            reason: format!("'{}' is not a page size", raw),
        })?;
    }
    Ok(config)
}

/// Overrides taken from command-line flags; `None`/empty means "not given".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CliOverrides {
    /// `--page-size`.
    pub page_size: Option<usize>,
    /// `--columns`.
    pub columns: Vec<String>,
    /// `--pin-left`.
    pub pin_left: Vec<String>,
    /// `--pin-right`.
    pub pin_right: Vec<String>,
    /// `--sort`.
    pub sort: Option<SortSpec>,
}

/// Apply CLI argument overrides to resolved config.
///
/// CLI args have the highest precedence and override all other sources.
/// Only applies overrides for flags that were explicitly set by the user.
pub fn apply_cli_overrides(mut config: ResolvedConfig, cli: CliOverrides) -> ResolvedConfig {
    if let Some(page_size) = cli.page_size {
        config.page_size = page_size;
    }
    if !cli.columns.is_empty() {
        config.columns = cli.columns;
    }
    if !cli.pin_left.is_empty() {
        config.pin_left = cli.pin_left;
    }
    if !cli.pin_right.is_empty() {
        config.pin_right = cli.pin_right;
    }
    if cli.sort.is_some() {
        config.sort = cli.sort;
    }
    config
}

/// Check ranges once every source has been applied.
///
/// A page size missing from `page_size_options` is added to them so the
/// selector can show it.
///
/// # Errors
///
/// `ConfigError::InvalidValue` for zero or oversized page sizes, an empty
/// option list, or a zero column width.
pub fn validate(mut config: ResolvedConfig) -> Result<ResolvedConfig, ConfigError> {
    let invalid = |field: &'static str, reason: String| ConfigError::InvalidValue { field, reason };

    check_page_size(config.page_size).map_err(|e| invalid("page_size", e.to_string()))?;
    if config.page_size_options.is_empty() {
        return Err(invalid("page_size_options", "must not be empty".to_string()));
    }
    for option in &config.page_size_options {
        check_page_size(*option).map_err(|e| invalid("page_size_options", e.to_string()))?;
    }
    if config.column_width == 0 {
        return Err(invalid("column_width", "must be at least 1".to_string()));
    }

    if !config.page_size_options.contains(&config.page_size) {
        warn!(
            page_size = config.page_size,
            "Page size not among page_size_options; adding it"
        );
        config.page_size_options.push(config.page_size);
    }
    config.page_size_options.sort_unstable();
    config.page_size_options.dedup();
    Ok(config)
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;

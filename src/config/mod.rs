//! Configuration module.
//!
//! - `loader`: TOML config file, env vars and CLI overrides resolved into
//!   one `ResolvedConfig`
//! - `keybindings`: default key map for the terminal host

pub mod keybindings;
pub mod loader;

pub use keybindings::KeyBindings;
pub use loader::{
    apply_cli_overrides, apply_env_overrides, default_config_path, default_log_path,
    load_config_file, load_config_with_precedence, merge_config, validate, CliOverrides,
    ConfigError, ConfigFile, ResolvedConfig, SortSpec,
};

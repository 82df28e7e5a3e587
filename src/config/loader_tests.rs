//! Tests for configuration file loading.

use super::*;
use serial_test::serial;
use std::env;
use std::fs;

#[test]
fn default_config_path_contains_tabula_config_toml() {
    if let Some(path) = default_config_path() {
        let path_str = path.to_string_lossy();
        assert!(
            path_str.contains("tabula") && path_str.ends_with("config.toml"),
            "Path should contain 'tabula' and end with 'config.toml', got: {}",
            path_str
        );
    }
}

#[test]
fn default_log_path_ends_with_tabula_log() {
    let path = default_log_path();
    assert!(
        path.to_string_lossy().ends_with("tabula.log"),
        "Default log path should end with 'tabula.log', got: {:?}",
        path
    );
}

#[test]
fn load_config_file_returns_ok_none_for_missing_file() {
    let result = load_config_file("/nonexistent/path/to/config.toml");
    assert_eq!(
        result,
        Ok(None),
        "Missing config file should return Ok(None), not an error"
    );
}

#[test]
fn load_config_file_parses_valid_toml() {
    let config_path = env::temp_dir().join("tabula_test_config_valid.toml");
    let toml_content = r#"
page_size = 25
page_size_options = [25, 50]
pin_left = ["id"]
pin_right = ["status"]
resizable = false
narrow_width = 72
key_field = "uuid"
column_width = 12
latency_ms = 150
"#;
    fs::write(&config_path, toml_content).expect("Failed to write test config");

    let result = load_config_file(&config_path);
    let _ = fs::remove_file(&config_path);

    let config = result
        .expect("Should successfully parse valid TOML")
        .expect("Config should be Some for existing file");
    assert_eq!(config.page_size, Some(25));
    assert_eq!(config.page_size_options, Some(vec![25, 50]));
    assert_eq!(config.pin_left, Some(vec!["id".to_string()]));
    assert_eq!(config.pin_right, Some(vec!["status".to_string()]));
    assert_eq!(config.resizable, Some(false));
    assert_eq!(config.narrow_width, Some(72));
    assert_eq!(config.key_field.as_deref(), Some("uuid"));
    assert_eq!(config.column_width, Some(12));
    assert_eq!(config.latency_ms, Some(150));
}

#[test]
fn load_config_file_returns_error_for_invalid_toml() {
    let config_path = env::temp_dir().join("tabula_test_config_invalid.toml");
    fs::write(&config_path, "page_size = [not toml").expect("Failed to write test config");

    let result = load_config_file(&config_path);
    let _ = fs::remove_file(&config_path);

    assert!(
        matches!(result, Err(ConfigError::ParseError { .. })),
        "Invalid TOML should produce ParseError, got: {:?}",
        result
    );
}

#[test]
fn config_file_rejects_unknown_fields() {
    let result: Result<ConfigFile, _> = toml::from_str("theme = \"dark\"");
    assert!(result.is_err(), "Unknown fields should be rejected");
}

#[test]
fn merge_config_uses_defaults_when_none() {
    assert_eq!(merge_config(None), ResolvedConfig::default());
}

#[test]
fn merge_config_uses_defaults_for_none_fields() {
    let resolved = merge_config(Some(ConfigFile {
        page_size: Some(50),
        ..ConfigFile::default()
    }));
    let defaults = ResolvedConfig::default();

    assert_eq!(resolved.page_size, 50);
    assert_eq!(resolved.page_size_options, defaults.page_size_options);
    assert_eq!(resolved.narrow_width, defaults.narrow_width);
    assert_eq!(resolved.key_field, defaults.key_field);
    assert_eq!(resolved.log_file_path, defaults.log_file_path);
}

#[test]
fn resolved_config_default_has_expected_values() {
    let config = ResolvedConfig::default();
    assert_eq!(config.page_size, 10);
    assert_eq!(config.page_size_options, vec![10, 25, 50, 100]);
    assert!(config.resizable);
    assert_eq!(config.narrow_width, DEFAULT_NARROW_WIDTH);
    assert!(config.columns.is_empty());
}

/// RAII guard to ensure environment variable cleanup even under test parallelism.
/// Removes the var on drop, preventing test pollution in parallel execution.
struct EnvGuard(&'static str);

impl EnvGuard {
    fn new(name: &'static str) -> Self {
        env::remove_var(name);
        EnvGuard(name)
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        env::remove_var(self.0);
    }
}

#[test]
#[serial(tabula_page_size)]
fn apply_env_overrides_respects_tabula_page_size() {
    let _guard = EnvGuard::new(PAGE_SIZE_ENV_VAR);
    env::set_var(PAGE_SIZE_ENV_VAR, "50");

    let result = apply_env_overrides(ResolvedConfig::default()).expect("valid number");

    assert_eq!(result.page_size, 50);
}

#[test]
#[serial(tabula_page_size)]
fn apply_env_overrides_rejects_non_numeric_page_size() {
    let _guard = EnvGuard::new(PAGE_SIZE_ENV_VAR);
    env::set_var(PAGE_SIZE_ENV_VAR, "lots");

    let result = apply_env_overrides(ResolvedConfig::default());

    assert!(matches!(
        result,
        Err(ConfigError::InvalidValue {
            field: "TABULA_PAGE_SIZE",
            ..
        })
    ));
}

#[test]
#[serial(tabula_page_size)]
fn apply_env_overrides_no_change_when_env_var_not_set() {
    let _guard = EnvGuard::new(PAGE_SIZE_ENV_VAR);
    let base = ResolvedConfig::default();
    assert_eq!(apply_env_overrides(base.clone()), Ok(base));
}

#[test]
#[serial(tabula_config)]
fn load_config_with_precedence_prefers_explicit_path() {
    let _guard = EnvGuard::new(CONFIG_ENV_VAR);
    let explicit = env::temp_dir().join("tabula_precedence_explicit.toml");
    let from_env = env::temp_dir().join("tabula_precedence_env.toml");
    fs::write(&explicit, "page_size = 25").expect("write explicit");
    fs::write(&from_env, "page_size = 50").expect("write env");
    env::set_var(CONFIG_ENV_VAR, &from_env);

    let result = load_config_with_precedence(Some(explicit.clone()));
    let _ = fs::remove_file(&explicit);
    let _ = fs::remove_file(&from_env);

    let config = result.expect("parses").expect("exists");
    assert_eq!(config.page_size, Some(25));
}

#[test]
#[serial(tabula_config)]
fn load_config_with_precedence_uses_env_var_when_no_explicit_path() {
    let _guard = EnvGuard::new(CONFIG_ENV_VAR);
    let from_env = env::temp_dir().join("tabula_precedence_env_only.toml");
    fs::write(&from_env, "page_size = 50").expect("write env");
    env::set_var(CONFIG_ENV_VAR, &from_env);

    let result = load_config_with_precedence(None);
    let _ = fs::remove_file(&from_env);

    let config = result.expect("parses").expect("exists");
    assert_eq!(config.page_size, Some(50));
}

#[test]
#[serial(tabula_config)]
fn load_config_with_precedence_rejects_blank_env_path() {
    let _guard = EnvGuard::new(CONFIG_ENV_VAR);
    env::set_var(CONFIG_ENV_VAR, "  ");

    let result = load_config_with_precedence(None);

    assert!(matches!(result, Err(ConfigError::InvalidPath(_))));
}

#[test]
fn apply_cli_overrides_only_touches_given_flags() {
    let base = ResolvedConfig {
        pin_left: vec!["id".to_string()],
        ..ResolvedConfig::default()
    };
    let result = apply_cli_overrides(
        base.clone(),
        CliOverrides {
            page_size: Some(100),
            pin_right: vec!["age".to_string()],
            ..CliOverrides::default()
        },
    );

    assert_eq!(result.page_size, 100);
    assert_eq!(result.pin_right, vec!["age".to_string()]);
    assert_eq!(result.pin_left, base.pin_left);
    assert_eq!(result.columns, base.columns);
}

#[test]
fn apply_cli_overrides_no_overrides() {
    let base = ResolvedConfig::default();
    assert_eq!(apply_cli_overrides(base.clone(), CliOverrides::default()), base);
}

#[test]
#[serial(tabula_page_size)]
fn precedence_chain_full_defaults_to_cli() {
    let _guard = EnvGuard::new(PAGE_SIZE_ENV_VAR);
    let file = ConfigFile {
        page_size: Some(25),
        narrow_width: Some(80),
        ..ConfigFile::default()
    };
    env::set_var(PAGE_SIZE_ENV_VAR, "50");

    let merged = merge_config(Some(file));
    let with_env = apply_env_overrides(merged).expect("valid env");
    let resolved = apply_cli_overrides(
        with_env,
        CliOverrides {
            page_size: Some(100),
            ..CliOverrides::default()
        },
    );

    assert_eq!(resolved.page_size, 100, "CLI wins over env and file");
    assert_eq!(resolved.narrow_width, 80, "File wins over defaults");
}

// ===== validate =====

#[test]
fn validate_adds_missing_page_size_to_options() {
    let config = ResolvedConfig {
        page_size: 30,
        ..ResolvedConfig::default()
    };
    let validated = validate(config).expect("30 is a valid size");
    assert_eq!(validated.page_size_options, vec![10, 25, 30, 50, 100]);
}

#[test]
fn validate_rejects_zero_page_size() {
    let config = ResolvedConfig {
        page_size: 0,
        ..ResolvedConfig::default()
    };
    assert!(matches!(
        validate(config),
        Err(ConfigError::InvalidValue {
            field: "page_size",
            ..
        })
    ));
}

#[test]
fn validate_rejects_oversized_option() {
    let config = ResolvedConfig {
        page_size_options: vec![10, 1_000_000],
        ..ResolvedConfig::default()
    };
    assert!(validate(config).is_err());
}

#[test]
fn validate_rejects_empty_options() {
    let config = ResolvedConfig {
        page_size_options: Vec::new(),
        ..ResolvedConfig::default()
    };
    assert!(validate(config).is_err());
}

// ===== SortSpec =====

#[test]
fn sort_spec_defaults_to_ascending() {
    let spec: SortSpec = "name".parse().expect("valid spec");
    assert_eq!(spec.column, "name");
    assert_eq!(spec.direction, SortDirection::Asc);
}

#[test]
fn sort_spec_parses_direction() {
    let spec: SortSpec = "age:desc".parse().expect("valid spec");
    assert_eq!(spec.direction, SortDirection::Desc);
}

#[test]
fn sort_spec_rejects_bad_direction_and_empty_column() {
    assert!("age:sideways".parse::<SortSpec>().is_err());
    assert!(":asc".parse::<SortSpec>().is_err());
}

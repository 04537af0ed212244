//! Configuration resolution tests
//!
//! Tests that manipulate EE_* environment variables are marked #[serial]
//! so they never race each other.

use ee_common::config::{
    CliOverrides, DashboardConfig, TomlConfig, DEFAULT_BIND, ENV_BIND, ENV_DATABASE, ENV_MODEL,
};
use serial_test::serial;
use std::env;
use std::path::PathBuf;

fn clear_env() {
    env::remove_var(ENV_DATABASE);
    env::remove_var(ENV_MODEL);
    env::remove_var(ENV_BIND);
}

#[test]
#[serial]
fn test_no_overrides_uses_defaults() {
    clear_env();

    let config = DashboardConfig::resolve(CliOverrides::default(), TomlConfig::default());

    assert_eq!(config.bind_addr, DEFAULT_BIND);
    assert!(config.database_path.ends_with("employee_events.db"));
    assert!(config.model_path.ends_with("model.json"));
    assert_eq!(config.database_path.parent(), config.model_path.parent());
}

#[test]
#[serial]
fn test_env_beats_toml() {
    clear_env();
    env::set_var(ENV_DATABASE, "/env/events.db");
    env::set_var(ENV_BIND, "0.0.0.0:7000");

    let toml = TomlConfig {
        database: Some(PathBuf::from("/toml/events.db")),
        model: Some(PathBuf::from("/toml/model.json")),
        bind: Some("127.0.0.1:9999".to_string()),
    };
    let config = DashboardConfig::resolve(CliOverrides::default(), toml);

    assert_eq!(config.database_path, PathBuf::from("/env/events.db"));
    assert_eq!(config.bind_addr, "0.0.0.0:7000");
    // No env override for the model, so TOML wins
    assert_eq!(config.model_path, PathBuf::from("/toml/model.json"));

    clear_env();
}

#[test]
#[serial]
fn test_cli_beats_env() {
    clear_env();
    env::set_var(ENV_MODEL, "/env/model.json");

    let cli = CliOverrides {
        model: Some(PathBuf::from("/cli/model.json")),
        ..Default::default()
    };
    let config = DashboardConfig::resolve(cli, TomlConfig::default());
    assert_eq!(config.model_path, PathBuf::from("/cli/model.json"));

    clear_env();
}

#[test]
#[serial]
fn test_blank_env_is_ignored() {
    clear_env();
    env::set_var(ENV_DATABASE, "   ");

    let toml = TomlConfig {
        database: Some(PathBuf::from("/toml/events.db")),
        ..Default::default()
    };
    let config = DashboardConfig::resolve(CliOverrides::default(), toml);
    assert_eq!(config.database_path, PathBuf::from("/toml/events.db"));

    clear_env();
}

#[test]
fn test_toml_file_load() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        "database = \"/data/employee_events.db\"\nbind = \"127.0.0.1:8000\"\n",
    )
    .unwrap();

    let config = TomlConfig::load(&path).unwrap();
    assert_eq!(config.database, Some(PathBuf::from("/data/employee_events.db")));
    assert_eq!(config.bind.as_deref(), Some("127.0.0.1:8000"));
    assert!(config.model.is_none());
}

#[test]
fn test_malformed_toml_is_ignored() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "database = [unterminated").unwrap();

    assert!(TomlConfig::load(&path).is_err());

    let config = TomlConfig::load_or_default(Some(&path));
    assert!(config.database.is_none());
}

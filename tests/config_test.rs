//! Integration tests for Settings layered loading.
//!
//! Precedence (lowest to highest): defaults, config file, TREESCRIPT_FILES_* env vars.
//!
//! Environment variables are process-global, so every case that touches them
//! lives in a single test to keep the harness's threads from racing.

use std::env;
use std::fs;

use tempfile::TempDir;

use treescript_files::config::Settings;
use treescript_files::ApplicationError;

const ENV_VARS: [&str; 3] = [
    "TREESCRIPT_FILES_SEPARATOR",
    "TREESCRIPT_FILES_PARENT_PATH",
    "TREESCRIPT_FILES_FILE_SIZE_LIMIT",
];

fn clear_env() {
    for var in ENV_VARS {
        env::remove_var(var);
    }
}

#[test]
fn given_layers_when_load_then_env_overrides_file_overrides_defaults() {
    clear_env();
    let dir = TempDir::new().unwrap();
    let config_path = dir.path().join("settings.toml");
    fs::write(
        &config_path,
        "separator = \",\"\nparent_path = \"module\"\nfile_size_limit = 512\n",
    )
    .unwrap();

    // File layer
    let settings = Settings::load(Some(config_path.as_path())).expect("load settings");
    assert_eq!(settings.separator, ",");
    assert_eq!(settings.parent_path.as_deref(), Some("module"));
    assert_eq!(settings.file_size_limit, 512);

    // Env layer wins over the file
    env::set_var("TREESCRIPT_FILES_SEPARATOR", " ");
    env::set_var("TREESCRIPT_FILES_FILE_SIZE_LIMIT", "1024");
    let settings = Settings::load(Some(config_path.as_path())).expect("load settings");
    assert_eq!(settings.separator, " ");
    assert_eq!(settings.parent_path.as_deref(), Some("module"));
    assert_eq!(settings.file_size_limit, 1024);

    // Invalid numeric override is a config error
    env::set_var("TREESCRIPT_FILES_FILE_SIZE_LIMIT", "lots");
    let result = Settings::load(Some(config_path.as_path()));
    assert!(matches!(result, Err(ApplicationError::Config { .. })));

    // Parent path is shell-expanded
    clear_env();
    env::set_var("TREESCRIPT_FILES_PARENT_PATH", "$TREESCRIPT_FILES_TEST_ROOT/out");
    env::set_var("TREESCRIPT_FILES_TEST_ROOT", "/tmp/project");
    let settings = Settings::load(Some(config_path.as_path())).expect("load settings");
    assert_eq!(settings.parent_path.as_deref(), Some("/tmp/project/out"));

    clear_env();
    env::remove_var("TREESCRIPT_FILES_TEST_ROOT");
}

#[test]
fn given_partial_config_file_when_load_from_then_keeps_defaults() {
    let dir = TempDir::new().unwrap();
    let config_path = dir.path().join("settings.toml");
    fs::write(&config_path, "parent_path = \"src\"\n").unwrap();

    let settings = Settings::load_from(&config_path).expect("load settings");

    assert_eq!(settings.separator, "\n");
    assert_eq!(settings.parent_path.as_deref(), Some("src"));
    assert_eq!(settings.file_size_limit, Settings::default().file_size_limit);
}

#[test]
fn given_unknown_keys_when_load_from_then_ignored() {
    let dir = TempDir::new().unwrap();
    let config_path = dir.path().join("settings.toml");
    fs::write(&config_path, "color = \"always\"\nseparator = \"\\t\"\n").unwrap();

    let settings = Settings::load_from(&config_path).expect("load settings");

    assert_eq!(settings.separator, "\t");
}

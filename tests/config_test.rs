//! Configuration loading, saving, and environment overrides.
//!
//! These tests mutate process environment variables, so they run
//! serially.

use serial_test::serial;
use tempfile::TempDir;
use triage::config::{API_URL_ENV, CONFIG_DIR_ENV, Config};

fn with_config_dir(dir: &TempDir) {
    // SAFETY: guarded by #[serial]; no other test thread touches the
    // environment concurrently.
    unsafe {
        std::env::set_var(CONFIG_DIR_ENV, dir.path());
        std::env::remove_var(API_URL_ENV);
    }
}

fn clear_env() {
    unsafe {
        std::env::remove_var(CONFIG_DIR_ENV);
        std::env::remove_var(API_URL_ENV);
    }
}

#[test]
#[serial]
fn test_load_defaults_when_file_missing() {
    let dir = TempDir::new().unwrap();
    with_config_dir(&dir);

    let config = Config::load().unwrap();
    assert_eq!(config.api.url, "http://localhost:8000");

    clear_env();
}

#[test]
#[serial]
fn test_save_and_reload_roundtrip() {
    let dir = TempDir::new().unwrap();
    with_config_dir(&dir);

    let mut config = Config::load().unwrap();
    config.set("api.url", "http://tickets.internal:9000").unwrap();
    config.save().unwrap();

    let reloaded = Config::load().unwrap();
    assert_eq!(reloaded.api.url, "http://tickets.internal:9000");

    clear_env();
}

#[test]
#[serial]
fn test_env_url_overrides_file() {
    let dir = TempDir::new().unwrap();
    with_config_dir(&dir);

    let mut config = Config::load().unwrap();
    config.set("api.url", "http://tickets.internal:9000").unwrap();
    config.save().unwrap();

    unsafe {
        std::env::set_var(API_URL_ENV, "http://override:1234");
    }
    let config = Config::load().unwrap();
    assert_eq!(config.api.url, "http://override:1234");

    clear_env();
}

#[test]
#[serial]
fn test_config_path_honors_dir_override() {
    let dir = TempDir::new().unwrap();
    with_config_dir(&dir);

    let path = Config::path().unwrap();
    assert!(path.starts_with(dir.path()));
    assert!(path.ends_with("config.yaml"));

    clear_env();
}

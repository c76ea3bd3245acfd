//! Integration tests for configuration loading
//!
//! Tests that verify config loading from files and environment variables.

use scurry::AppConfig;
use serial_test::serial;

#[test]
#[serial]
fn test_env_override() {
    std::env::set_var("SCURRY_WINDOW__TITLE", "Test From Env");
    let config = AppConfig::load().unwrap();
    assert_eq!(config.window.title, "Test From Env");
    std::env::remove_var("SCURRY_WINDOW__TITLE");
}

#[test]
#[serial]
fn test_env_override_walker_count() {
    std::env::set_var("SCURRY_SIMULATION__WALKER_COUNT", "5");
    let config = AppConfig::load().unwrap();
    assert_eq!(config.simulation.walker_count, 5);
    std::env::remove_var("SCURRY_SIMULATION__WALKER_COUNT");
}

#[test]
#[serial]
fn test_default_file_loading() {
    std::env::remove_var("SCURRY_WINDOW__TITLE");
    std::env::remove_var("SCURRY_SIMULATION__WALKER_COUNT");

    // config/default.toml in the repo root mirrors the built-in defaults
    let config = AppConfig::load().unwrap();
    assert_eq!(config.simulation.walker_count, 11);
    assert_eq!(config.simulation.step_size, 2);
    assert!(config.simulation.start_paused);
}

//! Integration tests for config file loading and saving

use control_center::Config;
use tempfile::TempDir;

#[test]
fn test_first_run_creates_default_config_file() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");

    let config = Config::load_from_dir(temp_dir.path()).expect("first-run load should succeed");

    let path = temp_dir.path().join("config.toml");
    assert!(path.exists(), "config.toml should be created on first run");
    assert_eq!(config.categories.len(), 4);
    let labels: Vec<&str> = config.categories.iter().map(|c| c.label.as_str()).collect();
    assert_eq!(labels, ["System", "Display", "Sound", "Network"]);

    // The written file must parse back to the same defaults
    let on_disk = Config::from_file(&path).expect("created file should load");
    assert_eq!(on_disk.categories, config.categories);
}

#[test]
fn test_second_run_reads_existing_file() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");

    Config::load_from_dir(temp_dir.path()).expect("first-run load should succeed");

    // Edit the file between runs; load must pick up the edit, not rewrite
    // the defaults.
    let path = temp_dir.path().join("config.toml");
    std::fs::write(
        &path,
        r#"
        [[categories]]
        id = "about"
        label = "About"
        "#,
    )
    .unwrap();

    let config = Config::load_from_dir(temp_dir.path()).expect("second load should succeed");
    assert_eq!(config.categories.len(), 1);
    assert_eq!(config.categories[0].label, "About");
}

#[test]
fn test_save_and_reload_roundtrip() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("config.toml");

    let config = Config::with_defaults();
    config.save_to_file(&path).expect("save should succeed");

    let reloaded = Config::from_file(&path).expect("reload should succeed");
    assert_eq!(reloaded.categories, config.categories);
    assert_eq!(reloaded.window.title, "Control Center");
    assert_eq!(reloaded.window.sidebar_width, 200.0);
}

#[test]
fn test_save_creates_parent_directories() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("nested").join("dir").join("config.toml");

    Config::with_defaults()
        .save_to_file(&path)
        .expect("save should create parents");
    assert!(path.exists());
}

#[test]
fn test_missing_file_is_an_error() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("does-not-exist.toml");

    assert!(Config::from_file(&path).is_err());
}

#[test]
fn test_malformed_file_is_an_error() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("config.toml");
    std::fs::write(&path, "categories = \"not a list\"").unwrap();

    let err = Config::from_file(&path).unwrap_err();
    assert!(err.to_string().contains("Failed to parse config file"));
}

#[test]
fn test_invalid_categories_are_rejected() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("config.toml");
    std::fs::write(&path, "categories = []").unwrap();

    let err = Config::from_file(&path).unwrap_err();
    assert!(err.to_string().contains("Invalid config file"));
}

#[test]
fn test_partial_file_fills_in_defaults() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("config.toml");
    std::fs::write(
        &path,
        r#"
        [window]
        title = "Settings"
        "#,
    )
    .unwrap();

    let config = Config::from_file(&path).expect("partial config should load");
    assert_eq!(config.window.title, "Settings");
    assert_eq!(config.window.width, 800.0);
    assert_eq!(config.categories.len(), 4);
}

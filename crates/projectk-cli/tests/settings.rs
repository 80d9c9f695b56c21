//! Settings files on disk.

use std::path::PathBuf;

use tempfile::TempDir;

use projectk_cli::render::OutputFormat;
use projectk_cli::settings::{
    DEFAULT_DATA_PATH, Settings, load_settings, read_settings, resolve_settings_path,
    save_settings,
};
use projectk_model::ColorPolicy;

#[test]
fn saved_settings_load_back() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("settings.toml");

    let mut settings = Settings::default();
    settings.data.path = PathBuf::from("cartas.csv");
    settings.display.format = OutputFormat::Json;
    settings.colors.policy = ColorPolicy::Strict;
    save_settings(&settings, &path, false).unwrap();

    assert_eq!(load_settings(Some(&path)).unwrap(), settings);
}

#[test]
fn init_refuses_to_overwrite_without_force() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("settings.toml");
    save_settings(&Settings::default(), &path, false).unwrap();

    let err = save_settings(&Settings::default(), &path, false).unwrap_err();
    assert!(err.to_string().contains("already exists"));
    save_settings(&Settings::default(), &path, true).unwrap();
}

#[test]
fn explicit_missing_file_is_an_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("missing.toml");
    assert!(load_settings(Some(&path)).is_err());
}

#[test]
fn explicit_malformed_file_is_an_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("settings.toml");
    std::fs::write(&path, "[display]\npreview_rows = \"muchas\"\n").unwrap();

    let err = read_settings(&path).unwrap_err();
    assert!(format!("{err:#}").contains("parse settings file"));
}

#[test]
fn partial_file_fills_defaults() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("settings.toml");
    std::fs::write(&path, "[display]\npreview_rows = 10\n").unwrap();

    let settings = read_settings(&path).unwrap();
    assert_eq!(settings.display.preview_rows, 10);
    assert_eq!(settings.data.path, PathBuf::from(DEFAULT_DATA_PATH));
    assert_eq!(settings.colors.policy, ColorPolicy::Fallback);
}

#[test]
fn explicit_path_wins_over_user_path() {
    let path = PathBuf::from("custom.toml");
    assert_eq!(resolve_settings_path(Some(&path)).unwrap(), path);
}

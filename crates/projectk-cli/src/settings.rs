//! User settings persisted as TOML.
//!
//! Settings are stored in the platform-specific config folder:
//! - macOS: ~/Library/Application Support/com.projectk.Project-K-Explorer/
//! - Windows: %APPDATA%/projectk/Project K Explorer/config/
//! - Linux: ~/.config/projectkexplorer/
//!
//! Command-line flags override whatever is loaded here.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow, bail};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use projectk_analysis::{DispatchOptions, HOME_IMAGE};
use projectk_model::ColorPolicy;

use crate::render::OutputFormat;

const APP_QUALIFIER: &str = "com";
const APP_ORG: &str = "projectk";
const APP_NAME: &str = "Project K Explorer";
const CONFIG_FILENAME: &str = "settings.toml";

/// Dataset read when neither a flag nor the settings name one.
pub const DEFAULT_DATA_PATH: &str = "demodecks.csv";

/// Explorer settings.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub data: DataSettings,
    pub display: DisplaySettings,
    pub colors: ColorSettings,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DataSettings {
    /// CSV file with the card dataset.
    pub path: PathBuf,
    /// Image shown on the landing page.
    pub home_image: String,
}

impl Default for DataSettings {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_DATA_PATH),
            home_image: HOME_IMAGE.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplaySettings {
    /// Rows shown by the Explore page.
    pub preview_rows: usize,
    pub format: OutputFormat,
    /// Table width in columns.
    pub width: u16,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            preview_rows: DispatchOptions::default().preview_rows,
            format: OutputFormat::default(),
            width: 100,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ColorSettings {
    /// What to do with decks outside the colour map.
    pub policy: ColorPolicy,
}

impl Settings {
    /// Dispatcher options derived from these settings.
    pub fn dispatch_options(&self) -> DispatchOptions {
        DispatchOptions {
            color_policy: self.colors.policy,
            preview_rows: self.display.preview_rows,
            image_path: self.data.home_image.clone(),
        }
    }
}

/// Path of the per-user settings file.
///
/// Returns `None` if the platform-specific directory cannot be determined.
pub fn settings_path() -> Option<PathBuf> {
    ProjectDirs::from(APP_QUALIFIER, APP_ORG, APP_NAME)
        .map(|dirs| dirs.config_dir().join(CONFIG_FILENAME))
}

/// Reads and parses a settings file.
///
/// # Errors
///
/// Fails if the file cannot be read or is not valid settings TOML.
pub fn read_settings(path: &Path) -> Result<Settings> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("read settings file {}", path.display()))?;
    let settings = toml::from_str(&content)
        .with_context(|| format!("parse settings file {}", path.display()))?;
    info!(path = %path.display(), "loaded settings");
    Ok(settings)
}

/// Loads settings.
///
/// An explicit path must be readable. Without one, the per-user file is used
/// when present; a missing, unreadable or malformed per-user file falls back
/// to defaults.
///
/// # Errors
///
/// Fails only when `explicit` is given and cannot be loaded.
pub fn load_settings(explicit: Option<&Path>) -> Result<Settings> {
    if let Some(path) = explicit {
        return read_settings(path);
    }

    let Some(path) = settings_path() else {
        warn!("could not determine settings path, using defaults");
        return Ok(Settings::default());
    };
    match read_settings(&path) {
        Ok(settings) => Ok(settings),
        Err(error) if is_not_found(&error) => {
            debug!(path = %path.display(), "no settings file, using defaults");
            Ok(Settings::default())
        }
        Err(error) => {
            warn!(
                path = %path.display(),
                error = %format!("{error:#}"),
                "ignoring settings file, using defaults"
            );
            Ok(Settings::default())
        }
    }
}

fn is_not_found(error: &anyhow::Error) -> bool {
    error
        .downcast_ref::<io::Error>()
        .is_some_and(|error| error.kind() == io::ErrorKind::NotFound)
}

/// Writes `settings` to `path`, creating the parent directory.
///
/// # Errors
///
/// Fails if the file already exists and `overwrite` is false, or on any I/O
/// or serialization failure.
pub fn save_settings(settings: &Settings, path: &Path, overwrite: bool) -> Result<()> {
    if path.exists() && !overwrite {
        bail!(
            "settings file {} already exists (use --force to replace it)",
            path.display()
        );
    }
    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("create config directory {}", parent.display()))?;
    }
    let content = toml::to_string_pretty(settings).context("serialize settings")?;
    fs::write(path, content).with_context(|| format!("write settings file {}", path.display()))?;
    info!(path = %path.display(), "saved settings");
    Ok(())
}

/// The explicit path, or the per-user settings path.
///
/// # Errors
///
/// Fails when no path is given and the platform directory is unknown.
pub fn resolve_settings_path(explicit: Option<&Path>) -> Result<PathBuf> {
    match explicit {
        Some(path) => Ok(path.to_path_buf()),
        None => settings_path().ok_or_else(|| anyhow!("could not determine settings path")),
    }
}

// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and
//! saving user preferences to a `settings.toml` file.
//!
//! All fields are optional so a partial (or absent) file degrades to the
//! built-in defaults rather than failing startup.

use crate::error::Result;
use crate::ui::notifications::Durations;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "IcedToasts";

/// Display duration for error toasts.
pub const DEFAULT_ERROR_DURATION_MS: u64 = 8000;
/// Display duration for every non-error toast.
pub const DEFAULT_DISPLAY_DURATION_MS: u64 = 5000;
/// Grace period between the hide request and detaching the element.
pub const DEFAULT_REMOVAL_GRACE_MS: u64 = 500;
/// Title rendered in every toast header.
pub const DEFAULT_TOAST_TITLE: &str = "Notifications";

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    /// Title shown in the header of every toast.
    pub toast_title: Option<String>,
    #[serde(default)]
    pub error_duration_ms: Option<u64>,
    #[serde(default)]
    pub display_duration_ms: Option<u64>,
    #[serde(default)]
    pub removal_grace_ms: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            toast_title: None,
            error_duration_ms: Some(DEFAULT_ERROR_DURATION_MS),
            display_duration_ms: Some(DEFAULT_DISPLAY_DURATION_MS),
            removal_grace_ms: Some(DEFAULT_REMOVAL_GRACE_MS),
        }
    }
}

impl Config {
    /// Resolves the effective toast title.
    pub fn toast_title(&self) -> &str {
        self.toast_title.as_deref().unwrap_or(DEFAULT_TOAST_TITLE)
    }

    /// Resolves the effective display/removal timings for the presenter.
    pub fn durations(&self) -> Durations {
        Durations {
            error: Duration::from_millis(
                self.error_duration_ms.unwrap_or(DEFAULT_ERROR_DURATION_MS),
            ),
            default: Duration::from_millis(
                self.display_duration_ms
                    .unwrap_or(DEFAULT_DISPLAY_DURATION_MS),
            ),
            removal_grace: Duration::from_millis(
                self.removal_grace_ms.unwrap_or(DEFAULT_REMOVAL_GRACE_MS),
            ),
        }
    }
}

fn get_default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(CONFIG_FILE);
        path
    })
}

pub fn load() -> Result<Config> {
    if let Some(path) = get_default_config_path() {
        if path.exists() {
            return load_from_path(&path);
        }
    }
    Ok(Config::default())
}

pub fn save(config: &Config) -> Result<()> {
    if let Some(path) = get_default_config_path() {
        return save_to_path(config, &path);
    }
    Ok(())
}

pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    match toml::from_str(&content) {
        Ok(config) => Ok(config),
        Err(e) => {
            tracing::warn!("Invalid config file, using defaults: {}", e);
            Ok(Config::default())
        }
    }
}

pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn save_and_load_round_trip_preserves_settings() {
        let config = Config {
            toast_title: Some("Quiz Master".to_string()),
            error_duration_ms: Some(10_000),
            display_duration_ms: Some(4000),
            removal_grace_ms: Some(250),
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("settings.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded.toast_title, config.toast_title);
        assert_eq!(loaded.error_duration_ms, config.error_duration_ms);
        assert_eq!(loaded.display_duration_ms, config.display_duration_ms);
        assert_eq!(loaded.removal_grace_ms, config.removal_grace_ms);
    }

    #[test]
    fn load_from_path_returns_default_on_invalid_toml() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "not = valid = toml").expect("failed to write invalid toml");

        let loaded = load_from_path(&config_path).expect("load should not error");
        assert_eq!(loaded.toast_title(), DEFAULT_TOAST_TITLE);
    }

    #[test]
    fn save_to_path_creates_parent_directories() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let nested_dir = temp_dir.path().join("deep").join("path");
        let config_path = nested_dir.join("settings.toml");

        save_to_path(&Config::default(), &config_path).expect("save should create directories");
        assert!(config_path.exists());
    }

    #[test]
    fn default_config_matches_presenter_defaults() {
        let durations = Config::default().durations();
        assert_eq!(durations.error, Duration::from_millis(8000));
        assert_eq!(durations.default, Duration::from_millis(5000));
        assert_eq!(durations.removal_grace, Duration::from_millis(500));
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let config: Config = toml::from_str("toast_title = \"Demo\"").expect("valid toml");
        assert_eq!(config.toast_title(), "Demo");
        assert_eq!(
            config.durations().default,
            Duration::from_millis(DEFAULT_DISPLAY_DURATION_MS)
        );
    }
}

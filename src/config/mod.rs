// SPDX-License-Identifier: MPL-2.0
//! User preference persistence.
//!
//! Preferences live in a `settings.toml` file under the platform config
//! directory. The only keys are the explicit theme choice and an optional
//! locale override. An absent `theme` key means the user never made an
//! explicit choice, so the OS light/dark signal stays in charge.

use crate::error::Result;
use crate::ui::theming::ThemeChoice;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "IcedFolio";

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct Config {
    /// Explicit theme choice. `None` leaves the OS signal in control.
    #[serde(default)]
    pub theme: Option<ThemeChoice>,
    /// Locale override in BCP-47 form (e.g. `fr`, `en-US`).
    #[serde(default)]
    pub language: Option<String>,
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
    Ok(toml::from_str(&content).unwrap_or_default())
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
    fn save_and_load_round_trip_preserves_theme() {
        let config = Config {
            theme: Some(ThemeChoice::Light),
            language: Some("fr".to_string()),
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("settings.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded.theme, Some(ThemeChoice::Light));
        assert_eq!(loaded.language, config.language);
    }

    #[test]
    fn absent_theme_key_means_no_explicit_choice() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "language = \"en-US\"\n").expect("failed to write config");

        let loaded = load_from_path(&config_path).expect("load should not error");
        assert_eq!(loaded.theme, None);
    }

    #[test]
    fn load_from_path_returns_default_on_invalid_toml() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "not = valid = toml").expect("failed to write invalid toml");

        let loaded = load_from_path(&config_path).expect("load should not error");
        assert!(loaded.theme.is_none());
    }

    #[test]
    fn save_to_path_creates_parent_directories() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("deep").join("path").join("settings.toml");
        let config = Config {
            theme: Some(ThemeChoice::Dark),
            language: None,
        };

        save_to_path(&config, &config_path).expect("save should create directories");
        assert!(config_path.exists());
    }

    #[test]
    fn theme_serializes_as_lowercase_string() {
        let config = Config {
            theme: Some(ThemeChoice::Dark),
            language: None,
        };
        let serialized = toml::to_string(&config).expect("failed to serialize");
        assert!(serialized.contains("theme = \"dark\""));
    }
}

// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, loading and saving
//! user preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[general]` - Theme mode
//! - `[notifications]` - Toast durations, transition delays and tick rate
//!
//! Every field is optional; missing values fall back to [`defaults`].
//!
//! # Path Resolution
//!
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. `--config-dir` on the command line
//! 3. Set `NOTIFY_CENTER_CONFIG_DIR` environment variable
//! 4. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use notify_center::config;
//!
//! let (mut config, _warning) = config::load();
//! config.notifications.error_duration_ms = Some(10_000);
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::error::{Error, Result};
use crate::ui::notifications::Timings;
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "settings.toml";

/// General application settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct GeneralConfig {
    /// Application theme mode (light, dark, or system).
    #[serde(default)]
    pub theme_mode: ThemeMode,
}

/// Notification timing settings, all in milliseconds.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NotificationsConfig {
    /// Display duration for success, warning and info toasts. `0` keeps them
    /// until dismissed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_duration_ms: Option<u64>,

    /// Display duration for error toasts.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_duration_ms: Option<u64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enter_delay_ms: Option<u64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exit_delay_ms: Option<u64>,

    /// How often expiry is checked while toasts are on screen.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tick_interval_ms: Option<u64>,
}

impl Default for NotificationsConfig {
    fn default() -> Self {
        Self {
            default_duration_ms: Some(DEFAULT_DURATION_MS),
            error_duration_ms: Some(DEFAULT_ERROR_DURATION_MS),
            enter_delay_ms: Some(DEFAULT_ENTER_DELAY_MS),
            exit_delay_ms: Some(DEFAULT_EXIT_DELAY_MS),
            tick_interval_ms: Some(DEFAULT_TICK_INTERVAL_MS),
        }
    }
}

impl NotificationsConfig {
    /// Resolves the configured values into clamped lifecycle timings.
    #[must_use]
    pub fn timings(&self) -> Timings {
        let ms = |value: Option<u64>, default: u64, max: u64| {
            Duration::from_millis(value.unwrap_or(default).min(max))
        };

        Timings {
            default_duration: ms(
                self.default_duration_ms,
                DEFAULT_DURATION_MS,
                MAX_DURATION_MS,
            ),
            error_duration: ms(
                self.error_duration_ms,
                DEFAULT_ERROR_DURATION_MS,
                MAX_DURATION_MS,
            ),
            enter_delay: ms(
                self.enter_delay_ms,
                DEFAULT_ENTER_DELAY_MS,
                MAX_TRANSITION_MS,
            ),
            exit_delay: ms(self.exit_delay_ms, DEFAULT_EXIT_DELAY_MS, MAX_TRANSITION_MS),
        }
    }

    /// Tick interval clamped to the supported range.
    #[must_use]
    pub fn tick_interval(&self) -> Duration {
        let ms = self
            .tick_interval_ms
            .unwrap_or(DEFAULT_TICK_INTERVAL_MS)
            .clamp(MIN_TICK_INTERVAL_MS, MAX_TICK_INTERVAL_MS);
        Duration::from_millis(ms)
    }
}

/// Root configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub notifications: NotificationsConfig,
}

fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

// =============================================================================
// Load Functions
// =============================================================================

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with a warning message explaining what went wrong.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => {
                    tracing::debug!(path = %path.display(), "loaded configuration");
                    return (config, None);
                }
                Err(err) => {
                    tracing::warn!(
                        path = %path.display(),
                        error = %err,
                        "falling back to default configuration"
                    );
                    return (
                        Config::default(),
                        Some(format!(
                            "Could not read {}; using default settings",
                            path.display()
                        )),
                    );
                }
            }
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

// =============================================================================
// Save Functions
// =============================================================================

/// Saves the configuration to the default path.
pub fn save(config: &Config) -> Result<()> {
    save_with_override(config, None)
}

/// Saves the configuration to a custom directory.
pub fn save_with_override(config: &Config, base_dir: Option<PathBuf>) -> Result<()> {
    if let Some(path) = get_config_path_with_override(base_dir) {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Saves configuration to a specific path.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config).map_err(Error::from)?;
    fs::write(path, content)?;
    Ok(())
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn save_and_load_round_trip_preserves_settings() {
        let config = Config {
            general: GeneralConfig {
                theme_mode: ThemeMode::Light,
            },
            notifications: NotificationsConfig {
                default_duration_ms: Some(4_000),
                error_duration_ms: Some(0),
                enter_delay_ms: Some(20),
                exit_delay_ms: Some(250),
                tick_interval_ms: Some(100),
            },
        };

        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        save_to_path(&config, &config_path).expect("save should succeed");

        let loaded = load_from_path(&config_path).expect("load should succeed");
        assert_eq!(loaded, config);
    }

    #[test]
    fn load_from_path_invalid_toml_errors() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "not = valid = toml").expect("failed to write invalid toml");

        match load_from_path(&config_path) {
            Err(Error::Config(_)) => {}
            other => panic!("expected Config error, got {:?}", other),
        }
    }

    #[test]
    fn load_from_missing_path_is_io_error() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let result = load_from_path(&temp_dir.path().join("absent.toml"));
        assert!(matches!(result, Err(Error::Io(_))));
    }

    #[test]
    fn partial_file_keeps_defaults_for_missing_sections() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "[notifications]\nerror_duration_ms = 9000\n")
            .expect("failed to write config");

        let config = load_from_path(&config_path).expect("load should succeed");
        assert_eq!(config.general, GeneralConfig::default());

        let timings = config.notifications.timings();
        assert_eq!(timings.error_duration, Duration::from_millis(9_000));
        assert_eq!(
            timings.default_duration,
            Duration::from_millis(DEFAULT_DURATION_MS)
        );
        assert_eq!(
            timings.exit_delay,
            Duration::from_millis(DEFAULT_EXIT_DELAY_MS)
        );
    }

    #[test]
    fn load_with_override_reports_warning_for_broken_file() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        fs::write(temp_dir.path().join(CONFIG_FILE), "[general\n").expect("write");

        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        assert!(warning.is_some());
    }

    #[test]
    fn load_with_override_without_file_is_silent() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        assert!(warning.is_none());
    }

    #[test]
    fn save_with_override_writes_into_directory() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let base = temp_dir.path().join("nested");
        save_with_override(&Config::default(), Some(base.clone())).expect("save");
        assert!(base.join(CONFIG_FILE).exists());
    }

    #[test]
    fn timings_are_clamped() {
        let config = NotificationsConfig {
            default_duration_ms: Some(u64::MAX),
            error_duration_ms: None,
            enter_delay_ms: Some(60_000),
            exit_delay_ms: None,
            tick_interval_ms: Some(1),
        };

        let timings = config.timings();
        assert_eq!(
            timings.default_duration,
            Duration::from_millis(MAX_DURATION_MS)
        );
        assert_eq!(
            timings.enter_delay,
            Duration::from_millis(MAX_TRANSITION_MS)
        );
        assert_eq!(
            config.tick_interval(),
            Duration::from_millis(MIN_TICK_INTERVAL_MS)
        );
    }

    #[test]
    fn default_timings_match_defaults_module() {
        assert_eq!(NotificationsConfig::default().timings(), Timings::default());
    }
}

// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[general]` - Language
//! - `[carousel]` - Autoplay toggle and interval
//! - `[viewer]` - Modal viewer transform smoothing
//!
//! # Path Resolution
//!
//! The config file location can be customized for testing or portable deployments:
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. Pass `--config-dir` or set `BANNER_LENS_CONFIG_DIR`
//! 3. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use banner_lens::config;
//!
//! let (mut config, _warning) = config::load();
//! config.carousel.autoplay_interval_ms = Some(5000);
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "settings.toml";

/// Warning key surfaced when `settings.toml` exists but cannot be parsed.
pub const CONFIG_LOAD_WARNING_KEY: &str = "notification-config-load-error";

// =============================================================================
// Validated values
// =============================================================================

/// Carousel auto-advance interval, guaranteed to be within 500 ms – 60 s.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AutoplayInterval(u64);

impl AutoplayInterval {
    /// Creates a new interval, clamping the value to the valid range.
    #[must_use]
    pub fn new(millis: u64) -> Self {
        Self(millis.clamp(MIN_AUTOPLAY_INTERVAL_MS, MAX_AUTOPLAY_INTERVAL_MS))
    }

    #[must_use]
    pub fn millis(self) -> u64 {
        self.0
    }

    #[must_use]
    pub fn as_duration(self) -> Duration {
        Duration::from_millis(self.0)
    }
}

impl Default for AutoplayInterval {
    fn default() -> Self {
        Self(DEFAULT_AUTOPLAY_INTERVAL_MS)
    }
}

/// Transform smoothing duration, guaranteed to be within 0 – 1000 ms.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransitionDuration(u64);

impl TransitionDuration {
    /// Creates a new duration, clamping the value to the valid range.
    #[must_use]
    pub fn new(millis: u64) -> Self {
        Self(millis.clamp(MIN_TRANSITION_MS, MAX_TRANSITION_MS))
    }

    #[must_use]
    pub fn millis(self) -> u64 {
        self.0
    }

    #[must_use]
    pub fn as_duration(self) -> Duration {
        Duration::from_millis(self.0)
    }
}

impl Default for TransitionDuration {
    fn default() -> Self {
        Self(DEFAULT_TRANSITION_MS)
    }
}

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "fr").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}

/// Carousel settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CarouselConfig {
    /// Whether the carousel advances on its own.
    #[serde(default = "default_autoplay", skip_serializing_if = "Option::is_none")]
    pub autoplay: Option<bool>,

    /// Auto-advance interval in milliseconds.
    #[serde(
        default = "default_autoplay_interval_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub autoplay_interval_ms: Option<u64>,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            autoplay: default_autoplay(),
            autoplay_interval_ms: default_autoplay_interval_ms(),
        }
    }
}

impl CarouselConfig {
    /// Returns the validated autoplay interval.
    #[must_use]
    pub fn interval(&self) -> AutoplayInterval {
        self.autoplay_interval_ms
            .map(AutoplayInterval::new)
            .unwrap_or_default()
    }
}

/// Modal viewer settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ViewerConfig {
    /// Duration of the zoom/pan smoothing in milliseconds.
    #[serde(
        default = "default_transition_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub transition_ms: Option<u64>,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            transition_ms: default_transition_ms(),
        }
    }
}

impl ViewerConfig {
    /// Returns the validated transition duration.
    #[must_use]
    pub fn transition(&self) -> TransitionDuration {
        self.transition_ms
            .map(TransitionDuration::new)
            .unwrap_or_default()
    }
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Application configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub carousel: CarouselConfig,

    #[serde(default)]
    pub viewer: ViewerConfig,
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_autoplay() -> Option<bool> {
    Some(true)
}

fn default_autoplay_interval_ms() -> Option<u64> {
    Some(DEFAULT_AUTOPLAY_INTERVAL_MS)
}

fn default_transition_ms() -> Option<u64> {
    Some(DEFAULT_TRANSITION_MS)
}

// =============================================================================
// Config Path Resolution
// =============================================================================

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
/// default config with a warning key explaining what went wrong.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(err) => {
                    tracing::warn!(path = %path.display(), error = %err, "failed to load settings");
                    return (Config::default(), Some(CONFIG_LOAD_WARNING_KEY.to_string()));
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

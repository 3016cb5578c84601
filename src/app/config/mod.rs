// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, loaded from a
//! `settings.toml` file at startup.
//!
//! # Configuration Sections
//!
//! - `[general]` - Language and theme mode
//! - `[gallery]` - Slot count, grid columns, placeholder source and title
//! - `[profile]` - Author name and biography shown below the gallery
//!
//! The layout mode is deliberately absent: it always starts as grid.
//!
//! # Path Resolution
//!
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. `--config-dir` CLI argument or `ICED_GALLERY_CONFIG_DIR` environment variable
//! 3. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use iced_gallery::app::config;
//!
//! // Load existing configuration (returns tuple with optional warning)
//! let (config, _warning) = config::load();
//! let slots = config.gallery.slot_count();
//! assert!(slots >= 1);
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::error::{Error, Result};
use crate::gallery::PlaceholderSource;
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "fr").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// Application theme mode (light, dark, or system).
    #[serde(
        default = "default_theme_mode",
        deserialize_with = "deserialize_theme_mode"
    )]
    pub theme_mode: ThemeMode,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            language: None,
            theme_mode: default_theme_mode(),
        }
    }
}

/// Gallery settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GalleryConfig {
    /// Number of slots created at startup.
    #[serde(default = "default_slot_count", skip_serializing_if = "Option::is_none")]
    pub slot_count: Option<u32>,

    /// Number of columns in grid layout.
    #[serde(
        default = "default_grid_columns",
        skip_serializing_if = "Option::is_none"
    )]
    pub grid_columns: Option<u32>,

    /// Placeholder URL template; `{id}` is replaced by the slot id.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placeholder_url: Option<String>,

    /// Header subtitle shown under the localized title.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            slot_count: default_slot_count(),
            grid_columns: default_grid_columns(),
            placeholder_url: None,
            title: None,
        }
    }
}

impl GalleryConfig {
    /// Slot count clamped into `MIN_SLOT_COUNT..=MAX_SLOT_COUNT`.
    #[must_use]
    pub fn slot_count(&self) -> u32 {
        clamp_logged(
            "slot_count",
            self.slot_count.unwrap_or(DEFAULT_SLOT_COUNT),
            MIN_SLOT_COUNT,
            MAX_SLOT_COUNT,
        )
    }

    /// Grid columns clamped into `MIN_GRID_COLUMNS..=MAX_GRID_COLUMNS`.
    #[must_use]
    pub fn grid_columns(&self) -> u32 {
        clamp_logged(
            "grid_columns",
            self.grid_columns.unwrap_or(DEFAULT_GRID_COLUMNS),
            MIN_GRID_COLUMNS,
            MAX_GRID_COLUMNS,
        )
    }

    /// Placeholder source built from the configured template.
    #[must_use]
    pub fn placeholder_source(&self) -> PlaceholderSource {
        self.placeholder_url
            .as_deref()
            .map(PlaceholderSource::new)
            .unwrap_or_default()
    }
}

/// Profile shown in the biography section.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct ProfileConfig {
    /// Author name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Free-form biography text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub biography: Option<String>,
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
    pub gallery: GalleryConfig,

    #[serde(default)]
    pub profile: ProfileConfig,
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_theme_mode() -> ThemeMode {
    ThemeMode::System
}

fn default_slot_count() -> Option<u32> {
    Some(DEFAULT_SLOT_COUNT)
}

fn default_grid_columns() -> Option<u32> {
    Some(DEFAULT_GRID_COLUMNS)
}

fn deserialize_theme_mode<'de, D>(deserializer: D) -> std::result::Result<ThemeMode, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::Error;

    let raw = String::deserialize(deserializer)?;
    match raw.to_lowercase().as_str() {
        "light" => Ok(ThemeMode::Light),
        "dark" => Ok(ThemeMode::Dark),
        "system" => Ok(ThemeMode::System),
        other => Err(D::Error::custom(format!("invalid theme_mode: {}", other))),
    }
}

fn clamp_logged(field: &str, value: u32, min: u32, max: u32) -> u32 {
    let clamped = value.clamp(min, max);
    if clamped != value {
        tracing::warn!(field, value, clamped, "config value out of range, clamped");
    }
    clamped
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
/// default config with the i18n key of a warning explaining what went wrong.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => {
                    tracing::info!(path = %path.display(), "loaded configuration");
                    return (config, None);
                }
                Err(err) => {
                    tracing::warn!(path = %path.display(), error = %err, "falling back to default configuration");
                    return (
                        Config::default(),
                        Some("notification-config-load-error".to_string()),
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

/// Writes `config` to the default path unless a file already exists there.
///
/// Returns the path written, or `None` when the file was already present or
/// no config directory could be resolved.
pub fn write_default_if_missing(config: &Config) -> Result<Option<PathBuf>> {
    write_default_if_missing_with_override(config, None)
}

/// Same as [`write_default_if_missing`] with a custom directory.
pub fn write_default_if_missing_with_override(
    config: &Config,
    base_dir: Option<PathBuf>,
) -> Result<Option<PathBuf>> {
    match get_config_path_with_override(base_dir) {
        Some(path) if !path.exists() => {
            save_to_path(config, &path)?;
            Ok(Some(path))
        }
        _ => Ok(None),
    }
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

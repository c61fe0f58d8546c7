// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! The configuration is organized into logical sections:
//! - `[general]` - Language and theme mode
//! - `[library]` - Photo folder, ordering and media kind
//! - `[review]` - Sampling batch size and deletion behavior
//! - `[gesture]` - Swipe threshold and feedback scaling
//!
//! # Path Resolution
//!
//! The config file location can be customized for testing or portable deployments:
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. Pass `--config-dir` on the command line
//! 3. Set `ICED_SWIPE_CONFIG_DIR` environment variable
//! 4. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use iced_swipe::config::{self, Config};
//!
//! // Load existing configuration (returns tuple with optional warning)
//! let (mut config, _warning) = config::load();
//!
//! // Modify a setting
//! config.review.real_delete = Some(false);
//!
//! // Save the modified configuration
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::application::sampler::SamplerConfig;
use crate::domain::asset::MediaKind;
use crate::domain::gesture::SwipeConfig;
use crate::error::{Error, Result};
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Enums (shared between sections)
// =============================================================================

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum SortOrder {
    #[default]
    Alphabetical,
    ModifiedDate,
    CreatedDate,
}

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "fr").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// Application theme mode (light, dark, or system).
    #[serde(default)]
    pub theme_mode: ThemeMode,
}

/// Where the photos come from.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct LibraryConfig {
    /// Folder reviewed by the app.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub root: Option<PathBuf>,

    /// Enumeration order of the folder.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort_order: Option<SortOrder>,

    /// Photos, videos, or both.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub media_kind: Option<MediaKind>,

    /// Include sub-folders.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recursive: Option<bool>,
}

/// Review behavior.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ReviewConfig {
    /// Assets fetched per random draw.
    #[serde(default = "default_batch_size", skip_serializing_if = "Option::is_none")]
    pub batch_size: Option<usize>,

    /// Really delete files; when off, a left swipe only skips.
    #[serde(default = "default_real_delete", skip_serializing_if = "Option::is_none")]
    pub real_delete: Option<bool>,

    /// Show the "n / total" label.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub show_index_label: Option<bool>,

    /// Fade the photo while it is dragged.
    #[serde(default = "default_fade_on_drag", skip_serializing_if = "Option::is_none")]
    pub fade_on_drag: Option<bool>,
}

impl Default for ReviewConfig {
    fn default() -> Self {
        Self {
            batch_size: default_batch_size(),
            real_delete: default_real_delete(),
            show_index_label: Some(DEFAULT_SHOW_INDEX_LABEL),
            fade_on_drag: default_fade_on_drag(),
        }
    }
}

/// Swipe tuning, in logical pixels.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct GestureConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub swipe_threshold: Option<f32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rotation_divisor: Option<f32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub feedback_divisor: Option<f32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_fade_distance: Option<f32>,
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
    pub library: LibraryConfig,

    #[serde(default)]
    pub review: ReviewConfig,

    #[serde(default)]
    pub gesture: GestureConfig,
}

impl Config {
    /// Sampler settings, with the batch size clamped to its supported range.
    #[must_use]
    pub fn sampler_config(&self) -> SamplerConfig {
        SamplerConfig::new(
            self.review.batch_size.unwrap_or(DEFAULT_BATCH_SIZE),
            self.library.media_kind.unwrap_or_default(),
        )
    }

    /// Swipe settings. Out-of-range values fall back into range.
    #[must_use]
    pub fn swipe_config(&self) -> SwipeConfig {
        let divisor = |value: Option<f32>, default: f32| {
            value
                .filter(|v| v.is_finite())
                .map_or(default, |v| v.max(MIN_DIVISOR))
        };
        SwipeConfig {
            threshold: self
                .gesture
                .swipe_threshold
                .filter(|v| v.is_finite())
                .map_or(DEFAULT_SWIPE_THRESHOLD, |v| {
                    v.clamp(MIN_SWIPE_THRESHOLD, MAX_SWIPE_THRESHOLD)
                }),
            rotation_divisor: divisor(self.gesture.rotation_divisor, DEFAULT_ROTATION_DIVISOR),
            feedback_divisor: divisor(self.gesture.feedback_divisor, DEFAULT_FEEDBACK_DIVISOR),
            max_fade_distance: divisor(self.gesture.max_fade_distance, DEFAULT_MAX_FADE_DISTANCE),
            fade_on_drag: self.review.fade_on_drag.unwrap_or(DEFAULT_FADE_ON_DRAG),
        }
    }

    #[must_use]
    pub fn real_delete(&self) -> bool {
        self.review.real_delete.unwrap_or(DEFAULT_REAL_DELETE)
    }

    #[must_use]
    pub fn show_index_label(&self) -> bool {
        self.review
            .show_index_label
            .unwrap_or(DEFAULT_SHOW_INDEX_LABEL)
    }

    #[must_use]
    pub fn sort_order(&self) -> SortOrder {
        self.library.sort_order.unwrap_or_default()
    }

    #[must_use]
    pub fn recursive(&self) -> bool {
        self.library.recursive.unwrap_or(false)
    }
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_batch_size() -> Option<usize> {
    Some(DEFAULT_BATCH_SIZE)
}

fn default_real_delete() -> Option<bool> {
    Some(DEFAULT_REAL_DELETE)
}

fn default_fade_on_drag() -> Option<bool> {
    Some(DEFAULT_FADE_ON_DRAG)
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
                Ok(config) => return (config, None),
                Err(err) => {
                    tracing::warn!(path = %path.display(), error = %err, "ignoring unreadable config");
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
    use crate::test_utils::assert_abs_diff_eq;
    use tempfile::tempdir;

    #[test]
    fn save_and_load_round_trip_preserves_settings() {
        let config = Config {
            general: GeneralConfig {
                language: Some("fr".to_string()),
                theme_mode: ThemeMode::Light,
            },
            library: LibraryConfig {
                root: Some(PathBuf::from("/photos")),
                sort_order: Some(SortOrder::ModifiedDate),
                media_kind: Some(MediaKind::All),
                recursive: Some(true),
            },
            review: ReviewConfig {
                batch_size: Some(50),
                real_delete: Some(false),
                show_index_label: Some(true),
                fade_on_drag: Some(false),
            },
            gesture: GestureConfig {
                swipe_threshold: Some(120.0),
                ..GestureConfig::default()
            },
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("settings.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

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
    fn load_with_override_falls_back_with_warning() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        fs::write(temp_dir.path().join(CONFIG_FILE), "[review\nbroken")
            .expect("failed to write config");

        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        assert_eq!(warning.as_deref(), Some("notification-config-load-error"));
    }

    #[test]
    fn load_with_override_missing_file_is_default() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        assert!(warning.is_none());
    }

    #[test]
    fn save_with_override_writes_settings_file() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let mut config = Config::default();
        config.library.root = Some(PathBuf::from("/pictures"));

        save_with_override(&config, Some(temp_dir.path().to_path_buf())).expect("save");
        let (loaded, _) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(loaded.library.root, Some(PathBuf::from("/pictures")));
    }

    #[test]
    fn partial_sections_fill_defaults() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(
            &config_path,
            "[library]\nroot = \"/photos\"\n\n[review]\nreal_delete = false\n",
        )
        .expect("failed to write config");

        let config = load_from_path(&config_path).expect("load");
        assert_eq!(config.library.root, Some(PathBuf::from("/photos")));
        assert!(!config.real_delete());
        assert_eq!(config.review.batch_size, Some(DEFAULT_BATCH_SIZE));
        assert!(config.swipe_config().fade_on_drag);
        assert_eq!(config.general.theme_mode, ThemeMode::System);
    }

    #[test]
    fn kebab_case_enums_parse() {
        let config: Config = toml::from_str(
            "[library]\nsort_order = \"modified-date\"\nmedia_kind = \"video\"\n",
        )
        .expect("parse");
        assert_eq!(config.sort_order(), SortOrder::ModifiedDate);
        assert_eq!(config.sampler_config().kind, MediaKind::Video);
    }

    #[test]
    fn sampler_config_clamps_batch_size() {
        let mut config = Config::default();
        config.review.batch_size = Some(0);
        assert_eq!(config.sampler_config().batch_size, MIN_BATCH_SIZE);

        config.review.batch_size = Some(1_000_000);
        assert_eq!(config.sampler_config().batch_size, MAX_BATCH_SIZE);
    }

    #[test]
    fn swipe_config_defaults_and_bounds() {
        let config = Config::default();
        assert_eq!(config.swipe_config(), SwipeConfig::default());

        let mut config = Config::default();
        config.gesture.swipe_threshold = Some(5.0);
        config.gesture.feedback_divisor = Some(0.0);
        config.gesture.rotation_divisor = Some(f32::NAN);
        let swipe = config.swipe_config();
        assert_abs_diff_eq!(swipe.threshold, MIN_SWIPE_THRESHOLD);
        assert_abs_diff_eq!(swipe.feedback_divisor, MIN_DIVISOR);
        assert_abs_diff_eq!(swipe.rotation_divisor, DEFAULT_ROTATION_DIVISOR);
    }
}

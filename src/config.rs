// SPDX-License-Identifier: GPL-3.0-only

use crate::backends::camera::CameraBackendType;
use crate::constants::capture::JPEG_QUALITY;
use crate::constants::filters::DEFAULT_PROCEDURAL_COUNT;
use crate::filters::library::clamp_procedural_count;
use cosmic::cosmic_config::{self, CosmicConfigEntry, cosmic_config_derive::CosmicConfigEntry};
use cosmic::{Theme, theme};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::error;

/// Application ID, also the config namespace
pub const APP_ID: &str = "io.github.cosmic_utils.pinkcam";

/// Application theme preference
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub enum AppTheme {
    /// Follow system theme (dark or light based on system setting)
    #[default]
    System,
    /// Always use dark theme
    Dark,
    /// Always use light theme
    Light,
}

impl AppTheme {
    pub const ALL: [AppTheme; 3] = [AppTheme::System, AppTheme::Dark, AppTheme::Light];

    /// Get the COSMIC theme for this app theme preference
    pub fn theme(&self) -> Theme {
        match self {
            Self::Dark => {
                let mut theme = theme::system_dark();
                theme.theme_type.prefer_dark(Some(true));
                theme
            }
            Self::Light => {
                let mut theme = theme::system_light();
                theme.theme_type.prefer_dark(Some(false));
                theme
            }
            Self::System => theme::system_preference(),
        }
    }
}

#[derive(Debug, Clone, CosmicConfigEntry, Eq, PartialEq, Serialize, Deserialize)]
#[version = 1]
pub struct Config {
    /// Application theme preference (System, Dark, Light)
    pub app_theme: AppTheme,
    /// Camera backend to use (GStreamer or Virtual)
    pub backend: CameraBackendType,
    /// Flash the screen white on capture
    pub flash_enabled: bool,
    /// Mirror camera preview horizontally (selfie mode)
    pub mirror_preview: bool,
    /// Number of procedural presets after the hand-tuned ones (at most 1000)
    pub filter_count: usize,
    /// JPEG quality for captured photos (1-100)
    pub jpeg_quality: u8,
    /// Where downloaded photos are written (None = Downloads folder)
    pub save_directory: Option<String>,
}

impl Config {
    /// Load the stored configuration
    ///
    /// Falls back to defaults (field by field where possible) when the config
    /// store is unavailable or holds invalid entries. An oversized
    /// `filter_count` is clamped.
    pub fn load() -> (Option<cosmic_config::Config>, Self) {
        match cosmic_config::Config::new(APP_ID, Self::VERSION) {
            Ok(handler) => {
                let mut config = match Self::get_entry(&handler) {
                    Ok(config) => config,
                    Err((errors, config)) => {
                        error!(?errors, "Errors loading config");
                        config
                    }
                };
                config.filter_count = config.procedural_count();
                (Some(handler), config)
            }
            Err(err) => {
                error!(%err, "Failed to create config handler");
                (None, Self::default())
            }
        }
    }

    /// Procedural preset count to generate, clamped to the supported maximum
    pub fn procedural_count(&self) -> usize {
        clamp_procedural_count(self.filter_count)
    }

    /// Directory downloads are written to
    ///
    /// The configured directory if set, else the user's Downloads folder,
    /// else `~/Pictures/pinkcam`.
    pub fn save_dir(&self) -> PathBuf {
        self.save_directory
            .as_deref()
            .filter(|dir| !dir.trim().is_empty())
            .map(PathBuf::from)
            .or_else(dirs::download_dir)
            .unwrap_or_else(|| {
                dirs::picture_dir()
                    .or_else(|| dirs::home_dir().map(|home| home.join("Pictures")))
                    .unwrap_or_else(std::env::temp_dir)
                    .join(crate::constants::capture::DOWNLOAD_PREFIX)
            })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            app_theme: AppTheme::default(),
            backend: CameraBackendType::default(),
            flash_enabled: true,
            mirror_preview: true, // Default to mirrored (selfie mode)
            filter_count: DEFAULT_PROCEDURAL_COUNT,
            jpeg_quality: JPEG_QUALITY,
            save_directory: None,
        }
    }
}

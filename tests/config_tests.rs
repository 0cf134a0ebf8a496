// SPDX-License-Identifier: MPL-2.0

//! Integration tests for configuration module

use pinkcam::Config;
use pinkcam::backends::camera::CameraBackendType;
use pinkcam::config::AppTheme;
use std::path::PathBuf;

#[test]
fn test_config_default() {
    let config = Config::default();

    assert!(config.mirror_preview, "Mirror preview should be enabled by default");
    assert!(config.flash_enabled, "Flash should be enabled by default");
    assert_eq!(config.app_theme, AppTheme::System);
    assert_eq!(config.backend, CameraBackendType::GStreamer);
    assert_eq!(config.filter_count, 120);
    assert_eq!(config.jpeg_quality, 90);
    assert!(config.save_directory.is_none());
}

#[test]
fn test_save_dir_prefers_configured_directory() {
    let config = Config {
        save_directory: Some("/tmp/pinkcam-shots".to_string()),
        ..Config::default()
    };
    assert_eq!(config.save_dir(), PathBuf::from("/tmp/pinkcam-shots"));
}

#[test]
fn test_save_dir_ignores_blank_directory() {
    let blank = Config {
        save_directory: Some("   ".to_string()),
        ..Config::default()
    };
    assert_eq!(blank.save_dir(), Config::default().save_dir());
}

#[test]
fn test_theme_order_matches_dropdown() {
    // Settings dropdown indexes into this list
    assert_eq!(
        AppTheme::ALL,
        [AppTheme::System, AppTheme::Dark, AppTheme::Light]
    );
}

#[test]
fn test_oversized_filter_count_is_clamped() {
    let config = Config {
        filter_count: usize::MAX,
        ..Config::default()
    };
    assert_eq!(
        config.procedural_count(),
        pinkcam::constants::filters::MAX_PROCEDURAL_COUNT
    );
    assert_eq!(Config::default().procedural_count(), 120);
}

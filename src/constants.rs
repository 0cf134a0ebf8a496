// SPDX-License-Identifier: GPL-3.0-only

//! Application-wide constants

use std::time::Duration;

/// Camera request defaults
pub mod camera {
    /// Preferred capture width requested from the camera
    pub const PREFERRED_WIDTH: u32 = 1280;
    /// Preferred capture height requested from the camera
    pub const PREFERRED_HEIGHT: u32 = 720;
    /// Frames buffered between the camera thread and the UI before dropping
    pub const FRAME_CHANNEL_CAPACITY: usize = 4;
    /// Frame rate of the virtual test-pattern camera
    pub const VIRTUAL_FPS: u64 = 30;
}

/// GStreamer pipeline tuning
pub mod pipeline {
    /// Maximum buffers held by the appsink
    pub const MAX_BUFFERS: u32 = 2;
    /// Seconds to wait for the pipeline to reach PLAYING
    pub const START_TIMEOUT_SECS: u64 = 5;
    /// Log frame statistics every N frames
    pub const FRAME_LOG_INTERVAL: u64 = 60;
}

/// Filter library generation
pub mod filters {
    /// Number of procedural presets generated after the fixed presets
    pub const DEFAULT_PROCEDURAL_COUNT: usize = 120;
    /// Upper bound on procedural presets; larger requests are clamped
    pub const MAX_PROCEDURAL_COUNT: usize = 1000;
    /// Number of hand-tuned presets at the start of the library
    pub const FIXED_PRESET_COUNT: usize = 3;
    /// Hue step between consecutive procedural presets, in degrees
    pub const HUE_STEP_DEGREES: f64 = 13.7;
    /// Base saturation of procedural presets, in percent
    pub const SATURATION_BASE: u32 = 100;
    /// Saturation increment per `i % 5` step, in percent
    pub const SATURATION_STEP: u32 = 40;
    /// Base contrast of procedural presets, in percent
    pub const CONTRAST_BASE: u32 = 90;
    /// Contrast increment per `i % 3` step, in percent
    pub const CONTRAST_STEP: u32 = 20;
    /// Procedural preset names are numbered from this offset
    pub const PRESET_NUMBER_OFFSET: usize = 1000;
}

/// Photo capture and encoding
pub mod capture {
    /// JPEG quality for captured photos (0-100)
    pub const JPEG_QUALITY: u8 = 90;
    /// Prefix of downloaded photo file names
    pub const DOWNLOAD_PREFIX: &str = "pinkcam";
    /// Longest edge of gallery thumbnails, in pixels
    pub const THUMBNAIL_EDGE: u32 = 256;
}

/// How long the flash overlay stays at full opacity
pub const FLASH_DURATION: Duration = Duration::from_millis(100);

/// Frames in the fade and zoom-in of a new gallery item
pub const ENTRANCE_STEPS: u32 = 10;
/// Delay between entrance animation frames
pub const ENTRANCE_FRAME: Duration = Duration::from_millis(25);

/// UI layout constants
pub mod ui {
    /// Outer diameter of the shutter button
    pub const SHUTTER_OUTER: f32 = 72.0;
    /// Inner diameter of the shutter button
    pub const SHUTTER_INNER: f32 = 58.0;
    /// Filter tile width
    pub const TILE_WIDTH: f32 = 80.0;
    /// Filter tile swatch height
    pub const TILE_HEIGHT: f32 = 96.0;
    /// Swatch pixel width (rendered once per tile)
    pub const SWATCH_WIDTH: u32 = 40;
    /// Swatch pixel height (rendered once per tile)
    pub const SWATCH_HEIGHT: u32 = 48;
    /// Corner radius of filter tiles
    pub const TILE_RADIUS: f32 = 16.0;
    /// Width of the gallery column
    pub const GALLERY_WIDTH: f32 = 300.0;
    /// Gallery grid columns
    pub const GALLERY_COLUMNS: usize = 2;
    /// Scale a new gallery thumbnail starts its entrance at
    pub const ENTRANCE_START_SCALE: f32 = 0.85;
    /// Live preview is rendered at 1/N of the camera resolution
    pub const PREVIEW_DOWNSCALE: u32 = 2;
}

/// Pink tile background (Tailwind pink-200) used for filter swatches
pub const SWATCH_COLOR: [u8; 4] = [251, 207, 232, 255];

// SPDX-License-Identifier: GPL-3.0-only

//! Application state management

use crate::backends::camera::types::{CameraBackendType, CameraFrame};
use crate::config::Config;
use crate::errors::{CameraError, PhotoError};
use crate::flash::FlashTicket;
use crate::gallery::{EntranceAnimation, EntranceTicket};
use crate::pipelines::photo::CpuSurface;
use crate::studio::Studio;
use cosmic::cosmic_config;
use cosmic::widget::about::About;
use cosmic::widget::image;
use std::collections::HashMap;
use std::path::PathBuf;

/// Data passed to the application on startup
#[derive(Debug, Clone, Default)]
pub struct AppFlags {
    /// Camera backend chosen on the command line, overriding the config
    pub backend_override: Option<CameraBackendType>,
}

/// Camera acquisition progress
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum CameraStatus {
    /// Stream requested, no answer yet
    #[default]
    Starting,
    /// Frames are flowing from the named device
    Streaming(String),
    /// The stream was refused; not retried for this session
    Unavailable,
}

/// Pages shown in the context drawer
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub enum ContextPage {
    #[default]
    About,
    Settings,
}

/// The application model stores app-specific state used to describe its interface and
/// drive its logic.
pub struct AppModel {
    /// Application state which is managed by the COSMIC runtime.
    pub core: cosmic::Core,
    /// Display a context drawer with the designated page if defined.
    pub context_page: ContextPage,
    /// The about page for this app.
    pub about: About,
    /// Configuration data that persists between application runs.
    pub config: Config,
    /// Config handler for saving settings
    pub config_handler: Option<cosmic_config::Config>,

    /// Session state: library, selection, gallery, counter, flash
    pub studio: Studio,
    /// Surface the capture pipeline draws into
    pub surface: CpuSurface,
    /// Backend used for the camera subscription
    pub backend_type: CameraBackendType,
    pub camera_status: CameraStatus,

    /// Latest filtered preview frame
    pub preview: Option<image::Handle>,
    /// One pre-rendered swatch per library entry
    pub filter_swatches: Vec<image::Handle>,
    /// Gallery thumbnails keyed by timestamp id
    pub gallery_thumbnails: HashMap<i64, image::Handle>,
    /// Fade and zoom-in of the newest gallery item
    pub gallery_entrance: EntranceAnimation,
    /// Gallery item under the pointer (shows its download button)
    pub hovered_item: Option<i64>,
    /// Where the last download went
    pub last_download: Option<PathBuf>,

    /// Theme dropdown labels
    pub theme_dropdown_options: Vec<String>,
}

/// Messages emitted by the application and its widgets.
#[derive(Debug, Clone)]
pub enum Message {
    // ===== UI Navigation =====
    LaunchUrl(String),
    ToggleContextPage(ContextPage),

    // ===== Camera =====
    /// Stream opened on the named device
    CameraStarted(String),
    CameraFrame(CameraFrame),
    CameraUnavailable(CameraError),
    DismissCameraError,

    // ===== Filters =====
    SelectFilter(usize),

    // ===== Capture =====
    Capture,
    FlashSettled(FlashTicket),

    // ===== Gallery =====
    /// Next frame of the newest item's entrance
    GalleryEntranceFrame(EntranceTicket),
    HoverGalleryItem(i64),
    LeaveGalleryItem(i64),
    DownloadPhoto(i64),
    PhotoDownloaded(Result<PathBuf, PhotoError>),

    // ===== Settings =====
    ToggleFlash,
    ToggleMirrorPreview,
    SetAppTheme(usize),
    UpdateConfig(Config),
}

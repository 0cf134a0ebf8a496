// SPDX-License-Identifier: GPL-3.0-only

//! Message update handling
//!
//! The main `update()` function only dispatches; the handling code lives in
//! the `handlers` submodules, grouped by functional domain.
//!
//! # Handler Modules
//!
//! - `handlers::ui`: Context drawer and external links
//! - `handlers::camera`: Stream lifecycle and preview frames
//! - `handlers::filter`: Filter selection
//! - `handlers::capture`: Shutter and flash
//! - `handlers::gallery`: Hover and download
//! - `handlers::system`: Settings and config updates

use crate::app::state::{AppModel, Message};
use cosmic::Task;

impl AppModel {
    /// Main message handler - routes messages to appropriate handler methods.
    pub fn update(&mut self, message: Message) -> Task<cosmic::Action<Message>> {
        match message {
            // ===== UI Navigation =====
            Message::LaunchUrl(url) => self.handle_launch_url(url),
            Message::ToggleContextPage(page) => self.handle_toggle_context_page(page),

            // ===== Camera =====
            Message::CameraStarted(device) => self.handle_camera_started(device),
            Message::CameraFrame(frame) => self.handle_camera_frame(frame),
            Message::CameraUnavailable(err) => self.handle_camera_unavailable(err),
            Message::DismissCameraError => self.handle_dismiss_camera_error(),

            // ===== Filters =====
            Message::SelectFilter(index) => self.handle_select_filter(index),

            // ===== Capture =====
            Message::Capture => self.handle_capture(),
            Message::FlashSettled(ticket) => self.handle_flash_settled(ticket),

            // ===== Gallery =====
            Message::GalleryEntranceFrame(ticket) => self.handle_gallery_entrance_frame(ticket),
            Message::HoverGalleryItem(id) => self.handle_hover_gallery_item(id),
            Message::LeaveGalleryItem(id) => self.handle_leave_gallery_item(id),
            Message::DownloadPhoto(id) => self.handle_download_photo(id),
            Message::PhotoDownloaded(result) => self.handle_photo_downloaded(result),

            // ===== Settings =====
            Message::ToggleFlash => self.handle_toggle_flash(),
            Message::ToggleMirrorPreview => self.handle_toggle_mirror_preview(),
            Message::SetAppTheme(index) => self.handle_set_app_theme(index),
            Message::UpdateConfig(config) => self.handle_update_config(config),
        }
    }
}

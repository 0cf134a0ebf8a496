// SPDX-License-Identifier: GPL-3.0-only

//! Camera stream handlers
//!
//! Handles stream start, incoming frames, acquisition failure and the
//! preview mirror setting.

use crate::app::state::{AppModel, CameraStatus, Message};
use crate::backends::camera::types::CameraFrame;
use crate::constants::ui::PREVIEW_DOWNSCALE;
use crate::errors::CameraError;
use crate::pipelines::preview::render_preview;
use cosmic::Task;
use cosmic::widget::image;
use tracing::{error, info, trace};

impl AppModel {
    // =========================================================================
    // Camera Stream Handlers
    // =========================================================================

    pub(crate) fn handle_camera_started(&mut self, device: String) -> Task<cosmic::Action<Message>> {
        info!(device = %device, "Camera stream started");
        self.camera_status = CameraStatus::Streaming(device);
        Task::none()
    }

    pub(crate) fn handle_camera_frame(&mut self, frame: CameraFrame) -> Task<cosmic::Action<Message>> {
        trace!(
            width = frame.width,
            height = frame.height,
            latency_us = frame.captured_at.elapsed().as_micros(),
            "Frame delivered to UI"
        );
        self.studio.set_frame(frame);
        self.refresh_preview();
        Task::none()
    }

    pub(crate) fn handle_camera_unavailable(
        &mut self,
        err: CameraError,
    ) -> Task<cosmic::Action<Message>> {
        self.studio.report_camera_unavailable(err);
        self.camera_status = CameraStatus::Unavailable;
        self.preview = None;
        Task::none()
    }

    pub(crate) fn handle_dismiss_camera_error(&mut self) -> Task<cosmic::Action<Message>> {
        self.studio.dismiss_camera_error();
        Task::none()
    }

    pub(crate) fn handle_toggle_mirror_preview(&mut self) -> Task<cosmic::Action<Message>> {
        use cosmic::cosmic_config::CosmicConfigEntry;

        self.config.mirror_preview = !self.config.mirror_preview;
        info!(
            mirror_preview = self.config.mirror_preview,
            "Mirror preview toggled"
        );

        if let Some(handler) = self.config_handler.as_ref()
            && let Err(err) = self.config.write_entry(handler)
        {
            error!(?err, "Failed to save mirror preview setting");
        }
        self.refresh_preview();
        Task::none()
    }

    /// Re-render the preview from the latest frame with the active filter
    pub(crate) fn refresh_preview(&mut self) {
        let Some(frame) = self.studio.latest_frame() else {
            return;
        };
        let filter = self.studio.preview_expression().compile();
        self.preview = render_preview(frame, &filter, self.config.mirror_preview, PREVIEW_DOWNSCALE)
            .map(|preview| image::Handle::from_rgba(preview.width, preview.height, preview.rgba));
    }
}

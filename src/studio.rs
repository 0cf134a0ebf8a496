// SPDX-License-Identifier: GPL-3.0-only

//! Studio state
//!
//! [`Studio`] owns everything a session accumulates: the filter library,
//! the selected filter, the latest camera frame, the gallery, the photo
//! counter and the flash overlay. The UI holds exactly one and mutates it
//! only from its update loop.
//!
//! After every operation `gallery.len() == session.photo_count()`.

use crate::backends::camera::types::CameraFrame;
use crate::errors::{CameraError, PhotoError};
use crate::filters::{FilterDescriptor, FilterExpression, FilterLibrary};
use crate::flash::{FlashOverlay, FlashTicket};
use crate::gallery::{Gallery, GalleryItem};
use crate::pipelines::photo::{CapturePipeline, RenderSurface};
use crate::session::SessionState;
use tracing::{debug, error, info, warn};

/// Result of one shutter press
#[derive(Debug)]
pub struct CaptureOutcome {
    /// Ticket of the flash pulse, when flash is enabled
    pub flash: Option<FlashTicket>,
    /// Timestamp id of the stored photo
    pub photo: Result<i64, PhotoError>,
}

/// Explicit owner of all session state
#[derive(Debug)]
pub struct Studio {
    library: FilterLibrary,
    session: SessionState,
    gallery: Gallery,
    flash: FlashOverlay,
    pipeline: CapturePipeline,
    active_index: usize,
    preview_expression: FilterExpression,
    latest_frame: Option<CameraFrame>,
    camera_error: Option<CameraError>,
}

impl Studio {
    pub fn new(library: FilterLibrary, flash_enabled: bool, jpeg_quality: u8) -> Self {
        Self {
            library,
            session: SessionState::new(flash_enabled),
            gallery: Gallery::new(),
            flash: FlashOverlay::new(),
            pipeline: CapturePipeline::new(jpeg_quality),
            active_index: 0,
            preview_expression: FilterExpression::identity(),
            latest_frame: None,
            camera_error: None,
        }
    }

    pub fn library(&self) -> &FilterLibrary {
        &self.library
    }

    pub fn session(&self) -> &SessionState {
        &self.session
    }

    pub fn gallery(&self) -> &Gallery {
        &self.gallery
    }

    pub fn flash(&self) -> &FlashOverlay {
        &self.flash
    }

    /// Index of the selected library entry
    pub fn active_index(&self) -> usize {
        self.active_index
    }

    pub fn active_descriptor(&self) -> Option<&FilterDescriptor> {
        self.library.get(self.active_index)
    }

    /// Expression currently applied to the live preview
    pub fn preview_expression(&self) -> &FilterExpression {
        &self.preview_expression
    }

    /// Make library entry `index` the single active filter
    ///
    /// Out-of-range indices are ignored. Returns whether anything changed.
    pub fn select_filter(&mut self, index: usize) -> bool {
        let Some(descriptor) = self.library.get(index) else {
            warn!(index, len = self.library.len(), "Ignoring out-of-range filter selection");
            return false;
        };
        let expression = descriptor.expression.clone();
        debug!(index, name = %descriptor.name, expression = %expression, "Filter selected");

        self.active_index = index;
        self.preview_expression = expression.clone();
        self.session.set_active_filter(expression);
        true
    }

    pub fn set_flash_enabled(&mut self, enabled: bool) {
        self.session.flash_enabled = enabled;
        if !enabled {
            self.flash.cancel();
        }
    }

    /// Remember the most recent camera frame
    pub fn set_frame(&mut self, frame: CameraFrame) {
        self.latest_frame = Some(frame);
    }

    pub fn latest_frame(&self) -> Option<&CameraFrame> {
        self.latest_frame.as_ref()
    }

    /// Record that the camera could not be acquired
    pub fn report_camera_unavailable(&mut self, err: CameraError) {
        error!(error = %err, "Camera unavailable");
        self.camera_error = Some(err);
    }

    /// Why the camera is unavailable, if it is
    pub fn camera_error(&self) -> Option<&CameraError> {
        self.camera_error.as_ref()
    }

    pub fn dismiss_camera_error(&mut self) {
        self.camera_error = None;
    }

    /// Take a photo from the latest frame, stamped with the current time
    pub fn capture(&mut self, surface: &mut dyn RenderSurface) -> CaptureOutcome {
        self.capture_at(surface, chrono::Utc::now().timestamp_millis())
    }

    /// Take a photo from the latest frame, stamped `now_ms`
    ///
    /// The flash fires even when the capture itself fails. A failed capture
    /// leaves the gallery and the counter untouched.
    pub fn capture_at(&mut self, surface: &mut dyn RenderSurface, now_ms: i64) -> CaptureOutcome {
        let flash = self.session.flash_enabled.then(|| self.flash.fire());

        let photo = self
            .pipeline
            .capture(self.latest_frame.as_ref(), self.session.active_filter(), surface)
            .map(|photo| {
                let timestamp_id = self.gallery.next_timestamp_id(now_ms);
                self.gallery.add_item(GalleryItem {
                    image_data: photo.jpeg.into(),
                    timestamp_id,
                    width: photo.width,
                    height: photo.height,
                    thumbnail: photo.thumbnail,
                });
                let count = self.session.record_capture();
                info!(timestamp_id, count, "Photo added to gallery");
                timestamp_id
            });

        if let Err(err) = &photo {
            warn!(error = %err, "Capture rejected");
        }

        CaptureOutcome { flash, photo }
    }

    /// Clear the flash overlay if `ticket` is still current
    pub fn settle_flash(&mut self, ticket: FlashTicket) -> bool {
        self.flash.settle(ticket)
    }
}

impl Default for Studio {
    fn default() -> Self {
        Self::new(
            FilterLibrary::default(),
            true,
            crate::constants::capture::JPEG_QUALITY,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipelines::photo::CpuSurface;

    fn frame() -> CameraFrame {
        CameraFrame::from_rgba(8, 4, [120u8, 80, 200, 255].repeat(32))
    }

    #[test]
    fn test_selection_is_exclusive() {
        let mut studio = Studio::new(FilterLibrary::generate(4), false, 90);
        assert!(studio.select_filter(1));
        assert!(studio.select_filter(5));
        assert_eq!(studio.active_index(), 5);
        let expected = &studio.library().get(5).unwrap().expression;
        assert_eq!(studio.session().active_filter(), expected);
        assert_eq!(studio.preview_expression(), expected);
    }

    #[test]
    fn test_out_of_range_selection_is_ignored() {
        let mut studio = Studio::new(FilterLibrary::generate(0), false, 90);
        studio.select_filter(2);
        assert!(!studio.select_filter(3));
        assert_eq!(studio.active_index(), 2);
    }

    #[test]
    fn test_capture_keeps_invariant() {
        let mut studio = Studio::new(FilterLibrary::generate(2), false, 90);
        studio.set_frame(frame());
        let mut surface = CpuSurface::new();
        for i in 0..3 {
            let outcome = studio.capture_at(&mut surface, 1_000);
            assert_eq!(outcome.photo.unwrap(), 1_000 + i);
            assert!(outcome.flash.is_none());
            assert_eq!(studio.gallery().len() as u64, studio.session().photo_count());
        }
        assert_eq!(studio.gallery().newest().unwrap().timestamp_id, 1_002);
    }

    #[test]
    fn test_capture_without_frame_still_flashes() {
        let mut studio = Studio::new(FilterLibrary::generate(2), true, 90);
        let mut surface = CpuSurface::new();
        let outcome = studio.capture_at(&mut surface, 5);
        assert_eq!(outcome.photo, Err(PhotoError::NoFrameAvailable));
        assert!(outcome.flash.is_some());
        assert!(studio.flash().is_visible());
        assert_eq!(studio.session().photo_count(), 0);
        assert!(studio.gallery().is_empty());
    }

    #[test]
    fn test_disabling_flash_clears_overlay() {
        let mut studio = Studio::new(FilterLibrary::generate(0), true, 90);
        studio.set_frame(frame());
        let ticket = studio.capture(&mut CpuSurface::new()).flash.unwrap();
        studio.set_flash_enabled(false);
        assert!(!studio.flash().is_visible());
        assert!(!studio.settle_flash(ticket));
    }
}

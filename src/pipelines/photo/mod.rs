// SPDX-License-Identifier: GPL-3.0-only

//! Photo capture pipeline
//!
//! ```text
//! latest frame → resize surface → set filter → mirror → draw → JPEG → thumbnail
//! ```
//!
//! The pipeline is synchronous and stateless apart from the encoder quality;
//! flash feedback, gallery insertion and counting belong to the
//! [`Studio`](crate::studio::Studio) that drives it.

pub mod encoding;
pub mod surface;

pub use encoding::{PhotoEncoder, make_thumbnail};
pub use surface::{CpuSurface, RenderSurface, Transform};

use crate::backends::camera::types::CameraFrame;
use crate::errors::PhotoError;
use crate::filters::FilterExpression;
use crate::gallery::Thumbnail;
use tracing::{debug, info};

/// A filtered, mirrored and encoded still
#[derive(Debug, Clone)]
pub struct CapturedPhoto {
    pub jpeg: Vec<u8>,
    pub width: u32,
    pub height: u32,
    pub thumbnail: Thumbnail,
}

/// Renders frames into JPEG stills
#[derive(Debug, Clone, Copy, Default)]
pub struct CapturePipeline {
    encoder: PhotoEncoder,
}

impl CapturePipeline {
    pub fn new(jpeg_quality: u8) -> Self {
        Self {
            encoder: PhotoEncoder::new(jpeg_quality),
        }
    }

    /// Render `frame` through `filter`, mirrored, into a JPEG
    ///
    /// Fails with [`PhotoError::NoFrameAvailable`] when there is no frame yet
    /// or it has a zero dimension.
    pub fn capture(
        &self,
        frame: Option<&CameraFrame>,
        filter: &FilterExpression,
        surface: &mut dyn RenderSurface,
    ) -> Result<CapturedPhoto, PhotoError> {
        let frame = frame
            .filter(|f| f.has_pixels())
            .ok_or(PhotoError::NoFrameAvailable)?;

        debug!(width = frame.width, height = frame.height, filter = %filter, "Rendering capture");

        surface.resize(frame.width, frame.height);
        let (width, height) = (surface.width(), surface.height());
        surface.set_filter(filter);
        surface.translate(width as f32, 0.0);
        surface.scale(-1.0, 1.0);
        surface.draw_frame(frame)?;

        let jpeg = surface.export_jpeg(self.encoder.quality())?;
        let thumbnail = make_thumbnail(surface.pixels(), width, height)?;

        info!(width, height, size = jpeg.len(), "Photo captured");

        Ok(CapturedPhoto {
            jpeg,
            width,
            height,
            thumbnail,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capture_mirrors_frame() {
        // Left half white, right half black
        let mut data = Vec::new();
        for _ in 0..16 {
            for x in 0..32 {
                let v = if x < 16 { 255 } else { 0 };
                data.extend_from_slice(&[v, v, v, 255]);
            }
        }
        let frame = CameraFrame::from_rgba(32, 16, data);
        let mut surface = CpuSurface::new();
        let photo = CapturePipeline::default()
            .capture(Some(&frame), &FilterExpression::identity(), &mut surface)
            .unwrap();

        assert_eq!((photo.width, photo.height), (32, 16));
        assert_eq!((surface.width(), surface.height()), (32, 16));
        assert_eq!(surface.pixels()[0], 0);
        assert_eq!(surface.pixels()[(31 * 4) as usize], 255);
        assert_eq!(&photo.jpeg[..2], &[0xFF, 0xD8]);
    }

    #[test]
    fn test_capture_without_frame() {
        let mut surface = CpuSurface::new();
        let pipeline = CapturePipeline::default();
        let filter = FilterExpression::identity();
        assert!(matches!(
            pipeline.capture(None, &filter, &mut surface),
            Err(PhotoError::NoFrameAvailable)
        ));
        let empty = CameraFrame::from_rgba(0, 0, Vec::new());
        assert!(matches!(
            pipeline.capture(Some(&empty), &filter, &mut surface),
            Err(PhotoError::NoFrameAvailable)
        ));
    }
}

// SPDX-License-Identifier: GPL-3.0-only

//! JPEG encoding and thumbnails for captured photos

use crate::constants::capture::{JPEG_QUALITY, THUMBNAIL_EDGE};
use crate::errors::PhotoError;
use crate::gallery::Thumbnail;
use image::RgbaImage;
use std::sync::Arc;
use tracing::debug;

/// Photo encoder
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhotoEncoder {
    quality: u8,
}

impl PhotoEncoder {
    /// Create an encoder with the given JPEG quality (clamped to 1-100)
    pub fn new(quality: u8) -> Self {
        Self {
            quality: quality.clamp(1, 100),
        }
    }

    pub fn quality(&self) -> u8 {
        self.quality
    }

    /// Encode tightly packed RGBA as JPEG
    ///
    /// JPEG has no alpha channel, so pixels are composited onto black first.
    pub fn encode_jpeg(&self, rgba: &[u8], width: u32, height: u32) -> Result<Vec<u8>, PhotoError> {
        if width == 0 || height == 0 {
            return Err(PhotoError::NoFrameAvailable);
        }
        let expected = (width as usize) * (height as usize) * 4;
        if rgba.len() < expected {
            return Err(PhotoError::EncodingFailed(format!(
                "buffer holds {} bytes, {}x{} needs {}",
                rgba.len(),
                width,
                height,
                expected
            )));
        }

        let rgb: Vec<u8> = rgba[..expected]
            .chunks_exact(4)
            .flat_map(|px| {
                let a = px[3] as u32;
                [
                    (px[0] as u32 * a / 255) as u8,
                    (px[1] as u32 * a / 255) as u8,
                    (px[2] as u32 * a / 255) as u8,
                ]
            })
            .collect();

        let mut buffer = Vec::new();
        let mut cursor = std::io::Cursor::new(&mut buffer);
        let mut encoder =
            image::codecs::jpeg::JpegEncoder::new_with_quality(&mut cursor, self.quality);
        encoder.encode(&rgb, width, height, image::ExtendedColorType::Rgb8)?;

        debug!(width, height, size = buffer.len(), quality = self.quality, "Encoded JPEG");
        Ok(buffer)
    }
}

impl Default for PhotoEncoder {
    fn default() -> Self {
        Self::new(JPEG_QUALITY)
    }
}

/// Downscale an RGBA image so its longest edge is at most [`THUMBNAIL_EDGE`]
pub fn make_thumbnail(rgba: &[u8], width: u32, height: u32) -> Result<Thumbnail, PhotoError> {
    let image = RgbaImage::from_raw(width, height, rgba.to_vec()).ok_or_else(|| {
        PhotoError::EncodingFailed(format!("invalid {}x{} RGBA buffer", width, height))
    })?;

    let longest = width.max(height);
    let thumb = if longest <= THUMBNAIL_EDGE {
        image
    } else {
        let tw = ((width as u64 * THUMBNAIL_EDGE as u64) / longest as u64).max(1) as u32;
        let th = ((height as u64 * THUMBNAIL_EDGE as u64) / longest as u64).max(1) as u32;
        image::imageops::thumbnail(&image, tw, th)
    };

    Ok(Thumbnail {
        width: thumb.width(),
        height: thumb.height(),
        rgba: Arc::from(thumb.into_raw()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quality_is_clamped() {
        assert_eq!(PhotoEncoder::new(0).quality(), 1);
        assert_eq!(PhotoEncoder::new(250).quality(), 100);
        assert_eq!(PhotoEncoder::default().quality(), 90);
    }

    #[test]
    fn test_encode_produces_jpeg() {
        let rgba = [200u8, 50, 120, 255].repeat(16 * 8);
        let jpeg = PhotoEncoder::default().encode_jpeg(&rgba, 16, 8).unwrap();
        assert_eq!(&jpeg[..2], &[0xFF, 0xD8]);
        let decoded = image::load_from_memory(&jpeg).unwrap();
        assert_eq!((decoded.width(), decoded.height()), (16, 8));
    }

    #[test]
    fn test_encode_rejects_empty_and_short_buffers() {
        let encoder = PhotoEncoder::default();
        assert_eq!(encoder.encode_jpeg(&[], 0, 4), Err(PhotoError::NoFrameAvailable));
        assert!(matches!(
            encoder.encode_jpeg(&[0; 8], 4, 4),
            Err(PhotoError::EncodingFailed(_))
        ));
    }

    #[test]
    fn test_thumbnail_keeps_aspect() {
        let rgba = vec![255u8; 1280 * 720 * 4];
        let thumb = make_thumbnail(&rgba, 1280, 720).unwrap();
        assert_eq!((thumb.width, thumb.height), (256, 144));
        assert_eq!(thumb.rgba.len(), 256 * 144 * 4);

        let small = make_thumbnail(&[0u8; 16], 2, 2).unwrap();
        assert_eq!((small.width, small.height), (2, 2));
    }
}

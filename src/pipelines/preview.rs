// SPDX-License-Identifier: GPL-3.0-only

//! Live preview rendering
//!
//! The preview shows what the next capture will look like: the active filter
//! applied and, when mirroring is on, flipped horizontally. It is rendered at
//! a fraction of the camera resolution with nearest-neighbour sampling.

use crate::backends::camera::types::CameraFrame;
use crate::filters::CompiledFilter;

/// One rendered preview image
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewImage {
    pub width: u32,
    pub height: u32,
    pub rgba: Vec<u8>,
}

/// Render a preview of `frame`, downscaled by `downscale` (1 = full size)
pub fn render_preview(
    frame: &CameraFrame,
    filter: &CompiledFilter,
    mirror: bool,
    downscale: u32,
) -> Option<PreviewImage> {
    if !frame.has_pixels() {
        return None;
    }
    let step = downscale.max(1);
    let width = (frame.width / step).max(1);
    let height = (frame.height / step).max(1);

    let mut rgba = Vec::with_capacity((width * height * 4) as usize);
    for y in 0..height {
        let sy = (y * step).min(frame.height - 1);
        for x in 0..width {
            let col = if mirror { width - 1 - x } else { x };
            let sx = (col * step).min(frame.width - 1);
            rgba.extend_from_slice(&filter.apply_pixel(frame.pixel(sx, sy)));
        }
    }

    Some(PreviewImage {
        width,
        height,
        rgba,
    })
}

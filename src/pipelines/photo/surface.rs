// SPDX-License-Identifier: GPL-3.0-only

//! Drawing surfaces for photo capture
//!
//! A surface mirrors the small 2D-canvas subset the capture pipeline needs:
//! a pixel buffer with a current filter and an affine transform. Frames are
//! drawn at the origin through both, then the buffer is exported as JPEG.

use super::encoding::PhotoEncoder;
use crate::backends::camera::types::CameraFrame;
use crate::errors::PhotoError;
use crate::filters::{CompiledFilter, FilterExpression};

/// 2D affine transform in canvas order
///
/// Maps `(x, y)` to `(a*x + c*y + e, b*x + d*y + f)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub a: f32,
    pub b: f32,
    pub c: f32,
    pub d: f32,
    pub e: f32,
    pub f: f32,
}

impl Transform {
    pub const IDENTITY: Self = Self {
        a: 1.0,
        b: 0.0,
        c: 0.0,
        d: 1.0,
        e: 0.0,
        f: 0.0,
    };

    /// Post-multiply by a translation
    pub fn translate(&mut self, tx: f32, ty: f32) {
        self.e += self.a * tx + self.c * ty;
        self.f += self.b * tx + self.d * ty;
    }

    /// Post-multiply by a scale
    pub fn scale(&mut self, sx: f32, sy: f32) {
        self.a *= sx;
        self.b *= sx;
        self.c *= sy;
        self.d *= sy;
    }

    /// Map a surface point back to source coordinates
    fn invert_point(&self, x: f32, y: f32) -> Option<(f32, f32)> {
        let det = self.a * self.d - self.b * self.c;
        if det == 0.0 {
            return None;
        }
        let (dx, dy) = (x - self.e, y - self.f);
        Some((
            (self.d * dx - self.c * dy) / det,
            (-self.b * dx + self.a * dy) / det,
        ))
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Drawing target of the capture pipeline
pub trait RenderSurface {
    /// Resize the surface, clearing pixels and resetting filter and transform
    fn resize(&mut self, width: u32, height: u32);

    /// Filter applied to subsequent draws
    fn set_filter(&mut self, expression: &FilterExpression);

    fn translate(&mut self, tx: f32, ty: f32);

    fn scale(&mut self, sx: f32, sy: f32);

    /// Draw a frame at the origin, at its native size
    fn draw_frame(&mut self, frame: &CameraFrame) -> Result<(), PhotoError>;

    /// Encode the surface contents as JPEG
    fn export_jpeg(&self, quality: u8) -> Result<Vec<u8>, PhotoError>;

    /// Current size in pixels, as set by the last [`resize`](Self::resize)
    fn width(&self) -> u32;

    fn height(&self) -> u32;

    /// Tightly packed RGBA contents
    fn pixels(&self) -> &[u8];
}

/// Software RGBA surface
#[derive(Debug, Clone, Default)]
pub struct CpuSurface {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
    filter: CompiledFilter,
    transform: Transform,
}

impl CpuSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn transform(&self) -> Transform {
        self.transform
    }
}

impl RenderSurface for CpuSurface {
    fn resize(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
        self.pixels.clear();
        self.pixels.resize((width as usize) * (height as usize) * 4, 0);
        self.filter = CompiledFilter::default();
        self.transform = Transform::IDENTITY;
    }

    fn set_filter(&mut self, expression: &FilterExpression) {
        self.filter = expression.compile();
    }

    fn translate(&mut self, tx: f32, ty: f32) {
        self.transform.translate(tx, ty);
    }

    fn scale(&mut self, sx: f32, sy: f32) {
        self.transform.scale(sx, sy);
    }

    fn draw_frame(&mut self, frame: &CameraFrame) -> Result<(), PhotoError> {
        if !frame.has_pixels() {
            return Err(PhotoError::NoFrameAvailable);
        }

        let (fw, fh) = (frame.width as f32, frame.height as f32);
        for y in 0..self.height {
            for x in 0..self.width {
                // Sample at the pixel centre
                let Some((sx, sy)) = self
                    .transform
                    .invert_point(x as f32 + 0.5, y as f32 + 0.5)
                else {
                    return Ok(());
                };
                if sx < 0.0 || sy < 0.0 || sx >= fw || sy >= fh {
                    continue;
                }
                let src = frame.pixel(sx as u32, sy as u32);
                let i = ((y * self.width + x) * 4) as usize;
                self.pixels[i..i + 4].copy_from_slice(&self.filter.apply_pixel(src));
            }
        }
        Ok(())
    }

    fn export_jpeg(&self, quality: u8) -> Result<Vec<u8>, PhotoError> {
        PhotoEncoder::new(quality).encode_jpeg(&self.pixels, self.width, self.height)
    }

    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn pixels(&self) -> &[u8] {
        &self.pixels
    }
}

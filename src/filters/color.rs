// SPDX-License-Identifier: GPL-3.0-only

//! Colour-matrix evaluation of filter expressions
//!
//! Each operation maps to the 3x3 matrix (plus offset) defined for the CSS
//! filter shorthands. Stages run in expression order and every stage clamps
//! to the displayable range, so `brightness(2) contrast(0.5)` differs from
//! `contrast(0.5) brightness(2)` exactly as it does in a browser.

use super::{FilterExpression, FilterOp};

/// Rec. 709 luma weights used by the CSS saturate/hue-rotate matrices
const LUMA_R: f32 = 0.213;
const LUMA_G: f32 = 0.715;
const LUMA_B: f32 = 0.072;

/// Affine colour transform: `out = m * rgb + offset`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorMatrix {
    m: [[f32; 3]; 3],
    offset: [f32; 3],
}

impl ColorMatrix {
    pub fn identity() -> Self {
        Self {
            m: [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]],
            offset: [0.0; 3],
        }
    }

    fn scale(factor: f32) -> Self {
        Self {
            m: [[factor, 0.0, 0.0], [0.0, factor, 0.0], [0.0, 0.0, factor]],
            offset: [0.0; 3],
        }
    }

    fn saturate(s: f32) -> Self {
        Self {
            m: [
                [LUMA_R + 0.787 * s, LUMA_G - 0.715 * s, LUMA_B - 0.072 * s],
                [LUMA_R - 0.213 * s, LUMA_G + 0.285 * s, LUMA_B - 0.072 * s],
                [LUMA_R - 0.213 * s, LUMA_G - 0.715 * s, LUMA_B + 0.928 * s],
            ],
            offset: [0.0; 3],
        }
    }

    fn hue_rotate(degrees: f32) -> Self {
        let (sin, cos) = degrees.to_radians().sin_cos();
        Self {
            m: [
                [
                    LUMA_R + cos * 0.787 - sin * 0.213,
                    LUMA_G - cos * 0.715 - sin * 0.715,
                    LUMA_B - cos * 0.072 + sin * 0.928,
                ],
                [
                    LUMA_R - cos * 0.213 + sin * 0.143,
                    LUMA_G + cos * 0.285 + sin * 0.140,
                    LUMA_B - cos * 0.072 - sin * 0.283,
                ],
                [
                    LUMA_R - cos * 0.213 - sin * 0.787,
                    LUMA_G - cos * 0.715 + sin * 0.715,
                    LUMA_B + cos * 0.928 + sin * 0.072,
                ],
            ],
            offset: [0.0; 3],
        }
    }

    fn sepia(amount: f32) -> Self {
        let inv = 1.0 - amount.clamp(0.0, 1.0);
        Self {
            m: [
                [0.393 + 0.607 * inv, 0.769 - 0.769 * inv, 0.189 - 0.189 * inv],
                [0.349 - 0.349 * inv, 0.686 + 0.314 * inv, 0.168 - 0.168 * inv],
                [0.272 - 0.272 * inv, 0.534 - 0.534 * inv, 0.131 + 0.869 * inv],
            ],
            offset: [0.0; 3],
        }
    }

    fn contrast(c: f32) -> Self {
        let mut matrix = Self::scale(c);
        matrix.offset = [0.5 - 0.5 * c; 3];
        matrix
    }

    /// Matrix for a single filter operation
    pub fn for_op(op: &FilterOp) -> Self {
        match op {
            FilterOp::HueRotate(deg) => Self::hue_rotate(*deg as f32),
            FilterOp::Saturate(a) => Self::saturate(a.factor() as f32),
            FilterOp::Contrast(a) => Self::contrast(a.factor() as f32),
            FilterOp::Brightness(a) => Self::scale(a.factor() as f32),
            FilterOp::Sepia(a) => Self::sepia(a.factor() as f32),
        }
    }

    /// Apply to a normalized RGB triple, clamping the result to [0, 1]
    #[inline]
    pub fn apply(&self, rgb: [f32; 3]) -> [f32; 3] {
        let mut out = [0.0f32; 3];
        for (row, value) in out.iter_mut().enumerate() {
            let m = &self.m[row];
            *value = (m[0] * rgb[0] + m[1] * rgb[1] + m[2] * rgb[2] + self.offset[row])
                .clamp(0.0, 1.0);
        }
        out
    }
}

/// A filter expression ready for per-pixel evaluation
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CompiledFilter {
    stages: Vec<ColorMatrix>,
}

impl CompiledFilter {
    pub fn new(expression: &FilterExpression) -> Self {
        Self {
            stages: expression.ops().iter().map(ColorMatrix::for_op).collect(),
        }
    }

    pub fn is_identity(&self) -> bool {
        self.stages.is_empty()
    }

    /// Filter one RGBA pixel; alpha passes through unchanged
    #[inline]
    pub fn apply_pixel(&self, px: [u8; 4]) -> [u8; 4] {
        if self.stages.is_empty() {
            return px;
        }
        let mut rgb = [
            px[0] as f32 / 255.0,
            px[1] as f32 / 255.0,
            px[2] as f32 / 255.0,
        ];
        for stage in &self.stages {
            rgb = stage.apply(rgb);
        }
        [
            (rgb[0] * 255.0).round() as u8,
            (rgb[1] * 255.0).round() as u8,
            (rgb[2] * 255.0).round() as u8,
            px[3],
        ]
    }

    /// Filter a tightly packed RGBA buffer in place
    pub fn apply_in_place(&self, rgba: &mut [u8]) {
        if self.stages.is_empty() {
            return;
        }
        for px in rgba.chunks_exact_mut(4) {
            let out = self.apply_pixel([px[0], px[1], px[2], px[3]]);
            px.copy_from_slice(&out);
        }
    }
}

/// Render a solid swatch of `color` through `expression`
///
/// Used for filter tiles, which show the preset applied to the studio's pink.
pub fn render_swatch(expression: &FilterExpression, color: [u8; 4], width: u32, height: u32) -> Vec<u8> {
    let px = expression.compile().apply_pixel(color);
    px.repeat((width * height) as usize)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filters::Amount;

    fn compile(text: &str) -> CompiledFilter {
        text.parse::<FilterExpression>().unwrap().compile()
    }

    #[test]
    fn test_identity_leaves_pixels_alone() {
        let filter = compile("none");
        assert!(filter.is_identity());
        assert_eq!(filter.apply_pixel([12, 200, 99, 7]), [12, 200, 99, 7]);
    }

    #[test]
    fn test_neutral_factors_are_no_ops() {
        let filter = compile("saturate(100%) contrast(1) brightness(100%) hue-rotate(0deg) sepia(0)");
        for px in [[0, 0, 0, 255], [255, 255, 255, 255], [40, 120, 220, 255]] {
            let out = filter.apply_pixel(px);
            for c in 0..3 {
                assert!((out[c] as i32 - px[c] as i32).abs() <= 1, "{:?} -> {:?}", px, out);
            }
        }
    }

    #[test]
    fn test_saturate_zero_is_greyscale() {
        let out = compile("saturate(0)").apply_pixel([200, 50, 10, 255]);
        assert_eq!(out[0], out[1]);
        assert_eq!(out[1], out[2]);
    }

    #[test]
    fn test_brightness_scales_and_clamps() {
        let filter = compile("brightness(2)");
        assert_eq!(filter.apply_pixel([50, 100, 200, 255]), [100, 200, 255, 255]);
    }

    #[test]
    fn test_contrast_pivots_on_mid_grey() {
        let filter = compile("contrast(0)");
        assert_eq!(filter.apply_pixel([0, 255, 30, 255]), [128, 128, 128, 255]);
    }

    #[test]
    fn test_full_sepia_of_white() {
        let out = compile("sepia(1)").apply_pixel([255, 255, 255, 255]);
        // Red and green rows sum above 1.0 and clamp; blue row sums to 0.937
        assert_eq!(out[0], 255);
        assert_eq!(out[1], 255);
        assert_eq!(out[2], 239);
    }

    #[test]
    fn test_hue_rotation_keeps_grey() {
        let out = compile("hue-rotate(137deg)").apply_pixel([128, 128, 128, 255]);
        for c in 0..3 {
            assert!((out[c] as i32 - 128).abs() <= 1);
        }
    }

    #[test]
    fn test_stage_order_matters() {
        let a = CompiledFilter::new(&FilterExpression::from_ops(vec![
            FilterOp::Brightness(Amount::Number(2.0)),
            FilterOp::Contrast(Amount::Number(0.5)),
        ]));
        let b = CompiledFilter::new(&FilterExpression::from_ops(vec![
            FilterOp::Contrast(Amount::Number(0.5)),
            FilterOp::Brightness(Amount::Number(2.0)),
        ]));
        assert_ne!(a.apply_pixel([200, 200, 200, 255]), b.apply_pixel([200, 200, 200, 255]));
    }

    #[test]
    fn test_swatch_is_uniform() {
        let expr: FilterExpression = "sepia(0.5)".parse().unwrap();
        let swatch = render_swatch(&expr, [251, 207, 232, 255], 3, 2);
        assert_eq!(swatch.len(), 3 * 2 * 4);
        assert!(swatch.chunks_exact(4).all(|px| px == &swatch[..4]));
    }
}

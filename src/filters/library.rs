// SPDX-License-Identifier: GPL-3.0-only

//! Filter preset library
//!
//! Three hand-tuned presets followed by `n` procedural ones. Procedural preset
//! `i` (1-indexed) rotates hue by `i * 13.7` degrees and cycles saturation and
//! contrast through `i % 5` and `i % 3` steps, so neighbours look different and
//! the palette only wraps after many entries. Repeats are not filtered out.

use super::{Amount, FilterDescriptor, FilterExpression, FilterOp};
use crate::constants::filters::{
    CONTRAST_BASE, CONTRAST_STEP, DEFAULT_PROCEDURAL_COUNT, FIXED_PRESET_COUNT,
    HUE_STEP_DEGREES, MAX_PROCEDURAL_COUNT, PRESET_NUMBER_OFFSET, SATURATION_BASE,
    SATURATION_STEP,
};
use tracing::warn;

/// Parameters of one procedural preset
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProceduralParams {
    /// Hue rotation in degrees (not wrapped to 360)
    pub hue_degrees: f64,
    /// Saturation in percent
    pub saturation_percent: u32,
    /// Contrast in percent
    pub contrast_percent: u32,
}

impl ProceduralParams {
    pub fn expression(&self) -> FilterExpression {
        FilterExpression::from_ops(vec![
            FilterOp::HueRotate(self.hue_degrees),
            FilterOp::Saturate(Amount::Percent(self.saturation_percent as f64)),
            FilterOp::Contrast(Amount::Percent(self.contrast_percent as f64)),
        ])
    }
}

/// Parameters of procedural preset `index` (1-indexed)
pub fn procedural_params(index: usize) -> ProceduralParams {
    ProceduralParams {
        hue_degrees: index as f64 * HUE_STEP_DEGREES,
        saturation_percent: SATURATION_BASE + (index % 5) as u32 * SATURATION_STEP,
        contrast_percent: CONTRAST_BASE + (index % 3) as u32 * CONTRAST_STEP,
    }
}

/// Descriptor for procedural preset `index` (1-indexed)
pub fn procedural_descriptor(index: usize) -> FilterDescriptor {
    FilterDescriptor::new(
        format!("Preset #{}", PRESET_NUMBER_OFFSET + index),
        procedural_params(index).expression(),
    )
}

/// Limit a procedural preset count to [`MAX_PROCEDURAL_COUNT`]
pub fn clamp_procedural_count(count: usize) -> usize {
    if count > MAX_PROCEDURAL_COUNT {
        warn!(
            requested = count,
            max = MAX_PROCEDURAL_COUNT,
            "Procedural filter count clamped"
        );
        return MAX_PROCEDURAL_COUNT;
    }
    count
}

/// The hand-tuned presets, in display order
pub fn fixed_presets() -> [FilterDescriptor; FIXED_PRESET_COUNT] {
    [
        FilterDescriptor::new("Original", FilterExpression::identity()),
        FilterDescriptor::new(
            "Cyberpink",
            FilterExpression::from_ops(vec![
                FilterOp::HueRotate(300.0),
                FilterOp::Saturate(Amount::Percent(200.0)),
                FilterOp::Brightness(Amount::Number(1.1)),
            ]),
        ),
        FilterDescriptor::new(
            "Y2K Gloss",
            FilterExpression::from_ops(vec![
                FilterOp::Contrast(Amount::Number(1.2)),
                FilterOp::Brightness(Amount::Number(1.2)),
                FilterOp::Saturate(Amount::Number(0.8)),
                FilterOp::Sepia(Amount::Number(0.2)),
            ]),
        ),
    ]
}

/// Ordered, immutable collection of filter presets
#[derive(Debug, Clone, PartialEq)]
pub struct FilterLibrary {
    descriptors: Vec<FilterDescriptor>,
}

impl FilterLibrary {
    /// Generate the fixed presets followed by `procedural_count` procedural ones
    ///
    /// Counts above [`MAX_PROCEDURAL_COUNT`] are clamped.
    pub fn generate(procedural_count: usize) -> Self {
        let procedural_count = clamp_procedural_count(procedural_count);
        let mut descriptors =
            Vec::with_capacity(FIXED_PRESET_COUNT.saturating_add(procedural_count));
        descriptors.extend(fixed_presets());
        descriptors.extend((1..=procedural_count).map(procedural_descriptor));
        Self { descriptors }
    }

    pub fn len(&self) -> usize {
        self.descriptors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&FilterDescriptor> {
        self.descriptors.get(index)
    }

    pub fn descriptors(&self) -> &[FilterDescriptor] {
        &self.descriptors
    }

    pub fn iter(&self) -> impl Iterator<Item = &FilterDescriptor> {
        self.descriptors.iter()
    }

    /// Index of the first preset with this name (case-insensitive)
    pub fn position_by_name(&self, name: &str) -> Option<usize> {
        self.descriptors
            .iter()
            .position(|d| d.name.eq_ignore_ascii_case(name.trim()))
    }
}

impl Default for FilterLibrary {
    fn default() -> Self {
        Self::generate(DEFAULT_PROCEDURAL_COUNT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_size_is_count_plus_three() {
        for n in [0, 1, 7, 120] {
            assert_eq!(FilterLibrary::generate(n).len(), n + 3);
        }
    }

    #[test]
    fn test_oversized_count_is_clamped() {
        assert_eq!(clamp_procedural_count(MAX_PROCEDURAL_COUNT), MAX_PROCEDURAL_COUNT);
        assert_eq!(clamp_procedural_count(MAX_PROCEDURAL_COUNT + 1), MAX_PROCEDURAL_COUNT);

        let library = FilterLibrary::generate(usize::MAX);
        assert_eq!(library.len(), MAX_PROCEDURAL_COUNT + FIXED_PRESET_COUNT);
        assert_eq!(library.get(library.len() - 1).unwrap().name, "Preset #2000");
    }

    #[test]
    fn test_fixed_presets_lead() {
        let library = FilterLibrary::generate(5);
        let names: Vec<_> = library.iter().take(3).map(|d| d.name.as_str()).collect();
        assert_eq!(names, ["Original", "Cyberpink", "Y2K Gloss"]);
        assert!(library.get(0).unwrap().expression.is_identity());
    }

    #[test]
    fn test_fixed_preset_text() {
        let presets = fixed_presets();
        assert_eq!(
            presets[1].expression.to_string(),
            "hue-rotate(300deg) saturate(200%) brightness(1.1)"
        );
        assert_eq!(
            presets[2].expression.to_string(),
            "contrast(1.2) brightness(1.2) saturate(0.8) sepia(0.2)"
        );
    }

    #[test]
    fn test_procedural_formulas() {
        for i in 1..=50 {
            let p = procedural_params(i);
            assert_eq!(p.hue_degrees, i as f64 * 13.7);
            assert_eq!(p.saturation_percent, 100 + (i as u32 % 5) * 40);
            assert_eq!(p.contrast_percent, 90 + (i as u32 % 3) * 20);
            assert_eq!(procedural_params(i), p);
        }
    }

    #[test]
    fn test_procedural_naming_and_text() {
        let library = FilterLibrary::generate(3);
        let first = library.get(3).unwrap();
        assert_eq!(first.name, "Preset #1001");
        assert_eq!(
            first.expression.to_string(),
            "hue-rotate(13.7deg) saturate(140%) contrast(110%)"
        );
        assert_eq!(library.get(5).unwrap().name, "Preset #1003");
    }

    #[test]
    fn test_generated_text_parses_back() {
        for descriptor in FilterLibrary::generate(20).iter() {
            let reparsed: FilterExpression = descriptor.expression.to_string().parse().unwrap();
            assert_eq!(reparsed, descriptor.expression);
        }
    }

    #[test]
    fn test_position_by_name() {
        let library = FilterLibrary::generate(2);
        assert_eq!(library.position_by_name("cyberpink"), Some(1));
        assert_eq!(library.position_by_name("Preset #1002"), Some(4));
        assert_eq!(library.position_by_name("Preset #1003"), None);
    }
}

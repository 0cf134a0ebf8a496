// SPDX-License-Identifier: MPL-2.0

//! Integration tests for the filter library

use pinkcam::filters::color::render_swatch;
use pinkcam::filters::{FilterExpression, FilterLibrary, procedural_params};

#[test]
fn test_library_has_fixed_presets_first() {
    let library = FilterLibrary::generate(10);

    assert_eq!(library.len(), 13);
    let names: Vec<&str> = library.iter().take(3).map(|d| d.name.as_str()).collect();
    assert_eq!(names, ["Original", "Cyberpink", "Y2K Gloss"]);
    assert!(library.get(0).unwrap().expression.is_identity());
}

#[test]
fn test_empty_procedural_range() {
    let library = FilterLibrary::generate(0);
    assert_eq!(library.len(), 3);
}

#[test]
fn test_procedural_names_and_parameters() {
    let library = FilterLibrary::generate(5);

    let first = library.get(3).unwrap();
    assert_eq!(first.name, "Preset #1001");
    assert_eq!(
        first.expression.to_string(),
        "hue-rotate(13.7deg) saturate(140%) contrast(110%)"
    );

    let fifth = library.get(7).unwrap();
    assert_eq!(fifth.name, "Preset #1005");
    let params = procedural_params(5);
    assert_eq!(params.saturation_percent, 100);
    assert_eq!(params.contrast_percent, 130);
    assert!((params.hue_degrees - 68.5).abs() < 1e-9);
}

#[test]
fn test_default_library_size() {
    assert_eq!(FilterLibrary::default().len(), 123);
}

#[test]
fn test_lookup_by_name_for_cli() {
    let library = FilterLibrary::generate(3);
    assert_eq!(library.position_by_name("cyberpink"), Some(1));
    assert_eq!(library.position_by_name(" Preset #1002 "), Some(4));
    assert_eq!(library.position_by_name("Preset #9999"), None);
}

#[test]
fn test_expression_text_round_trips() {
    for descriptor in FilterLibrary::generate(4).iter() {
        let text = descriptor.expression.to_string();
        let parsed: FilterExpression = text.parse().unwrap();
        assert_eq!(parsed.to_string(), text);
    }
}

#[test]
fn test_swatches_differ_between_presets() {
    let library = FilterLibrary::generate(2);
    let pink = [251, 207, 232, 255];

    let original = render_swatch(&library.get(0).unwrap().expression, pink, 4, 4);
    let cyberpink = render_swatch(&library.get(1).unwrap().expression, pink, 4, 4);

    assert_eq!(original.len(), 4 * 4 * 4);
    assert_eq!(&original[..4], &pink);
    assert_ne!(original, cyberpink);
}

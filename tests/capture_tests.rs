// SPDX-License-Identifier: MPL-2.0

//! Integration tests for the capture flow: shutter, gallery, counter, flash

use futures::StreamExt;
use pinkcam::backends::camera::{
    CameraBackend, CameraFrame, StreamConstraints, TestPatternBackend,
};
use pinkcam::errors::{CameraError, PhotoError};
use pinkcam::filters::FilterLibrary;
use pinkcam::pipelines::photo::CpuSurface;
use pinkcam::studio::Studio;

const NOW_MS: i64 = 1_700_000_000_000;

/// Left half red, right half blue
fn split_frame(width: u32, height: u32) -> CameraFrame {
    let mut data = Vec::with_capacity((width * height * 4) as usize);
    for _ in 0..height {
        for x in 0..width {
            if x < width / 2 {
                data.extend_from_slice(&[255, 0, 0, 255]);
            } else {
                data.extend_from_slice(&[0, 0, 255, 255]);
            }
        }
    }
    CameraFrame::from_rgba(width, height, data)
}

#[test]
fn test_cyberpink_capture_scenario() {
    let mut studio = Studio::new(FilterLibrary::generate(8), true, 90);
    let mut surface = CpuSurface::new();
    studio.set_frame(split_frame(32, 16));

    assert!(studio.select_filter(1));
    assert_eq!(studio.active_descriptor().unwrap().name, "Cyberpink");
    assert_eq!(
        studio.preview_expression().to_string(),
        "hue-rotate(300deg) saturate(200%) brightness(1.1)"
    );
    assert_eq!(studio.session().active_filter(), studio.preview_expression());

    let outcome = studio.capture_at(&mut surface, NOW_MS);
    let id = outcome.photo.unwrap();
    let ticket = outcome.flash.expect("flash enabled");

    assert_eq!(studio.session().photo_count(), 1);
    assert_eq!(studio.gallery().len(), 1);
    assert!(studio.flash().is_visible());

    let item = studio.gallery().find(id).unwrap();
    assert_eq!((item.width, item.height), (32, 16));
    assert_eq!(&item.image_data[..2], &[0xFF, 0xD8], "JPEG SOI marker");
    assert_eq!(item.download_name(), format!("pinkcam_{}.jpg", NOW_MS));

    assert!(studio.settle_flash(ticket));
    assert!(!studio.flash().is_visible());
}

#[test]
fn test_gallery_matches_counter_over_many_captures() {
    let mut studio = Studio::new(FilterLibrary::generate(4), false, 80);
    let mut surface = CpuSurface::new();
    studio.set_frame(split_frame(8, 8));

    for i in 0..5 {
        studio.select_filter(i % studio.library().len());
        let outcome = studio.capture_at(&mut surface, NOW_MS);
        assert!(outcome.photo.is_ok());
        assert!(outcome.flash.is_none());
        assert_eq!(studio.gallery().len() as u64, studio.session().photo_count());
    }
    assert_eq!(studio.session().photo_count(), 5);
}

#[test]
fn test_newest_photo_first_with_unique_ids() {
    let mut studio = Studio::new(FilterLibrary::generate(0), false, 90);
    let mut surface = CpuSurface::new();
    studio.set_frame(split_frame(8, 4));

    let first = studio.capture_at(&mut surface, NOW_MS).photo.unwrap();
    let second = studio.capture_at(&mut surface, NOW_MS).photo.unwrap();
    let third = studio.capture_at(&mut surface, NOW_MS - 10).photo.unwrap();

    assert!(first < second && second < third);
    let ids: Vec<i64> = studio.gallery().iter().map(|item| item.timestamp_id).collect();
    assert_eq!(ids, [third, second, first]);
    assert_eq!(studio.gallery().newest().unwrap().timestamp_id, third);
}

#[test]
fn test_capture_is_mirrored() {
    let mut studio = Studio::new(FilterLibrary::generate(0), false, 100);
    let mut surface = CpuSurface::new();
    studio.set_frame(split_frame(32, 16));

    let id = studio.capture_at(&mut surface, NOW_MS).photo.unwrap();
    let item = studio.gallery().find(id).unwrap();
    let decoded = image::load_from_memory(&item.image_data).unwrap().to_rgb8();

    // Red started on the left; the selfie capture puts it on the right
    let left = decoded.get_pixel(4, 8);
    let right = decoded.get_pixel(27, 8);
    assert!(left[2] > left[0], "left should be blue, got {:?}", left);
    assert!(right[0] > right[2], "right should be red, got {:?}", right);
}

#[test]
fn test_no_frame_still_flashes() {
    let mut studio = Studio::new(FilterLibrary::generate(2), true, 90);
    let mut surface = CpuSurface::new();

    let outcome = studio.capture_at(&mut surface, NOW_MS);

    assert_eq!(outcome.photo, Err(PhotoError::NoFrameAvailable));
    assert!(outcome.flash.is_some());
    assert!(studio.flash().is_visible());
    assert!(studio.gallery().is_empty());
    assert_eq!(studio.session().photo_count(), 0);
}

#[test]
fn test_stale_flash_ticket_does_not_clear_newer_flash() {
    let mut studio = Studio::new(FilterLibrary::generate(0), true, 90);
    let mut surface = CpuSurface::new();
    studio.set_frame(split_frame(4, 4));

    let first = studio.capture_at(&mut surface, NOW_MS).flash.unwrap();
    let second = studio.capture_at(&mut surface, NOW_MS + 1).flash.unwrap();

    assert!(!studio.settle_flash(first));
    assert!(studio.flash().is_visible());
    assert!(studio.settle_flash(second));
    assert!(!studio.flash().is_visible());
}

#[test]
fn test_camera_unavailable_keeps_filters_usable() {
    let mut studio = Studio::new(FilterLibrary::generate(3), true, 90);

    studio.report_camera_unavailable(CameraError::PermissionDenied);
    assert_eq!(studio.camera_error(), Some(&CameraError::PermissionDenied));

    assert!(studio.select_filter(2));
    assert_eq!(studio.active_index(), 2);
    assert!(!studio.select_filter(99), "out-of-range selection is ignored");
    assert_eq!(studio.active_index(), 2);

    studio.dismiss_camera_error();
    assert!(studio.camera_error().is_none());
}

#[test]
fn test_capture_from_test_pattern_camera() {
    let backend = TestPatternBackend::new();
    let mut stream = backend
        .request_stream(&StreamConstraints::default())
        .unwrap();
    let frame = futures::executor::block_on(stream.frames.next()).unwrap();
    assert_eq!((frame.width, frame.height), (1280, 720));

    let mut studio = Studio::new(FilterLibrary::generate(1), false, 90);
    studio.set_frame(frame);
    let id = studio.capture_at(&mut CpuSurface::new(), NOW_MS).photo.unwrap();

    let item = studio.gallery().find(id).unwrap();
    assert_eq!((item.width, item.height), (1280, 720));
    assert!(item.thumbnail.width <= 256 && item.thumbnail.height <= 256);
}

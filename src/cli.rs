// SPDX-License-Identifier: GPL-3.0-only

//! CLI commands
//!
//! - Listing available cameras
//! - Printing the filter library
//! - Taking a filtered photo without the GUI

use chrono::Local;
use pinkcam::backends::camera::{CameraBackendType, CameraFrame, StreamConstraints, get_backend};
use pinkcam::config::Config;
use pinkcam::errors::{AppError, AppResult, CameraError};
use pinkcam::filters::FilterLibrary;
use pinkcam::filters::library::clamp_procedural_count;
use pinkcam::pipelines::photo::CpuSurface;
use pinkcam::storage::write_photo;
use pinkcam::studio::Studio;
use std::path::PathBuf;
use std::time::{Duration, Instant};

/// List all available cameras
pub fn list_cameras(backend_type: CameraBackendType) -> AppResult<()> {
    let backend = get_backend(backend_type);
    let cameras = backend.enumerate_cameras();

    if cameras.is_empty() {
        println!("No cameras found ({} backend).", backend.backend_type());
        return Ok(());
    }

    println!("Available cameras ({} backend):", backend.backend_type());
    println!();
    for (index, camera) in cameras.iter().enumerate() {
        println!("  [{}] {}", index, camera.name);
        if let Some(location) = &camera.camera_location {
            println!("      Location: {}", location);
        }
        println!("      Path: {}", camera.path);
        println!();
    }

    Ok(())
}

/// Print the filter library
pub fn list_filters(count: Option<usize>, json: bool) -> AppResult<()> {
    let count = match count {
        Some(count) => clamp_procedural_count(count),
        None => Config::load().1.procedural_count(),
    };
    let library = FilterLibrary::generate(count);

    if json {
        println!("{}", serde_json::to_string_pretty(library.descriptors())?);
        return Ok(());
    }

    for (index, descriptor) in library.iter().enumerate() {
        println!("{:>4}  {:<14} {}", index, descriptor.name, descriptor.expression);
    }
    Ok(())
}

/// Take a photo through the active filter and save it
pub fn take_photo(
    filter: Option<String>,
    output: Option<PathBuf>,
    backend_type: CameraBackendType,
) -> AppResult<()> {
    let (_, config) = Config::load();
    let mut studio = Studio::new(
        FilterLibrary::generate(config.procedural_count()),
        false,
        config.jpeg_quality,
    );

    if let Some(name) = filter {
        let index = studio
            .library()
            .position_by_name(&name)
            .ok_or_else(|| {
                AppError::Other(format!("Unknown filter: {} (see 'pinkcam filters')", name))
            })?;
        studio.select_filter(index);
    }
    if let Some(descriptor) = studio.active_descriptor() {
        println!("Filter: {} ({})", descriptor.name, descriptor.expression);
    }

    let backend = get_backend(backend_type);
    let mut stream = backend.request_stream(&StreamConstraints::default())?;
    println!("Using camera: {}", stream.device.name);

    println!("Capturing...");
    let frame = wait_for_frame(&mut stream.frames)?;
    studio.set_frame(frame);

    let timestamp_id = studio.capture(&mut CpuSurface::new()).photo?;
    let item = studio
        .gallery()
        .find(timestamp_id)
        .ok_or("Captured photo missing from gallery")?;

    let path = match output {
        Some(path) if path.is_dir() => path.join(item.download_name()),
        Some(path) => path,
        None => config.save_dir().join(item.download_name()),
    };
    write_photo(&path, &item.image_data)?;

    println!(
        "Photo saved: {} ({}x{}, {})",
        path.display(),
        item.width,
        item.height,
        Local::now().format("%Y-%m-%d %H:%M:%S")
    );
    Ok(())
}

/// Wait for the camera to warm up and return the next frame
fn wait_for_frame(
    frames: &mut pinkcam::backends::camera::FrameReceiver,
) -> AppResult<CameraFrame> {
    let start = Instant::now();
    let timeout = Duration::from_secs(5);
    let warmup = Duration::from_millis(500);
    let mut frame: Option<CameraFrame> = None;

    while start.elapsed() < timeout {
        match frames.try_next() {
            Ok(Some(f)) => {
                frame = Some(f);
                if start.elapsed() > warmup {
                    break;
                }
            }
            // Stream ended
            Ok(None) => break,
            Err(_) => std::thread::sleep(Duration::from_millis(16)),
        }
    }

    frame.ok_or_else(|| {
        CameraError::BackendError("Failed to capture frame from camera".to_string()).into()
    })
}

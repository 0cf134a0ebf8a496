// SPDX-License-Identifier: GPL-3.0-only

//! Virtual camera producing an animated test pattern
//!
//! Used when no hardware should be touched: demos, the CLI and tests.

use super::types::*;
use super::{CameraBackend, CameraBackendType};
use crate::constants::camera::{FRAME_CHANNEL_CAPACITY, VIRTUAL_FPS};
use crate::errors::CameraError;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread::JoinHandle;
use std::time::{Duration, Instant};
use tracing::{debug, info};

const DEVICE_NAME: &str = "Test Pattern";
const DEVICE_PATH: &str = "virtual:test-pattern";

/// Backend that never fails and needs no hardware
#[derive(Debug, Default)]
pub struct TestPatternBackend;

impl TestPatternBackend {
    pub fn new() -> Self {
        Self
    }

    fn device() -> CameraDevice {
        CameraDevice {
            name: DEVICE_NAME.to_string(),
            path: DEVICE_PATH.to_string(),
            camera_location: Some(FacingMode::User.location().to_string()),
        }
    }
}

impl CameraBackend for TestPatternBackend {
    fn enumerate_cameras(&self) -> Vec<CameraDevice> {
        vec![Self::device()]
    }

    fn request_stream(&self, constraints: &StreamConstraints) -> Result<CameraStream, CameraError> {
        if constraints.width == 0 || constraints.height == 0 {
            return Err(CameraError::InitializationFailed(format!(
                "Invalid resolution {}x{}",
                constraints.width, constraints.height
            )));
        }

        let (sender, receiver) = futures::channel::mpsc::channel(FRAME_CHANNEL_CAPACITY);
        let producer = PatternThread::spawn(constraints.width, constraints.height, sender)?;
        info!(
            width = constraints.width,
            height = constraints.height,
            "Test pattern camera started"
        );

        Ok(CameraStream::new(Self::device(), receiver, Box::new(producer)))
    }

    fn backend_type(&self) -> CameraBackendType {
        CameraBackendType::Virtual
    }
}

/// Frame generator thread; stopped and joined on drop
struct PatternThread {
    running: Arc<AtomicBool>,
    handle: Option<JoinHandle<()>>,
}

impl PatternThread {
    fn spawn(width: u32, height: u32, mut sender: FrameSender) -> Result<Self, CameraError> {
        let running = Arc::new(AtomicBool::new(true));
        let flag = Arc::clone(&running);
        let interval = Duration::from_millis(1000 / VIRTUAL_FPS);

        let handle = std::thread::Builder::new()
            .name("test-pattern".into())
            .spawn(move || {
                let mut index = 0u64;
                while flag.load(Ordering::Relaxed) {
                    let started = Instant::now();
                    let frame = CameraFrame::from_rgba(width, height, render(width, height, index));
                    if sender.try_send(frame).is_err() && sender.is_closed() {
                        debug!("Frame receiver dropped, stopping test pattern");
                        break;
                    }
                    index += 1;
                    if let Some(rest) = interval.checked_sub(started.elapsed()) {
                        std::thread::sleep(rest);
                    }
                }
            })
            .map_err(|e| CameraError::InitializationFailed(e.to_string()))?;

        Ok(Self {
            running,
            handle: Some(handle),
        })
    }
}

impl Drop for PatternThread {
    fn drop(&mut self) {
        self.running.store(false, Ordering::Relaxed);
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}

/// Render frame `index` of the pattern
///
/// A diagonal pink-to-violet gradient with a bright bar sweeping left to
/// right, so mirroring and filters are easy to see.
pub fn render(width: u32, height: u32, index: u64) -> Vec<u8> {
    let mut rgba = Vec::with_capacity((width * height * 4) as usize);
    let bar_width = (width / 16).max(1);
    let bar_x = ((index * 8) % width.max(1) as u64) as u32;
    let span = (width + height).max(1) as f32;

    for y in 0..height {
        for x in 0..width {
            if x >= bar_x && x < bar_x + bar_width {
                rgba.extend_from_slice(&[255, 255, 255, 255]);
                continue;
            }
            let t = (x + y) as f32 / span;
            rgba.extend_from_slice(&[
                (250.0 - 110.0 * t) as u8,
                (110.0 - 60.0 * t) as u8,
                (180.0 + 60.0 * t) as u8,
                255,
            ]);
        }
    }
    rgba
}

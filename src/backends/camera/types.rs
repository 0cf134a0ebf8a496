// SPDX-License-Identifier: GPL-3.0-only
// Shared types for camera backend abstraction

//! Shared types for camera backends

use crate::constants::camera::{PREFERRED_HEIGHT, PREFERRED_WIDTH};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Instant;

/// Camera backend type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum CameraBackendType {
    /// GStreamer device monitor and appsink pipeline
    #[default]
    GStreamer,
    /// Built-in animated test pattern
    Virtual,
}

impl std::fmt::Display for CameraBackendType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CameraBackendType::GStreamer => write!(f, "GStreamer"),
            CameraBackendType::Virtual => write!(f, "Virtual"),
        }
    }
}

/// Which way the requested camera should face
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FacingMode {
    /// Towards the user (selfie camera)
    #[default]
    User,
    /// Away from the user
    Environment,
}

impl FacingMode {
    /// Location string reported by libcamera / PipeWire for this facing
    pub fn location(&self) -> &'static str {
        match self {
            FacingMode::User => "front",
            FacingMode::Environment => "back",
        }
    }
}

/// Constraints for a stream request
///
/// Resolution is a preference; facing is a hint used to pick among devices.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StreamConstraints {
    pub width: u32,
    pub height: u32,
    pub facing: FacingMode,
}

impl Default for StreamConstraints {
    fn default() -> Self {
        Self {
            width: PREFERRED_WIDTH,
            height: PREFERRED_HEIGHT,
            facing: FacingMode::User,
        }
    }
}

/// Represents a camera device
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CameraDevice {
    pub name: String,
    /// Backend-specific identifier (device path, PipeWire serial, ...)
    pub path: String,
    /// Camera location: "front", "back", or "external"
    pub camera_location: Option<String>,
}

impl CameraDevice {
    /// Whether this device is known to face the requested way
    pub fn matches_facing(&self, facing: FacingMode) -> bool {
        self.camera_location
            .as_deref()
            .is_some_and(|loc| loc.eq_ignore_ascii_case(facing.location()))
    }
}

/// Pick the device that best matches the facing hint
///
/// Falls back to the first device when none reports a matching location.
pub fn select_device(devices: &[CameraDevice], facing: FacingMode) -> Option<&CameraDevice> {
    devices
        .iter()
        .find(|d| d.matches_facing(facing))
        .or_else(|| devices.first())
}

/// A single RGBA video frame
///
/// Pixel data is tightly packed (`width * 4` bytes per row) and shared, so
/// cloning a frame never copies pixels.
#[derive(Debug, Clone)]
pub struct CameraFrame {
    pub width: u32,
    pub height: u32,
    pub data: Arc<[u8]>,
    pub captured_at: Instant,
}

impl CameraFrame {
    /// Wrap tightly packed RGBA data
    pub fn from_rgba(width: u32, height: u32, data: Vec<u8>) -> Self {
        debug_assert_eq!(data.len(), (width * height * 4) as usize);
        Self {
            width,
            height,
            data: Arc::from(data),
            captured_at: Instant::now(),
        }
    }

    /// Whether the frame has pixels to draw
    pub fn has_pixels(&self) -> bool {
        self.width > 0 && self.height > 0 && self.data.len() >= (self.width * self.height * 4) as usize
    }

    /// RGBA value at (x, y)
    #[inline]
    pub fn pixel(&self, x: u32, y: u32) -> [u8; 4] {
        let i = ((y * self.width + x) * 4) as usize;
        [self.data[i], self.data[i + 1], self.data[i + 2], self.data[i + 3]]
    }
}

/// Frame sender type (camera thread to app)
pub type FrameSender = futures::channel::mpsc::Sender<CameraFrame>;

/// Frame receiver type
pub type FrameReceiver = futures::channel::mpsc::Receiver<CameraFrame>;

/// A live camera stream
///
/// Frames arrive on `frames`, each carrying the size the device actually
/// delivers. The stream keeps its producer (pipeline or thread) alive;
/// dropping it stops the camera.
pub struct CameraStream {
    pub device: CameraDevice,
    pub frames: FrameReceiver,
    _producer: Box<dyn Send>,
}

impl CameraStream {
    pub fn new(device: CameraDevice, frames: FrameReceiver, producer: Box<dyn Send>) -> Self {
        Self {
            device,
            frames,
            _producer: producer,
        }
    }
}

impl std::fmt::Debug for CameraStream {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CameraStream")
            .field("device", &self.device.name)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn device(name: &str, location: Option<&str>) -> CameraDevice {
        CameraDevice {
            name: name.to_string(),
            path: name.to_lowercase(),
            camera_location: location.map(str::to_string),
        }
    }

    #[test]
    fn test_select_device_prefers_facing() {
        let devices = vec![
            device("Rear", Some("back")),
            device("Selfie", Some("front")),
        ];
        assert_eq!(select_device(&devices, FacingMode::User).unwrap().name, "Selfie");
        assert_eq!(
            select_device(&devices, FacingMode::Environment).unwrap().name,
            "Rear"
        );
    }

    #[test]
    fn test_select_device_falls_back_to_first() {
        let devices = vec![device("Webcam", None), device("Capture card", Some("external"))];
        assert_eq!(select_device(&devices, FacingMode::User).unwrap().name, "Webcam");
        assert!(select_device(&[], FacingMode::User).is_none());
    }

    #[test]
    fn test_default_constraints() {
        let c = StreamConstraints::default();
        assert_eq!((c.width, c.height, c.facing), (1280, 720, FacingMode::User));
    }

    #[test]
    fn test_zero_sized_frame_has_no_pixels() {
        let frame = CameraFrame::from_rgba(0, 0, Vec::new());
        assert!(!frame.has_pixels());
        assert!(CameraFrame::from_rgba(1, 1, vec![0; 4]).has_pixels());
    }

    #[test]
    fn test_cloned_frame_shares_pixels_and_timestamp() {
        let frame = CameraFrame::from_rgba(2, 1, vec![7; 8]);
        let copy = frame.clone();
        assert!(Arc::ptr_eq(&frame.data, &copy.data));
        assert_eq!(frame.captured_at, copy.captured_at);
        assert!(copy.captured_at <= Instant::now());
    }
}

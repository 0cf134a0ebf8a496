// SPDX-License-Identifier: MPL-2.0

//! Camera backend abstraction
//!
//! ```text
//! ┌─────────────────────┐
//! │   UI Layer (App)    │
//! └──────────┬──────────┘
//!            │ StreamConstraints
//!            ▼
//! ┌─────────────────────┐
//! │  CameraBackend Trait│  ← Common interface
//! └──────────┬──────────┘
//!            │
//!      ┌─────┴──────┐
//!      ▼            ▼
//! ┌─────────┐ ┌────────────┐
//! │GStreamer│ │Test pattern│
//! └─────────┘ └────────────┘
//! ```
//!
//! A stream request resolves exactly once: either a [`CameraStream`] whose
//! receiver yields RGBA frames, or a [`CameraError`] meaning the camera is
//! unavailable for this session.

pub mod gstreamer_backend;
pub mod test_pattern;
pub mod types;

pub use gstreamer_backend::GStreamerBackend;
pub use test_pattern::TestPatternBackend;
pub use types::*;

use crate::errors::CameraError;

/// Camera backend trait
pub trait CameraBackend: Send + Sync {
    /// Enumerate available cameras on this backend
    fn enumerate_cameras(&self) -> Vec<CameraDevice>;

    /// Open the camera best matching `constraints` and start streaming
    ///
    /// Blocks until the stream is running or has failed.
    fn request_stream(&self, constraints: &StreamConstraints) -> Result<CameraStream, CameraError>;

    /// Get the backend type identifier
    fn backend_type(&self) -> CameraBackendType;
}

/// Get a backend instance for the given type
pub fn get_backend(backend_type: CameraBackendType) -> Box<dyn CameraBackend> {
    match backend_type {
        CameraBackendType::GStreamer => Box::new(GStreamerBackend::new()),
        CameraBackendType::Virtual => Box::new(TestPatternBackend::new()),
    }
}

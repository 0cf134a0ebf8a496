// SPDX-License-Identifier: MPL-2.0

//! Error types for the camera application

use std::fmt;

/// Result type alias using AppError
pub type AppResult<T> = Result<T, AppError>;

/// Error returned by the command line entry points
#[derive(Debug, Clone)]
pub enum AppError {
    /// Camera-related errors
    Camera(CameraError),
    /// Photo capture errors
    Photo(PhotoError),
    /// Generic error with message
    Other(String),
}

/// Camera-specific errors
///
/// Every variant means the camera is unavailable for this session; the UI
/// reports it once and keeps running without live video.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CameraError {
    /// No camera devices found
    NoCameraFound,
    /// The user or the sandbox refused camera access
    PermissionDenied,
    /// Camera is busy or in use
    Busy,
    /// Camera initialization failed
    InitializationFailed(String),
    /// Backend error (e.g., GStreamer)
    BackendError(String),
}

/// Photo capture errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PhotoError {
    /// No frame available for capture (camera not started or zero-sized frame)
    NoFrameAvailable,
    /// Encoding failed
    EncodingFailed(String),
    /// Save failed
    SaveFailed(String),
}

impl CameraError {
    /// Classify a backend error message into the closest variant
    pub fn from_backend_message(message: &str) -> Self {
        let lower = message.to_lowercase();
        if lower.contains("permission") || lower.contains("not authorized") {
            CameraError::PermissionDenied
        } else if lower.contains("busy") || lower.contains("in use") {
            CameraError::Busy
        } else {
            CameraError::BackendError(message.to_string())
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Camera(e) => write!(f, "Camera error: {}", e),
            AppError::Photo(e) => write!(f, "Photo error: {}", e),
            AppError::Other(msg) => write!(f, "{}", msg),
        }
    }
}

impl fmt::Display for CameraError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CameraError::NoCameraFound => write!(f, "No camera devices found"),
            CameraError::PermissionDenied => write!(f, "Camera access was denied"),
            CameraError::Busy => write!(f, "Camera is busy"),
            CameraError::InitializationFailed(msg) => write!(f, "Initialization failed: {}", msg),
            CameraError::BackendError(msg) => write!(f, "Backend error: {}", msg),
        }
    }
}

impl fmt::Display for PhotoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PhotoError::NoFrameAvailable => write!(f, "No frame available for capture"),
            PhotoError::EncodingFailed(msg) => write!(f, "Encoding failed: {}", msg),
            PhotoError::SaveFailed(msg) => write!(f, "Save failed: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}
impl std::error::Error for CameraError {}
impl std::error::Error for PhotoError {}

impl From<CameraError> for AppError {
    fn from(err: CameraError) -> Self {
        AppError::Camera(err)
    }
}

impl From<PhotoError> for AppError {
    fn from(err: PhotoError) -> Self {
        AppError::Photo(err)
    }
}

impl From<String> for AppError {
    fn from(msg: String) -> Self {
        AppError::Other(msg)
    }
}

impl From<&str> for AppError {
    fn from(msg: &str) -> Self {
        AppError::Other(msg.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Other(format!("JSON output failed: {}", err))
    }
}

impl From<std::io::Error> for PhotoError {
    fn from(err: std::io::Error) -> Self {
        PhotoError::SaveFailed(err.to_string())
    }
}

impl From<image::ImageError> for PhotoError {
    fn from(err: image::ImageError) -> Self {
        PhotoError::EncodingFailed(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backend_message_classification() {
        assert_eq!(
            CameraError::from_backend_message("Permission denied by portal"),
            CameraError::PermissionDenied
        );
        assert_eq!(
            CameraError::from_backend_message("Device or resource busy"),
            CameraError::Busy
        );
        assert!(matches!(
            CameraError::from_backend_message("Internal data stream error"),
            CameraError::BackendError(_)
        ));
    }

    #[test]
    fn test_app_error_wraps_photo_error() {
        let err: AppError = PhotoError::NoFrameAvailable.into();
        assert_eq!(err.to_string(), "Photo error: No frame available for capture");
    }

    #[test]
    fn test_app_error_from_message_displays_verbatim() {
        let err: AppError = "Unknown filter: Nope".into();
        assert!(matches!(err, AppError::Other(_)));
        assert_eq!(err.to_string(), "Unknown filter: Nope");

        let err: AppError = CameraError::Busy.into();
        assert_eq!(err.to_string(), "Camera error: Camera is busy");
    }
}

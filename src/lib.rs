// SPDX-License-Identifier: MPL-2.0

//! PinkCam - a selfie camera studio for the COSMIC desktop environment
//!
//! Live video from a user-facing camera is shown through one filter picked
//! from a generated preset library; the shutter captures a mirrored, filtered
//! JPEG into an in-memory gallery from which photos can be downloaded.
//!
//! # Architecture
//!
//! - [`app`]: Application model, messages and UI
//! - [`studio`]: Session state owner (filters, gallery, counter, flash)
//! - [`filters`]: Filter expressions, colour math and the preset library
//! - [`backends`]: Camera acquisition (GStreamer, test pattern)
//! - [`pipelines`]: Live preview rendering and still capture
//! - [`gallery`], [`session`], [`flash`]: Pieces of studio state
//! - [`config`]: User configuration handling
//! - [`storage`]: Writing downloaded photos
//!
//! # Example
//!
//! ```ignore
//! // This is a GUI application, typically run via:
//! // pinkcam
//! ```

pub mod app;
pub mod backends;
pub mod config;
pub mod constants;
pub mod errors;
pub mod filters;
pub mod flash;
pub mod gallery;
pub mod i18n;
pub mod pipelines;
pub mod session;
pub mod storage;
pub mod studio;

// Re-export commonly used types
pub use app::{AppModel, Message};
pub use config::Config;
pub use filters::{FilterDescriptor, FilterExpression, FilterLibrary};
pub use studio::Studio;

// SPDX-License-Identifier: MPL-2.0

//! Backend abstraction layer for camera capture
//!
//! - [`camera`]: Camera backends with device selection and frame streaming

pub mod camera;

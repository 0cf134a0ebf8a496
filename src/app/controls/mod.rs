// SPDX-License-Identifier: MPL-2.0

//! Capture controls module
//!
//! This module handles the UI components around the shutter:
//! - Shutter button
//! - Photo counter and flash toggle

pub mod capture_button;
pub mod counter;

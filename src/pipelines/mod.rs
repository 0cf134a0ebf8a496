// SPDX-License-Identifier: MPL-2.0

//! Frame processing pipelines
//!
//! ```text
//! ┌──────────────┐     ┌───────────────────┐     ┌──────────────┐
//! │ Camera Frame │ ──▶ │ Preview Pipeline  │ ──▶ │ Live preview │
//! │   (RGBA)     │     │  - Downscale      │     │              │
//! │              │     │  - Filter, mirror │     │              │
//! └──────────────┘     └───────────────────┘     └──────────────┘
//!
//! ┌──────────────┐     ┌───────────────────┐     ┌──────────────┐
//! │ Latest Frame │ ──▶ │  Photo Pipeline   │ ──▶ │ JPEG in the  │
//! │   (RGBA)     │     │  - Surface        │     │   gallery    │
//! │              │     │  - Filter, mirror │     │              │
//! │              │     │  - Encoding       │     │              │
//! └──────────────┘     └───────────────────┘     └──────────────┘
//! ```
//!
//! # Modules
//!
//! - [`photo`]: Still capture through a render surface and JPEG encoding
//! - [`preview`]: Per-frame rendering of the live preview

pub mod photo;
pub mod preview;

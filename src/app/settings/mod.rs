// SPDX-License-Identifier: GPL-3.0-only

//! Settings UI module
//!
//! This module handles the settings drawer: flash, mirroring, theme and
//! where downloads go.

pub mod view;

// SPDX-License-Identifier: GPL-3.0-only

//! Filter picker module
//!
//! Horizontal strip with one tile per library entry. Each tile shows the
//! preset applied to a pink swatch; the selected tile is outlined.

mod view;

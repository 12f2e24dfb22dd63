// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

extern crate alloc;

use alloc::string::String;

/// Errors raised while constructing an [`AxisConfig`](crate::AxisConfig).
///
/// The layout stages themselves cannot fail; anything malformed is rejected
/// here, before a render pass starts.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum ConfigError {
    /// The position is not one of `top`, `bottom`, `left` or `right`.
    #[error("unknown axis position `{0}` (expected top, bottom, left or right)")]
    UnknownPosition(String),
    /// The label font size is negative or not finite.
    #[error("invalid label font size {0}")]
    InvalidFontSize(f64),
    /// The axis region has a negative or non-finite dimension.
    #[error("invalid axis region {width}x{height}")]
    InvalidRegion {
        /// Region width in pixels.
        width: f64,
        /// Region height in pixels.
        height: f64,
    },
    /// Tick size or tick padding is not finite.
    #[error("invalid tick offset {0}")]
    InvalidTickOffset(f64),
}

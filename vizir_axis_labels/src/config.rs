// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Axis configuration.
//!
//! An [`AxisConfig`] is owned by the chart that builds the axis and is
//! read-only for the duration of a render pass. It follows Vega's axis model:
//! a single config type with a [`Position`] of `top`, `bottom`, `left` or
//! `right`, from which the [`Orientation`] is derived.

extern crate alloc;

use alloc::string::{String, ToString};
use core::fmt;
use core::str::FromStr;

use kurbo::Size;
use peniko::Brush;
use peniko::color::palette::css;

use crate::ConfigError;

/// Where the axis sits relative to the plot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Position {
    /// A horizontal axis above the plot.
    Top,
    /// A horizontal axis below the plot.
    Bottom,
    /// A vertical axis left of the plot.
    Left,
    /// A vertical axis right of the plot.
    Right,
}

impl Position {
    /// The orientation implied by this position.
    pub fn orientation(self) -> Orientation {
        match self {
            Self::Top | Self::Bottom => Orientation::Horizontal,
            Self::Left | Self::Right => Orientation::Vertical,
        }
    }

    /// Returns `true` for `top` and `bottom`.
    pub fn is_horizontal(self) -> bool {
        self.orientation() == Orientation::Horizontal
    }

    /// The lowercase name used in configuration documents.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Top => "top",
            Self::Bottom => "bottom",
            Self::Left => "left",
            Self::Right => "right",
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Position {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "top" => Ok(Self::Top),
            "bottom" => Ok(Self::Bottom),
            "left" => Ok(Self::Left),
            "right" => Ok(Self::Right),
            other => Err(ConfigError::UnknownPosition(other.to_string())),
        }
    }
}

/// Which pixel dimension is primary for an axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Orientation {
    /// Labels are laid out along x; width is the primary dimension.
    Horizontal,
    /// Labels are laid out along y; height is the primary dimension.
    Vertical,
}

/// Tick label options.
#[derive(Clone, Debug, PartialEq)]
pub struct LabelOptions {
    /// Whether the label group is displayed at all.
    pub show: bool,
    /// Rotation in degrees. `0` disables rotation.
    pub rotate: i32,
    /// Maximum label length in characters. `0` disables truncation.
    pub truncate: usize,
    /// Text appended to truncated labels.
    ///
    /// `None` (the default) truncates without any marker.
    pub truncate_marker: Option<String>,
    /// Whether overlapping labels are filtered out.
    pub filter: bool,
    /// Font size in pixels, applied to every label.
    pub font_size: f64,
    /// Label fill paint.
    pub fill: Brush,
}

impl Default for LabelOptions {
    fn default() -> Self {
        Self {
            show: true,
            rotate: 0,
            truncate: 0,
            truncate_marker: None,
            filter: true,
            font_size: 10.0,
            fill: Brush::Solid(css::BLACK),
        }
    }
}

/// Configuration for one axis.
#[derive(Clone, Debug, PartialEq)]
pub struct AxisConfig {
    /// Axis placement.
    pub position: Position,
    /// Size of the region the axis is drawn into.
    ///
    /// Its width (horizontal axes) or height (vertical axes) bounds where
    /// labels may be placed.
    pub region: Size,
    /// Tick line length.
    pub tick_size: f64,
    /// Gap between the tick end and its label.
    pub tick_padding: f64,
    /// Tick label options.
    pub labels: LabelOptions,
}

impl AxisConfig {
    /// Creates a configuration with default label options.
    ///
    /// Defaults: `tick_size = 6`, `tick_padding = 3`, labels shown, filtering
    /// on, no rotation and no truncation.
    pub fn new(position: Position, region: Size) -> Self {
        Self {
            position,
            region,
            tick_size: 6.0,
            tick_padding: 3.0,
            labels: LabelOptions::default(),
        }
    }

    /// Convenience constructor for a `top` axis.
    pub fn top(region: Size) -> Self {
        Self::new(Position::Top, region)
    }

    /// Convenience constructor for a `bottom` axis.
    pub fn bottom(region: Size) -> Self {
        Self::new(Position::Bottom, region)
    }

    /// Convenience constructor for a `left` axis.
    pub fn left(region: Size) -> Self {
        Self::new(Position::Left, region)
    }

    /// Convenience constructor for a `right` axis.
    pub fn right(region: Size) -> Self {
        Self::new(Position::Right, region)
    }

    /// Set the label rotation in degrees (`0` disables rotation).
    pub fn with_rotate(mut self, degrees: i32) -> Self {
        self.labels.rotate = degrees;
        self
    }

    /// Set the maximum label length in characters (`0` disables truncation).
    pub fn with_truncate(mut self, max_chars: usize) -> Self {
        self.labels.truncate = max_chars;
        self
    }

    /// Append `marker` to truncated labels.
    pub fn with_truncate_marker(mut self, marker: impl Into<String>) -> Self {
        self.labels.truncate_marker = Some(marker.into());
        self
    }

    /// Enable or disable overlap filtering.
    pub fn with_filter(mut self, filter: bool) -> Self {
        self.labels.filter = filter;
        self
    }

    /// Show or hide the label group.
    pub fn with_labels_visible(mut self, show: bool) -> Self {
        self.labels.show = show;
        self
    }

    /// Set the label font size in pixels.
    pub fn with_font_size(mut self, font_size: f64) -> Self {
        self.labels.font_size = font_size;
        self
    }

    /// Set the label fill.
    pub fn with_fill(mut self, fill: impl Into<Brush>) -> Self {
        self.labels.fill = fill.into();
        self
    }

    /// Set the tick line length.
    pub fn with_tick_size(mut self, tick_size: f64) -> Self {
        self.tick_size = tick_size;
        self
    }

    /// Set the gap between tick and label.
    pub fn with_tick_padding(mut self, tick_padding: f64) -> Self {
        self.tick_padding = tick_padding;
        self
    }

    /// Replace all label options at once.
    pub fn with_label_options(mut self, labels: LabelOptions) -> Self {
        self.labels = labels;
        self
    }

    /// The orientation implied by [`AxisConfig::position`].
    pub fn orientation(&self) -> Orientation {
        self.position.orientation()
    }

    /// Returns `true` for `top` and `bottom` axes.
    pub fn is_horizontal(&self) -> bool {
        self.position.is_horizontal()
    }

    /// Available size along the primary dimension.
    pub fn max_extent(&self) -> f64 {
        match self.orientation() {
            Orientation::Horizontal => self.region.width,
            Orientation::Vertical => self.region.height,
        }
    }

    /// Distance from the axis line to a label's attachment point.
    pub fn label_offset(&self) -> f64 {
        self.tick_size.abs() + self.tick_padding
    }

    /// Checks the numeric fields.
    ///
    /// Chart code building configs by hand should call this once; documents
    /// deserialized through the `serde` feature are validated automatically.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let Size { width, height } = self.region;
        if !(width.is_finite() && height.is_finite() && width >= 0.0 && height >= 0.0) {
            return Err(ConfigError::InvalidRegion { width, height });
        }
        let font_size = self.labels.font_size;
        if !font_size.is_finite() || font_size < 0.0 {
            return Err(ConfigError::InvalidFontSize(font_size));
        }
        for v in [self.tick_size, self.tick_padding] {
            if !v.is_finite() {
                return Err(ConfigError::InvalidTickOffset(v));
            }
        }
        Ok(())
    }
}

#[cfg(feature = "serde")]
mod document {
    use alloc::string::String;

    use kurbo::Size;
    use serde::Deserialize;

    use super::{AxisConfig, LabelOptions, Position};
    use crate::ConfigError;

    #[derive(Deserialize)]
    #[serde(rename_all = "camelCase", deny_unknown_fields)]
    pub(super) struct AxisConfigDocument {
        position: String,
        region: RegionDocument,
        #[serde(default)]
        tick_size: Option<f64>,
        #[serde(default)]
        tick_padding: Option<f64>,
        #[serde(default)]
        labels: LabelsDocument,
    }

    #[derive(Deserialize)]
    #[serde(deny_unknown_fields)]
    struct RegionDocument {
        width: f64,
        height: f64,
    }

    #[derive(Deserialize)]
    #[serde(rename_all = "camelCase", default, deny_unknown_fields)]
    struct LabelsDocument {
        show: bool,
        rotate: i32,
        truncate: usize,
        truncate_marker: Option<String>,
        filter: bool,
        font_size: f64,
    }

    impl Default for LabelsDocument {
        fn default() -> Self {
            let d = LabelOptions::default();
            Self {
                show: d.show,
                rotate: d.rotate,
                truncate: d.truncate,
                truncate_marker: d.truncate_marker,
                filter: d.filter,
                font_size: d.font_size,
            }
        }
    }

    impl TryFrom<AxisConfigDocument> for AxisConfig {
        type Error = ConfigError;

        fn try_from(doc: AxisConfigDocument) -> Result<Self, Self::Error> {
            let position: Position = doc.position.parse()?;
            let mut config = Self::new(
                position,
                Size::new(doc.region.width, doc.region.height),
            );
            if let Some(tick_size) = doc.tick_size {
                config.tick_size = tick_size;
            }
            if let Some(tick_padding) = doc.tick_padding {
                config.tick_padding = tick_padding;
            }
            let labels = doc.labels;
            config.labels = LabelOptions {
                show: labels.show,
                rotate: labels.rotate,
                truncate: labels.truncate,
                truncate_marker: labels.truncate_marker,
                filter: labels.filter,
                font_size: labels.font_size,
                ..LabelOptions::default()
            };
            config.validate()?;
            Ok(config)
        }
    }

    impl<'de> Deserialize<'de> for AxisConfig {
        fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
        where
            D: serde::Deserializer<'de>,
        {
            let doc = AxisConfigDocument::deserialize(deserializer)?;
            Self::try_from(doc).map_err(serde::de::Error::custom)
        }
    }
}

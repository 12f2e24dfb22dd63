// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The per-tick label record threaded through a render pass.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use kurbo::{Affine, Point, Rect, Size};

use crate::config::{AxisConfig, Position};
use crate::scale::Scale;

/// Horizontal text alignment relative to the attachment point.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum TextAnchor {
    /// Text starts at the attachment point.
    Start,
    /// Text is centred on the attachment point.
    #[default]
    Middle,
    /// Text ends at the attachment point.
    End,
}

impl TextAnchor {
    /// The SVG `text-anchor` keyword.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::Middle => "middle",
            Self::End => "end",
        }
    }
}

/// A rotation about a pivot, equivalent to SVG `rotate(angle, x, y)`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rotation {
    /// Angle in degrees, clockwise in y-down coordinates.
    pub angle: f64,
    /// Point the label rotates about.
    pub pivot: Point,
}

impl Rotation {
    /// The rotation as an affine transform.
    pub fn affine(&self) -> Affine {
        Affine::rotate_about(self.angle.to_radians(), self.pivot)
    }
}

impl fmt::Display for Rotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "rotate({}, {}, {})",
            self.angle, self.pivot.x, self.pivot.y
        )
    }
}

/// One tick label, created fresh for every render pass.
#[derive(Clone, Debug, PartialEq)]
pub struct TickLabel {
    /// The domain value of the tick.
    pub value: f64,
    /// Text as rendered (possibly truncated).
    pub text: String,
    /// The untruncated text, for tooltips.
    pub full_text: String,
    /// `scale.map(value)`.
    pub pixel_position: f64,
    /// Attachment point (SVG `x`/`y`) in axis coordinates.
    pub position: Point,
    /// Baseline offset in `em` (SVG `dy`).
    pub dy_em: f64,
    /// Text alignment at [`TickLabel::position`].
    pub anchor: TextAnchor,
    /// Font size in pixels.
    pub font_size: f64,
    /// Rotation, if the rotation stage applied one.
    pub rotation: Option<Rotation>,
    /// Last measured bounding box, in axis coordinates.
    pub bounds: Option<Rect>,
    /// Cleared by the overlap filter.
    pub visible: bool,
}

impl TickLabel {
    /// Creates an unmeasured, unrotated, visible label.
    pub fn new(value: f64, text: impl Into<String>, position: Point, anchor: TextAnchor) -> Self {
        let text = text.into();
        Self {
            value,
            full_text: text.clone(),
            text,
            pixel_position: 0.0,
            position,
            dy_em: 0.0,
            anchor,
            font_size: 10.0,
            rotation: None,
            bounds: None,
            visible: true,
        }
    }

    /// Returns `true` once a rotation has been applied.
    pub fn is_rotated(&self) -> bool {
        self.rotation.is_some()
    }

    /// Returns `true` if the rendered text differs from the full text.
    pub fn is_truncated(&self) -> bool {
        self.text != self.full_text
    }

    /// Baseline offset in pixels.
    pub fn dy(&self) -> f64 {
        self.dy_em * self.font_size
    }

    /// The point the text baseline starts from, after the `dy` shift.
    pub fn baseline_origin(&self) -> Point {
        Point::new(self.position.x, self.position.y + self.dy())
    }

    /// Size of the last measurement, or zero if never measured.
    pub fn size(&self) -> Size {
        self.bounds.map(|b| b.size()).unwrap_or(Size::ZERO)
    }

    /// The label's transform (identity when not rotated).
    pub fn transform(&self) -> Affine {
        self.rotation
            .map(|r| r.affine())
            .unwrap_or(Affine::IDENTITY)
    }
}

/// Builds labels for `ticks`, positioned around the axis line.
///
/// Ticks must be in scale order. Labels on horizontal axes start centred on
/// their tick; left-axis labels end at the tick and right-axis labels start at
/// it. The attachment point sits [`AxisConfig::label_offset`] away from the
/// axis line, and the baseline offset centres the text like d3 axes do.
pub fn tick_labels<S, I, T>(ticks: I, scale: &S, config: &AxisConfig) -> Vec<TickLabel>
where
    S: Scale + ?Sized,
    I: IntoIterator<Item = (f64, T)>,
    T: Into<String>,
{
    let offset = config.label_offset();
    let tick_offset = scale.tick_offset();
    ticks
        .into_iter()
        .map(|(value, text)| {
            let pixel = scale.map(value);
            let along = pixel + tick_offset;
            let (position, anchor, dy_em) = match config.position {
                Position::Bottom => (Point::new(along, offset), TextAnchor::Middle, 0.71),
                Position::Top => (Point::new(along, -offset), TextAnchor::Middle, 0.0),
                Position::Left => (Point::new(-offset, along), TextAnchor::End, 0.32),
                Position::Right => (Point::new(offset, along), TextAnchor::Start, 0.32),
            };
            let mut label = TickLabel::new(value, text, position, anchor);
            label.pixel_position = pixel;
            label.dy_em = dy_em;
            label.font_size = config.labels.font_size;
            label
        })
        .collect()
}

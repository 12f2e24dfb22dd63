// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Label rotation.
//!
//! Rotating a label sets three things, in order:
//! - the anchor, which depends on the axis position,
//! - the baseline offset (`0.3em` on horizontal axes, none on vertical ones),
//! - a rotation about a pivot: the centre of the measured box for `middle`
//!   anchored labels, the attachment point otherwise.
//!
//! Top axes rotate by `+degrees`; every other position by `-degrees`, so the
//! same configured angle tilts labels away from the plot on either side.

use kurbo::Point;

use crate::config::{AxisConfig, Orientation, Position};
use crate::label::{Rotation, TextAnchor, TickLabel};
use crate::measure::LabelMeasurer;

/// Baseline offset applied to rotated labels on horizontal axes, in `em`.
pub const HORIZONTAL_BASELINE_EM: f64 = 0.3;

/// The angle actually applied for a configured rotation.
pub fn effective_angle(position: Position, degrees: i32) -> f64 {
    let degrees = f64::from(degrees);
    match position {
        Position::Top => degrees,
        Position::Bottom | Position::Left | Position::Right => -degrees,
    }
}

/// The anchor a rotated label uses, given its current anchor.
///
/// Horizontal axes always anchor at the end. Vertical axes switch to `middle`
/// for quarter turns and otherwise keep `current`.
pub fn rotated_anchor(position: Position, degrees: i32, current: TextAnchor) -> TextAnchor {
    if degrees == 0 {
        return current;
    }
    match position {
        Position::Top | Position::Bottom => TextAnchor::End,
        Position::Left | Position::Right if degrees.unsigned_abs() == 90 => TextAnchor::Middle,
        Position::Left | Position::Right => current,
    }
}

/// Rotates `label` according to `config.labels.rotate`.
///
/// A rotation of `0` leaves the label untouched. `measurer` is consulted (on
/// the unrotated label, after the anchor and baseline offset are applied) only
/// when the pivot is the box centre.
pub fn rotate<M>(mut label: TickLabel, config: &AxisConfig, measurer: &M) -> TickLabel
where
    M: LabelMeasurer + ?Sized,
{
    let degrees = config.labels.rotate;
    if degrees == 0 {
        return label;
    }

    label.anchor = rotated_anchor(config.position, degrees, label.anchor);
    label.dy_em = match config.orientation() {
        Orientation::Horizontal => HORIZONTAL_BASELINE_EM,
        Orientation::Vertical => 0.0,
    };
    label.rotation = None;

    let pivot = if label.anchor == TextAnchor::Middle {
        let bounds = measurer.measure(&label);
        label.bounds = Some(bounds);
        Point::new(
            bounds.x0 + 0.5 * bounds.width(),
            bounds.y0 + 0.5 * bounds.height(),
        )
    } else {
        label.position
    };

    label.rotation = Some(Rotation {
        angle: effective_angle(config.position, degrees),
        pivot,
    });
    label
}

// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scales: domain → pixel mappings consumed by the label pipeline.
//!
//! The pipeline never owns a scale; it borrows anything implementing
//! [`Scale`]. Three concrete scales are provided for charts that don't bring
//! their own: [`ScaleLinear`], [`ScaleBand`] and [`ScalePoint`].

extern crate alloc;

use alloc::vec::Vec;

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

/// A monotonic mapping from domain values into pixel coordinates.
pub trait Scale {
    /// Maps a domain value to its pixel coordinate.
    fn map(&self, value: f64) -> f64;

    /// Returns the pixel span covered by the scale as `(start, end)`.
    ///
    /// Discrete scales report the positions of their first and last step, so
    /// the span may be shorter than the region they were laid out in.
    fn range(&self) -> (f64, f64);

    /// Offset added to [`Scale::map`] to find where a tick is drawn.
    ///
    /// Band scales put ticks in the middle of the band; everything else draws
    /// ticks at the mapped coordinate.
    fn tick_offset(&self) -> f64 {
        0.0
    }
}

impl<T: Scale + ?Sized> Scale for &T {
    fn map(&self, value: f64) -> f64 {
        (**self).map(value)
    }

    fn range(&self) -> (f64, f64) {
        (**self).range()
    }

    fn tick_offset(&self) -> f64 {
        (**self).tick_offset()
    }
}

/// A linear mapping from a continuous domain to a continuous range.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScaleLinear {
    domain: (f64, f64),
    range: (f64, f64),
}

impl ScaleLinear {
    /// Creates a new scale mapping `domain` values to `range` values.
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    /// Extends the domain outward to the nearest "nice" tick boundaries.
    pub fn nice(self, count: usize) -> Self {
        let ticks = nice_ticks(self.domain.0, self.domain.1, count);
        match (ticks.first(), ticks.last()) {
            (Some(&lo), Some(&hi)) if ticks.len() >= 2 => {
                let domain = if self.domain.0 <= self.domain.1 {
                    (lo, hi)
                } else {
                    (hi, lo)
                };
                Self { domain, ..self }
            }
            _ => self,
        }
    }

    /// Returns the configured domain.
    pub fn domain(&self) -> (f64, f64) {
        self.domain
    }

    /// Returns "nice-ish" tick values for the domain.
    pub fn ticks(&self, count: usize) -> Vec<f64> {
        let (d0, d1) = self.domain;
        nice_ticks(d0, d1, count)
            .into_iter()
            .filter(|t| *t >= d0.min(d1) - 1.0e-9 && *t <= d0.max(d1) + 1.0e-9)
            .collect()
    }
}

impl Scale for ScaleLinear {
    fn map(&self, x: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        let denom = d1 - d0;
        if denom == 0.0 {
            return r0;
        }
        let t = (x - d0) / denom;
        r0 + t * (r1 - r0)
    }

    fn range(&self) -> (f64, f64) {
        self.range
    }
}

fn nice_ticks(mut min: f64, mut max: f64, count: usize) -> Vec<f64> {
    if count == 0 || !min.is_finite() || !max.is_finite() {
        return Vec::new();
    }
    if min == max {
        return alloc::vec![min];
    }
    if min > max {
        core::mem::swap(&mut min, &mut max);
    }
    let step = nice_step((max - min) / count as f64);
    if step == 0.0 {
        return alloc::vec![min, max];
    }

    let start = (min / step).floor() * step;
    let stop = (max / step).ceil() * step;

    let n_f = ((stop - start) / step).round();
    let n = if n_f.is_finite() && n_f >= 0.0 {
        let n_f = n_f.min(10_000.0);
        #[allow(
            clippy::cast_possible_truncation,
            reason = "guarded by finite/non-negative checks and capped at 10k"
        )]
        {
            n_f as u64
        }
    } else {
        0
    };
    (0..=n).map(|i| start + step * i as f64).collect()
}

fn nice_step(step: f64) -> f64 {
    if !step.is_finite() || step <= 0.0 {
        return 0.0;
    }
    let power = step.log10().floor();
    let base = 10_f64.powf(power);
    let error = step / base;
    let nice = if error >= 7.5 {
        10.0
    } else if error >= 3.5 {
        5.0
    } else if error >= 1.5 {
        2.0
    } else {
        1.0
    };
    nice * base
}

/// A discrete band scale for categorical axes.
///
/// Domain values are category indices (`0.0`, `1.0`, ...). [`Scale::map`]
/// returns the start (lowest coordinate) of a band; ticks sit at the band
/// centre. With a reversed range (`r1 < r0`) the first category is laid out at
/// the `r0` end, so index order follows the range direction.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScaleBand {
    range: (f64, f64),
    count: usize,
    padding_inner: f64,
    padding_outer: f64,
}

impl ScaleBand {
    /// Creates a new band scale covering `count` bands over `range`.
    pub fn new(range: (f64, f64), count: usize) -> Self {
        Self {
            range,
            count,
            padding_inner: 0.1,
            padding_outer: 0.1,
        }
    }

    /// Sets inner and outer padding in band units.
    pub fn with_padding(mut self, inner: f64, outer: f64) -> Self {
        self.padding_inner = inner.max(0.0);
        self.padding_outer = outer.max(0.0);
        self
    }

    /// Returns the computed band width.
    pub fn band_width(&self) -> f64 {
        let (r0, r1) = self.range;
        let n = self.count as f64;
        if n <= 0.0 {
            return 0.0;
        }
        let span = (r1 - r0).abs();
        let denom = n + self.padding_inner * (n - 1.0) + 2.0 * self.padding_outer;
        if denom == 0.0 { 0.0 } else { span / denom }
    }

    /// Returns the number of bands.
    pub fn count(&self) -> usize {
        self.count
    }

    /// Returns the start coordinate of the band at `index`.
    pub fn x(&self, index: usize) -> f64 {
        let (r0, r1) = self.range;
        let bw = self.band_width();
        let step = bw * (1.0 + self.padding_inner);
        let slot = ordered_slot(self.range, self.count, index);
        r0.min(r1) + bw * self.padding_outer + step * slot as f64
    }
}

impl Scale for ScaleBand {
    fn map(&self, value: f64) -> f64 {
        self.x(discrete_index(value))
    }

    fn range(&self) -> (f64, f64) {
        (self.x(0), self.x(self.count.saturating_sub(1)))
    }

    fn tick_offset(&self) -> f64 {
        0.5 * self.band_width()
    }
}

/// A discrete point scale (a band scale without width).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScalePoint {
    range: (f64, f64),
    count: usize,
    padding: f64,
}

impl ScalePoint {
    /// Creates a new point scale.
    pub fn new(range: (f64, f64), count: usize) -> Self {
        Self {
            range,
            count,
            padding: 0.5,
        }
    }

    /// Sets the outer padding in point steps.
    pub fn with_padding(mut self, padding: f64) -> Self {
        self.padding = padding.max(0.0);
        self
    }

    /// Distance between adjacent points.
    pub fn step(&self) -> f64 {
        let (r0, r1) = self.range;
        let n = self.count as f64;
        if n <= 1.0 {
            return 0.0;
        }
        let span = (r1 - r0).abs();
        let denom = (n - 1.0) + 2.0 * self.padding;
        if denom == 0.0 { 0.0 } else { span / denom }
    }

    /// Returns the coordinate of the point at `index`.
    ///
    /// Like [`ScaleBand::x`], a reversed range puts index `0` at the `r0` end.
    pub fn x(&self, index: usize) -> f64 {
        let (r0, r1) = self.range;
        let step = self.step();
        let slot = ordered_slot(self.range, self.count, index);
        r0.min(r1) + self.padding * step + step * slot as f64
    }
}

impl Scale for ScalePoint {
    fn map(&self, value: f64) -> f64 {
        self.x(discrete_index(value))
    }

    fn range(&self) -> (f64, f64) {
        (self.x(0), self.x(self.count.saturating_sub(1)))
    }
}

/// Position of `index` counted from the low end of `range`.
fn ordered_slot(range: (f64, f64), count: usize, index: usize) -> usize {
    if range.1 < range.0 {
        count.saturating_sub(1).saturating_sub(index)
    } else {
        index
    }
}

fn discrete_index(v: f64) -> usize {
    if !v.is_finite() || v < 0.0 {
        return 0;
    }
    let v = v.round().min(10_000.0);
    #[allow(
        clippy::cast_possible_truncation,
        reason = "value is clamped to a small non-negative range"
    )]
    {
        v as usize
    }
}

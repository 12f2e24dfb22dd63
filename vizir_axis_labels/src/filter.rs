// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Overlap filtering.
//!
//! A single greedy pass from the start edge of the axis to its end edge. Each
//! label occupies `1.1 ×` its measured extent along the axis, centred on its
//! tick. A label is kept when that span fits strictly between the trailing
//! edge of the last kept label and the end of the region; otherwise it is
//! hidden and the trailing edge stays where it was.
//!
//! Labels are never moved, shrunk or reordered, only hidden.

extern crate alloc;

use alloc::vec::Vec;

use crate::config::{AxisConfig, Orientation};
use crate::label::TickLabel;
use crate::measure::LabelMeasurer;
use crate::scale::Scale;

/// Clearance factor applied to measured label extents.
pub const PADDING_FACTOR: f64 = 1.1;

/// The axis span labels are fitted into.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OverlapWindow {
    orientation: Orientation,
    max_extent: f64,
    start_pad: f64,
}

/// Where a label lands along the axis.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LabelSpan {
    /// Centre of the label along the scan direction.
    pub center: f64,
    /// Half of the padded extent.
    pub half_size: f64,
}

impl LabelSpan {
    /// Leading edge of the padded span.
    pub fn start(&self) -> f64 {
        self.center - self.half_size
    }

    /// Trailing edge of the padded span.
    pub fn end(&self) -> f64 {
        self.center + self.half_size
    }
}

impl OverlapWindow {
    /// Builds the window for an axis.
    ///
    /// When the scale's pixel span is shorter than the region (discrete
    /// scales), the span is centred in the region. Reversed ranges count by
    /// their length.
    pub fn new<S: Scale + ?Sized>(config: &AxisConfig, scale: &S) -> Self {
        let max_extent = config.max_extent();
        let (start, end) = scale.range();
        let scale_width = (end - start).abs();
        Self {
            orientation: config.orientation(),
            max_extent,
            start_pad: 0.5 * (max_extent - scale_width),
        }
    }

    /// Size of the region along the primary dimension.
    pub fn max_extent(&self) -> f64 {
        self.max_extent
    }

    /// Offset centring the scale's span inside the region.
    pub fn start_pad(&self) -> f64 {
        self.start_pad
    }

    /// Places a label whose tick maps to `pixel` and whose measured box is
    /// `width × height`.
    pub fn span(&self, pixel: f64, width: f64, height: f64) -> LabelSpan {
        let (center, extent) = match self.orientation {
            Orientation::Horizontal => (self.start_pad + pixel, width),
            Orientation::Vertical => (self.start_pad + self.max_extent - pixel, height),
        };
        LabelSpan {
            center,
            half_size: 0.5 * extent * PADDING_FACTOR,
        }
    }

    /// Decides whether `span` fits after the trailing edge `cursor`.
    ///
    /// Returns the new trailing edge if it does. Touching counts as
    /// overlapping.
    pub fn admit(&self, cursor: f64, span: LabelSpan) -> Option<f64> {
        let fits = cursor + span.half_size < span.center && span.end() < self.max_extent;
        fits.then_some(span.end())
    }
}

/// Hides labels that would overlap the previously kept label.
///
/// Returns the same labels in the same order. Every label is measured (and its
/// [`TickLabel::bounds`] refreshed) before its decision. With
/// `config.labels.filter` disabled the labels are returned untouched.
pub fn filter<S, M>(
    labels: Vec<TickLabel>,
    config: &AxisConfig,
    scale: &S,
    measurer: &M,
) -> Vec<TickLabel>
where
    S: Scale + ?Sized,
    M: LabelMeasurer + ?Sized,
{
    if !config.labels.filter {
        return labels;
    }

    let window = OverlapWindow::new(config, scale);
    let count = labels.len();
    let (out, _cursor) = labels.into_iter().fold(
        (Vec::with_capacity(count), 0.0_f64),
        |(mut out, cursor), mut label| {
            let bounds = measurer.measure(&label);
            label.bounds = Some(bounds);
            let span = window.span(scale.map(label.value), bounds.width(), bounds.height());
            let cursor = match window.admit(cursor, span) {
                Some(next) => next,
                None => {
                    label.visible = false;
                    cursor
                }
            };
            log::trace!(
                "label {:?} at {:.2} (±{:.2}): {}",
                label.text,
                span.center,
                span.half_size,
                if label.visible { "kept" } else { "hidden" }
            );
            out.push(label);
            (out, cursor)
        },
    );
    out
}

#[cfg(test)]
mod tests {
    extern crate std;

    use kurbo::{Point, Rect, Size};

    use super::*;
    use crate::label::{TextAnchor, tick_labels};
    use crate::scale::{ScaleBand, ScaleLinear};

    /// Every label measures `width × height`.
    struct FixedMeasurer {
        width: f64,
        height: f64,
    }

    impl LabelMeasurer for FixedMeasurer {
        fn measure(&self, label: &TickLabel) -> Rect {
            Rect::from_origin_size(label.position, (self.width, self.height))
        }
    }

    fn kept(labels: &[TickLabel]) -> std::vec::Vec<f64> {
        labels.iter().filter(|l| l.visible).map(|l| l.value).collect()
    }

    fn ten_ticks() -> std::vec::Vec<(f64, std::string::String)> {
        (0..10)
            .map(|i| (f64::from(i * 10), std::format!("{}", i * 10)))
            .collect()
    }

    #[test]
    fn greedy_scan_keeps_every_other_label() {
        let scale = ScaleLinear::new((0.0, 100.0), (0.0, 100.0));
        let config = AxisConfig::bottom(Size::new(100.0, 20.0));
        let labels = tick_labels(ten_ticks(), &scale, &config);
        let m = FixedMeasurer {
            width: 15.0,
            height: 10.0,
        };

        let out = filter(labels, &config, &scale, &m);

        assert_eq!(out.len(), 10);
        assert_eq!(kept(&out), std::vec![10.0, 30.0, 50.0, 70.0, 90.0]);
        assert!(out.iter().all(|l| l.bounds.is_some()));
    }

    #[test]
    fn disabled_filter_returns_labels_untouched() {
        let scale = ScaleLinear::new((0.0, 100.0), (0.0, 100.0));
        let config = AxisConfig::bottom(Size::new(100.0, 20.0)).with_filter(false);
        let labels = tick_labels(ten_ticks(), &scale, &config);
        let m = FixedMeasurer {
            width: 50.0,
            height: 10.0,
        };

        let out = filter(labels.clone(), &config, &scale, &m);

        assert_eq!(out, labels);
    }

    #[test]
    fn exact_touch_is_rejected() {
        let config = AxisConfig::bottom(Size::new(100.0, 20.0));
        let window = OverlapWindow::new(&config, &ScaleLinear::new((0.0, 1.0), (0.0, 100.0)));
        // Half size 5.5, centre 5.5: cursor + half == centre.
        let span = window.span(5.5, 10.0, 0.0);
        assert_eq!(window.admit(0.0, span), None);
        let span = window.span(5.6, 10.0, 0.0);
        assert!(window.admit(0.0, span).is_some());
        // Trailing edge exactly on the region end.
        let span = window.span(94.5, 10.0, 0.0);
        assert_eq!(window.admit(0.0, span), None);
    }

    #[test]
    fn rejected_labels_do_not_advance_the_cursor() {
        let scale = ScaleLinear::new((0.0, 100.0), (0.0, 100.0));
        let config = AxisConfig::bottom(Size::new(100.0, 20.0));
        let ticks = [(20.0, "a"), (25.0, "b"), (40.0, "c")];
        let labels = tick_labels(ticks, &scale, &config);
        let m = FixedMeasurer {
            width: 20.0,
            height: 10.0,
        };

        // a: 11 < 20 keeps (cursor 31); b: 42 < 25 fails; c: 42 < 40 fails.
        let out = filter(labels, &config, &scale, &m);
        assert_eq!(kept(&out), std::vec![20.0]);

        // Without `a`, `b` would have been kept and `c` hidden behind it.
        let labels = tick_labels([(25.0, "b"), (40.0, "c")], &scale, &config);
        let out = filter(labels, &config, &scale, &m);
        assert_eq!(kept(&out), std::vec![25.0]);
    }

    #[test]
    fn zero_sized_labels_fit_unless_coincident() {
        let scale = ScaleLinear::new((0.0, 100.0), (0.0, 100.0));
        let config = AxisConfig::bottom(Size::new(100.0, 20.0));
        let labels = tick_labels([(1.0, ""), (1.0, ""), (2.0, "")], &scale, &config);
        let m = FixedMeasurer {
            width: 0.0,
            height: 0.0,
        };
        let out = filter(labels, &config, &scale, &m);
        // Equal positions touch (cursor == centre) and are rejected.
        assert_eq!(
            out.iter().map(|l| l.visible).collect::<std::vec::Vec<_>>(),
            std::vec![true, false, true]
        );
    }

    #[test]
    fn vertical_axes_scan_from_the_far_end_of_the_range() {
        // y grows downward; the scale maps 0 to the bottom (100) of the region.
        let scale = ScaleLinear::new((0.0, 100.0), (100.0, 0.0));
        let config = AxisConfig::left(Size::new(40.0, 100.0));
        let labels = tick_labels(ten_ticks(), &scale, &config);
        let m = FixedMeasurer {
            width: 40.0,
            height: 15.0,
        };

        let window = OverlapWindow::new(&config, &scale);
        assert_eq!(window.start_pad(), 0.0);
        assert_eq!(window.span(scale.map(0.0), 40.0, 15.0).center, 0.0);

        let out = filter(labels, &config, &scale, &m);
        assert_eq!(kept(&out), std::vec![10.0, 30.0, 50.0, 70.0, 90.0]);
    }

    #[test]
    fn discrete_span_is_centred_in_the_region() {
        let scale = ScaleBand::new((0.0, 100.0), 4).with_padding(0.0, 0.0);
        let config = AxisConfig::bottom(Size::new(100.0, 20.0));
        let window = OverlapWindow::new(&config, &scale);
        // Range reports band starts 0..75, so the span is padded by 12.5.
        assert_eq!(window.start_pad(), 12.5);
        assert_eq!(window.span(scale.map(0.0), 10.0, 10.0).center, 12.5);
    }

    #[test]
    fn kept_spans_never_intersect() {
        let scale = ScaleLinear::new((0.0, 100.0), (0.0, 300.0));
        let config = AxisConfig::bottom(Size::new(300.0, 20.0));
        let widths = [12.0, 40.0, 7.0, 33.0, 21.0, 5.0, 60.0, 18.0, 9.0, 27.0, 14.0];
        let labels: std::vec::Vec<_> = widths
            .iter()
            .enumerate()
            .map(|(i, w)| {
                let mut l = TickLabel::new(i as f64 * 9.0, "x", Point::ZERO, TextAnchor::Middle);
                l.font_size = *w;
                l
            })
            .collect();

        struct WidthFromFontSize;
        impl LabelMeasurer for WidthFromFontSize {
            fn measure(&self, label: &TickLabel) -> Rect {
                Rect::new(0.0, 0.0, label.font_size, 10.0)
            }
        }

        let window = OverlapWindow::new(&config, &scale);
        let out = filter(labels, &config, &scale, &WidthFromFontSize);
        let spans: std::vec::Vec<LabelSpan> = out
            .iter()
            .filter(|l| l.visible)
            .map(|l| window.span(scale.map(l.value), l.size().width, l.size().height))
            .collect();
        assert!(spans.len() >= 2);
        for pair in spans.windows(2) {
            assert!(pair[0].end() < pair[1].start(), "{pair:?}");
        }
        for span in &spans {
            assert!(span.end() < window.max_extent());
        }
    }
}

// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! One render pass over an axis's labels.
//!
//! The order is fixed: group visibility and font size, then truncation, then
//! rotation, then overlap filtering. Every stage runs even when the group is
//! hidden, so toggling visibility never changes the computed layout.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use crate::config::{AxisConfig, Position};
use crate::filter::filter;
use crate::label::{TickLabel, tick_labels};
use crate::measure::LabelMeasurer;
use crate::rotate::rotate;
use crate::scale::Scale;
use crate::truncate::truncate;

/// The result of a render pass.
#[derive(Clone, Debug, PartialEq)]
pub struct AxisLabels {
    labels: Vec<TickLabel>,
    display: bool,
    position: Position,
}

impl AxisLabels {
    /// All labels, in tick order, including hidden ones.
    pub fn labels(&self) -> &[TickLabel] {
        &self.labels
    }

    /// Consumes the output, returning the labels.
    pub fn into_labels(self) -> Vec<TickLabel> {
        self.labels
    }

    /// Whether the label group renders at all.
    pub fn is_displayed(&self) -> bool {
        self.display
    }

    /// The axis the labels belong to.
    pub fn position(&self) -> Position {
        self.position
    }

    /// Labels that will actually draw: the group is displayed and the overlap
    /// filter kept them.
    pub fn rendered(&self) -> impl Iterator<Item = &TickLabel> + '_ {
        let display = self.display;
        self.labels.iter().filter(move |l| display && l.visible)
    }

    /// Domain values of the labels the overlap filter kept.
    pub fn kept_values(&self) -> Vec<f64> {
        self.labels
            .iter()
            .filter(|l| l.visible)
            .map(|l| l.value)
            .collect()
    }

    /// Number of labels, hidden ones included.
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Returns `true` if the pass had no ticks.
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

/// Runs every label stage for one axis.
///
/// Borrows the configuration, scale and measurer; nothing is retained between
/// passes.
pub struct AxisLabelPipeline<'a, S: ?Sized, M: ?Sized> {
    config: &'a AxisConfig,
    scale: &'a S,
    measurer: &'a M,
}

impl<S: ?Sized, M: ?Sized> core::fmt::Debug for AxisLabelPipeline<'_, S, M> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("AxisLabelPipeline")
            .field("config", self.config)
            .finish_non_exhaustive()
    }
}

impl<'a, S, M> AxisLabelPipeline<'a, S, M>
where
    S: Scale + ?Sized,
    M: LabelMeasurer + ?Sized,
{
    /// Creates a pipeline for one axis.
    pub fn new(config: &'a AxisConfig, scale: &'a S, measurer: &'a M) -> Self {
        Self {
            config,
            scale,
            measurer,
        }
    }

    /// The configuration this pipeline renders with.
    pub fn config(&self) -> &AxisConfig {
        self.config
    }

    /// Builds fresh labels for `ticks`. See [`tick_labels`].
    pub fn labels_for_ticks<I, T>(&self, ticks: I) -> Vec<TickLabel>
    where
        I: IntoIterator<Item = (f64, T)>,
        T: Into<String>,
    {
        tick_labels(ticks, self.scale, self.config)
    }

    /// Runs the stages over `labels`.
    pub fn render(&self, labels: Vec<TickLabel>) -> AxisLabels {
        render(labels, self.config, self.scale, self.measurer)
    }

    /// Builds labels for `ticks` and renders them.
    pub fn render_ticks<I, T>(&self, ticks: I) -> AxisLabels
    where
        I: IntoIterator<Item = (f64, T)>,
        T: Into<String>,
    {
        self.render(self.labels_for_ticks(ticks))
    }
}

/// Runs the stages over `labels` for one axis.
///
/// `labels` must be in tick order. The returned labels are in the same order
/// and only differ in their text, anchor, baseline offset, font size,
/// rotation, bounds and visibility.
pub fn render<S, M>(
    labels: Vec<TickLabel>,
    config: &AxisConfig,
    scale: &S,
    measurer: &M,
) -> AxisLabels
where
    S: Scale + ?Sized,
    M: LabelMeasurer + ?Sized,
{
    let options = &config.labels;
    let marker = options.truncate_marker.as_deref();

    warn_if_unordered(&labels, scale);

    let labels: Vec<TickLabel> = labels
        .into_iter()
        .map(|mut label| {
            label.font_size = options.font_size;
            label
        })
        .map(|label| truncate(label, options.truncate, marker))
        .map(|label| rotate(label, config, measurer))
        .collect();
    let labels = filter(labels, config, scale, measurer);

    for label in &labels {
        if let Some(bounds) = label.bounds
            && bounds.area() == 0.0
            && !label.text.is_empty()
        {
            log::warn!(
                "label {:?} on {} axis measured as an empty box",
                label.text,
                config.position
            );
        }
    }

    let out = AxisLabels {
        labels,
        display: options.show,
        position: config.position,
    };
    log::debug!(
        "{} axis: {} labels, {} kept, display={}",
        config.position,
        out.len(),
        out.labels.iter().filter(|l| l.visible).count(),
        out.display
    );
    out
}

fn warn_if_unordered<S: Scale + ?Sized>(labels: &[TickLabel], scale: &S) {
    let pixels: Vec<f64> = labels.iter().map(|l| scale.map(l.value)).collect();
    let ascending = pixels.windows(2).all(|w| w[0] <= w[1]);
    let descending = pixels.windows(2).all(|w| w[0] >= w[1]);
    if !(ascending || descending) {
        log::warn!(
            "tick labels are not in scale order; overlap filtering assumes they are: {pixels:?}"
        );
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use kurbo::{Point, Rect, Size};
    use vizir_text::HeuristicTextMeasurer;

    use super::*;
    use crate::label::TextAnchor;
    use crate::measure::TextLabelMeasurer;
    use crate::scale::{ScaleBand, ScaleLinear};

    struct FixedMeasurer(f64, f64);

    impl LabelMeasurer for FixedMeasurer {
        fn measure(&self, label: &TickLabel) -> Rect {
            Rect::from_origin_size(label.baseline_origin(), (self.0, self.1))
        }
    }

    fn ten_ticks() -> std::vec::Vec<(f64, std::string::String)> {
        (0..10)
            .map(|i| (f64::from(i * 10), std::format!("{}", i * 10)))
            .collect()
    }

    #[test]
    fn hidden_group_still_runs_every_stage() {
        let scale = ScaleLinear::new((0.0, 100.0), (0.0, 100.0));
        let shown = AxisConfig::bottom(Size::new(100.0, 20.0))
            .with_rotate(45)
            .with_truncate(1);
        let hidden = shown.clone().with_labels_visible(false);
        let m = FixedMeasurer(15.0, 10.0);

        let a = AxisLabelPipeline::new(&shown, &scale, &m).render_ticks(ten_ticks());
        let b = AxisLabelPipeline::new(&hidden, &scale, &m).render_ticks(ten_ticks());

        assert!(a.is_displayed());
        assert!(!b.is_displayed());
        assert_eq!(a.labels(), b.labels());
        assert_eq!(b.rendered().count(), 0);
        assert!(b.labels().iter().all(|l| l.is_rotated()));
        assert_eq!(b.labels()[3].text, "3");
        assert_eq!(b.kept_values(), a.kept_values());
    }

    #[test]
    fn order_and_length_are_preserved() {
        let scale = ScaleLinear::new((0.0, 100.0), (0.0, 100.0));
        let config = AxisConfig::bottom(Size::new(100.0, 20.0));
        let m = FixedMeasurer(15.0, 10.0);
        let out = AxisLabelPipeline::new(&config, &scale, &m).render_ticks(ten_ticks());

        assert_eq!(out.len(), 10);
        let values: std::vec::Vec<f64> = out.labels().iter().map(|l| l.value).collect();
        assert_eq!(values, (0..10).map(|i| f64::from(i * 10)).collect::<std::vec::Vec<_>>());
        assert_eq!(out.kept_values(), std::vec![10.0, 30.0, 50.0, 70.0, 90.0]);
        assert_eq!(out.rendered().count(), 5);
    }

    #[test]
    fn filter_off_keeps_everything_in_place() {
        let scale = ScaleLinear::new((0.0, 100.0), (0.0, 100.0));
        let config = AxisConfig::bottom(Size::new(100.0, 20.0)).with_filter(false);
        let m = FixedMeasurer(40.0, 10.0);
        let pipeline = AxisLabelPipeline::new(&config, &scale, &m);
        let before = pipeline.labels_for_ticks(ten_ticks());
        let out = pipeline.render(before.clone());

        assert!(out.labels().iter().all(|l| l.visible));
        for (a, b) in before.iter().zip(out.labels()) {
            assert_eq!(a.position, b.position);
            assert_eq!(a.anchor, b.anchor);
        }
    }

    #[test]
    fn font_size_is_applied_before_measuring() {
        let scale = ScaleLinear::new((0.0, 100.0), (0.0, 400.0));
        let config = AxisConfig::bottom(Size::new(400.0, 20.0)).with_font_size(20.0);
        let m = TextLabelMeasurer::new(HeuristicTextMeasurer::default());
        let mut label = TickLabel::new(50.0, "abc", Point::new(200.0, 9.0), TextAnchor::Middle);
        label.font_size = 3.0;

        let out = render(std::vec![label], &config, &scale, &m);

        let label = &out.labels()[0];
        assert_eq!(label.font_size, 20.0);
        // Three glyphs at 0.6em.
        assert!((label.size().width - 36.0).abs() < 1e-9);
    }

    #[test]
    fn truncation_happens_before_measurement() {
        let scale = ScaleBand::new((0.0, 300.0), 3);
        let config = AxisConfig::bottom(Size::new(300.0, 20.0)).with_truncate(2);
        let m = TextLabelMeasurer::new(HeuristicTextMeasurer::default());
        let out = AxisLabelPipeline::new(&config, &scale, &m).render_ticks([
            (0.0, "Northern"),
            (1.0, "Southern"),
            (2.0, "Eastern"),
        ]);

        for label in out.labels() {
            assert_eq!(label.text.chars().count(), 2);
            assert!((label.size().width - 12.0).abs() < 1e-9);
        }
        assert_eq!(out.labels()[0].full_text, "Northern");
    }

    #[test]
    fn rotation_is_measured_by_the_filter() {
        let scale = ScaleLinear::new((0.0, 100.0), (0.0, 100.0));
        let config = AxisConfig::bottom(Size::new(100.0, 20.0)).with_rotate(90);
        let m = TextLabelMeasurer::new(HeuristicTextMeasurer::default());
        let flat = AxisConfig::bottom(Size::new(100.0, 20.0));

        // 20 glyphs: 120px flat, 10px once turned.
        let long = [(50.0, "twenty character lbl")];
        let turned = AxisLabelPipeline::new(&config, &scale, &m).render_ticks(long);
        let unturned = AxisLabelPipeline::new(&flat, &scale, &m).render_ticks(long);

        let turned = &turned.labels()[0];
        let unturned = &unturned.labels()[0];
        assert!((turned.size().width - unturned.size().height).abs() < 1e-9);
        assert!(turned.visible);
        assert!(!unturned.visible);
    }

    #[test]
    fn labels_can_be_taken_out_of_a_pass() {
        let scale = ScaleLinear::new((0.0, 100.0), (0.0, 100.0));
        let config = AxisConfig::bottom(Size::new(100.0, 20.0)).with_truncate(1);
        let m = FixedMeasurer(15.0, 10.0);
        let pipeline = AxisLabelPipeline::new(&config, &scale, &m);
        assert_eq!(pipeline.config().labels.truncate, 1);

        let out = pipeline.render_ticks(ten_ticks());
        let kept = out.kept_values();
        let labels = out.into_labels();
        assert_eq!(labels.len(), 10);
        assert_eq!(labels[2].text, "2");
        assert_eq!(labels[2].full_text, "20");
        let visible: std::vec::Vec<f64> =
            labels.iter().filter(|l| l.visible).map(|l| l.value).collect();
        assert_eq!(visible, kept);
    }

    #[test]
    fn empty_tick_set() {
        let scale = ScaleLinear::new((0.0, 1.0), (0.0, 100.0));
        let config = AxisConfig::left(Size::new(40.0, 100.0));
        let m = FixedMeasurer(1.0, 1.0);
        let out = AxisLabelPipeline::new(&config, &scale, &m)
            .render_ticks(core::iter::empty::<(f64, &str)>());
        assert!(out.is_empty());
        assert_eq!(out.position(), Position::Left);
        assert!(out.kept_values().is_empty());
    }
}

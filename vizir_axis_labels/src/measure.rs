// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The label measurement port.
//!
//! The rotation and overlap stages need each label's bounding box as it is
//! currently rendered. [`LabelMeasurer`] is that capability; any backend
//! (shaping engine, canvas, headless layout) can provide it.
//! [`TextLabelMeasurer`] derives it from a plain [`TextMeasurer`].

use kurbo::Rect;
use vizir_text::{TextMeasurer, TextStyle};

use crate::label::{TextAnchor, TickLabel};

/// Measures a label in its current state.
pub trait LabelMeasurer {
    /// Returns the axis-aligned bounding box of `label`, in axis coordinates,
    /// reflecting its current text, anchor, baseline offset and rotation.
    fn measure(&self, label: &TickLabel) -> Rect;
}

impl<T: LabelMeasurer + ?Sized> LabelMeasurer for &T {
    fn measure(&self, label: &TickLabel) -> Rect {
        (**self).measure(label)
    }
}

/// Adapts a [`TextMeasurer`] into a [`LabelMeasurer`].
///
/// The unrotated box spans the advance width (placed according to the anchor)
/// and ascent/descent around the baseline. A rotated label reports the
/// bounding box of its rotated box.
#[derive(Clone, Debug, Default)]
pub struct TextLabelMeasurer<M> {
    text: M,
    style: TextStyle,
}

impl<M: TextMeasurer> TextLabelMeasurer<M> {
    /// Wraps `text` using the default font family and weight.
    pub fn new(text: M) -> Self {
        Self {
            text,
            style: TextStyle::default(),
        }
    }

    /// Uses `style` for family, weight and slant; the font size always comes
    /// from the label.
    pub fn with_style(mut self, style: TextStyle) -> Self {
        self.style = style;
        self
    }

    /// Returns the wrapped text measurer.
    pub fn text_measurer(&self) -> &M {
        &self.text
    }

    /// Measures `label` ignoring any rotation.
    pub fn unrotated_bounds(&self, label: &TickLabel) -> Rect {
        let style = TextStyle {
            font_size: label.font_size,
            ..self.style.clone()
        };
        let metrics = self.text.measure(&label.text, &style);
        let width = metrics.advance_width;
        let origin = label.baseline_origin();
        let x0 = match label.anchor {
            TextAnchor::Start => origin.x,
            TextAnchor::Middle => origin.x - 0.5 * width,
            TextAnchor::End => origin.x - width,
        };
        Rect::new(
            x0,
            origin.y - metrics.ascent,
            x0 + width,
            origin.y + metrics.descent + metrics.leading,
        )
    }
}

impl<M: TextMeasurer> LabelMeasurer for TextLabelMeasurer<M> {
    fn measure(&self, label: &TickLabel) -> Rect {
        let bounds = self.unrotated_bounds(label);
        match &label.rotation {
            Some(rotation) => rotation.affine().transform_rect_bbox(bounds),
            None => bounds,
        }
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use kurbo::Point;
    use vizir_text::HeuristicTextMeasurer;

    use super::*;
    use crate::label::Rotation;

    fn label(anchor: TextAnchor) -> TickLabel {
        let mut label = TickLabel::new(0.0, "abcde", Point::new(50.0, 10.0), anchor);
        label.font_size = 10.0;
        label
    }

    #[test]
    fn anchor_places_the_box() {
        let m = TextLabelMeasurer::new(HeuristicTextMeasurer::default());
        let start = m.measure(&label(TextAnchor::Start));
        let middle = m.measure(&label(TextAnchor::Middle));
        let end = m.measure(&label(TextAnchor::End));
        assert!((start.x0 - 50.0).abs() < 1e-9);
        assert!((middle.x0 - 35.0).abs() < 1e-9);
        assert!((end.x1 - 50.0).abs() < 1e-9);
        assert!((start.width() - 30.0).abs() < 1e-9);
        assert!((start.height() - 10.0).abs() < 1e-9);
        assert!((start.y0 - 2.0).abs() < 1e-9);
    }

    #[test]
    fn dy_shifts_the_box_down() {
        let m = TextLabelMeasurer::new(HeuristicTextMeasurer::default());
        let mut l = label(TextAnchor::Start);
        let before = m.measure(&l);
        l.dy_em = 0.3;
        let after = m.measure(&l);
        assert!((after.y0 - before.y0 - 3.0).abs() < 1e-9);
    }

    #[test]
    fn quarter_turn_swaps_width_and_height() {
        let m = TextLabelMeasurer::new(HeuristicTextMeasurer::default());
        let mut l = label(TextAnchor::Middle);
        let flat = m.measure(&l);
        l.rotation = Some(Rotation {
            angle: -90.0,
            pivot: flat.center(),
        });
        let turned = m.measure(&l);
        assert!((turned.width() - flat.height()).abs() < 1e-9);
        assert!((turned.height() - flat.width()).abs() < 1e-9);
        assert!((turned.center() - flat.center()).hypot() < 1e-9);
    }

    #[test]
    fn style_supplies_everything_but_the_size() {
        use core::cell::RefCell;
        use vizir_text::{FontFamily, FontWeight, TextMetrics};

        #[derive(Default)]
        struct Recording(RefCell<std::vec::Vec<TextStyle>>);

        impl TextMeasurer for Recording {
            fn measure(&self, text: &str, style: &TextStyle) -> TextMetrics {
                self.0.borrow_mut().push(style.clone());
                HeuristicTextMeasurer::default().measure(text, style)
            }
        }

        let style = TextStyle::new(40.0)
            .with_family(FontFamily::Monospace)
            .with_weight(FontWeight::BOLD);
        let m = TextLabelMeasurer::new(Recording::default()).with_style(style);
        let plain = TextLabelMeasurer::new(HeuristicTextMeasurer::default());

        let l = label(TextAnchor::Middle);
        assert_eq!(m.measure(&l), plain.measure(&l));

        let seen = m.text_measurer().0.borrow();
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0].font_size, 10.0);
        assert_eq!(seen[0].font_family, FontFamily::Monospace);
        assert_eq!(seen[0].font_weight, FontWeight::BOLD);
    }

    #[test]
    fn empty_text_measures_as_empty_box() {
        let m = TextLabelMeasurer::new(HeuristicTextMeasurer::default());
        let mut l = label(TextAnchor::Middle);
        l.text.clear();
        assert_eq!(m.measure(&l).area(), 0.0);
    }
}

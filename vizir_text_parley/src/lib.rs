// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Parley-backed text measurement adapter.
//!
//! This crate implements [`vizir_text::TextMeasurer`] using Parley, enabling
//! shaping-aware metrics for axis label truncation, rotation and overlap
//! filtering.
//!
//! Axis labels are measured several times per render pass (after truncation,
//! after rotation) and usually repeat across passes, so results are memoised
//! per `(text, style)` pair.

#![no_std]

extern crate alloc;

use alloc::borrow::Cow;
use alloc::string::{String, ToString};
use core::cell::RefCell;

use hashbrown::HashMap;
use parley::style::{FontFamily as ParleyFontFamily, FontStack, GenericFamily, StyleProperty};
use parley::{Alignment, AlignmentOptions, FontContext, FontStyle as ParleyFontStyle, FontWeight};
use vizir_text::{FontFamily, FontStyle, TextMeasurer, TextMetrics, TextStyle};

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
struct CacheKey {
    text: String,
    font_size_bits: u64,
    family: FontFamily,
    weight: u16,
    style: FontStyle,
}

impl CacheKey {
    fn new(text: &str, style: &TextStyle) -> Self {
        Self {
            text: text.to_string(),
            font_size_bits: style.font_size.to_bits(),
            family: style.font_family.clone(),
            weight: style.font_weight.0,
            style: style.font_style,
        }
    }
}

/// A [`TextMeasurer`] backed by Parley.
///
/// Only the first line of the measured text is considered. The measurer is
/// `!Sync`: it is meant to be owned by a single render loop.
pub struct ParleyTextMeasurer {
    font_cx: RefCell<FontContext>,
    layout_cx: RefCell<parley::LayoutContext<()>>,
    cache: RefCell<HashMap<CacheKey, TextMetrics>>,
    display_scale: f32,
    quantize: bool,
    cache_limit: usize,
}

impl core::fmt::Debug for ParleyTextMeasurer {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ParleyTextMeasurer")
            .field("display_scale", &self.display_scale)
            .field("quantize", &self.quantize)
            .field("cache_limit", &self.cache_limit)
            .field("cached", &self.cache.borrow().len())
            .finish_non_exhaustive()
    }
}

impl ParleyTextMeasurer {
    /// Creates a new Parley-backed text measurer using the system font
    /// configuration.
    #[must_use]
    pub fn new() -> Self {
        Self {
            font_cx: RefCell::new(FontContext::new()),
            layout_cx: RefCell::new(parley::LayoutContext::new()),
            cache: RefCell::new(HashMap::new()),
            display_scale: 1.0,
            quantize: true,
            cache_limit: 4096,
        }
    }

    /// Sets the display scale passed to Parley.
    ///
    /// This is typically a device pixel ratio. Measurements are scaled back
    /// into logical coordinates.
    #[must_use]
    pub fn with_display_scale(mut self, display_scale: f32) -> Self {
        self.display_scale = display_scale.max(0.0);
        self.cache.get_mut().clear();
        self
    }

    /// Sets whether Parley should quantize layout coordinates to pixel boundaries.
    #[must_use]
    pub fn with_quantize(mut self, quantize: bool) -> Self {
        self.quantize = quantize;
        self.cache.get_mut().clear();
        self
    }

    /// Sets the maximum number of memoised measurements.
    ///
    /// When the limit is reached the cache is flushed. `0` disables caching.
    #[must_use]
    pub fn with_cache_limit(mut self, cache_limit: usize) -> Self {
        self.cache_limit = cache_limit;
        self.cache.get_mut().clear();
        self
    }

    /// Number of memoised measurements.
    pub fn cached_len(&self) -> usize {
        self.cache.borrow().len()
    }

    /// Drops all memoised measurements (e.g. after fonts were registered).
    pub fn clear_cache(&self) {
        self.cache.borrow_mut().clear();
    }

    fn parley_font_stack(family: &FontFamily) -> FontStack<'_> {
        let family = match family {
            FontFamily::Serif => ParleyFontFamily::Generic(GenericFamily::Serif),
            FontFamily::SansSerif => ParleyFontFamily::Generic(GenericFamily::SansSerif),
            FontFamily::Monospace => ParleyFontFamily::Generic(GenericFamily::Monospace),
            FontFamily::Named(name) => ParleyFontFamily::Named(Cow::Borrowed(name.as_ref())),
        };
        FontStack::from(family)
    }

    fn parley_font_style(style: FontStyle) -> ParleyFontStyle {
        match style {
            FontStyle::Normal => ParleyFontStyle::Normal,
            FontStyle::Italic => ParleyFontStyle::Italic,
            FontStyle::Oblique => ParleyFontStyle::Oblique(None),
        }
    }

    fn font_size_f32(font_size: f64) -> f32 {
        if !font_size.is_finite() {
            return 0.0;
        }
        let font_size = font_size.max(0.0);
        if font_size >= f64::from(f32::MAX) {
            f32::MAX
        } else {
            #[allow(
                clippy::cast_possible_truncation,
                reason = "Value is clamped to f32::MAX above"
            )]
            {
                font_size as f32
            }
        }
    }

    fn shape(&self, text: &str, style: &TextStyle) -> TextMetrics {
        let scale = self.display_scale.max(1.0e-6);

        let mut font_cx = self.font_cx.borrow_mut();
        let mut layout_cx = self.layout_cx.borrow_mut();

        let mut builder = layout_cx.ranged_builder(&mut font_cx, text, scale, self.quantize);
        builder.push_default(StyleProperty::FontSize(Self::font_size_f32(
            style.font_size,
        )));
        builder.push_default(StyleProperty::FontStack(Self::parley_font_stack(
            &style.font_family,
        )));
        builder.push_default(StyleProperty::FontStyle(Self::parley_font_style(
            style.font_style,
        )));
        builder.push_default(StyleProperty::FontWeight(FontWeight::new(f32::from(
            style.font_weight.0,
        ))));

        let mut layout: parley::Layout<()> = builder.build(text);
        layout.break_all_lines(None);
        layout.align(None, Alignment::Start, AlignmentOptions::default());

        let Some(line) = layout.lines().next() else {
            return TextMetrics::EMPTY;
        };

        let m = line.metrics();
        let scale = f64::from(scale);
        TextMetrics {
            advance_width: f64::from(m.advance) / scale,
            ascent: f64::from(m.ascent) / scale,
            descent: f64::from(m.descent) / scale,
            leading: f64::from(m.leading) / scale,
        }
    }
}

impl Default for ParleyTextMeasurer {
    fn default() -> Self {
        Self::new()
    }
}

impl TextMeasurer for ParleyTextMeasurer {
    fn measure(&self, text: &str, style: &TextStyle) -> TextMetrics {
        let text = text.split('\n').next().unwrap_or("");
        if text.is_empty() {
            return TextMetrics::EMPTY;
        }
        if self.cache_limit == 0 {
            return self.shape(text, style);
        }

        let key = CacheKey::new(text, style);
        if let Some(metrics) = self.cache.borrow().get(&key) {
            return *metrics;
        }
        let metrics = self.shape(text, style);
        let mut cache = self.cache.borrow_mut();
        if cache.len() >= self.cache_limit {
            cache.clear();
        }
        cache.insert(key, metrics);
        metrics
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    #[test]
    fn parley_measurer_is_nonzero_for_nonempty_text() {
        let m = ParleyTextMeasurer::new();
        let metrics = m.measure("Category", &TextStyle::new(12.0));
        assert!(metrics.advance_width > 0.0);
        assert!(metrics.ascent > 0.0);
        assert!(metrics.descent > 0.0);
    }

    #[test]
    fn truncated_label_is_narrower() {
        let m = ParleyTextMeasurer::new();
        let style = TextStyle::new(12.0);
        let full = m.measure("Category Seven", &style);
        let short = m.measure("Categ", &style);
        assert!(short.advance_width < full.advance_width);
    }

    #[test]
    fn repeated_measurements_hit_the_cache() {
        let m = ParleyTextMeasurer::new();
        let style = TextStyle::new(12.0);
        let a = m.measure("North", &style);
        let b = m.measure("North", &style);
        assert_eq!(a, b);
        assert_eq!(m.cached_len(), 1);

        m.measure("North", &TextStyle::new(14.0));
        assert_eq!(m.cached_len(), 2);
    }

    #[test]
    fn cache_can_be_disabled() {
        let m = ParleyTextMeasurer::new().with_cache_limit(0);
        m.measure("North", &TextStyle::new(12.0));
        assert_eq!(m.cached_len(), 0);
    }

    #[test]
    fn empty_text_is_not_cached() {
        let m = ParleyTextMeasurer::new();
        assert_eq!(m.measure("", &TextStyle::new(12.0)), TextMetrics::EMPTY);
        assert_eq!(m.cached_len(), 0);
    }
}

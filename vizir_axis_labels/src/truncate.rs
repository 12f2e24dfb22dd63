// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Label truncation.

extern crate alloc;

use alloc::borrow::Cow;
use alloc::string::String;

use crate::label::TickLabel;

/// Shortens `text` to at most `max_chars` characters.
///
/// `max_chars == 0` disables truncation. Text with at most `max_chars`
/// characters is returned unchanged. Otherwise the first `max_chars`
/// characters are kept and `marker`, if any, is appended after them.
///
/// Truncation is idempotent: truncating the result again with the same
/// arguments yields the same text.
pub fn truncate_text<'a>(text: &'a str, max_chars: usize, marker: Option<&str>) -> Cow<'a, str> {
    if max_chars == 0 {
        return Cow::Borrowed(text);
    }
    let Some((cut, _)) = text.char_indices().nth(max_chars) else {
        return Cow::Borrowed(text);
    };
    let prefix = &text[..cut];
    match marker {
        Some(marker) if !marker.is_empty() => {
            let mut out = String::with_capacity(cut + marker.len());
            out.push_str(prefix);
            out.push_str(marker);
            Cow::Owned(out)
        }
        _ => Cow::Borrowed(prefix),
    }
}

/// Truncates the rendered text of `label`, keeping [`TickLabel::full_text`].
///
/// Never hides a label and never touches its measured bounds.
pub fn truncate(mut label: TickLabel, max_chars: usize, marker: Option<&str>) -> TickLabel {
    let truncated = match truncate_text(&label.text, max_chars, marker) {
        Cow::Borrowed(t) if t.len() == label.text.len() => None,
        t => Some(t.into_owned()),
    };
    if let Some(text) = truncated {
        label.text = text;
    }
    label
}

#[cfg(test)]
mod tests {
    extern crate std;

    use kurbo::Point;

    use super::*;
    use crate::label::TextAnchor;

    fn label(text: &str) -> TickLabel {
        TickLabel::new(7.0, text, Point::new(3.0, 4.0), TextAnchor::Middle)
    }

    #[test]
    fn keeps_prefix_and_full_text() {
        let out = truncate(label("Category Seven"), 5, None);
        assert_eq!(out.text, "Categ");
        assert_eq!(out.full_text, "Category Seven");
        assert!(out.is_truncated());
        assert!(out.visible);
    }

    #[test]
    fn zero_length_disables_truncation() {
        let out = truncate(label("Category Seven"), 0, None);
        assert_eq!(out.text, "Category Seven");
        assert!(!out.is_truncated());
    }

    #[test]
    fn short_text_is_untouched() {
        assert_eq!(truncate_text("North", 5, None), "North");
        assert_eq!(truncate_text("North", 50, Some("…")), "North");
        assert!(matches!(truncate_text("North", 5, None), Cow::Borrowed(_)));
    }

    #[test]
    fn counts_characters_not_bytes() {
        assert_eq!(truncate_text("żółw morski", 4, None), "żółw");
        assert_eq!(truncate_text("日本語のラベル", 3, None), "日本語");
    }

    #[test]
    fn marker_is_opt_in() {
        assert_eq!(truncate_text("Category Seven", 5, Some("...")), "Categ...");
        assert_eq!(truncate_text("Category Seven", 5, Some("")), "Categ");
    }

    #[test]
    fn truncation_is_idempotent() {
        for marker in [None, Some("…"), Some("...")] {
            for max in [1, 3, 5, 8, 20] {
                let once = truncate(label("Category Seven"), max, marker);
                let twice = truncate(once.clone(), max, marker);
                assert_eq!(once, twice, "max={max} marker={marker:?}");
            }
        }
    }

    #[test]
    fn position_and_bounds_are_untouched() {
        let mut l = label("Category Seven");
        l.bounds = Some(kurbo::Rect::new(0.0, 0.0, 10.0, 10.0));
        let out = truncate(l.clone(), 3, None);
        assert_eq!(out.position, l.position);
        assert_eq!(out.bounds, l.bounds);
        assert_eq!(out.anchor, l.anchor);
    }
}

// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Minimal SVG output for `vizir_axis_labels_demo`.

use kurbo::{Point, Rect, Size};
use peniko::Brush;
use vizir_axis_labels::{AxisConfig, AxisLabels, Position, TickLabel};

#[derive(Debug)]
pub(crate) struct SvgDocument {
    size: Size,
    body: String,
}

impl SvgDocument {
    pub(crate) fn new(size: Size) -> Self {
        Self {
            size,
            body: String::new(),
        }
    }

    pub(crate) fn push_heading(&mut self, at: Point, text: &str) {
        self.body.push_str(&format!(
            r#"<text x="{}" y="{}" font-size="12" font-weight="bold">{}</text>"#,
            at.x,
            at.y,
            escape_xml(text)
        ));
        self.body.push('\n');
    }

    /// Draws the region outline, axis line, tick marks and labels of one axis
    /// whose line starts at `origin`.
    pub(crate) fn push_axis(&mut self, origin: Point, config: &AxisConfig, labels: &AxisLabels) {
        self.body.push_str(&format!(
            r#"<g transform="translate({} {})">"#,
            origin.x, origin.y
        ));
        self.body.push('\n');

        let region = region_rect(config);
        self.body.push_str(&format!(
            r##"<rect x="{}" y="{}" width="{}" height="{}" fill="none" stroke="#dddddd" stroke-dasharray="2 2"/>"##,
            region.x0,
            region.y0,
            region.width(),
            region.height()
        ));
        self.body.push('\n');

        let (x1, y1) = if config.is_horizontal() {
            (config.region.width, 0.0)
        } else {
            (0.0, config.region.height)
        };
        self.body.push_str(&format!(
            r#"<line x1="0" y1="0" x2="{x1}" y2="{y1}" stroke="black"/>"#
        ));
        self.body.push('\n');

        for label in labels.labels() {
            let (a, b) = tick_line(config, label);
            self.body.push_str(&format!(
                r#"<line x1="{}" y1="{}" x2="{}" y2="{}" stroke="black"/>"#,
                a.x, a.y, b.x, b.y
            ));
            self.body.push('\n');
        }

        self.body.push_str("<g");
        if !labels.is_displayed() {
            self.body.push_str(r#" display="none""#);
        }
        self.body.push_str(">\n");
        for label in labels.labels() {
            self.push_label(label, &config.labels.fill);
        }
        self.body.push_str("</g>\n</g>\n");
    }

    fn push_label(&mut self, label: &TickLabel, fill: &Brush) {
        let out = &mut self.body;
        out.push_str(&format!(
            r#"<text x="{}" y="{}" dy="{}em" font-size="{}" text-anchor="{}""#,
            label.position.x,
            label.position.y,
            label.dy_em,
            label.font_size,
            label.anchor.as_str()
        ));
        if let Some(rotation) = label.rotation {
            out.push_str(&format!(r#" transform="{rotation}""#));
        }
        write_paint_attr(out, "fill", fill);
        if !label.visible {
            out.push_str(r#" display="none""#);
        }
        out.push('>');
        if label.is_truncated() {
            out.push_str(&format!("<title>{}</title>", escape_xml(&label.full_text)));
        }
        out.push_str(&escape_xml(&label.text));
        out.push_str("</text>\n");
    }

    pub(crate) fn to_svg_string(&self) -> String {
        let mut out = String::new();
        out.push_str(r#"<svg xmlns="http://www.w3.org/2000/svg" "#);
        out.push_str(&format!(
            r#"viewBox="0 0 {w} {h}" width="{w}" height="{h}" font-family="sans-serif">"#,
            w = self.size.width,
            h = self.size.height,
        ));
        out.push('\n');
        out.push_str(r#"<rect width="100%" height="100%" fill="white"/>"#);
        out.push('\n');
        out.push_str(&self.body);
        out.push_str("</svg>\n");
        out
    }
}

/// The region the labels are fitted into, on the outer side of the axis line.
fn region_rect(config: &AxisConfig) -> Rect {
    let Size { width, height } = config.region;
    match config.position {
        Position::Bottom => Rect::new(0.0, 0.0, width, height),
        Position::Top => Rect::new(0.0, -height, width, 0.0),
        Position::Left => Rect::new(-width, 0.0, 0.0, height),
        Position::Right => Rect::new(0.0, 0.0, width, height),
    }
}

fn tick_line(config: &AxisConfig, label: &TickLabel) -> (Point, Point) {
    let size = config.tick_size;
    match config.position {
        Position::Bottom => (
            Point::new(label.position.x, 0.0),
            Point::new(label.position.x, size),
        ),
        Position::Top => (
            Point::new(label.position.x, 0.0),
            Point::new(label.position.x, -size),
        ),
        Position::Left => (
            Point::new(0.0, label.position.y),
            Point::new(-size, label.position.y),
        ),
        Position::Right => (
            Point::new(0.0, label.position.y),
            Point::new(size, label.position.y),
        ),
    }
}

fn svg_paint(brush: &Brush) -> (String, Option<f64>) {
    match brush {
        Brush::Solid(color) => {
            let rgba = color.to_rgba8();
            let fill = format!("#{:02x}{:02x}{:02x}", rgba.r, rgba.g, rgba.b);
            let fill_opacity = if rgba.a == 255 {
                None
            } else {
                Some(f64::from(rgba.a) / 255.0)
            };
            (fill, fill_opacity)
        }
        _ => ("none".to_string(), None),
    }
}

fn write_paint_attr(out: &mut String, name: &str, brush: &Brush) {
    let (value, opacity) = svg_paint(brush);
    out.push_str(&format!(r#" {name}="{value}""#));
    if let Some(o) = opacity {
        out.push_str(&format!(r#" {name}-opacity="{o}""#));
    }
}

fn escape_xml(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}

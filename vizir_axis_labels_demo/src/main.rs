// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Axis label layout demos for `vizir_axis_labels`.
//!
//! Writes `vizir_axis_labels_demo.svg`. Set `RUST_LOG=vizir_axis_labels=trace`
//! to see every overlap decision.

mod svg;

use kurbo::{Point, Size};
use peniko::color::palette::css;
use vizir_axis_labels::{
    AxisConfig, AxisLabelPipeline, AxisLabels, LabelMeasurer, Scale, ScaleBand,
    ScaleLinear, ScalePoint, TextLabelMeasurer,
};
use vizir_text::TextMeasurer;

const INDUSTRIES: [&str; 14] = [
    "Agriculture",
    "Mining",
    "Construction",
    "Manufacturing",
    "Utilities",
    "Wholesale trade",
    "Retail trade",
    "Transportation",
    "Information",
    "Finance and insurance",
    "Real estate",
    "Education",
    "Health care",
    "Accommodation",
];

const MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

struct AxisDemo {
    heading: &'static str,
    config: AxisConfig,
    labels: AxisLabels,
    /// Where the axis line starts, relative to the demo's top-left corner.
    origin: Point,
    height: f64,
}

fn main() {
    env_logger::init();

    let text = demo_text_measurer();
    let measurer = TextLabelMeasurer::new(&*text);

    let demos = vec![
        categories_demo(&measurer, 0, "Categories, no rotation"),
        categories_demo(&measurer, 45, "Categories, truncated and rotated 45°"),
        months_demo(&measurer),
        linear_demo(&measurer),
        hidden_demo(&measurer),
    ];

    let width = 560.0;
    let height: f64 = demos.iter().map(|d| d.height + 30.0).sum();
    let mut doc = svg::SvgDocument::new(Size::new(width, height + 10.0));
    let mut y = 20.0;
    for demo in &demos {
        log::info!(
            "{}: kept {} of {} labels",
            demo.heading,
            demo.labels.kept_values().len(),
            demo.labels.len()
        );
        doc.push_heading(Point::new(10.0, y), demo.heading);
        let origin = Point::new(40.0 + demo.origin.x, y + 10.0 + demo.origin.y);
        doc.push_axis(origin, &demo.config, &demo.labels);
        y += demo.height + 30.0;
    }

    std::fs::write("vizir_axis_labels_demo.svg", doc.to_svg_string())
        .expect("write vizir_axis_labels_demo.svg");
    println!("wrote vizir_axis_labels_demo.svg");
}

fn demo_text_measurer() -> Box<dyn TextMeasurer> {
    #[cfg(feature = "parley")]
    {
        Box::new(vizir_text_parley::ParleyTextMeasurer::new())
    }

    #[cfg(not(feature = "parley"))]
    {
        Box::new(vizir_text::HeuristicTextMeasurer::default())
    }
}

fn render<S: Scale>(
    config: &AxisConfig,
    scale: &S,
    measurer: &dyn LabelMeasurer,
    ticks: impl IntoIterator<Item = (f64, String)>,
) -> AxisLabels {
    config.validate().expect("demo axis config is valid");
    AxisLabelPipeline::new(config, scale, measurer).render_ticks(ticks)
}

fn categories_demo(measurer: &dyn LabelMeasurer, rotate: i32, heading: &'static str) -> AxisDemo {
    let scale = ScaleBand::new((0.0, 480.0), INDUSTRIES.len());
    let mut config = AxisConfig::bottom(Size::new(480.0, 80.0)).with_rotate(rotate);
    if rotate != 0 {
        config = config.with_truncate(10).with_truncate_marker("…");
    }
    let ticks = INDUSTRIES
        .iter()
        .enumerate()
        .map(|(i, name)| (i as f64, (*name).to_string()));
    let labels = render(&config, &scale, measurer, ticks);
    AxisDemo {
        heading,
        config,
        labels,
        origin: Point::ZERO,
        height: 90.0,
    }
}

fn months_demo(measurer: &dyn LabelMeasurer) -> AxisDemo {
    let scale = ScalePoint::new((0.0, 480.0), MONTHS.len()).with_padding(0.5);
    let config = AxisConfig::top(Size::new(480.0, 70.0))
        .with_rotate(90)
        .with_fill(css::STEEL_BLUE);
    let ticks = MONTHS
        .iter()
        .enumerate()
        .map(|(i, name)| (i as f64, (*name).to_string()));
    let labels = render(&config, &scale, measurer, ticks);
    AxisDemo {
        heading: "Top axis, rotated 90°",
        config,
        labels,
        origin: Point::new(0.0, 70.0),
        height: 80.0,
    }
}

fn linear_demo(measurer: &dyn LabelMeasurer) -> AxisDemo {
    let height = 160.0;
    let scale = ScaleLinear::new((0.0, 1180.0), (height, 0.0)).nice(20);
    let config = AxisConfig::left(Size::new(50.0, height)).with_font_size(11.0);
    let ticks = scale.ticks(40).into_iter().map(|v| (v, format!("{v}")));
    let labels = render(&config, &scale, measurer, ticks);
    AxisDemo {
        heading: "Left linear axis, 40 requested ticks",
        config,
        labels,
        origin: Point::new(40.0, 0.0),
        height,
    }
}

fn hidden_demo(measurer: &dyn LabelMeasurer) -> AxisDemo {
    let scale = ScaleLinear::new((0.0, 1.0), (0.0, 480.0));
    let config = AxisConfig::bottom(Size::new(480.0, 20.0)).with_labels_visible(false);
    let ticks = scale.ticks(10).into_iter().map(|v| (v, format!("{v:.1}")));
    let labels = render(&config, &scale, measurer, ticks);
    AxisDemo {
        heading: "Hidden labels (layout still computed)",
        config,
        labels,
        origin: Point::ZERO,
        height: 20.0,
    }
}

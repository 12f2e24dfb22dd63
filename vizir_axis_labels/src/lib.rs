// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tick label layout for chart axes.
//!
//! Given a scale, the ticks of one axis and an [`AxisConfig`], a render pass
//! decides how each label is sized, truncated and rotated, and which labels are
//! shown so that none of them overlap:
//!
//! 1. group visibility and font size,
//! 2. [truncation](truncate()) to a maximum number of characters,
//! 3. [rotation](rotate()) with a position-dependent anchor and pivot,
//! 4. [overlap filtering](filter()), a greedy scan from the start of the axis.
//!
//! Measuring text is delegated to a [`LabelMeasurer`]; [`TextLabelMeasurer`]
//! builds one from any [`vizir_text::TextMeasurer`].
//!
//! ```
//! use kurbo::Size;
//! use vizir_axis_labels::{AxisConfig, AxisLabelPipeline, ScaleLinear, TextLabelMeasurer};
//! use vizir_text::HeuristicTextMeasurer;
//!
//! let scale = ScaleLinear::new((0.0, 100.0), (0.0, 300.0));
//! let config = AxisConfig::bottom(Size::new(300.0, 30.0)).with_rotate(45);
//! let measurer = TextLabelMeasurer::new(HeuristicTextMeasurer::default());
//!
//! let ticks = scale.ticks(10).into_iter().map(|v| (v, format!("{v}")));
//! let labels = AxisLabelPipeline::new(&config, &scale, &measurer).render_ticks(ticks);
//! assert!(labels.rendered().all(|l| l.is_rotated()));
//! ```

#![no_std]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod config;
mod error;
mod filter;
#[cfg(not(feature = "std"))]
mod float;
mod label;
mod measure;
mod pipeline;
mod rotate;
mod scale;
mod truncate;

pub use config::{AxisConfig, LabelOptions, Orientation, Position};
pub use error::ConfigError;
pub use filter::{LabelSpan, OverlapWindow, PADDING_FACTOR, filter};
pub use label::{Rotation, TextAnchor, TickLabel, tick_labels};
pub use measure::{LabelMeasurer, TextLabelMeasurer};
pub use pipeline::{AxisLabelPipeline, AxisLabels, render};
pub use rotate::{HORIZONTAL_BASELINE_EM, effective_angle, rotate, rotated_anchor};
pub use scale::{Scale, ScaleBand, ScaleLinear, ScalePoint};
pub use truncate::{truncate, truncate_text};

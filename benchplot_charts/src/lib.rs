// Copyright 2025 the Benchplot Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Chart building blocks for benchmark report figures.
//!
//! This crate is a small layer between reshaped benchmark data and an image file:
//! - **Scales** map data values into figure coordinates (linear, log, band).
//! - **Guides** (axes, titles) measure themselves for layout and then generate [`Mark`]s.
//! - **Series** builders turn points and box statistics into marks.
//! - [`scatter_figure`] and [`box_figure`] compose the above into a [`Figure`], which
//!   serializes to SVG.
//!
//! Text is not shaped; text marks store unshaped strings and layout uses
//! [`HeuristicTextMeasurer`] for extents.

mod axis;
mod box_mark;
mod chart_spec;
mod figure;
mod format;
mod layout;
mod mark;
mod measure;
mod point_mark;
mod scale;
mod style;
mod svg;
mod title;
pub mod z_order;

pub use axis::{AxisOrient, AxisSpec, AxisStyle, GridStyle, StrokeStyle};
pub use box_mark::{BoxMarkSpec, BoxStats, WHISKER_IQR};
pub use chart_spec::ChartSpec;
pub use figure::{
    BoxPanel, Figure, FigureLabels, SCATTER_X_BASE, SCATTER_Y_BASE, box_figure, scatter_figure,
};
pub use format::{format_log_tick, format_tick_with_step};
pub use layout::{ChartLayout, ChartLayoutSpec, split_columns};
pub use mark::{Mark, MarkPayload, PathMark, RectMark, TextAnchor, TextBaseline, TextMark};
pub use measure::{HeuristicTextMeasurer, TextMeasurer};
pub use point_mark::PointMarkSpec;
pub use scale::{
    ScaleBand, ScaleBandSpec, ScaleContinuous, ScaleLinear, ScaleLinearSpec, ScaleLog,
    ScaleLogSpec, ScaleSpec, nice_step, nice_ticks,
};
pub use style::FigureStyle;
pub use title::TitleSpec;

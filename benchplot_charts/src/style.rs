// Copyright 2025 the Benchplot Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Figure-wide styling.

use peniko::Color;
use peniko::color::palette::css;

use crate::axis::{AxisStyle, GridStyle, StrokeStyle};

/// Immutable figure configuration.
///
/// Sizes are given in inches and points and converted to figure coordinates (pixels) at
/// `dpi`, so the same style renders at any resolution.
#[derive(Clone, Debug, PartialEq)]
pub struct FigureStyle {
    /// Figure width in inches.
    pub width_in: f64,
    /// Figure height in inches.
    pub height_in: f64,
    /// Pixels per inch.
    pub dpi: f64,
    /// Figure title size in points.
    pub title_font_pt: f64,
    /// Panel title size in points.
    pub panel_title_font_pt: f64,
    /// Axis title size in points.
    pub label_font_pt: f64,
    /// Tick label size in points.
    pub tick_font_pt: f64,
    /// Line width in points for axes and box outlines.
    pub line_width_pt: f64,
    /// Scatter marker diameter in points.
    pub marker_size_pt: f64,
    /// Colour of scatter markers and boxes.
    pub series_color: Color,
    /// Colour of box-plot medians.
    pub median_color: Color,
    /// Figure background.
    pub background: Color,
}

impl Default for FigureStyle {
    fn default() -> Self {
        Self {
            width_in: 6.0,
            height_in: 4.0,
            dpi: 500.0,
            title_font_pt: 16.0,
            panel_title_font_pt: 12.0,
            label_font_pt: 10.0,
            tick_font_pt: 10.0,
            line_width_pt: 0.8,
            marker_size_pt: 3.0,
            series_color: css::GREEN,
            median_color: css::ORANGE,
            background: css::WHITE,
        }
    }
}

impl FigureStyle {
    /// Sets the figure size in inches.
    pub fn with_size(mut self, width_in: f64, height_in: f64) -> Self {
        self.width_in = width_in;
        self.height_in = height_in;
        self
    }

    /// Sets the resolution.
    pub fn with_dpi(mut self, dpi: f64) -> Self {
        self.dpi = dpi;
        self
    }

    /// Sets the figure title size in points.
    pub fn with_title_font(mut self, pt: f64) -> Self {
        self.title_font_pt = pt;
        self
    }

    /// Sets the series colour.
    pub fn with_series_color(mut self, color: Color) -> Self {
        self.series_color = color;
        self
    }

    /// Converts points to figure coordinates.
    pub fn px(&self, pt: f64) -> f64 {
        pt * self.dpi / 72.0
    }

    /// Returns the figure size in figure coordinates.
    pub fn size_px(&self) -> (f64, f64) {
        (self.width_in * self.dpi, self.height_in * self.dpi)
    }

    /// Axis styling derived from the point sizes.
    pub fn axis_style(&self) -> AxisStyle {
        let rule = StrokeStyle::solid(css::BLACK, self.px(self.line_width_pt));
        AxisStyle {
            label_fill: rule.brush.clone(),
            label_font_size: self.px(self.tick_font_pt),
            title_fill: rule.brush.clone(),
            title_font_size: self.px(self.label_font_pt),
            rule,
        }
    }

    /// Gridline styling derived from the point sizes.
    pub fn grid_style(&self) -> GridStyle {
        GridStyle {
            stroke: StrokeStyle::solid(
                css::BLACK.with_alpha(40.0 / 255.0),
                self.px(self.line_width_pt),
            ),
        }
    }
}

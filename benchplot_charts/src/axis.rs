// Copyright 2025 the Benchplot Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Axis mark generation.
//!
//! An [`AxisSpec`] is measured first (to reserve its strip in [`crate::ChartLayout`]) and then
//! asked for marks once the plot rectangle is known.

use kurbo::Rect;
use peniko::Brush;
use peniko::color::palette::css;

use crate::format::{format_log_tick, format_tick_with_step};
use crate::mark::{Mark, TextAnchor, TextBaseline, TextMark};
use crate::measure::TextMeasurer;
use crate::scale::{ScaleLinear, ScaleSpec};
use crate::z_order;

/// A paint + width pair for stroked paths (domain lines, ticks, gridlines).
#[derive(Clone, Debug, PartialEq)]
pub struct StrokeStyle {
    /// Stroke paint.
    pub brush: Brush,
    /// Stroke width in figure coordinates.
    pub stroke_width: f64,
}

impl StrokeStyle {
    /// Convenience for a solid stroke.
    pub fn solid(brush: impl Into<Brush>, stroke_width: f64) -> Self {
        Self {
            brush: brush.into(),
            stroke_width,
        }
    }
}

impl Default for StrokeStyle {
    fn default() -> Self {
        Self::solid(css::BLACK, 1.0)
    }
}

/// Axis styling.
#[derive(Clone, Debug, PartialEq)]
pub struct AxisStyle {
    /// Style for the axis domain line and tick marks.
    pub rule: StrokeStyle,
    /// Fill paint for tick labels.
    pub label_fill: Brush,
    /// Font size for tick labels.
    pub label_font_size: f64,
    /// Fill paint for the axis title.
    pub title_fill: Brush,
    /// Font size for the axis title.
    pub title_font_size: f64,
}

impl Default for AxisStyle {
    fn default() -> Self {
        let rule = StrokeStyle::default();
        Self {
            rule: rule.clone(),
            label_fill: rule.brush.clone(),
            label_font_size: 10.0,
            title_fill: rule.brush,
            title_font_size: 10.0,
        }
    }
}

/// Gridline styling.
#[derive(Clone, Debug, PartialEq)]
pub struct GridStyle {
    /// Stroke style for gridlines.
    pub stroke: StrokeStyle,
}

impl Default for GridStyle {
    fn default() -> Self {
        Self {
            stroke: StrokeStyle::solid(css::BLACK.with_alpha(40.0 / 255.0), 1.0),
        }
    }
}

/// Which side of the plot an axis sits on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AxisOrient {
    /// A horizontal axis below the plot area.
    Bottom,
    /// A vertical axis left of the plot area.
    Left,
}

/// An axis specification.
#[derive(Clone, Debug, PartialEq)]
pub struct AxisSpec {
    /// The axis scale specification.
    pub scale: ScaleSpec,
    /// Axis placement relative to the plot.
    pub orient: AxisOrient,
    /// Approximate number of ticks.
    pub tick_count: usize,
    /// Tick line length.
    pub tick_size: f64,
    /// Gap between the tick end and the tick label.
    pub tick_padding: f64,
    /// Axis styling.
    pub style: AxisStyle,
    /// Gridlines across the plot, if any.
    pub grid: Option<GridStyle>,
    /// Optional axis title text.
    pub title: Option<String>,
    /// Distance from tick labels to the title.
    pub title_offset: f64,
    /// Tick labels for a band scale, one per band.
    pub categories: Vec<String>,
}

impl AxisSpec {
    /// Creates a new axis specification.
    ///
    /// Defaults: 8 ticks, tick size 5, tick padding 3, no title, no grid.
    pub fn new(scale: impl Into<ScaleSpec>, orient: AxisOrient) -> Self {
        Self {
            scale: scale.into(),
            orient,
            tick_count: 8,
            tick_size: 5.0,
            tick_padding: 3.0,
            style: AxisStyle::default(),
            grid: None,
            title: None,
            title_offset: 6.0,
            categories: Vec::new(),
        }
    }

    /// Convenience constructor for a `bottom` axis.
    pub fn bottom(scale: impl Into<ScaleSpec>) -> Self {
        Self::new(scale, AxisOrient::Bottom)
    }

    /// Convenience constructor for a `left` axis.
    pub fn left(scale: impl Into<ScaleSpec>) -> Self {
        Self::new(scale, AxisOrient::Left)
    }

    /// Set the approximate tick count.
    pub fn with_tick_count(mut self, tick_count: usize) -> Self {
        self.tick_count = tick_count;
        self
    }

    /// Set tick size and tick padding.
    pub fn with_tick_size(mut self, tick_size: f64, tick_padding: f64) -> Self {
        self.tick_size = tick_size;
        self.tick_padding = tick_padding;
        self
    }

    /// Set the axis style.
    pub fn with_style(mut self, style: AxisStyle) -> Self {
        self.style = style;
        self
    }

    /// Enable gridlines using the provided style.
    pub fn with_grid(mut self, grid: GridStyle) -> Self {
        self.grid = Some(grid);
        self
    }

    /// Set the axis title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the title offset.
    pub fn with_title_offset(mut self, title_offset: f64) -> Self {
        self.title_offset = title_offset;
        self
    }

    /// Set the band labels.
    pub fn with_categories<S: Into<String>>(mut self, labels: impl IntoIterator<Item = S>) -> Self {
        self.categories = labels.into_iter().map(Into::into).collect();
        self
    }

    /// Returns the output range of this axis for `plot`.
    ///
    /// Vertical axes run bottom to top.
    pub fn range(&self, plot: Rect) -> (f64, f64) {
        match self.orient {
            AxisOrient::Bottom => (plot.x0, plot.x1),
            AxisOrient::Left => (plot.y1, plot.y0),
        }
    }

    /// Tick positions along the axis paired with their labels.
    fn ticks(&self, plot: Rect) -> Vec<(f64, String)> {
        let range = self.range(plot);
        match self.scale {
            ScaleSpec::Linear(s) => {
                let domain = s.resolved_domain(self.tick_count);
                let values = ScaleLinear::new(domain, range).ticks(self.tick_count);
                let step = tick_step(&values);
                let scale = s.instantiate_resolved(range, self.tick_count);
                values
                    .into_iter()
                    .map(|v| (scale.map(v), format_tick_with_step(v, step)))
                    .collect()
            }
            ScaleSpec::Log(s) => {
                let scale = s.instantiate(range);
                scale
                    .ticks(self.tick_count)
                    .into_iter()
                    .map(|v| (scale.map(v), format_log_tick(v, scale.base())))
                    .collect()
            }
            ScaleSpec::Band(s) => {
                let scale = s.instantiate(range);
                (0..scale.count())
                    .map(|i| {
                        let label = self.categories.get(i).cloned().unwrap_or_default();
                        (scale.center(i), label)
                    })
                    .collect()
            }
        }
    }

    fn tick_labels(&self) -> Vec<String> {
        // Label text does not depend on the plot size.
        let unit = Rect::new(0.0, 0.0, 1.0, 1.0);
        self.ticks(unit).into_iter().map(|(_, label)| label).collect()
    }

    /// Measure the thickness this axis needs along its normal direction.
    pub fn measure(&self, measurer: &dyn TextMeasurer) -> f64 {
        let labels = self.tick_labels();
        let label_extent = labels
            .iter()
            .map(|label| {
                let (w, h) = measurer.measure(label, self.style.label_font_size);
                match self.orient {
                    AxisOrient::Bottom => h,
                    AxisOrient::Left => w,
                }
            })
            .fold(0.0_f64, f64::max);

        let mut out = self.tick_size.abs() + self.tick_padding.max(0.0) + label_extent;
        if let Some(title) = &self.title {
            // A rotated left title is as wide as the text is tall.
            let (_, h) = measurer.measure(title, self.style.title_font_size);
            out += self.title_offset.max(0.0) + h;
        }
        out
    }

    /// Generate axis marks for the given plot rectangle and reserved axis rectangle.
    pub fn marks(&self, plot: Rect, axis_rect: Rect) -> Vec<Mark> {
        let ticks: Vec<(f64, String)> = self
            .ticks(plot)
            .into_iter()
            .filter(|(pos, _)| match self.orient {
                AxisOrient::Bottom => *pos >= plot.x0 - 1e-9 && *pos <= plot.x1 + 1e-9,
                AxisOrient::Left => *pos >= plot.y0 - 1e-9 && *pos <= plot.y1 + 1e-9,
            })
            .collect();

        let rule = &self.style.rule;
        let tick_size = self.tick_size.abs();
        let label_gap = tick_size + self.tick_padding.max(0.0);
        let mut out = Vec::new();

        if let Some(grid) = &self.grid {
            for (pos, _) in &ticks {
                let (from, to) = match self.orient {
                    AxisOrient::Bottom => ((*pos, plot.y0), (*pos, plot.y1)),
                    AxisOrient::Left => ((plot.x0, *pos), (plot.x1, *pos)),
                };
                out.push(Mark::rule(
                    from,
                    to,
                    grid.stroke.brush.clone(),
                    grid.stroke.stroke_width,
                    z_order::GRID_LINES,
                ));
            }
        }

        let (from, to) = match self.orient {
            AxisOrient::Bottom => ((plot.x0, plot.y1), (plot.x1, plot.y1)),
            AxisOrient::Left => ((plot.x0, plot.y0), (plot.x0, plot.y1)),
        };
        out.push(Mark::rule(
            from,
            to,
            rule.brush.clone(),
            rule.stroke_width,
            z_order::AXIS_RULES,
        ));

        let label_size = self.style.label_font_size;
        for (pos, label) in ticks {
            let (from, to, text) = match self.orient {
                AxisOrient::Bottom => (
                    (pos, plot.y1),
                    (pos, plot.y1 + tick_size),
                    TextMark::new((pos, plot.y1 + label_gap), label, label_size)
                        .with_baseline(TextBaseline::Hanging),
                ),
                AxisOrient::Left => (
                    (plot.x0, pos),
                    (plot.x0 - tick_size, pos),
                    TextMark::new((plot.x0 - label_gap, pos), label, label_size)
                        .with_anchor(TextAnchor::End),
                ),
            };
            out.push(Mark::rule(
                from,
                to,
                rule.brush.clone(),
                rule.stroke_width,
                z_order::AXIS_RULES,
            ));
            out.push(Mark::text(
                text.with_fill(self.style.label_fill.clone()),
                z_order::AXIS_LABELS,
            ));
        }

        if let Some(title) = &self.title {
            // The title sits in the outer edge of `axis_rect`, clear of the tick labels.
            let size = self.style.title_font_size;
            let text = match self.orient {
                AxisOrient::Bottom => TextMark::new(
                    (0.5 * (plot.x0 + plot.x1), axis_rect.y1 - 0.5 * size),
                    title.clone(),
                    size,
                ),
                AxisOrient::Left => TextMark::new(
                    (axis_rect.x0 + 0.5 * size, 0.5 * (plot.y0 + plot.y1)),
                    title.clone(),
                    size,
                )
                .with_angle(-90.0),
            };
            out.push(Mark::text(
                text.with_fill(self.style.title_fill.clone()),
                z_order::AXIS_TITLES,
            ));
        }

        out
    }
}

fn tick_step(ticks: &[f64]) -> f64 {
    let step = ticks
        .windows(2)
        .map(|w| (w[1] - w[0]).abs())
        .fold(f64::INFINITY, f64::min);
    if step.is_finite() { step } else { 0.0 }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::measure::HeuristicTextMeasurer;
    use crate::scale::{ScaleBandSpec, ScaleLinearSpec, ScaleLogSpec};

    fn labels(marks: &[Mark], z: i32) -> Vec<String> {
        marks
            .iter()
            .filter(|m| m.z_index == z)
            .filter_map(|m| m.as_text().map(|t| t.text.clone()))
            .collect()
    }

    #[test]
    fn title_adds_to_measured_thickness() {
        let measurer = HeuristicTextMeasurer;
        let axis = AxisSpec::left(ScaleLinearSpec::new((0.0, 10.0))).with_tick_count(3);
        let bare = axis.measure(&measurer);
        let titled = axis.with_title("Time").measure(&measurer);
        assert!(bare > 0.0);
        assert!(titled > bare);
    }

    #[test]
    fn left_axis_maps_larger_values_higher() {
        let axis = AxisSpec::left(ScaleLinearSpec::new((0.0, 10.0))).with_tick_count(2);
        let plot = Rect::new(50.0, 0.0, 150.0, 100.0);
        let ticks = axis.ticks(plot);
        assert_eq!(ticks.first().map(|(y, _)| *y), Some(100.0));
        assert_eq!(ticks.last().map(|(y, _)| *y), Some(0.0));
    }

    #[test]
    fn log_axis_labels_powers_of_two() {
        let axis = AxisSpec::bottom(ScaleLogSpec::new((1.0, 16.0)).with_base(2.0));
        let plot = Rect::new(0.0, 0.0, 100.0, 50.0);
        let marks = axis.marks(plot, Rect::new(0.0, 50.0, 100.0, 70.0));
        assert_eq!(labels(&marks, z_order::AXIS_LABELS), ["1", "2", "4", "8", "16"]);
    }

    #[test]
    fn tick_labels_take_size_and_paint_from_the_style() {
        let style = AxisStyle {
            label_font_size: 23.0,
            label_fill: Brush::Solid(css::RED),
            ..AxisStyle::default()
        };
        let plot = Rect::new(0.0, 0.0, 100.0, 50.0);
        for axis in [
            AxisSpec::bottom(ScaleLinearSpec::new((0.0, 1.0))),
            AxisSpec::left(ScaleLinearSpec::new((0.0, 1.0))),
        ] {
            let marks = axis.with_style(style.clone()).marks(plot, plot);
            let ticks: Vec<&TextMark> = marks
                .iter()
                .filter(|m| m.z_index == z_order::AXIS_LABELS)
                .filter_map(Mark::as_text)
                .collect();
            assert!(!ticks.is_empty(), "no tick labels");
            for t in ticks {
                assert_eq!(t.font_size, 23.0, "{}", t.text);
                assert_eq!(t.fill, Brush::Solid(css::RED), "{}", t.text);
            }
        }
    }

    #[test]
    fn band_axis_uses_category_labels() {
        let axis = AxisSpec::bottom(ScaleBandSpec::new(2)).with_categories(["GNU", "uutils"]);
        let plot = Rect::new(0.0, 0.0, 100.0, 50.0);
        let marks = axis.marks(plot, Rect::new(0.0, 50.0, 100.0, 70.0));
        assert_eq!(labels(&marks, z_order::AXIS_LABELS), ["GNU", "uutils"]);
    }

    #[test]
    fn grid_lines_span_the_plot() {
        let axis = AxisSpec::left(ScaleLinearSpec::new((0.0, 1.0)))
            .with_tick_count(2)
            .with_grid(GridStyle::default());
        let plot = Rect::new(10.0, 10.0, 110.0, 60.0);
        let marks = axis.marks(plot, Rect::new(0.0, 10.0, 10.0, 60.0));
        let grid: Vec<Rect> = marks
            .iter()
            .filter(|m| m.z_index == z_order::GRID_LINES)
            .filter_map(Mark::bounds)
            .collect();
        assert!(!grid.is_empty());
        for r in grid {
            assert!((r.x0 - plot.x0).abs() < 1e-9 && (r.x1 - plot.x1).abs() < 1e-9);
        }
    }

    #[test]
    fn title_is_placed_at_the_outer_edge() {
        let measurer = HeuristicTextMeasurer;
        let plot = Rect::new(100.0, 0.0, 200.0, 100.0);
        let axis = AxisSpec::left(ScaleLinearSpec::new((0.0, 10.0))).with_title("Y");
        let w = axis.measure(&measurer);
        let axis_rect = Rect::new(plot.x0 - w, plot.y0, plot.x0, plot.y1);
        let marks = axis.marks(plot, axis_rect);
        let title = marks
            .iter()
            .find(|m| m.z_index == z_order::AXIS_TITLES)
            .and_then(Mark::as_text)
            .unwrap();
        assert_eq!(title.angle, -90.0);
        let expected = axis_rect.x0 + 0.5 * axis.style.title_font_size;
        assert!((title.pos.x - expected).abs() < 1e-9);
    }
}

// Copyright 2025 the Benchplot Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Whole-figure builders for the benchmark charts.
//!
//! A figure is a background, a title strip, and one or more [`ChartSpec`] panels laid out side
//! by side beneath it. Builders only produce marks; see [`Figure::to_svg_string`] for output.

use benchplot_frame::{DistributionSet, PointSet};
use kurbo::Rect;
use peniko::Color;

use crate::axis::AxisSpec;
use crate::box_mark::{BoxMarkSpec, BoxStats};
use crate::chart_spec::ChartSpec;
use crate::layout::split_columns;
use crate::mark::Mark;
use crate::measure::{HeuristicTextMeasurer, TextMeasurer};
use crate::point_mark::PointMarkSpec;
use crate::scale::{ScaleBandSpec, ScaleLinearSpec, ScaleLogSpec};
use crate::style::FigureStyle;
use crate::title::TitleSpec;

/// Log base of the scatter x axis.
pub const SCATTER_X_BASE: f64 = 2.0;
/// Log base of the scatter y axis.
pub const SCATTER_Y_BASE: f64 = 10.0;

/// A finished figure: a canvas size, a background, and marks in figure coordinates.
#[derive(Clone, Debug, PartialEq)]
pub struct Figure {
    /// Canvas width.
    pub width: f64,
    /// Canvas height.
    pub height: f64,
    /// Canvas fill, painted beneath every mark.
    pub background: Color,
    /// Marks in emission order.
    pub marks: Vec<Mark>,
}

/// Text shared by every chart kind.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FigureLabels {
    /// Figure title.
    pub title: String,
    /// X axis title, if any.
    pub x_label: Option<String>,
    /// Y axis title.
    pub y_label: String,
}

impl FigureLabels {
    /// Creates labels with a title and y axis title.
    pub fn new(title: impl Into<String>, y_label: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            x_label: None,
            y_label: y_label.into(),
        }
    }

    /// Sets the x axis title.
    pub fn with_x_label(mut self, x_label: impl Into<String>) -> Self {
        self.x_label = Some(x_label.into());
        self
    }
}

/// One panel of a box-plot figure.
#[derive(Clone, Copy, Debug)]
pub struct BoxPanel<'a> {
    /// Panel title, if any.
    pub title: Option<&'a str>,
    /// Distributions drawn left to right.
    pub distributions: &'a DistributionSet,
}

/// Builds a log-log scatter figure: x in base 2, y in base 10, with horizontal gridlines.
///
/// Points with a non-positive coordinate cannot be placed on a log axis and are skipped.
pub fn scatter_figure(style: &FigureStyle, labels: &FigureLabels, points: &PointSet) -> Figure {
    let measurer = HeuristicTextMeasurer;
    let xy: Vec<(f64, f64)> = points
        .iter()
        .map(|p| (p.x as f64, p.y))
        .filter(|(x, y)| *x > 0.0 && *y > 0.0)
        .collect();

    let x_domain = log_domain(xy.iter().map(|(x, _)| *x), SCATTER_X_BASE);
    let y_domain = log_domain(xy.iter().map(|(_, y)| *y), SCATTER_Y_BASE);

    let mut x_axis = styled(
        AxisSpec::bottom(ScaleLogSpec::new(x_domain).with_base(SCATTER_X_BASE)),
        style,
    );
    if let Some(x_label) = &labels.x_label {
        x_axis = x_axis.with_title(x_label.clone());
    }
    let y_axis = styled(
        AxisSpec::left(ScaleLogSpec::new(y_domain).with_base(SCATTER_Y_BASE)),
        style,
    )
    .with_grid(style.grid_style())
    .with_title(labels.y_label.clone());
    let chart = ChartSpec {
        title: None,
        outer_padding: style.px(6.0),
        axis_left: Some(y_axis),
        axis_bottom: Some(x_axis),
    };

    let (view, mut marks) = frame(style, &measurer, &labels.title);
    let (_, chart_marks) = chart.marks(&measurer, view, |chart, plot| {
        let (Some(x), Some(y)) = (chart.x_scale_continuous(plot), chart.y_scale_continuous(plot))
        else {
            return Vec::new();
        };
        PointMarkSpec::new(x, y)
            .with_size(style.px(style.marker_size_pt))
            .with_fill(style.series_color)
            .marks(xy.iter().copied())
    });
    marks.extend(chart_marks);
    finish(style, marks)
}

/// Builds a box-and-whisker figure with one panel per entry in `panels`.
///
/// Every panel gets its own linear y axis with horizontal gridlines; only the first carries the
/// y axis title. Empty distributions keep their slot and label but draw no box.
pub fn box_figure(style: &FigureStyle, labels: &FigureLabels, panels: &[BoxPanel<'_>]) -> Figure {
    let measurer = HeuristicTextMeasurer;
    let (view, mut marks) = frame(style, &measurer, &labels.title);
    let gap = style.px(12.0);
    for (index, (panel, rect)) in panels
        .iter()
        .zip(split_columns(view, panels.len(), gap))
        .enumerate()
    {
        let names: Vec<&str> = panel.distributions.names().collect();
        let stats: Vec<Option<BoxStats>> = panel
            .distributions
            .iter()
            .map(|d| BoxStats::from_values(&d.values))
            .collect();
        let y_domain = box_domain(stats.iter().flatten());

        let mut y_axis = styled(
            AxisSpec::left(ScaleLinearSpec::new(y_domain).with_nice(true)),
            style,
        )
        .with_grid(style.grid_style());
        if index == 0 {
            y_axis = y_axis.with_title(labels.y_label.clone());
        }
        let band = ScaleBandSpec::new(names.len()).with_padding(0.5, 0.25);
        let mut x_axis = styled(AxisSpec::bottom(band), style).with_categories(names);
        if let Some(x_label) = &labels.x_label {
            x_axis = x_axis.with_title(x_label.clone());
        }
        let chart = ChartSpec {
            title: panel.title.map(|t| {
                TitleSpec::new(t)
                    .with_font_size(style.px(style.panel_title_font_pt))
                    .with_padding(style.px(3.0))
            }),
            outer_padding: style.px(6.0),
            axis_left: Some(y_axis),
            axis_bottom: Some(x_axis),
        };

        let (_, chart_marks) = chart.marks(&measurer, rect, |chart, plot| {
            let (Some(band), Some(y)) = (chart.x_scale_band(plot), chart.y_scale_continuous(plot))
            else {
                return Vec::new();
            };
            let mut out = Vec::new();
            for (i, summary) in stats.iter().enumerate() {
                let Some(summary) = summary else { continue };
                out.extend(
                    BoxMarkSpec::new(summary.clone(), band.center(i), band.band_width(), y)
                        .with_stroke(style.series_color, style.px(style.line_width_pt))
                        .with_median_stroke(style.median_color)
                        .with_flier_size(style.px(style.marker_size_pt * 2.0))
                        .marks(),
                );
            }
            out
        });
        marks.extend(chart_marks);
    }
    finish(style, marks)
}

/// Emits the figure title; returns the area left for panels.
fn frame(style: &FigureStyle, measurer: &dyn TextMeasurer, title: &str) -> (Rect, Vec<Mark>) {
    let (width, height) = style.size_px();
    let title = TitleSpec::new(title)
        .with_font_size(style.px(style.title_font_pt))
        .with_padding(style.px(6.0));
    let title_h = title.measure(measurer).min(height);

    let marks = title.marks(Rect::new(0.0, 0.0, width, title_h));
    (Rect::new(0.0, title_h, width, height), marks)
}

fn finish(style: &FigureStyle, marks: Vec<Mark>) -> Figure {
    let (width, height) = style.size_px();
    Figure {
        width,
        height,
        background: style.background,
        marks,
    }
}

/// Applies the figure's axis style and point-sized tick geometry.
fn styled(axis: AxisSpec, style: &FigureStyle) -> AxisSpec {
    axis.with_style(style.axis_style())
        .with_tick_size(style.px(3.5), style.px(3.5))
        .with_title_offset(style.px(4.0))
}

/// A log domain covering `values`, padded by 5% of its span in log space.
///
/// No values yields `[1, base]`; a single distinct value is padded by one power of `base`.
fn log_domain(values: impl Iterator<Item = f64>, base: f64) -> (f64, f64) {
    let Some((lo, hi)) = min_max(values) else {
        return (1.0, base);
    };
    if lo == hi {
        return (lo / base, hi * base);
    }
    let pad = (hi / lo).powf(0.05);
    (lo / pad, hi * pad)
}

/// A linear domain covering every whisker and flier, padded by 5% of its span.
fn box_domain<'a>(stats: impl Iterator<Item = &'a BoxStats>) -> (f64, f64) {
    let extents = stats.flat_map(|s| {
        let (lo, hi) = s.extent();
        [lo, hi]
    });
    let Some((lo, hi)) = min_max(extents) else {
        return (0.0, 1.0);
    };
    let pad = if hi > lo {
        0.05 * (hi - lo)
    } else if lo != 0.0 {
        0.05 * lo.abs()
    } else {
        1.0
    };
    (lo - pad, hi + pad)
}

fn min_max(values: impl Iterator<Item = f64>) -> Option<(f64, f64)> {
    values
        .filter(|v| v.is_finite())
        .fold(None, |acc, v| match acc {
            None => Some((v, v)),
            Some((lo, hi)) => Some((f64::min(lo, v), f64::max(hi, v))),
        })
}

#[cfg(test)]
mod tests {
    use benchplot_frame::{Column, Point, Table, to_distributions};

    use super::*;
    use crate::z_order;

    fn small_style() -> FigureStyle {
        FigureStyle::default().with_dpi(100.0)
    }

    fn texts(figure: &Figure) -> Vec<&str> {
        figure
            .marks
            .iter()
            .filter_map(|m| m.as_text().map(|t| t.text.as_str()))
            .collect()
    }

    fn distributions(header: [&str; 2], rows: &[[f64; 2]]) -> DistributionSet {
        let col = |i: usize| {
            let cells = core::iter::once(Some(header[i].to_owned()))
                .chain(rows.iter().map(|r| Some(r[i].to_string())));
            Column::str(format!("c{i}"), cells)
        };
        to_distributions(&Table::new(vec![col(0), col(1)]).unwrap()).unwrap()
    }

    #[test]
    fn scatter_draws_one_marker_per_point() {
        let points = PointSet::from(vec![
            Point::new(64, 0.01),
            Point::new(128, 0.02),
            Point::new(128, 0.03),
        ]);
        let labels = FigureLabels::new("Time to Write a File Across Sizes", "Time (s)")
            .with_x_label("File Size (Bytes)");
        let figure = scatter_figure(&small_style(), &labels, &points);

        assert_eq!((figure.width, figure.height), (600.0, 400.0));
        let markers = figure
            .marks
            .iter()
            .filter(|m| m.z_index == z_order::SERIES_POINTS)
            .count();
        assert_eq!(markers, 3);

        let texts = texts(&figure);
        assert!(texts.contains(&"Time to Write a File Across Sizes"));
        assert!(texts.contains(&"File Size (Bytes)"));
        assert!(texts.contains(&"Time (s)"));
        assert!(texts.contains(&"64"), "{texts:?}");
    }

    #[test]
    fn scatter_markers_stay_inside_the_canvas() {
        let points = PointSet::from(vec![Point::new(1, 1e-4), Point::new(1 << 20, 10.0)]);
        let figure = scatter_figure(&small_style(), &FigureLabels::new("t", "y"), &points);
        let canvas = Rect::new(0.0, 0.0, figure.width, figure.height);
        for m in figure.marks.iter().filter(|m| m.z_index == z_order::SERIES_POINTS) {
            let b = m.bounds().unwrap();
            assert!(canvas.contains(b.center()), "{b:?}");
        }
    }

    #[test]
    fn y_title_only_on_the_first_panel() {
        let a = distributions(["simple", "file"], &[[1.0, 2.0], [1.5, 2.5]]);
        let b = distributions(["LLVM", "gcc"], &[[3.0, 4.0], [3.5, 4.5]]);
        let panels = [
            BoxPanel {
                title: Some("GNU"),
                distributions: &a,
            },
            BoxPanel {
                title: Some("uutils"),
                distributions: &b,
            },
        ];
        let labels = FigureLabels::new("Performance of Coverage Instrumentation", "Time (s)");
        let figure = box_figure(&small_style(), &labels, &panels);

        let texts = texts(&figure);
        assert_eq!(texts.iter().filter(|t| **t == "Time (s)").count(), 1);
        assert!(texts.contains(&"GNU") && texts.contains(&"uutils"));
        assert!(texts.contains(&"LLVM"));

        let y_title = figure
            .marks
            .iter()
            .filter_map(Mark::as_text)
            .find(|t| t.text == "Time (s)")
            .unwrap();
        assert!(y_title.pos.x < figure.width / 2.0);
    }

    #[test]
    fn empty_distributions_keep_their_label_but_draw_no_box() {
        let table = Table::new(vec![
            Column::str("a", [Some("full"), Some("1"), Some("2")]),
            Column::str("b", [Some("empty"), None, None]),
        ])
        .unwrap();
        let set = to_distributions(&table).unwrap();
        let figure = box_figure(
            &small_style(),
            &FigureLabels::new("t", "y"),
            &[BoxPanel {
                title: None,
                distributions: &set,
            }],
        );
        assert!(texts(&figure).contains(&"empty"));
        let box_strokes = figure
            .marks
            .iter()
            .filter(|m| m.z_index == z_order::SERIES_STROKE)
            .count();
        assert_eq!(box_strokes, 6);
    }

    #[test]
    fn log_domain_pads_and_handles_degenerate_input() {
        assert_eq!(log_domain(core::iter::empty(), 2.0), (1.0, 2.0));
        assert_eq!(log_domain([8.0].into_iter(), 2.0), (4.0, 16.0));
        let (lo, hi) = log_domain([1.0, 1024.0].into_iter(), 2.0);
        assert!(lo < 1.0 && hi > 1024.0);
    }

    #[test]
    fn box_domain_falls_back_for_no_data() {
        assert_eq!(box_domain(core::iter::empty()), (0.0, 1.0));
        let stats = BoxStats::from_values(&[2.0]).unwrap();
        let (lo, hi) = box_domain([&stats].into_iter());
        assert!(lo < 2.0 && hi > 2.0);
    }
}

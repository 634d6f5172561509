// Copyright 2025 the Benchplot Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Chart composition: one plot area with its title and axes.
//!
//! A figure holds one or more of these side by side; see [`crate::box_figure`].

use kurbo::Rect;

use crate::axis::AxisSpec;
use crate::layout::{ChartLayout, ChartLayoutSpec};
use crate::mark::Mark;
use crate::measure::TextMeasurer;
use crate::scale::{ScaleBand, ScaleContinuous};
use crate::title::TitleSpec;

/// A composed chart description that owns guide specs.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ChartSpec {
    /// Optional title.
    pub title: Option<TitleSpec>,
    /// Padding inside the chart's view.
    pub outer_padding: f64,
    /// Optional left axis.
    pub axis_left: Option<AxisSpec>,
    /// Optional bottom axis.
    pub axis_bottom: Option<AxisSpec>,
}

impl ChartSpec {
    /// Instantiates the bottom axis as a continuous scale, if it is one.
    pub fn x_scale_continuous(&self, plot: Rect) -> Option<ScaleContinuous> {
        let axis = self.axis_bottom.as_ref()?;
        axis.scale.continuous(axis.range(plot), axis.tick_count)
    }

    /// Instantiates the bottom axis as a band scale, if it is one.
    pub fn x_scale_band(&self, plot: Rect) -> Option<ScaleBand> {
        let axis = self.axis_bottom.as_ref()?;
        axis.scale.band(axis.range(plot))
    }

    /// Instantiates the left axis as a continuous scale, if it is one.
    pub fn y_scale_continuous(&self, plot: Rect) -> Option<ScaleContinuous> {
        let axis = self.axis_left.as_ref()?;
        axis.scale.continuous(axis.range(plot), axis.tick_count)
    }

    /// Computes layout for this chart inside `view`.
    pub fn layout(&self, measurer: &dyn TextMeasurer, view: Rect) -> ChartLayout {
        ChartLayout::arrange(&ChartLayoutSpec {
            view,
            title_top: self.title.as_ref().map(|t| t.measure(measurer)),
            outer_padding: self.outer_padding,
            axis_left: self.axis_left.as_ref().map(|a| a.measure(measurer)),
            axis_bottom: self.axis_bottom.as_ref().map(|a| a.measure(measurer)),
        })
    }

    /// Generates marks for the title and axes, given a computed layout.
    pub fn guide_marks(&self, layout: &ChartLayout) -> Vec<Mark> {
        let mut out = Vec::new();
        if let (Some(title), Some(rect)) = (self.title.as_ref(), layout.title_top) {
            out.extend(title.marks(rect));
        }
        if let (Some(axis), Some(rect)) = (self.axis_bottom.as_ref(), layout.axis_bottom) {
            out.extend(axis.marks(layout.plot, rect));
        }
        if let (Some(axis), Some(rect)) = (self.axis_left.as_ref(), layout.axis_left) {
            out.extend(axis.marks(layout.plot, rect));
        }
        out
    }

    /// Produces the full mark list: series marks followed by guide marks.
    ///
    /// The series builder is invoked with the resolved plot rectangle.
    pub fn marks(
        &self,
        measurer: &dyn TextMeasurer,
        view: Rect,
        build_series: impl FnOnce(&Self, Rect) -> Vec<Mark>,
    ) -> (ChartLayout, Vec<Mark>) {
        let layout = self.layout(measurer, view);
        let mut marks = build_series(self, layout.plot);
        marks.extend(self.guide_marks(&layout));
        (layout, marks)
    }
}

// Copyright 2025 the Benchplot Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Box-and-whisker mark generation.
//!
//! Quartiles use linear interpolation between closest ranks. Whiskers reach the most extreme
//! observations within 1.5 IQR of the box; anything beyond is drawn as a flier.

use kurbo::BezPath;
use peniko::Brush;
use peniko::color::palette::css;

use crate::mark::Mark;
use crate::point_mark::circle_path;
use crate::scale::ScaleContinuous;
use crate::z_order;

/// Whisker reach in multiples of the interquartile range.
pub const WHISKER_IQR: f64 = 1.5;

/// Five-number summary plus outliers of one distribution.
#[derive(Clone, Debug, PartialEq)]
pub struct BoxStats {
    /// First quartile.
    pub q1: f64,
    /// Median.
    pub median: f64,
    /// Third quartile.
    pub q3: f64,
    /// Lower whisker end.
    pub whisker_low: f64,
    /// Upper whisker end.
    pub whisker_high: f64,
    /// Observations beyond the whiskers, ascending.
    pub fliers: Vec<f64>,
}

impl BoxStats {
    /// Summarizes `values`. Returns `None` when there are no finite values.
    pub fn from_values(values: &[f64]) -> Option<Self> {
        let mut sorted: Vec<f64> = values.iter().copied().filter(|v| v.is_finite()).collect();
        if sorted.is_empty() {
            return None;
        }
        sorted.sort_by(f64::total_cmp);

        let q1 = quantile(&sorted, 0.25);
        let median = quantile(&sorted, 0.5);
        let q3 = quantile(&sorted, 0.75);
        let iqr = q3 - q1;
        let lo_fence = q1 - WHISKER_IQR * iqr;
        let hi_fence = q3 + WHISKER_IQR * iqr;

        let whisker_low = sorted
            .iter()
            .copied()
            .find(|v| *v >= lo_fence)
            .map_or(q1, |v| v.min(q1));
        let whisker_high = sorted
            .iter()
            .rev()
            .copied()
            .find(|v| *v <= hi_fence)
            .map_or(q3, |v| v.max(q3));
        let fliers = sorted
            .iter()
            .copied()
            .filter(|v| *v < whisker_low || *v > whisker_high)
            .collect();

        Some(Self {
            q1,
            median,
            q3,
            whisker_low,
            whisker_high,
            fliers,
        })
    }

    /// Returns the smallest and largest value drawn (whiskers and fliers).
    pub fn extent(&self) -> (f64, f64) {
        let lo = self.fliers.first().map_or(self.whisker_low, |f| f.min(self.whisker_low));
        let hi = self.fliers.last().map_or(self.whisker_high, |f| f.max(self.whisker_high));
        (lo, hi)
    }
}

/// `p`-quantile of ascending `sorted`, interpolating linearly between ranks.
fn quantile(sorted: &[f64], p: f64) -> f64 {
    let pos = p * (sorted.len() - 1) as f64;
    let lower = pos.floor();
    #[allow(
        clippy::cast_possible_truncation,
        reason = "pos lies in [0, len - 1]"
    )]
    let i = lower as usize;
    match sorted.get(i + 1) {
        Some(next) => sorted[i] + (pos - lower) * (next - sorted[i]),
        None => sorted[i],
    }
}

/// One box-and-whisker glyph.
#[derive(Clone, Debug, PartialEq)]
pub struct BoxMarkSpec {
    /// Summary to draw.
    pub stats: BoxStats,
    /// Horizontal center of the box in figure coordinates.
    pub center_x: f64,
    /// Box width in figure coordinates.
    pub width: f64,
    /// Scale mapping values into figure y.
    pub y_scale: ScaleContinuous,
    /// Box, whisker and cap stroke.
    pub stroke: Brush,
    /// Median line stroke.
    pub median_stroke: Brush,
    /// Stroke width for every line.
    pub stroke_width: f64,
    /// Flier marker diameter.
    pub flier_size: f64,
}

impl BoxMarkSpec {
    /// Creates a black box with an orange median line.
    pub fn new(stats: BoxStats, center_x: f64, width: f64, y_scale: ScaleContinuous) -> Self {
        Self {
            stats,
            center_x,
            width,
            y_scale,
            stroke: Brush::Solid(css::BLACK),
            median_stroke: Brush::Solid(css::ORANGE),
            stroke_width: 1.0,
            flier_size: 6.0,
        }
    }

    /// Sets the box, whisker and cap stroke.
    pub fn with_stroke(mut self, stroke: impl Into<Brush>, stroke_width: f64) -> Self {
        self.stroke = stroke.into();
        self.stroke_width = stroke_width;
        self
    }

    /// Sets the median line stroke.
    pub fn with_median_stroke(mut self, stroke: impl Into<Brush>) -> Self {
        self.median_stroke = stroke.into();
        self
    }

    /// Sets the flier marker diameter.
    pub fn with_flier_size(mut self, size: f64) -> Self {
        self.flier_size = size;
        self
    }

    /// Generates the box outline, median, whiskers, caps and fliers.
    pub fn marks(&self) -> Vec<Mark> {
        let s = &self.stats;
        let y = |v: f64| self.y_scale.map(v);
        let cx = self.center_x;
        let half = 0.5 * self.width;
        let cap = 0.25 * self.width;
        let w = self.stroke_width;
        let z = z_order::SERIES_STROKE;

        let mut outline = BezPath::new();
        outline.move_to((cx - half, y(s.q1)));
        outline.line_to((cx + half, y(s.q1)));
        outline.line_to((cx + half, y(s.q3)));
        outline.line_to((cx - half, y(s.q3)));
        outline.close_path();

        let mut out = vec![
            Mark::stroke(outline, self.stroke.clone(), w, z),
            Mark::rule((cx, y(s.q1)), (cx, y(s.whisker_low)), self.stroke.clone(), w, z),
            Mark::rule((cx, y(s.q3)), (cx, y(s.whisker_high)), self.stroke.clone(), w, z),
            Mark::rule(
                (cx - cap, y(s.whisker_low)),
                (cx + cap, y(s.whisker_low)),
                self.stroke.clone(),
                w,
                z,
            ),
            Mark::rule(
                (cx - cap, y(s.whisker_high)),
                (cx + cap, y(s.whisker_high)),
                self.stroke.clone(),
                w,
                z,
            ),
            Mark::rule(
                (cx - half, y(s.median)),
                (cx + half, y(s.median)),
                self.median_stroke.clone(),
                w,
                z,
            ),
        ];
        out.extend(s.fliers.iter().map(|v| {
            Mark::stroke(
                circle_path((cx, y(*v)), self.flier_size),
                self.stroke.clone(),
                w,
                z_order::SERIES_POINTS,
            )
        }));
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scale::ScaleLinear;

    #[test]
    fn quartiles_interpolate_between_ranks() {
        let stats = BoxStats::from_values(&[4.0, 1.0, 3.0, 2.0]).unwrap();
        assert!((stats.q1 - 1.75).abs() < 1e-9);
        assert!((stats.median - 2.5).abs() < 1e-9);
        assert!((stats.q3 - 3.25).abs() < 1e-9);
        assert_eq!((stats.whisker_low, stats.whisker_high), (1.0, 4.0));
        assert!(stats.fliers.is_empty());
    }

    #[test]
    fn far_values_become_fliers() {
        let stats = BoxStats::from_values(&[1.0, 2.0, 3.0, 4.0, 5.0, 100.0]).unwrap();
        assert_eq!(stats.fliers, [100.0]);
        assert_eq!(stats.whisker_high, 5.0);
        assert_eq!(stats.extent(), (1.0, 100.0));
    }

    #[test]
    fn single_value_collapses_the_box() {
        let stats = BoxStats::from_values(&[7.0]).unwrap();
        assert_eq!(
            (stats.q1, stats.median, stats.q3, stats.whisker_low, stats.whisker_high),
            (7.0, 7.0, 7.0, 7.0, 7.0)
        );
        assert!(BoxStats::from_values(&[]).is_none());
    }

    #[test]
    fn marks_cover_the_whisker_range() {
        let stats = BoxStats::from_values(&[0.0, 2.0, 4.0, 6.0, 8.0, 50.0]).unwrap();
        let flier_count = stats.fliers.len();
        let y = ScaleContinuous::Linear(ScaleLinear::new((0.0, 100.0), (100.0, 0.0)));
        let marks = BoxMarkSpec::new(stats, 20.0, 10.0, y).marks();

        assert_eq!(marks.len(), 6 + flier_count);
        let outline = marks[0].bounds().unwrap();
        assert!((outline.width() - 10.0).abs() < 1e-9);
        assert!((outline.center().x - 20.0).abs() < 1e-9);
    }
}

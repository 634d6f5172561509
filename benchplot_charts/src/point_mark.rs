// Copyright 2025 the Benchplot Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Point mark generation.

use kurbo::{BezPath, Circle, Shape};
use peniko::Brush;
use peniko::color::palette::css;

use crate::mark::Mark;
use crate::scale::ScaleContinuous;

/// Filled circular markers at data coordinates.
#[derive(Clone, Debug, PartialEq)]
pub struct PointMarkSpec {
    /// X scale mapping data x into figure x.
    pub x_scale: ScaleContinuous,
    /// Y scale mapping data y into figure y.
    pub y_scale: ScaleContinuous,
    /// Marker diameter in figure coordinates.
    pub size: f64,
    /// Fill paint for the markers.
    pub fill: Brush,
    /// Rendering order hint.
    pub z_index: i32,
}

impl PointMarkSpec {
    /// Creates a point mark spec with a size of 6 and a black fill.
    pub fn new(x_scale: ScaleContinuous, y_scale: ScaleContinuous) -> Self {
        Self {
            x_scale,
            y_scale,
            size: 6.0,
            fill: Brush::Solid(css::BLACK),
            z_index: crate::z_order::SERIES_POINTS,
        }
    }

    /// Sets the marker diameter.
    pub fn with_size(mut self, size: f64) -> Self {
        self.size = size;
        self
    }

    /// Sets the fill paint.
    pub fn with_fill(mut self, fill: impl Into<Brush>) -> Self {
        self.fill = fill.into();
        self
    }

    /// Generates one mark per `(x, y)` pair, in input order.
    pub fn marks(&self, points: impl IntoIterator<Item = (f64, f64)>) -> Vec<Mark> {
        points
            .into_iter()
            .map(|(x, y)| {
                let center = (self.x_scale.map(x), self.y_scale.map(y));
                Mark::fill(
                    circle_path(center, self.size),
                    self.fill.clone(),
                    self.z_index,
                )
            })
            .collect()
    }
}

/// A circle outline centered at `center` with diameter `size`.
pub(crate) fn circle_path(center: (f64, f64), size: f64) -> BezPath {
    Circle::new(center, 0.5 * size).path_elements(0.1).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scale::{ScaleLinear, ScaleLog};

    #[test]
    fn markers_are_centered_on_mapped_points() {
        let x = ScaleContinuous::Log(ScaleLog::new((1.0, 16.0), (0.0, 100.0)).with_base(2.0));
        let y = ScaleContinuous::Linear(ScaleLinear::new((0.0, 10.0), (50.0, 0.0)));
        let spec = PointMarkSpec::new(x, y).with_size(4.0).with_fill(css::GREEN);

        let marks = spec.marks([(4.0, 5.0), (16.0, 10.0)]);
        assert_eq!(marks.len(), 2);

        let b0 = marks[0].bounds().unwrap();
        assert!((b0.center().x - 50.0).abs() < 0.25, "{b0:?}");
        assert!((b0.center().y - 25.0).abs() < 0.25, "{b0:?}");
        assert!((b0.width() - 4.0).abs() < 0.25, "{b0:?}");

        let b1 = marks[1].bounds().unwrap();
        assert!((b1.center().x - 100.0).abs() < 0.25, "{b1:?}");
    }
}

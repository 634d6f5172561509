// Copyright 2025 the Benchplot Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A small measure/arrange layout helper for charts.
//!
//! - **Measure**: guides (titles, axes) report the thickness they need.
//! - **Arrange**: the plot rectangle takes whatever the view has left, and guides are placed
//!   in strips adjacent to it.

use kurbo::Rect;

/// Layout inputs for one chart placed inside a view rectangle.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ChartLayoutSpec {
    /// Outer chart bounds.
    pub view: Rect,
    /// Title strip thickness (reserved above the plot and guides), if any.
    pub title_top: Option<f64>,
    /// Padding inside `view`, applied on all sides.
    pub outer_padding: f64,
    /// Left axis strip thickness, if any.
    pub axis_left: Option<f64>,
    /// Bottom axis strip thickness, if any.
    pub axis_bottom: Option<f64>,
}

/// Output of the arrange pass.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ChartLayout {
    /// Outer chart bounds.
    pub view: Rect,
    /// Reserved rectangle for the title, if any.
    pub title_top: Option<Rect>,
    /// The data rectangle.
    pub plot: Rect,
    /// Reserved rectangle for the left axis, if any.
    pub axis_left: Option<Rect>,
    /// Reserved rectangle for the bottom axis, if any.
    pub axis_bottom: Option<Rect>,
}

impl ChartLayout {
    /// Computes a layout from the provided specification.
    ///
    /// The plot never has negative extent; a view too small for its guides yields an empty
    /// plot rectangle.
    pub fn arrange(spec: &ChartLayoutSpec) -> Self {
        let view = spec.view;
        let pad = spec.outer_padding.max(0.0);
        let title_h = spec.title_top.unwrap_or(0.0).max(0.0);
        let axis_left_w = spec.axis_left.unwrap_or(0.0).max(0.0);
        let axis_bottom_h = spec.axis_bottom.unwrap_or(0.0).max(0.0);

        let x0 = view.x0 + pad + axis_left_w;
        let y0 = view.y0 + pad + title_h;
        let x1 = (view.x1 - pad).max(x0);
        let y1 = (view.y1 - pad - axis_bottom_h).max(y0);
        let plot = Rect::new(x0, y0, x1, y1);

        let title_top = spec
            .title_top
            .map(|_| Rect::new(view.x0, view.y0 + pad, view.x1, view.y0 + pad + title_h));
        let axis_left = spec
            .axis_left
            .map(|_| Rect::new(plot.x0 - axis_left_w, plot.y0, plot.x0, plot.y1));
        let axis_bottom = spec
            .axis_bottom
            .map(|_| Rect::new(plot.x0, plot.y1, plot.x1, plot.y1 + axis_bottom_h));

        Self {
            view,
            title_top,
            plot,
            axis_left,
            axis_bottom,
        }
    }
}

/// Splits `rect` into `count` equal-width columns separated by `gap`.
pub fn split_columns(rect: Rect, count: usize, gap: f64) -> Vec<Rect> {
    if count == 0 {
        return Vec::new();
    }
    let n = count as f64;
    let gap = gap.max(0.0);
    let width = ((rect.width() - gap * (n - 1.0)) / n).max(0.0);
    (0..count)
        .map(|i| {
            let x0 = rect.x0 + i as f64 * (width + gap);
            Rect::new(x0, rect.y0, x0 + width, rect.y1)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn guides_sit_adjacent_to_the_plot() {
        let layout = ChartLayout::arrange(&ChartLayoutSpec {
            view: Rect::new(0.0, 0.0, 300.0, 200.0),
            title_top: Some(20.0),
            outer_padding: 5.0,
            axis_left: Some(40.0),
            axis_bottom: Some(30.0),
        });
        assert_eq!(layout.plot, Rect::new(45.0, 25.0, 295.0, 165.0));
        assert_eq!(layout.title_top, Some(Rect::new(0.0, 5.0, 300.0, 25.0)));
        assert_eq!(layout.axis_left, Some(Rect::new(5.0, 25.0, 45.0, 165.0)));
        assert_eq!(layout.axis_bottom, Some(Rect::new(45.0, 165.0, 295.0, 195.0)));
    }

    #[test]
    fn tiny_views_yield_an_empty_plot() {
        let layout = ChartLayout::arrange(&ChartLayoutSpec {
            view: Rect::new(0.0, 0.0, 10.0, 10.0),
            axis_left: Some(40.0),
            axis_bottom: Some(40.0),
            ..ChartLayoutSpec::default()
        });
        assert_eq!(layout.plot.width(), 0.0);
        assert_eq!(layout.plot.height(), 0.0);
    }

    #[test]
    fn columns_tile_the_rect() {
        let cols = split_columns(Rect::new(0.0, 0.0, 320.0, 100.0), 3, 10.0);
        assert_eq!(cols.len(), 3);
        assert!((cols[0].width() - 100.0).abs() < 1e-9);
        assert!((cols[2].x1 - 320.0).abs() < 1e-9);
        assert!(split_columns(Rect::new(0.0, 0.0, 1.0, 1.0), 0, 0.0).is_empty());
    }
}

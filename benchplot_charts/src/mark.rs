// Copyright 2025 the Benchplot Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Retained drawing primitives produced by chart builders.
//!
//! Builders emit a flat list of [`Mark`]s; a backend (see [`crate::Figure::to_svg_string`])
//! paints them sorted by `z_index`, ties broken by emission order.

use kurbo::{BezPath, Point, Rect, Shape};
use peniko::{Brush, Color};

/// Horizontal alignment of a text mark relative to its position.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TextAnchor {
    /// Text starts at the position.
    Start,
    /// Text is centered on the position.
    Middle,
    /// Text ends at the position.
    End,
}

/// Vertical alignment of a text mark relative to its position.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TextBaseline {
    /// The position is the vertical middle of the text.
    Middle,
    /// The position is the alphabetic baseline.
    Alphabetic,
    /// The position is the top of the text.
    Hanging,
}

/// A filled axis-aligned rectangle.
#[derive(Clone, Debug, PartialEq)]
pub struct RectMark {
    /// Geometry in figure coordinates.
    pub rect: Rect,
    /// Fill paint.
    pub fill: Brush,
}

/// A filled and/or stroked path.
#[derive(Clone, Debug, PartialEq)]
pub struct PathMark {
    /// Geometry in figure coordinates.
    pub path: BezPath,
    /// Fill paint.
    pub fill: Brush,
    /// Stroke paint.
    pub stroke: Brush,
    /// Stroke width; `0` disables stroking.
    pub stroke_width: f64,
}

/// A single line of unshaped text.
#[derive(Clone, Debug, PartialEq)]
pub struct TextMark {
    /// Anchor position in figure coordinates.
    pub pos: Point,
    /// The text.
    pub text: String,
    /// Font size in figure coordinates.
    pub font_size: f64,
    /// Horizontal alignment.
    pub anchor: TextAnchor,
    /// Vertical alignment.
    pub baseline: TextBaseline,
    /// Rotation in degrees around `pos` (clockwise, as in SVG).
    pub angle: f64,
    /// Fill paint.
    pub fill: Brush,
}

/// What a mark draws.
#[derive(Clone, Debug, PartialEq)]
pub enum MarkPayload {
    /// A rectangle.
    Rect(RectMark),
    /// A path.
    Path(PathMark),
    /// A text run.
    Text(TextMark),
}

/// A drawable item with a paint-order hint.
#[derive(Clone, Debug, PartialEq)]
pub struct Mark {
    /// Paint order; lower values are painted first. See [`crate::z_order`].
    pub z_index: i32,
    /// The geometry and paint.
    pub payload: MarkPayload,
}

impl Mark {
    /// A filled rectangle.
    pub fn rect(rect: Rect, fill: impl Into<Brush>, z_index: i32) -> Self {
        Self {
            z_index,
            payload: MarkPayload::Rect(RectMark {
                rect,
                fill: fill.into(),
            }),
        }
    }

    /// A stroked, unfilled path.
    pub fn stroke(path: BezPath, stroke: impl Into<Brush>, stroke_width: f64, z_index: i32) -> Self {
        Self {
            z_index,
            payload: MarkPayload::Path(PathMark {
                path,
                fill: Brush::Solid(Color::TRANSPARENT),
                stroke: stroke.into(),
                stroke_width,
            }),
        }
    }

    /// A filled, unstroked path.
    pub fn fill(path: BezPath, fill: impl Into<Brush>, z_index: i32) -> Self {
        Self {
            z_index,
            payload: MarkPayload::Path(PathMark {
                path,
                fill: fill.into(),
                stroke: Brush::Solid(Color::TRANSPARENT),
                stroke_width: 0.0,
            }),
        }
    }

    /// A straight line segment.
    pub fn rule(
        from: impl Into<Point>,
        to: impl Into<Point>,
        stroke: impl Into<Brush>,
        stroke_width: f64,
        z_index: i32,
    ) -> Self {
        let mut p = BezPath::new();
        p.move_to(from);
        p.line_to(to);
        Self::stroke(p, stroke, stroke_width, z_index)
    }

    /// A text run.
    pub fn text(text: TextMark, z_index: i32) -> Self {
        Self {
            z_index,
            payload: MarkPayload::Text(text),
        }
    }

    /// Returns the text payload, if this is a text mark.
    pub fn as_text(&self) -> Option<&TextMark> {
        match &self.payload {
            MarkPayload::Text(t) => Some(t),
            _ => None,
        }
    }

    /// Returns the geometric bounds of rect and path marks.
    ///
    /// Text has no bounds here; its extent depends on font metrics.
    pub fn bounds(&self) -> Option<Rect> {
        match &self.payload {
            MarkPayload::Rect(r) => Some(r.rect),
            MarkPayload::Path(p) => Some(p.path.bounding_box()),
            MarkPayload::Text(_) => None,
        }
    }
}

impl TextMark {
    /// Creates a horizontal text run with middle/middle alignment.
    pub fn new(pos: impl Into<Point>, text: impl Into<String>, font_size: f64) -> Self {
        Self {
            pos: pos.into(),
            text: text.into(),
            font_size,
            anchor: TextAnchor::Middle,
            baseline: TextBaseline::Middle,
            angle: 0.0,
            fill: Brush::Solid(Color::BLACK),
        }
    }

    /// Sets the horizontal alignment.
    pub fn with_anchor(mut self, anchor: TextAnchor) -> Self {
        self.anchor = anchor;
        self
    }

    /// Sets the vertical alignment.
    pub fn with_baseline(mut self, baseline: TextBaseline) -> Self {
        self.baseline = baseline;
        self
    }

    /// Sets the rotation in degrees.
    pub fn with_angle(mut self, angle: f64) -> Self {
        self.angle = angle;
        self
    }

    /// Sets the fill paint.
    pub fn with_fill(mut self, fill: impl Into<Brush>) -> Self {
        self.fill = fill.into();
        self
    }
}

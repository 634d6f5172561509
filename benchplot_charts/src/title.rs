// Copyright 2025 the Benchplot Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Figure and panel titles.
//!
//! Titles reserve a strip in [`crate::ChartLayout`] and render as a single text mark centered
//! in that strip.

use kurbo::Rect;
use peniko::Brush;
use peniko::color::palette::css;

use crate::mark::{Mark, TextMark};
use crate::measure::TextMeasurer;
use crate::z_order;

/// A single-line title.
#[derive(Clone, Debug, PartialEq)]
pub struct TitleSpec {
    /// Title text (unshaped).
    pub text: String,
    /// Font size in figure coordinates.
    pub font_size: f64,
    /// Fill paint.
    pub fill: Brush,
    /// Vertical padding applied above and below the text.
    pub padding: f64,
}

impl TitleSpec {
    /// Creates a title spec with default styling.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            font_size: 12.0,
            fill: Brush::Solid(css::BLACK),
            padding: 6.0,
        }
    }

    /// Sets the font size.
    pub fn with_font_size(mut self, font_size: f64) -> Self {
        self.font_size = font_size;
        self
    }

    /// Sets the vertical padding.
    pub fn with_padding(mut self, padding: f64) -> Self {
        self.padding = padding;
        self
    }

    /// Returns the height reserved by this title.
    pub fn measure(&self, measurer: &dyn TextMeasurer) -> f64 {
        let (_, h) = measurer.measure(&self.text, self.font_size);
        2.0 * self.padding.max(0.0) + h
    }

    /// Emits the title mark centered in `title_rect`.
    pub fn marks(&self, title_rect: Rect) -> Vec<Mark> {
        let center = title_rect.center();
        vec![Mark::text(
            TextMark::new(center, self.text.clone(), self.font_size).with_fill(self.fill.clone()),
            z_order::TITLES,
        )]
    }
}

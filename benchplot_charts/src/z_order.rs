// Copyright 2025 the Benchplot Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Z-order conventions for figure marks.
//!
//! Values are coarse; the SVG writer breaks ties by emission order. The canvas fill is not a
//! mark and is always painted first.

/// Gridlines drawn behind series.
pub const GRID_LINES: i32 = -50;

/// Stroked series marks (boxes, whiskers, medians).
pub const SERIES_STROKE: i32 = 10;
/// Point series marks (scatter markers, fliers).
pub const SERIES_POINTS: i32 = 20;

/// Axis domain line and tick marks.
pub const AXIS_RULES: i32 = 30;
/// Axis tick labels.
pub const AXIS_LABELS: i32 = 40;
/// Axis title labels.
pub const AXIS_TITLES: i32 = 50;

/// Panel and figure titles.
pub const TITLES: i32 = 80;

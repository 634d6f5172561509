// Copyright 2025 the Benchplot Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The benchmark report: one results CSV in, one SVG per chart out.
//!
//! The pipeline is fixed:
//! 1. [`load_table`] reads the `;`-separated results into a typed table.
//! 2. The table is partitioned by [`DISCRIMINANT`].
//! 3. [`prepare`] reshapes every chart in [`CHARTS`] into points or distributions.
//! 4. A [`Renderer`] draws each prepared chart; [`SvgRenderer`] writes SVG files.
//!
//! [`run`] chains the steps. Any failure aborts the run before the first chart is drawn,
//! except for write failures, which surface from the chart being written.

mod chart_spec;
mod config;
mod error;
mod loader;
mod render;
mod report;

pub use chart_spec::{CHARTS, ChartKind, ChartSpec, DISCRIMINANT, PanelSpec, SERIES_LABEL, Y_LABEL};
pub use config::ReportConfig;
pub use error::ReportError;
pub use loader::load_table;
pub use render::{Panel, Renderer, SvgRenderer};
pub use report::{PreparedChart, PreparedData, prepare, run};

// Copyright 2025 the Benchplot Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Typed benchmark-result tables and the reshapes that feed the report charts.
//!
//! This crate provides:
//! - [`Table`], an owned column-oriented table whose columns each carry one type
//!   (text, integer, or float) with explicit missing cells,
//! - [`group`], which partitions a results table into per-chart sub-tables, and
//! - the two chart reshapes: [`to_points`] (melt for scatter plots) and
//!   [`to_distributions`] (header-first distributions for box plots).
//!
//! Nothing here reads files or draws; loading and rendering live in downstream crates.

mod distribution;
mod error;
mod group;
mod scatter;
mod table;

pub use distribution::{
    Distribution, DistributionSet, header_from_first_row, to_distributions,
    to_distributions_many, transpose,
};
pub use error::{FrameError, NumericType, SchemaError, TypeCoercionError};
pub use group::{GroupedTable, group};
pub use scatter::{Point, PointSet, to_points};
pub use table::{Column, ColumnData, ColumnType, Table, Value};

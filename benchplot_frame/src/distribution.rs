// Copyright 2025 the Benchplot Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Reshaping replicate-run tables into named distributions for box plots.
//!
//! Box-plot groups arrive with one row per series and one column per replicate run. The
//! reshape happens in two explicit steps:
//! - [`transpose`] turns the series rows into columns, so the first row holds the series
//!   names and each later row holds one replicate run, and
//! - [`header_from_first_row`] promotes that first row to column names.
//!
//! The header-first layout mirrors how the benchmark harness exports its results; it is a
//! candidate for removal once the export writes one observation per row.

use crate::error::{FrameError, SchemaError};
use crate::table::{Column, ColumnData, Table};

/// A named sequence of finite observations.
#[derive(Debug, Clone, PartialEq)]
pub struct Distribution {
    /// Distribution name (taken from the header row).
    pub name: String,
    /// Observations in source row order. May be empty.
    pub values: Vec<f64>,
}

/// Distributions in header order. Names are unique.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DistributionSet {
    distributions: Vec<Distribution>,
}

impl DistributionSet {
    /// Returns the observations for `name`.
    pub fn get(&self, name: &str) -> Option<&[f64]> {
        self.distributions
            .iter()
            .find(|d| d.name == name)
            .map(|d| d.values.as_slice())
    }

    /// Returns the distribution names in order.
    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.distributions.iter().map(|d| d.name.as_str())
    }

    /// Iterates the distributions in order.
    pub fn iter(&self) -> core::slice::Iter<'_, Distribution> {
        self.distributions.iter()
    }

    /// Returns the number of distributions (empty ones included).
    pub fn len(&self) -> usize {
        self.distributions.len()
    }

    /// Returns `true` if the set holds no distributions.
    pub fn is_empty(&self) -> bool {
        self.distributions.is_empty()
    }
}

impl<'a> IntoIterator for &'a DistributionSet {
    type Item = &'a Distribution;
    type IntoIter = core::slice::Iter<'a, Distribution>;

    fn into_iter(self) -> Self::IntoIter {
        self.distributions.iter()
    }
}

/// Swaps rows and columns.
///
/// Row `i` of the output holds column `i` of the input; output columns are named by the input
/// row index (`"0"`, `"1"`, ...) and hold text cells. Input column names become row labels, so
/// later coercion errors can point back at the source column.
pub fn transpose(table: &Table) -> Table {
    let columns = (0..table.row_count())
        .map(|row| {
            let cells = table
                .columns()
                .iter()
                .map(|col| col.get(row).map(|v| v.to_string()));
            Column::new(row.to_string(), ColumnData::Str(cells.collect()))
        })
        .collect();
    Table::from_parts(columns, table.column_count())
        .with_row_labels(table.column_names().map(str::to_owned).collect())
}

/// Promotes the first row to column names and drops it.
///
/// Header cells are rendered to text; they must be present and unique. At least one row must
/// remain below the header.
pub fn header_from_first_row(table: &Table) -> Result<Table, FrameError> {
    let rows = table.row_count();
    if rows < 2 {
        return Err(SchemaError::TooFewRows { rows, required: 2 }.into());
    }

    let mut names: Vec<String> = Vec::with_capacity(table.column_count());
    for col in table.columns() {
        let Some(header) = col.get(0) else {
            return Err(SchemaError::MissingHeader {
                column: col.name().to_owned(),
            }
            .into());
        };
        let name = header.to_string();
        if names.contains(&name) {
            return Err(SchemaError::DuplicateHeader { name }.into());
        }
        names.push(name);
    }

    let body: Vec<usize> = (1..rows).collect();
    let body = table.take_rows(&body);
    let columns = body
        .columns()
        .iter()
        .zip(names)
        .map(|(col, name)| col.renamed(name))
        .collect();
    let labels: Option<Vec<String>> = (0..body.row_count())
        .map(|row| body.row_label(row).map(str::to_owned))
        .collect();
    let table = Table::new(columns)?;
    Ok(match labels {
        Some(labels) => table.with_row_labels(labels),
        None => table,
    })
}

/// Reshapes a header-first table into one distribution per column.
///
/// Every cell below the header is coerced to a finite float; missing cells are dropped, and a
/// column with no observations stays in the set as an empty distribution. Coercion errors
/// report the header name, the row index within `table`, and the row label when `table` came
/// from [`transpose`].
pub fn to_distributions(table: &Table) -> Result<DistributionSet, FrameError> {
    let body = header_from_first_row(table)?;
    let mut distributions = Vec::with_capacity(body.column_count());
    for col in body.columns() {
        let mut values = Vec::with_capacity(col.len());
        for row in 0..col.len() {
            let value = col
                .f64_at(row)
                .map_err(|e| e.offset_rows(1).with_row_label(body.row_label(row)))?;
            if let Some(v) = value {
                values.push(v);
            }
        }
        distributions.push(Distribution {
            name: col.name().to_owned(),
            values,
        });
    }
    Ok(DistributionSet { distributions })
}

/// Reshapes several header-first tables, one [`DistributionSet`] per input, in input order.
pub fn to_distributions_many(tables: &[&Table]) -> Result<Vec<DistributionSet>, FrameError> {
    tables.iter().map(|t| to_distributions(t)).collect()
}

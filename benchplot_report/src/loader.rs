// Copyright 2025 the Benchplot Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Loading the benchmark results file into a typed [`Table`].

use std::path::Path;

use benchplot_frame::{Column, ColumnData, Table};
use csv::{ReaderBuilder, Trim};
use tracing::info;

use crate::error::ReportError;

/// Field values read as missing cells, matching the default NA set of the
/// results exporter's dataframe reader.
const NA_TOKENS: &[&str] = &[
    "", "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

/// Reads a delimited results file with a header row.
///
/// Fields are trimmed; empty fields and NA markers such as `NaN`, `NA` or `null` become
/// missing cells. Each column gets the narrowest type that holds all of its present cells:
/// integer, then finite float, then text. A column with no present cells is typed as float.
/// Rows with a different field count than the header are rejected.
pub fn load_table(path: &Path, delimiter: u8) -> Result<Table, ReportError> {
    let csv_error = |source| ReportError::Csv {
        path: path.to_owned(),
        source,
    };
    let mut reader = ReaderBuilder::new()
        .delimiter(delimiter)
        .has_headers(true)
        .trim(Trim::All)
        .from_path(path)
        .map_err(csv_error)?;

    let names: Vec<String> = reader
        .headers()
        .map_err(csv_error)?
        .iter()
        .map(str::to_owned)
        .collect();

    let mut cells: Vec<Vec<Option<String>>> = vec![Vec::new(); names.len()];
    for record in reader.records() {
        let record = record.map_err(csv_error)?;
        for (column, field) in cells.iter_mut().zip(record.iter()) {
            column.push((!NA_TOKENS.contains(&field)).then(|| field.to_owned()));
        }
    }

    let columns = names
        .into_iter()
        .zip(cells)
        .map(|(name, cells)| Column::new(name, infer(cells)))
        .collect();
    let table = Table::new(columns).map_err(|source| ReportError::Schema {
        path: path.to_owned(),
        source,
    })?;

    info!(
        path = %path.display(),
        rows = table.row_count(),
        columns = table.column_count(),
        "loaded results table"
    );
    Ok(table)
}

/// Picks the narrowest column type that holds every present cell.
fn infer(cells: Vec<Option<String>>) -> ColumnData {
    let present = || cells.iter().flatten();

    if present().next().is_some() && present().all(|c| c.parse::<i64>().is_ok()) {
        return ColumnData::Int(
            cells
                .iter()
                .map(|c| c.as_deref().and_then(|s| s.parse().ok()))
                .collect(),
        );
    }
    if present().all(|c| c.parse::<f64>().is_ok_and(f64::is_finite)) {
        return ColumnData::Float(
            cells
                .iter()
                .map(|c| c.as_deref().and_then(|s| s.parse().ok()))
                .collect(),
        );
    }
    ColumnData::Str(cells)
}

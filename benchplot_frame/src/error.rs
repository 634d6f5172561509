// Copyright 2025 the Benchplot Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Error taxonomy for table construction and reshaping.

use core::fmt;

use thiserror::Error;

/// Errors returned by table construction, grouping, and reshaping.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FrameError {
    /// An expected column, row, or group is missing, or the table shape is invalid.
    #[error(transparent)]
    Schema(#[from] SchemaError),
    /// A cell could not be coerced to the numeric type a reshape requires.
    #[error(transparent)]
    TypeCoercion(#[from] TypeCoercionError),
}

/// Structural problems with a table.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaError {
    /// A required column is absent.
    #[error("missing column `{column}`")]
    MissingColumn {
        /// The requested column name.
        column: String,
    },
    /// Two columns share a name.
    #[error("duplicate column `{column}`")]
    DuplicateColumn {
        /// The repeated column name.
        column: String,
    },
    /// A column's length differs from the rest of the table.
    #[error("column `{column}` has {found} rows, expected {expected}")]
    LengthMismatch {
        /// The offending column.
        column: String,
        /// Row count of the first column.
        expected: usize,
        /// Row count of the offending column.
        found: usize,
    },
    /// The discriminant cell of a row is empty, so the row belongs to no group.
    #[error("row {row} has no value in discriminant column `{column}`")]
    MissingDiscriminant {
        /// The discriminant column.
        column: String,
        /// Zero-based row index.
        row: usize,
    },
    /// No group exists for the requested discriminant value.
    #[error("no rows with discriminant value `{name}`")]
    MissingGroup {
        /// The requested discriminant value.
        name: String,
    },
    /// A table has fewer rows than an operation needs.
    #[error("table has {rows} rows, at least {required} are required")]
    TooFewRows {
        /// Actual row count.
        rows: usize,
        /// Minimum row count.
        required: usize,
    },
    /// A header cell is empty.
    #[error("header cell in column `{column}` is empty")]
    MissingHeader {
        /// The column whose first-row cell is empty.
        column: String,
    },
    /// Two header cells name the same distribution.
    #[error("header name `{name}` appears more than once")]
    DuplicateHeader {
        /// The repeated header name.
        name: String,
    },
}

/// The numeric type a cell was being coerced to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumericType {
    /// A signed 64-bit integer.
    Integer,
    /// A finite 64-bit float.
    Float,
}

impl fmt::Display for NumericType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Integer => "integer",
            Self::Float => "float",
        })
    }
}

/// A cell whose value does not parse as the required numeric type.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error(
    "column `{column}`, row {row}{}: cannot coerce `{value}` to {target}",
    row_suffix(.row_label)
)]
pub struct TypeCoercionError {
    /// The column holding the cell.
    pub column: String,
    /// Zero-based row index within the table that was being reshaped.
    pub row: usize,
    /// Label of that row, if the table names its rows.
    ///
    /// For a transposed table this is the source column of the cell.
    pub row_label: Option<String>,
    /// The cell text (`<missing>` for an empty cell).
    pub value: String,
    /// The requested type.
    pub target: NumericType,
}

fn row_suffix(label: &Option<String>) -> String {
    label
        .as_deref()
        .map(|l| format!(" (`{l}`)"))
        .unwrap_or_default()
}

impl TypeCoercionError {
    pub(crate) fn new(
        column: impl Into<String>,
        row: usize,
        value: impl Into<String>,
        target: NumericType,
    ) -> Self {
        Self {
            column: column.into(),
            row,
            row_label: None,
            value: value.into(),
            target,
        }
    }

    /// Attaches the label of the reported row.
    #[must_use]
    pub fn with_row_label(mut self, label: Option<&str>) -> Self {
        self.row_label = label.map(str::to_owned);
        self
    }

    /// Shifts the reported row by `offset` rows.
    ///
    /// Used when a reshape works on a slice of a larger table and the error should point at the
    /// row of the caller's table.
    #[must_use]
    pub fn offset_rows(mut self, offset: usize) -> Self {
        self.row += offset;
        self
    }
}

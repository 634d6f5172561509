// Copyright 2025 the Benchplot Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Owned, typed, column-oriented table.

use core::fmt;

use crate::error::{FrameError, NumericType, SchemaError, TypeCoercionError};

/// The semantic type shared by every cell of a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColumnType {
    /// Free-form text.
    Str,
    /// Signed 64-bit integers.
    Int,
    /// 64-bit floats.
    Float,
}

/// Column storage. `None` marks a missing cell.
#[derive(Debug, Clone, PartialEq)]
pub enum ColumnData {
    /// Text cells.
    Str(Vec<Option<String>>),
    /// Integer cells.
    Int(Vec<Option<i64>>),
    /// Float cells.
    Float(Vec<Option<f64>>),
}

impl ColumnData {
    /// Returns the number of cells (missing cells included).
    pub fn len(&self) -> usize {
        match self {
            Self::Str(v) => v.len(),
            Self::Int(v) => v.len(),
            Self::Float(v) => v.len(),
        }
    }

    /// Returns `true` if the column holds no cells at all.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the column type.
    pub fn column_type(&self) -> ColumnType {
        match self {
            Self::Str(_) => ColumnType::Str,
            Self::Int(_) => ColumnType::Int,
            Self::Float(_) => ColumnType::Float,
        }
    }

    fn get(&self, row: usize) -> Option<Value<'_>> {
        match self {
            Self::Str(v) => v.get(row)?.as_deref().map(Value::Str),
            Self::Int(v) => v.get(row).copied().flatten().map(Value::Int),
            Self::Float(v) => v.get(row).copied().flatten().map(Value::Float),
        }
    }

    fn take(&self, rows: &[usize]) -> Self {
        match self {
            Self::Str(v) => Self::Str(rows.iter().map(|&r| v[r].clone()).collect()),
            Self::Int(v) => Self::Int(rows.iter().map(|&r| v[r]).collect()),
            Self::Float(v) => Self::Float(rows.iter().map(|&r| v[r]).collect()),
        }
    }
}

/// A borrowed, non-missing cell value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Value<'a> {
    /// Text.
    Str(&'a str),
    /// Integer.
    Int(i64),
    /// Float.
    Float(f64),
}

impl fmt::Display for Value<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Str(s) => f.write_str(s),
            Self::Int(i) => write!(f, "{i}"),
            Self::Float(x) => write!(f, "{x}"),
        }
    }
}

impl Value<'_> {
    /// Interprets the value as an integer.
    ///
    /// Floats are accepted only when they carry no fractional part; text must parse as a
    /// decimal integer (surrounding whitespace is ignored).
    pub fn as_i64(&self) -> Option<i64> {
        match *self {
            Self::Int(i) => Some(i),
            Self::Float(x) => {
                let in_range = x >= i64::MIN as f64 && x < i64::MAX as f64;
                if x.is_finite() && x.fract() == 0.0 && in_range {
                    #[allow(
                        clippy::cast_possible_truncation,
                        reason = "integral and within the i64 range"
                    )]
                    {
                        Some(x as i64)
                    }
                } else {
                    None
                }
            }
            Self::Str(s) => s.trim().parse().ok(),
        }
    }

    /// Interprets the value as a finite float.
    pub fn as_f64(&self) -> Option<f64> {
        let x = match *self {
            Self::Int(i) => i as f64,
            Self::Float(x) => x,
            Self::Str(s) => s.trim().parse().ok()?,
        };
        x.is_finite().then_some(x)
    }
}

/// A named column.
#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    name: String,
    data: ColumnData,
}

impl Column {
    /// Creates a column.
    pub fn new(name: impl Into<String>, data: ColumnData) -> Self {
        Self {
            name: name.into(),
            data,
        }
    }

    /// Creates a text column.
    pub fn str<S: Into<String>>(
        name: impl Into<String>,
        cells: impl IntoIterator<Item = Option<S>>,
    ) -> Self {
        let cells = cells.into_iter().map(|c| c.map(Into::into)).collect();
        Self::new(name, ColumnData::Str(cells))
    }

    /// Creates an integer column.
    pub fn int(name: impl Into<String>, cells: impl IntoIterator<Item = Option<i64>>) -> Self {
        Self::new(name, ColumnData::Int(cells.into_iter().collect()))
    }

    /// Creates a float column.
    pub fn float(name: impl Into<String>, cells: impl IntoIterator<Item = Option<f64>>) -> Self {
        Self::new(name, ColumnData::Float(cells.into_iter().collect()))
    }

    /// Returns the column name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the underlying storage.
    pub fn data(&self) -> &ColumnData {
        &self.data
    }

    /// Returns the column type.
    pub fn column_type(&self) -> ColumnType {
        self.data.column_type()
    }

    /// Returns the number of cells.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns `true` if the column has no cells.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns the cell at `row`, or `None` if it is missing or out of bounds.
    pub fn get(&self, row: usize) -> Option<Value<'_>> {
        self.data.get(row)
    }

    /// Returns `true` if every cell is missing.
    pub fn is_all_missing(&self) -> bool {
        (0..self.len()).all(|row| self.get(row).is_none())
    }

    /// Coerces the cell at `row` to an integer.
    ///
    /// Missing cells are passed through as `Ok(None)`.
    pub fn i64_at(&self, row: usize) -> Result<Option<i64>, TypeCoercionError> {
        let Some(value) = self.get(row) else {
            return Ok(None);
        };
        value.as_i64().map(Some).ok_or_else(|| {
            TypeCoercionError::new(&self.name, row, value.to_string(), NumericType::Integer)
        })
    }

    /// Coerces the cell at `row` to a finite float.
    ///
    /// Missing cells are passed through as `Ok(None)`.
    pub fn f64_at(&self, row: usize) -> Result<Option<f64>, TypeCoercionError> {
        let Some(value) = self.get(row) else {
            return Ok(None);
        };
        value.as_f64().map(Some).ok_or_else(|| {
            TypeCoercionError::new(&self.name, row, value.to_string(), NumericType::Float)
        })
    }

    pub(crate) fn renamed(&self, name: impl Into<String>) -> Self {
        Self::new(name, self.data.clone())
    }

    pub(crate) fn take(&self, rows: &[usize]) -> Self {
        Self::new(self.name.clone(), self.data.take(rows))
    }
}

/// An ordered set of uniquely named, equal-length columns.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Table {
    columns: Vec<Column>,
    row_count: usize,
    row_labels: Option<Vec<String>>,
}

impl Table {
    /// Builds a table, validating that column names are unique and lengths agree.
    pub fn new(columns: Vec<Column>) -> Result<Self, FrameError> {
        let row_count = columns.first().map_or(0, Column::len);
        for (i, col) in columns.iter().enumerate() {
            if col.len() != row_count {
                return Err(SchemaError::LengthMismatch {
                    column: col.name.clone(),
                    expected: row_count,
                    found: col.len(),
                }
                .into());
            }
            if columns[..i].iter().any(|c| c.name == col.name) {
                return Err(SchemaError::DuplicateColumn {
                    column: col.name.clone(),
                }
                .into());
            }
        }
        Ok(Self {
            columns,
            row_count,
            row_labels: None,
        })
    }

    /// Assembles a table whose shape is already known to be valid.
    pub(crate) fn from_parts(columns: Vec<Column>, row_count: usize) -> Self {
        debug_assert!(
            columns.iter().all(|c| c.len() == row_count),
            "ragged columns"
        );
        Self {
            columns,
            row_count,
            row_labels: None,
        }
    }

    /// Names each row, one label per row.
    pub(crate) fn with_row_labels(mut self, labels: Vec<String>) -> Self {
        debug_assert_eq!(labels.len(), self.row_count, "one label per row");
        self.row_labels = Some(labels);
        self
    }

    /// Returns the number of rows.
    pub fn row_count(&self) -> usize {
        self.row_count
    }

    /// Returns the number of columns.
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Returns the columns in order.
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Returns the column names in order.
    pub fn column_names(&self) -> impl Iterator<Item = &str> + '_ {
        self.columns.iter().map(Column::name)
    }

    /// Returns the named column.
    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name == name)
    }

    /// Returns the named column or a [`SchemaError::MissingColumn`].
    pub fn require_column(&self, name: &str) -> Result<(usize, &Column), SchemaError> {
        self.columns
            .iter()
            .enumerate()
            .find(|(_, c)| c.name == name)
            .ok_or_else(|| SchemaError::MissingColumn {
                column: name.to_owned(),
            })
    }

    /// Returns the label of `row`, if the table names its rows.
    ///
    /// Only [`transpose`](crate::transpose) names rows: each row is labelled with the source
    /// column it came from.
    pub fn row_label(&self, row: usize) -> Option<&str> {
        self.row_labels.as_ref()?.get(row).map(String::as_str)
    }

    /// Returns the cell at `(row, col)`, or `None` if missing or out of bounds.
    pub fn value(&self, row: usize, col: usize) -> Option<Value<'_>> {
        self.columns.get(col)?.get(row)
    }

    /// Returns a new table holding only `rows`, in the given order.
    ///
    /// Panics if a row index is out of bounds.
    pub fn take_rows(&self, rows: &[usize]) -> Self {
        Self {
            columns: self.columns.iter().map(|c| c.take(rows)).collect(),
            row_count: rows.len(),
            row_labels: self
                .row_labels
                .as_ref()
                .map(|labels| rows.iter().map(|&r| labels[r].clone()).collect()),
        }
    }

    /// Returns a copy without the column at `index`.
    pub fn without_column(&self, index: usize) -> Self {
        let columns = self
            .columns
            .iter()
            .enumerate()
            .filter(|&(i, _)| i != index)
            .map(|(_, c)| c.clone())
            .collect();
        Self {
            columns,
            row_count: self.row_count,
            row_labels: self.row_labels.clone(),
        }
    }

    /// Returns a copy without columns whose cells are all missing.
    pub fn without_empty_columns(&self) -> Self {
        let columns = self
            .columns
            .iter()
            .filter(|c| !c.is_all_missing())
            .cloned()
            .collect();
        Self {
            columns,
            row_count: self.row_count,
            row_labels: self.row_labels.clone(),
        }
    }
}

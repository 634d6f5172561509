// Copyright 2025 the Benchplot Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Melting a wide sub-table into `(x, y)` scatter points.

use crate::error::{FrameError, NumericType, TypeCoercionError};
use crate::table::Table;

/// One scatter point: the integer series label and an observed value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    /// Series label (the independent variable).
    pub x: i64,
    /// Observed value.
    pub y: f64,
}

impl Point {
    /// Creates a point.
    pub fn new(x: i64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Scatter points in row-major, then column order of the source table.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PointSet {
    points: Vec<Point>,
}

impl PointSet {
    /// Returns the points as a slice.
    pub fn as_slice(&self) -> &[Point] {
        &self.points
    }

    /// Iterates the points.
    pub fn iter(&self) -> core::slice::Iter<'_, Point> {
        self.points.iter()
    }

    /// Returns the number of points.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns `true` if there are no points.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

impl From<Vec<Point>> for PointSet {
    fn from(points: Vec<Point>) -> Self {
        Self { points }
    }
}

impl<'a> IntoIterator for &'a PointSet {
    type Item = &'a Point;
    type IntoIter = core::slice::Iter<'a, Point>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

/// Melts `table` into scatter points keyed by `series_label`.
///
/// Every other column is treated as a replicate holding one y-value per row. For each row, and
/// each replicate column in order, a point `(label, value)` is emitted; missing cells emit
/// nothing. The label of every row must coerce to an integer, even for rows whose replicates
/// are all missing.
pub fn to_points(table: &Table, series_label: &str) -> Result<PointSet, FrameError> {
    let (label_index, label) = table.require_column(series_label)?;

    let mut points = Vec::new();
    for row in 0..table.row_count() {
        let Some(x) = label.i64_at(row)? else {
            return Err(
                TypeCoercionError::new(series_label, row, "<missing>", NumericType::Integer).into(),
            );
        };
        for (index, column) in table.columns().iter().enumerate() {
            if index == label_index {
                continue;
            }
            if let Some(y) = column.f64_at(row)? {
                points.push(Point { x, y });
            }
        }
    }
    Ok(PointSet { points })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SchemaError;
    use crate::table::Column;

    #[test]
    fn melts_rows_then_columns_and_skips_missing_cells() {
        let table = Table::new(vec![
            Column::int("series_name", [Some(1), Some(2)]),
            Column::float("v1", [Some(10.0), Some(30.0)]),
            Column::float("v2", [Some(20.0), None]),
        ])
        .unwrap();

        let points = to_points(&table, "series_name").unwrap();
        assert_eq!(
            points.as_slice(),
            [
                Point::new(1, 10.0),
                Point::new(1, 20.0),
                Point::new(2, 30.0)
            ]
        );
    }

    #[test]
    fn point_count_matches_non_missing_cells() {
        let table = Table::new(vec![
            Column::float("v1", [Some(1.0), None, Some(3.0)]),
            Column::str("series_name", [Some("8"), Some("16"), Some("32")]),
            Column::int("v2", [None, None, Some(7)]),
            Column::float("v3", [Some(2.0), Some(2.5), None]),
        ])
        .unwrap();

        let non_missing = table
            .columns()
            .iter()
            .filter(|c| c.name() != "series_name")
            .map(|c| (0..c.len()).filter(|&r| c.get(r).is_some()).count())
            .sum::<usize>();
        let points = to_points(&table, "series_name").unwrap();
        assert_eq!(points.len(), non_missing);
        assert!(points.iter().all(|p| [8, 16, 32].contains(&p.x)));
    }

    #[test]
    fn non_integer_label_is_a_coercion_error() {
        let table = Table::new(vec![
            Column::str("series_name", [Some("1"), Some("abc")]),
            Column::float("v1", [Some(1.0), Some(2.0)]),
        ])
        .unwrap();

        let err = match to_points(&table, "series_name") {
            Err(FrameError::TypeCoercion(err)) => err,
            other => panic!("expected a coercion error, got {other:?}"),
        };
        assert_eq!(err.column, "series_name");
        assert_eq!(err.row, 1);
        assert_eq!(err.target, NumericType::Integer);
    }

    #[test]
    fn missing_label_is_a_coercion_error() {
        let table = Table::new(vec![
            Column::int("series_name", [None]),
            Column::float("v1", [None]),
        ])
        .unwrap();
        assert!(matches!(
            to_points(&table, "series_name"),
            Err(FrameError::TypeCoercion(_))
        ));
    }

    #[test]
    fn text_value_that_is_not_a_number_is_a_coercion_error() {
        let table = Table::new(vec![
            Column::int("series_name", [Some(4)]),
            Column::str("v1", [Some("fast")]),
        ])
        .unwrap();
        let err = to_points(&table, "series_name").unwrap_err();
        assert!(
            matches!(
                &err,
                FrameError::TypeCoercion(e) if e.column == "v1" && e.target == NumericType::Float
            ),
            "unexpected error: {err:?}"
        );
    }

    #[test]
    fn absent_label_column_is_a_schema_error() {
        let table = Table::new(vec![Column::float("v1", [Some(1.0)])]).unwrap();
        assert_eq!(
            to_points(&table, "series_name"),
            Err(FrameError::Schema(SchemaError::MissingColumn {
                column: "series_name".into()
            }))
        );
    }
}

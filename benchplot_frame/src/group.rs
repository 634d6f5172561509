// Copyright 2025 the Benchplot Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Partitioning a table into named sub-tables by a discriminant column.

use hashbrown::HashMap;
use hashbrown::hash_map::Entry;

use crate::error::{FrameError, SchemaError};
use crate::table::Table;

/// Sub-tables keyed by discriminant value.
///
/// Groups are listed in order of first appearance in the source table.
#[derive(Debug, Clone, Default)]
pub struct GroupedTable {
    order: Vec<String>,
    groups: HashMap<String, Table>,
}

impl GroupedTable {
    /// Returns the sub-table for a discriminant value, if any row carried it.
    pub fn get(&self, name: &str) -> Option<&Table> {
        self.groups.get(name)
    }

    /// Returns the sub-table for a discriminant value or a [`SchemaError::MissingGroup`].
    pub fn require(&self, name: &str) -> Result<&Table, SchemaError> {
        self.get(name).ok_or_else(|| SchemaError::MissingGroup {
            name: name.to_owned(),
        })
    }

    /// Returns the discriminant values in first-appearance order.
    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.order.iter().map(String::as_str)
    }

    /// Iterates `(name, sub-table)` pairs in first-appearance order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Table)> + '_ {
        self.order
            .iter()
            .filter_map(|name| Some((name.as_str(), self.groups.get(name)?)))
    }

    /// Returns the number of groups.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Returns `true` if there are no groups.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

/// Partitions `table` by the values of `discriminant`.
///
/// Each sub-table keeps the source row and column order, minus the discriminant column and any
/// column that is entirely missing within that group. Every source row lands in exactly one
/// group; a row with an empty discriminant cell is a [`SchemaError::MissingDiscriminant`].
pub fn group(table: &Table, discriminant: &str) -> Result<GroupedTable, FrameError> {
    let (key_index, key_column) = table.require_column(discriminant)?;

    let mut order = Vec::new();
    let mut rows: HashMap<String, Vec<usize>> = HashMap::new();
    for row in 0..table.row_count() {
        let Some(key) = key_column.get(row) else {
            return Err(SchemaError::MissingDiscriminant {
                column: discriminant.to_owned(),
                row,
            }
            .into());
        };
        match rows.entry(key.to_string()) {
            Entry::Occupied(mut e) => e.get_mut().push(row),
            Entry::Vacant(e) => {
                order.push(e.key().clone());
                e.insert(vec![row]);
            }
        }
    }

    let groups = rows
        .into_iter()
        .map(|(name, indices)| {
            let sub = table
                .take_rows(&indices)
                .without_column(key_index)
                .without_empty_columns();
            (name, sub)
        })
        .collect();

    Ok(GroupedTable { order, groups })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::Column;

    fn results() -> Table {
        Table::new(vec![
            Column::str(
                "figure_name",
                [Some("file_write"), Some("preloads"), Some("file_write")],
            ),
            Column::int("series_name", [Some(64), None, Some(128)]),
            Column::float("v1", [Some(0.5), Some(1.5), Some(0.7)]),
            Column::float("v2", [None, Some(1.6), None]),
        ])
        .unwrap()
    }

    #[test]
    fn every_row_lands_in_exactly_one_group() {
        let source = results();
        let groups = group(&source, "figure_name").unwrap();
        assert_eq!(groups.names().collect::<Vec<_>>(), ["file_write", "preloads"]);

        let total: usize = groups.iter().map(|(_, t)| t.row_count()).sum();
        assert_eq!(total, source.row_count());

        let file_write = groups.get("file_write").unwrap();
        assert_eq!(
            file_write.column("v1").unwrap().get(1),
            source.column("v1").unwrap().get(2)
        );
    }

    #[test]
    fn discriminant_is_absent_from_every_group() {
        let groups = group(&results(), "figure_name").unwrap();
        for (name, table) in groups.iter() {
            assert!(
                table.column("figure_name").is_none(),
                "`{name}` still carries the discriminant"
            );
        }
    }

    #[test]
    fn empty_columns_are_dropped_per_group() {
        let groups = group(&results(), "figure_name").unwrap();
        let file_write = groups.get("file_write").unwrap();
        let preloads = groups.get("preloads").unwrap();
        assert_eq!(
            file_write.column_names().collect::<Vec<_>>(),
            ["series_name", "v1"]
        );
        assert_eq!(preloads.column_names().collect::<Vec<_>>(), ["v1", "v2"]);
    }

    #[test]
    fn missing_discriminant_column_is_a_schema_error() {
        let err = group(&results(), "chart").unwrap_err();
        assert_eq!(
            err,
            FrameError::Schema(SchemaError::MissingColumn {
                column: "chart".into()
            })
        );
    }

    #[test]
    fn empty_discriminant_cell_is_a_schema_error() {
        let table = Table::new(vec![
            Column::str("figure_name", [Some("a"), None]),
            Column::int("v1", [Some(1), Some(2)]),
        ])
        .unwrap();
        let err = group(&table, "figure_name").unwrap_err();
        assert!(
            matches!(
                err,
                FrameError::Schema(SchemaError::MissingDiscriminant { row: 1, .. })
            ),
            "unexpected error: {err:?}"
        );
    }

    #[test]
    fn input_table_is_untouched() {
        let source = results();
        let before = source.clone();
        let _groups = group(&source, "figure_name").unwrap();
        assert_eq!(source, before);
    }
}

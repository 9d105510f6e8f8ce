//! Core table structures

use crate::constants::TABLE_BOTTOM_MARGIN;
use crate::style::{CellSpec, TableStyleDefaults};
use tracing::trace;

/// One vertical section of a table: a header above an ordered list of rows
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ColumnSpec {
    pub header: CellSpec,
    pub rows: Vec<CellSpec>,
    /// Absolute points when `>= 1`, a share of the content width when in
    /// `[0, 1)`, an equal split when `None`
    pub width: Option<f32>,
}

impl ColumnSpec {
    /// Create a column with a header and no rows
    pub fn new(header: CellSpec) -> Self {
        Self {
            header,
            rows: Vec::new(),
            width: None,
        }
    }

    /// Append a row cell
    pub fn add_row(mut self, row: CellSpec) -> Self {
        trace!("Adding row to column, now {} rows", self.rows.len() + 1);
        self.rows.push(row);
        self
    }

    /// Append a plain text row for each item
    pub fn with_rows<I, S>(mut self, rows: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.rows.extend(rows.into_iter().map(CellSpec::new));
        self
    }

    pub fn with_width(mut self, width: f32) -> Self {
        self.width = Some(width);
        self
    }
}

/// Constructor options for a [`ColumnTable`]
#[derive(Debug, Clone, Default)]
pub struct TableOptions {
    /// Table-level defaults for every column header
    pub header: CellSpec,
    /// Table-level defaults for every row cell
    pub cell: CellSpec,
    /// Space to leave below the table, defaults to [`TABLE_BOTTOM_MARGIN`]
    pub bottom_margin: Option<f32>,
}

/// A table laid out column by column.
///
/// Columns are drawn left to right from the same vertical origin, each one
/// flowing down (and across pages) independently.
#[derive(Debug, Clone)]
pub struct ColumnTable {
    pub(crate) columns: Vec<ColumnSpec>,
    pub(crate) defaults: TableStyleDefaults,
    pub(crate) bottom_margin: f32,
}

impl ColumnTable {
    /// Create a table with hard style defaults
    pub fn new(columns: Vec<ColumnSpec>) -> Self {
        Self::with_options(columns, TableOptions::default())
    }

    /// Create a table whose style defaults are fixed from `options`
    pub fn with_options(columns: Vec<ColumnSpec>, options: TableOptions) -> Self {
        Self {
            columns,
            defaults: TableStyleDefaults::new(options.header, options.cell),
            bottom_margin: options.bottom_margin.unwrap_or(TABLE_BOTTOM_MARGIN),
        }
    }

    pub fn columns(&self) -> &[ColumnSpec] {
        &self.columns
    }

    pub fn defaults(&self) -> &TableStyleDefaults {
        &self.defaults
    }

    pub fn bottom_margin(&self) -> f32 {
        self.bottom_margin
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::Color;

    #[test]
    fn test_column_builder() {
        let column = ColumnSpec::new(CellSpec::new("Name"))
            .with_rows(["a", "b"])
            .add_row(CellSpec::empty())
            .with_width(0.25);

        assert_eq!(column.rows.len(), 3);
        assert_eq!(column.rows[1].text.as_deref(), Some("b"));
        assert_eq!(column.rows[2].text, None);
        assert_eq!(column.width, Some(0.25));
    }

    #[test]
    fn test_options_become_defaults() {
        let table = ColumnTable::with_options(
            vec![ColumnSpec::new(CellSpec::new("A"))],
            TableOptions {
                cell: CellSpec::default().with_color(Color::white()),
                bottom_margin: Some(4.0),
                ..Default::default()
            },
        );

        assert_eq!(table.bottom_margin(), 4.0);
        assert_eq!(table.defaults().cell().color, Some(Color::white()));
        assert_eq!(table.column_count(), 1);
    }

    #[test]
    fn test_default_bottom_margin() {
        let table = ColumnTable::new(Vec::new());
        assert_eq!(table.bottom_margin(), TABLE_BOTTOM_MARGIN);
        assert!(table.columns().is_empty());
    }
}

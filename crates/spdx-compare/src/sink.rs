//! Tabular output: rows of styled string cells.
//!
//! The report builder only talks to [`TabularSink`]. [`Grid`] keeps the table
//! in memory; the CLI prints it or writes it as CSV.

use std::collections::BTreeMap;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use thiserror::Error;

/// Errors raised by a tabular sink.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SinkError {
    /// A write addressed a row that has not been added.
    #[error("row {row} out of range for {rows} rows")]
    RowOutOfRange { row: usize, rows: usize },

    /// The sink refused the write.
    #[error("sink rejected write at row {row}, column {column}: {message}")]
    Rejected {
        row: usize,
        column: usize,
        message: String,
    },
}

impl SinkError {
    pub fn rejected(row: usize, column: usize, message: impl Into<String>) -> Self {
        Self::Rejected {
            row,
            column,
            message: message.into(),
        }
    }
}

/// Visual style of a cell.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum CellStyle {
    #[default]
    Default,
    Header,
    Equal,
    Different,
}

/// Index of a row returned by [`TabularSink::add_row`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RowHandle(usize);

impl RowHandle {
    pub fn new(index: usize) -> Self {
        Self(index)
    }

    pub fn index(self) -> usize {
        self.0
    }
}

/// Destination of a comparison report.
///
/// Writes may arrive from several threads at once; implementations serialize
/// them internally.
pub trait TabularSink: Send + Sync {
    /// Removes every row, including the header.
    fn reset(&self) -> Result<(), SinkError>;

    /// Removes every row after the header row.
    fn clear(&self) -> Result<(), SinkError>;

    /// Appends an empty row.
    fn add_row(&self) -> Result<RowHandle, SinkError>;

    fn set_value(&self, row: usize, column: usize, value: &str) -> Result<(), SinkError>;

    fn set_style(&self, row: usize, column: usize, style: CellStyle) -> Result<(), SinkError>;

    /// Text of a cell; `None` when the cell was never written.
    fn value(&self, row: usize, column: usize) -> Option<String>;

    /// Width of a column, in characters.
    fn set_column_width(&self, column: usize, width: usize) -> Result<(), SinkError>;

    fn row_count(&self) -> usize;
}

/// One addressable cell of a sink.
#[derive(Clone, Copy)]
pub struct CellHandle<'a> {
    sink: &'a dyn TabularSink,
    row: usize,
    column: usize,
}

impl<'a> CellHandle<'a> {
    pub fn new(sink: &'a dyn TabularSink, row: usize, column: usize) -> Self {
        Self { sink, row, column }
    }

    pub fn row(&self) -> usize {
        self.row
    }

    pub fn column(&self) -> usize {
        self.column
    }

    pub fn set_value(&self, value: &str) -> Result<(), SinkError> {
        self.sink.set_value(self.row, self.column, value)
    }

    pub fn set_style(&self, style: CellStyle) -> Result<(), SinkError> {
        self.sink.set_style(self.row, self.column, style)
    }

    pub fn value(&self) -> Option<String> {
        self.sink.value(self.row, self.column)
    }
}

/// A cell stored by [`Grid`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GridCell {
    pub value: String,
    pub style: CellStyle,
}

#[derive(Debug, Default)]
struct GridState {
    rows: Vec<Vec<Option<GridCell>>>,
    widths: BTreeMap<usize, usize>,
}

impl GridState {
    fn cell_mut(&mut self, row: usize, column: usize) -> Result<&mut GridCell, SinkError> {
        let rows = self.rows.len();
        let cells = self
            .rows
            .get_mut(row)
            .ok_or(SinkError::RowOutOfRange { row, rows })?;
        if cells.len() <= column {
            cells.resize(column + 1, None);
        }
        Ok(cells[column].get_or_insert_with(GridCell::default))
    }
}

/// In-memory [`TabularSink`].
#[derive(Debug, Default)]
pub struct Grid {
    state: RwLock<GridState>,
}

impl Grid {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a grid holding `rows` as unstyled text.
    pub fn from_rows<R, S>(rows: R) -> Self
    where
        R: IntoIterator,
        R::Item: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let rows = rows
            .into_iter()
            .map(|row| {
                row.into_iter()
                    .map(|value| {
                        Some(GridCell {
                            value: value.into(),
                            style: CellStyle::Default,
                        })
                    })
                    .collect()
            })
            .collect();
        Self {
            state: RwLock::new(GridState {
                rows,
                widths: BTreeMap::new(),
            }),
        }
    }

    /// Widest row, in cells.
    pub fn column_count(&self) -> usize {
        self.read().rows.iter().map(Vec::len).max().unwrap_or(0)
    }

    pub fn cell(&self, row: usize, column: usize) -> Option<GridCell> {
        self.read().rows.get(row)?.get(column)?.clone()
    }

    pub fn style(&self, row: usize, column: usize) -> Option<CellStyle> {
        self.cell(row, column).map(|cell| cell.style)
    }

    pub fn column_width(&self, column: usize) -> Option<usize> {
        self.read().widths.get(&column).copied()
    }

    /// Snapshot of every row padded to [`Grid::column_count`]; unwritten cells
    /// are empty.
    pub fn rows(&self) -> Vec<Vec<GridCell>> {
        let state = self.read();
        let columns = state.rows.iter().map(Vec::len).max().unwrap_or(0);
        state
            .rows
            .iter()
            .map(|row| {
                (0..columns)
                    .map(|column| row.get(column).cloned().flatten().unwrap_or_default())
                    .collect()
            })
            .collect()
    }

    fn read(&self) -> RwLockReadGuard<'_, GridState> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, GridState> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl TabularSink for Grid {
    fn reset(&self) -> Result<(), SinkError> {
        let mut state = self.write();
        state.rows.clear();
        state.widths.clear();
        Ok(())
    }

    fn clear(&self) -> Result<(), SinkError> {
        self.write().rows.truncate(1);
        Ok(())
    }

    fn add_row(&self) -> Result<RowHandle, SinkError> {
        let mut state = self.write();
        state.rows.push(Vec::new());
        Ok(RowHandle::new(state.rows.len() - 1))
    }

    fn set_value(&self, row: usize, column: usize, value: &str) -> Result<(), SinkError> {
        let mut state = self.write();
        let cell = state.cell_mut(row, column)?;
        cell.value.clear();
        cell.value.push_str(value);
        Ok(())
    }

    fn set_style(&self, row: usize, column: usize, style: CellStyle) -> Result<(), SinkError> {
        self.write().cell_mut(row, column)?.style = style;
        Ok(())
    }

    fn value(&self, row: usize, column: usize) -> Option<String> {
        self.cell(row, column).map(|cell| cell.value)
    }

    fn set_column_width(&self, column: usize, width: usize) -> Result<(), SinkError> {
        self.write().widths.insert(column, width);
        Ok(())
    }

    fn row_count(&self) -> usize {
        self.read().rows.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_and_reads_cells() {
        let grid = Grid::new();
        let row = grid.add_row().unwrap();
        assert_eq!(row.index(), 0);

        let cell = CellHandle::new(&grid, row.index(), 2);
        cell.set_value("Equals").unwrap();
        cell.set_style(CellStyle::Equal).unwrap();

        assert_eq!(cell.value().as_deref(), Some("Equals"));
        assert_eq!(grid.style(0, 2), Some(CellStyle::Equal));
        assert_eq!(grid.value(0, 0), None);
        assert_eq!(grid.column_count(), 3);
    }

    #[test]
    fn write_to_missing_row_fails() {
        let grid = Grid::new();
        assert_eq!(
            grid.set_value(3, 0, "x"),
            Err(SinkError::RowOutOfRange { row: 3, rows: 0 })
        );
    }

    #[test]
    fn clear_keeps_header_and_reset_drops_everything() {
        let grid = Grid::from_rows([vec!["Document", "ID"], vec!["a", "b"], vec!["c", "d"]]);
        grid.set_column_width(0, 30).unwrap();

        grid.clear().unwrap();
        assert_eq!(grid.row_count(), 1);
        assert_eq!(grid.value(0, 1).as_deref(), Some("ID"));
        assert_eq!(grid.column_width(0), Some(30));

        grid.reset().unwrap();
        assert_eq!(grid.row_count(), 0);
        assert_eq!(grid.column_width(0), None);
    }

    #[test]
    fn rows_are_padded() {
        let grid = Grid::new();
        grid.add_row().unwrap();
        grid.add_row().unwrap();
        grid.set_value(1, 1, "x").unwrap();

        let rows = grid.rows();
        assert_eq!(rows.len(), 2);
        assert!(rows.iter().all(|row| row.len() == 2));
        assert_eq!(rows[1][1].value, "x");
        assert_eq!(rows[0][0], GridCell::default());
    }
}

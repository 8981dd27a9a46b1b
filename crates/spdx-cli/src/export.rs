//! CSV import and export of a report grid.
//!
//! Every row of the grid, header included, becomes one CSV record. Styles and
//! column widths are not part of the CSV form.

use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

use anyhow::{Context, Result};
use spdx_compare::Grid;

/// Writes `grid` as CSV to `path`, replacing the file.
pub fn write_csv(grid: &Grid, path: &Path) -> Result<()> {
    let file = File::create(path).with_context(|| format!("create {}", path.display()))?;
    write_csv_to(grid, file).with_context(|| format!("write {}", path.display()))
}

pub fn write_csv_to<W: Write>(grid: &Grid, writer: W) -> Result<()> {
    let mut writer = csv::WriterBuilder::new().flexible(true).from_writer(writer);
    for row in grid.rows() {
        writer.write_record(row.iter().map(|cell| cell.value.as_str()))?;
    }
    writer.flush()?;
    Ok(())
}

/// Reads a CSV report into an unstyled grid.
pub fn read_csv(path: &Path) -> Result<Grid> {
    let file = File::open(path).with_context(|| format!("open {}", path.display()))?;
    read_csv_from(file).with_context(|| format!("read {}", path.display()))
}

pub fn read_csv_from<R: Read>(reader: R) -> Result<Grid> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);
    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        rows.push(record.iter().map(str::to_string).collect::<Vec<_>>());
    }
    Ok(Grid::from_rows(rows))
}

use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, Color, ColumnConstraint, ContentArrangement, Table, Width};

use spdx_compare::fields::{HEADER_ROW, LABEL_COLUMN};
use spdx_compare::{CellStyle, Grid, GridCell};

use crate::commands::CompareResult;

pub fn print_summary(result: &CompareResult) {
    match &result.written_to {
        Some(path) => println!("Report: {}", path.display()),
        None => println!("{}", report_table(&result.report.grid)),
    }
    println!("Documents: {}", result.labels.join(", "));
    let differing = result.report.differing_fields();
    if differing.is_empty() {
        println!("All compared fields are equal.");
    } else {
        println!("Differing fields ({}): {}", differing.len(), differing.join(", "));
    }
}

fn report_table(grid: &Grid) -> Table {
    let rows = grid.rows();
    let mut table = Table::new();
    if let Some(header) = rows.get(HEADER_ROW) {
        table.set_header(header.iter().map(|cell| header_cell(&cell.value)));
    }
    for row in rows.iter().skip(HEADER_ROW + 1) {
        table.add_row(
            row.iter()
                .enumerate()
                .map(|(column, cell)| value_cell(cell, column == LABEL_COLUMN)),
        );
    }
    apply_report_table_style(&mut table, grid);
    table
}

fn apply_report_table_style(table: &mut Table, grid: &Grid) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::DynamicFullWidth);
    let constraints: Vec<ColumnConstraint> = (0..grid.column_count())
        .map(|column| {
            let width = grid.column_width(column).unwrap_or(20);
            ColumnConstraint::UpperBoundary(Width::Fixed(u16::try_from(width).unwrap_or(u16::MAX)))
        })
        .collect();
    table.set_constraints(constraints);
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn value_cell(cell: &GridCell, is_label: bool) -> Cell {
    match cell.style {
        CellStyle::Equal => Cell::new(&cell.value)
            .fg(Color::Green)
            .add_attribute(Attribute::Bold),
        CellStyle::Different => Cell::new(&cell.value)
            .fg(Color::Yellow)
            .add_attribute(Attribute::Bold),
        CellStyle::Header => header_cell(&cell.value),
        CellStyle::Default if is_label => Cell::new(&cell.value)
            .fg(Color::Blue)
            .add_attribute(Attribute::Bold),
        CellStyle::Default => Cell::new(&cell.value),
    }
}

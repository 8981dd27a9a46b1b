//! Building a comparison report from loaded documents.

use std::sync::Arc;

use anyhow::{Context, Result};
use spdx_compare::fields::{FIRST_DOCUMENT_ROW, VERDICT_ROW};
use spdx_compare::{
    DocumentComparer, DocumentSheet, Grid, ReportOptions, TabularSink, field_registry,
};
use spdx_model::SpdxDocument;
use tracing::info_span;

/// A finished report and the options it was built with.
#[derive(Debug)]
pub struct Report {
    pub grid: Grid,
    pub options: ReportOptions,
}

impl Report {
    /// Headers of the fields whose verdict is "different".
    pub fn differing_fields(&self) -> Vec<&'static str> {
        field_registry()
            .iter()
            .filter(|descriptor| {
                self.grid.value(VERDICT_ROW, descriptor.column).as_deref()
                    == Some(self.options.markers.different.as_str())
            })
            .map(|descriptor| descriptor.header)
            .collect()
    }

    /// Number of document rows.
    pub fn document_count(&self) -> usize {
        self.grid.row_count().saturating_sub(FIRST_DOCUMENT_ROW)
    }
}

/// Compares `documents` with [`DocumentComparer`] into a fresh grid.
pub fn build_report(
    documents: Vec<Arc<SpdxDocument>>,
    labels: &[String],
    options: ReportOptions,
) -> Result<Report> {
    let span = info_span!("build_report", documents = documents.len());
    let _guard = span.enter();

    let comparer = DocumentComparer::new(documents);
    let grid = Grid::new();
    let sheet = DocumentSheet::create(&grid)
        .context("create comparison sheet")?
        .with_options(options.clone());
    sheet
        .import_compare_results(&comparer, labels)
        .context("import comparison results")?;
    Ok(Report { grid, options })
}

/// Checks the header row of a report grid.
pub fn verify_grid(grid: &Grid) -> Result<()> {
    DocumentSheet::open(grid)
        .verify()
        .context("verify comparison sheet")
}

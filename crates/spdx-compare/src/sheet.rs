//! The document comparison sheet.
//!
//! Layout: the header row, then the verdict row labelled
//! [`VERDICT_LABEL`], then one row per document in caller order. Column 0
//! holds the labels; the tracked fields follow in registry order.

use tracing::{info, info_span, warn};

use crate::cache::Memo;
use crate::error::{CompareError, Result, VerifyError};
use crate::fields::{
    HEADER_ROW, LABEL_COLUMN, VERDICT_LABEL, column_widths, header_titles,
};
use crate::importer::{ImportContext, field_importers, import_field};
use crate::options::ReportOptions;
use crate::render::ValueRenderer;
use crate::sink::{CellStyle, TabularSink};
use crate::source::ComparisonSource;

/// Report builder writing a comparison of SPDX documents into a sink.
pub struct DocumentSheet<'a> {
    sink: &'a dyn TabularSink,
    options: ReportOptions,
}

impl<'a> DocumentSheet<'a> {
    /// Wraps a sink that already holds a sheet.
    ///
    /// The sink must carry the header row written by [`DocumentSheet::create`];
    /// importing into a sink without one fails with
    /// [`VerifyError::MissingHeader`].
    pub fn open(sink: &'a dyn TabularSink) -> Self {
        Self {
            sink,
            options: ReportOptions::default(),
        }
    }

    /// Resets `sink` and writes the header row and column widths.
    pub fn create(sink: &'a dyn TabularSink) -> Result<Self> {
        sink.reset()?;
        let header = sink.add_row()?.index();
        for (column, title) in header_titles().into_iter().enumerate() {
            sink.set_value(header, column, title)?;
            sink.set_style(header, column, CellStyle::Header)?;
        }
        for (column, width) in column_widths().into_iter().enumerate() {
            sink.set_column_width(column, width)?;
        }
        Ok(Self::open(sink))
    }

    #[must_use]
    pub fn with_options(mut self, options: ReportOptions) -> Self {
        self.options = options;
        self
    }

    pub fn options(&self) -> &ReportOptions {
        &self.options
    }

    pub fn sink(&self) -> &'a dyn TabularSink {
        self.sink
    }

    /// Replaces the data rows with the comparison of the documents of
    /// `source`, labelled by `labels`.
    ///
    /// Fails before writing anything when the number of labels differs from
    /// the number of documents or the sink has no header row. Otherwise importers run in column order and
    /// the first error is returned; rows written up to that point remain.
    pub fn import_compare_results<S: AsRef<str>>(
        &self,
        source: &dyn ComparisonSource,
        labels: &[S],
    ) -> Result<()> {
        let documents = source.document_count();
        if labels.len() != documents {
            return Err(CompareError::DocumentCountMismatch {
                labels: labels.len(),
                documents,
            });
        }
        if self.sink.row_count() == 0 {
            return Err(VerifyError::MissingHeader.into());
        }

        let span = info_span!("import_compare_results", documents);
        let _enter = span.enter();

        self.sink.clear()?;
        let verdict_row = self.sink.add_row()?.index();
        self.sink.set_value(verdict_row, LABEL_COLUMN, VERDICT_LABEL)?;
        for label in labels {
            let row = self.sink.add_row()?.index();
            self.sink.set_value(row, LABEL_COLUMN, label.as_ref())?;
        }

        let renderer = ValueRenderer::new(self.options.max_cell_chars);
        let cells = Memo::new();
        let context = ImportContext {
            sink: self.sink,
            source,
            renderer: &renderer,
            cells: &cells,
            options: &self.options,
            verdict_row,
        };
        for importer in field_importers() {
            if let Err(error) = import_field(importer.as_ref(), &context) {
                warn!(field = importer.field().header(), %error, "field import failed");
                return Err(error);
            }
        }

        info!(
            fields = field_importers().len(),
            cells = cells.len(),
            cached_values = renderer.cached_values(),
            "comparison report complete"
        );
        Ok(())
    }

    /// Checks that the header row carries the expected column titles.
    pub fn verify(&self) -> std::result::Result<(), VerifyError> {
        if self.sink.row_count() == 0 {
            return Err(VerifyError::MissingHeader);
        }
        for (column, title) in header_titles().into_iter().enumerate() {
            if self.sink.value(HEADER_ROW, column).as_deref() != Some(title) {
                return Err(VerifyError::ColumnMismatch { column: title });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sink::Grid;

    #[test]
    fn create_writes_styled_header() {
        let grid = Grid::new();
        let sheet = DocumentSheet::create(&grid).unwrap();
        assert_eq!(grid.row_count(), 1);
        assert_eq!(grid.value(0, 0).as_deref(), Some("Document"));
        assert_eq!(grid.style(0, 12), Some(CellStyle::Header));
        assert_eq!(grid.column_width(6), Some(40));
        assert_eq!(sheet.verify(), Ok(()));
    }

    #[test]
    fn verify_reports_first_wrong_column() {
        let grid = Grid::new();
        DocumentSheet::create(&grid).unwrap();
        grid.set_value(0, 3, "License").unwrap();
        grid.set_value(0, 5, "Namespace").unwrap();
        assert_eq!(
            DocumentSheet::open(&grid).verify(),
            Err(VerifyError::ColumnMismatch {
                column: "Data License"
            })
        );
    }

    #[test]
    fn import_into_sink_without_header_fails() {
        let grid = Grid::new();
        let comparer = crate::DocumentComparer::new(Vec::new());
        let labels: [&str; 0] = [];
        let err = DocumentSheet::open(&grid)
            .import_compare_results(&comparer, &labels)
            .unwrap_err();
        assert!(matches!(
            err,
            CompareError::Layout(VerifyError::MissingHeader)
        ));
        assert_eq!(grid.row_count(), 0);
    }

    #[test]
    fn verify_empty_sink() {
        let grid = Grid::new();
        assert_eq!(
            DocumentSheet::open(&grid).verify(),
            Err(VerifyError::MissingHeader)
        );
    }
}

//! Field-by-field comparison of SPDX documents rendered into a table.
//!
//! [`DocumentSheet`] drives the build: it asks a [`ComparisonSource`] for
//! verdicts, renders each document's values through a [`ValueRenderer`] and
//! writes them into a [`TabularSink`].
//!
//! ```ignore
//! use spdx_compare::{DocumentComparer, DocumentSheet, Grid};
//!
//! let grid = Grid::new();
//! let sheet = DocumentSheet::create(&grid)?;
//! sheet.import_compare_results(&DocumentComparer::new(documents), &["a", "b"])?;
//! ```

pub mod cache;
pub mod error;
pub mod fields;
pub mod format;
pub mod importer;
pub mod options;
pub mod render;
pub mod sheet;
pub mod sink;
pub mod source;

pub use cache::{ByAddress, Memo};
pub use error::{CompareError, Result, VerifyError};
pub use fields::{DocumentField, FieldDescriptor, RenderKind, field_registry, header_titles};
pub use importer::{FieldImporter, FunctionImporter, Verdict, field_importers};
pub use options::{MAX_CHARACTERS_PER_CELL, ReportOptions, VerdictMarkers};
pub use render::ValueRenderer;
pub use sheet::DocumentSheet;
pub use sink::{CellHandle, CellStyle, Grid, GridCell, RowHandle, SinkError, TabularSink};
pub use source::{ComparisonSource, DocumentComparer};

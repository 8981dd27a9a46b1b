//! Field importers: one strategy per tracked field.
//!
//! An importer writes the field's verdict into the verdict row and then the
//! rendered value of every document into that document's row. Documents are
//! independent, so their cells are rendered on the rayon pool.
//!
//! # Architecture
//!
//! The [`FieldImporter`] trait is the seam between the report builder and the
//! per-field logic. The default importers are [`FunctionImporter`]s pairing a
//! verdict function on the [`ComparisonSource`] with a render function on one
//! document, collected once in [`field_importers`].

use std::sync::OnceLock;

use rayon::prelude::*;
use spdx_model::{CreationInfo, SpdxDocument};
use tracing::{debug, debug_span};

use crate::cache::Memo;
use crate::error::{CompareError, Result};
use crate::fields::DocumentField;
use crate::format::{annotations_to_string, elements_to_string, relationships_to_string};
use crate::options::{ReportOptions, VerdictMarkers};
use crate::render::{ValueRenderer, license_info_to_string};
use crate::sink::{CellHandle, CellStyle, TabularSink};
use crate::source::ComparisonSource;

/// Cross-document outcome for one field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Verdict {
    Equal,
    Different,
    NotApplicable,
}

impl Verdict {
    pub fn from_equal(equal: bool) -> Self {
        if equal {
            Verdict::Equal
        } else {
            Verdict::Different
        }
    }

    pub fn marker(self, markers: &VerdictMarkers) -> &str {
        match self {
            Verdict::Equal => &markers.equal,
            Verdict::Different => &markers.different,
            Verdict::NotApplicable => &markers.not_applicable,
        }
    }

    /// `None` leaves the cell unstyled.
    pub fn style(self) -> Option<CellStyle> {
        match self {
            Verdict::Equal => Some(CellStyle::Equal),
            Verdict::Different => Some(CellStyle::Different),
            Verdict::NotApplicable => None,
        }
    }
}

/// Strategy for importing one field into the sheet.
pub trait FieldImporter: Send + Sync {
    fn field(&self) -> DocumentField;

    /// Verdict for the field across every document of `source`.
    fn verdict(&self, source: &dyn ComparisonSource) -> Result<Verdict>;

    /// Canonical string of the field for one document.
    fn render(
        &self,
        document: &SpdxDocument,
        renderer: &ValueRenderer,
    ) -> spdx_model::Result<String>;
}

pub type VerdictFn = fn(&dyn ComparisonSource) -> Result<bool>;
pub type RenderFn = fn(&SpdxDocument, &ValueRenderer) -> spdx_model::Result<String>;

/// Adapts a verdict function and a render function to [`FieldImporter`].
///
/// Fields without cross-document equality have no verdict function.
pub struct FunctionImporter {
    field: DocumentField,
    verdict_fn: Option<VerdictFn>,
    render_fn: RenderFn,
}

impl FunctionImporter {
    pub fn new(field: DocumentField, verdict_fn: VerdictFn, render_fn: RenderFn) -> Self {
        Self {
            field,
            verdict_fn: Some(verdict_fn),
            render_fn,
        }
    }

    pub fn not_applicable(field: DocumentField, render_fn: RenderFn) -> Self {
        Self {
            field,
            verdict_fn: None,
            render_fn,
        }
    }
}

impl FieldImporter for FunctionImporter {
    fn field(&self) -> DocumentField {
        self.field
    }

    fn verdict(&self, source: &dyn ComparisonSource) -> Result<Verdict> {
        match self.verdict_fn {
            Some(verdict_fn) => verdict_fn(source).map(Verdict::from_equal),
            None => Ok(Verdict::NotApplicable),
        }
    }

    fn render(
        &self,
        document: &SpdxDocument,
        renderer: &ValueRenderer,
    ) -> spdx_model::Result<String> {
        (self.render_fn)(document, renderer)
    }
}

static FIELD_IMPORTERS: OnceLock<Vec<Box<dyn FieldImporter>>> = OnceLock::new();

/// Importers for every tracked field, in column order.
pub fn field_importers() -> &'static [Box<dyn FieldImporter>] {
    FIELD_IMPORTERS.get_or_init(build_field_importers)
}

fn build_field_importers() -> Vec<Box<dyn FieldImporter>> {
    use DocumentField as F;

    vec![
        Box::new(FunctionImporter::not_applicable(F::Name, render_name)),
        Box::new(FunctionImporter::new(
            F::SpecVersion,
            |s| s.spec_versions_equal(),
            render_spec_version,
        )),
        Box::new(FunctionImporter::new(
            F::DataLicense,
            |s| s.data_licenses_equal(),
            render_data_license,
        )),
        Box::new(FunctionImporter::not_applicable(F::Id, render_id)),
        Box::new(FunctionImporter::not_applicable(F::Namespace, render_namespace)),
        Box::new(FunctionImporter::new(
            F::Describes,
            |s| s.described_contents_equal(),
            render_describes,
        )),
        Box::new(FunctionImporter::new(
            F::Comment,
            |s| s.document_comments_equal(),
            render_comment,
        )),
        Box::new(FunctionImporter::new(
            F::CreationDate,
            |s| s.creation_dates_equal(),
            render_creation_date,
        )),
        Box::new(FunctionImporter::new(
            F::CreatorComment,
            |s| s.creator_comments_equal(),
            render_creator_comment,
        )),
        Box::new(FunctionImporter::new(
            F::LicenseListVersion,
            |s| s.license_list_versions_equal(),
            render_license_list_version,
        )),
        Box::new(FunctionImporter::new(
            F::Annotations,
            |s| s.annotations_equal(),
            render_annotations,
        )),
        Box::new(FunctionImporter::new(
            F::Relationships,
            |s| s.relationships_equal(),
            render_relationships,
        )),
    ]
}

fn render_name(document: &SpdxDocument, _: &ValueRenderer) -> spdx_model::Result<String> {
    Ok(document.name().unwrap_or_default().to_string())
}

fn render_spec_version(document: &SpdxDocument, _: &ValueRenderer) -> spdx_model::Result<String> {
    document.spec_version().map(str::to_string)
}

fn render_data_license(document: &SpdxDocument, _: &ValueRenderer) -> spdx_model::Result<String> {
    document.data_license().map(license_info_to_string)
}

fn render_id(document: &SpdxDocument, _: &ValueRenderer) -> spdx_model::Result<String> {
    document.id().map(str::to_string)
}

fn render_namespace(document: &SpdxDocument, _: &ValueRenderer) -> spdx_model::Result<String> {
    document.namespace().map(str::to_string)
}

fn render_describes(document: &SpdxDocument, _: &ValueRenderer) -> spdx_model::Result<String> {
    Ok(elements_to_string(document.describes()))
}

fn render_comment(document: &SpdxDocument, _: &ValueRenderer) -> spdx_model::Result<String> {
    Ok(document.comment().unwrap_or_default().to_string())
}

fn render_creation_date(document: &SpdxDocument, _: &ValueRenderer) -> spdx_model::Result<String> {
    match document.creation_info() {
        Some(info) => info.created().map(str::to_string),
        None => Ok(String::new()),
    }
}

fn render_creator_comment(
    document: &SpdxDocument,
    _: &ValueRenderer,
) -> spdx_model::Result<String> {
    Ok(document
        .creation_info()
        .and_then(CreationInfo::comment)
        .unwrap_or_default()
        .to_string())
}

fn render_license_list_version(
    document: &SpdxDocument,
    _: &ValueRenderer,
) -> spdx_model::Result<String> {
    Ok(document
        .creation_info()
        .and_then(CreationInfo::license_list_version)
        .unwrap_or_default()
        .to_string())
}

fn render_annotations(
    document: &SpdxDocument,
    renderer: &ValueRenderer,
) -> spdx_model::Result<String> {
    annotations_to_string(renderer, document.annotations())
}

fn render_relationships(
    document: &SpdxDocument,
    renderer: &ValueRenderer,
) -> spdx_model::Result<String> {
    relationships_to_string(renderer, document.relationships())
}

/// Shared state of one report build.
pub struct ImportContext<'a> {
    pub sink: &'a dyn TabularSink,
    pub source: &'a dyn ComparisonSource,
    pub renderer: &'a ValueRenderer,
    pub cells: &'a Memo<(usize, DocumentField)>,
    pub options: &'a ReportOptions,
    /// Row of the verdicts; document `i` is written to `verdict_row + 1 + i`.
    pub verdict_row: usize,
}

/// Writes the verdict and every document's value of one field.
///
/// Stops at the first failing document. Cells already written for other
/// documents stay in the sink.
pub fn import_field(importer: &dyn FieldImporter, context: &ImportContext<'_>) -> Result<()> {
    let field = importer.field();
    let span = debug_span!("import_field", field = field.header());
    let _enter = span.enter();

    let verdict = importer
        .verdict(context.source)
        .map_err(|source| CompareError::verdict(field.header(), source))?;
    let cell = CellHandle::new(context.sink, context.verdict_row, field.column());
    cell.set_value(verdict.marker(&context.options.markers))?;
    if let Some(style) = verdict.style() {
        cell.set_style(style)?;
    }
    debug!(?verdict, "verdict written");

    let count = context.source.document_count();
    if context.options.parallel {
        (0..count)
            .into_par_iter()
            .try_for_each(|index| import_document(importer, context, index))
    } else {
        (0..count).try_for_each(|index| import_document(importer, context, index))
    }
}

fn import_document(
    importer: &dyn FieldImporter,
    context: &ImportContext<'_>,
    index: usize,
) -> Result<()> {
    let field = importer.field();
    let document = context.source.document(index)?;
    let value = context
        .cells
        .get_or_try_insert_with((index, field), || {
            importer.render(&document, context.renderer)
        })
        .map_err(|source| CompareError::analysis(field.header(), index, source))?;
    let row = context.verdict_row + 1 + index;
    context.sink.set_value(row, field.column(), &value)?;
    debug!(document = index, bytes = value.len(), "cell written");
    Ok(())
}

//! Column layout of the document comparison sheet.
//!
//! Field order is the column order. Column 0 holds the document labels; the
//! tracked fields follow from column 1 in declaration order.

use std::sync::OnceLock;

/// Row holding the column titles.
pub const HEADER_ROW: usize = 0;
/// Row holding the cross-document verdicts.
pub const VERDICT_ROW: usize = 1;
/// First row holding per-document values.
pub const FIRST_DOCUMENT_ROW: usize = 2;

pub const LABEL_COLUMN: usize = 0;
pub const LABEL_HEADER: &str = "Document";
pub const LABEL_WIDTH: usize = 30;
/// Label of the verdict row.
pub const VERDICT_LABEL: &str = "Compare Results";

/// How a field's verdict is obtained.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RenderKind {
    /// Single value compared across documents.
    ScalarEqual,
    /// Single value without cross-document equality; the verdict is N/A.
    ScalarPassthrough,
    /// Multi-valued field compared as an unordered collection.
    Collection,
}

/// A tracked document field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum DocumentField {
    Name,
    SpecVersion,
    DataLicense,
    Id,
    Namespace,
    Describes,
    Comment,
    CreationDate,
    CreatorComment,
    LicenseListVersion,
    Annotations,
    Relationships,
}

impl DocumentField {
    pub const ALL: [DocumentField; 12] = [
        DocumentField::Name,
        DocumentField::SpecVersion,
        DocumentField::DataLicense,
        DocumentField::Id,
        DocumentField::Namespace,
        DocumentField::Describes,
        DocumentField::Comment,
        DocumentField::CreationDate,
        DocumentField::CreatorComment,
        DocumentField::LicenseListVersion,
        DocumentField::Annotations,
        DocumentField::Relationships,
    ];

    pub fn header(self) -> &'static str {
        match self {
            DocumentField::Name => "Document Name",
            DocumentField::SpecVersion => "SPDX Version",
            DocumentField::DataLicense => "Data License",
            DocumentField::Id => "ID",
            DocumentField::Namespace => "Document Namespace",
            DocumentField::Describes => "Document Describes",
            DocumentField::Comment => "Document Comment",
            DocumentField::CreationDate => "Creation Date",
            DocumentField::CreatorComment => "Creator Comment",
            DocumentField::LicenseListVersion => "Lic. List. Ver.",
            DocumentField::Annotations => "Annotations",
            DocumentField::Relationships => "Relationships",
        }
    }

    /// Whether the SPDX model requires the field in every document.
    pub fn required(self) -> bool {
        !matches!(
            self,
            DocumentField::Comment
                | DocumentField::CreatorComment
                | DocumentField::LicenseListVersion
                | DocumentField::Annotations
                | DocumentField::Relationships
        )
    }

    pub fn width(self) -> usize {
        match self {
            DocumentField::Name => 30,
            DocumentField::SpecVersion | DocumentField::DataLicense | DocumentField::Id => 15,
            DocumentField::Namespace => 60,
            DocumentField::Describes => 40,
            DocumentField::Comment => 60,
            DocumentField::CreationDate => 22,
            DocumentField::CreatorComment => 60,
            DocumentField::LicenseListVersion => 22,
            DocumentField::Annotations | DocumentField::Relationships => 80,
        }
    }

    pub fn kind(self) -> RenderKind {
        match self {
            DocumentField::Name | DocumentField::Id | DocumentField::Namespace => {
                RenderKind::ScalarPassthrough
            }
            DocumentField::Describes
            | DocumentField::Annotations
            | DocumentField::Relationships => RenderKind::Collection,
            _ => RenderKind::ScalarEqual,
        }
    }

    /// Column of the field in the sheet.
    pub fn column(self) -> usize {
        descriptor(self).column
    }
}

impl std::fmt::Display for DocumentField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.header())
    }
}

/// Static description of one sheet column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldDescriptor {
    pub field: DocumentField,
    pub column: usize,
    pub header: &'static str,
    pub required: bool,
    pub width: usize,
    pub kind: RenderKind,
}

static FIELD_REGISTRY: OnceLock<Vec<FieldDescriptor>> = OnceLock::new();

/// Descriptors of every tracked field, in column order.
pub fn field_registry() -> &'static [FieldDescriptor] {
    FIELD_REGISTRY.get_or_init(build_field_registry)
}

fn build_field_registry() -> Vec<FieldDescriptor> {
    DocumentField::ALL
        .iter()
        .enumerate()
        .map(|(index, &field)| FieldDescriptor {
            field,
            column: LABEL_COLUMN + 1 + index,
            header: field.header(),
            required: field.required(),
            width: field.width(),
            kind: field.kind(),
        })
        .collect()
}

fn descriptor(field: DocumentField) -> &'static FieldDescriptor {
    // ALL lists the variants in declaration order
    &field_registry()[field as usize]
}

/// Column titles, label column first.
pub fn header_titles() -> Vec<&'static str> {
    std::iter::once(LABEL_HEADER)
        .chain(field_registry().iter().map(|d| d.header))
        .collect()
}

/// Column widths, label column first.
pub fn column_widths() -> Vec<usize> {
    std::iter::once(LABEL_WIDTH)
        .chain(field_registry().iter().map(|d| d.width))
        .collect()
}

/// Required flags, label column first.
pub fn required_columns() -> Vec<bool> {
    std::iter::once(true)
        .chain(field_registry().iter().map(|d| d.required))
        .collect()
}

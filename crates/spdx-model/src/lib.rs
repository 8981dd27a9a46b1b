//! SPDX 2.x document model for the comparison report.
//!
//! Only the parts of the model that the document-level comparison reads are
//! represented here.

pub mod document;
pub mod element;
pub mod enums;
pub mod equivalence;
pub mod error;
pub mod license;
pub mod reference_type;

pub use document::{CreationInfo, SpdxDocument};
pub use element::{Annotation, Checksum, ExternalRef, Relationship, SpdxElement};
pub use enums::{AnnotationType, ChecksumAlgorithm, FileType, ReferenceCategory, RelationshipType};
pub use equivalence::{Equivalent, equivalent_collections, equivalent_optional, equivalent_text};
pub use error::{ModelError, Result};
pub use license::AnyLicenseInfo;
pub use reference_type::{
    LISTED_REFERENCE_NAMESPACE, ReferenceTypeRegistry, listed_reference_types,
};

//! Type-safe enumerations for SPDX 2.x vocabulary.
//!
//! Every enum renders with the upper-case SPDX tag-value name, which is also
//! the serialized form used by SPDX JSON documents.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of an annotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AnnotationType {
    Review,
    Other,
}

impl AnnotationType {
    pub fn as_str(&self) -> &'static str {
        match self {
            AnnotationType::Review => "REVIEW",
            AnnotationType::Other => "OTHER",
        }
    }
}

/// Checksum algorithms defined by SPDX 2.3.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChecksumAlgorithm {
    #[serde(rename = "SHA1")]
    Sha1,
    #[serde(rename = "SHA224")]
    Sha224,
    #[serde(rename = "SHA256")]
    Sha256,
    #[serde(rename = "SHA384")]
    Sha384,
    #[serde(rename = "SHA512")]
    Sha512,
    #[serde(rename = "SHA3-256")]
    Sha3_256,
    #[serde(rename = "SHA3-384")]
    Sha3_384,
    #[serde(rename = "SHA3-512")]
    Sha3_512,
    #[serde(rename = "MD2")]
    Md2,
    #[serde(rename = "MD4")]
    Md4,
    #[serde(rename = "MD5")]
    Md5,
    #[serde(rename = "MD6")]
    Md6,
    #[serde(rename = "BLAKE2b-256")]
    Blake2b256,
    #[serde(rename = "BLAKE2b-384")]
    Blake2b384,
    #[serde(rename = "BLAKE2b-512")]
    Blake2b512,
    #[serde(rename = "BLAKE3")]
    Blake3,
    #[serde(rename = "ADLER32")]
    Adler32,
}

impl ChecksumAlgorithm {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChecksumAlgorithm::Sha1 => "SHA1",
            ChecksumAlgorithm::Sha224 => "SHA224",
            ChecksumAlgorithm::Sha256 => "SHA256",
            ChecksumAlgorithm::Sha384 => "SHA384",
            ChecksumAlgorithm::Sha512 => "SHA512",
            ChecksumAlgorithm::Sha3_256 => "SHA3-256",
            ChecksumAlgorithm::Sha3_384 => "SHA3-384",
            ChecksumAlgorithm::Sha3_512 => "SHA3-512",
            ChecksumAlgorithm::Md2 => "MD2",
            ChecksumAlgorithm::Md4 => "MD4",
            ChecksumAlgorithm::Md5 => "MD5",
            ChecksumAlgorithm::Md6 => "MD6",
            ChecksumAlgorithm::Blake2b256 => "BLAKE2b-256",
            ChecksumAlgorithm::Blake2b384 => "BLAKE2b-384",
            ChecksumAlgorithm::Blake2b512 => "BLAKE2b-512",
            ChecksumAlgorithm::Blake3 => "BLAKE3",
            ChecksumAlgorithm::Adler32 => "ADLER32",
        }
    }
}

/// Relationship types between SPDX elements, as listed by SPDX 2.3.
///
/// Tags outside the list are rejected when parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RelationshipType {
    Describes,
    DescribedBy,
    Contains,
    ContainedBy,
    DependsOn,
    DependencyOf,
    DependencyManifestOf,
    BuildDependencyOf,
    DevDependencyOf,
    OptionalDependencyOf,
    ProvidedDependencyOf,
    TestDependencyOf,
    RuntimeDependencyOf,
    ExampleOf,
    Generates,
    GeneratedFrom,
    AncestorOf,
    DescendantOf,
    VariantOf,
    DistributionArtifact,
    PatchFor,
    PatchApplied,
    CopyOf,
    FileAdded,
    FileDeleted,
    FileModified,
    ExpandedFromArchive,
    DynamicLink,
    StaticLink,
    DataFileOf,
    TestCaseOf,
    BuildToolOf,
    DevToolOf,
    TestOf,
    TestToolOf,
    DocumentationOf,
    OptionalComponentOf,
    MetafileOf,
    PackageOf,
    Amends,
    PrerequisiteFor,
    HasPrerequisite,
    RequirementDescriptionFor,
    SpecificationFor,
    Other,
}

impl RelationshipType {
    pub fn as_str(&self) -> &'static str {
        match self {
            RelationshipType::Describes => "DESCRIBES",
            RelationshipType::DescribedBy => "DESCRIBED_BY",
            RelationshipType::Contains => "CONTAINS",
            RelationshipType::ContainedBy => "CONTAINED_BY",
            RelationshipType::DependsOn => "DEPENDS_ON",
            RelationshipType::DependencyOf => "DEPENDENCY_OF",
            RelationshipType::DependencyManifestOf => "DEPENDENCY_MANIFEST_OF",
            RelationshipType::BuildDependencyOf => "BUILD_DEPENDENCY_OF",
            RelationshipType::DevDependencyOf => "DEV_DEPENDENCY_OF",
            RelationshipType::OptionalDependencyOf => "OPTIONAL_DEPENDENCY_OF",
            RelationshipType::ProvidedDependencyOf => "PROVIDED_DEPENDENCY_OF",
            RelationshipType::TestDependencyOf => "TEST_DEPENDENCY_OF",
            RelationshipType::RuntimeDependencyOf => "RUNTIME_DEPENDENCY_OF",
            RelationshipType::ExampleOf => "EXAMPLE_OF",
            RelationshipType::Generates => "GENERATES",
            RelationshipType::GeneratedFrom => "GENERATED_FROM",
            RelationshipType::AncestorOf => "ANCESTOR_OF",
            RelationshipType::DescendantOf => "DESCENDANT_OF",
            RelationshipType::VariantOf => "VARIANT_OF",
            RelationshipType::DistributionArtifact => "DISTRIBUTION_ARTIFACT",
            RelationshipType::PatchFor => "PATCH_FOR",
            RelationshipType::PatchApplied => "PATCH_APPLIED",
            RelationshipType::CopyOf => "COPY_OF",
            RelationshipType::FileAdded => "FILE_ADDED",
            RelationshipType::FileDeleted => "FILE_DELETED",
            RelationshipType::FileModified => "FILE_MODIFIED",
            RelationshipType::ExpandedFromArchive => "EXPANDED_FROM_ARCHIVE",
            RelationshipType::DynamicLink => "DYNAMIC_LINK",
            RelationshipType::StaticLink => "STATIC_LINK",
            RelationshipType::DataFileOf => "DATA_FILE_OF",
            RelationshipType::TestCaseOf => "TEST_CASE_OF",
            RelationshipType::BuildToolOf => "BUILD_TOOL_OF",
            RelationshipType::DevToolOf => "DEV_TOOL_OF",
            RelationshipType::TestOf => "TEST_OF",
            RelationshipType::TestToolOf => "TEST_TOOL_OF",
            RelationshipType::DocumentationOf => "DOCUMENTATION_OF",
            RelationshipType::OptionalComponentOf => "OPTIONAL_COMPONENT_OF",
            RelationshipType::MetafileOf => "METAFILE_OF",
            RelationshipType::PackageOf => "PACKAGE_OF",
            RelationshipType::Amends => "AMENDS",
            RelationshipType::PrerequisiteFor => "PREREQUISITE_FOR",
            RelationshipType::HasPrerequisite => "HAS_PREREQUISITE",
            RelationshipType::RequirementDescriptionFor => "REQUIREMENT_DESCRIPTION_FOR",
            RelationshipType::SpecificationFor => "SPECIFICATION_FOR",
            RelationshipType::Other => "OTHER",
        }
    }
}

/// Category of an external reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ReferenceCategory {
    #[serde(rename = "SECURITY")]
    Security,
    #[serde(rename = "PACKAGE_MANAGER", alias = "PACKAGE-MANAGER")]
    PackageManager,
    #[serde(rename = "PERSISTENT_ID", alias = "PERSISTENT-ID")]
    PersistentId,
    #[serde(rename = "OTHER")]
    Other,
}

impl ReferenceCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReferenceCategory::Security => "SECURITY",
            ReferenceCategory::PackageManager => "PACKAGE_MANAGER",
            ReferenceCategory::PersistentId => "PERSISTENT_ID",
            ReferenceCategory::Other => "OTHER",
        }
    }
}

/// File type classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FileType {
    Source,
    Binary,
    Archive,
    Application,
    Audio,
    Image,
    Text,
    Video,
    Documentation,
    Spdx,
    Other,
}

impl FileType {
    pub fn as_str(&self) -> &'static str {
        match self {
            FileType::Source => "SOURCE",
            FileType::Binary => "BINARY",
            FileType::Archive => "ARCHIVE",
            FileType::Application => "APPLICATION",
            FileType::Audio => "AUDIO",
            FileType::Image => "IMAGE",
            FileType::Text => "TEXT",
            FileType::Video => "VIDEO",
            FileType::Documentation => "DOCUMENTATION",
            FileType::Spdx => "SPDX",
            FileType::Other => "OTHER",
        }
    }
}

macro_rules! display_as_str {
    ($($ty:ty),* $(,)?) => {
        $(
            impl fmt::Display for $ty {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str(self.as_str())
                }
            }
        )*
    };
}

display_as_str!(
    AnnotationType,
    ChecksumAlgorithm,
    RelationshipType,
    ReferenceCategory,
    FileType,
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_matches_tag_value_names() {
        assert_eq!(AnnotationType::Review.to_string(), "REVIEW");
        assert_eq!(ChecksumAlgorithm::Sha3_256.to_string(), "SHA3-256");
        assert_eq!(RelationshipType::DependsOn.to_string(), "DEPENDS_ON");
        assert_eq!(ReferenceCategory::PackageManager.to_string(), "PACKAGE_MANAGER");
        assert_eq!(FileType::Documentation.to_string(), "DOCUMENTATION");
    }

    #[test]
    fn serialized_names_match_display() {
        let json = serde_json::to_string(&ChecksumAlgorithm::Blake2b256).unwrap();
        assert_eq!(json, "\"BLAKE2b-256\"");
        let json = serde_json::to_string(&RelationshipType::DescribedBy).unwrap();
        assert_eq!(json, "\"DESCRIBED_BY\"");
    }

    #[test]
    fn every_relationship_type_keeps_its_tag() {
        for tag in ["RUNTIME_DEPENDENCY_OF", "TEST_TOOL_OF", "SPECIFICATION_FOR", "FILE_MODIFIED"] {
            let parsed: RelationshipType = serde_json::from_str(&format!("\"{tag}\"")).unwrap();
            assert_eq!(parsed.as_str(), tag);
        }
        assert_ne!(
            serde_json::from_str::<RelationshipType>("\"RUNTIME_DEPENDENCY_OF\"").unwrap(),
            serde_json::from_str::<RelationshipType>("\"TEST_DEPENDENCY_OF\"").unwrap()
        );
    }

    #[test]
    fn unlisted_relationship_type_is_rejected() {
        let err = serde_json::from_str::<RelationshipType>("\"CONSUMES\"").unwrap_err();
        assert!(err.to_string().contains("CONSUMES"));
    }

    #[test]
    fn legacy_category_spelling_is_accepted() {
        let parsed: ReferenceCategory = serde_json::from_str("\"PACKAGE-MANAGER\"").unwrap();
        assert_eq!(parsed, ReferenceCategory::PackageManager);
    }
}

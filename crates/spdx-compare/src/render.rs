//! Canonical string forms of single SPDX values.
//!
//! The free functions are pure. [`ValueRenderer`] wraps the ones whose inputs
//! are shared between documents with identity-keyed caches.
//!
//! The sentinel strings below are part of the output contract: consumers of
//! the report match on them.

use std::sync::Arc;

use spdx_model::{
    Annotation, AnyLicenseInfo, Checksum, ExternalRef, FileType, ReferenceTypeRegistry,
    Relationship, Result, SpdxElement, listed_reference_types,
};

use crate::cache::{ByAddress, Memo};

/// Verdict text for fields without cross-document equality.
pub const NOT_APPLICABLE: &str = "N/A";
/// An absent optional single value.
pub const NONE: &str = "[NONE]";
/// An absent external reference type or locator.
pub const MISSING: &str = "[MISSING]";
/// An element reference without an id.
pub const UNKNOWN_ID: &str = "[UNKNOWNID]";
/// A relationship without a related element.
pub const NULL_ELEMENT: &str = "?NULL";
/// Category of an external reference that has none.
pub const OTHER_CATEGORY: &str = "OTHER";
/// A relationship without a type.
pub const UNKNOWN_RELATIONSHIP_TYPE: &str = "Unknown relationship type";

/// `"<date> <annotator>: <comment>[<type>]"`
pub fn annotation_to_string(annotation: &Annotation) -> Result<String> {
    Ok(format!(
        "{} {}: {}[{}]",
        annotation.date()?,
        annotation.annotator()?,
        annotation.comment(),
        annotation.annotation_type()?
    ))
}

/// `"<algorithm> <value>"`
pub fn checksum_to_string(checksum: &Checksum) -> Result<String> {
    Ok(format!("{} {}", checksum.algorithm()?, checksum.value()?))
}

/// `"<type>:[<name>]<id>(<comment>)"`
pub fn relationship_to_string(relationship: &Relationship) -> Result<String> {
    let Some(relationship_type) = relationship.relationship_type() else {
        return Ok(UNKNOWN_RELATIONSHIP_TYPE.to_string());
    };
    let mut out = format!("{relationship_type}:");
    match relationship.related_element() {
        None => out.push_str(NULL_ELEMENT),
        Some(related) => {
            if let Some(name) = related.name() {
                out.push('[');
                out.push_str(name);
                out.push(']');
            }
            let id = related
                .id()
                .ok_or(spdx_model::ModelError::missing("SpdxElement", "SPDXID"))?;
            out.push_str(id);
        }
    }
    push_comment(&mut out, relationship.comment());
    Ok(out)
}

/// `"<id>(<name>)"`, or [`UNKNOWN_ID`] when the element has no id.
pub fn element_to_string(element: Option<&SpdxElement>) -> String {
    let Some(id) = element.and_then(SpdxElement::id) else {
        return UNKNOWN_ID.to_string();
    };
    match element.and_then(SpdxElement::name) {
        Some(name) => format!("{id}({name})"),
        None => id.to_string(),
    }
}

/// `"<category> <type> <locator>(<comment>)"`
///
/// The type is the listed name when `registry` knows the URI. Any lookup
/// failure falls back to the raw URI with `namespace` stripped from its front.
pub fn external_ref_to_string(
    external_ref: &ExternalRef,
    namespace: Option<&str>,
    registry: &ReferenceTypeRegistry,
) -> String {
    let category = external_ref
        .reference_category
        .map_or(OTHER_CATEGORY, |category| category.as_str());
    let reference_type = match external_ref.reference_type.as_deref() {
        None => MISSING,
        Some(uri) => match registry.lookup(uri) {
            Ok(Some(name)) => name,
            Ok(None) | Err(_) => strip_namespace(uri, namespace),
        },
    };
    let locator = external_ref.reference_locator.as_deref().unwrap_or(MISSING);
    let mut out = format!("{category} {reference_type} {locator}");
    push_comment(&mut out, external_ref.comment.as_deref());
    out
}

pub fn license_info_to_string(license: &AnyLicenseInfo) -> String {
    license.to_string()
}

pub fn file_type_to_string(file_type: FileType) -> &'static str {
    file_type.as_str()
}

fn strip_namespace<'a>(uri: &'a str, namespace: Option<&str>) -> &'a str {
    match namespace {
        Some(ns) if !ns.is_empty() => uri.strip_prefix(ns).unwrap_or(uri),
        _ => uri,
    }
}

fn push_comment(out: &mut String, comment: Option<&str>) {
    if let Some(comment) = comment.filter(|c| !c.is_empty()) {
        out.push('(');
        out.push_str(comment);
        out.push(')');
    }
}

/// Renders shared values at most once per object for the lifetime of one
/// report build.
#[derive(Debug)]
pub struct ValueRenderer {
    annotations: Memo<ByAddress<Annotation>>,
    checksums: Memo<ByAddress<Checksum>>,
    relationships: Memo<ByAddress<Relationship>>,
    registry: &'static ReferenceTypeRegistry,
    max_cell_chars: usize,
}

impl ValueRenderer {
    pub fn new(max_cell_chars: usize) -> Self {
        Self::with_registry(max_cell_chars, listed_reference_types())
    }

    pub fn with_registry(max_cell_chars: usize, registry: &'static ReferenceTypeRegistry) -> Self {
        Self {
            annotations: Memo::new(),
            checksums: Memo::new(),
            relationships: Memo::new(),
            registry,
            max_cell_chars,
        }
    }

    pub fn max_cell_chars(&self) -> usize {
        self.max_cell_chars
    }

    pub fn registry(&self) -> &ReferenceTypeRegistry {
        self.registry
    }

    pub fn annotation(&self, annotation: &Arc<Annotation>) -> Result<Arc<str>> {
        self.annotations
            .get_or_try_insert_with(ByAddress::new(annotation), || {
                annotation_to_string(annotation)
            })
    }

    pub fn checksum(&self, checksum: &Arc<Checksum>) -> Result<Arc<str>> {
        self.checksums
            .get_or_try_insert_with(ByAddress::new(checksum), || checksum_to_string(checksum))
    }

    /// [`NONE`] when the checksum is absent.
    pub fn optional_checksum(&self, checksum: Option<&Arc<Checksum>>) -> Result<Arc<str>> {
        match checksum {
            Some(checksum) => self.checksum(checksum),
            None => Ok(Arc::from(NONE)),
        }
    }

    pub fn relationship(&self, relationship: &Arc<Relationship>) -> Result<Arc<str>> {
        self.relationships
            .get_or_try_insert_with(ByAddress::new(relationship), || {
                relationship_to_string(relationship)
            })
    }

    pub fn external_ref(&self, external_ref: &ExternalRef, namespace: Option<&str>) -> String {
        external_ref_to_string(external_ref, namespace, self.registry)
    }

    /// Number of distinct values rendered so far.
    pub fn cached_values(&self) -> usize {
        self.annotations.len() + self.checksums.len() + self.relationships.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use spdx_model::{
        AnnotationType, ChecksumAlgorithm, LISTED_REFERENCE_NAMESPACE, ModelError,
        ReferenceCategory, RelationshipType,
    };

    #[test]
    fn annotation_format() {
        let annotation = Annotation::new(
            "Person: Jane Doe",
            "2024-03-02T08:00:00Z",
            AnnotationType::Review,
            "Checked licenses",
        );
        assert_eq!(
            annotation_to_string(&annotation).unwrap(),
            "2024-03-02T08:00:00Z Person: Jane Doe: Checked licenses[REVIEW]"
        );
    }

    #[test]
    fn annotation_missing_type_is_an_error() {
        let mut annotation =
            Annotation::new("Tool: x", "2024-01-01T00:00:00Z", AnnotationType::Other, "");
        annotation.annotation_type = None;
        assert_eq!(
            annotation_to_string(&annotation),
            Err(ModelError::missing("Annotation", "annotationType"))
        );
    }

    #[test]
    fn checksum_format() {
        let checksum = Checksum::new(ChecksumAlgorithm::Sha256, "bbb");
        assert_eq!(checksum_to_string(&checksum).unwrap(), "SHA256 bbb");
    }

    #[test]
    fn relationship_with_named_target_and_comment() {
        let target = Arc::new(SpdxElement::new("SPDXRef-Package").with_name("widgets"));
        let relationship =
            Relationship::new(RelationshipType::Describes, Some(target)).with_comment("primary");
        assert_eq!(
            relationship_to_string(&relationship).unwrap(),
            "DESCRIBES:[widgets]SPDXRef-Package(primary)"
        );
    }

    #[test]
    fn relationship_without_target_or_comment() {
        let relationship = Relationship::new(RelationshipType::DependsOn, None).with_comment("");
        assert_eq!(
            relationship_to_string(&relationship).unwrap(),
            "DEPENDS_ON:?NULL"
        );
    }

    #[test]
    fn relationship_without_type() {
        let relationship = Relationship::default();
        assert_eq!(
            relationship_to_string(&relationship).unwrap(),
            UNKNOWN_RELATIONSHIP_TYPE
        );
    }

    #[test]
    fn relationship_target_without_id_is_an_error() {
        let target = Arc::new(SpdxElement::default().with_name("anonymous"));
        let relationship = Relationship::new(RelationshipType::Contains, Some(target));
        assert!(relationship_to_string(&relationship).is_err());
    }

    #[test]
    fn element_reference() {
        let named = SpdxElement::new("SPDXRef-A").with_name("alpha");
        assert_eq!(element_to_string(Some(&named)), "SPDXRef-A(alpha)");
        assert_eq!(element_to_string(Some(&SpdxElement::new("SPDXRef-B"))), "SPDXRef-B");
        assert_eq!(element_to_string(Some(&SpdxElement::new(""))), UNKNOWN_ID);
        assert_eq!(element_to_string(None), UNKNOWN_ID);
    }

    #[test]
    fn external_ref_uses_listed_name() {
        let external_ref = ExternalRef::new(
            ReferenceCategory::PackageManager,
            format!("{LISTED_REFERENCE_NAMESPACE}purl"),
            "pkg:cargo/serde@1.0.0",
        )
        .with_comment("from lockfile");
        assert_eq!(
            external_ref_to_string(&external_ref, None, listed_reference_types()),
            "PACKAGE_MANAGER purl pkg:cargo/serde@1.0.0(from lockfile)"
        );
    }

    #[test]
    fn external_ref_unlisted_type_strips_namespace() {
        let namespace = "https://acme.example/spdx/widgets-1.0#";
        let external_ref = ExternalRef::new(
            ReferenceCategory::Other,
            format!("{namespace}LocalRef-acme"),
            "acme:widgets",
        )
        .with_comment("");
        assert_eq!(
            external_ref_to_string(&external_ref, Some(namespace), listed_reference_types()),
            "OTHER LocalRef-acme acme:widgets"
        );
    }

    #[test]
    fn external_ref_malformed_type_falls_back_to_raw_text() {
        let external_ref = ExternalRef {
            reference_type: Some("LocalRef-acme".to_string()),
            ..ExternalRef::default()
        };
        assert_eq!(
            external_ref_to_string(&external_ref, Some(""), listed_reference_types()),
            "OTHER LocalRef-acme [MISSING]"
        );
    }

    #[test]
    fn external_ref_defaults() {
        let external_ref = ExternalRef::default();
        assert_eq!(
            external_ref_to_string(&external_ref, None, listed_reference_types()),
            "OTHER [MISSING] [MISSING]"
        );
    }

    #[test]
    fn renderer_caches_by_identity() {
        let renderer = ValueRenderer::new(100);
        let a = Arc::new(Checksum::new(ChecksumAlgorithm::Sha1, "aaa"));
        let same_content = Arc::new(Checksum::new(ChecksumAlgorithm::Sha1, "aaa"));

        assert_eq!(&*renderer.checksum(&a).unwrap(), "SHA1 aaa");
        assert_eq!(&*renderer.checksum(&a).unwrap(), "SHA1 aaa");
        assert_eq!(renderer.cached_values(), 1);
        renderer.checksum(&same_content).unwrap();
        assert_eq!(renderer.cached_values(), 2);
    }

    #[test]
    fn optional_checksum_absent() {
        let renderer = ValueRenderer::new(100);
        assert_eq!(&*renderer.optional_checksum(None).unwrap(), NONE);
    }

    #[test]
    fn license_and_file_type() {
        assert_eq!(
            license_info_to_string(&AnyLicenseInfo::new("MIT OR Apache-2.0")),
            "MIT OR Apache-2.0"
        );
        assert_eq!(file_type_to_string(FileType::Source), "SOURCE");
    }
}

//! SPDX elements and the values attached to them.
//!
//! Properties that SPDX marks as mandatory are stored as `Option` so that a
//! partially populated document can still be loaded; the fallible accessors
//! report the absence as [`ModelError::MissingProperty`].

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::enums::{AnnotationType, ChecksumAlgorithm, ReferenceCategory, RelationshipType};
use crate::error::{ModelError, Result};

/// Reference to an SPDX element (package, file, snippet or document).
///
/// Parses from a bare SPDXID string, as SPDX JSON writes
/// `documentDescribes` and `relatedSpdxElement`, or from an inline
/// `{ "SPDXID", "name" }` object.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "ElementRef")]
pub struct SpdxElement {
    #[serde(rename = "SPDXID", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl SpdxElement {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            name: None,
        }
    }

    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// The element id, treating an empty id as absent.
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref().filter(|id| !id.is_empty())
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum ElementRef {
    Id(String),
    Inline {
        #[serde(rename = "SPDXID", default)]
        id: Option<String>,
        #[serde(default)]
        name: Option<String>,
    },
}

impl From<ElementRef> for SpdxElement {
    fn from(element: ElementRef) -> Self {
        match element {
            ElementRef::Id(id) => SpdxElement::new(id),
            ElementRef::Inline { id, name } => SpdxElement { id, name },
        }
    }
}

/// A review or comment attached to an element.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Annotation {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub annotator: Option<String>,
    #[serde(rename = "annotationDate", default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub annotation_type: Option<AnnotationType>,
    #[serde(default)]
    pub comment: String,
}

impl Annotation {
    pub fn new(
        annotator: impl Into<String>,
        date: impl Into<String>,
        annotation_type: AnnotationType,
        comment: impl Into<String>,
    ) -> Self {
        Self {
            annotator: Some(annotator.into()),
            date: Some(date.into()),
            annotation_type: Some(annotation_type),
            comment: comment.into(),
        }
    }

    pub fn annotator(&self) -> Result<&str> {
        self.annotator
            .as_deref()
            .ok_or(ModelError::missing("Annotation", "annotator"))
    }

    pub fn date(&self) -> Result<&str> {
        self.date
            .as_deref()
            .ok_or(ModelError::missing("Annotation", "annotationDate"))
    }

    pub fn annotation_type(&self) -> Result<AnnotationType> {
        self.annotation_type
            .ok_or(ModelError::missing("Annotation", "annotationType"))
    }

    pub fn comment(&self) -> &str {
        &self.comment
    }
}

/// A content digest.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Checksum {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub algorithm: Option<ChecksumAlgorithm>,
    #[serde(rename = "checksumValue", default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

impl Checksum {
    pub fn new(algorithm: ChecksumAlgorithm, value: impl Into<String>) -> Self {
        Self {
            algorithm: Some(algorithm),
            value: Some(value.into()),
        }
    }

    pub fn algorithm(&self) -> Result<ChecksumAlgorithm> {
        self.algorithm
            .ok_or(ModelError::missing("Checksum", "algorithm"))
    }

    pub fn value(&self) -> Result<&str> {
        self.value
            .as_deref()
            .ok_or(ModelError::missing("Checksum", "checksumValue"))
    }
}

/// A typed link from one element to another.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Relationship {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub relationship_type: Option<RelationshipType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub related_spdx_element: Option<Arc<SpdxElement>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

impl Relationship {
    pub fn new(relationship_type: RelationshipType, related: Option<Arc<SpdxElement>>) -> Self {
        Self {
            relationship_type: Some(relationship_type),
            related_spdx_element: related,
            comment: None,
        }
    }

    #[must_use]
    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }

    pub fn relationship_type(&self) -> Option<RelationshipType> {
        self.relationship_type
    }

    pub fn related_element(&self) -> Option<&SpdxElement> {
        self.related_spdx_element.as_deref()
    }

    pub fn comment(&self) -> Option<&str> {
        self.comment.as_deref()
    }
}

/// Reference from a package to an external resource (CPE, purl, ...).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExternalRef {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reference_category: Option<ReferenceCategory>,
    /// Reference type, either a listed type URI or a document-local URI.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reference_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reference_locator: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

impl ExternalRef {
    pub fn new(
        category: ReferenceCategory,
        reference_type: impl Into<String>,
        locator: impl Into<String>,
    ) -> Self {
        Self {
            reference_category: Some(category),
            reference_type: Some(reference_type.into()),
            reference_locator: Some(locator.into()),
            comment: None,
        }
    }

    #[must_use]
    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }
}

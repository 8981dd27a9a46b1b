//! Documents and cross-document verdicts consumed by the report builder.

use std::sync::Arc;

use spdx_model::{
    CreationInfo, SpdxDocument, equivalent_collections, equivalent_optional, equivalent_text,
};

use crate::error::{CompareError, Result};

/// Provides the documents of a comparison and whether each tracked field is
/// equivalent across all of them.
///
/// Verdicts are computed by the source; the report never derives them from
/// rendered text.
pub trait ComparisonSource: Sync {
    fn document_count(&self) -> usize;

    /// Document at `index`, in caller order.
    fn document(&self, index: usize) -> Result<Arc<SpdxDocument>>;

    fn spec_versions_equal(&self) -> Result<bool>;
    fn data_licenses_equal(&self) -> Result<bool>;
    fn document_comments_equal(&self) -> Result<bool>;
    fn creator_comments_equal(&self) -> Result<bool>;
    fn creation_dates_equal(&self) -> Result<bool>;
    fn license_list_versions_equal(&self) -> Result<bool>;
    fn annotations_equal(&self) -> Result<bool>;
    fn relationships_equal(&self) -> Result<bool>;
    fn described_contents_equal(&self) -> Result<bool>;
}

/// [`ComparisonSource`] over documents held in memory.
///
/// Every pair of documents is compared. Optional text treats absent and empty
/// as equal; collections ignore element order.
#[derive(Debug, Clone, Default)]
pub struct DocumentComparer {
    documents: Vec<Arc<SpdxDocument>>,
}

impl DocumentComparer {
    pub fn new(documents: Vec<Arc<SpdxDocument>>) -> Self {
        Self { documents }
    }

    pub fn documents(&self) -> &[Arc<SpdxDocument>] {
        &self.documents
    }

    fn all_pairs(&self, equivalent: impl Fn(&SpdxDocument, &SpdxDocument) -> bool) -> bool {
        self.documents.iter().enumerate().all(|(i, a)| {
            self.documents[i + 1..]
                .iter()
                .all(|b| equivalent(a, b))
        })
    }
}

impl FromIterator<SpdxDocument> for DocumentComparer {
    fn from_iter<I: IntoIterator<Item = SpdxDocument>>(iter: I) -> Self {
        Self::new(iter.into_iter().map(Arc::new).collect())
    }
}

fn created(document: &SpdxDocument) -> Option<&str> {
    document.creation_info().and_then(|info| info.created.as_deref())
}

fn creator_comment(document: &SpdxDocument) -> Option<&str> {
    document.creation_info().and_then(CreationInfo::comment)
}

fn license_list_version(document: &SpdxDocument) -> Option<&str> {
    document
        .creation_info()
        .and_then(CreationInfo::license_list_version)
}

impl ComparisonSource for DocumentComparer {
    fn document_count(&self) -> usize {
        self.documents.len()
    }

    fn document(&self, index: usize) -> Result<Arc<SpdxDocument>> {
        self.documents
            .get(index)
            .cloned()
            .ok_or(CompareError::DocumentIndex {
                index,
                count: self.documents.len(),
            })
    }

    fn spec_versions_equal(&self) -> Result<bool> {
        Ok(self.all_pairs(|a, b| {
            equivalent_text(a.spec_version.as_deref(), b.spec_version.as_deref())
        }))
    }

    fn data_licenses_equal(&self) -> Result<bool> {
        Ok(self.all_pairs(|a, b| {
            equivalent_optional(a.data_license.as_ref(), b.data_license.as_ref())
        }))
    }

    fn document_comments_equal(&self) -> Result<bool> {
        Ok(self.all_pairs(|a, b| equivalent_text(a.comment(), b.comment())))
    }

    fn creator_comments_equal(&self) -> Result<bool> {
        Ok(self.all_pairs(|a, b| equivalent_text(creator_comment(a), creator_comment(b))))
    }

    fn creation_dates_equal(&self) -> Result<bool> {
        Ok(self.all_pairs(|a, b| equivalent_text(created(a), created(b))))
    }

    fn license_list_versions_equal(&self) -> Result<bool> {
        Ok(self.all_pairs(|a, b| {
            equivalent_text(license_list_version(a), license_list_version(b))
        }))
    }

    fn annotations_equal(&self) -> Result<bool> {
        Ok(self.all_pairs(|a, b| equivalent_collections(a.annotations(), b.annotations())))
    }

    fn relationships_equal(&self) -> Result<bool> {
        Ok(self.all_pairs(|a, b| {
            equivalent_collections(a.relationships(), b.relationships())
        }))
    }

    fn described_contents_equal(&self) -> Result<bool> {
        Ok(self.all_pairs(|a, b| equivalent_collections(a.describes(), b.describes())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use spdx_model::{Annotation, AnnotationType, AnyLicenseInfo, SpdxElement};

    fn document(version: &str) -> SpdxDocument {
        SpdxDocument {
            spec_version: Some(version.to_string()),
            data_license: Some(AnyLicenseInfo::new("CC0-1.0")),
            creation_info: Some(CreationInfo::new("2024-01-01T00:00:00Z")),
            ..SpdxDocument::default()
        }
    }

    #[test]
    fn all_pairs_must_agree() {
        let comparer: DocumentComparer =
            [document("SPDX-2.3"), document("SPDX-2.3"), document("SPDX-2.2")]
                .into_iter()
                .collect();
        assert!(!comparer.spec_versions_equal().unwrap());
        assert!(comparer.data_licenses_equal().unwrap());
        assert!(comparer.creation_dates_equal().unwrap());
    }

    #[test]
    fn absent_comment_equals_empty_comment() {
        let mut with_empty = document("SPDX-2.3");
        with_empty.comment = Some(String::new());
        let comparer: DocumentComparer = [with_empty, document("SPDX-2.3")].into_iter().collect();
        assert!(comparer.document_comments_equal().unwrap());
        assert!(comparer.creator_comments_equal().unwrap());
        assert!(comparer.license_list_versions_equal().unwrap());
    }

    #[test]
    fn collections_ignore_order() {
        let a = Arc::new(SpdxElement::new("SPDXRef-A"));
        let b = Arc::new(SpdxElement::new("SPDXRef-B"));
        let mut first = document("SPDX-2.3");
        first.describes = vec![Arc::clone(&a), Arc::clone(&b)];
        let mut second = document("SPDX-2.3");
        second.describes = vec![b, a];
        second.annotations = vec![Arc::new(Annotation::new(
            "Tool: x",
            "2024-01-01T00:00:00Z",
            AnnotationType::Other,
            "note",
        ))];

        let comparer: DocumentComparer = [first, second].into_iter().collect();
        assert!(comparer.described_contents_equal().unwrap());
        assert!(!comparer.annotations_equal().unwrap());
        assert!(comparer.relationships_equal().unwrap());
    }

    #[test]
    fn single_document_is_equal_to_itself() {
        let comparer: DocumentComparer = [document("SPDX-2.3")].into_iter().collect();
        assert!(comparer.spec_versions_equal().unwrap());
        assert!(matches!(
            comparer.document(1),
            Err(CompareError::DocumentIndex { index: 1, count: 1 })
        ));
    }
}

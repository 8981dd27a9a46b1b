//! Semantic equivalence between SPDX values from different documents.
//!
//! Equivalence is looser than `PartialEq`: optional text treats absent and
//! empty as the same value, checksum digests ignore hex case, and collections
//! ignore element order.

use std::sync::Arc;

use crate::element::{Annotation, Checksum, ExternalRef, Relationship, SpdxElement};
use crate::license::AnyLicenseInfo;

/// Values that can be compared across documents.
pub trait Equivalent {
    fn equivalent(&self, other: &Self) -> bool;
}

impl<T: Equivalent + ?Sized> Equivalent for Arc<T> {
    fn equivalent(&self, other: &Self) -> bool {
        (**self).equivalent(other)
    }
}

/// Both absent, or both present and equivalent.
pub fn equivalent_optional<T: Equivalent + ?Sized>(a: Option<&T>, b: Option<&T>) -> bool {
    match (a, b) {
        (None, None) => true,
        (Some(a), Some(b)) => a.equivalent(b),
        _ => false,
    }
}

/// Same size, and every element of `a` has an equivalent element in `b`.
pub fn equivalent_collections<T: Equivalent>(a: &[T], b: &[T]) -> bool {
    a.len() == b.len() && a.iter().all(|x| b.iter().any(|y| x.equivalent(y)))
}

/// Optional text where an absent value equals the empty string.
pub fn equivalent_text(a: Option<&str>, b: Option<&str>) -> bool {
    a.unwrap_or_default() == b.unwrap_or_default()
}

impl Equivalent for str {
    fn equivalent(&self, other: &Self) -> bool {
        self == other
    }
}

impl Equivalent for SpdxElement {
    fn equivalent(&self, other: &Self) -> bool {
        self.id() == other.id() && equivalent_text(self.name(), other.name())
    }
}

impl Equivalent for Annotation {
    fn equivalent(&self, other: &Self) -> bool {
        self.annotator == other.annotator
            && self.date == other.date
            && self.annotation_type == other.annotation_type
            && self.comment == other.comment
    }
}

impl Equivalent for Checksum {
    fn equivalent(&self, other: &Self) -> bool {
        self.algorithm == other.algorithm
            && match (self.value.as_deref(), other.value.as_deref()) {
                (Some(a), Some(b)) => a.eq_ignore_ascii_case(b),
                (a, b) => a == b,
            }
    }
}

impl Equivalent for Relationship {
    fn equivalent(&self, other: &Self) -> bool {
        self.relationship_type == other.relationship_type
            && equivalent_optional(self.related_element(), other.related_element())
            && equivalent_text(self.comment(), other.comment())
    }
}

impl Equivalent for ExternalRef {
    fn equivalent(&self, other: &Self) -> bool {
        self.reference_category == other.reference_category
            && self.reference_type == other.reference_type
            && self.reference_locator == other.reference_locator
            && equivalent_text(self.comment.as_deref(), other.comment.as_deref())
    }
}

impl Equivalent for AnyLicenseInfo {
    fn equivalent(&self, other: &Self) -> bool {
        self.normalized() == other.normalized()
    }
}

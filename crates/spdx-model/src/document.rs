use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::element::{Annotation, Relationship, SpdxElement};
use crate::error::{ModelError, Result};
use crate::license::AnyLicenseInfo;

/// Who created a document, when, and against which license list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreationInfo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub creators: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub license_list_version: Option<String>,
}

impl CreationInfo {
    pub fn new(created: impl Into<String>) -> Self {
        Self {
            created: Some(created.into()),
            ..Self::default()
        }
    }

    pub fn created(&self) -> Result<&str> {
        self.created
            .as_deref()
            .ok_or(ModelError::missing("CreationInfo", "created"))
    }

    pub fn comment(&self) -> Option<&str> {
        self.comment.as_deref()
    }

    pub fn license_list_version(&self) -> Option<&str> {
        self.license_list_version.as_deref()
    }
}

/// An SPDX document snapshot.
///
/// Nested values are shared through `Arc` so that renderers can key caches
/// on object identity rather than on content.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpdxDocument {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "spdxVersion", default, skip_serializing_if = "Option::is_none")]
    pub spec_version: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_license: Option<AnyLicenseInfo>,
    #[serde(rename = "SPDXID", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(rename = "documentNamespace", default, skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub creation_info: Option<CreationInfo>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub annotations: Vec<Arc<Annotation>>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub relationships: Vec<Arc<Relationship>>,
    #[serde(rename = "documentDescribes", default, skip_serializing_if = "Vec::is_empty")]
    pub describes: Vec<Arc<SpdxElement>>,
}

impl SpdxDocument {
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn spec_version(&self) -> Result<&str> {
        self.spec_version
            .as_deref()
            .ok_or(ModelError::missing("SpdxDocument", "spdxVersion"))
    }

    pub fn data_license(&self) -> Result<&AnyLicenseInfo> {
        self.data_license
            .as_ref()
            .ok_or(ModelError::missing("SpdxDocument", "dataLicense"))
    }

    pub fn id(&self) -> Result<&str> {
        self.id
            .as_deref()
            .ok_or(ModelError::missing("SpdxDocument", "SPDXID"))
    }

    pub fn namespace(&self) -> Result<&str> {
        self.namespace
            .as_deref()
            .ok_or(ModelError::missing("SpdxDocument", "documentNamespace"))
    }

    pub fn comment(&self) -> Option<&str> {
        self.comment.as_deref()
    }

    pub fn creation_info(&self) -> Option<&CreationInfo> {
        self.creation_info.as_ref()
    }

    pub fn annotations(&self) -> &[Arc<Annotation>] {
        &self.annotations
    }

    pub fn relationships(&self) -> &[Arc<Relationship>] {
        &self.relationships
    }

    pub fn describes(&self) -> &[Arc<SpdxElement>] {
        &self.describes
    }
}

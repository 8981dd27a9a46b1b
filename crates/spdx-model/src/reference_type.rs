//! Registry of SPDX listed external reference types.
//!
//! Listed types live under [`LISTED_REFERENCE_NAMESPACE`]; the short name is
//! the last path segment (`.../references/purl` -> `purl`).

use std::collections::HashMap;
use std::sync::OnceLock;

use crate::error::{ModelError, Result};

/// Namespace of the SPDX listed reference types.
pub const LISTED_REFERENCE_NAMESPACE: &str = "http://spdx.org/rdf/references/";

const LISTED_REFERENCE_NAMES: &[&str] = &[
    "cpe22Type",
    "cpe23Type",
    "advisory",
    "fix",
    "url",
    "swid",
    "maven-central",
    "npm",
    "nuget",
    "bower",
    "purl",
    "swh",
    "gitoid",
];

/// Maps reference type URIs to their listed names.
#[derive(Debug, Clone, Default)]
pub struct ReferenceTypeRegistry {
    names_by_uri: HashMap<String, String>,
}

impl ReferenceTypeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a name for a reference type URI, replacing any previous one.
    pub fn register(&mut self, uri: impl Into<String>, name: impl Into<String>) {
        self.names_by_uri.insert(uri.into(), name.into());
    }

    pub fn len(&self) -> usize {
        self.names_by_uri.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names_by_uri.is_empty()
    }

    /// Looks up the listed name of a reference type URI.
    ///
    /// Returns `Ok(None)` for a well-formed URI that is not listed.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::InvalidUri`] when `uri` is not an absolute URI.
    pub fn lookup(&self, uri: &str) -> Result<Option<&str>> {
        validate_uri(uri)?;
        Ok(self.names_by_uri.get(uri).map(String::as_str))
    }

    /// Like [`lookup`](Self::lookup) but treats an unlisted URI as an error.
    pub fn listed_name(&self, uri: &str) -> Result<&str> {
        self.lookup(uri)?
            .ok_or_else(|| ModelError::UnknownReferenceType {
                uri: uri.to_string(),
            })
    }
}

static LISTED_REFERENCE_TYPES: OnceLock<ReferenceTypeRegistry> = OnceLock::new();

/// Returns the registry of SPDX listed reference types.
///
/// The registry is built on first access.
pub fn listed_reference_types() -> &'static ReferenceTypeRegistry {
    LISTED_REFERENCE_TYPES.get_or_init(build_listed_registry)
}

fn build_listed_registry() -> ReferenceTypeRegistry {
    let mut registry = ReferenceTypeRegistry::new();
    for name in LISTED_REFERENCE_NAMES {
        registry.register(format!("{LISTED_REFERENCE_NAMESPACE}{name}"), *name);
    }
    registry
}

/// Checks that `uri` has a scheme and contains no whitespace.
fn validate_uri(uri: &str) -> Result<()> {
    if uri.is_empty() {
        return Err(ModelError::invalid_uri(uri, "empty URI"));
    }
    if uri.chars().any(char::is_whitespace) {
        return Err(ModelError::invalid_uri(uri, "URI contains whitespace"));
    }
    let Some((scheme, _)) = uri.split_once(':') else {
        return Err(ModelError::invalid_uri(uri, "missing scheme"));
    };
    let mut chars = scheme.chars();
    let starts_alpha = chars.next().is_some_and(|c| c.is_ascii_alphabetic());
    if !starts_alpha
        || !chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
    {
        return Err(ModelError::invalid_uri(uri, "invalid scheme"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn listed_types_resolve_by_uri() {
        let registry = listed_reference_types();
        assert_eq!(registry.len(), LISTED_REFERENCE_NAMES.len());
        assert_eq!(
            registry.lookup("http://spdx.org/rdf/references/purl"),
            Ok(Some("purl"))
        );
        assert_eq!(
            registry.listed_name("http://spdx.org/rdf/references/cpe23Type"),
            Ok("cpe23Type")
        );
    }

    #[test]
    fn unlisted_uri_is_none() {
        let registry = listed_reference_types();
        assert_eq!(
            registry.lookup("https://example.com/spdx#LocalRef-acme"),
            Ok(None)
        );
        assert!(matches!(
            registry.listed_name("https://example.com/spdx#LocalRef-acme"),
            Err(ModelError::UnknownReferenceType { .. })
        ));
    }

    #[test]
    fn malformed_uri_is_rejected() {
        let registry = listed_reference_types();
        assert!(matches!(
            registry.lookup("not a uri"),
            Err(ModelError::InvalidUri { .. })
        ));
        assert!(matches!(
            registry.lookup("LocalRef-acme"),
            Err(ModelError::InvalidUri { .. })
        ));
        assert!(matches!(
            registry.lookup("1http://x"),
            Err(ModelError::InvalidUri { .. })
        ));
    }
}

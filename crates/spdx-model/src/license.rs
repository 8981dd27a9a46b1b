use std::fmt;

use serde::{Deserialize, Serialize};

/// A license expression such as `CC0-1.0` or `MIT OR Apache-2.0`.
///
/// The expression is kept verbatim; comparison trims surrounding whitespace
/// and ignores the case of the `AND`/`OR`/`WITH` operators only.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnyLicenseInfo(String);

impl AnyLicenseInfo {
    pub fn new(expression: impl Into<String>) -> Self {
        Self(expression.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Canonical form used for equivalence.
    pub fn normalized(&self) -> String {
        self.0
            .split_whitespace()
            .map(|token| match token.to_ascii_uppercase().as_str() {
                op @ ("AND" | "OR" | "WITH") => op.to_string(),
                _ => token.to_string(),
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl fmt::Display for AnyLicenseInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for AnyLicenseInfo {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalized_ignores_operator_case_and_spacing() {
        let a = AnyLicenseInfo::new("MIT  or Apache-2.0");
        let b = AnyLicenseInfo::new(" MIT OR Apache-2.0");
        assert_eq!(a.normalized(), b.normalized());
        assert_eq!(a.to_string(), "MIT  or Apache-2.0");
    }

    #[test]
    fn license_ids_stay_case_sensitive() {
        let a = AnyLicenseInfo::new("mit");
        let b = AnyLicenseInfo::new("MIT");
        assert_ne!(a.normalized(), b.normalized());
    }
}

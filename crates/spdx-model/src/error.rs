//! Error types for reading SPDX model objects.

use thiserror::Error;

/// Errors raised while reading properties of SPDX model objects.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    /// A property the SPDX model requires is absent.
    #[error("{object} is missing required property {property}")]
    MissingProperty {
        object: &'static str,
        property: &'static str,
    },

    /// A URI could not be parsed.
    #[error("invalid URI '{uri}': {message}")]
    InvalidUri { uri: String, message: String },

    /// A reference type URI is not part of the listed reference types.
    #[error("unknown reference type: {uri}")]
    UnknownReferenceType { uri: String },
}

/// Result type alias for model operations.
pub type Result<T> = std::result::Result<T, ModelError>;

impl ModelError {
    /// Create a MissingProperty error.
    pub fn missing(object: &'static str, property: &'static str) -> Self {
        Self::MissingProperty { object, property }
    }

    /// Create an InvalidUri error.
    pub fn invalid_uri(uri: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidUri {
            uri: uri.into(),
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ModelError::missing("Annotation", "annotator");
        assert_eq!(
            format!("{err}"),
            "Annotation is missing required property annotator"
        );

        let err = ModelError::invalid_uri("not a uri", "missing scheme");
        assert_eq!(format!("{err}"), "invalid URI 'not a uri': missing scheme");
    }
}

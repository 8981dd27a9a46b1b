//! Error types for building and verifying comparison reports.

use spdx_model::ModelError;
use thiserror::Error;

use crate::sink::SinkError;

/// Errors raised while importing comparison results into a sheet.
#[derive(Debug, Error)]
pub enum CompareError {
    /// The caller supplied a different number of labels than documents.
    #[error(
        "number of document labels ({labels}) does not match the number of SPDX documents ({documents})"
    )]
    DocumentCountMismatch { labels: usize, documents: usize },

    /// A document index outside the comparison source.
    #[error("document index {index} out of range for {count} documents")]
    DocumentIndex { index: usize, count: usize },

    /// Reading or rendering a field of one document failed.
    #[error("failed to import {field} for document {document}: {source}")]
    Analysis {
        field: &'static str,
        document: usize,
        #[source]
        source: ModelError,
    },

    /// Computing the cross-document verdict of a field failed.
    #[error("failed to compare {field}: {source}")]
    Verdict {
        field: &'static str,
        #[source]
        source: Box<CompareError>,
    },

    /// The comparison source could not produce a verdict or document.
    #[error("comparison source error: {message}")]
    Source { message: String },

    /// The sink does not hold a sheet layout to import into.
    #[error(transparent)]
    Layout(#[from] VerifyError),

    /// The tabular sink rejected a write.
    #[error(transparent)]
    Sink(#[from] SinkError),
}

/// Result type alias for comparison operations.
pub type Result<T> = std::result::Result<T, CompareError>;

impl CompareError {
    /// Create an Analysis error for a field of a document.
    pub fn analysis(field: &'static str, document: usize, source: ModelError) -> Self {
        Self::Analysis {
            field,
            document,
            source,
        }
    }

    /// Wrap a verdict failure with the field it was computed for.
    pub fn verdict(field: &'static str, source: CompareError) -> Self {
        Self::Verdict {
            field,
            source: Box::new(source),
        }
    }

    /// Create a Source error.
    pub fn source_failure(message: impl Into<String>) -> Self {
        Self::Source {
            message: message.into(),
        }
    }
}

/// Errors reported by the header verification of a sheet.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VerifyError {
    /// The sheet has no header row.
    #[error("worksheet for SPDX document comparison has no header row")]
    MissingHeader,

    /// A header cell does not carry the expected column title.
    #[error("column {column} missing for SPDX document comparison worksheet")]
    ColumnMismatch { column: &'static str },
}

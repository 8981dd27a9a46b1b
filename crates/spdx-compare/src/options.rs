//! Configuration options for building a comparison report.

use serde::{Deserialize, Serialize};

/// Upper bound on the characters written into one cell.
///
/// Spreadsheet applications reject cells longer than 32767 characters.
pub const MAX_CHARACTERS_PER_CELL: usize = 32000;

/// Text written into the verdict row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VerdictMarkers {
    /// Written when every document has an equivalent value.
    pub equal: String,
    /// Written when at least two documents differ.
    pub different: String,
    /// Written for fields that have no cross-document equality.
    pub not_applicable: String,
}

impl Default for VerdictMarkers {
    fn default() -> Self {
        Self {
            equal: "Equals".to_string(),
            different: "Diff".to_string(),
            not_applicable: "N/A".to_string(),
        }
    }
}

/// Options controlling report generation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportOptions {
    /// Maximum characters in a multi-line cell before items are elided.
    pub max_cell_chars: usize,

    /// Render the documents of a field on the rayon thread pool.
    pub parallel: bool,

    /// Verdict row text.
    pub markers: VerdictMarkers,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            max_cell_chars: MAX_CHARACTERS_PER_CELL,
            parallel: true,
            markers: VerdictMarkers::default(),
        }
    }
}

impl ReportOptions {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_max_cell_chars(mut self, max: usize) -> Self {
        self.max_cell_chars = max;
        self
    }

    #[must_use]
    pub fn with_parallel(mut self, enable: bool) -> Self {
        self.parallel = enable;
        self
    }

    #[must_use]
    pub fn with_markers(mut self, markers: VerdictMarkers) -> Self {
        self.markers = markers;
        self
    }
}

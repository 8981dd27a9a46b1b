//! Loading documents, labels and report options from disk.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use spdx_compare::ReportOptions;
use spdx_model::SpdxDocument;
use tracing::{debug, info};

/// Reads one SPDX JSON document.
pub fn load_document(path: &Path) -> Result<SpdxDocument> {
    let text =
        fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let document: SpdxDocument = serde_json::from_str(&text)
        .with_context(|| format!("parse SPDX JSON document {}", path.display()))?;
    debug!(path = %path.display(), name = document.name().unwrap_or_default(), "document loaded");
    Ok(document)
}

/// Reads every document in argument order.
pub fn load_documents(paths: &[PathBuf]) -> Result<Vec<Arc<SpdxDocument>>> {
    let documents = paths
        .iter()
        .map(|path| load_document(path).map(Arc::new))
        .collect::<Result<Vec<_>>>()?;
    info!(count = documents.len(), "documents loaded");
    Ok(documents)
}

/// Labels for the document rows.
///
/// Explicit labels are used as given; without them each document is
/// labelled with its file name.
pub fn resolve_labels(paths: &[PathBuf], labels: &[String]) -> Vec<String> {
    if labels.is_empty() {
        paths.iter().map(|path| file_label(path)).collect()
    } else {
        labels.to_vec()
    }
}

fn file_label(path: &Path) -> String {
    path.file_name()
        .map_or_else(|| path.display().to_string(), |name| name.to_string_lossy().into_owned())
}

/// Report options from a TOML file, or the defaults.
pub fn load_options(path: Option<&Path>) -> Result<ReportOptions> {
    let Some(path) = path else {
        return Ok(ReportOptions::default());
    };
    let text =
        fs::read_to_string(path).with_context(|| format!("read config {}", path.display()))?;
    toml::from_str(&text).with_context(|| format!("parse config {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_default_to_file_names() {
        let paths = vec![
            PathBuf::from("/tmp/reports/first.spdx.json"),
            PathBuf::from("second.json"),
        ];
        assert_eq!(
            resolve_labels(&paths, &[]),
            vec!["first.spdx.json", "second.json"]
        );
    }

    #[test]
    fn explicit_labels_are_kept() {
        let paths = vec![PathBuf::from("a.json"), PathBuf::from("b.json")];
        let labels = vec!["release".to_string(), "candidate".to_string()];
        assert_eq!(resolve_labels(&paths, &labels), labels);
    }

    #[test]
    fn missing_config_uses_defaults() {
        assert_eq!(load_options(None).unwrap(), ReportOptions::default());
    }
}

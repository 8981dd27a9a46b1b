//! File round-trips through the CLI library: JSON documents in, CSV out.

use std::fs;
use std::path::{Path, PathBuf};

use spdx_cli::export::{read_csv, write_csv};
use spdx_cli::input::{load_documents, load_options, resolve_labels};
use spdx_cli::report::{build_report, verify_grid};
use spdx_compare::{CompareError, DocumentField, ReportOptions, TabularSink, VerifyError};
use tempfile::TempDir;

const RELEASE: &str = r#"{
  "spdxVersion": "SPDX-2.3",
  "dataLicense": "CC0-1.0",
  "SPDXID": "SPDXRef-DOCUMENT",
  "name": "widgets-1.0",
  "documentNamespace": "https://acme.example/spdx/widgets-1.0",
  "creationInfo": {
    "created": "2024-03-01T09:00:00Z",
    "creators": ["Tool: acme-sbom-1.2"],
    "licenseListVersion": "3.22"
  },
  "documentDescribes": [{ "SPDXID": "SPDXRef-Package", "name": "widgets" }],
  "annotations": [{
    "annotator": "Person: Jane Doe",
    "annotationDate": "2024-03-02T08:00:00Z",
    "annotationType": "REVIEW",
    "comment": "licenses checked"
  }]
}"#;

const CANDIDATE: &str = r#"{
  "spdxVersion": "SPDX-2.3",
  "dataLicense": "CC0-1.0",
  "SPDXID": "SPDXRef-DOCUMENT",
  "name": "widgets-1.1-rc1",
  "documentNamespace": "https://acme.example/spdx/widgets-1.1-rc1",
  "creationInfo": {
    "created": "2024-04-11T17:30:00Z",
    "creators": ["Tool: acme-sbom-1.3"],
    "licenseListVersion": "3.23"
  },
  "documentDescribes": [{ "SPDXID": "SPDXRef-Package", "name": "widgets" }]
}"#;

fn write(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, contents).unwrap();
    path
}

#[test]
fn compare_export_and_verify() {
    let dir = TempDir::new().unwrap();
    let paths = vec![
        write(dir.path(), "release.json", RELEASE),
        write(dir.path(), "candidate.json", CANDIDATE),
    ];

    let documents = load_documents(&paths).unwrap();
    let labels = resolve_labels(&paths, &[]);
    let report = build_report(documents, &labels, ReportOptions::default()).unwrap();

    assert_eq!(report.document_count(), 2);
    assert_eq!(
        report.differing_fields(),
        vec!["Creation Date", "Lic. List. Ver.", "Annotations"]
    );
    assert_eq!(
        report
            .grid
            .value(2, DocumentField::Describes.column())
            .as_deref(),
        Some("SPDXRef-Package(widgets)")
    );

    let csv_path = dir.path().join("report.csv");
    write_csv(&report.grid, &csv_path).unwrap();
    let restored = read_csv(&csv_path).unwrap();

    assert_eq!(restored.row_count(), 4);
    assert_eq!(restored.value(2, 0).as_deref(), Some("release.json"));
    assert_eq!(
        restored
            .value(2, DocumentField::Annotations.column())
            .as_deref(),
        Some("2024-03-02T08:00:00Z Person: Jane Doe: licenses checked[REVIEW]")
    );
    verify_grid(&restored).unwrap();
}

#[test]
fn verify_rejects_renamed_column() {
    let dir = TempDir::new().unwrap();
    let csv = "Document,Document Name,SPDX Version,License\n";
    let path = write(dir.path(), "broken.csv", csv);

    let grid = read_csv(&path).unwrap();
    let err = verify_grid(&grid).unwrap_err();

    assert_eq!(
        err.downcast_ref::<VerifyError>(),
        Some(&VerifyError::ColumnMismatch {
            column: "Data License"
        })
    );
}

#[test]
fn label_count_mismatch_is_reported() {
    let dir = TempDir::new().unwrap();
    let paths = vec![write(dir.path(), "release.json", RELEASE)];
    let documents = load_documents(&paths).unwrap();
    let labels = vec!["one".to_string(), "two".to_string()];

    let err = build_report(documents, &labels, ReportOptions::default()).unwrap_err();

    assert!(matches!(
        err.downcast_ref::<CompareError>(),
        Some(CompareError::DocumentCountMismatch {
            labels: 2,
            documents: 1
        })
    ));
}

#[test]
fn options_load_from_toml() {
    let dir = TempDir::new().unwrap();
    let path = write(
        dir.path(),
        "report.toml",
        "max_cell_chars = 500\n\n[markers]\nequal = \"same\"\n",
    );

    let options = load_options(Some(&path)).unwrap();

    assert_eq!(options.max_cell_chars, 500);
    assert_eq!(options.markers.equal, "same");
    assert_eq!(options.markers.different, "Diff");
}

#[test]
fn invalid_json_names_the_file() {
    let dir = TempDir::new().unwrap();
    let path = write(dir.path(), "truncated.json", "{\"spdxVersion\": ");

    let err = load_documents(&[path]).unwrap_err();

    assert!(format!("{err:#}").contains("truncated.json"));
}

#[test]
fn spdx_json_with_id_references_loads() {
    let dir = TempDir::new().unwrap();
    let released = r#"{
      "spdxVersion": "SPDX-2.3",
      "dataLicense": "CC0-1.0",
      "SPDXID": "SPDXRef-DOCUMENT",
      "name": "widgets-1.0",
      "documentNamespace": "https://acme.example/spdx/widgets-1.0",
      "creationInfo": { "created": "2024-03-01T09:00:00Z", "creators": ["Tool: acme-sbom-1.2"] },
      "documentDescribes": ["SPDXRef-Package"],
      "relationships": [{
        "spdxElementId": "SPDXRef-DOCUMENT",
        "relationshipType": "DESCRIBES",
        "relatedSpdxElement": "SPDXRef-Package"
      }]
    }"#;
    let paths = vec![write(dir.path(), "released.json", released)];

    let documents = load_documents(&paths).unwrap();
    let labels = resolve_labels(&paths, &[]);
    let report = build_report(documents, &labels, ReportOptions::default()).unwrap();

    assert_eq!(
        report
            .grid
            .value(2, DocumentField::Describes.column())
            .as_deref(),
        Some("SPDXRef-Package")
    );
    assert_eq!(
        report
            .grid
            .value(2, DocumentField::Relationships.column())
            .as_deref(),
        Some("DESCRIBES:SPDXRef-Package")
    );
}

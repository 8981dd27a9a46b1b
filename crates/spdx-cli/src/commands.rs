use anyhow::Result;
use tracing::{info, info_span};

use spdx_cli::export::{read_csv, write_csv};
use spdx_cli::input::{load_documents, load_options, resolve_labels};
use spdx_cli::report::{Report, build_report, verify_grid};

use crate::cli::{CompareArgs, VerifyArgs};

/// Outcome of `compare`.
pub struct CompareResult {
    pub report: Report,
    pub labels: Vec<String>,
    /// Set when the report went to a CSV file instead of the terminal.
    pub written_to: Option<std::path::PathBuf>,
}

pub fn run_compare(args: &CompareArgs) -> Result<CompareResult> {
    let span = info_span!("compare", documents = args.documents.len());
    let _guard = span.enter();

    let mut options = load_options(args.config.as_deref())?;
    if args.sequential {
        options.parallel = false;
    }
    let documents = load_documents(&args.documents)?;
    let labels = resolve_labels(&args.documents, &args.labels);
    let report = build_report(documents, &labels, options)?;

    if let Some(path) = &args.output {
        write_csv(&report.grid, path)?;
        info!(path = %path.display(), "report written");
    }
    Ok(CompareResult {
        report,
        labels,
        written_to: args.output.clone(),
    })
}

pub fn run_verify(args: &VerifyArgs) -> Result<()> {
    let span = info_span!("verify", report = %args.report.display());
    let _guard = span.enter();

    let grid = read_csv(&args.report)?;
    verify_grid(&grid)?;
    info!("header row matches");
    Ok(())
}

//! CLI library components for the SPDX comparison report.

pub mod export;
pub mod input;
pub mod logging;
pub mod report;

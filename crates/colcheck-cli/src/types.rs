use std::path::PathBuf;

use serde::Serialize;

use colcheck_validate::HeaderReport;

/// Inputs of a single header check.
#[derive(Debug, Clone)]
pub struct CheckRequest {
    pub config: PathBuf,
    pub data: PathBuf,
    pub table: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct CheckResult {
    pub data_path: PathBuf,
    pub config_path: PathBuf,
    pub rows: usize,
    /// Headers as read from the file, in file order.
    pub raw_columns: Vec<String>,
    pub report: HeaderReport,
}

impl CheckResult {
    pub fn passed(&self) -> bool {
        self.report.passed()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableSummary {
    pub name: String,
    pub columns: Vec<String>,
}

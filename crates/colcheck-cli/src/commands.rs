use std::path::Path;

use anyhow::{Context, Result};
use tracing::{debug, info_span};

use colcheck_config::read_config_file;
use colcheck_ingest::read_csv_table;
use colcheck_validate::validate_column_headers;

use crate::types::{CheckRequest, CheckResult, TableSummary};

/// Loads the config and dataset, then validates the dataset's headers.
///
/// A header mismatch is a successful run with a failing report; errors cover
/// unreadable inputs and precondition violations.
pub fn run_check(request: &CheckRequest) -> Result<CheckResult> {
    let span = info_span!("check", data = %request.data.display());
    let _guard = span.enter();

    let document = read_config_file(&request.config)
        .with_context(|| format!("load config {}", request.config.display()))?;
    let table = document
        .table(request.table.as_deref())
        .with_context(|| format!("resolve table in {}", request.config.display()))?;
    debug!(table = %table.label(), expected = table.columns.len(), "resolved table");

    let mut df = read_csv_table(&request.data)
        .with_context(|| format!("load dataset {}", request.data.display()))?;
    let raw_columns: Vec<String> = df
        .get_column_names()
        .iter()
        .map(|name| name.as_str().to_string())
        .collect();

    let report = validate_column_headers(&mut df, &table)
        .with_context(|| format!("validate headers of {}", request.data.display()))?;

    Ok(CheckResult {
        data_path: request.data.clone(),
        config_path: request.config.clone(),
        rows: df.height(),
        raw_columns,
        report,
    })
}

/// Lists the table records declared by a config document.
///
/// A document whose root is the table record yields one entry named `<root>`.
pub fn run_tables(config: &Path) -> Result<Vec<TableSummary>> {
    let document =
        read_config_file(config).with_context(|| format!("load config {}", config.display()))?;

    if document.is_single_table() {
        let table = document.table(None).context("read root table")?;
        return Ok(vec![TableSummary {
            name: table.label(),
            columns: table.columns,
        }]);
    }

    document
        .table_names()
        .iter()
        .map(|name| {
            let table = document
                .table(Some(name.as_str()))
                .with_context(|| format!("read table '{name}'"))?;
            Ok::<_, anyhow::Error>(TableSummary {
                name: name.clone(),
                columns: table.columns,
            })
        })
        .collect()
}

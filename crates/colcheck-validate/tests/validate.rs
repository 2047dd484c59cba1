//! Integration tests for DataFrame header validation.

use std::collections::BTreeSet;
use std::io::{self, Write};
use std::sync::{Arc, Mutex};

use polars::prelude::{Column, DataFrame, IntoColumn, NamedFrom, Series};

use colcheck_config::TableConfig;
use colcheck_validate::{HeaderReport, ValidateError, validate_column_headers};
use tracing_subscriber::fmt::MakeWriter;

fn test_df(columns: Vec<(&str, Vec<&str>)>) -> DataFrame {
    let cols: Vec<Column> = columns
        .into_iter()
        .map(|(name, values)| {
            Series::new(
                name.into(),
                values.iter().copied().map(String::from).collect::<Vec<_>>(),
            )
            .into_column()
        })
        .collect();
    DataFrame::new(cols).unwrap()
}

fn column_names(df: &DataFrame) -> Vec<String> {
    df.get_column_names()
        .iter()
        .map(|name| name.as_str().to_string())
        .collect()
}

#[derive(Clone, Default)]
struct CaptureWriter {
    buffer: Arc<Mutex<Vec<u8>>>,
}

impl CaptureWriter {
    fn contents(&self) -> String {
        String::from_utf8(self.buffer.lock().unwrap().clone()).unwrap()
    }
}

impl Write for CaptureWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.buffer.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for CaptureWriter {
    type Writer = CaptureWriter;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

/// Runs the validator with every record captured as plain text.
fn validate_logged(df: &mut DataFrame, table: &TableConfig) -> (HeaderReport, String) {
    let writer = CaptureWriter::default();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(writer.clone())
        .with_ansi(false)
        .with_max_level(tracing::Level::TRACE)
        .finish();
    let report = tracing::subscriber::with_default(subscriber, || {
        validate_column_headers(df, table).unwrap()
    });
    (report, writer.contents())
}

fn set(items: &[&str]) -> BTreeSet<String> {
    items.iter().map(|s| (*s).to_string()).collect()
}

#[test]
fn test_messy_headers_pass_after_normalization() {
    let mut df = test_df(vec![
        ("Name ", vec!["Ada", "Linus"]),
        ("AGE", vec!["36", "54"]),
        ("city!", vec!["London", "Portland"]),
    ]);
    let table = TableConfig::new(["age", "city", "name"]);

    let report = validate_column_headers(&mut df, &table).unwrap();

    assert_eq!(report.status(), 1);
    assert!(report.passed());
    assert_eq!(column_names(&df), vec!["age", "city", "name"]);
}

#[test]
fn test_reorder_keeps_rows_with_their_columns() {
    let mut df = test_df(vec![
        ("Name ", vec!["Ada", "Linus"]),
        ("AGE", vec!["36", "54"]),
    ]);
    let table = TableConfig::new(["name", "age"]);

    validate_column_headers(&mut df, &table).unwrap();

    let age = df.column("age").unwrap().str().unwrap();
    assert_eq!(age.get(0), Some("36"));
    let name = df.column("name").unwrap().str().unwrap();
    assert_eq!(name.get(1), Some("Linus"));
    assert_eq!(df.height(), 2);
}

#[test]
fn test_extra_and_missing_columns() {
    let mut df = test_df(vec![
        ("name", vec!["Ada"]),
        ("age", vec!["36"]),
        ("zipcode", vec!["N1"]),
    ]);
    let table = TableConfig::new(["name", "age", "city"]);

    let report = validate_column_headers(&mut df, &table).unwrap();

    assert_eq!(report.status(), 0);
    assert_eq!(report.extra, set(&["zipcode"]));
    assert_eq!(report.missing, set(&["city"]));
    assert_eq!(report.actual, vec!["age", "name", "zipcode"]);
    assert_eq!(report.expected, vec!["age", "city", "name"]);
}

#[test]
fn test_expected_columns_are_lowercased() {
    let mut df = test_df(vec![("order_id", vec!["1"]), ("amount", vec!["9.5"])]);
    let table = TableConfig::named("orders", ["Order_ID", "AMOUNT"]);

    let report = validate_column_headers(&mut df, &table).unwrap();

    assert!(report.passed());
    assert_eq!(report.table, "'orders'");
}

#[test]
fn test_fewer_columns_than_expected() {
    let mut df = test_df(vec![("name", vec!["Ada"])]);
    let table = TableConfig::new(["name", "age"]);

    let report = validate_column_headers(&mut df, &table).unwrap();

    assert!(!report.passed());
    assert!(report.extra.is_empty());
    assert_eq!(report.missing, set(&["age"]));
}

#[test]
fn test_result_is_independent_of_column_order() {
    let orders = [
        vec!["zipcode", "name", "age"],
        vec!["age", "zipcode", "name"],
        vec!["name", "age", "zipcode"],
    ];
    let table = TableConfig::new(["name", "age", "city"]);
    let mut reports = Vec::new();
    for order in orders {
        let mut df = test_df(order.into_iter().map(|name| (name, vec!["x"])).collect());
        reports.push(validate_column_headers(&mut df, &table).unwrap());
        assert_eq!(column_names(&df), vec!["age", "name", "zipcode"]);
    }
    assert!(reports.windows(2).all(|pair| pair[0] == pair[1]));
}

#[test]
fn test_colliding_headers_are_rejected() {
    let mut df = test_df(vec![("Name", vec!["Ada"]), ("name!", vec!["Linus"])]);
    let table = TableConfig::new(["name"]);

    let err = validate_column_headers(&mut df, &table).unwrap_err();

    assert!(matches!(err, ValidateError::DuplicateColumn { ref column, .. } if column == "name"));
    // Headers are left as loaded when validation is refused.
    assert_eq!(column_names(&df), vec!["Name", "name!"]);
}

#[test]
fn test_empty_dataset_is_rejected() {
    let mut df = DataFrame::empty();
    let table = TableConfig::new(["name"]);

    let err = validate_column_headers(&mut df, &table).unwrap_err();

    assert!(matches!(err, ValidateError::EmptyDataset));
}

#[test]
fn test_empty_expected_columns_are_rejected() {
    let mut df = test_df(vec![("name", vec!["Ada"])]);
    let table = TableConfig::new(Vec::<String>::new());

    let err = validate_column_headers(&mut df, &table).unwrap_err();

    assert!(matches!(err, ValidateError::NoExpectedColumns { .. }));
}

#[test]
fn test_report_serializes_for_machine_output() {
    let mut df = test_df(vec![("name", vec!["Ada"]), ("zipcode", vec!["N1"])]);
    let table = TableConfig::new(["name", "city"]);

    let report = validate_column_headers(&mut df, &table).unwrap();
    let json = serde_json::to_value(&report).unwrap();

    assert_eq!(json["extra"], serde_json::json!(["zipcode"]));
    assert_eq!(json["missing"], serde_json::json!(["city"]));
    assert_eq!(json["table"], "<root>");
}

#[test]
fn test_mismatch_logs_column_lists_at_info() {
    let mut df = test_df(vec![
        ("Name", vec!["Ada"]),
        ("AGE", vec!["36"]),
        ("Zip Code", vec!["N1"]),
    ]);
    let table = TableConfig::new(["name", "age", "city"]);

    let (report, logs) = validate_logged(&mut df, &table);

    assert!(!report.passed());
    let lines: Vec<&str> = logs.lines().collect();
    let dataframe_line = lines
        .iter()
        .find(|line| line.contains("DataFrame columns:"))
        .unwrap_or_else(|| panic!("no DataFrame columns record in: {logs}"));
    assert!(dataframe_line.contains("INFO"));
    assert!(dataframe_line.contains(r#"["age", "name", "zip_code"]"#));
    let expected_line = lines
        .iter()
        .find(|line| line.contains("Expected columns:"))
        .unwrap_or_else(|| panic!("no Expected columns record in: {logs}"));
    assert!(expected_line.contains("INFO"));
    assert!(expected_line.contains(r#"["age", "city", "name"]"#));
}

#[test]
fn test_passing_validation_emits_no_records() {
    let mut df = test_df(vec![("Name ", vec!["Ada"]), ("AGE", vec!["36"])]);
    let table = TableConfig::new(["name", "age"]);

    let (report, logs) = validate_logged(&mut df, &table);

    assert!(report.passed());
    assert!(logs.is_empty(), "unexpected records: {logs}");
}

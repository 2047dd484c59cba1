//! Column header validation against a table record.

use std::collections::{BTreeMap, BTreeSet};

use polars::prelude::DataFrame;
use tracing::info;

use colcheck_config::TableConfig;

use crate::error::{Result, ValidateError};
use crate::normalize::normalize_headers;
use crate::report::HeaderReport;

/// Normalizes a DataFrame's headers in place and compares them with the
/// table's expected columns.
///
/// The DataFrame is modified: every column is renamed to its normalized form
/// and the columns are reordered ascending by name. Row data is untouched.
///
/// A mismatch is returned as a failing [`HeaderReport`], with the full column
/// lists logged at `INFO` level. Errors are reserved for precondition
/// violations: an empty dataset, an empty column list, or raw headers that
/// collide after normalization.
pub fn validate_column_headers(df: &mut DataFrame, table: &TableConfig) -> Result<HeaderReport> {
    if table.columns.is_empty() {
        return Err(ValidateError::NoExpectedColumns {
            table: table.label(),
        });
    }
    if df.width() == 0 {
        return Err(ValidateError::EmptyDataset);
    }

    let raw: Vec<String> = df
        .get_column_names()
        .iter()
        .map(|name| name.as_str().to_string())
        .collect();
    let normalized = normalize_headers(&raw);
    check_collisions(&raw, &normalized)?;
    df.set_column_names(normalized.iter().map(String::as_str))?;

    let mut sorted = normalized;
    sorted.sort();
    *df = df.select(sorted.iter().map(String::as_str))?;

    let report = compare_headers(&table.label(), &sorted, &table.columns);
    if !report.passed() {
        info!(
            table = %report.table,
            extra = ?report.extra,
            missing = ?report.missing,
            "column header mismatch"
        );
        info!("DataFrame columns: {:?}", report.actual);
        info!("Expected columns: {:?}", report.expected);
    }
    Ok(report)
}

/// Compares header lists without touching a DataFrame.
///
/// Both sides are lowercased and sorted ascending before the element-wise
/// comparison. `actual` is not otherwise normalized; pass it through
/// [`normalize_headers`] first when it holds raw headers.
pub fn compare_headers<A, E>(table: &str, actual: &[A], expected: &[E]) -> HeaderReport
where
    A: AsRef<str>,
    E: AsRef<str>,
{
    let actual = sorted_lowercase(actual);
    let expected = sorted_lowercase(expected);

    let actual_set: BTreeSet<&String> = actual.iter().collect();
    let expected_set: BTreeSet<&String> = expected.iter().collect();
    let extra = actual_set
        .difference(&expected_set)
        .map(|name| (*name).clone())
        .collect();
    let missing = expected_set
        .difference(&actual_set)
        .map(|name| (*name).clone())
        .collect();

    HeaderReport {
        table: table.to_string(),
        actual,
        expected,
        extra,
        missing,
    }
}

fn sorted_lowercase<S: AsRef<str>>(names: &[S]) -> Vec<String> {
    let mut lowered: Vec<String> = names
        .iter()
        .map(|name| name.as_ref().to_lowercase())
        .collect();
    lowered.sort();
    lowered
}

fn check_collisions(raw: &[String], normalized: &[String]) -> Result<()> {
    let mut sources: BTreeMap<&str, Vec<&str>> = BTreeMap::new();
    for (original, name) in raw.iter().zip(normalized) {
        sources
            .entry(name.as_str())
            .or_default()
            .push(original.as_str());
    }
    match sources.into_iter().find(|(_, originals)| originals.len() > 1) {
        Some((column, originals)) => Err(ValidateError::DuplicateColumn {
            column: column.to_string(),
            sources: originals.into_iter().map(str::to_string).collect(),
        }),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compare_headers_pass() {
        let report = compare_headers("<root>", &["name", "age", "city"], &["City", "AGE", "name"]);
        assert!(report.passed());
        assert_eq!(report.actual, vec!["age", "city", "name"]);
        assert_eq!(report.expected, vec!["age", "city", "name"]);
        assert!(report.extra.is_empty());
        assert!(report.missing.is_empty());
    }

    #[test]
    fn test_compare_headers_extra_and_missing() {
        let report = compare_headers("<root>", &["name", "age", "zipcode"], &["name", "age", "city"]);
        assert_eq!(report.status(), 0);
        assert_eq!(report.extra, BTreeSet::from(["zipcode".to_string()]));
        assert_eq!(report.missing, BTreeSet::from(["city".to_string()]));
    }

    #[test]
    fn test_compare_headers_length_mismatch_only() {
        let report = compare_headers("<root>", &["age", "age"], &["age"]);
        assert!(!report.passed());
        assert!(report.extra.is_empty());
        assert!(report.missing.is_empty());
    }

    #[test]
    fn test_check_collisions() {
        let raw = vec!["Name".to_string(), "AGE".to_string(), "name ".to_string()];
        let normalized = normalize_headers(&raw);
        let err = check_collisions(&raw, &normalized).unwrap_err();
        match err {
            ValidateError::DuplicateColumn { column, sources } => {
                assert_eq!(column, "name");
                assert_eq!(sources, vec!["Name", "name "]);
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}

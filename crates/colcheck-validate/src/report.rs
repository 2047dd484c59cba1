//! Header comparison result.

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Outcome of comparing a dataset's headers with the expected columns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeaderReport {
    /// Table label from the configuration (`<root>` for an implicit table).
    pub table: String,
    /// Normalized dataset columns, sorted ascending.
    pub actual: Vec<String>,
    /// Lowercased expected columns, sorted ascending.
    pub expected: Vec<String>,
    /// Columns present in the dataset but not in the configuration.
    pub extra: BTreeSet<String>,
    /// Columns present in the configuration but not in the dataset.
    pub missing: BTreeSet<String>,
}

impl HeaderReport {
    /// Returns true if the sorted headers match element-wise, length included.
    pub fn passed(&self) -> bool {
        self.actual.len() == self.expected.len() && self.actual == self.expected
    }

    /// `1` on pass, `0` on mismatch.
    pub fn status(&self) -> u8 {
        u8::from(self.passed())
    }

    /// Headers that appear in both lists.
    pub fn matched(&self) -> BTreeSet<&str> {
        let expected: BTreeSet<&str> = self.expected.iter().map(String::as_str).collect();
        self.actual
            .iter()
            .map(String::as_str)
            .filter(|name| expected.contains(name))
            .collect()
    }

    /// Returns true if the sets agree but the counts do not, i.e. a header
    /// occurs more often on one side than the other.
    pub fn has_count_mismatch(&self) -> bool {
        !self.passed() && self.extra.is_empty() && self.missing.is_empty()
    }
}

impl fmt::Display for HeaderReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.passed() {
            return write!(f, "Column name and column length validation passed");
        }
        writeln!(f, "Column name and column length validation failed")?;
        writeln!(
            f,
            "Columns present in the file but not in the YAML configuration: {}",
            format_set(&self.extra)
        )?;
        write!(
            f,
            "Columns present in the YAML configuration but not in the file: {}",
            format_set(&self.missing)
        )
    }
}

fn format_set(values: &BTreeSet<String>) -> String {
    let quoted: Vec<String> = values.iter().map(|value| format!("'{value}'")).collect();
    format!("[{}]", quoted.join(", "))
}

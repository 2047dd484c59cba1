//! Parsed configuration document and table records.

use serde::Deserialize;
use serde_yaml::Value;

use crate::error::{ConfigError, Result};

/// Field of a table record that lists the expected column names.
pub const COLUMNS_KEY: &str = "columns";

/// A parsed configuration document, unchanged in structure.
///
/// The document is only inspected when a table record is requested, so a
/// document with an unexpected shape still loads.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigDocument {
    root: Value,
}

/// Expected columns for one table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableConfig {
    /// Table name, `None` for a document whose root is the table record.
    pub name: Option<String>,
    /// Expected column names in document order.
    pub columns: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct TableRecord {
    #[serde(default)]
    columns: Option<Vec<String>>,
}

impl ConfigDocument {
    /// Wraps an already parsed YAML value.
    pub fn new(root: Value) -> Self {
        Self { root }
    }

    /// The raw document root.
    pub fn root(&self) -> &Value {
        &self.root
    }

    /// Consumes the document, returning the raw root.
    pub fn into_value(self) -> Value {
        self.root
    }

    /// Returns true if the root itself carries a `columns` field.
    pub fn is_single_table(&self) -> bool {
        self.root.get(COLUMNS_KEY).is_some()
    }

    /// Names of the table records in document order.
    ///
    /// A key counts as a table when its value is a mapping with a `columns`
    /// field. Returns an empty list for a single implicit table.
    pub fn table_names(&self) -> Vec<String> {
        if self.is_single_table() {
            return Vec::new();
        }
        let Some(mapping) = self.root.as_mapping() else {
            return Vec::new();
        };
        mapping
            .iter()
            .filter(|(_, value)| value.get(COLUMNS_KEY).is_some())
            .filter_map(|(key, _)| key.as_str().map(str::to_string))
            .collect()
    }

    /// Resolves the record for a table.
    ///
    /// With `None` the root record is used, or the only named table when the
    /// document declares exactly one.
    pub fn table(&self, name: Option<&str>) -> Result<TableConfig> {
        match name {
            Some(name) => {
                let record = self
                    .root
                    .as_mapping()
                    .and_then(|mapping| mapping.get(name))
                    .ok_or_else(|| ConfigError::TableNotFound {
                        table: name.to_string(),
                        available: self.available_tables(),
                    })?;
                parse_record(Some(name), record)
            }
            None if self.is_single_table() => parse_record(None, &self.root),
            None => {
                let names = self.table_names();
                match names.as_slice() {
                    [] => Err(ConfigError::MissingColumns {
                        table: table_label(None),
                    }),
                    [only] => self.table(Some(only.as_str())),
                    _ => Err(ConfigError::AmbiguousTable { count: names.len() }),
                }
            }
        }
    }

    fn available_tables(&self) -> String {
        let names = self.table_names();
        if names.is_empty() {
            "none".to_string()
        } else {
            names.join(", ")
        }
    }
}

impl TableConfig {
    /// Creates an unnamed table record.
    pub fn new<I, S>(columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: None,
            columns: columns.into_iter().map(Into::into).collect(),
        }
    }

    /// Creates a named table record.
    pub fn named<I, S>(name: impl Into<String>, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: Some(name.into()),
            ..Self::new(columns)
        }
    }

    /// Label used in diagnostics.
    pub fn label(&self) -> String {
        table_label(self.name.as_deref())
    }
}

fn table_label(name: Option<&str>) -> String {
    match name {
        Some(name) => format!("'{name}'"),
        None => "<root>".to_string(),
    }
}

fn parse_record(name: Option<&str>, record: &Value) -> Result<TableConfig> {
    let parsed: TableRecord =
        serde_yaml::from_value(record.clone()).map_err(|e| ConfigError::InvalidTable {
            table: table_label(name),
            reason: e.to_string(),
        })?;
    let columns = parsed.columns.ok_or_else(|| ConfigError::MissingColumns {
        table: table_label(name),
    })?;
    if columns.is_empty() {
        return Err(ConfigError::EmptyColumns {
            table: table_label(name),
        });
    }
    Ok(TableConfig {
        name: name.map(str::to_string),
        columns,
    })
}

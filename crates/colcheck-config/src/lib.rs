//! Column schema configuration.
//!
//! Loads a YAML document that declares the expected columns of one or more
//! tables and resolves the record for a single table.
//!
//! Two document shapes are accepted:
//!
//! ```yaml
//! # single implicit table
//! columns: [name, age, city]
//! ```
//!
//! ```yaml
//! # named tables
//! customers:
//!   columns: [name, age, city]
//! orders:
//!   columns: [order_id, amount]
//! ```
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use colcheck_config::read_config_file;
//!
//! let document = read_config_file(Path::new("schema.yaml"))?;
//! let table = document.table(Some("customers"))?;
//! assert_eq!(table.columns, vec!["name", "age", "city"]);
//! ```

mod document;
mod error;
mod loader;

// === Error Types ===
pub use error::{ConfigError, Result};

// === Document Model ===
pub use document::{COLUMNS_KEY, ConfigDocument, TableConfig};

// === Loading ===
pub use loader::{parse_config_str, read_config_file};

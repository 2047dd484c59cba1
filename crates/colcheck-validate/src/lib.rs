//! Column header normalization and validation.
//!
//! Normalizes the headers of a Polars [`DataFrame`](polars::prelude::DataFrame)
//! and checks them against the expected columns of a
//! [`TableConfig`](colcheck_config::TableConfig).
//!
//! # Example
//!
//! ```ignore
//! use colcheck_config::read_config_file;
//! use colcheck_validate::validate_column_headers;
//!
//! let table = read_config_file(Path::new("schema.yaml"))?.table(None)?;
//! let report = validate_column_headers(&mut df, &table)?;
//! println!("{report}");
//! std::process::exit(if report.passed() { 0 } else { 1 });
//! ```

mod error;
mod report;
mod validator;

pub mod normalize;

// === Error Types ===
pub use error::{Result, ValidateError};

// === Normalization ===
pub use normalize::{
    SEPARATOR, is_normalized, normalize_header, normalize_headers, replace_consecutive_chars,
};

// === Validation ===
pub use report::HeaderReport;
pub use validator::{compare_headers, validate_column_headers};

//! Dataset ingestion for header validation.
//!
//! Loads CSV files into Polars DataFrames. Only a single header row is
//! supported, and a header row that repeats a name is rejected.
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use colcheck_ingest::read_csv_table;
//!
//! let df = read_csv_table(Path::new("data/customers.csv"))?;
//! ```

mod error;
mod reader;

// === Error Types ===
pub use error::{IngestError, Result};

// === CSV Reading ===
pub use reader::{
    MAX_CSV_FILE_SIZE, check_file_size, check_file_size_with_limit, read_csv_headers,
    read_csv_table, validate_encoding,
};

//! CSV file reading.

use std::collections::BTreeMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use polars::prelude::{CsvReadOptions, DataFrame, SerReader};

use crate::error::{IngestError, Result};

/// Largest CSV file accepted for loading (500 MB).
pub const MAX_CSV_FILE_SIZE: u64 = 500 * 1024 * 1024;

/// Rows Polars inspects when inferring column types.
const INFER_SCHEMA_ROWS: usize = 100;

/// Rejects files larger than [`MAX_CSV_FILE_SIZE`].
pub fn check_file_size(path: &Path) -> Result<()> {
    check_file_size_with_limit(path, MAX_CSV_FILE_SIZE)
}

/// Rejects files larger than `max_size` bytes.
pub fn check_file_size_with_limit(path: &Path, max_size: u64) -> Result<()> {
    let size = std::fs::metadata(path)
        .map_err(|e| IngestError::from_io(path, e))?
        .len();
    if size > max_size {
        return Err(IngestError::FileTooLarge {
            path: path.to_path_buf(),
            size,
            max_size,
        });
    }
    Ok(())
}

/// Rejects UTF-16 input by its byte order mark.
pub fn validate_encoding(path: &Path) -> Result<()> {
    let mut file = File::open(path).map_err(|e| IngestError::from_io(path, e))?;
    let mut bom = [0u8; 2];
    let read = file.read(&mut bom).map_err(|e| IngestError::from_io(path, e))?;

    let encoding = match (read, bom) {
        (2, [0xFF, 0xFE]) => "UTF-16 LE",
        (2, [0xFE, 0xFF]) => "UTF-16 BE",
        _ => return Ok(()),
    };
    Err(IngestError::UnsupportedEncoding {
        path: path.to_path_buf(),
        encoding,
    })
}

/// Reads the header row of a CSV file as written.
///
/// Quoted fields are unquoted and a UTF-8 BOM is dropped. Surrounding
/// whitespace is kept.
pub fn read_csv_headers(path: &Path) -> Result<Vec<String>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)
        .map_err(|e| IngestError::CsvHeader {
            path: path.to_path_buf(),
            source: e,
        })?;
    let headers = reader.headers().map_err(|e| IngestError::CsvHeader {
        path: path.to_path_buf(),
        source: e,
    })?;

    if headers.iter().all(|field| field.trim().is_empty()) {
        return Err(IngestError::EmptyCsv {
            path: path.to_path_buf(),
        });
    }
    Ok(headers.iter().map(str::to_string).collect())
}

/// Reads a CSV file with a single header row into a Polars DataFrame.
///
/// A header row that repeats a name is rejected before Polars reads the
/// file, since Polars would otherwise invent a suffixed name for the copy.
pub fn read_csv_table(path: &Path) -> Result<DataFrame> {
    check_file_size(path)?;
    validate_encoding(path)?;
    let headers = read_csv_headers(path)?;
    check_unique_headers(path, &headers)?;

    let df = CsvReadOptions::default()
        .with_has_header(true)
        .with_infer_schema_length(Some(INFER_SCHEMA_ROWS))
        .try_into_reader_with_file_path(Some(path.to_path_buf()))
        .and_then(SerReader::finish)
        .map_err(|e| IngestError::CsvParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

    tracing::debug!(
        path = %path.display(),
        columns = df.width(),
        rows = df.height(),
        "loaded CSV"
    );
    Ok(df)
}

fn check_unique_headers(path: &Path, headers: &[String]) -> Result<()> {
    let mut seen: BTreeMap<&str, usize> = BTreeMap::new();
    for name in headers {
        *seen.entry(name.as_str()).or_default() += 1;
    }
    match seen.into_iter().find(|(_, count)| *count > 1) {
        Some((column, count)) => Err(IngestError::DuplicateColumn {
            path: path.to_path_buf(),
            column: column.to_string(),
            count,
        }),
        None => Ok(()),
    }
}

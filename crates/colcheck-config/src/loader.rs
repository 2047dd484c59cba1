//! YAML document loading.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde_yaml::Value;

use crate::document::ConfigDocument;
use crate::error::{ConfigError, Result};

/// Reads and parses a YAML configuration file.
///
/// The file handle is released before this function returns, whether parsing
/// succeeds or not. A malformed document is logged at `ERROR` level and
/// returned as [`ConfigError::Parse`].
pub fn read_config_file(path: &Path) -> Result<ConfigDocument> {
    let file = File::open(path).map_err(|e| ConfigError::Read {
        path: path.to_path_buf(),
        source: e,
    })?;
    let parsed = serde_yaml::from_reader::<_, Value>(BufReader::new(file));
    into_document(parsed, path)
}

/// Parses YAML text already held in memory.
///
/// `origin` names the source in diagnostics.
pub fn parse_config_str(content: &str, origin: &Path) -> Result<ConfigDocument> {
    into_document(serde_yaml::from_str::<Value>(content), origin)
}

fn into_document(
    parsed: std::result::Result<Value, serde_yaml::Error>,
    path: &Path,
) -> Result<ConfigDocument> {
    match parsed {
        Ok(root) => {
            tracing::debug!(path = %path.display(), "loaded config");
            Ok(ConfigDocument::new(root))
        }
        Err(source) => {
            tracing::error!(
                path = %path.display(),
                error = %source,
                "Error occurred while parsing the YAML file"
            );
            Err(ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            })
        }
    }
}

//! Reader configuration files.
//!
//! A config file is a JSON [`ReaderParams`] document. Every field is optional:
//!
//! ```json
//! { "brightest": 240, "prefer_white": true, "bounds": { "ystart": 100 } }
//! ```

use std::path::Path;

use punchcard_reader::ReaderParams;

use crate::ReadError;

/// Load reader parameters from a JSON file.
pub fn load_params(path: impl AsRef<Path>) -> Result<ReaderParams, ReadError> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path).map_err(|source| ReadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&text).map_err(|source| ReadError::Config {
        path: path.to_path_buf(),
        source,
    })
}

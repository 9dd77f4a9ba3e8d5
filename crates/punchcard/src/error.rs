use std::path::PathBuf;

use punchcard_reader::ParamsError;

/// Errors produced while loading images or configuration.
#[derive(thiserror::Error, Debug)]
pub enum ReadError {
    #[cfg(feature = "image")]
    #[error("failed to decode image {path}: {source}")]
    Image {
        path: PathBuf,
        #[source]
        source: ::image::ImageError,
    },

    #[cfg(feature = "image")]
    #[error("failed to write image {path}: {source}")]
    Save {
        path: PathBuf,
        #[source]
        source: ::image::ImageError,
    },

    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid reader config {path}: {source}")]
    Config {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error(transparent)]
    Params(#[from] ParamsError),
}

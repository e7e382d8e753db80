use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum MediaError {
    #[error("failed to create directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

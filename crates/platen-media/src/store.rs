use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::MediaError;

/// Subdirectory of the media root that holds generated documents.
pub const GENERATED_PDF_DIR: &str = "generated_pdf";

/// A media directory on local disk.
///
/// Owns the `generated_pdf/` layout under its root and creates that
/// subdirectory on demand. Paths outside the root (caller overrides) are
/// written as-given; a missing parent there is the caller's error to see.
#[derive(Debug, Clone)]
pub struct MediaStore {
    media_root: PathBuf,
}

impl MediaStore {
    pub fn new(media_root: impl Into<PathBuf>) -> Self {
        Self {
            media_root: media_root.into(),
        }
    }

    pub fn media_root(&self) -> &Path {
        &self.media_root
    }

    /// Default destination for a generated file: `<root>/generated_pdf/<filename>`.
    pub fn generated_pdf_path(&self, filename: &str) -> PathBuf {
        self.media_root.join(GENERATED_PDF_DIR).join(filename)
    }

    /// Write bytes to the default location for `filename`, creating the
    /// `generated_pdf` directory if needed. Returns the written path.
    pub fn write_generated(&self, filename: &str, bytes: &[u8]) -> Result<PathBuf, MediaError> {
        let dir = self.media_root.join(GENERATED_PDF_DIR);
        std::fs::create_dir_all(&dir).map_err(|source| MediaError::CreateDir {
            path: dir.clone(),
            source,
        })?;

        let path = dir.join(filename);
        write_bytes(&path, bytes)?;
        Ok(path)
    }

    /// Write bytes to an explicit path, no directory creation.
    pub fn write_to(&self, path: &Path, bytes: &[u8]) -> Result<(), MediaError> {
        write_bytes(path, bytes)
    }
}

/// Raw binary write with a scoped handle; the file is closed on every exit
/// path, including a failed write.
fn write_bytes(path: &Path, bytes: &[u8]) -> Result<(), MediaError> {
    let mut file = File::create(path).map_err(|source| MediaError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    file.write_all(bytes).map_err(|source| MediaError::Write {
        path: path.to_path_buf(),
        source,
    })?;

    tracing::debug!(path = %path.display(), len = bytes.len(), "wrote generated file");
    Ok(())
}

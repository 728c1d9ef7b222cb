//! Filesystem photo source adapter

use std::path::Path;

use async_trait::async_trait;
use tokio::fs;

use crate::application::ports::{PhotoReadError, PhotoSource};
use crate::domain::photo::{ImageMimeType, PhotoData};

/// Photo source that reads image files from disk.
///
/// The accepted formats are fixed by [`ImageMimeType`]; anything else is
/// rejected by extension before the file is read.
pub struct FsPhotoSource;

impl FsPhotoSource {
    /// Create a new filesystem photo source
    pub fn new() -> Self {
        Self
    }
}

impl Default for FsPhotoSource {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PhotoSource for FsPhotoSource {
    async fn read_photo(&self, path: &Path) -> Result<PhotoData, PhotoReadError> {
        if !path.exists() {
            return Err(PhotoReadError::NotFound(path.display().to_string()));
        }

        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .unwrap_or("")
            .to_string();

        let mime_type = ImageMimeType::from_path(path).ok_or_else(|| {
            PhotoReadError::UnsupportedFormat {
                extension,
                supported: ImageMimeType::supported_extensions().join(", "),
            }
        })?;

        let data = fs::read(path)
            .await
            .map_err(|e| PhotoReadError::ReadFailed(e.to_string()))?;

        Ok(PhotoData::new(data, mime_type))
    }
}

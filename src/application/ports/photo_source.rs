//! Photo source port interface

use async_trait::async_trait;
use std::path::Path;
use thiserror::Error;

use crate::domain::photo::PhotoData;

/// Photo read errors
#[derive(Debug, Clone, Error)]
pub enum PhotoReadError {
    #[error("Photo not found: {0}")]
    NotFound(String),

    #[error("Unsupported file type \"{extension}\". Supported: {supported}")]
    UnsupportedFormat {
        extension: String,
        supported: String,
    },

    #[error("Failed to read photo: {0}")]
    ReadFailed(String),
}

/// Port for loading a user-chosen photo.
///
/// The awaitable counterpart of a host file picker: the implementation
/// restricts selection to image MIME types and hands back the encoded
/// photo, but performs no validation of the image content itself.
#[async_trait]
pub trait PhotoSource: Send + Sync {
    /// Read a photo from the given path.
    ///
    /// # Arguments
    /// * `path` - Location of the photo file
    ///
    /// # Returns
    /// The photo data with its MIME type, or an error
    async fn read_photo(&self, path: &Path) -> Result<PhotoData, PhotoReadError>;
}

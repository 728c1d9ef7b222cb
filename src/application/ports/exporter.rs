//! Poem export port interface

use async_trait::async_trait;
use std::path::PathBuf;
use thiserror::Error;

/// Export errors
#[derive(Debug, Clone, Error)]
pub enum ExportError {
    #[error("Failed to create export directory: {0}")]
    CreateDirFailed(String),

    #[error("Failed to write poem file: {0}")]
    WriteFailed(String),
}

/// Port for exporting the poem as a plain-text artifact
#[async_trait]
pub trait PoemExporter: Send + Sync {
    /// Write the poem text to the export location.
    ///
    /// # Arguments
    /// * `text` - The poem text
    ///
    /// # Returns
    /// The path of the written file, or an error
    async fn export(&self, text: &str) -> Result<PathBuf, ExportError>;
}

/// Blanket implementation for boxed exporter types
#[async_trait]
impl PoemExporter for Box<dyn PoemExporter> {
    async fn export(&self, text: &str) -> Result<PathBuf, ExportError> {
        self.as_ref().export(text).await
    }
}

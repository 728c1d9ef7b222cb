//! Filesystem poem exporter adapter

use std::path::PathBuf;

use async_trait::async_trait;
use tokio::fs;

use crate::application::ports::{ExportError, PoemExporter};

/// Fixed output filename for exported poems
pub const POEM_FILENAME: &str = "poem.txt";

/// Poem exporter that writes `poem.txt` into a target directory.
///
/// Defaults to the platform downloads directory, falling back to the
/// current directory when none is known. An existing `poem.txt` is
/// overwritten.
pub struct FsPoemExporter {
    dir: PathBuf,
}

impl FsPoemExporter {
    /// Create an exporter targeting the platform downloads directory
    pub fn new() -> Self {
        let dir = dirs::download_dir().unwrap_or_else(|| PathBuf::from("."));
        Self { dir }
    }

    /// Create an exporter targeting a custom directory
    pub fn with_dir(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// The path `export` will write to
    pub fn target_path(&self) -> PathBuf {
        self.dir.join(POEM_FILENAME)
    }
}

impl Default for FsPoemExporter {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PoemExporter for FsPoemExporter {
    async fn export(&self, text: &str) -> Result<PathBuf, ExportError> {
        fs::create_dir_all(&self.dir)
            .await
            .map_err(|e| ExportError::CreateDirFailed(e.to_string()))?;

        let path = self.target_path();
        fs::write(&path, text)
            .await
            .map_err(|e| ExportError::WriteFailed(e.to_string()))?;

        Ok(path)
    }
}

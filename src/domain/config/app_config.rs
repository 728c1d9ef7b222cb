//! Application configuration value object

use serde::{Deserialize, Serialize};

use crate::domain::poem::PoemStyle;

/// Default Gemini model for poem generation
pub const DEFAULT_MODEL: &str = "gemini-2.0-flash";

/// Application configuration.
/// All fields are optional to support partial configs and merging.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    pub api_key: Option<String>,
    pub model: Option<String>,
    pub style: Option<String>,
    pub clipboard: Option<bool>,
    pub download: Option<bool>,
    pub download_dir: Option<String>,
    pub notify: Option<bool>,
}

impl AppConfig {
    /// Create config with default values
    pub fn defaults() -> Self {
        Self {
            api_key: None,
            model: Some(DEFAULT_MODEL.to_string()),
            style: Some("free-verse".to_string()),
            clipboard: Some(false),
            download: Some(false),
            download_dir: None,
            notify: Some(false),
        }
    }

    /// Create an empty config (all None)
    pub fn empty() -> Self {
        Self::default()
    }

    /// Merge this config with another, where other takes precedence.
    /// Only non-None values from other will override this.
    pub fn merge(self, other: Self) -> Self {
        Self {
            api_key: other.api_key.or(self.api_key),
            model: other.model.or(self.model),
            style: other.style.or(self.style),
            clipboard: other.clipboard.or(self.clipboard),
            download: other.download.or(self.download),
            download_dir: other.download_dir.or(self.download_dir),
            notify: other.notify.or(self.notify),
        }
    }

    /// Get model name, or the default model if not set
    pub fn model_or_default(&self) -> &str {
        self.model.as_deref().unwrap_or(DEFAULT_MODEL)
    }

    /// Get style as parsed PoemStyle, or default if not set/invalid
    pub fn style_or_default(&self) -> PoemStyle {
        self.style
            .as_ref()
            .and_then(|s| s.parse().ok())
            .unwrap_or_default()
    }

    /// Get clipboard setting, or false if not set
    pub fn clipboard_or_default(&self) -> bool {
        self.clipboard.unwrap_or(false)
    }

    /// Get download setting, or false if not set
    pub fn download_or_default(&self) -> bool {
        self.download.unwrap_or(false)
    }

    /// Get notify setting, or false if not set
    pub fn notify_or_default(&self) -> bool {
        self.notify.unwrap_or(false)
    }
}

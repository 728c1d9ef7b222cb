//! Port interfaces (traits) for external systems
//!
//! These traits define the boundaries between the application
//! and infrastructure layers.

pub mod clipboard;
pub mod config;
pub mod exporter;
pub mod generator;
pub mod notifier;
pub mod photo_source;

// Re-export common types
pub use clipboard::{Clipboard, ClipboardError};
pub use config::ConfigStore;
pub use exporter::{ExportError, PoemExporter};
pub use generator::{GenerationError, PoemGenerator};
pub use notifier::{NotificationError, Notifier, Severity};
pub use photo_source::{PhotoReadError, PhotoSource};

//! Infrastructure layer - Adapter implementations
//!
//! Contains concrete implementations of the port interfaces,
//! integrating with external systems like the filesystem, Gemini API,
//! clipboard, and desktop notifications.

pub mod clipboard;
pub mod config;
pub mod export;
pub mod generation;
pub mod notification;
pub mod photo;

// Re-export adapters
pub use clipboard::ArboardClipboard;
pub use config::XdgConfigStore;
pub use export::{FsPoemExporter, POEM_FILENAME};
pub use generation::GeminiPoemGenerator;
pub use notification::{NoopNotifier, NotifyRustNotifier};
pub use photo::FsPhotoSource;

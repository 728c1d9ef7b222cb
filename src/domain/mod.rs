//! Domain layer - Core business logic
//!
//! Contains value objects, entities, and domain errors.
//! This layer has no dependencies on external systems.

pub mod config;
pub mod error;
pub mod photo;
pub mod poem;
pub mod session;

// Re-export common types
pub use config::AppConfig;
pub use error::*;
pub use photo::{ImageMimeType, PhotoData};
pub use poem::{PoemPrompt, PoemStyle};
pub use session::PoemSession;

//! Poem generation port interface

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::photo::PhotoData;
use crate::domain::poem::PoemPrompt;

/// Generation errors
#[derive(Debug, Clone, Error)]
pub enum GenerationError {
    #[error("Invalid API key")]
    InvalidApiKey,

    #[error("Rate limit exceeded. Please try again later.")]
    RateLimited,

    #[error("Empty poem response")]
    EmptyResponse,

    #[error("API request failed: {0}")]
    RequestFailed(String),

    #[error("Failed to parse API response: {0}")]
    ParseError(String),

    #[error("API error: {0}")]
    ApiError(String),
}

/// Port for the remote poem generation capability.
///
/// The workflow treats the capability as opaque: a photo goes in, poem
/// text comes out, and any failure is carried as a displayable message.
#[async_trait]
pub trait PoemGenerator: Send + Sync {
    /// Generate a poem from a photo.
    ///
    /// # Arguments
    /// * `photo` - The selected photo
    /// * `prompt` - The system prompt with style guidance
    ///
    /// # Returns
    /// The poem text or an error
    async fn generate(
        &self,
        photo: &PhotoData,
        prompt: &PoemPrompt,
    ) -> Result<String, GenerationError>;
}

//! Poem prompt value object

use super::style::PoemStyle;

/// Base system instruction for all poem generations
const BASE_INSTRUCTION: &str = r#"You are a poet that writes an original poem inspired by a supplied photo.

Instructions:
- Ground the poem in concrete details visible in the photo
- Do NOT describe the photo literally or enumerate its contents
- Output ONLY the poem text, with line breaks preserved
- Do NOT include a title, meta-commentary, or explanations"#;

/// Value object representing the complete system prompt for poem generation.
/// Combines base instructions with style-specific guidance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PoemPrompt {
    content: String,
}

impl PoemPrompt {
    /// Build a system prompt with style-specific instructions
    pub fn build(style: PoemStyle) -> Self {
        let content = format!(
            "{}\n\nStyle: {}\n{}",
            BASE_INSTRUCTION,
            style.label(),
            style.guidance()
        );
        Self { content }
    }

    /// Build a system prompt with the default (free verse) style
    pub fn default_prompt() -> Self {
        Self::build(PoemStyle::default())
    }

    /// Get the prompt content
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Consume and return the content
    pub fn into_content(self) -> String {
        self.content
    }
}

impl Default for PoemPrompt {
    fn default() -> Self {
        Self::default_prompt()
    }
}

//! Poem domain module

mod prompt;
mod style;

pub use prompt::PoemPrompt;
pub use style::{PoemStyle, ALL_STYLES};

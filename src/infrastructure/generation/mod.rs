//! Poem generation infrastructure module

mod gemini;

pub use gemini::GeminiPoemGenerator;

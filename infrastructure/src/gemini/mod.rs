//! Gemini adapter: File API uploads and `generateContent`

mod client;
pub mod error;
pub mod types;

pub use client::{GeminiClient, GeminiConfig};
pub use error::{GeminiError, Result};

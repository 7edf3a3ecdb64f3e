//! Infrastructure layer for video-summarizer
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod config;
pub mod gemini;
pub mod logging;
pub mod media;
pub mod tools;

// Re-export commonly used types
pub use config::{
    ConfigLoader, ConfigValidationError, FileAgentConfig, FileConfig, FileGeminiConfig,
    FileLoggingConfig, FilePollingConfig, FileServerConfig,
};
pub use gemini::{GeminiClient, GeminiConfig, GeminiError};
pub use logging::JsonlAnalysisLogger;
pub use media::{StagingError, stage_bytes, stage_file};
pub use tools::{DEFAULT_MAX_SEARCH_RESULTS, WebToolExecutor, web_tool_spec};

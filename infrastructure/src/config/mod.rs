//! Configuration file loading for video-summarizer
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `VIDEO_SUMMARIZER_*` environment variables
//! 2. `--config <path>` specified file
//! 3. Project root: `./video-summarizer.toml` or `./.video-summarizer.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/video-summarizer/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    ConfigValidationError, DEFAULT_BASE_URL, FileAgentConfig, FileConfig, FileGeminiConfig,
    FileLoggingConfig, FilePollingConfig, FileServerConfig,
};
pub use loader::ConfigLoader;

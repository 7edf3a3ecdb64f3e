//! Presentation layer for video-summarizer
//!
//! This crate contains CLI definitions, the web page, output formatters
//! and progress reporters.

pub mod cli;
pub mod output;
pub mod progress;
pub mod web;

// Re-export commonly used types
pub use cli::commands::{Cli, Command, OutputFormat};
pub use output::console::ConsoleFormatter;
pub use progress::reporter::{LogProgress, ProgressReporter, SimpleProgress};
pub use web::{AnalysisBackend, AppState, BackendError};

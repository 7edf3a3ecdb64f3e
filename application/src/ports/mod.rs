//! Port definitions (interfaces for external adapters)
//!
//! Ports define the boundaries between the application layer and
//! infrastructure. Adapters implement these traits.

pub mod analysis_logger;
pub mod llm_gateway;
pub mod media_store;
pub mod progress;
pub mod tool_executor;

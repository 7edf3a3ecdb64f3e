//! Tool domain module
//!
//! Tools give the video agent capabilities beyond the model itself. The only
//! tool shipped today is web search, which the model may call when the video
//! alone cannot answer the question.
//!
//! ```text
//! ┌──────────────┐    ┌──────────────┐    ┌──────────────┐
//! │ ToolSpec     │───▶│ ToolCall     │───▶│ ToolResult   │
//! │ (registry)   │    │ (invocation) │    │ (output)     │
//! └──────────────┘    └──────────────┘    └──────────────┘
//! ```
//!
//! - [`ToolSpec`]: registry of tools declared to the model
//! - [`ToolDefinition`]: schema for a single tool
//! - [`ToolCall`]: a function call requested by the model
//! - [`ToolResult`]: execution outcome fed back into the conversation

pub mod entities;
pub mod value_objects;

pub use entities::{ToolCall, ToolDefinition, ToolParameter, ToolSpec};
pub use value_objects::{ToolError, ToolResult};

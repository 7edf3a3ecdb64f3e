//! Tool Executor port
//!
//! Defines the interface for executing the tools the model may call.

use async_trait::async_trait;
use summarizer_domain::tool::{
    entities::{ToolCall, ToolDefinition, ToolSpec},
    value_objects::{ToolError, ToolResult},
};

/// Port for tool execution
///
/// Implementations (adapters) live in the infrastructure layer.
#[async_trait]
pub trait ToolExecutorPort: Send + Sync {
    /// Get the specification of all available tools
    fn tool_spec(&self) -> &ToolSpec;

    /// Check if a tool is available
    fn has_tool(&self, name: &str) -> bool {
        self.tool_spec().get(name).is_some()
    }

    /// Get the definition of a specific tool
    fn get_tool(&self, name: &str) -> Option<&ToolDefinition> {
        self.tool_spec().get(name)
    }

    /// Execute a tool call. Failures are reported inside the [`ToolResult`].
    async fn execute(&self, call: &ToolCall) -> ToolResult;
}

/// Executor with no tools, used when web search is disabled.
#[derive(Default)]
pub struct NoTools {
    spec: ToolSpec,
}

impl NoTools {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ToolExecutorPort for NoTools {
    fn tool_spec(&self) -> &ToolSpec {
        &self.spec
    }

    async fn execute(&self, call: &ToolCall) -> ToolResult {
        ToolResult::failure(&call.tool_name, ToolError::not_found(&call.tool_name))
    }
}

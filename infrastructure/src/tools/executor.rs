//! Web tool executor: the concrete implementation of [`ToolExecutorPort`].
//!
//! [`WebToolExecutor`] holds a shared `reqwest::Client` and routes the tool
//! calls the video agent makes to their implementations.

use super::web::{self, WEB_SEARCH};
use async_trait::async_trait;
use std::time::Duration;
use summarizer_application::ports::tool_executor::ToolExecutorPort;
use summarizer_domain::tool::{
    entities::{ToolCall, ToolSpec},
    value_objects::{ToolError, ToolResult},
};
use tracing::debug;

/// Default number of search hits handed to the model.
pub const DEFAULT_MAX_SEARCH_RESULTS: usize = 5;

const HTTP_TIMEOUT: Duration = Duration::from_secs(30);

/// Executor for the agent's web tools.
#[derive(Debug, Clone)]
pub struct WebToolExecutor {
    tool_spec: ToolSpec,
    http_client: reqwest::Client,
    max_search_results: usize,
}

impl WebToolExecutor {
    /// Build an executor with its own HTTP client (30s timeout).
    pub fn new() -> Result<Self, reqwest::Error> {
        let http_client = reqwest::Client::builder().timeout(HTTP_TIMEOUT).build()?;
        Ok(Self::with_client(http_client))
    }

    pub fn with_client(http_client: reqwest::Client) -> Self {
        Self {
            tool_spec: super::web_tool_spec(),
            http_client,
            max_search_results: DEFAULT_MAX_SEARCH_RESULTS,
        }
    }

    pub fn with_max_search_results(mut self, max: usize) -> Self {
        self.max_search_results = max.max(1);
        self
    }

    pub fn max_search_results(&self) -> usize {
        self.max_search_results
    }
}

#[async_trait]
impl ToolExecutorPort for WebToolExecutor {
    fn tool_spec(&self) -> &ToolSpec {
        &self.tool_spec
    }

    async fn execute(&self, call: &ToolCall) -> ToolResult {
        debug!("Executing tool '{}'", call.tool_name);
        match call.tool_name.as_str() {
            WEB_SEARCH => {
                web::execute_web_search(&self.http_client, call, self.max_search_results).await
            }
            other => ToolResult::failure(other, ToolError::not_found(other)),
        }
    }
}

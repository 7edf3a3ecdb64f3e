//! Tool implementations for the video agent
//!
//! The agent may consult the web when the video alone does not answer the
//! user's question. Tools are grouped by concern:
//! - `web`: network-backed tools (`web_search`)

pub mod web;

mod executor;

pub use executor::{DEFAULT_MAX_SEARCH_RESULTS, WebToolExecutor};

use summarizer_domain::tool::entities::ToolSpec;

/// Create the tool specification with every web tool
pub fn web_tool_spec() -> ToolSpec {
    ToolSpec::new().register(web::web_search_definition())
}

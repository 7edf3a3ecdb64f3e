//! `web_search` tool: search the web through DuckDuckGo's HTML endpoint.
//!
//! The HTML endpoint returns a plain result listing without JavaScript and
//! requires no API key. Each hit is reduced to a title, a target URL and a
//! snippet, then formatted as Markdown for the model.
//!
//! # Parameters
//!
//! | Name | Type | Required | Description |
//! |------|------|:---:|-------------|
//! | `query` | string | Yes | The search query |
//! | `max_results` | integer | No | Number of hits, capped by configuration |

use scraper::{ElementRef, Html, Selector};
use std::time::Instant;
use summarizer_domain::tool::{
    entities::{ToolCall, ToolDefinition, ToolParameter},
    value_objects::{ToolError, ToolResult},
};

/// Canonical tool name for the web search tool.
pub const WEB_SEARCH: &str = "web_search";

/// DuckDuckGo HTML endpoint (no API key required).
const DDG_HTML_URL: &str = "https://html.duckduckgo.com/html/";

const USER_AGENT: &str = concat!("video-summarizer/", env!("CARGO_PKG_VERSION"));

/// One search hit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchHit {
    pub title: String,
    pub href: String,
    pub body: String,
}

/// Create the [`ToolDefinition`] for `web_search`.
pub fn web_search_definition() -> ToolDefinition {
    ToolDefinition::new(
        WEB_SEARCH,
        "Search the web using DuckDuckGo. Returns result titles, links and snippets.",
    )
    .with_parameter(ToolParameter::new("query", "The search query", true).with_type("string"))
    .with_parameter(
        ToolParameter::new("max_results", "Number of results to return", false)
            .with_type("integer"),
    )
}

/// Execute the `web_search` tool: query DuckDuckGo and format the hits.
///
/// `limit` is the configured ceiling; a smaller `max_results` argument wins.
pub async fn execute_web_search(
    client: &reqwest::Client,
    call: &ToolCall,
    limit: usize,
) -> ToolResult {
    let start = Instant::now();

    let query = match call.require_string("query") {
        Ok(q) => q,
        Err(e) => {
            return ToolResult::failure(WEB_SEARCH, ToolError::invalid_argument(e));
        }
    };

    let max_results = call
        .get_i64("max_results")
        .filter(|n| *n > 0)
        .map(|n| (n as usize).min(limit))
        .unwrap_or(limit);

    let response = match client
        .post(DDG_HTML_URL)
        .form(&[("q", query)])
        .header("User-Agent", USER_AGENT)
        .send()
        .await
    {
        Ok(r) => r,
        Err(e) => {
            return ToolResult::failure(
                WEB_SEARCH,
                ToolError::execution_failed(format!("Search request failed: {}", e)),
            );
        }
    };

    if !response.status().is_success() {
        return ToolResult::failure(
            WEB_SEARCH,
            ToolError::execution_failed(format!(
                "Search endpoint returned error: {}",
                response.status()
            )),
        );
    }

    let html = match response.text().await {
        Ok(body) => body,
        Err(e) => {
            return ToolResult::failure(
                WEB_SEARCH,
                ToolError::execution_failed(format!("Failed to read search results: {}", e)),
            );
        }
    };

    let hits = parse_results(&html, max_results);
    tracing::debug!(query, hits = hits.len(), "web_search finished");

    ToolResult::success(WEB_SEARCH, format_search_results(query, &hits))
        .with_duration(start.elapsed().as_millis() as u64)
}

fn text_of(element: ElementRef<'_>) -> String {
    element
        .text()
        .collect::<Vec<_>>()
        .join("")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Result links go through a `/l/?uddg=<target>` redirect; unwrap it.
fn resolve_href(raw: &str) -> String {
    let absolute = if raw.starts_with("//") {
        format!("https:{}", raw)
    } else if raw.starts_with('/') {
        format!("https://duckduckgo.com{}", raw)
    } else {
        raw.to_string()
    };

    reqwest::Url::parse(&absolute)
        .ok()
        .and_then(|url| {
            url.query_pairs()
                .find(|(k, _)| k == "uddg")
                .map(|(_, v)| v.into_owned())
        })
        .unwrap_or(absolute)
}

/// Extract up to `max_results` hits from a DuckDuckGo HTML result page.
pub fn parse_results(html: &str, max_results: usize) -> Vec<SearchHit> {
    let (Ok(result_sel), Ok(link_sel), Ok(snippet_sel)) = (
        Selector::parse(".result"),
        Selector::parse("a.result__a"),
        Selector::parse(".result__snippet"),
    ) else {
        return Vec::new();
    };

    let document = Html::parse_document(html);
    document
        .select(&result_sel)
        .filter_map(|result| {
            let link = result.select(&link_sel).next()?;
            let href = resolve_href(link.value().attr("href")?);
            let body = result
                .select(&snippet_sel)
                .next()
                .map(text_of)
                .unwrap_or_default();
            Some(SearchHit {
                title: text_of(link),
                href,
                body,
            })
        })
        .filter(|hit| !hit.title.is_empty())
        .take(max_results)
        .collect()
}

/// Format hits into a Markdown document for the model.
pub fn format_search_results(query: &str, hits: &[SearchHit]) -> String {
    let mut sections = vec![format!("## Search Results for: {}", query)];

    if hits.is_empty() {
        sections.push("No results found.".to_string());
    }

    for (i, hit) in hits.iter().enumerate() {
        let mut entry = format!("### {}. {}\n{}", i + 1, hit.title, hit.href);
        if !hit.body.is_empty() {
            entry.push('\n');
            entry.push_str(&hit.body);
        }
        sections.push(entry);
    }

    sections.join("\n\n")
}

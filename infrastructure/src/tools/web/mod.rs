//! **Web Tools**: `web_search`
//!
//! Gives the video agent access to information the video itself does not
//! contain.
//!
//! | Tool | Description | Key Dependency |
//! |------|-------------|----------------|
//! | `web_search` | Search the web via DuckDuckGo's HTML endpoint | `reqwest` + `scraper` |

mod search;

pub use search::{
    SearchHit, WEB_SEARCH, execute_web_search, format_search_results, parse_results,
    web_search_definition,
};

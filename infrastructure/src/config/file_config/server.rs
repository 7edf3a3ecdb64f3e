//! Web server configuration from TOML (`[server]` section)

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Raw server configuration from TOML
///
/// # Example
///
/// ```toml
/// [server]
/// bind = "127.0.0.1:8501"
/// staging_dir = "/var/tmp/video-summarizer"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileServerConfig {
    /// Address the web page is served on
    pub bind: String,
    /// Where uploads are staged; the system temp dir when unset
    pub staging_dir: Option<PathBuf>,
}

impl Default for FileServerConfig {
    fn default() -> Self {
        Self {
            bind: "127.0.0.1:8501".to_string(),
            staging_dir: None,
        }
    }
}

impl FileServerConfig {
    pub fn staging_dir(&self) -> PathBuf {
        self.staging_dir.clone().unwrap_or_else(std::env::temp_dir)
    }
}

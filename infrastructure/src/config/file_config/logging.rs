//! Logging configuration from TOML (`[logging]` section)

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Raw logging configuration from TOML
///
/// ```toml
/// [logging]
/// analysis_log = "~/.local/share/video-summarizer/analysis.jsonl"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileLoggingConfig {
    /// JSONL transcript of analysis events; disabled when unset
    pub analysis_log: Option<PathBuf>,
}

impl FileLoggingConfig {
    /// The transcript path with a leading `~` expanded.
    pub fn analysis_log_path(&self) -> Option<PathBuf> {
        let path = self.analysis_log.as_ref()?;
        match path.strip_prefix("~") {
            Ok(rest) => dirs::home_dir().map(|home| home.join(rest)),
            Err(_) => Some(path.clone()),
        }
    }
}

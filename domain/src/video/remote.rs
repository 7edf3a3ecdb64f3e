//! Remote processed-video reference

use serde::{Deserialize, Serialize};

/// Processing state of an uploaded file as reported by the provider.
///
/// The provider reports `PROCESSING` while transcoding, `ACTIVE` once the file
/// can be referenced from a prompt, and `FAILED` when it gives up. Anything
/// else (including `STATE_UNSPECIFIED`) is kept verbatim as `Unknown`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", content = "detail", rename_all = "snake_case")]
pub enum RemoteFileState {
    Processing,
    Ready,
    Failed(Option<String>),
    Unknown(String),
}

impl RemoteFileState {
    /// Map the provider's wire value. `reason` is only kept for `FAILED`.
    pub fn from_wire(state: &str, reason: Option<String>) -> Self {
        match state {
            "PROCESSING" => RemoteFileState::Processing,
            "ACTIVE" => RemoteFileState::Ready,
            "FAILED" => RemoteFileState::Failed(reason),
            other => RemoteFileState::Unknown(other.to_string()),
        }
    }

    pub fn is_processing(&self) -> bool {
        matches!(self, RemoteFileState::Processing)
    }

    pub fn as_str(&self) -> &str {
        match self {
            RemoteFileState::Processing => "PROCESSING",
            RemoteFileState::Ready => "ACTIVE",
            RemoteFileState::Failed(_) => "FAILED",
            RemoteFileState::Unknown(raw) => raw,
        }
    }
}

impl std::fmt::Display for RemoteFileState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The provider's handle to an uploaded video.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoteVideo {
    /// Resource name used to re-fetch the file, e.g. `files/abc123`
    pub name: String,
    /// URI referenced from prompts
    pub uri: String,
    pub mime_type: String,
    pub state: RemoteFileState,
}

impl RemoteVideo {
    pub fn new(
        name: impl Into<String>,
        uri: impl Into<String>,
        mime_type: impl Into<String>,
        state: RemoteFileState,
    ) -> Self {
        Self {
            name: name.into(),
            uri: uri.into(),
            mime_type: mime_type.into(),
            state,
        }
    }
}

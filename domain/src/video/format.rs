//! Accepted video container formats

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Video container accepted by the uploader.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VideoFormat {
    Mp4,
    Mov,
    Avi,
}

impl VideoFormat {
    pub const ALL: [VideoFormat; 3] = [VideoFormat::Mp4, VideoFormat::Mov, VideoFormat::Avi];

    /// File extension without the leading dot
    pub fn extension(&self) -> &'static str {
        match self {
            VideoFormat::Mp4 => "mp4",
            VideoFormat::Mov => "mov",
            VideoFormat::Avi => "avi",
        }
    }

    /// Temp-file suffix, e.g. `.mp4`
    pub fn suffix(&self) -> String {
        format!(".{}", self.extension())
    }

    pub fn mime_type(&self) -> &'static str {
        match self {
            VideoFormat::Mp4 => "video/mp4",
            VideoFormat::Mov => "video/quicktime",
            VideoFormat::Avi => "video/x-msvideo",
        }
    }

    /// Case-insensitive lookup by extension (with or without the dot).
    pub fn from_extension(ext: &str) -> Result<Self, DomainError> {
        let ext = ext.trim_start_matches('.');
        Self::ALL
            .into_iter()
            .find(|f| f.extension().eq_ignore_ascii_case(ext))
            .ok_or_else(|| DomainError::UnsupportedFormat(ext.to_string()))
    }

    /// Detect the format from an uploaded file name.
    pub fn from_file_name(name: &str) -> Result<Self, DomainError> {
        let ext = Path::new(name)
            .extension()
            .and_then(|e| e.to_str())
            .ok_or_else(|| DomainError::UnsupportedFormat(name.to_string()))?;
        Self::from_extension(ext)
    }

    /// Value for an HTML `accept` attribute: `.mp4,.mov,.avi`
    pub fn accept_attribute() -> String {
        Self::ALL
            .iter()
            .map(|f| f.suffix())
            .collect::<Vec<_>>()
            .join(",")
    }
}

impl std::fmt::Display for VideoFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.extension())
    }
}

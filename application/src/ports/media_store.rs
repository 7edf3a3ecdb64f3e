//! Media store port
//!
//! Defines how uploaded videos reach the provider and how their processing
//! state is refreshed.

use async_trait::async_trait;
use std::path::Path;
use summarizer_domain::{RemoteVideo, VideoFormat};
use thiserror::Error;

/// Errors that can occur while uploading or re-fetching a video
#[derive(Error, Debug)]
pub enum MediaError {
    #[error("could not read local file: {0}")]
    Io(String),

    #[error("connection error: {0}")]
    Connection(String),

    #[error("authentication failed: {0}")]
    Unauthorized(String),

    #[error("rejected by provider (HTTP {status}): {message}")]
    Rejected { status: u16, message: String },

    #[error("invalid response: {0}")]
    InvalidResponse(String),
}

/// Remote media-processing endpoint.
#[async_trait]
pub trait MediaStore: Send + Sync {
    /// Submit a local video file; returns the provider's reference to it.
    async fn upload(
        &self,
        path: &Path,
        format: VideoFormat,
        display_name: &str,
    ) -> Result<RemoteVideo, MediaError>;

    /// Re-fetch a reference by its resource name to refresh its state.
    async fn get(&self, name: &str) -> Result<RemoteVideo, MediaError>;
}

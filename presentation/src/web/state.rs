//! Shared state of the web server

use std::sync::Arc;
use summarizer_application::{AnalyzeVideoUseCase, StagedVideo};
use summarizer_domain::ApiKey;

pub type BackendError = Box<dyn std::error::Error + Send + Sync>;

/// Builds what one request needs from the user's input.
///
/// The binary implements this with the Gemini client and the temp-file
/// stager; tests substitute in-memory fakes.
pub trait AnalysisBackend: Send + Sync {
    /// Write the uploaded bytes to a uniquely named temp file.
    fn stage(&self, file_name: &str, bytes: &[u8]) -> Result<StagedVideo, BackendError>;

    /// Build a use case that owns this request's credential.
    fn use_case(&self, api_key: ApiKey) -> Result<AnalyzeVideoUseCase, BackendError>;
}

/// Immutable state shared by all handlers
#[derive(Clone)]
pub struct AppState {
    pub backend: Arc<dyn AnalysisBackend>,
    pub title: String,
    pub model: String,
}

impl AppState {
    pub fn new(
        backend: Arc<dyn AnalysisBackend>,
        title: impl Into<String>,
        model: impl Into<String>,
    ) -> Self {
        Self {
            backend,
            title: title.into(),
            model: model.into(),
        }
    }
}

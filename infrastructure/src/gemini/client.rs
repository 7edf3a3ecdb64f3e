//! Gemini REST client
//!
//! [`GeminiClient`] implements both remote ports against the Generative
//! Language API:
//!
//! - [`MediaStore`]: File API resumable upload and `files/{id}` re-fetch
//! - [`LlmGateway`]: `models/{model}:generateContent`
//!
//! The API key travels in the `x-goog-api-key` header, never in URLs, so
//! request logs do not leak it. A client is built per request from the key
//! the user entered; there is no process-wide configuration.

use super::error::{GeminiError, Result};
use super::types::{
    FileResource, GenerateContentResponse, UploadFileMetadata, UploadResponse,
    UploadStartRequest, build_request, convert_response, error_message,
};
use crate::config::DEFAULT_BASE_URL;
use async_trait::async_trait;
use std::path::Path;
use std::time::Duration;
use summarizer_application::{GatewayError, LlmGateway, MediaError, MediaStore};
use summarizer_domain::{ApiKey, Conversation, LlmResponse, Model, RemoteVideo, ToolSpec, VideoFormat};
use tracing::{debug, info};

const API_KEY_HEADER: &str = "x-goog-api-key";
const UPLOAD_URL_HEADER: &str = "x-goog-upload-url";

/// Connection settings for one client.
#[derive(Debug, Clone)]
pub struct GeminiConfig {
    pub api_key: ApiKey,
    /// Scheme and host, without the `/v1beta` path
    pub base_url: String,
    pub model: Model,
    /// Applied to each API call except the transfer of the video body,
    /// which may take as long as the connection needs
    pub timeout: Duration,
}

impl GeminiConfig {
    pub fn new(api_key: ApiKey) -> Self {
        Self {
            api_key,
            base_url: DEFAULT_BASE_URL.to_string(),
            model: Model::default(),
            timeout: Duration::from_secs(120),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_model(mut self, model: Model) -> Self {
        self.model = model;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// Client for the Generative Language REST API
pub struct GeminiClient {
    http: reqwest::Client,
    config: GeminiConfig,
}

impl GeminiClient {
    pub fn new(config: GeminiConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .connect_timeout(config.timeout)
            .build()?;
        Ok(Self { http, config })
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.config.base_url, path.trim_start_matches('/'))
    }

    /// Turn a non-success response into [`GeminiError::Api`].
    async fn check(response: reqwest::Response) -> Result<reqwest::Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response.text().await.unwrap_or_default();
        Err(GeminiError::Api {
            status: status.as_u16(),
            message: error_message(&body),
        })
    }

    async fn parse<T: serde::de::DeserializeOwned>(response: reqwest::Response) -> Result<T> {
        let raw = response.text().await?;
        serde_json::from_str(&raw).map_err(|e| GeminiError::ParseError {
            error: e.to_string(),
            raw,
        })
    }

    /// Resumable upload: open a session, then send the bytes and finalize.
    pub async fn upload_file(
        &self,
        path: &Path,
        format: VideoFormat,
        display_name: &str,
    ) -> Result<FileResource> {
        let bytes = tokio::fs::read(path).await?;
        let mime_type = format.mime_type();
        debug!(path = %path.display(), bytes = bytes.len(), mime_type, "Starting upload");

        let start = self
            .http
            .post(self.url("upload/v1beta/files"))
            .timeout(self.config.timeout)
            .header(API_KEY_HEADER, self.config.api_key.expose())
            .header("X-Goog-Upload-Protocol", "resumable")
            .header("X-Goog-Upload-Command", "start")
            .header("X-Goog-Upload-Header-Content-Length", bytes.len().to_string())
            .header("X-Goog-Upload-Header-Content-Type", mime_type)
            .json(&UploadStartRequest {
                file: UploadFileMetadata { display_name },
            })
            .send()
            .await?;
        let start = Self::check(start).await?;

        let upload_url = start
            .headers()
            .get(UPLOAD_URL_HEADER)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string)
            .ok_or(GeminiError::MissingUploadUrl)?;

        let finalize = self
            .http
            .post(upload_url)
            .header(API_KEY_HEADER, self.config.api_key.expose())
            .header("X-Goog-Upload-Offset", "0")
            .header("X-Goog-Upload-Command", "upload, finalize")
            .body(bytes)
            .send()
            .await?;
        let uploaded: UploadResponse = Self::parse(Self::check(finalize).await?).await?;

        info!(name = %uploaded.file.name, "Upload finished");
        Ok(uploaded.file)
    }

    /// Fetch the `File` resource named `name` (e.g. `files/abc123`).
    pub async fn get_file(&self, name: &str) -> Result<FileResource> {
        let response = self
            .http
            .get(self.url(&format!("v1beta/{}", name)))
            .timeout(self.config.timeout)
            .header(API_KEY_HEADER, self.config.api_key.expose())
            .send()
            .await?;
        Self::parse(Self::check(response).await?).await
    }

    /// Call `generateContent` for the conversation's model.
    pub async fn generate_content(
        &self,
        conversation: &Conversation,
        tools: &ToolSpec,
    ) -> Result<GenerateContentResponse> {
        let model = conversation.model();
        let body = build_request(conversation, tools);
        debug!(
            model = %model,
            turns = body.contents.len(),
            tools = tools.len(),
            "Sending generateContent"
        );

        let response = self
            .http
            .post(self.url(&format!("v1beta/{}:generateContent", model.resource_name())))
            .timeout(self.config.timeout)
            .header(API_KEY_HEADER, self.config.api_key.expose())
            .json(&body)
            .send()
            .await?;
        Self::parse(Self::check(response).await?).await
    }
}

#[async_trait]
impl MediaStore for GeminiClient {
    async fn upload(
        &self,
        path: &Path,
        format: VideoFormat,
        display_name: &str,
    ) -> std::result::Result<RemoteVideo, MediaError> {
        Ok(self.upload_file(path, format, display_name).await?.into())
    }

    async fn get(&self, name: &str) -> std::result::Result<RemoteVideo, MediaError> {
        Ok(self.get_file(name).await?.into())
    }
}

#[async_trait]
impl LlmGateway for GeminiClient {
    async fn generate(
        &self,
        conversation: &Conversation,
        tools: &ToolSpec,
    ) -> std::result::Result<LlmResponse, GatewayError> {
        let response = self.generate_content(conversation, tools).await?;
        convert_response(response, conversation.model().as_str()).map_err(GatewayError::Blocked)
    }
}

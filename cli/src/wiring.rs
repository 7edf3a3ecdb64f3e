//! Dependency wiring: turns the loaded config and a credential into a use case

use std::path::Path;
use std::sync::Arc;
use summarizer_application::{
    AnalysisLogger, AnalyzeVideoUseCase, NoAnalysisLogger, NoTools, StagedVideo,
    ToolExecutorPort, VideoAgent,
};
use summarizer_domain::ApiKey;
use summarizer_infrastructure::{
    FileConfig, GeminiClient, GeminiConfig, JsonlAnalysisLogger, WebToolExecutor, stage_bytes,
    stage_file,
};
use summarizer_presentation::{AnalysisBackend, BackendError};
use tokio_util::sync::CancellationToken;
use tracing::info;

/// Everything a request needs besides its own credential.
pub struct Wiring {
    config: FileConfig,
    logger: Arc<dyn AnalysisLogger>,
    cancellation: CancellationToken,
}

impl Wiring {
    pub fn new(config: FileConfig, cancellation: CancellationToken) -> Self {
        let logger: Arc<dyn AnalysisLogger> = match config
            .logging
            .analysis_log_path()
            .and_then(JsonlAnalysisLogger::open)
        {
            Some(logger) => {
                info!(path = %logger.path().display(), "Writing analysis log");
                Arc::new(logger)
            }
            None => Arc::new(NoAnalysisLogger),
        };

        Self {
            config,
            logger,
            cancellation,
        }
    }

    /// Build a client, agent and use case owning `api_key`.
    pub fn build_use_case(&self, api_key: ApiKey) -> Result<AnalyzeVideoUseCase, BackendError> {
        let model = self.config.gemini.parse_model();
        let client = Arc::new(GeminiClient::new(
            GeminiConfig::new(api_key)
                .with_base_url(&self.config.gemini.base_url)
                .with_model(model.clone())
                .with_timeout(self.config.gemini.timeout()),
        )?);

        let tools: Arc<dyn ToolExecutorPort> = if self.config.agent.web_search {
            Arc::new(
                WebToolExecutor::new()?
                    .with_max_search_results(self.config.agent.max_search_results),
            )
        } else {
            Arc::new(NoTools::new())
        };

        let agent = VideoAgent::new(client.clone(), tools, self.config.agent.to_profile(model));

        Ok(AnalyzeVideoUseCase::new(client, agent)
            .with_poll_policy(self.config.polling.to_poll_policy())
            .with_logger(self.logger.clone())
            .with_cancellation(self.cancellation.clone()))
    }

    /// Copy a local file into the staging directory.
    pub fn stage_path(&self, source: &Path) -> Result<StagedVideo, BackendError> {
        Ok(stage_file(&self.config.server.staging_dir(), source)?)
    }
}

impl AnalysisBackend for Wiring {
    fn stage(&self, file_name: &str, bytes: &[u8]) -> Result<StagedVideo, BackendError> {
        Ok(stage_bytes(&self.config.server.staging_dir(), file_name, bytes)?)
    }

    fn use_case(&self, api_key: ApiKey) -> Result<AnalyzeVideoUseCase, BackendError> {
        self.build_use_case(api_key)
    }
}

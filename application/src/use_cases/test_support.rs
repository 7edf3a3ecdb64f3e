//! Scripted port implementations shared by the use case tests.

use crate::ports::analysis_logger::{AnalysisEvent, AnalysisLogger};
use crate::ports::llm_gateway::{GatewayError, LlmGateway};
use crate::ports::media_store::{MediaError, MediaStore};
use crate::ports::progress::{AnalysisProgress, AnalysisStage};
use crate::ports::tool_executor::ToolExecutorPort;
use async_trait::async_trait;
use std::collections::VecDeque;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::time::Duration;
use summarizer_domain::{
    Conversation, LlmResponse, RemoteFileState, RemoteVideo, ToolCall, ToolDefinition,
    ToolParameter, ToolResult, ToolSpec, VideoFormat,
};

pub fn remote(state: RemoteFileState) -> RemoteVideo {
    RemoteVideo::new(
        "files/clip-123",
        "https://generativelanguage.test/v1beta/files/clip-123",
        "video/mp4",
        state,
    )
}

// ==================== Media store ====================

pub struct ScriptedMediaStore {
    upload_result: Mutex<Option<Result<RemoteVideo, MediaError>>>,
    states: Mutex<VecDeque<Result<RemoteFileState, MediaError>>>,
    pub uploads: Mutex<Vec<(PathBuf, VideoFormat, bool)>>,
    pub gets: Mutex<Vec<String>>,
}

impl ScriptedMediaStore {
    /// Upload returns `first`; each `get` pops the next state.
    pub fn new(first: RemoteFileState, then: Vec<RemoteFileState>) -> Self {
        Self {
            upload_result: Mutex::new(Some(Ok(remote(first)))),
            states: Mutex::new(then.into_iter().map(Ok).collect()),
            uploads: Mutex::new(Vec::new()),
            gets: Mutex::new(Vec::new()),
        }
    }

    /// Reports PROCESSING for the first `n` observations, then ACTIVE.
    pub fn processing_for(n: usize) -> Self {
        if n == 0 {
            return Self::new(RemoteFileState::Ready, vec![]);
        }
        let mut then = vec![RemoteFileState::Processing; n - 1];
        then.push(RemoteFileState::Ready);
        Self::new(RemoteFileState::Processing, then)
    }

    pub fn failing_upload(error: MediaError) -> Self {
        Self {
            upload_result: Mutex::new(Some(Err(error))),
            states: Mutex::new(VecDeque::new()),
            uploads: Mutex::new(Vec::new()),
            gets: Mutex::new(Vec::new()),
        }
    }

    pub fn with_get_error(self, error: MediaError) -> Self {
        self.states.lock().unwrap().push_back(Err(error));
        self
    }

    pub fn upload_count(&self) -> usize {
        self.uploads.lock().unwrap().len()
    }

    pub fn get_count(&self) -> usize {
        self.gets.lock().unwrap().len()
    }
}

#[async_trait]
impl MediaStore for ScriptedMediaStore {
    async fn upload(
        &self,
        path: &Path,
        format: VideoFormat,
        _display_name: &str,
    ) -> Result<RemoteVideo, MediaError> {
        self.uploads
            .lock()
            .unwrap()
            .push((path.to_path_buf(), format, path.exists()));
        self.upload_result
            .lock()
            .unwrap()
            .take()
            .unwrap_or_else(|| Err(MediaError::InvalidResponse("upload called twice".to_string())))
    }

    async fn get(&self, name: &str) -> Result<RemoteVideo, MediaError> {
        self.gets.lock().unwrap().push(name.to_string());
        let next = self
            .states
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(Ok(RemoteFileState::Processing));
        next.map(remote)
    }
}

// ==================== Gateway ====================

pub struct ScriptedGateway {
    responses: Mutex<VecDeque<Result<LlmResponse, GatewayError>>>,
    pub calls: Mutex<Vec<(Conversation, Vec<String>)>>,
}

impl ScriptedGateway {
    pub fn new(responses: Vec<LlmResponse>) -> Self {
        Self {
            responses: Mutex::new(responses.into_iter().map(Ok).collect()),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(error: GatewayError) -> Self {
        Self {
            responses: Mutex::new(VecDeque::from([Err(error)])),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait]
impl LlmGateway for ScriptedGateway {
    async fn generate(
        &self,
        conversation: &Conversation,
        tools: &ToolSpec,
    ) -> Result<LlmResponse, GatewayError> {
        self.calls.lock().unwrap().push((
            conversation.clone(),
            tools.names().map(str::to_string).collect(),
        ));
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(GatewayError::Other("No more responses".to_string())))
    }
}

// ==================== Tools ====================

pub struct EchoSearch {
    spec: ToolSpec,
    pub executed: Mutex<Vec<ToolCall>>,
}

impl EchoSearch {
    pub fn new() -> Self {
        Self {
            spec: ToolSpec::new().register(
                ToolDefinition::new("web_search", "Search the web")
                    .with_parameter(ToolParameter::new("query", "Search terms", true)),
            ),
            executed: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl ToolExecutorPort for EchoSearch {
    fn tool_spec(&self) -> &ToolSpec {
        &self.spec
    }

    async fn execute(&self, call: &ToolCall) -> ToolResult {
        self.executed.lock().unwrap().push(call.clone());
        let query = call.get_string("query").unwrap_or_default();
        ToolResult::success(&call.tool_name, format!("results for {}", query))
    }
}

// ==================== Progress / logging ====================

#[derive(Default)]
pub struct RecordingProgress {
    pub stages: Mutex<Vec<(AnalysisStage, Option<bool>)>>,
    pub checks: Mutex<Vec<(u32, RemoteFileState)>>,
    pub waits: Mutex<Vec<Duration>>,
    pub tools: Mutex<Vec<String>>,
}

impl AnalysisProgress for RecordingProgress {
    fn on_stage_start(&self, stage: AnalysisStage) {
        self.stages.lock().unwrap().push((stage, None));
    }

    fn on_stage_complete(&self, stage: AnalysisStage, success: bool) {
        self.stages.lock().unwrap().push((stage, Some(success)));
    }

    fn on_state_checked(&self, check: u32, state: &RemoteFileState) {
        self.checks.lock().unwrap().push((check, state.clone()));
    }

    fn on_poll_wait(&self, _check: u32, delay: Duration) {
        self.waits.lock().unwrap().push(delay);
    }

    fn on_tool_call(&self, tool_name: &str, _turn: usize) {
        self.tools.lock().unwrap().push(tool_name.to_string());
    }
}

#[derive(Default)]
pub struct RecordingLogger {
    pub events: Mutex<Vec<&'static str>>,
}

impl AnalysisLogger for RecordingLogger {
    fn log(&self, event: AnalysisEvent) {
        self.events.lock().unwrap().push(event.event_type);
    }
}

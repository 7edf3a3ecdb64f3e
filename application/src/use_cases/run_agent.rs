//! Video agent: one multimodal model plus optional tools.
//!
//! The agent sends the video reference and the analysis prompt as a single
//! user turn, then runs a bounded tool loop until the model answers in text.

use crate::ports::analysis_logger::{AnalysisEvent, AnalysisLogger};
use crate::ports::llm_gateway::{GatewayError, LlmGateway};
use crate::ports::progress::AnalysisProgress;
use crate::ports::tool_executor::ToolExecutorPort;
use serde_json::json;
use std::sync::Arc;
use summarizer_domain::{
    AgentProfile, AnalysisPromptTemplate, Conversation, LlmResponse, Message, MessagePart,
    RemoteVideo, ToolCall, ToolError, ToolResult, ToolSpec,
};
use thiserror::Error;
use tracing::{debug, info, warn};

/// Errors that can occur while the agent is answering
#[derive(Error, Debug)]
pub enum RunAgentError {
    #[error("Gateway error: {0}")]
    Gateway(#[from] GatewayError),

    #[error("The model returned an empty response")]
    EmptyResponse,
}

/// The agent's final answer
#[derive(Debug, Clone)]
pub struct AgentReply {
    /// Markdown text as produced by the model
    pub text: String,
    /// Number of tool calls executed along the way
    pub tool_calls: usize,
    /// Model identifier reported by the provider, if any
    pub model: Option<String>,
}

/// Multimodal agent bound to one gateway and one tool set.
///
/// Built per request from explicit parts; nothing is cached between analyses.
pub struct VideoAgent {
    gateway: Arc<dyn LlmGateway>,
    tools: Arc<dyn ToolExecutorPort>,
    profile: AgentProfile,
}

impl VideoAgent {
    pub fn new(
        gateway: Arc<dyn LlmGateway>,
        tools: Arc<dyn ToolExecutorPort>,
        profile: AgentProfile,
    ) -> Self {
        Self {
            gateway,
            tools,
            profile,
        }
    }

    /// Tools offered to the model; empty when web search is off.
    fn offered_tools(&self) -> ToolSpec {
        if !self.profile.web_search {
            return ToolSpec::new();
        }
        self.tools
            .tool_spec()
            .all()
            .cloned()
            .fold(ToolSpec::new(), |spec, tool| spec.register(tool))
    }

    /// Answer `prompt` about `video`.
    pub async fn run(
        &self,
        prompt: &str,
        video: &RemoteVideo,
        progress: &dyn AnalysisProgress,
        logger: &dyn AnalysisLogger,
    ) -> Result<AgentReply, RunAgentError> {
        let mut conversation = Conversation::new(self.profile.model.clone())
            .with_system_instruction(AnalysisPromptTemplate::system_instruction(&self.profile));
        conversation.push(Message::user(vec![
            MessagePart::video(video),
            MessagePart::Text(prompt.to_string()),
        ]));

        let tools = self.offered_tools();
        debug!(
            "Agent: using model {}, {} tools available",
            self.profile.model,
            tools.len()
        );

        let mut response = self.gateway.generate(&conversation, &tools).await?;
        let max_turns = self.profile.max_tool_turns;
        let mut turn_count = 0;
        let mut executed = 0;

        loop {
            let tool_calls = response.tool_calls();
            if tool_calls.is_empty() {
                break;
            }

            turn_count += 1;
            conversation.push(response.to_message());

            if turn_count > max_turns {
                warn!("Agent tool loop exceeded max_tool_turns ({})", max_turns);
                let refusals: Vec<ToolResult> = tool_calls
                    .iter()
                    .map(|call| {
                        ToolResult::failure(
                            &call.tool_name,
                            ToolError::new(
                                "LIMIT_REACHED",
                                "Tool budget exhausted; answer with what you have",
                            ),
                        )
                    })
                    .collect();
                conversation.push(Message::tool_results(
                    tool_calls
                        .iter()
                        .map(|c| c.native_id.clone())
                        .zip(refusals.iter()),
                ));
                response = self
                    .gateway
                    .generate(&conversation, &ToolSpec::new())
                    .await?;
                break;
            }

            let results = self
                .execute_calls(&tool_calls, &tools, turn_count, progress, logger)
                .await;
            executed += results.len();

            conversation.push(Message::tool_results(
                tool_calls
                    .iter()
                    .map(|c| c.native_id.clone())
                    .zip(results.iter()),
            ));

            debug!(
                "Agent tool turn {}/{}: sending {} tool results",
                turn_count,
                max_turns,
                results.len()
            );
            response = self.gateway.generate(&conversation, &tools).await?;
        }

        finish(response, executed)
    }

    async fn execute_calls(
        &self,
        calls: &[ToolCall],
        offered: &ToolSpec,
        turn: usize,
        progress: &dyn AnalysisProgress,
        logger: &dyn AnalysisLogger,
    ) -> Vec<ToolResult> {
        let futures = calls.iter().map(|call| async move {
            progress.on_tool_call(&call.tool_name, turn);
            if offered.get(&call.tool_name).is_none() {
                warn!("Model called unknown tool '{}'", call.tool_name);
                return ToolResult::failure(&call.tool_name, ToolError::not_found(&call.tool_name));
            }
            self.tools.execute(call).await
        });
        let results: Vec<ToolResult> = futures::future::join_all(futures).await;

        for (call, result) in calls.iter().zip(&results) {
            logger.log(AnalysisEvent::new(
                "tool_call",
                json!({
                    "turn": turn,
                    "tool": call.tool_name,
                    "arguments": call.arguments,
                    "success": result.is_success(),
                    "duration_ms": result.duration_ms,
                    "preview": preview(&result.content_for_model()),
                }),
            ));
        }

        results
    }
}

/// Characters of a tool result kept in the transcript.
const PREVIEW_CHARS: usize = 200;

/// First [`PREVIEW_CHARS`] characters of a tool result, with `...` when cut.
fn preview(content: &str) -> String {
    match content.char_indices().nth(PREVIEW_CHARS) {
        Some((end, _)) => format!("{}...", &content[..end]),
        None => content.to_string(),
    }
}

fn finish(response: LlmResponse, tool_calls: usize) -> Result<AgentReply, RunAgentError> {
    let text = response.text_content();
    if text.trim().is_empty() {
        return Err(RunAgentError::EmptyResponse);
    }
    info!(tool_calls, chars = text.len(), "Agent answered");
    Ok(AgentReply {
        text,
        tool_calls,
        model: response.model,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::analysis_logger::NoAnalysisLogger;
    use crate::ports::progress::NoProgress;
    use crate::ports::tool_executor::NoTools;
    use crate::use_cases::test_support::{
        remote, EchoSearch, RecordingLogger, RecordingProgress, ScriptedGateway,
    };
    use std::collections::HashMap;
    use summarizer_domain::{ContentBlock, RemoteFileState, StopReason};

    fn search_call(id: &str, query: &str) -> LlmResponse {
        let mut input = HashMap::new();
        input.insert("query".to_string(), json!(query));
        LlmResponse {
            content: vec![ContentBlock::ToolUse {
                id: Some(id.to_string()),
                name: "web_search".to_string(),
                input,
            }],
            stop_reason: Some(StopReason::ToolUse),
            model: None,
        }
    }

    fn agent(gateway: Arc<ScriptedGateway>, tools: Arc<dyn ToolExecutorPort>) -> VideoAgent {
        VideoAgent::new(gateway, tools, AgentProfile::default())
    }

    #[tokio::test]
    async fn test_single_turn_answer() {
        let gateway = Arc::new(ScriptedGateway::new(vec![LlmResponse::from_text(
            "## Summary\nA cat plays piano.",
        )]));
        let video = remote(RemoteFileState::Ready);

        let reply = agent(gateway.clone(), Arc::new(EchoSearch::new()))
            .run("Describe it", &video, &NoProgress, &NoAnalysisLogger)
            .await
            .unwrap();

        assert_eq!(reply.text, "## Summary\nA cat plays piano.");
        assert_eq!(reply.tool_calls, 0);

        let calls = gateway.calls.lock().unwrap();
        assert_eq!(calls.len(), 1);
        let (conversation, tools) = &calls[0];
        assert_eq!(tools, &vec!["web_search".to_string()]);
        assert!(conversation.system_instruction().unwrap().contains("markdown"));
        let first = &conversation.messages()[0];
        assert_eq!(first.videos().collect::<Vec<_>>(), vec![video.uri.as_str()]);
        assert_eq!(first.parts[1].as_text(), Some("Describe it"));
    }

    #[tokio::test]
    async fn test_tool_results_are_sent_back() {
        let gateway = Arc::new(ScriptedGateway::new(vec![
            search_call("call-1", "piano cat"),
            LlmResponse::from_text("The cat is famous."),
        ]));
        let search = Arc::new(EchoSearch::new());
        let progress = RecordingProgress::default();
        let logger = RecordingLogger::default();

        let reply = agent(gateway.clone(), search.clone())
            .run("Who is the cat?", &remote(RemoteFileState::Ready), &progress, &logger)
            .await
            .unwrap();

        assert_eq!(reply.text, "The cat is famous.");
        assert_eq!(reply.tool_calls, 1);
        assert_eq!(search.executed.lock().unwrap().len(), 1);
        assert_eq!(*progress.tools.lock().unwrap(), vec!["web_search".to_string()]);
        assert_eq!(*logger.events.lock().unwrap(), vec!["tool_call"]);

        let calls = gateway.calls.lock().unwrap();
        let (conversation, _) = &calls[1];
        let last = conversation.messages().last().unwrap();
        match &last.parts[0] {
            MessagePart::ToolResult {
                id,
                content,
                is_error,
                ..
            } => {
                assert_eq!(id.as_deref(), Some("call-1"));
                assert_eq!(content, "results for piano cat");
                assert!(!is_error);
            }
            other => panic!("unexpected part: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_tool_budget_forces_final_answer() {
        let mut script: Vec<LlmResponse> = (0..3)
            .map(|i| search_call(&format!("call-{}", i), "again"))
            .collect();
        script.push(LlmResponse::from_text("Final answer."));
        let gateway = Arc::new(ScriptedGateway::new(script));
        let search = Arc::new(EchoSearch::new());
        let profile = AgentProfile {
            max_tool_turns: 2,
            ..AgentProfile::default()
        };

        let reply = VideoAgent::new(gateway.clone(), search.clone(), profile)
            .run("q", &remote(RemoteFileState::Ready), &NoProgress, &NoAnalysisLogger)
            .await
            .unwrap();

        assert_eq!(reply.text, "Final answer.");
        assert_eq!(search.executed.lock().unwrap().len(), 2);
        let calls = gateway.calls.lock().unwrap();
        assert_eq!(calls.len(), 4);
        assert!(calls[3].1.is_empty());
    }

    #[tokio::test]
    async fn test_web_search_disabled_offers_no_tools() {
        let gateway = Arc::new(ScriptedGateway::new(vec![LlmResponse::from_text("ok")]));
        let profile = AgentProfile {
            web_search: false,
            ..AgentProfile::default()
        };

        VideoAgent::new(gateway.clone(), Arc::new(EchoSearch::new()), profile)
            .run("q", &remote(RemoteFileState::Ready), &NoProgress, &NoAnalysisLogger)
            .await
            .unwrap();

        assert!(gateway.calls.lock().unwrap()[0].1.is_empty());
    }

    #[tokio::test]
    async fn test_unknown_tool_is_reported_to_model() {
        let gateway = Arc::new(ScriptedGateway::new(vec![
            search_call("call-1", "x"),
            LlmResponse::from_text("done"),
        ]));

        let reply = agent(gateway.clone(), Arc::new(NoTools::new()))
            .run("q", &remote(RemoteFileState::Ready), &NoProgress, &NoAnalysisLogger)
            .await
            .unwrap();

        assert_eq!(reply.text, "done");
        let calls = gateway.calls.lock().unwrap();
        let last = calls[1].0.messages().last().unwrap().clone();
        assert!(matches!(
            last.parts[0],
            MessagePart::ToolResult { is_error: true, .. }
        ));
    }

    #[tokio::test]
    async fn test_empty_text_is_an_error() {
        let gateway = Arc::new(ScriptedGateway::new(vec![LlmResponse::from_text("   ")]));

        let err = agent(gateway, Arc::new(NoTools::new()))
            .run("q", &remote(RemoteFileState::Ready), &NoProgress, &NoAnalysisLogger)
            .await
            .unwrap_err();

        assert!(matches!(err, RunAgentError::EmptyResponse));
    }

    #[tokio::test]
    async fn test_gateway_error_propagates() {
        let gateway = Arc::new(ScriptedGateway::failing(GatewayError::Unauthorized(
            "API key not valid".to_string(),
        )));

        let err = agent(gateway, Arc::new(NoTools::new()))
            .run("q", &remote(RemoteFileState::Ready), &NoProgress, &NoAnalysisLogger)
            .await
            .unwrap_err();

        assert!(err.to_string().contains("API key not valid"));
    }

    #[test]
    fn test_preview_keeps_short_snippets() {
        let snippet = "1. **Tour de France 2024 stage 4** - https://example.com/stage-4";
        assert_eq!(preview(snippet), snippet);
    }

    #[test]
    fn test_preview_cuts_long_snippets_on_char_boundary() {
        let snippet = "Café crème ".repeat(40);
        let cut = preview(&snippet);
        assert!(cut.ends_with("..."));
        assert_eq!(cut.trim_end_matches("...").chars().count(), PREVIEW_CHARS);
    }
}

//! Wire types for the Generative Language REST API and their conversions
//!
//! Field names follow the API's camelCase JSON. Conversions go both ways:
//! domain conversations become `generateContent` requests, and `File` /
//! `GenerateContentResponse` payloads become domain values.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use summarizer_domain::{
    ContentBlock, Conversation, LlmResponse, MessagePart, RemoteFileState, RemoteVideo, Role,
    StopReason, ToolSpec,
};

// ─── File API ────────────────────────────────────────────────────

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileStatus {
    #[serde(default)]
    pub message: Option<String>,
}

/// The `File` resource returned by upload and get.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileResource {
    pub name: String,
    #[serde(default)]
    pub uri: String,
    #[serde(default)]
    pub mime_type: String,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub error: Option<FileStatus>,
}

/// Body of the final upload response.
#[derive(Debug, Clone, Deserialize)]
pub struct UploadResponse {
    pub file: FileResource,
}

#[derive(Debug, Serialize)]
pub struct UploadStartRequest<'a> {
    pub file: UploadFileMetadata<'a>,
}

#[derive(Debug, Serialize)]
pub struct UploadFileMetadata<'a> {
    pub display_name: &'a str,
}

impl From<FileResource> for RemoteVideo {
    fn from(file: FileResource) -> Self {
        let reason = file.error.and_then(|e| e.message);
        let state = RemoteFileState::from_wire(file.state.as_deref().unwrap_or(""), reason);
        RemoteVideo::new(file.name, file.uri, file.mime_type, state)
    }
}

// ─── Errors ──────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct ErrorEnvelope {
    pub error: ErrorBody,
}

#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub message: String,
}

/// Extract the human-readable message from an error response body.
pub fn error_message(raw: &str) -> String {
    serde_json::from_str::<ErrorEnvelope>(raw)
        .map(|e| e.error.message)
        .ok()
        .filter(|m| !m.is_empty())
        .unwrap_or_else(|| raw.trim().to_string())
}

// ─── generateContent ─────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WireContent {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default)]
    pub parts: Vec<WirePart>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileData {
    pub mime_type: String,
    pub file_uri: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FunctionCall {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    #[serde(default)]
    pub args: HashMap<String, serde_json::Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FunctionResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    pub response: serde_json::Value,
}

/// One part of a content turn; exactly one field is set.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WirePart {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_data: Option<FileData>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub function_call: Option<FunctionCall>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub function_response: Option<FunctionResponse>,
}

#[derive(Debug, Clone, Serialize)]
pub struct FunctionDeclaration {
    pub name: String,
    pub description: String,
    pub parameters: serde_json::Value,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WireTool {
    pub function_declarations: Vec<FunctionDeclaration>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentRequest {
    pub contents: Vec<WireContent>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system_instruction: Option<WireContent>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tools: Vec<WireTool>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    #[serde(default)]
    pub content: Option<WireContent>,
    #[serde(default)]
    pub finish_reason: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PromptFeedback {
    #[serde(default)]
    pub block_reason: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
    #[serde(default)]
    pub prompt_feedback: Option<PromptFeedback>,
    #[serde(default)]
    pub model_version: Option<String>,
}

// ─── Domain → Wire ───────────────────────────────────────────────

fn convert_part(part: &MessagePart) -> WirePart {
    match part {
        MessagePart::Text(text) => WirePart {
            text: Some(text.clone()),
            ..Default::default()
        },
        MessagePart::Video { uri, mime_type } => WirePart {
            file_data: Some(FileData {
                mime_type: mime_type.clone(),
                file_uri: uri.clone(),
            }),
            ..Default::default()
        },
        MessagePart::ToolUse { id, name, input } => WirePart {
            function_call: Some(FunctionCall {
                id: id.clone(),
                name: name.clone(),
                args: input.clone(),
            }),
            ..Default::default()
        },
        MessagePart::ToolResult {
            id,
            name,
            content,
            is_error,
        } => {
            let key = if *is_error { "error" } else { "content" };
            let mut response = serde_json::Map::new();
            response.insert(key.to_string(), content.clone().into());
            WirePart {
                function_response: Some(FunctionResponse {
                    id: id.clone(),
                    name: name.clone(),
                    response: serde_json::Value::Object(response),
                }),
                ..Default::default()
            }
        }
    }
}

fn role_name(role: Role) -> &'static str {
    match role {
        Role::User => "user",
        Role::Model => "model",
    }
}

/// Build the request body for a conversation and the tools offered.
pub fn build_request(conversation: &Conversation, tools: &ToolSpec) -> GenerateContentRequest {
    let contents = conversation
        .messages()
        .iter()
        .map(|m| WireContent {
            role: Some(role_name(m.role).to_string()),
            parts: m.parts.iter().map(convert_part).collect(),
        })
        .collect();

    let system_instruction = conversation.system_instruction().map(|text| WireContent {
        role: None,
        parts: vec![WirePart {
            text: Some(text.to_string()),
            ..Default::default()
        }],
    });

    let declarations: Vec<FunctionDeclaration> = tools
        .all()
        .map(|t| FunctionDeclaration {
            name: t.name.clone(),
            description: t.description.clone(),
            parameters: t.parameters_schema(),
        })
        .collect();
    let tools = if declarations.is_empty() {
        Vec::new()
    } else {
        vec![WireTool {
            function_declarations: declarations,
        }]
    };

    GenerateContentRequest {
        contents,
        system_instruction,
        tools,
    }
}

// ─── Wire → Domain ───────────────────────────────────────────────

/// Convert a Gemini finish reason to domain StopReason.
pub fn convert_finish_reason(reason: &str, has_tool_calls: bool) -> StopReason {
    match reason {
        "STOP" if has_tool_calls => StopReason::ToolUse,
        "STOP" => StopReason::EndTurn,
        "MAX_TOKENS" => StopReason::MaxTokens,
        "SAFETY" | "RECITATION" | "BLOCKLIST" | "PROHIBITED_CONTENT" | "SPII" => {
            StopReason::Safety
        }
        other => StopReason::Other(other.to_string()),
    }
}

fn convert_wire_part(part: WirePart) -> Option<ContentBlock> {
    if let Some(call) = part.function_call {
        return Some(ContentBlock::ToolUse {
            id: call.id,
            name: call.name,
            input: call.args,
        });
    }
    part.text.map(ContentBlock::Text)
}

/// Convert the first candidate of a response into an [`LlmResponse`].
///
/// Returns `Err` with the block reason when the prompt itself was blocked.
pub fn convert_response(
    response: GenerateContentResponse,
    model: &str,
) -> Result<LlmResponse, String> {
    let GenerateContentResponse {
        candidates,
        prompt_feedback,
        model_version,
    } = response;

    let Some(candidate) = candidates.into_iter().next() else {
        let reason = prompt_feedback
            .and_then(|f| f.block_reason)
            .unwrap_or_else(|| "no candidates returned".to_string());
        return Err(reason);
    };

    let content: Vec<ContentBlock> = candidate
        .content
        .map(|c| c.parts.into_iter().filter_map(convert_wire_part).collect())
        .unwrap_or_default();
    let has_tool_calls = content
        .iter()
        .any(|b| matches!(b, ContentBlock::ToolUse { .. }));
    let stop_reason = candidate
        .finish_reason
        .as_deref()
        .map(|r| convert_finish_reason(r, has_tool_calls));

    Ok(LlmResponse {
        content,
        stop_reason,
        model: model_version.or_else(|| Some(model.to_string())),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use summarizer_domain::{Message, Model, ToolDefinition, ToolParameter, ToolResult};

    #[test]
    fn test_file_resource_states() {
        let raw = r#"{"name":"files/abc","uri":"https://x/files/abc","mimeType":"video/mp4","state":"PROCESSING"}"#;
        let video: RemoteVideo = serde_json::from_str::<FileResource>(raw).unwrap().into();
        assert_eq!(video.name, "files/abc");
        assert_eq!(video.mime_type, "video/mp4");
        assert_eq!(video.state, RemoteFileState::Processing);

        let raw = r#"{"name":"files/abc","state":"FAILED","error":{"message":"bad codec"}}"#;
        let video: RemoteVideo = serde_json::from_str::<FileResource>(raw).unwrap().into();
        assert_eq!(video.state, RemoteFileState::Failed(Some("bad codec".to_string())));

        let raw = r#"{"name":"files/abc"}"#;
        let video: RemoteVideo = serde_json::from_str::<FileResource>(raw).unwrap().into();
        assert!(matches!(video.state, RemoteFileState::Unknown(_)));
    }

    #[test]
    fn test_error_message_prefers_api_message() {
        let raw = r#"{"error":{"code":400,"message":"API key not valid.","status":"INVALID_ARGUMENT"}}"#;
        assert_eq!(error_message(raw), "API key not valid.");
        assert_eq!(error_message("Bad Gateway\n"), "Bad Gateway");
    }

    #[test]
    fn test_build_request_shapes_video_and_tools() {
        let mut conversation =
            Conversation::new(Model::default()).with_system_instruction("Be helpful.");
        conversation.push(Message::user(vec![
            MessagePart::Video {
                uri: "https://x/files/abc".to_string(),
                mime_type: "video/mp4".to_string(),
            },
            MessagePart::Text("What happens?".to_string()),
        ]));
        let tools = ToolSpec::new().register(
            ToolDefinition::new("web_search", "Search")
                .with_parameter(ToolParameter::new("query", "q", true).with_type("string")),
        );

        let body = serde_json::to_value(build_request(&conversation, &tools)).unwrap();

        assert_eq!(body["systemInstruction"]["parts"][0]["text"], "Be helpful.");
        let parts = &body["contents"][0]["parts"];
        assert_eq!(body["contents"][0]["role"], "user");
        assert_eq!(parts[0]["fileData"]["fileUri"], "https://x/files/abc");
        assert_eq!(parts[0]["fileData"]["mimeType"], "video/mp4");
        assert_eq!(parts[1]["text"], "What happens?");
        assert!(parts[1].get("fileData").is_none());
        let decl = &body["tools"][0]["functionDeclarations"][0];
        assert_eq!(decl["name"], "web_search");
        assert_eq!(decl["parameters"]["required"][0], "query");
    }

    #[test]
    fn test_build_request_without_tools_omits_field() {
        let mut conversation = Conversation::new(Model::default());
        conversation.push(Message::user(vec![MessagePart::Text("hi".to_string())]));
        let body = serde_json::to_value(build_request(&conversation, &ToolSpec::new())).unwrap();
        assert!(body.get("tools").is_none());
        assert!(body.get("systemInstruction").is_none());
    }

    #[test]
    fn test_tool_results_become_function_responses() {
        let ok = ToolResult::success("web_search", "## Results");
        let mut conversation = Conversation::new(Model::default());
        conversation.push(Message::tool_results(vec![(Some("c1".to_string()), &ok)]));

        let body = serde_json::to_value(build_request(&conversation, &ToolSpec::new())).unwrap();
        let response = &body["contents"][0]["parts"][0]["functionResponse"];
        assert_eq!(response["name"], "web_search");
        assert_eq!(response["id"], "c1");
        assert_eq!(response["response"]["content"], "## Results");
    }

    #[test]
    fn test_convert_text_response() {
        let raw = r###"{
            "candidates": [{
                "content": {"role": "model", "parts": [{"text": "## Summary\n"}, {"text": "A dog."}]},
                "finishReason": "STOP"
            }],
            "modelVersion": "gemini-2.0-flash-exp"
        }"###;
        let response: GenerateContentResponse = serde_json::from_str(raw).unwrap();
        let response = convert_response(response, "fallback").unwrap();

        assert_eq!(response.text_content(), "## Summary\nA dog.");
        assert_eq!(response.stop_reason, Some(StopReason::EndTurn));
        assert_eq!(response.model.as_deref(), Some("gemini-2.0-flash-exp"));
    }

    #[test]
    fn test_convert_function_call_response() {
        let raw = r#"{
            "candidates": [{
                "content": {"role": "model", "parts": [
                    {"functionCall": {"name": "web_search", "args": {"query": "border collie"}}}
                ]},
                "finishReason": "STOP"
            }]
        }"#;
        let response: GenerateContentResponse = serde_json::from_str(raw).unwrap();
        let response = convert_response(response, "gemini-2.0-flash-exp").unwrap();

        let calls = response.tool_calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].get_string("query"), Some("border collie"));
        assert_eq!(response.stop_reason, Some(StopReason::ToolUse));
        assert_eq!(response.model.as_deref(), Some("gemini-2.0-flash-exp"));
    }

    #[test]
    fn test_blocked_prompt() {
        let raw = r#"{"promptFeedback": {"blockReason": "SAFETY"}}"#;
        let response: GenerateContentResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(convert_response(response, "m").unwrap_err(), "SAFETY");
    }

    #[test]
    fn test_finish_reasons() {
        assert_eq!(convert_finish_reason("MAX_TOKENS", false), StopReason::MaxTokens);
        assert_eq!(convert_finish_reason("SAFETY", false), StopReason::Safety);
        assert_eq!(
            convert_finish_reason("OTHER", false),
            StopReason::Other("OTHER".to_string())
        );
    }
}

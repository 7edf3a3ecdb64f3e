//! Prompts sent to the video agent

use crate::agent::profile::AgentProfile;
use crate::core::query::AnalysisQuery;

/// Templates for the two texts the agent receives: the system instruction
/// and the per-request analysis prompt.
pub struct AnalysisPromptTemplate;

impl AnalysisPromptTemplate {
    /// System instruction derived from the agent profile.
    pub fn system_instruction(profile: &AgentProfile) -> String {
        let mut lines = vec![
            format!("You are {}, an assistant that analyzes videos.", profile.name),
            "Ground every statement about the video in what is actually shown or heard."
                .to_string(),
        ];

        if profile.web_search {
            lines.push(
                "You can call the `web_search` tool when the video alone is not enough to \
                 answer. Cite the sources you used."
                    .to_string(),
            );
        }

        if profile.markdown {
            lines.push("Use markdown to format your answers.".to_string());
        }

        lines.join("\n")
    }

    /// The prompt embedding the user's question.
    ///
    /// The question appears exactly as typed, minus surrounding whitespace
    /// ([`AnalysisQuery`] trims it on parse).
    pub fn analysis_prompt(query: &AnalysisQuery) -> String {
        format!(
            r#"Analyze the uploaded video for content and context.
Respond to the following query using video insights and supplementary web search if required.

User query: {}

Make sure your analysis is a detailed, user-friendly and actionable response."#,
            query.content()
        )
    }
}

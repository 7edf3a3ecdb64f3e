//! Console output formatter for analysis results

use colored::Colorize;
use summarizer_application::{AnalysisOutcome, AnalyzeVideoError};

/// Formats analysis outcomes for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Heading, question, answer and a dimmed run summary
    pub fn format(outcome: &AnalysisOutcome) -> String {
        let mut output = String::new();

        output.push_str(&Self::header("Analysis result"));
        output.push('\n');

        output.push_str(&format!("{} {}\n\n", "Q:".cyan().bold(), outcome.query));

        output.push_str(outcome.answer.trim_end());
        output.push('\n');

        output.push_str(&format!("\n{}\n", Self::summary(outcome).dimmed()));

        output
    }

    /// Format as JSON
    pub fn format_json(outcome: &AnalysisOutcome) -> String {
        serde_json::to_string_pretty(outcome).unwrap_or_else(|_| "{}".to_string())
    }

    /// Warnings in yellow, everything else in red.
    pub fn format_error(error: &AnalyzeVideoError) -> String {
        let message = error.user_message();
        if error.is_warning() {
            format!("{} {}", "Warning:".yellow().bold(), message)
        } else {
            format!("{} {}", "Error:".red().bold(), message)
        }
    }

    fn summary(outcome: &AnalysisOutcome) -> String {
        let mut parts = vec![
            format!("file {}", outcome.remote_name),
            format!("{} state checks", outcome.state_checks),
            format!("{} tool calls", outcome.tool_calls),
        ];
        if let Some(model) = &outcome.model {
            parts.push(model.clone());
        }
        parts.push(format!("{:.1}s", outcome.elapsed_ms as f64 / 1000.0));
        parts.join(" | ")
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(60);
        format!("{}\n{:^60}\n{}", line.cyan(), title.bold(), line.cyan())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use summarizer_domain::DomainError;

    fn outcome() -> AnalysisOutcome {
        AnalysisOutcome {
            answer: "A dog catches a frisbee.\n".to_string(),
            query: "What happens in this video?".to_string(),
            remote_name: "files/abc".to_string(),
            state_checks: 3,
            tool_calls: 1,
            model: Some("gemini-2.0-flash-exp".to_string()),
            elapsed_ms: 4200,
        }
    }

    #[test]
    fn test_format_contains_heading_and_answer() {
        colored::control::set_override(false);
        let text = ConsoleFormatter::format(&outcome());
        assert!(text.contains("Analysis result"));
        assert!(text.contains("Q: What happens in this video?"));
        assert!(text.contains("A dog catches a frisbee."));
        assert!(text.contains("3 state checks | 1 tool calls | gemini-2.0-flash-exp | 4.2s"));
    }

    #[test]
    fn test_format_json() {
        let json: serde_json::Value =
            serde_json::from_str(&ConsoleFormatter::format_json(&outcome())).unwrap();
        assert_eq!(json["remote_name"], "files/abc");
        assert_eq!(json["state_checks"], 3);
    }

    #[test]
    fn test_format_error_prefixes() {
        colored::control::set_override(false);
        let warning = AnalyzeVideoError::EmptyQuery(DomainError::EmptyQuery);
        assert!(ConsoleFormatter::format_error(&warning).starts_with("Warning: Please enter a question"));

        let error = AnalyzeVideoError::ProcessingFailed {
            name: "files/abc".to_string(),
            reason: None,
        };
        assert_eq!(
            ConsoleFormatter::format_error(&error),
            "Error: An error occurred during analysis: video processing failed for files/abc"
        );
    }
}

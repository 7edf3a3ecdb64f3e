//! Analysis query value object

use super::error::DomainError;
use serde::{Deserialize, Serialize};

/// The user's question about an uploaded video (Value Object)
///
/// Always trimmed and non-empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisQuery {
    content: String,
}

impl AnalysisQuery {
    /// Validate raw user input.
    pub fn parse(raw: &str) -> Result<Self, DomainError> {
        let content = raw.trim();
        if content.is_empty() {
            return Err(DomainError::EmptyQuery);
        }
        Ok(Self {
            content: content.to_string(),
        })
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn into_content(self) -> String {
        self.content
    }
}

impl std::fmt::Display for AnalysisQuery {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_trims() {
        let q = AnalysisQuery::parse("  What happens in this video?\n").unwrap();
        assert_eq!(q.content(), "What happens in this video?");
    }

    #[test]
    fn test_parse_rejects_blank() {
        for raw in ["", " ", "\n\t  ", "\u{3000}"] {
            assert_eq!(AnalysisQuery::parse(raw), Err(DomainError::EmptyQuery));
        }
    }
}

//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Please enter a question or insights to analyze the video")]
    EmptyQuery,

    #[error("API key is required")]
    MissingApiKey,

    #[error("Unsupported video format: {0} (expected mp4, mov or avi)")]
    UnsupportedFormat(String),

    #[error("Invalid model: {0}")]
    InvalidModel(String),
}

impl DomainError {
    /// Errors the user can fix from the input form, shown as warnings rather than failures.
    pub fn is_user_input(&self) -> bool {
        matches!(
            self,
            DomainError::EmptyQuery | DomainError::MissingApiKey | DomainError::UnsupportedFormat(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_query_message() {
        assert_eq!(
            DomainError::EmptyQuery.to_string(),
            "Please enter a question or insights to analyze the video"
        );
    }

    #[test]
    fn test_user_input_classification() {
        assert!(DomainError::EmptyQuery.is_user_input());
        assert!(DomainError::MissingApiKey.is_user_input());
        assert!(DomainError::UnsupportedFormat("mkv".to_string()).is_user_input());
        assert!(!DomainError::InvalidModel(String::new()).is_user_input());
    }
}

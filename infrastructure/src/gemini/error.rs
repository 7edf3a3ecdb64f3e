//! Error types for the Gemini adapter

use summarizer_application::{GatewayError, MediaError};
use thiserror::Error;

/// Result type alias for Gemini operations
pub type Result<T> = std::result::Result<T, GeminiError>;

/// Errors that can occur when talking to the Generative Language API
#[derive(Error, Debug)]
pub enum GeminiError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("could not read video: {0}")]
    Io(#[from] std::io::Error),

    #[error("API error (HTTP {status}): {message}")]
    Api { status: u16, message: String },

    #[error("upload session did not return an upload URL")]
    MissingUploadUrl,

    #[error("Failed to parse response: {error}\nRaw response: {raw}")]
    ParseError { error: String, raw: String },
}

impl GeminiError {
    /// HTTP status codes meaning the key was missing, invalid or lacks access.
    ///
    /// The API answers an invalid key with 400 and an explanatory message.
    pub fn is_auth(&self) -> bool {
        match self {
            GeminiError::Api { status, message } => {
                matches!(status, 401 | 403)
                    || (*status == 400 && message.contains("API key"))
            }
            _ => false,
        }
    }

    fn is_timeout(&self) -> bool {
        matches!(self, GeminiError::Http(e) if e.is_timeout())
    }
}

impl From<GeminiError> for MediaError {
    fn from(err: GeminiError) -> Self {
        if err.is_auth() {
            return MediaError::Unauthorized(err.to_string());
        }
        match err {
            GeminiError::Io(e) => MediaError::Io(e.to_string()),
            GeminiError::Http(e) => MediaError::Connection(e.to_string()),
            GeminiError::Api { status, message } => MediaError::Rejected { status, message },
            other => MediaError::InvalidResponse(other.to_string()),
        }
    }
}

impl From<GeminiError> for GatewayError {
    fn from(err: GeminiError) -> Self {
        if err.is_auth() {
            return GatewayError::Unauthorized(err.to_string());
        }
        if err.is_timeout() {
            return GatewayError::Timeout;
        }
        match err {
            GeminiError::Http(e) => GatewayError::ConnectionError(e.to_string()),
            GeminiError::Api { status: 404, message } => GatewayError::ModelNotAvailable(message),
            GeminiError::Api { status, message } => {
                GatewayError::RequestFailed(format!("HTTP {}: {}", status, message))
            }
            other => GatewayError::Other(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn api(status: u16, message: &str) -> GeminiError {
        GeminiError::Api {
            status,
            message: message.to_string(),
        }
    }

    #[test]
    fn test_invalid_key_maps_to_unauthorized() {
        let err = api(400, "API key not valid. Please pass a valid API key.");
        assert!(matches!(MediaError::from(err), MediaError::Unauthorized(_)));
        assert!(matches!(
            GatewayError::from(api(403, "forbidden")),
            GatewayError::Unauthorized(_)
        ));
    }

    #[test]
    fn test_rejections_keep_status() {
        match MediaError::from(api(413, "too large")) {
            MediaError::Rejected { status, message } => {
                assert_eq!(status, 413);
                assert_eq!(message, "too large");
            }
            other => panic!("unexpected: {:?}", other),
        }
    }

    #[test]
    fn test_unknown_model_maps_to_model_not_available() {
        assert!(matches!(
            GatewayError::from(api(404, "models/gemini-x is not found")),
            GatewayError::ModelNotAvailable(_)
        ));
    }
}

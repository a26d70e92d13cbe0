//! Server error types

use thiserror::Error;

use super::types::{INTERNAL_ERROR, INVALID_PARAMS, INVALID_REQUEST, METHOD_NOT_FOUND, PARSE_ERROR};

/// Errors that end a request with a JSON-RPC error response
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Parse error: message is not valid UTF-8: {0}")]
    Encoding(#[from] std::str::Utf8Error),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Unknown method: {0}")]
    MethodNotFound(String),

    #[error("Invalid params: {0}")]
    InvalidParams(String),

    #[error("Tool not found: {0}")]
    UnknownTool(String),

    #[error("Resource not found: {0}")]
    UnknownResource(String),

    #[error("Prompt not found: {0}")]
    UnknownPrompt(String),

    #[error("Missing required argument '{argument}' for prompt {prompt}")]
    MissingArgument { prompt: String, argument: String },

    #[error("Failed to render prompt {name}: {message}")]
    Render { name: String, message: String },

    #[error("Internal error: {0}")]
    Internal(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl ServerError {
    /// JSON-RPC error code for this error
    pub fn code(&self) -> i32 {
        match self {
            ServerError::Parse(_) | ServerError::Encoding(_) => PARSE_ERROR,
            ServerError::InvalidRequest(_) => INVALID_REQUEST,
            ServerError::MethodNotFound(_) => METHOD_NOT_FOUND,
            ServerError::InvalidParams(_)
            | ServerError::UnknownTool(_)
            | ServerError::UnknownResource(_)
            | ServerError::UnknownPrompt(_)
            | ServerError::MissingArgument { .. } => INVALID_PARAMS,
            ServerError::Render { .. } | ServerError::Internal(_) | ServerError::Io(_) => INTERNAL_ERROR,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes() {
        assert_eq!(ServerError::MethodNotFound("x".into()).code(), METHOD_NOT_FOUND);
        assert_eq!(ServerError::UnknownTool("x".into()).code(), INVALID_PARAMS);
        assert_eq!(ServerError::UnknownResource("x".into()).code(), INVALID_PARAMS);
        assert_eq!(
            ServerError::Render {
                name: "p".into(),
                message: "bad".into()
            }
            .code(),
            INTERNAL_ERROR
        );

        let parse = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        assert_eq!(ServerError::from(parse).code(), PARSE_ERROR);

        let encoding = std::str::from_utf8(b"\xff").unwrap_err();
        assert_eq!(ServerError::from(encoding).code(), PARSE_ERROR);
    }

    #[test]
    fn test_missing_argument_message() {
        let err = ServerError::MissingArgument {
            prompt: "explain".to_string(),
            argument: "code".to_string(),
        };

        let msg = err.to_string();
        assert!(msg.contains("'code'"));
        assert!(msg.contains("explain"));
    }
}

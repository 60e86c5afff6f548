use std::io;
use thiserror::Error;

/// Everything that can go wrong while fetching and rendering a payload
#[derive(Error, Debug)]
pub enum InspectError {
    /// Network failure: connection refused, DNS failure, truncated body
    #[error("HTTP request error: {0}")]
    Request(#[from] reqwest::Error),

    /// The server answered with a non-success status
    #[error("request failed with status {0}")]
    Status(reqwest::StatusCode),

    /// The body is not valid JSON
    #[error("failed to parse response as JSON: {0}")]
    Parse(#[from] serde_json::Error),

    /// Writing the rendering failed
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_message_carries_the_code() {
        let err = InspectError::Status(reqwest::StatusCode::NOT_FOUND);
        assert_eq!(err.to_string(), "request failed with status 404 Not Found");
    }

    #[test]
    fn parse_error_converts() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: InspectError = json_err.into();
        assert!(err.to_string().starts_with("failed to parse response as JSON"));
    }
}

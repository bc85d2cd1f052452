//! Submission failure kinds

use thiserror::Error;

/// Why a submission did not go through
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    /// The relay answered, but not with a success status
    #[error("relay responded with status {status}")]
    Rejected { status: u16 },
    /// No response was obtained
    #[error("request failed: {0}")]
    Transport(String),
}

impl From<reqwest::Error> for SubmitError {
    fn from(err: reqwest::Error) -> Self {
        SubmitError::Transport(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_includes_status() {
        let err = SubmitError::Rejected { status: 503 };
        assert_eq!(err.to_string(), "relay responded with status 503");
    }

    #[test]
    fn test_display_includes_cause() {
        let err = SubmitError::Transport("connection refused".to_string());
        assert_eq!(err.to_string(), "request failed: connection refused");
    }
}

use thiserror::Error;

/// Errors that can occur while driving the challenge UI
#[derive(Debug, Error)]
pub enum HarvestError {
    /// No username/password available from flags or environment
    #[error("missing credentials: pass --username/--password or set {username_var} and {password_var}")]
    MissingCredentials {
        username_var: &'static str,
        password_var: &'static str,
    },

    /// Failed to launch the browser
    #[error("failed to launch browser: {0}")]
    LaunchFailed(String),

    /// Failed to navigate to a URL
    #[error("navigation failed: {0}")]
    NavigationFailed(String),

    /// A required control could not be located by any candidate selector
    #[error("element not found: {0}")]
    ElementNotFound(String),

    /// JavaScript evaluation in the page failed
    #[error("evaluation failed: {0}")]
    EvaluationFailed(String),

    /// Login flow failed (fields missing, submit missing, or marker absent after submit)
    #[error("authentication failed: {0}")]
    AuthenticationFailed(String),

    /// Session-state blob could not be handed to or retrieved from the browser
    #[error("session state error: {0}")]
    SessionState(String),

    /// Tab-level browser operation failed
    #[error("tab operation failed: {0}")]
    TabOperationFailed(String),

    /// I/O error (output file, session-state file)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for harvest operations
pub type Result<T> = std::result::Result<T, HarvestError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = HarvestError::ElementNotFound("login submit button".to_string());
        assert_eq!(err.to_string(), "element not found: login submit button");
    }

    #[test]
    fn test_missing_credentials_names_env_vars() {
        let err = HarvestError::MissingCredentials {
            username_var: "IDEN_USERNAME",
            password_var: "IDEN_PASSWORD",
        };
        let msg = err.to_string();
        assert!(msg.contains("IDEN_USERNAME"));
        assert!(msg.contains("IDEN_PASSWORD"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err: HarvestError = io_err.into();
        assert!(matches!(err, HarvestError::Io(_)));
    }
}

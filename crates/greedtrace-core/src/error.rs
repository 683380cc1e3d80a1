//! Error types and exit codes for greedtrace
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure (trace sink gone, IO)
//! - 2: Usage error (malformed request, unknown algorithm, bad config)

mod macros;

use thiserror::Error;

/// Process exit codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad request, flags or config (2)
    Usage = 2,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur while validating a request or running an engine
#[derive(Error, Debug)]
pub enum GreedError {
    // Usage errors (exit code 2)
    #[error("invalid number of edge arguments: got {count}, expected triplets of u v w")]
    MalformedRequest { count: usize },

    #[error("failed to parse edge input: {token:?} is not an integer")]
    InvalidNumber { token: String },

    #[error("unknown algorithm: {0} (expected: dijkstra or prims)")]
    UnknownAlgorithm(String),

    #[error("{0}")]
    UsageError(String),

    #[error("invalid config {path}: {reason}")]
    InvalidConfig { path: String, reason: String },

    // Generic failures (exit code 1)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("failed to emit {record} record: {reason}")]
    Emit { record: String, reason: String },

    #[error("{0}")]
    Other(String),
}

impl GreedError {
    /// Create an error for a token that is not an integer
    pub fn invalid_number(token: impl Into<String>) -> Self {
        GreedError::InvalidNumber {
            token: token.into(),
        }
    }

    /// Create an error for an unrecognized algorithm selector
    pub fn unknown_algorithm(selector: impl std::fmt::Display) -> Self {
        GreedError::UnknownAlgorithm(selector.to_string())
    }

    /// Create an error for a config file that could not be used
    pub fn invalid_config(path: impl std::fmt::Display, reason: impl std::fmt::Display) -> Self {
        GreedError::InvalidConfig {
            path: path.to_string(),
            reason: reason.to_string(),
        }
    }

    /// Create an error for a trace record the sink refused
    pub fn emit(record: &str, error: impl std::fmt::Display) -> Self {
        GreedError::Emit {
            record: record.to_string(),
            reason: error.to_string(),
        }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            GreedError::MalformedRequest { .. }
            | GreedError::InvalidNumber { .. }
            | GreedError::UnknownAlgorithm(_)
            | GreedError::UsageError(_)
            | GreedError::InvalidConfig { .. }
            | GreedError::Toml(_) => ExitCode::Usage,

            GreedError::Io(_)
            | GreedError::Json(_)
            | GreedError::Emit { .. }
            | GreedError::Other(_) => ExitCode::Failure,
        }
    }

    /// Get the error type identifier
    pub fn error_type(&self) -> &'static str {
        match self {
            GreedError::MalformedRequest { .. } => "malformed_request",
            GreedError::InvalidNumber { .. } => "invalid_number",
            GreedError::UnknownAlgorithm(_) => "unknown_algorithm",
            GreedError::UsageError(_) => "usage_error",
            GreedError::InvalidConfig { .. } => "invalid_config",
            GreedError::Io(_) => "io_error",
            GreedError::Json(_) => "json_error",
            GreedError::Toml(_) => "toml_error",
            GreedError::Emit { .. } => "emit_failed",
            GreedError::Other(_) => "other",
        }
    }

    /// Whether this error was detected before any trace record was emitted
    pub fn is_request_error(&self) -> bool {
        self.exit_code() == ExitCode::Usage
    }

    /// Convert error to the structured error record written to stderr
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "error",
            "error": {
                "code": self.exit_code() as i32,
                "type": self.error_type(),
                "message": self.to_string(),
            }
        })
    }
}

/// Result type alias for greedtrace operations
pub type Result<T> = std::result::Result<T, GreedError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_errors_use_usage_exit_code() {
        assert_eq!(
            GreedError::MalformedRequest { count: 4 }.exit_code(),
            ExitCode::Usage
        );
        assert_eq!(
            GreedError::invalid_number("x").exit_code(),
            ExitCode::Usage
        );
        assert_eq!(
            GreedError::unknown_algorithm("kruskal").exit_code(),
            ExitCode::Usage
        );
    }

    #[test]
    fn test_emit_failure_is_generic_failure() {
        let err = GreedError::emit("visit", "broken pipe");
        assert_eq!(err.exit_code(), ExitCode::Failure);
        assert!(!err.is_request_error());
        assert_eq!(err.to_string(), "failed to emit visit record: broken pipe");
    }

    #[test]
    fn test_to_json_shape() {
        let json = GreedError::unknown_algorithm("kruskal").to_json();
        assert_eq!(json["type"], "error");
        assert_eq!(json["error"]["code"], 2);
        assert_eq!(json["error"]["type"], "unknown_algorithm");
        assert_eq!(
            json["error"]["message"],
            "unknown algorithm: kruskal (expected: dijkstra or prims)"
        );
    }
}

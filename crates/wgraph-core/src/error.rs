//! Error types and exit codes for wgraph
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args/config values)
//! - 3: Graph data error (duplicate or unknown vertex, bad weight, no path)

use std::fmt::Debug;

use thiserror::Error;

use crate::graph::ObserverError;

/// Exit codes for the wgraph binary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Graph data error (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur during graph construction and algorithm runs
#[derive(Error, Debug)]
pub enum GraphError {
    // Graph data errors (exit code 3)
    #[error("vertex already present: {vertex}")]
    DuplicateVertex { vertex: String },

    #[error("unknown vertex: {vertex}")]
    UnknownVertex { vertex: String },

    #[error("invalid weight {weight} on edge {from} -> {to} (weights must be >= 0)")]
    InvalidWeight {
        from: String,
        to: String,
        weight: i64,
    },

    #[error("no path from {from} to {to}")]
    Unreachable { from: String, to: String },

    // Usage errors (exit code 2)
    #[error("unknown format: {0} (expected: human, json, or records)")]
    UnknownFormat(String),

    #[error("{0}")]
    UsageError(String),

    #[error("invalid {context}: {value}")]
    InvalidValue { context: String, value: String },

    // Generic failures (exit code 1)
    #[error("observer failed: {0}")]
    Observer(#[from] ObserverError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("{0}")]
    Other(String),
}

impl GraphError {
    /// Create an error for a vertex that is already in the graph
    pub fn duplicate_vertex(vertex: &impl Debug) -> Self {
        GraphError::DuplicateVertex {
            vertex: format!("{:?}", vertex),
        }
    }

    /// Create an error for a vertex that is not in the graph
    pub fn unknown_vertex(vertex: &impl Debug) -> Self {
        GraphError::UnknownVertex {
            vertex: format!("{:?}", vertex),
        }
    }

    /// Create an error for a negative edge weight
    pub fn invalid_weight(from: &impl Debug, to: &impl Debug, weight: i64) -> Self {
        GraphError::InvalidWeight {
            from: format!("{:?}", from),
            to: format!("{:?}", to),
            weight,
        }
    }

    /// Create an error for a target no path leads to
    pub fn unreachable(from: &impl Debug, to: &impl Debug) -> Self {
        GraphError::Unreachable {
            from: format!("{:?}", from),
            to: format!("{:?}", to),
        }
    }

    /// Create an error for an invalid value or configuration
    pub fn invalid_value(context: &str, value: impl std::fmt::Display) -> Self {
        GraphError::InvalidValue {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            GraphError::UnknownFormat(_)
            | GraphError::UsageError(_)
            | GraphError::InvalidValue { .. } => ExitCode::Usage,

            GraphError::DuplicateVertex { .. }
            | GraphError::UnknownVertex { .. }
            | GraphError::InvalidWeight { .. }
            | GraphError::Unreachable { .. } => ExitCode::Data,

            GraphError::Observer(_)
            | GraphError::Io(_)
            | GraphError::Json(_)
            | GraphError::Toml(_)
            | GraphError::Other(_) => ExitCode::Failure,
        }
    }

    /// Get the error type identifier
    fn error_type(&self) -> &'static str {
        match self {
            GraphError::DuplicateVertex { .. } => "duplicate_vertex",
            GraphError::UnknownVertex { .. } => "unknown_vertex",
            GraphError::InvalidWeight { .. } => "invalid_weight",
            GraphError::Unreachable { .. } => "unreachable",
            GraphError::UnknownFormat(_) => "unknown_format",
            GraphError::UsageError(_) => "usage_error",
            GraphError::InvalidValue { .. } => "invalid_value",
            GraphError::Observer(_) => "observer_error",
            GraphError::Io(_) => "io_error",
            GraphError::Json(_) => "json_error",
            GraphError::Toml(_) => "toml_error",
            GraphError::Other(_) => "other",
        }
    }

    /// Convert error to JSON representation for structured error output.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "error": {
                "code": self.exit_code() as i32,
                "type": self.error_type(),
                "message": self.to_string(),
            }
        })
    }
}

/// Result type alias for wgraph operations
pub type Result<T> = std::result::Result<T, GraphError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes_by_category() {
        assert_eq!(
            GraphError::duplicate_vertex(&"A").exit_code(),
            ExitCode::Data
        );
        assert_eq!(
            GraphError::invalid_weight(&"A", &"B", -1).exit_code(),
            ExitCode::Data
        );
        assert_eq!(
            GraphError::invalid_value("format", "xml").exit_code(),
            ExitCode::Usage
        );
        assert_eq!(
            GraphError::Observer(ObserverError::new("boom")).exit_code(),
            ExitCode::Failure
        );
    }

    #[test]
    fn test_vertex_rendered_with_debug() {
        let err = GraphError::unknown_vertex(&"Z");
        assert_eq!(err.to_string(), "unknown vertex: \"Z\"");

        let err = GraphError::unreachable(&1u32, &7u32);
        assert_eq!(err.to_string(), "no path from 1 to 7");
    }

    #[test]
    fn test_to_json_envelope() {
        let json = GraphError::invalid_weight(&"A", &"B", -4).to_json();
        assert_eq!(json["error"]["code"], 3);
        assert_eq!(json["error"]["type"], "invalid_weight");
        assert!(json["error"]["message"]
            .as_str()
            .unwrap()
            .contains("invalid weight -4"));
    }
}

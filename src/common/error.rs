//! Error types for the test case runner
//!
//! Parameter errors carry the exact, parameter-specific message that is
//! shown to the author of the descriptor file.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the runner
#[derive(Error, Debug)]
pub enum Error {
    // === Parameter Errors ===
    #[error("Parameter {key} is mandatory, but missing.")]
    MissingParameter { key: String },

    #[error("{0}")]
    IllegalParameter(String),

    // === Resolution Errors ===
    #[error("Illegal {kind}, no corresponding class found.")]
    UnknownBehavior { kind: &'static str },

    #[error("Behavior {name} is wrongly defined, no instance could be created: {reason}")]
    MalformedBehaviorDefinition { name: String, reason: String },

    // === Execution Errors ===
    #[error("{message}")]
    BehaviorExecutionFailed {
        message: String,
        #[source]
        source: io::Error,
    },

    // === Descriptor Errors ===
    #[error("No path to descriptor file submitted")]
    DescriptorPathMissing,

    #[error("Failed to read descriptor '{}': {source}", .path.display())]
    DescriptorRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to parse descriptor: {0}")]
    DescriptorParseFailed(String),

    // === Configuration Errors ===
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid configuration file: {0}")]
    ConfigParse(String),

    // === IO Errors ===
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    // === Serialization Errors ===
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Create a missing parameter error for `key`
    pub fn missing(key: &str) -> Self {
        Self::MissingParameter {
            key: key.to_string(),
        }
    }

    /// Create the generic wrong-type error for `key`
    pub fn illegal_parameter(key: &str) -> Self {
        Self::IllegalParameter(format!("Illegal value for parameter {key}."))
    }

    /// Create an execution failure wrapping the underlying I/O fault
    pub fn execution_failed(message: &str, source: io::Error) -> Self {
        Self::BehaviorExecutionFailed {
            message: message.to_string(),
            source,
        }
    }

    /// Whether this error came from reading or validating a parameter
    pub fn is_parameter_error(&self) -> bool {
        matches!(
            self,
            Self::MissingParameter { .. } | Self::IllegalParameter(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parameter_messages() {
        assert_eq!(
            Error::missing("with_name").to_string(),
            "Parameter with_name is mandatory, but missing."
        );
        assert_eq!(
            Error::illegal_parameter("file_count").to_string(),
            "Illegal value for parameter file_count."
        );
    }

    #[test]
    fn test_unknown_behavior_message() {
        let e = Error::UnknownBehavior { kind: "trigger_id" };
        assert_eq!(
            e.to_string(),
            "Illegal trigger_id, no corresponding class found."
        );
    }

    #[test]
    fn test_is_parameter_error() {
        assert!(Error::missing("after").is_parameter_error());
        assert!(Error::illegal_parameter("after").is_parameter_error());
        assert!(!Error::DescriptorParseFailed("x".into()).is_parameter_error());
    }
}

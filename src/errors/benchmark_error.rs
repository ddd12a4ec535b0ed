//! Error types for benchmark runs, suite configuration and suite execution.

use std::error::Error as StdError;
use thiserror::Error;

/// Errors that can occur while configuring or executing a benchmark.
#[derive(Error, Debug)]
pub enum BenchmarkError {
    #[error("Invalid argument for benchmark '{name}': {message}")]
    InvalidArgument { name: String, message: String },

    #[error("Benchmark '{name}' failed on invocation {invocation} of {iterations}: {source}")]
    OperationFailed {
        name: String,
        invocation: u64,
        iterations: u64,
        #[source]
        source: Box<dyn StdError + Send + Sync + 'static>,
    },

    #[error("Failed to parse configuration file '{path}': {source}")]
    ConfigParseError {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Configuration validation error for field '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid operation type: '{operation}'. Supported: {supported}")]
    InvalidOperationType { operation: String, supported: String },

    #[error("Unknown benchmark suite: '{name}'")]
    UnknownSuite { name: String },

    #[error("Outputs of '{operation}' differ between implementations in suite '{suite}'")]
    OutputMismatch { suite: String, operation: String },

    #[error("{failed} of {total} benchmark suites failed")]
    SuitesFailed { failed: usize, total: usize },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl BenchmarkError {
    /// Stable, machine-friendly name of the failure kind.
    pub fn kind(&self) -> &'static str {
        match self {
            BenchmarkError::InvalidArgument { .. } => "invalid_argument",
            BenchmarkError::OperationFailed { .. } => "operation_failed",
            BenchmarkError::ConfigParseError { .. } => "config_parse",
            BenchmarkError::ConfigValidationError { .. } => "config_validation",
            BenchmarkError::InvalidOperationType { .. } => "invalid_operation_type",
            BenchmarkError::UnknownSuite { .. } => "unknown_suite",
            BenchmarkError::OutputMismatch { .. } => "output_mismatch",
            BenchmarkError::SuitesFailed { .. } => "suites_failed",
            BenchmarkError::Io(_) => "io",
        }
    }

    pub(crate) fn invalid_argument(name: &str, message: impl Into<String>) -> Self {
        BenchmarkError::InvalidArgument {
            name: name.to_string(),
            message: message.into(),
        }
    }
}

//! Error types for the benchmark harness.
//!
//! Each concern gets its own error enum instead of a generic wrapper such as
//! `anyhow`, so callers can match on the exact failure.

mod array_op_error;
mod benchmark_error;

pub use array_op_error::ArrayOpError;
pub use benchmark_error::BenchmarkError;

/// Result type alias for harness, configuration and suite operations.
pub type HarnessResult<T> = std::result::Result<T, BenchmarkError>;

/// Result type alias for array operations.
pub type ArrayOpResult<T> = std::result::Result<T, ArrayOpError>;

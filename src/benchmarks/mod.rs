//! Timed benchmark harness and the array operation suites built on it.
//!
//! [`BenchmarkRunner`] measures repeated invocations of a single operation,
//! [`report`] and [`ComparisonReport`] turn results into text, and
//! [`SuiteRunner`] compares a manual array baseline against `ndarray`.

pub mod array_ops;
pub mod benchmark_runner;
pub mod benchmark_types;
pub mod performance_metrics;
pub mod suite_runner;

pub use array_ops::{ManualArray, NdArray, NumericArray};
pub use benchmark_runner::{BenchmarkRunner, report};
pub use benchmark_types::{ArrayOperation, ArrayOpsConfig, BenchmarkResult, MAX_ARRAY_LEN};
pub use performance_metrics::{ComparisonReport, comparison_report, verify_outputs_match};
pub use suite_runner::{
    ArrayPreview, ConfigLoader, MACRO_SUITE, MICRO_SUITE, SuiteReport, SuiteRunner,
};

//! Micro-benchmark harness for comparing the cost of atomic operations across
//! implementations.
//!
//! The core is [`BenchmarkRunner`], which times a caller-supplied operation over
//! a fixed number of iterations and returns an immutable [`BenchmarkResult`].
//! The bundled suites time basic numeric-array operations (introspection,
//! element access, element-wise and scalar addition) on a plain `Vec<f64>`
//! baseline and on `ndarray`.

pub mod benchmarks;
pub mod errors;

pub use benchmarks::{BenchmarkResult, BenchmarkRunner, report};
pub use errors::{ArrayOpError, BenchmarkError, HarnessResult};

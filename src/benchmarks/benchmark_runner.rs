//! Core benchmark execution logic.

use super::benchmark_types::BenchmarkResult;
use crate::errors::{BenchmarkError, HarnessResult};
use log::debug;
use std::convert::Infallible;
use std::error::Error;
use std::hint::black_box;
use std::time::{Duration, Instant};

/// Times repeated invocations of a caller-supplied operation.
///
/// The runner holds no state, so independent runs may happen concurrently on
/// different threads as long as the operations themselves allow it.
pub struct BenchmarkRunner;

impl BenchmarkRunner {
    /// Invokes `operation` exactly `iterations` times on the calling thread and
    /// measures the total wall-clock time with a monotonic clock.
    ///
    /// The first `Err` returned by `operation` aborts the run; no result is
    /// produced for a run with a failed iteration.
    pub fn run<F, T, E>(
        name: &str,
        iterations: i64,
        mut operation: F,
    ) -> HarnessResult<BenchmarkResult>
    where
        F: FnMut() -> Result<T, E>,
        E: Into<Box<dyn Error + Send + Sync + 'static>>,
    {
        if name.is_empty() {
            return Err(BenchmarkError::invalid_argument(
                name,
                "benchmark name must not be empty",
            ));
        }
        if iterations <= 0 {
            return Err(BenchmarkError::invalid_argument(
                name,
                format!("iterations must be greater than 0, got {}", iterations),
            ));
        }
        let iterations = iterations as u64;

        debug!("Benchmarking {} ({} iterations)...", name, iterations);

        let start = Instant::now();
        for invocation in 1..=iterations {
            match operation() {
                Ok(value) => {
                    black_box(value);
                }
                Err(e) => {
                    return Err(BenchmarkError::OperationFailed {
                        name: name.to_string(),
                        invocation,
                        iterations,
                        source: e.into(),
                    });
                }
            }
        }
        let total_elapsed = start.elapsed();

        debug!("Finished {} in {:?}", name, total_elapsed);

        Ok(BenchmarkResult::new(name.to_string(), iterations, total_elapsed))
    }

    /// Same as [`BenchmarkRunner::run`] for operations that cannot fail.
    pub fn run_infallible<F, T>(
        name: &str,
        iterations: i64,
        mut operation: F,
    ) -> HarnessResult<BenchmarkResult>
    where
        F: FnMut() -> T,
    {
        Self::run(name, iterations, || Ok::<T, Infallible>(operation()))
    }
}

/// Formats a human-readable summary of `result`.
///
/// ```text
/// add (1000 iterations): 0.0123 seconds
/// Average time per iteration: 12.30 microseconds
/// ```
pub fn report(result: &BenchmarkResult) -> String {
    format!(
        "{} ({} iterations): {:.4} seconds\nAverage time per iteration: {}",
        result.operation_name(),
        result.iterations(),
        result.total_elapsed().as_secs_f64(),
        format_per_iteration(result.per_iteration_secs())
    )
}

/// Picks the unit so sub-millisecond costs never print as zero seconds.
///
/// The unit is chosen after rounding to the printed precision, so a value just
/// below a boundary moves up to the next unit instead of printing `1000.00`.
pub(crate) fn format_per_iteration(secs: f64) -> String {
    let round2 = |value: f64| (value * 100.0).round() / 100.0;

    let micros = round2(secs * 1e6);
    if micros < 1000.0 {
        return format!("{:.2} microseconds", micros);
    }
    let millis = round2(secs * 1e3);
    if millis < 1000.0 {
        return format!("{:.2} milliseconds", millis);
    }
    format!("{:.4} seconds", secs)
}

pub(crate) fn format_duration(duration: Duration) -> String {
    format_per_iteration(duration.as_secs_f64())
}

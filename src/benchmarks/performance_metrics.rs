//! Comparison and verification utilities for benchmark results.

use super::benchmark_runner::{format_duration, format_per_iteration};
use super::benchmark_types::BenchmarkResult;
use log::warn;
use std::fmt;

const OUTPUT_EPSILON: f64 = 1e-9;

/// Detailed comparison of a set of results.
///
/// The first result is the baseline every other result is compared against.
pub struct ComparisonReport<'a> {
    results: &'a [BenchmarkResult],
}

impl<'a> ComparisonReport<'a> {
    pub fn new(results: &'a [BenchmarkResult]) -> Self {
        Self { results }
    }
}

impl fmt::Display for ComparisonReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Some(baseline) = self.results.first() else {
            return Ok(());
        };

        writeln!(f, "Detailed Results")?;
        for result in self.results {
            writeln!(f, "\n  {}", result.operation_name())?;
            writeln!(
                f,
                "    Average time: {}",
                format_per_iteration(result.per_iteration_secs())
            )?;
            writeln!(f, "    Total time: {}", format_duration(result.total_elapsed()))?;
            writeln!(f, "    Iterations: {}", result.iterations())?;

            if result.operation_name() == baseline.operation_name() {
                continue;
            }
            match (
                result.overhead_ratio(baseline),
                result.overhead_percentage(baseline),
            ) {
                (Some(ratio), Some(percentage)) => writeln!(
                    f,
                    "    Overhead vs {}: {:.2}x ({:.1}%)",
                    baseline.operation_name(),
                    ratio,
                    percentage
                )?,
                _ => writeln!(
                    f,
                    "    Overhead vs {}: n/a (baseline too fast to measure)",
                    baseline.operation_name()
                )?,
            }
        }

        writeln!(f, "\nSpeed Rankings (fastest to slowest):")?;
        let mut sorted_results: Vec<&BenchmarkResult> = self.results.iter().collect();
        sorted_results.sort_by(|a, b| a.per_iteration_secs().total_cmp(&b.per_iteration_secs()));

        for (i, result) in sorted_results.iter().enumerate() {
            writeln!(
                f,
                "  {}. {}: {}",
                i + 1,
                result.operation_name(),
                format_per_iteration(result.per_iteration_secs())
            )?;
        }
        Ok(())
    }
}

/// Renders [`ComparisonReport`] for `results` into a string.
pub fn comparison_report(results: &[BenchmarkResult]) -> String {
    ComparisonReport::new(results).to_string()
}

/// Checks that two implementations produced the same elements.
pub fn verify_outputs_match(expected: &[f64], actual: &[f64]) -> bool {
    if expected.len() != actual.len() {
        warn!(
            "Output length mismatch: expected={}, actual={}",
            expected.len(),
            actual.len()
        );
        return false;
    }
    for (i, (e, a)) in expected.iter().zip(actual.iter()).enumerate() {
        if (e - a).abs() > OUTPUT_EPSILON {
            warn!(
                "Output mismatch at {}: expected={}, actual={}, diff={}",
                i,
                e,
                a,
                (e - a).abs()
            );
            return false;
        }
    }
    true
}

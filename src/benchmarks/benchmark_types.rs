//! Benchmark type definitions and configuration structures.

use crate::errors::{BenchmarkError, HarnessResult};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Outcome of one completed timed run.
///
/// Only [`BenchmarkRunner`](super::BenchmarkRunner) creates these, and only after
/// every iteration succeeded, so `iterations` is always at least one.
#[derive(Debug, Clone, PartialEq)]
pub struct BenchmarkResult {
    operation_name: String,
    iterations: u64,
    total_elapsed: Duration,
    per_iteration: Duration,
}

impl BenchmarkResult {
    pub(crate) fn new(operation_name: String, iterations: u64, total_elapsed: Duration) -> Self {
        debug_assert!(iterations > 0);
        let per_iteration_ns = total_elapsed.as_nanos() / iterations as u128;
        let per_iteration = Duration::from_nanos(per_iteration_ns as u64);

        Self {
            operation_name,
            iterations,
            total_elapsed,
            per_iteration,
        }
    }

    pub fn operation_name(&self) -> &str {
        &self.operation_name
    }

    pub fn iterations(&self) -> u64 {
        self.iterations
    }

    pub fn total_elapsed(&self) -> Duration {
        self.total_elapsed
    }

    /// Per-iteration time, truncated to whole nanoseconds.
    pub fn per_iteration(&self) -> Duration {
        self.per_iteration
    }

    /// Per-iteration time in seconds without nanosecond truncation.
    pub fn per_iteration_secs(&self) -> f64 {
        self.total_elapsed.as_secs_f64() / self.iterations as f64
    }

    /// How many times slower than `baseline` this result is.
    ///
    /// Returns `None` when the baseline took no measurable time.
    pub fn overhead_ratio(&self, baseline: &BenchmarkResult) -> Option<f64> {
        let baseline_secs = baseline.per_iteration_secs();
        if baseline_secs > 0.0 {
            Some(self.per_iteration_secs() / baseline_secs)
        } else {
            None
        }
    }

    pub fn overhead_percentage(&self, baseline: &BenchmarkResult) -> Option<f64> {
        self.overhead_ratio(baseline)
            .map(|ratio| (ratio - 1.0) * 100.0)
    }
}

/// A single array operation that a suite can time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArrayOperation {
    Shape,
    Size,
    Ndim,
    Dtype,
    Get,
    Add,
    AddScalar,
    /// Every other operation once per iteration.
    Combined,
}

impl ArrayOperation {
    pub const ALL: [ArrayOperation; 8] = [
        ArrayOperation::Shape,
        ArrayOperation::Size,
        ArrayOperation::Ndim,
        ArrayOperation::Dtype,
        ArrayOperation::Get,
        ArrayOperation::Add,
        ArrayOperation::AddScalar,
        ArrayOperation::Combined,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            ArrayOperation::Shape => "shape",
            ArrayOperation::Size => "size",
            ArrayOperation::Ndim => "ndim",
            ArrayOperation::Dtype => "dtype",
            ArrayOperation::Get => "get",
            ArrayOperation::Add => "add",
            ArrayOperation::AddScalar => "add_scalar",
            ArrayOperation::Combined => "combined",
        }
    }

    pub fn parse(operation: &str) -> HarnessResult<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|op| op.name() == operation)
            .ok_or_else(|| BenchmarkError::InvalidOperationType {
                operation: operation.to_string(),
                supported: Self::ALL
                    .iter()
                    .map(|op| op.name())
                    .collect::<Vec<_>>()
                    .join(", "),
            })
    }
}

/// Largest operand length a suite accepts; each operand is allocated up front.
pub const MAX_ARRAY_LEN: usize = 1 << 24;

/// Configuration for an array operations suite
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArrayOpsConfig {
    pub name: String,
    pub description: String,
    pub array_len: usize,
    pub element_index: usize,
    pub scalar: f64,
    pub operations: Vec<String>,
    /// Signed so that zero and negative counts in a config file surface as
    /// invalid arguments instead of parse errors.
    pub iterations: i64,
}

impl ArrayOpsConfig {
    /// Atomic operations on two 3-element arrays, repeated many times.
    pub fn micro() -> Self {
        Self {
            name: "micro_array_ops".to_string(),
            description: "Atomic operations on 3-element arrays".to_string(),
            array_len: 3,
            element_index: 1,
            scalar: 10.0,
            operations: ArrayOperation::ALL
                .iter()
                .map(|op| op.name().to_string())
                .collect(),
            iterations: 1_000_000,
        }
    }

    /// Element-wise operations on large arrays, repeated a few times.
    pub fn macro_ops() -> Self {
        Self {
            name: "macro_array_ops".to_string(),
            description: "Element-wise operations on 100,000-element arrays".to_string(),
            array_len: 100_000,
            element_index: 1,
            scalar: 10.0,
            operations: vec![
                "add".to_string(),
                "add_scalar".to_string(),
                "combined".to_string(),
            ],
            iterations: 20,
        }
    }

    /// Validates the configuration
    pub fn validate(&self) -> HarnessResult<()> {
        if self.iterations <= 0 {
            return Err(BenchmarkError::invalid_argument(
                &self.name,
                format!("iterations must be greater than 0, got {}", self.iterations),
            ));
        }

        if self.array_len == 0 {
            return Err(BenchmarkError::ConfigValidationError {
                field: "array_len".to_string(),
                message: "Array length must be greater than 0".to_string(),
            });
        }

        if self.array_len > MAX_ARRAY_LEN {
            return Err(BenchmarkError::ConfigValidationError {
                field: "array_len".to_string(),
                message: format!(
                    "Array length {} exceeds the maximum of {}",
                    self.array_len, MAX_ARRAY_LEN
                ),
            });
        }

        if self.element_index >= self.array_len {
            return Err(BenchmarkError::ConfigValidationError {
                field: "element_index".to_string(),
                message: format!(
                    "Element index {} must be less than the array length {}",
                    self.element_index, self.array_len
                ),
            });
        }

        if self.operations.is_empty() {
            return Err(BenchmarkError::ConfigValidationError {
                field: "operations".to_string(),
                message: "At least one operation is required".to_string(),
            });
        }

        self.parsed_operations().map(|_| ())
    }

    pub fn parsed_operations(&self) -> HarnessResult<Vec<ArrayOperation>> {
        self.operations
            .iter()
            .map(|op| ArrayOperation::parse(op))
            .collect()
    }

    /// Left and right operands: `lhs[i] = i + 1`, `rhs[i] = i + 1 + array_len`.
    pub fn operands(&self) -> (Vec<f64>, Vec<f64>) {
        let lhs = (0..self.array_len).map(|i| (i + 1) as f64).collect();
        let rhs = (0..self.array_len)
            .map(|i| (i + 1 + self.array_len) as f64)
            .collect();
        (lhs, rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operands_match_classic_example() {
        let (lhs, rhs) = ArrayOpsConfig::micro().operands();
        assert_eq!(lhs, vec![1.0, 2.0, 3.0]);
        assert_eq!(rhs, vec![4.0, 5.0, 6.0]);
    }

    #[test]
    fn test_array_len_upper_bound() {
        let at_limit = ArrayOpsConfig {
            array_len: MAX_ARRAY_LEN,
            ..ArrayOpsConfig::macro_ops()
        };
        assert!(at_limit.validate().is_ok());

        for array_len in [MAX_ARRAY_LEN + 1, usize::MAX] {
            let config = ArrayOpsConfig {
                array_len,
                ..ArrayOpsConfig::macro_ops()
            };
            assert!(matches!(
                config.validate(),
                Err(BenchmarkError::ConfigValidationError { field, .. }) if field == "array_len"
            ));
        }
    }

    #[test]
    fn test_parse_operation_names() {
        for op in ArrayOperation::ALL {
            assert_eq!(ArrayOperation::parse(op.name()).unwrap(), op);
        }
        assert!(matches!(
            ArrayOperation::parse("multiply"),
            Err(BenchmarkError::InvalidOperationType { .. })
        ));
    }

    #[test]
    fn test_per_iteration_division() {
        let result = BenchmarkResult::new("div".to_string(), 4, Duration::from_nanos(1_000));
        assert_eq!(result.per_iteration(), Duration::from_nanos(250));
        assert!((result.per_iteration_secs() - 250e-9).abs() < 1e-15);
    }

    #[test]
    fn test_overhead_against_zero_baseline() {
        let baseline = BenchmarkResult::new("zero".to_string(), 10, Duration::ZERO);
        let other = BenchmarkResult::new("other".to_string(), 10, Duration::from_micros(1));
        assert_eq!(other.overhead_ratio(&baseline), None);

        let ratio = baseline.overhead_ratio(&other).unwrap();
        assert_eq!(ratio, 0.0);
        assert_eq!(baseline.overhead_percentage(&other), Some(-100.0));
    }
}

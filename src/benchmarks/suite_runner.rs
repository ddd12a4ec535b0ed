//! Array operation suites: configuration loading, execution and reporting.

use super::array_ops::{ManualArray, NdArray, NumericArray};
use super::benchmark_runner::{BenchmarkRunner, report};
use super::benchmark_types::{ArrayOperation, ArrayOpsConfig, BenchmarkResult};
use super::performance_metrics::{ComparisonReport, verify_outputs_match};
use crate::errors::{ArrayOpError, ArrayOpResult, BenchmarkError, HarnessResult};
use log::{error, info, warn};
use std::fmt;
use std::fs;
use std::hint::black_box;

pub const MICRO_SUITE: &str = "micro_array_ops";
pub const MACRO_SUITE: &str = "macro_array_ops";

/// Configuration loader that handles JSON files with fallbacks
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load a configuration file, falling back to `default` when it is missing
    pub fn load_config<T, D>(path: &str, config_name: &str, default: D) -> HarnessResult<T>
    where
        T: serde::de::DeserializeOwned,
        D: FnOnce() -> T,
    {
        match fs::read_to_string(path) {
            Ok(content) => {
                serde_json::from_str(&content).map_err(|e| BenchmarkError::ConfigParseError {
                    path: path.to_string(),
                    source: e,
                })
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                warn!(
                    "Config file '{}' not found, using default configuration for {}",
                    path, config_name
                );
                Ok(default())
            }
            Err(e) => Err(e.into()),
        }
    }

    pub fn load_micro_config() -> HarnessResult<ArrayOpsConfig> {
        Self::load_config(
            "configs/micro_array_ops.json",
            MICRO_SUITE,
            ArrayOpsConfig::micro,
        )
    }

    pub fn load_macro_config() -> HarnessResult<ArrayOpsConfig> {
        Self::load_config(
            "configs/macro_array_ops.json",
            MACRO_SUITE,
            ArrayOpsConfig::macro_ops,
        )
    }
}

/// What one implementation returns for each operation, captured once.
#[derive(Debug, Clone, PartialEq)]
pub struct ArrayPreview {
    pub implementation: &'static str,
    pub shape: Vec<usize>,
    pub size: usize,
    pub ndim: usize,
    pub dtype: &'static str,
    pub element_index: usize,
    pub element: f64,
    pub sum: Vec<f64>,
    pub scalar: f64,
    pub scalar_sum: Vec<f64>,
}

impl ArrayPreview {
    fn capture<A: NumericArray>(
        lhs: &A,
        rhs: &A,
        config: &ArrayOpsConfig,
    ) -> ArrayOpResult<Self> {
        Ok(Self {
            implementation: A::IMPLEMENTATION,
            shape: lhs.shape(),
            size: lhs.size(),
            ndim: lhs.ndim(),
            dtype: lhs.dtype(),
            element_index: config.element_index,
            element: lhs.get(&[config.element_index])?,
            sum: lhs.add(rhs)?.to_vec(),
            scalar: config.scalar,
            scalar_sum: lhs.add_scalar(config.scalar).to_vec(),
        })
    }
}

const PREVIEW_ELEMENTS: usize = 5;

fn fmt_elements(f: &mut fmt::Formatter<'_>, values: &[f64]) -> fmt::Result {
    let shown: Vec<String> = values
        .iter()
        .take(PREVIEW_ELEMENTS)
        .map(|v| v.to_string())
        .collect();
    if values.len() > PREVIEW_ELEMENTS {
        write!(f, "[{}, ... ({} total)]", shown.join(", "), values.len())
    } else {
        write!(f, "[{}]", shown.join(", "))
    }
}

impl fmt::Display for ArrayPreview {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} results (first iteration):", self.implementation)?;
        writeln!(f, "Array 1 shape: {:?}", self.shape)?;
        writeln!(f, "Array 1 size: {}", self.size)?;
        writeln!(f, "Array 1 ndim: {}", self.ndim)?;
        writeln!(f, "Array 1 dtype: {}", self.dtype)?;
        writeln!(f, "Element at index {}: {}", self.element_index, self.element)?;
        write!(f, "Sum of arrays: ")?;
        fmt_elements(f, &self.sum)?;
        write!(f, "\nArray + scalar: ")?;
        fmt_elements(f, &self.scalar_sum)
    }
}

/// Everything one suite execution produced.
#[derive(Debug, Clone)]
pub struct SuiteReport {
    pub name: String,
    pub description: String,
    pub previews: Vec<ArrayPreview>,
    /// Manual and ndarray results for each operation, in configured order.
    pub comparisons: Vec<(ArrayOperation, Vec<BenchmarkResult>)>,
}

impl SuiteReport {
    pub fn results(&self) -> impl Iterator<Item = &BenchmarkResult> {
        self.comparisons.iter().flat_map(|(_, results)| results.iter())
    }
}

impl fmt::Display for SuiteReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rule = "=".repeat(80);
        writeln!(f, "{}", rule)?;
        writeln!(f, "{} - {}", self.name, self.description)?;
        writeln!(f, "{}", rule)?;

        for preview in &self.previews {
            writeln!(f, "\n{}", preview)?;
        }

        for (operation, results) in &self.comparisons {
            writeln!(f, "\n{}", rule)?;
            writeln!(f, "Operation: {}", operation.name())?;
            writeln!(f, "{}", rule)?;
            for result in results {
                writeln!(f, "\n{}", report(result))?;
            }
            write!(f, "\n{}", ComparisonReport::new(results))?;
        }

        writeln!(f, "\n{}", rule)?;
        write!(f, "Benchmark Complete")
    }
}

/// Runs configured array operation suites.
pub struct SuiteRunner;

impl SuiteRunner {
    /// Run all available suites, continuing past failures
    pub fn run_all_suites() -> HarnessResult<()> {
        info!("Starting array operation benchmark suite");

        let loaded = [
            (MICRO_SUITE, ConfigLoader::load_micro_config()),
            (MACRO_SUITE, ConfigLoader::load_macro_config()),
        ];
        let total = loaded.len();

        let mut configs = Vec::with_capacity(total);
        let mut failed = 0;
        for (suite, config) in loaded {
            match config {
                Ok(config) => configs.push(config),
                Err(e) => {
                    error!("Suite '{}' failed ({}): {}", suite, e.kind(), e);
                    failed += 1;
                }
            }
        }

        failed += Self::execute_each(&configs, |report| println!("{}", report));
        Self::summarize(failed, total)
    }

    /// Executes every config in order, handing each finished report to
    /// `on_report`. A failing suite is logged and the remaining suites still
    /// run; any failure is reported as `SuitesFailed` at the end.
    pub fn run_suites<F>(configs: &[ArrayOpsConfig], on_report: F) -> HarnessResult<()>
    where
        F: FnMut(SuiteReport),
    {
        let failed = Self::execute_each(configs, on_report);
        Self::summarize(failed, configs.len())
    }

    fn execute_each<F>(configs: &[ArrayOpsConfig], mut on_report: F) -> usize
    where
        F: FnMut(SuiteReport),
    {
        let mut failed = 0;
        for config in configs {
            match Self::execute(config) {
                Ok(report) => on_report(report),
                Err(e) => {
                    error!("Suite '{}' failed ({}): {}", config.name, e.kind(), e);
                    failed += 1;
                }
            }
        }
        failed
    }

    fn summarize(failed: usize, total: usize) -> HarnessResult<()> {
        if failed == 0 {
            info!("All suites completed successfully");
            Ok(())
        } else {
            Err(BenchmarkError::SuitesFailed { failed, total })
        }
    }

    /// Run a specific suite by name and print its report
    pub fn run_suite(suite_name: &str) -> HarnessResult<()> {
        let config = match suite_name {
            MICRO_SUITE => ConfigLoader::load_micro_config()?,
            MACRO_SUITE => ConfigLoader::load_macro_config()?,
            _ => {
                return Err(BenchmarkError::UnknownSuite {
                    name: suite_name.to_string(),
                });
            }
        };

        let suite_report = Self::execute(&config)?;
        println!("{}", suite_report);
        Ok(())
    }

    pub fn list_suites() {
        println!("Available benchmarks:");
        println!("  {}  - Atomic operations on 3-element arrays", MICRO_SUITE);
        println!("  {}  - Element-wise operations on large arrays", MACRO_SUITE);
    }

    /// Validates `config`, checks both implementations agree, then times every
    /// configured operation for each of them.
    pub fn execute(config: &ArrayOpsConfig) -> HarnessResult<SuiteReport> {
        config.validate()?;
        let operations = config.parsed_operations()?;

        info!(
            "Running suite {} ({} elements, {} iterations)",
            config.name, config.array_len, config.iterations
        );

        let (lhs_data, rhs_data) = config.operands();
        let wrap = |e: ArrayOpError| BenchmarkError::ConfigValidationError {
            field: "array_len".to_string(),
            message: format!("Could not build operands: {}", e),
        };

        let manual_lhs = ManualArray::from_vec(lhs_data.clone()).map_err(wrap)?;
        let manual_rhs = ManualArray::from_vec(rhs_data.clone()).map_err(wrap)?;
        let nd_lhs = NdArray::from_vec(lhs_data).map_err(wrap)?;
        let nd_rhs = NdArray::from_vec(rhs_data).map_err(wrap)?;

        let previews = vec![
            Self::preview(&manual_lhs, &manual_rhs, config)?,
            Self::preview(&nd_lhs, &nd_rhs, config)?,
        ];
        Self::verify(config, &previews[0], &previews[1])?;
        info!("Outputs match - implementations are consistent");

        let mut comparisons = Vec::with_capacity(operations.len());
        for operation in operations {
            let results = vec![
                Self::time_operation(operation, &manual_lhs, &manual_rhs, config)?,
                Self::time_operation(operation, &nd_lhs, &nd_rhs, config)?,
            ];
            comparisons.push((operation, results));
        }

        Ok(SuiteReport {
            name: config.name.clone(),
            description: config.description.clone(),
            previews,
            comparisons,
        })
    }

    fn preview<A: NumericArray>(
        lhs: &A,
        rhs: &A,
        config: &ArrayOpsConfig,
    ) -> HarnessResult<ArrayPreview> {
        ArrayPreview::capture(lhs, rhs, config).map_err(|e| BenchmarkError::OperationFailed {
            name: format!("{} preview", A::IMPLEMENTATION),
            invocation: 1,
            iterations: 1,
            source: Box::new(e),
        })
    }

    fn verify(
        config: &ArrayOpsConfig,
        baseline: &ArrayPreview,
        candidate: &ArrayPreview,
    ) -> HarnessResult<()> {
        let mismatch = |operation: ArrayOperation| BenchmarkError::OutputMismatch {
            suite: config.name.clone(),
            operation: operation.name().to_string(),
        };

        if baseline.shape != candidate.shape
            || baseline.size != candidate.size
            || baseline.ndim != candidate.ndim
        {
            return Err(mismatch(ArrayOperation::Shape));
        }
        if !verify_outputs_match(&[baseline.element], &[candidate.element]) {
            return Err(mismatch(ArrayOperation::Get));
        }
        if !verify_outputs_match(&baseline.sum, &candidate.sum) {
            return Err(mismatch(ArrayOperation::Add));
        }
        if !verify_outputs_match(&baseline.scalar_sum, &candidate.scalar_sum) {
            return Err(mismatch(ArrayOperation::AddScalar));
        }
        Ok(())
    }

    fn time_operation<A: NumericArray>(
        operation: ArrayOperation,
        lhs: &A,
        rhs: &A,
        config: &ArrayOpsConfig,
    ) -> HarnessResult<BenchmarkResult> {
        let name = format!("{} {}", A::IMPLEMENTATION, operation.name());
        let iterations = config.iterations;
        let index = [config.element_index];
        let scalar = config.scalar;

        match operation {
            ArrayOperation::Shape => {
                BenchmarkRunner::run_infallible(&name, iterations, || lhs.shape())
            }
            ArrayOperation::Size => {
                BenchmarkRunner::run_infallible(&name, iterations, || lhs.size())
            }
            ArrayOperation::Ndim => {
                BenchmarkRunner::run_infallible(&name, iterations, || lhs.ndim())
            }
            ArrayOperation::Dtype => {
                BenchmarkRunner::run_infallible(&name, iterations, || lhs.dtype())
            }
            ArrayOperation::Get => BenchmarkRunner::run(&name, iterations, || lhs.get(&index)),
            ArrayOperation::Add => BenchmarkRunner::run(&name, iterations, || lhs.add(rhs)),
            ArrayOperation::AddScalar => {
                BenchmarkRunner::run_infallible(&name, iterations, || lhs.add_scalar(scalar))
            }
            ArrayOperation::Combined => BenchmarkRunner::run(&name, iterations, || {
                black_box(lhs.shape());
                black_box(lhs.size());
                black_box(lhs.ndim());
                black_box(lhs.dtype());
                black_box(lhs.get(&index)?);
                black_box(lhs.add(rhs)?);
                Ok::<_, ArrayOpError>(lhs.add_scalar(scalar))
            }),
        }
    }
}

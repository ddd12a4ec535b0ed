use arrayop_bench::benchmarks::{
    ArrayOperation, ArrayOpsConfig, ConfigLoader, MAX_ARRAY_LEN, SuiteRunner,
};
use arrayop_bench::errors::BenchmarkError;
use std::fs;
use std::path::PathBuf;

fn small_config() -> ArrayOpsConfig {
    ArrayOpsConfig {
        iterations: 50,
        ..ArrayOpsConfig::micro()
    }
}

fn temp_config_path(file_name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("arrayop_bench_{}_{}", std::process::id(), file_name))
}

#[test]
fn test_execute_times_every_operation_for_both_implementations() {
    let report = SuiteRunner::execute(&small_config()).expect("suite should succeed");

    assert_eq!(report.name, "micro_array_ops");
    assert_eq!(report.comparisons.len(), ArrayOperation::ALL.len());
    for ((operation, results), expected) in report.comparisons.iter().zip(ArrayOperation::ALL) {
        assert_eq!(*operation, expected);
        assert_eq!(results.len(), 2);
        assert_eq!(
            results[0].operation_name(),
            format!("manual {}", expected.name())
        );
        assert_eq!(
            results[1].operation_name(),
            format!("ndarray {}", expected.name())
        );
    }
    assert!(report.results().all(|r| r.iterations() == 50));
}

#[test]
fn test_execute_captures_first_iteration_previews() {
    let report = SuiteRunner::execute(&small_config()).expect("suite should succeed");

    assert_eq!(report.previews.len(), 2);
    for preview in &report.previews {
        assert_eq!(preview.shape, vec![3]);
        assert_eq!(preview.size, 3);
        assert_eq!(preview.ndim, 1);
        assert_eq!(preview.dtype, "float64");
        assert_eq!(preview.element, 2.0);
        assert_eq!(preview.sum, vec![5.0, 7.0, 9.0]);
        assert_eq!(preview.scalar_sum, vec![11.0, 12.0, 13.0]);
    }

    let text = report.to_string();
    assert!(text.contains("manual results (first iteration):"));
    assert!(text.contains("ndarray results (first iteration):"));
    assert!(text.contains("Sum of arrays: [5, 7, 9]"));
    assert!(text.contains("Array + scalar: [11, 12, 13]"));
    assert!(text.contains("manual combined (50 iterations): "));
    assert!(text.contains("Speed Rankings"));
}

#[test]
fn test_execute_large_arrays() {
    let config = ArrayOpsConfig {
        array_len: 1_000,
        iterations: 3,
        ..ArrayOpsConfig::macro_ops()
    };
    let report = SuiteRunner::execute(&config).expect("suite should succeed");

    assert_eq!(report.comparisons.len(), 3);
    assert_eq!(report.previews[0].sum.len(), 1_000);
    assert!(report.to_string().contains("... (1000 total)]"));
}

#[test]
fn test_execute_rejects_non_positive_iterations() {
    for iterations in [0, -5] {
        let config = ArrayOpsConfig {
            iterations,
            ..ArrayOpsConfig::micro()
        };
        assert!(matches!(
            SuiteRunner::execute(&config),
            Err(BenchmarkError::InvalidArgument { .. })
        ));
    }
}

#[test]
fn test_execute_rejects_invalid_configuration() {
    let out_of_range = ArrayOpsConfig {
        element_index: 3,
        ..small_config()
    };
    assert!(matches!(
        SuiteRunner::execute(&out_of_range),
        Err(BenchmarkError::ConfigValidationError { field, .. }) if field == "element_index"
    ));

    let empty = ArrayOpsConfig {
        array_len: 0,
        ..small_config()
    };
    assert!(matches!(
        SuiteRunner::execute(&empty),
        Err(BenchmarkError::ConfigValidationError { field, .. }) if field == "array_len"
    ));

    let unknown_op = ArrayOpsConfig {
        operations: vec!["add".to_string(), "multiply".to_string()],
        ..small_config()
    };
    assert!(matches!(
        SuiteRunner::execute(&unknown_op),
        Err(BenchmarkError::InvalidOperationType { operation, .. }) if operation == "multiply"
    ));
}

#[test]
fn test_execute_rejects_oversized_arrays_without_allocating() {
    let config = ArrayOpsConfig {
        array_len: usize::MAX,
        ..small_config()
    };
    assert!(matches!(
        SuiteRunner::execute(&config),
        Err(BenchmarkError::ConfigValidationError { field, .. }) if field == "array_len"
    ));

    let just_over = ArrayOpsConfig {
        array_len: MAX_ARRAY_LEN + 1,
        ..small_config()
    };
    assert!(just_over.validate().is_err());
}

#[test]
fn test_run_suites_continues_past_failing_suite() {
    let broken = ArrayOpsConfig {
        name: "broken".to_string(),
        element_index: 99,
        ..small_config()
    };
    let valid = ArrayOpsConfig {
        name: "valid".to_string(),
        ..small_config()
    };

    let mut completed = Vec::new();
    let result = SuiteRunner::run_suites(&[broken, valid], |report| completed.push(report));

    assert!(matches!(
        result,
        Err(BenchmarkError::SuitesFailed {
            failed: 1,
            total: 2
        })
    ));
    assert_eq!(completed.len(), 1);
    assert_eq!(completed[0].name, "valid");
    assert!(completed[0].results().all(|r| r.iterations() == 50));
}

#[test]
fn test_run_suites_all_succeed() {
    let configs = [
        ArrayOpsConfig {
            name: "first".to_string(),
            ..small_config()
        },
        ArrayOpsConfig {
            array_len: 100,
            iterations: 2,
            ..ArrayOpsConfig::macro_ops()
        },
    ];

    let mut names = Vec::new();
    SuiteRunner::run_suites(&configs, |report| names.push(report.name))
        .expect("all suites should succeed");

    assert_eq!(names, vec!["first", "macro_array_ops"]);
}

#[test]
fn test_unknown_suite() {
    assert!(matches!(
        SuiteRunner::run_suite("dot_product"),
        Err(BenchmarkError::UnknownSuite { .. })
    ));
}

#[test]
fn test_config_loader_reads_json() {
    let path = temp_config_path("custom.json");
    let config = ArrayOpsConfig {
        name: "custom".to_string(),
        array_len: 8,
        iterations: 7,
        ..ArrayOpsConfig::micro()
    };
    fs::write(&path, serde_json::to_string_pretty(&config).unwrap()).unwrap();

    let loaded: ArrayOpsConfig =
        ConfigLoader::load_config(path.to_str().unwrap(), "custom", ArrayOpsConfig::micro)
            .expect("config should load");
    fs::remove_file(&path).ok();

    assert_eq!(loaded.name, "custom");
    assert_eq!(loaded.array_len, 8);
    assert_eq!(loaded.iterations, 7);
}

#[test]
fn test_config_loader_falls_back_to_default() {
    let path = temp_config_path("missing.json");
    let loaded: ArrayOpsConfig =
        ConfigLoader::load_config(path.to_str().unwrap(), "missing", ArrayOpsConfig::macro_ops)
            .expect("missing config should fall back");

    assert_eq!(loaded.name, "macro_array_ops");
    assert_eq!(loaded.iterations, 20);
}

#[test]
fn test_config_loader_reports_parse_errors() {
    let path = temp_config_path("broken.json");
    fs::write(&path, "{ \"name\": ").unwrap();

    let result: Result<ArrayOpsConfig, _> =
        ConfigLoader::load_config(path.to_str().unwrap(), "broken", ArrayOpsConfig::micro);
    fs::remove_file(&path).ok();

    match result {
        Err(BenchmarkError::ConfigParseError { path: reported, .. }) => {
            assert!(reported.ends_with("broken.json"));
        }
        other => panic!("expected ConfigParseError, got {:?}", other),
    }
}

#[test]
fn test_bundled_configs_are_valid() {
    for file in ["configs/micro_array_ops.json", "configs/macro_array_ops.json"] {
        let path = format!("{}/{}", env!("CARGO_MANIFEST_DIR"), file);
        let content = fs::read_to_string(&path).expect("bundled config should exist");
        let config: ArrayOpsConfig = serde_json::from_str(&content).expect("config should parse");
        config.validate().expect("bundled config should be valid");
    }
}

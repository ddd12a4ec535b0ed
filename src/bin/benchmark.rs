//! Array operation benchmark CLI.

use arrayop_bench::benchmarks::SuiteRunner;
use arrayop_bench::errors::HarnessResult;
use log::error;
use std::env;

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().collect();

    if let Err(e) = run_benchmarks(&args) {
        let target = match args.as_slice() {
            [_] => "all",
            [.., suite] => suite.as_str(),
            [] => "all",
        };
        error!("Benchmark '{}' failed [{}]: {}", target, e.kind(), e);
        std::process::exit(1);
    }
}

fn run_benchmarks(args: &[String]) -> HarnessResult<()> {
    match args {
        [_] => SuiteRunner::run_all_suites(),
        [_, flag] if flag == "--list" => {
            SuiteRunner::list_suites();
            Ok(())
        }
        [_, flag] if flag.starts_with("--") => {
            print_usage();
            Ok(())
        }
        [_, suite] => SuiteRunner::run_suite(suite),
        [_, flag, suite] if flag == "--benchmark" => SuiteRunner::run_suite(suite),
        _ => {
            print_usage();
            Ok(())
        }
    }
}

fn print_usage() {
    println!("Usage:");
    println!("  cargo run --bin benchmark --release                    # Run all benchmarks");
    println!("  cargo run --bin benchmark --release -- --list         # List available benchmarks");
    println!("  cargo run --bin benchmark --release -- <benchmark>    # Run specific benchmark");
    println!("  cargo run --bin benchmark --release -- --benchmark <benchmark>");
    println!();
    SuiteRunner::list_suites();
}

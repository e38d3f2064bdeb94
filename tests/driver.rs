use std::process::Command;
use std::time::Duration;

use dotbench::driver::{ITERATIONS, M, N, P};
use dotbench::random::create_rnd_from_seed;
use dotbench::{BenchConfig, BenchReport, logging, random, run};

#[test]
fn test_default_config_is_fixed_shape() {
    let config = BenchConfig::default();
    assert_eq!(
        config,
        BenchConfig {
            n: 100,
            p: 200,
            m: 50,
            iterations: 100
        }
    );
    assert_eq!((N, P, M, ITERATIONS), (100, 200, 50, 100));
}

#[test]
fn test_run_small_config() {
    let _guard = logging::init_test_subscriber();

    let config = BenchConfig {
        n: 8,
        p: 16,
        m: 4,
        iterations: 25,
    };
    let report = run(&config, &mut random::create_rnd_in_tests()).unwrap();

    assert_eq!(report.iterations, 25);
    assert!(report.checksum.is_finite());
    assert!(report.average_micros().is_finite());
    assert!(report.average_micros() >= 0.0);
}

#[test]
fn test_run_checksum_depends_only_on_seed() {
    let config = BenchConfig {
        n: 10,
        p: 20,
        m: 5,
        iterations: 7,
    };

    let first = run(&config, &mut create_rnd_from_seed(3)).unwrap();
    let second = run(&config, &mut create_rnd_from_seed(3)).unwrap();
    assert_eq!(first.checksum.to_bits(), second.checksum.to_bits());
}

#[test]
#[should_panic(expected = "need at least one iteration")]
fn test_run_zero_iterations_panics() {
    let config = BenchConfig {
        iterations: 0,
        ..BenchConfig::default()
    };
    let _ = run(&config, &mut random::create_rnd_in_tests());
}

#[test]
fn test_report_line_format() {
    let report = BenchReport {
        iterations: 100,
        elapsed: Duration::from_secs(1),
        checksum: 0.0,
    };
    assert_eq!(report.average_micros(), 10000.0);
    assert_eq!(report.to_string(), "100 loops. average 10000us");
}

// ============================================================
// End to end: the binary
// ============================================================

#[test]
fn test_binary_prints_two_lines() {
    let output = Command::new(env!("CARGO_BIN_EXE_dotbench"))
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to run dotbench");

    assert!(output.status.success(), "exit status {}", output.status);

    let stdout = String::from_utf8(output.stdout).unwrap();
    let stderr = String::from_utf8(output.stderr).unwrap();
    let out_lines: Vec<&str> = stdout.lines().collect();
    let err_lines: Vec<&str> = stderr.lines().collect();

    assert_eq!(out_lines.len(), 1, "stdout: {:?}", stdout);
    assert_eq!(err_lines.len(), 1, "stderr: {:?}", stderr);

    let checksum: f32 = err_lines[0].parse().expect("checksum is not a float");
    assert!(checksum.is_finite());

    let average = out_lines[0]
        .strip_prefix("100 loops. average ")
        .and_then(|rest| rest.strip_suffix("us"))
        .expect("unexpected result line");
    let average: f64 = average.parse().expect("average is not a float");
    assert!(average.is_finite() && average > 0.0);
}

//! Benchmark driver: allocate, fill, time the kernel loop, report.

use std::fmt;
use std::time::{Duration, Instant};

use rand::Rng;
use tracing::info;

use crate::error::Result;
use crate::matrix::Matrix;
use crate::matrix::fill::fill_rand;
use crate::matrix::naive_ijk::dot;

/// Rows of A.
pub const N: usize = 100;
/// Columns of A, rows of B.
pub const P: usize = 200;
/// Columns of B.
pub const M: usize = 50;
/// Kernel calls per run.
pub const ITERATIONS: usize = 100;

/// Shape of the operands and how many times to run the kernel.
///
/// A is `n × p`, B is `p × m`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BenchConfig {
    pub n: usize,
    pub p: usize,
    pub m: usize,
    pub iterations: usize,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            n: N,
            p: P,
            m: M,
            iterations: ITERATIONS,
        }
    }
}

/// Outcome of one run.
#[derive(Debug, Clone, Copy)]
pub struct BenchReport {
    pub iterations: usize,
    pub elapsed: Duration,
    /// Sum of every value [`dot`] returned. Printed so the loop has an
    /// observable effect.
    pub checksum: f32,
}

impl BenchReport {
    /// Average wall-clock time per kernel call, in microseconds.
    pub fn average_micros(&self) -> f64 {
        self.elapsed.as_secs_f64() * 1e6 / self.iterations as f64
    }
}

impl fmt::Display for BenchReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} loops. average {}us",
            self.iterations,
            self.average_micros()
        )
    }
}

/// Run the benchmark with operands filled from `rng`.
///
/// # Panics
///
/// Panics if any dimension or the iteration count in `config` is zero.
///
/// # Errors
///
/// Propagates allocation failures from the operands or from any kernel call.
pub fn run<R: Rng + ?Sized>(config: &BenchConfig, rng: &mut R) -> Result<BenchReport> {
    let BenchConfig {
        n,
        p,
        m,
        iterations,
    } = *config;
    assert!(
        n > 0 && p > 0 && m > 0,
        "matrix dimensions must be positive: {n}x{p} * {p}x{m}"
    );
    assert!(iterations > 0, "need at least one iteration");

    let mut a = Matrix::new(n, p)?;
    let mut b = Matrix::new(p, m)?;
    fill_rand(&mut a, rng);
    fill_rand(&mut b, rng);

    info!(n, p, m, iterations, "starting dot benchmark");

    let start = Instant::now();
    let mut s = 0.0f32;
    for _ in 0..iterations {
        // SAFETY: a is n×p and b is p×m with n, m >= 1
        s += unsafe { dot(&a, &b)? };
    }
    let elapsed = start.elapsed();

    info!(?elapsed, checksum = s, "dot benchmark finished");

    Ok(BenchReport {
        iterations,
        elapsed,
        checksum: s,
    })
}

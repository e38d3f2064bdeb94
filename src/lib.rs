//! Wall-clock benchmark of naive single-precision matrix multiplication.
//!
//! Nothing clever on purpose: a row-major `f32` matrix, the textbook
//! i-j-k triple loop, and a timing loop around it. The point is a stable,
//! comparable number for how fast plain numeric loops run, not a fast
//! matmul.
//!
//! ## Usage
//!
//! ```
//! use dotbench::{BenchConfig, random, run};
//!
//! let config = BenchConfig { n: 8, p: 16, m: 4, iterations: 10 };
//! let mut rng = random::create_rnd_in_tests();
//!
//! let report = run(&config, &mut rng).unwrap();
//! println!("{report}");
//! ```
//!
//! The `dotbench` binary runs the fixed 100×200 · 200×50 shape 100 times.

pub mod driver;
pub mod error;
pub mod logging;
pub mod matrix;
pub mod random;

pub use driver::{BenchConfig, BenchReport, run};
pub use error::{MatrixError, Result};
pub use matrix::Matrix;
pub use matrix::fill::fill_rand;
pub use matrix::naive_ijk::{dot, multiply};

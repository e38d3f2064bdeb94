//! Benchmark runner for the naive dot kernel.

use dotbench::{BenchConfig, MatrixError, logging, random, run};
use tracing::debug;

fn main() -> Result<(), MatrixError> {
    logging::init_subscriber();

    let (mut rng, seed) = random::create_rnd_from_time();
    debug!(seed, "seeded generator from wall clock");

    let report = run(&BenchConfig::default(), &mut rng)?;

    // Printing the checksum keeps the kernel loop observable.
    eprintln!("{}", report.checksum);
    println!("{report}");

    Ok(())
}

use tracing_subscriber::{EnvFilter, filter::LevelFilter, fmt, prelude::*};

/// Install the global subscriber: `RUST_LOG` aware, `warn` by default,
/// writing to stderr.
///
/// stdout carries the result line only, so log output must never go there.
pub fn init_subscriber() {
    let fmt_layer = fmt::layer().with_target(true).with_writer(std::io::stderr);

    let filter_layer = EnvFilter::builder()
        .with_default_directive(LevelFilter::WARN.into())
        .from_env_lossy();

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt_layer)
        .init();
}

/// Thread-local subscriber for integration tests.
///
/// Dropping the guard uninstalls it, so tests running in parallel don't
/// fight over the global default.
pub fn init_test_subscriber() -> tracing::subscriber::DefaultGuard {
    let fmt_layer = fmt::layer().with_target(true).with_test_writer();

    let filter_layer = EnvFilter::builder()
        .with_default_directive(LevelFilter::DEBUG.into())
        .from_env_lossy();

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt_layer)
        .set_default()
}

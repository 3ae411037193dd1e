//! Tracing subscriber setup shared by the binaries.

use tracing_subscriber::EnvFilter;

/// Install a console subscriber writing to stderr so stdout stays free for results.
///
/// The filter comes from `RUST_LOG` when set, `default_filter` otherwise. Calling this more
/// than once is harmless; later calls leave the first subscriber in place.
pub fn init_logging(default_filter: &str) {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .try_init();
}

//! Log output.

use tracing_subscriber::EnvFilter;

/// Sets up logging of the events reported by this crate.
///
/// The filter is taken from the `RUST_LOG` environment variable, e.g.,
/// `RUST_LOG=bindconf=debug` shows which files are written and
/// `RUST_LOG=bindconf=trace` additionally shows every statement that
/// replaced an earlier one.
///
/// Events are written to standard error. Calling the function again has
/// no effect.
pub fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .without_time()
        .try_init()
        .ok();
}

use tracing_subscriber::EnvFilter;

use crate::constants::{DEFAULT_LOG_FILTER, VERBOSE_LOG_FILTER};

/// Initialize diagnostics on stderr, leaving stdout for results.
///
/// `RUST_LOG` takes precedence over `verbose`.
pub fn init_logging(verbose: bool, no_color: bool) {
    let default_filter = if verbose {
        VERBOSE_LOG_FILTER
    } else {
        DEFAULT_LOG_FILTER
    };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    let installed = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_ansi(!no_color)
        .try_init();
    if installed.is_err() {
        // Another subscriber is already global (e.g. in tests); keep it.
    }
}

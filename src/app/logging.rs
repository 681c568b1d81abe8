//! Diagnostic logging setup.
//!
//! Logs go to stderr so stdout stays reserved for step outputs. The filter is
//! read from `PYBUILD_CI_LOG` (same syntax as `RUST_LOG`) and defaults to
//! `warn`; `--verbose` raises the default to `debug`.

use std::sync::Once;

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Environment variable holding the log filter.
pub const LOG_ENV: &str = "PYBUILD_CI_LOG";

static INIT: Once = Once::new();

/// Default filter directive for the given verbosity.
pub fn default_directive(verbose: bool) -> &'static str {
    if verbose { "pybuild_ci=debug" } else { "warn" }
}

/// Install the global subscriber. Subsequent calls are ignored.
pub fn init_logging(verbose: bool) {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env(LOG_ENV)
            .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

        let _ = tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
            .try_init();
    });
}

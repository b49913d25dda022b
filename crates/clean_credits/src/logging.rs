// crates/clean_credits/src/logging.rs

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Environment variable holding the log filter, in `RUST_LOG` syntax.
pub const LOG_ENV: &str = "CLEAN_CREDITS_LOG";

static INIT: Once = Once::new();

/// Installs the global subscriber, writing to stderr.
///
/// `CLEAN_CREDITS_LOG` wins when set and valid. Otherwise only warnings are
/// shown, or debug output from this workspace when `verbose` is set.
/// Calling it more than once is a no-op.
pub fn init_tracing(verbose: bool) {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| default_filter(verbose));

        tracing_subscriber::registry()
            .with(fmt::layer().with_writer(std::io::stderr).with_target(true))
            .with(filter)
            .init();
    });
}

fn default_filter(verbose: bool) -> EnvFilter {
    if verbose {
        EnvFilter::new("warn,clean_credits=debug,credits_filter=debug")
    } else {
        EnvFilter::new("warn")
    }
}

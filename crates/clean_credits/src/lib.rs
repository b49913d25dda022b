// crates/clean_credits/src/lib.rs

use std::path::Path;

use anyhow::{bail, Result};
use credits_filter::{process_credits_with_processor, DefaultCreditsProcessor, FilterStats};
use tracing::debug;

pub mod config;
pub mod logging;

pub use config::{AppConfig, DEFAULT_INPUT, DEFAULT_OUTPUT};

/// Runs one cleaning pass as described by `config`.
///
/// Refuses to run when the input and output are the same file, since the
/// output is truncated before anything is written.
pub fn run(config: &AppConfig) -> Result<FilterStats> {
    debug!(?config, "starting clean_credits");
    if same_file(&config.input, &config.output) {
        bail!(
            "Input and output both point to {}; refusing to overwrite the input",
            config.input.display()
        );
    }
    process_credits_with_processor(&DefaultCreditsProcessor, &config.input, &config.output)
}

fn same_file(a: &Path, b: &Path) -> bool {
    if a == b {
        return true;
    }
    match (a.canonicalize(), b.canonicalize()) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}

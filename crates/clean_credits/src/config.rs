// crates/clean_credits/src/config.rs

use std::path::PathBuf;

/// Input read when no `--input` is given, relative to the working directory.
pub const DEFAULT_INPUT: &str = "Credits.txt";

/// Output written when no `--output` is given, relative to the working directory.
pub const DEFAULT_OUTPUT: &str = "Cleaned Credits.txt";

/// Runtime configuration composed from the command line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppConfig {
    pub input: PathBuf,
    pub output: PathBuf,
    pub verbose: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT),
            output: PathBuf::from(DEFAULT_OUTPUT),
            verbose: false,
        }
    }
}

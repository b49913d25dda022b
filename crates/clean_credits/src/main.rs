use std::path::PathBuf;

use anyhow::Result;
use clap::{Arg, Command};

use clean_credits::logging::init_tracing;
use clean_credits::{run, AppConfig, DEFAULT_INPUT, DEFAULT_OUTPUT};

fn main() -> Result<()> {
    let matches = Command::new("clean_credits")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Keeps the package blocks of a credits listing and drops their comment sections")
        .arg(
            Arg::new("input")
                .long("input")
                .num_args(1)
                .value_parser(clap::value_parser!(PathBuf))
                .default_value(DEFAULT_INPUT)
                .help("Credits file to read"),
        )
        .arg(
            Arg::new("output")
                .long("output")
                .num_args(1)
                .value_parser(clap::value_parser!(PathBuf))
                .default_value(DEFAULT_OUTPUT)
                .help("File to write the cleaned credits to (created or overwritten)"),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .help("Enable verbose logging")
                .action(clap::ArgAction::SetTrue),
        )
        .get_matches();

    let defaults = AppConfig::default();
    let config = AppConfig {
        input: matches.get_one::<PathBuf>("input").cloned().unwrap_or(defaults.input),
        output: matches.get_one::<PathBuf>("output").cloned().unwrap_or(defaults.output),
        verbose: matches.get_flag("verbose"),
    };

    init_tracing(config.verbose);

    let stats = run(&config)?;
    println!(
        "Cleaned {} lines into {} ({} blocks)",
        stats.lines_retained,
        config.output.display(),
        stats.blocks_opened
    );
    Ok(())
}

//! logo-nobg - Strip a solid background from a logo and export transparent icons.

mod cli;
mod config;
mod image;
mod logger;

use anyhow::Result;
use clap::{ColorChoice, Parser};
use cli::Cli;
use config::IconConfig;

fn main() {
    if let Err(err) = run(Cli::parse()) {
        log!("error"; "{}", error_message(&err));
        std::process::exit(1);
    }
}

/// Full error chain on one line, outermost context first.
fn error_message(err: &anyhow::Error) -> String {
    format!("{err:#}")
}

fn run(cli: Cli) -> Result<()> {
    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }
    logger::set_verbose(cli.verbose);

    let config = IconConfig::load(&cli)?;
    debug!(
        "config";
        "input={} output={} sizes={:?} threshold={}",
        config.input.display(),
        config.output_dir.display(),
        config.sizes,
        config.threshold
    );

    cli::generate::run(&config)
}

//! Shipnotes - Release notes and code quality report tools for CI pipelines

use std::process::ExitCode;

use clap::Parser;

use shipnotes::cli::Cli;

fn main() -> ExitCode {
    let cli = Cli::parse();
    shipnotes::run(&cli.global, || cli.execute())
}

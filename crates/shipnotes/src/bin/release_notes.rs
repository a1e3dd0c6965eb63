//! Standalone release notes extractor
//!
//! Same as `shipnotes release-notes`.

use std::process::ExitCode;

use clap::Parser;

use shipnotes::cli::commands::ReleaseNotesCommand;
use shipnotes::cli::GlobalArgs;

/// Generate release notes from changelog file
#[derive(Debug, Parser)]
#[command(name = "release-notes", author, about, long_about = None)]
struct ReleaseNotes {
    #[command(flatten)]
    global: GlobalArgs,

    #[command(flatten)]
    command: ReleaseNotesCommand,
}

fn main() -> ExitCode {
    let args = ReleaseNotes::parse();
    shipnotes::run(&args.global, || args.command.execute(&args.global))
}

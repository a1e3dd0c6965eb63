//! Standalone typos to GitLab Code Quality converter
//!
//! Same as `shipnotes typos`.

use std::process::ExitCode;

use clap::Parser;

use shipnotes::cli::commands::TyposCommand;
use shipnotes::cli::GlobalArgs;

/// Convert `typos --format json` output to a GitLab Code Quality report
#[derive(Debug, Parser)]
#[command(name = "typos-gitlab-code-quality", author, version, about, long_about = None)]
struct TyposGitlabCodeQuality {
    #[command(flatten)]
    global: GlobalArgs,

    #[command(flatten)]
    command: TyposCommand,
}

fn main() -> ExitCode {
    let args = TyposGitlabCodeQuality::parse();
    shipnotes::run(&args.global, || args.command.execute(&args.global))
}

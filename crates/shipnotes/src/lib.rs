//! Shipnotes - Release notes and code quality report tools for CI pipelines

pub mod cli;
pub mod exit_codes;
mod logging;

use std::process::ExitCode;

use cli::{output, GlobalArgs};

pub use logging::init_tracing;

/// Set up logging, apply global options, run `command` and map its outcome
/// to a process exit code.
pub fn run(global: &GlobalArgs, command: impl FnOnce() -> anyhow::Result<()>) -> ExitCode {
    let _guard = init_tracing(global.verbose, global.quiet);

    let result = global.apply().and_then(|()| command());

    match result {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS),
        Err(err) => {
            output::error(&format!("{err:#}"));
            ExitCode::from(exit_codes::for_error(&err))
        }
    }
}

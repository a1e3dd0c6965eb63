//! CLI definition and command handling

pub mod commands;
pub mod output;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use commands::{InitCommand, ReleaseNotesCommand, TyposCommand};

/// Shipnotes - release notes and code quality reports for CI pipelines
#[derive(Debug, Parser)]
#[command(name = "shipnotes")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Commands,
}

/// Options shared by every command
#[derive(Debug, Clone, Default, Args)]
pub struct GlobalArgs {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Working directory
    #[arg(short = 'C', long, global = true)]
    pub directory: Option<PathBuf>,
}

impl GlobalArgs {
    /// Apply options that affect the process, such as the working directory
    pub fn apply(&self) -> anyhow::Result<()> {
        if let Some(dir) = &self.directory {
            std::env::set_current_dir(dir)?;
        }
        Ok(())
    }
}

/// Available commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Extract the release notes of one version from a changelog
    ReleaseNotes(ReleaseNotesCommand),

    /// Convert typos JSON output to a GitLab Code Quality report
    Typos(TyposCommand),

    /// Write a default shipnotes.toml
    Init(InitCommand),
}

impl Cli {
    /// Execute the CLI command
    pub fn execute(&self) -> anyhow::Result<()> {
        match &self.command {
            Commands::ReleaseNotes(cmd) => cmd.execute(&self.global),
            Commands::Typos(cmd) => cmd.execute(&self.global),
            Commands::Init(cmd) => cmd.execute(&self.global),
        }
    }
}

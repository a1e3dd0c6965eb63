//! Typos report command

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Args;
use tracing::info;

use shipnotes_core::error::QualityError;
use shipnotes_quality::convert_reader;

use super::emit;
use crate::cli::{output, GlobalArgs};

/// Convert `typos --format json` output to a GitLab Code Quality report
#[derive(Debug, Args)]
pub struct TyposCommand {
    /// Input file, default to stdin
    #[arg(default_value = "-", value_name = "INFILE")]
    pub input: String,

    /// Write the report to this file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

impl TyposCommand {
    /// Execute the typos command
    pub fn execute(&self, global: &GlobalArgs) -> anyhow::Result<()> {
        info!(input = %self.input, output = ?self.output, "executing typos command");
        let cwd = std::env::current_dir()?;
        let report = self.report(&cwd)?;

        emit(self.output.as_deref(), &report)?;

        if let Some(path) = &self.output {
            if !global.quiet {
                output::success(&format!(
                    "Code quality report written to {}",
                    output::path_style().apply_to(path.display())
                ));
            }
        }

        Ok(())
    }

    /// Convert the input and render the report as a JSON array plus newline
    pub fn report(&self, cwd: &Path) -> anyhow::Result<String> {
        let issues = if self.input == "-" {
            convert_reader(std::io::stdin().lock())?
        } else {
            let path = cwd.join(&self.input);
            let file = File::open(&path)
                .map_err(QualityError::Io)
                .with_context(|| format!("Failed to open {}", path.display()))?;
            convert_reader(BufReader::new(file))?
        };

        let mut report = serde_json::to_string(&issues)?;
        report.push('\n');
        Ok(report)
    }
}

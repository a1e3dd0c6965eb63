//! Init command

use std::path::PathBuf;

use clap::Args;
use tracing::info;

use shipnotes_core::config::defaults::{DEFAULT_CONFIG_TEMPLATE, DEFAULT_CONFIG_TOML};

use crate::cli::{output, GlobalArgs};

/// Write a default shipnotes configuration
#[derive(Debug, Args)]
pub struct InitCommand {
    /// Force overwrite existing configuration
    #[arg(short, long)]
    pub force: bool,

    /// Output file path
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

impl InitCommand {
    /// Execute the init command
    pub fn execute(&self, global: &GlobalArgs) -> anyhow::Result<()> {
        info!(force = self.force, "executing init command");
        let cwd = std::env::current_dir()?;
        let config_path = self
            .output
            .clone()
            .unwrap_or_else(|| cwd.join(DEFAULT_CONFIG_TOML));

        if config_path.exists() {
            if !self.force {
                anyhow::bail!(
                    "Configuration file already exists at {}. Use --force to overwrite.",
                    config_path.display()
                );
            }
            if !global.quiet {
                output::warning(&format!("Overwriting {}", config_path.display()));
            }
        }

        std::fs::write(&config_path, DEFAULT_CONFIG_TEMPLATE)?;

        if !global.quiet {
            output::success(&format!(
                "Created configuration at {}",
                output::path_style().apply_to(config_path.display())
            ));
        }

        Ok(())
    }
}

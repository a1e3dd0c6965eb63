//! Tag queries through the `git` binary

use std::path::{Path, PathBuf};
use std::process::Command;

use tracing::{debug, info, instrument};

use crate::lister::TagLister;
use crate::repository::Result;
use shipnotes_core::error::GitError;

/// Runs `git` as a child process in a working directory
#[derive(Debug, Clone)]
pub struct GitCli {
    workdir: PathBuf,
}

impl GitCli {
    /// Run git commands inside `workdir`
    pub fn new(workdir: impl Into<PathBuf>) -> Self {
        Self {
            workdir: workdir.into(),
        }
    }

    /// The directory git runs in
    pub fn workdir(&self) -> &Path {
        &self.workdir
    }

    /// Run git with the given arguments and return its stdout.
    ///
    /// A non-zero exit status is an error carrying git's stderr.
    #[instrument(skip(self), fields(workdir = %self.workdir.display()))]
    pub fn run(&self, args: &[&str]) -> Result<String> {
        let command = format!("git {}", args.join(" "));
        let start = std::time::Instant::now();

        let output = Command::new("git")
            .args(args)
            .current_dir(&self.workdir)
            .output()
            .map_err(|source| GitError::Spawn {
                command: command.clone(),
                source,
            })?;

        info!(
            command = %command,
            duration_ms = start.elapsed().as_millis(),
            success = output.status.success(),
            "git (CLI)"
        );

        if !output.status.success() {
            return Err(GitError::CommandFailed {
                command,
                status: output.status.to_string(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

impl TagLister for GitCli {
    fn reachable_tags(&self, tag: &str) -> Result<Vec<String>> {
        let stdout = self.run(&["tag", "--sort=-creatordate", "--merged", tag])?;
        let tags = parse_tag_listing(&stdout);
        debug!(tag, count = tags.len(), "listed merged tags");
        Ok(tags)
    }
}

/// Split `git tag` output into tag names, dropping blank lines
fn parse_tag_listing(stdout: &str) -> Vec<String> {
    stdout
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

//! Configuration types

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use super::defaults::{DEFAULT_CHANGELOG, DEFAULT_RELEASE_NOTES_HEADING};

/// Main configuration for shipnotes
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Release notes extraction
    pub release_notes: ReleaseNotesConfig,

    /// Git configuration
    pub git: GitConfig,
}

/// Release notes extraction configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ReleaseNotesConfig {
    /// Changelog file path
    pub changelog: PathBuf,

    /// Sub-heading inserted below the version heading
    pub heading: String,

    /// Compare URL template with `{old}` and `{new}` placeholders
    #[serde(skip_serializing_if = "Option::is_none")]
    pub diff_url: Option<String>,
}

impl Default for ReleaseNotesConfig {
    fn default() -> Self {
        Self {
            changelog: PathBuf::from(DEFAULT_CHANGELOG),
            heading: DEFAULT_RELEASE_NOTES_HEADING.to_string(),
            diff_url: None,
        }
    }
}

impl ReleaseNotesConfig {
    /// The compare URL template, treating an empty value as unset
    pub fn diff_url_template(&self) -> Option<&str> {
        self.diff_url
            .as_deref()
            .map(str::trim)
            .filter(|template| !template.is_empty())
    }
}

/// Git configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GitConfig {
    /// How reachable tags are listed
    pub backend: GitBackend,
}

/// Tag listing backend
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GitBackend {
    /// Spawn the `git` binary
    #[default]
    Cli,
    /// Read the repository in-process through libgit2
    Libgit2,
}

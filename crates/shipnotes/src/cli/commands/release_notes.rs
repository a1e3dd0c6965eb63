//! Release notes command

use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Args;
use tracing::{debug, info};

use shipnotes_changelog::{DiffUrlTemplate, ReleaseNotesBuilder};
use shipnotes_core::config::load_config_or_default;
use shipnotes_git::{tag_lister, GitCli, TagLister};

use super::emit;
use crate::cli::{output, GlobalArgs};

/// Generate release notes from changelog file
#[derive(Debug, Args)]
pub struct ReleaseNotesCommand {
    /// Changelog file [default: CHANGELOG.md]
    #[arg(long, value_name = "PATH")]
    pub changelog: Option<PathBuf>,

    /// Version section in the changelog file
    #[arg(long, value_name = "VERSION")]
    pub version: String,

    /// URL template for comparing two tags, with `{old}` and `{new}`
    /// placeholders filled by the previous tag and `--version`. An empty
    /// value disables the link.
    ///
    /// - GitLab CI: "$CI_PROJECT_URL/-/compare/{old}...{new}"
    /// - GitHub Workflow: "$GITHUB_SERVER_URL/$GITHUB_REPOSITORY/compare/{old}...{new}"
    #[arg(long, value_name = "TEMPLATE", env = "SHIPNOTES_DIFF_URL")]
    pub diff_url: Option<String>,

    /// Write to this file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

impl ReleaseNotesCommand {
    /// Execute the release notes command
    pub fn execute(&self, global: &GlobalArgs) -> anyhow::Result<()> {
        info!(version = %self.version, diff_url = ?self.diff_url, "executing release-notes command");
        let cwd = std::env::current_dir()?;
        let text = self.render(&cwd)?;

        emit(self.output.as_deref(), &format!("{text}\n"))?;

        if let Some(path) = &self.output {
            if !global.quiet {
                output::success(&format!(
                    "Release notes for {} written to {}",
                    self.version,
                    output::path_style().apply_to(path.display())
                ));
            }
        }

        Ok(())
    }

    /// Build the release notes text relative to `cwd`
    pub fn render(&self, cwd: &Path) -> anyhow::Result<String> {
        let (config, config_path) = load_config_or_default(cwd)?;
        debug!(config = ?config_path, "resolved configuration");

        let changelog = self
            .changelog
            .clone()
            .unwrap_or_else(|| config.release_notes.changelog.clone());
        let changelog = cwd.join(changelog);

        let mut builder = ReleaseNotesBuilder::from_config(&config.release_notes)?;
        match self.diff_url.as_deref().map(str::trim) {
            // An unset CI variable expands to an empty flag
            Some("") => builder = builder.without_diff_url(),
            Some(template) => {
                let template: DiffUrlTemplate = template
                    .parse()
                    .with_context(|| format!("Invalid --diff-url `{template}`"))?;
                builder = builder.with_diff_url(template);
            }
            None => {}
        }

        // Git is only consulted for the comparison link
        let tags: Box<dyn TagLister> = match builder.diff_url() {
            Some(_) => tag_lister(config.git.backend, cwd)?,
            None => Box::new(GitCli::new(cwd)),
        };

        let notes = builder.build_from_file(&changelog, &self.version, tags.as_ref())?;
        Ok(notes.to_markdown())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shipnotes_core::error::{ChangelogError, ShipnotesError};
    use tempfile::TempDir;

    const CHANGELOG: &str = "\
# Changelog

## [2.0.0] - 2024-06-01

### Changed

- Dropped legacy flags

## [1.0.0] - 2024-01-01

- First
";

    fn command(version: &str) -> ReleaseNotesCommand {
        ReleaseNotesCommand {
            changelog: None,
            version: version.to_string(),
            diff_url: None,
            output: None,
        }
    }

    #[test]
    fn test_render_default_changelog() {
        let temp = TempDir::new().unwrap();
        std::fs::write(temp.path().join("CHANGELOG.md"), CHANGELOG).unwrap();

        let text = command("2.0.0").render(temp.path()).unwrap();
        assert_eq!(
            text,
            "# [2.0.0] - 2024-06-01\n\n## Release Notes\n\n### Changed\n\n- Dropped legacy flags"
        );
    }

    #[test]
    fn test_render_changelog_from_config() {
        let temp = TempDir::new().unwrap();
        std::fs::create_dir_all(temp.path().join("docs")).unwrap();
        std::fs::write(temp.path().join("docs").join("CHANGES.md"), CHANGELOG).unwrap();
        std::fs::write(
            temp.path().join("shipnotes.toml"),
            "[release_notes]\nchangelog = \"docs/CHANGES.md\"\nheading = \"Notes\"\n",
        )
        .unwrap();

        let text = command("1.0.0").render(temp.path()).unwrap();
        assert_eq!(text, "# [1.0.0] - 2024-01-01\n\n## Notes\n\n- First");
    }

    #[test]
    fn test_missing_changelog() {
        let temp = TempDir::new().unwrap();
        let err = command("1.0.0").render(temp.path()).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ShipnotesError>(),
            Some(ShipnotesError::Changelog(ChangelogError::FileNotFound(_)))
        ));
    }

    #[test]
    fn test_unknown_version() {
        let temp = TempDir::new().unwrap();
        std::fs::write(temp.path().join("CHANGELOG.md"), CHANGELOG).unwrap();

        let err = command("3.0.0").render(temp.path()).unwrap_err();
        assert_eq!(crate::exit_codes::for_error(&err), crate::exit_codes::VERSION_ERROR);
    }

    #[test]
    fn test_invalid_diff_url_flag() {
        let temp = TempDir::new().unwrap();
        std::fs::write(temp.path().join("CHANGELOG.md"), CHANGELOG).unwrap();

        let mut cmd = command("2.0.0");
        cmd.diff_url = Some("https://x/compare".to_string());
        let err = cmd.render(temp.path()).unwrap_err();
        assert_eq!(crate::exit_codes::for_error(&err), crate::exit_codes::CONFIG_ERROR);
    }

    #[test]
    fn test_empty_diff_url_disables_link() {
        let temp = TempDir::new().unwrap();
        std::fs::write(temp.path().join("CHANGELOG.md"), CHANGELOG).unwrap();
        std::fs::write(
            temp.path().join("shipnotes.toml"),
            "[release_notes]\ndiff_url = \"https://x/compare/{old}...{new}\"\n",
        )
        .unwrap();

        for empty in ["", "  "] {
            let mut cmd = command("1.0.0");
            cmd.diff_url = Some(empty.to_string());
            let text = cmd.render(temp.path()).unwrap();
            assert_eq!(text, "# [1.0.0] - 2024-01-01\n\n## Release Notes\n\n- First");
        }
    }

    /// Repository with v1.0.0 and v2.0.0 tagged on consecutive commits
    fn tagged_repo(temp: &TempDir) {
        use git2::{Repository, Signature, Time};

        let repo = Repository::init(temp.path()).unwrap();
        let mut parent: Option<git2::Oid> = None;

        for (i, tag) in ["v1.0.0", "v2.0.0"].iter().enumerate() {
            let sig =
                Signature::new("Test", "test@example.com", &Time::new(1_000 * (i as i64 + 1), 0))
                    .unwrap();
            std::fs::write(temp.path().join("CHANGELOG.md"), CHANGELOG).unwrap();
            let mut index = repo.index().unwrap();
            index.add_path(Path::new("CHANGELOG.md")).unwrap();
            index.write().unwrap();
            let tree = repo.find_tree(index.write_tree().unwrap()).unwrap();

            let parents: Vec<git2::Commit<'_>> =
                parent.map(|oid| repo.find_commit(oid).unwrap()).into_iter().collect();
            let parent_refs: Vec<&git2::Commit<'_>> = parents.iter().collect();
            let oid = repo
                .commit(Some("HEAD"), &sig, &sig, tag, &tree, &parent_refs)
                .unwrap();

            let commit = repo.find_commit(oid).unwrap();
            repo.tag_lightweight(tag, commit.as_object(), false).unwrap();
            parent = Some(oid);
        }
    }

    #[test]
    fn test_render_with_compare_link_via_libgit2() {
        let temp = TempDir::new().unwrap();
        tagged_repo(&temp);
        std::fs::write(
            temp.path().join("shipnotes.toml"),
            "[git]\nbackend = \"libgit2\"\n",
        )
        .unwrap();

        let mut cmd = command("v2.0.0");
        cmd.diff_url = Some("https://x/compare/{old}...{new}".to_string());
        // The changelog uses bare versions, the tags carry a `v` prefix
        let changelog = CHANGELOG.replace("## [", "## [v");
        std::fs::write(temp.path().join("CHANGELOG.md"), changelog).unwrap();

        let text = cmd.render(temp.path()).unwrap();
        assert!(text.starts_with("# [v2.0.0] - 2024-06-01\n\n## Release Notes\n"));
        assert!(text.ends_with(
            "\n\n**Full Changelog:** [v1.0.0...v2.0.0](https://x/compare/v1.0.0...v2.0.0)"
        ));
    }

    #[test]
    fn test_first_release_has_no_compare_link() {
        let temp = TempDir::new().unwrap();
        tagged_repo(&temp);
        std::fs::write(
            temp.path().join("shipnotes.toml"),
            "[release_notes]\ndiff_url = \"https://x/compare/{old}...{new}\"\n\n[git]\nbackend = \"libgit2\"\n",
        )
        .unwrap();
        let changelog = CHANGELOG.replace("## [", "## [v");
        std::fs::write(temp.path().join("CHANGELOG.md"), changelog).unwrap();

        let text = command("v1.0.0").render(temp.path()).unwrap();
        assert_eq!(text, "# [v1.0.0] - 2024-01-01\n\n## Release Notes\n\n- First");
    }
}

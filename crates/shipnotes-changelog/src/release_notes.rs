//! Release notes assembly from a changelog file

use std::path::Path;

use tracing::{debug, info, instrument};

use shipnotes_core::config::ReleaseNotesConfig;
use shipnotes_core::error::{ChangelogError, Result};
use shipnotes_git::TagLister;

use crate::diff_link::{full_changelog_line, previous_tag, DiffUrlTemplate};
use crate::extract::SectionExtractor;

/// Release notes for one version
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleaseNotes {
    /// Requested version label
    pub version: String,
    /// Extracted changelog section
    pub body: String,
    /// Previous reachable tag, when a comparison link was requested and one exists
    pub previous_tag: Option<String>,
    /// Trailing "Full Changelog" line
    pub compare_link: Option<String>,
}

impl ReleaseNotes {
    /// Render the final markdown text
    pub fn to_markdown(&self) -> String {
        match &self.compare_link {
            Some(link) => format!("{}\n\n{}", self.body, link),
            None => self.body.clone(),
        }
    }
}

/// Builds release notes: extract a section, then optionally link the diff
/// against the previous tag.
#[derive(Debug, Clone, Default)]
pub struct ReleaseNotesBuilder {
    extractor: SectionExtractor,
    diff_url: Option<DiffUrlTemplate>,
}

impl ReleaseNotesBuilder {
    /// Create a builder with the default sub-heading and no comparison link
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a builder from configuration
    pub fn from_config(config: &ReleaseNotesConfig) -> Result<Self> {
        let mut builder =
            Self::new().with_extractor(SectionExtractor::new().with_subheading(&config.heading));
        if let Some(template) = config.diff_url_template() {
            builder = builder.with_diff_url(DiffUrlTemplate::parse(template)?);
        }
        Ok(builder)
    }

    /// Use a custom extractor
    pub fn with_extractor(mut self, extractor: SectionExtractor) -> Self {
        self.extractor = extractor;
        self
    }

    /// Append a comparison link rendered from this template
    pub fn with_diff_url(mut self, template: DiffUrlTemplate) -> Self {
        self.diff_url = Some(template);
        self
    }

    /// Drop the comparison link, including one set from configuration
    pub fn without_diff_url(mut self) -> Self {
        self.diff_url = None;
        self
    }

    /// The comparison link template, if any
    pub fn diff_url(&self) -> Option<&DiffUrlTemplate> {
        self.diff_url.as_ref()
    }

    /// Build release notes from changelog text.
    ///
    /// `tags` is only consulted when a diff URL template is set.
    #[instrument(skip(self, document, tags), fields(document_len = document.len()))]
    pub fn build<L: TagLister + ?Sized>(
        &self,
        document: &str,
        version: &str,
        tags: &L,
    ) -> Result<ReleaseNotes> {
        info!(version, diff_link = self.diff_url.is_some(), "building release notes");
        let body = self.extractor.extract(document, version)?;

        let mut notes = ReleaseNotes {
            version: version.to_string(),
            body,
            previous_tag: None,
            compare_link: None,
        };

        if let Some(template) = &self.diff_url {
            match previous_tag(tags, version)? {
                Some(previous) => {
                    notes.compare_link = Some(full_changelog_line(template, &previous, version));
                    notes.previous_tag = Some(previous);
                }
                None => debug!(version, "no previous tag, skipping comparison link"),
            }
        }

        Ok(notes)
    }

    /// Read a changelog file and build release notes from it
    #[instrument(skip(self, tags), fields(path = %path.display()))]
    pub fn build_from_file<L: TagLister + ?Sized>(
        &self,
        path: &Path,
        version: &str,
        tags: &L,
    ) -> Result<ReleaseNotes> {
        if !path.is_file() {
            return Err(ChangelogError::FileNotFound(path.to_path_buf()).into());
        }

        let document = std::fs::read_to_string(path).map_err(ChangelogError::Io)?;
        debug!(bytes = document.len(), "read changelog");
        self.build(&document, version, tags)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shipnotes_core::error::{GitError, ShipnotesError};
    use std::cell::Cell;
    use tempfile::TempDir;

    const CHANGELOG: &str = "\
# Changelog

## [v1.1.0] - 2024-03-01

- Faster startup

## [v1.0.0] - 2024-01-15

- Initial release
";

    /// Records whether it was asked and answers with fixed tags
    struct StubTags {
        tags: Vec<&'static str>,
        asked: Cell<bool>,
    }

    impl StubTags {
        fn new(tags: Vec<&'static str>) -> Self {
            Self {
                tags,
                asked: Cell::new(false),
            }
        }
    }

    impl TagLister for StubTags {
        fn reachable_tags(&self, _tag: &str) -> shipnotes_git::Result<Vec<String>> {
            self.asked.set(true);
            Ok(self.tags.iter().map(|t| t.to_string()).collect())
        }
    }

    struct BrokenGit;

    impl TagLister for BrokenGit {
        fn reachable_tags(&self, tag: &str) -> shipnotes_git::Result<Vec<String>> {
            Err(GitError::CommandFailed {
                command: format!("git tag --sort=-creatordate --merged {tag}"),
                status: "exit status: 128".to_string(),
                stderr: "fatal: malformed object name".to_string(),
            })
        }
    }

    fn compare_builder() -> ReleaseNotesBuilder {
        ReleaseNotesBuilder::new()
            .with_diff_url(DiffUrlTemplate::parse("https://x/compare/{old}...{new}").unwrap())
    }

    #[test]
    fn test_build_without_diff_url() {
        let tags = StubTags::new(vec!["v1.1.0", "v1.0.0"]);
        let notes = ReleaseNotesBuilder::new()
            .build(CHANGELOG, "v1.1.0", &tags)
            .unwrap();

        assert!(!tags.asked.get());
        assert_eq!(notes.compare_link, None);
        assert_eq!(
            notes.to_markdown(),
            "# [v1.1.0] - 2024-03-01\n\n## Release Notes\n\n- Faster startup"
        );
    }

    #[test]
    fn test_build_with_compare_link() {
        let tags = StubTags::new(vec!["v1.1.0", "v1.0.0"]);
        let notes = compare_builder().build(CHANGELOG, "v1.1.0", &tags).unwrap();

        assert_eq!(notes.previous_tag.as_deref(), Some("v1.0.0"));
        let text = notes.to_markdown();
        assert!(text.starts_with("# [v1.1.0] - 2024-03-01\n\n## Release Notes\n"));
        assert!(text.ends_with(
            "- Faster startup\n\n**Full Changelog:** [v1.0.0...v1.1.0](https://x/compare/v1.0.0...v1.1.0)"
        ));
    }

    #[test]
    fn test_first_release_has_no_link() {
        let tags = StubTags::new(vec!["v1.0.0"]);
        let notes = compare_builder().build(CHANGELOG, "v1.0.0", &tags).unwrap();

        assert!(tags.asked.get());
        assert!(notes.compare_link.is_none());
        assert!(!notes.to_markdown().contains("Full Changelog"));
    }

    #[test]
    fn test_git_failure_is_fatal() {
        let result = compare_builder().build(CHANGELOG, "v1.1.0", &BrokenGit);
        assert!(matches!(
            result,
            Err(ShipnotesError::Git(GitError::CommandFailed { .. }))
        ));
    }

    #[test]
    fn test_missing_version_checked_before_git() {
        let tags = StubTags::new(vec![]);
        let result = compare_builder().build(CHANGELOG, "v3.0.0", &tags);
        assert!(matches!(
            result,
            Err(ShipnotesError::Changelog(ChangelogError::VersionNotFound(_)))
        ));
        assert!(!tags.asked.get());
    }

    #[test]
    fn test_build_from_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("CHANGELOG.md");
        std::fs::write(&path, CHANGELOG).unwrap();

        let tags = StubTags::new(vec![]);
        let notes = ReleaseNotesBuilder::new()
            .build_from_file(&path, "v1.0.0", &tags)
            .unwrap();
        assert_eq!(notes.version, "v1.0.0");
        assert!(notes.body.ends_with("- Initial release"));
    }

    #[test]
    fn test_missing_changelog_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("CHANGELOG.md");

        let tags = StubTags::new(vec![]);
        let result = ReleaseNotesBuilder::new().build_from_file(&path, "v1.0.0", &tags);
        assert!(matches!(
            result,
            Err(ShipnotesError::Changelog(ChangelogError::FileNotFound(ref p))) if *p == path
        ));
    }

    #[test]
    fn test_from_config() {
        let config = ReleaseNotesConfig {
            heading: "Highlights".to_string(),
            diff_url: Some("https://x/{old}/{new}".to_string()),
            ..Default::default()
        };
        let builder = ReleaseNotesBuilder::from_config(&config).unwrap();
        assert_eq!(
            builder.diff_url().map(DiffUrlTemplate::as_str),
            Some("https://x/{old}/{new}")
        );

        let tags = StubTags::new(vec!["v1.1.0", "v1.0.0"]);
        let notes = builder.build(CHANGELOG, "v1.1.0", &tags).unwrap();
        assert!(notes.body.contains("\n## Highlights\n"));
        assert!(notes.to_markdown().ends_with("(https://x/v1.0.0/v1.1.0)"));
    }

    #[test]
    fn test_from_config_blank_template_disables_link() {
        let config = ReleaseNotesConfig {
            diff_url: Some("   ".to_string()),
            ..Default::default()
        };
        let builder = ReleaseNotesBuilder::from_config(&config).unwrap();
        assert!(builder.diff_url().is_none());
    }

    #[test]
    fn test_without_diff_url_clears_configured_link() {
        let tags = StubTags::new(vec!["v1.1.0", "v1.0.0"]);
        let notes = compare_builder()
            .without_diff_url()
            .build(CHANGELOG, "v1.1.0", &tags)
            .unwrap();
        assert!(!tags.asked.get());
        assert!(notes.compare_link.is_none());
    }

    #[test]
    fn test_from_config_rejects_bad_template() {
        let config = ReleaseNotesConfig {
            diff_url: Some("https://x/compare".to_string()),
            ..Default::default()
        };
        assert!(ReleaseNotesBuilder::from_config(&config).is_err());
    }
}

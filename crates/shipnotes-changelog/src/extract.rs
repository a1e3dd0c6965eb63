//! Version section extraction
//!
//! A changelog in the Keep a Changelog layout has one `## [<version>] ...`
//! heading per release. The section for a version runs from its heading up
//! to the next line starting with `## `, or the end of the document.
//!
//! Headings are matched with literal prefix checks, so characters such as
//! `.`, `+` or `*` in a version label have no special meaning.

use tracing::{debug, instrument};

use shipnotes_core::config::DEFAULT_RELEASE_NOTES_HEADING;
use shipnotes_core::error::ChangelogError;

/// Prefix of every top-level release heading
const SECTION_PREFIX: &str = "## ";

/// The lines of one version's section, borrowed from the document.
///
/// Each line keeps its original terminator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionSection<'a> {
    /// The `## [<version>] ...` line
    pub heading: &'a str,
    /// Lines after the heading, up to the next section
    pub body: Vec<&'a str>,
}

impl<'a> VersionSection<'a> {
    /// Locate the section for `version` in `document`
    pub fn find(document: &'a str, version: &str) -> Result<Self, ChangelogError> {
        let start = format!("## [{version}]");
        let mut lines = document.split_inclusive('\n');

        let heading = lines
            .by_ref()
            .find(|line| line.starts_with(&start))
            .ok_or_else(|| ChangelogError::VersionNotFound(version.to_string()))?;

        let body: Vec<&str> = lines
            .take_while(|line| !line.starts_with(SECTION_PREFIX))
            .collect();

        Ok(Self { heading, body })
    }

    /// Render as a standalone document.
    ///
    /// The heading is promoted to a level one heading and `## <subheading>`
    /// is inserted below it, separated by a blank line. Line endings are
    /// normalized to `\n`.
    pub fn render(&self, subheading: &str) -> String {
        let body_len: usize = self.body.iter().map(|l| l.len()).sum();
        let mut output = String::with_capacity(self.heading.len() + subheading.len() + body_len + 8);

        // `## [1.0.0]` -> `# [1.0.0]`
        output.push_str(line_content(&self.heading[1..]));
        output.push_str("\n\n");
        output.push_str(SECTION_PREFIX);
        output.push_str(subheading);
        output.push('\n');

        for line in &self.body {
            output.push_str(line_content(line));
            if line.ends_with('\n') {
                output.push('\n');
            }
        }

        output.trim().to_string()
    }
}

/// A line without its `\n` or `\r\n` terminator
fn line_content(line: &str) -> &str {
    let line = line.strip_suffix('\n').unwrap_or(line);
    line.strip_suffix('\r').unwrap_or(line)
}

/// Extracts version sections with a configurable sub-heading
#[derive(Debug, Clone)]
pub struct SectionExtractor {
    subheading: String,
}

impl SectionExtractor {
    /// Create an extractor inserting `## Release Notes`
    pub fn new() -> Self {
        Self {
            subheading: DEFAULT_RELEASE_NOTES_HEADING.to_string(),
        }
    }

    /// Use a different sub-heading text
    pub fn with_subheading(mut self, subheading: impl Into<String>) -> Self {
        self.subheading = subheading.into();
        self
    }

    /// Extract and render the section for `version`
    #[instrument(skip(self, document), fields(document_len = document.len()))]
    pub fn extract(&self, document: &str, version: &str) -> Result<String, ChangelogError> {
        let section = VersionSection::find(document, version)?;
        debug!(
            version,
            heading = section.heading.trim_end(),
            body_lines = section.body.len(),
            "found version section"
        );
        Ok(section.render(&self.subheading))
    }
}

impl Default for SectionExtractor {
    fn default() -> Self {
        Self::new()
    }
}

/// Extract the section for `version` with the default sub-heading
pub fn extract_section(document: &str, version: &str) -> Result<String, ChangelogError> {
    SectionExtractor::new().extract(document, version)
}

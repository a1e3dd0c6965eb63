//! "Full Changelog" comparison links

use std::fmt;
use std::str::FromStr;

use tracing::{debug, instrument};

use shipnotes_core::config::{validate_diff_url, NEW_PLACEHOLDER, OLD_PLACEHOLDER};
use shipnotes_core::error::{ConfigError, GitError};
use shipnotes_git::TagLister;

/// A compare URL with `{old}` and `{new}` placeholders.
///
/// - GitLab CI: `$CI_PROJECT_URL/-/compare/{old}...{new}`
/// - GitHub: `$GITHUB_SERVER_URL/$GITHUB_REPOSITORY/compare/{old}...{new}`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiffUrlTemplate(String);

impl DiffUrlTemplate {
    /// Validate and wrap a template
    pub fn parse(template: impl Into<String>) -> Result<Self, ConfigError> {
        let template = template.into();
        validate_diff_url(&template).map_err(|message| ConfigError::InvalidValue {
            field: "diff_url".to_string(),
            message,
        })?;
        Ok(Self(template))
    }

    /// Substitute both placeholders in one pass.
    ///
    /// Substituted text is never scanned again, so a tag name containing
    /// `{new}` or `{old}` is inserted verbatim.
    pub fn render(&self, old: &str, new: &str) -> String {
        let mut output = String::with_capacity(self.0.len() + old.len() + new.len());
        let mut rest = self.0.as_str();

        loop {
            let next = [(OLD_PLACEHOLDER, old), (NEW_PLACEHOLDER, new)]
                .into_iter()
                .filter_map(|(placeholder, value)| {
                    rest.find(placeholder).map(|at| (at, placeholder, value))
                })
                .min_by_key(|(at, _, _)| *at);

            match next {
                Some((at, placeholder, value)) => {
                    output.push_str(&rest[..at]);
                    output.push_str(value);
                    rest = &rest[at + placeholder.len()..];
                }
                None => {
                    output.push_str(rest);
                    return output;
                }
            }
        }
    }

    /// The raw template
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for DiffUrlTemplate {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for DiffUrlTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The closest release tag reachable from `version`.
///
/// This is the newest merged tag other than `version` itself; `None` when
/// `version` is the first release.
#[instrument(skip(lister))]
pub fn previous_tag<L: TagLister + ?Sized>(
    lister: &L,
    version: &str,
) -> Result<Option<String>, GitError> {
    let previous = lister
        .reachable_tags(version)?
        .into_iter()
        .find(|tag| tag.as_str() != version);
    debug!(version, previous = ?previous, "resolved previous tag");
    Ok(previous)
}

/// Markdown line linking the comparison between two tags
pub fn full_changelog_line(template: &DiffUrlTemplate, previous: &str, version: &str) -> String {
    format!(
        "**Full Changelog:** [{previous}...{version}]({})",
        template.render(previous, version)
    )
}

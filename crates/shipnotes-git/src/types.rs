//! Git types

use chrono::{DateTime, TimeZone, Utc};

/// Information about a git tag
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagInfo {
    /// Tag name
    pub name: String,
    /// Commit hash the tag points to
    pub commit_hash: String,
    /// Creation time: tagger date for annotated tags, committer date otherwise
    pub created: DateTime<Utc>,
    /// Tag message (for annotated tags)
    pub message: Option<String>,
}

impl TagInfo {
    /// Create a new TagInfo
    pub fn new(
        name: impl Into<String>,
        commit_hash: impl Into<String>,
        created: DateTime<Utc>,
    ) -> Self {
        Self {
            name: name.into(),
            commit_hash: commit_hash.into(),
            created,
            message: None,
        }
    }

    /// Set the tag message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Whether this is an annotated tag
    pub fn is_annotated(&self) -> bool {
        self.message.is_some()
    }
}

/// Convert a git timestamp (seconds since the epoch) to UTC
pub(crate) fn git_time_to_utc(time: git2::Time) -> DateTime<Utc> {
    Utc.timestamp_opt(time.seconds(), 0)
        .single()
        .unwrap_or(DateTime::<Utc>::UNIX_EPOCH)
}

/// Order tags newest first; equal timestamps fall back to name order
pub(crate) fn sort_newest_first(tags: &mut [TagInfo]) {
    tags.sort_by(|a, b| b.created.cmp(&a.created).then_with(|| a.name.cmp(&b.name)));
}

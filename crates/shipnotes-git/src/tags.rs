//! Tag operations

use git2::Oid;
use tracing::{debug, instrument};

use crate::lister::TagLister;
use crate::repository::{GitRepo, Result};
use crate::types::{git_time_to_utc, sort_newest_first, TagInfo};
use shipnotes_core::error::GitError;

impl GitRepo {
    /// Get all tags that point (directly or through an annotated tag) at a commit
    #[instrument(skip(self))]
    pub fn tags(&self) -> Result<Vec<TagInfo>> {
        let mut refs: Vec<(String, Oid)> = Vec::new();

        self.repo.tag_foreach(|oid, name| {
            let name = String::from_utf8_lossy(name)
                .trim_start_matches("refs/tags/")
                .to_string();
            refs.push((name, oid));
            true
        })?;

        let mut tags = Vec::with_capacity(refs.len());
        for (name, oid) in refs {
            let object = self.repo.find_object(oid, None)?;
            let commit = match object.peel_to_commit() {
                Ok(commit) => commit,
                // Tags on trees or blobs have no place in history
                Err(_) => continue,
            };

            let tag_info = match object.as_tag() {
                Some(tag) => {
                    let created = tag
                        .tagger()
                        .map(|tagger| git_time_to_utc(tagger.when()))
                        .unwrap_or_else(|| git_time_to_utc(commit.committer().when()));
                    TagInfo::new(&name, commit.id().to_string(), created)
                        .with_message(tag.message().unwrap_or_default())
                }
                None => TagInfo::new(
                    &name,
                    commit.id().to_string(),
                    git_time_to_utc(commit.committer().when()),
                ),
            };

            tags.push(tag_info);
        }

        debug!(count = tags.len(), "listed all tags");
        Ok(tags)
    }

    /// Find a specific tag by name
    pub fn find_tag(&self, name: &str) -> Result<Option<TagInfo>> {
        Ok(self.tags()?.into_iter().find(|t| t.name == name))
    }

    /// Tags whose commit is the commit of `tag` or one of its ancestors,
    /// ordered by creation date, newest first.
    #[instrument(skip(self), fields(tag))]
    pub fn merged_tags(&self, tag: &str) -> Result<Vec<TagInfo>> {
        let all = self.tags()?;
        let target = all
            .iter()
            .find(|t| t.name == tag)
            .map(|t| Oid::from_str(&t.commit_hash))
            .transpose()?
            .ok_or_else(|| GitError::TagNotFound(tag.to_string()))?;

        let mut merged = Vec::new();
        for info in all {
            let oid = Oid::from_str(&info.commit_hash)?;
            if oid == target || self.repo.graph_descendant_of(target, oid)? {
                merged.push(info);
            }
        }

        sort_newest_first(&mut merged);
        debug!(tag, count = merged.len(), "listed merged tags");
        Ok(merged)
    }
}

impl TagLister for GitRepo {
    fn reachable_tags(&self, tag: &str) -> Result<Vec<String>> {
        Ok(self
            .merged_tags(tag)?
            .into_iter()
            .map(|t| t.name)
            .collect())
    }
}

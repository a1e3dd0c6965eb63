//! Tag listing abstraction

use std::path::Path;

use tracing::debug;

use shipnotes_core::config::GitBackend;

use crate::cli::GitCli;
use crate::repository::{GitRepo, Result};

/// Lists the tags reachable from a given tag.
///
/// Implementations return tag names ordered by creation date, newest first.
/// The queried tag itself is part of the listing.
pub trait TagLister {
    /// Tags merged into `tag`, newest first
    fn reachable_tags(&self, tag: &str) -> Result<Vec<String>>;
}

impl<T: TagLister + ?Sized> TagLister for &T {
    fn reachable_tags(&self, tag: &str) -> Result<Vec<String>> {
        (**self).reachable_tags(tag)
    }
}

impl<T: TagLister + ?Sized> TagLister for Box<T> {
    fn reachable_tags(&self, tag: &str) -> Result<Vec<String>> {
        (**self).reachable_tags(tag)
    }
}

/// Tag lister for the configured backend, rooted at `workdir`.
///
/// The libgit2 backend opens the enclosing repository right away, so a
/// directory outside any repository fails here rather than on first query.
pub fn tag_lister(backend: GitBackend, workdir: &Path) -> Result<Box<dyn TagLister>> {
    debug!(?backend, workdir = %workdir.display(), "selecting tag backend");
    Ok(match backend {
        GitBackend::Cli => Box::new(GitCli::new(workdir)),
        GitBackend::Libgit2 => Box::new(GitRepo::discover(workdir)?),
    })
}

//! In-process tag backend over libgit2

use std::path::Path;

use git2::Repository;
use tracing::{info, instrument};

use shipnotes_core::error::GitError;

/// Result type for git operations
pub type Result<T> = std::result::Result<T, GitError>;

/// A repository read through libgit2, so no `git` binary is needed
pub struct GitRepo {
    pub(crate) repo: Repository,
}

impl GitRepo {
    /// Find the repository containing `workdir`, searching parent directories
    #[instrument(fields(workdir = %workdir.display()))]
    pub fn discover(workdir: &Path) -> Result<Self> {
        let repo = Repository::discover(workdir).map_err(|e| {
            if e.code() == git2::ErrorCode::NotFound {
                GitError::NotARepository(workdir.to_path_buf())
            } else {
                GitError::OpenFailed(e.to_string())
            }
        })?;
        info!(git_dir = %repo.path().display(), "opened repository for tag listing");

        Ok(Self { repo })
    }
}

impl std::fmt::Debug for GitRepo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GitRepo")
            .field("git_dir", &self.repo.path())
            .finish()
    }
}

use crate::error::Result;
use crate::git::Repository;
use git2::Repository as Git2Repo;
use std::path::{Path, PathBuf};

const BRANCH_REF_PREFIX: &str = "refs/heads/";

/// Wrapper around git2::Repository with our trait interface
pub struct Git2Repository {
    repo: Git2Repo,
}

impl Git2Repository {
    /// Open or discover a git repository
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let repo = Git2Repo::discover(path)?;

        Ok(Git2Repository { repo })
    }

    /// Create from existing git2::Repository
    pub fn from_git2(repo: Git2Repo) -> Self {
        Git2Repository { repo }
    }
}

impl Repository for Git2Repository {
    fn current_branch(&self) -> Result<String> {
        // HEAD is read as a symbolic ref rather than resolved, so a branch
        // with no commits yet still has a name.
        let head = self.repo.find_reference("HEAD")?;

        let branch = head
            .symbolic_target()
            .and_then(|target| target.strip_prefix(BRANCH_REF_PREFIX))
            .unwrap_or("")
            .to_string();

        Ok(branch)
    }

    fn git_path(&self, name: &str) -> Result<PathBuf> {
        Ok(self.repo.path().join(name))
    }
}

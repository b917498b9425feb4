use crate::error::{HookError, Result};
use crate::git::Repository;
use std::path::{Path, PathBuf};

/// Mock repository for testing without a git installation
pub struct MockRepository {
    branch: String,
    git_dir: PathBuf,
    fail_with: Option<String>,
}

impl MockRepository {
    /// A repository with `branch` checked out
    pub fn on_branch(branch: impl Into<String>) -> Self {
        MockRepository {
            branch: branch.into(),
            git_dir: PathBuf::from(".git"),
            fail_with: None,
        }
    }

    /// A repository with a detached HEAD whose metadata lives in `git_dir`
    pub fn detached(git_dir: impl AsRef<Path>) -> Self {
        MockRepository {
            branch: String::new(),
            git_dir: git_dir.as_ref().to_path_buf(),
            fail_with: None,
        }
    }

    /// Make every query fail as if `git` exited non-zero
    pub fn failing(message: impl Into<String>) -> Self {
        MockRepository {
            branch: String::new(),
            git_dir: PathBuf::new(),
            fail_with: Some(message.into()),
        }
    }

    fn check(&self) -> Result<()> {
        match &self.fail_with {
            Some(message) => Err(HookError::command(message.clone())),
            None => Ok(()),
        }
    }
}

impl Repository for MockRepository {
    fn current_branch(&self) -> Result<String> {
        self.check()?;
        Ok(self.branch.clone())
    }

    fn git_path(&self, name: &str) -> Result<PathBuf> {
        self.check()?;
        Ok(self.git_dir.join(name))
    }
}

//! Git access layer
//!
//! The hook only ever asks git two read-only questions: which branch is
//! checked out, and where an internal metadata directory lives. Both are
//! behind the [Repository] trait so the resolution logic can run against:
//!
//! - [command::CommandRepository]: spawns the `git` executable
//! - [repository::Git2Repository]: answers in-process using the `git2` crate
//! - [mock::MockRepository]: canned answers for tests
//!
//! ```rust
//! # use commit_msg_hook::git::{resolve_branch_name, MockRepository};
//! let repo = MockRepository::on_branch("foo-bar-baz-PRESS-123");
//! let branch = resolve_branch_name(&repo, &["rebase-merge".to_string()]).unwrap();
//! assert_eq!(branch.as_str(), "foo-bar-baz-PRESS-123");
//! ```

pub mod command;
pub mod mock;
pub mod repository;

pub use command::CommandRepository;
pub use mock::MockRepository;
pub use repository::Git2Repository;

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use crate::config::GitBackend;
use crate::domain::BranchName;
use crate::error::{HookError, Result};

/// File inside a rebase state directory that records the rebased branch ref
pub const HEAD_NAME_FILE: &str = "head-name";

/// Read-only git queries needed to resolve the current branch
pub trait Repository {
    /// Name of the checked-out branch.
    ///
    /// Returns an empty string when HEAD is detached, e.g. in the middle of
    /// an interactive rebase.
    fn current_branch(&self) -> Result<String>;

    /// Path of an internal metadata directory such as `rebase-merge`.
    ///
    /// The directory does not have to exist.
    fn git_path(&self, name: &str) -> Result<PathBuf>;
}

/// Opens the repository containing `workdir` with the configured backend
pub fn open_repository(backend: GitBackend, workdir: &Path) -> Result<Box<dyn Repository>> {
    match backend {
        GitBackend::Cli => Ok(Box::new(CommandRepository::new(workdir))),
        GitBackend::Libgit2 => Ok(Box::new(Git2Repository::open(workdir)?)),
    }
}

/// Determines the branch the commit is being made on.
///
/// Uses the checked-out branch when there is one. Otherwise each rebase
/// state directory in `rebase_dirs` is tried in order, and the first one
/// that exists supplies the branch from its `head-name` file.
///
/// # Returns
/// * `Ok(BranchName)` - The resolved short branch name
/// * `Err(HookError::BranchResolution)` - No branch checked out and no rebase in progress
/// * `Err` - If a git query or reading `head-name` fails
pub fn resolve_branch_name<R: Repository + ?Sized>(
    repo: &R,
    rebase_dirs: &[String],
) -> Result<BranchName> {
    let current = BranchName::new(repo.current_branch()?);
    if !current.is_empty() {
        return Ok(current);
    }

    if let Some(rebasing) = rebasing_branch_name(repo, rebase_dirs)? {
        if !rebasing.is_empty() {
            return Ok(rebasing);
        }
    }

    Err(HookError::branch(
        "no branch is checked out and no rebase is in progress",
    ))
}

fn rebasing_branch_name<R: Repository + ?Sized>(
    repo: &R,
    rebase_dirs: &[String],
) -> Result<Option<BranchName>> {
    for dir in rebase_dirs {
        let path = repo.git_path(dir)?;
        if path.is_dir() {
            return read_rebase_head_name(&path).map(Some);
        }
    }

    Ok(None)
}

/// Reads the branch recorded in `<rebase_dir>/head-name`.
///
/// Only the first line is used, and only its last path segment is kept.
pub fn read_rebase_head_name(rebase_dir: &Path) -> Result<BranchName> {
    let file = File::open(rebase_dir.join(HEAD_NAME_FILE))?;
    let mut first_line = String::new();
    BufReader::new(file).read_line(&mut first_line)?;

    Ok(BranchName::from_ref(&first_line))
}

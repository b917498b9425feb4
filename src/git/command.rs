use crate::error::{HookError, Result};
use crate::git::Repository;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Answers git queries by running the `git` executable
pub struct CommandRepository {
    workdir: PathBuf,
}

impl CommandRepository {
    /// Run git commands from `workdir`
    pub fn new(workdir: impl AsRef<Path>) -> Self {
        CommandRepository {
            workdir: workdir.as_ref().to_path_buf(),
        }
    }

    /// Run `git <args>` and return its stdout.
    ///
    /// # Returns
    /// * `Ok(String)` - Captured stdout, unmodified
    /// * `Err(HookError::Command)` - If git cannot be spawned or exits non-zero
    fn run(&self, args: &[&str]) -> Result<String> {
        let output = Command::new("git")
            .args(args)
            .current_dir(&self.workdir)
            .output()
            .map_err(|e| {
                HookError::command(format!("failed to run git {}: {}", args.join(" "), e))
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(HookError::command(format!(
                "git {} exited with code {}: {}",
                args.join(" "),
                output.status.code().unwrap_or(-1),
                stderr.trim()
            )));
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

impl Repository for CommandRepository {
    fn current_branch(&self) -> Result<String> {
        let stdout = self.run(&["branch", "--show-current"])?;
        Ok(stdout.trim().to_string())
    }

    fn git_path(&self, name: &str) -> Result<PathBuf> {
        let stdout = self.run(&["rev-parse", "--git-path", name])?;
        // git prints this relative to the directory it ran in
        Ok(self.workdir.join(stdout.trim()))
    }
}

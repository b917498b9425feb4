use std::fmt;

/// Short name of a git branch, without any `refs/...` prefix
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BranchName(String);

impl BranchName {
    /// Create a branch name from a plain branch name, trimming whitespace
    pub fn new(name: impl AsRef<str>) -> Self {
        BranchName(name.as_ref().trim().to_string())
    }

    /// Create a branch name from a ref path such as `refs/heads/PRESS-1`.
    ///
    /// Keeps only the segment after the last `/`, so a branch named
    /// `feature/PRESS-1` recorded as `refs/heads/feature/PRESS-1` becomes
    /// `PRESS-1`.
    pub fn from_ref(reference: &str) -> Self {
        let trimmed = reference.trim();
        let short = trimmed.rsplit('/').next().unwrap_or(trimmed);
        BranchName(short.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for BranchName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

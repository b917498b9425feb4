use thiserror::Error;

/// Unified error type for commit-msg hook operations
#[derive(Error, Debug)]
pub enum HookError {
    #[error("Git operation failed: {0}")]
    Git(#[from] git2::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid pattern: {0}")]
    Pattern(#[from] regex::Error),

    #[error("could not determine branch name: {0}")]
    BranchResolution(String),

    #[error("no issue number found in branch name '{0}'")]
    IssueNotFound(String),

    #[error("git command failed: {0}")]
    Command(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in the hook
pub type Result<T> = std::result::Result<T, HookError>;

impl HookError {
    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        HookError::Config(msg.into())
    }

    /// Create a branch resolution error with context
    pub fn branch(msg: impl Into<String>) -> Self {
        HookError::BranchResolution(msg.into())
    }

    /// Create an external command error with context
    pub fn command(msg: impl Into<String>) -> Self {
        HookError::Command(msg.into())
    }
}

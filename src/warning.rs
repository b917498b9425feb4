use std::fmt;
use std::path::PathBuf;

/// Non-fatal problems found while processing a commit message.
/// The hook still succeeds; these are only reported to the user.
#[derive(Debug, Clone, PartialEq)]
pub enum HookWarning {
    /// Every line of the message is blank or a comment
    MissingSubjectLine { path: PathBuf },
}

impl fmt::Display for HookWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HookWarning::MissingSubjectLine { path } => {
                write!(
                    f,
                    "Could not find commit subject line in '{}'",
                    path.display()
                )
            }
        }
    }
}

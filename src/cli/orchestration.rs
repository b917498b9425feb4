//! Commit-msg workflow orchestration
//!
//! Keeps the hook logic apart from argument parsing so it can be driven
//! with any [Repository] implementation.

use std::fs;
use std::path::PathBuf;

use crate::config::MessageRules;
use crate::domain::{find_issue_number, BranchName, CommitMessage, InsertOutcome, IssueNumber};
use crate::error::Result;
use crate::git::{resolve_branch_name, Repository};
use crate::warning::HookWarning;

/// Arguments for the commit-msg workflow
#[derive(Debug, Clone, PartialEq)]
pub struct WorkflowArgs {
    /// File holding the proposed commit message
    pub message_file: PathBuf,

    /// Compute the result without writing the file back
    pub dry_run: bool,
}

/// What the workflow did to the message
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WorkflowOutcome {
    /// Fixup commit; git was never queried
    SkippedFixup,
    /// Issue number prepended to the subject
    Inserted,
    /// Subject already carried an issue number
    AlreadyReferenced,
    /// No subject line found; message left as is
    MissingSubject,
}

/// Result of a successful workflow run
#[derive(Debug, Clone, PartialEq)]
pub struct WorkflowResult {
    pub outcome: WorkflowOutcome,

    /// Branch the commit is being made on, if it was resolved
    pub branch: Option<BranchName>,

    /// Issue number derived from the branch, if it was resolved
    pub issue_number: Option<IssueNumber>,

    pub warning: Option<HookWarning>,

    /// Final message text, as written (or as it would be written)
    pub message: String,
}

/// Main commit-msg workflow
///
/// 1. Read and split the message file
/// 2. Stop if the subject marks a fixup commit
/// 3. Resolve the branch, extract its issue number, rewrite the subject
/// 4. Write the message back to the same file
///
/// Branch resolution and issue extraction failures abort before anything is
/// written. A missing subject line only produces a warning and the message is
/// written back unchanged.
pub fn run_commit_msg_workflow<R: Repository + ?Sized>(
    args: &WorkflowArgs,
    repo: &R,
    rules: &MessageRules,
    rebase_dirs: &[String],
) -> Result<WorkflowResult> {
    let text = fs::read_to_string(&args.message_file)?;
    let mut message = CommitMessage::parse(&text);

    let mut result = WorkflowResult {
        outcome: WorkflowOutcome::SkippedFixup,
        branch: None,
        issue_number: None,
        warning: None,
        message: String::new(),
    };

    if !message.is_fixup(rules) {
        let branch = resolve_branch_name(repo, rebase_dirs)?;
        let issue_number = find_issue_number(branch.as_str(), rules)?;

        result.outcome = match message.insert_issue_number(&issue_number, rules) {
            InsertOutcome::Inserted => WorkflowOutcome::Inserted,
            InsertOutcome::AlreadyReferenced(_) => WorkflowOutcome::AlreadyReferenced,
            InsertOutcome::MissingSubject => {
                result.warning = Some(HookWarning::MissingSubjectLine {
                    path: args.message_file.clone(),
                });
                WorkflowOutcome::MissingSubject
            }
        };
        result.branch = Some(branch);
        result.issue_number = Some(issue_number);
    }

    result.message = message.to_string();

    if !args.dry_run {
        fs::write(&args.message_file, &result.message)?;
    }

    Ok(result)
}

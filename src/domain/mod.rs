//! Domain logic - pure message rules independent of git operations

pub mod branch;
pub mod issue;
pub mod message;

pub use branch::BranchName;
pub use issue::{find_issue_number, match_issue_number, IssueNumber};
pub use message::{CommitMessage, InsertOutcome};

use std::fmt;

use crate::config::{MessageRules, ISSUE_NUMBER_GROUP};
use crate::error::{HookError, Result};

/// An issue-tracker ticket identifier such as `PRESS-123`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssueNumber(String);

impl IssueNumber {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for IssueNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Returns the leftmost issue number in `text`, if any.
///
/// When the configured pattern declares an `issue_number` capture group,
/// only that group is returned; otherwise the whole match is.
pub fn match_issue_number(text: &str, rules: &MessageRules) -> Option<IssueNumber> {
    let captures = rules.issue_pattern.captures(text)?;
    let matched = captures
        .name(ISSUE_NUMBER_GROUP)
        .or_else(|| captures.get(0))?;

    Some(IssueNumber(matched.as_str().to_string()))
}

/// Extracts the issue number a branch name refers to.
///
/// # Returns
/// * `Ok(IssueNumber)` - The first match, scanning left to right
/// * `Err(HookError::IssueNotFound)` - If the branch name has no match
pub fn find_issue_number(branch_name: &str, rules: &MessageRules) -> Result<IssueNumber> {
    match_issue_number(branch_name, rules)
        .ok_or_else(|| HookError::IssueNotFound(branch_name.to_string()))
}

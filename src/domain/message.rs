use std::fmt;

use crate::config::{MessageRules, ISSUE_NUMBER_PLACEHOLDER, SUBJECT_PLACEHOLDER};
use crate::domain::issue::{match_issue_number, IssueNumber};

/// What happened when inserting an issue number into a message
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InsertOutcome {
    /// The subject line was rewritten
    Inserted,
    /// The subject already names an issue; the message is unchanged
    AlreadyReferenced(IssueNumber),
    /// Every line is blank or a comment; the message is unchanged
    MissingSubject,
}

/// A commit message as an ordered list of lines.
///
/// Parsing splits on `\n` only, so a trailing newline becomes a trailing
/// empty line and is reproduced by [`fmt::Display`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitMessage {
    lines: Vec<String>,
}

impl CommitMessage {
    pub fn parse(text: &str) -> Self {
        CommitMessage {
            lines: text.split('\n').map(str::to_string).collect(),
        }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Index of the first line that is neither blank nor a comment
    pub fn subject_line_index(&self, rules: &MessageRules) -> Option<usize> {
        self.lines
            .iter()
            .position(|line| !is_blank_or_comment(line, rules.comment_char))
    }

    pub fn subject_line(&self, rules: &MessageRules) -> Option<&str> {
        self.subject_line_index(rules)
            .map(|index| self.lines[index].as_str())
    }

    /// Whether the subject starts with one of the configured skip prefixes
    /// (`fixup!` by default).
    pub fn is_fixup(&self, rules: &MessageRules) -> bool {
        self.subject_line(rules).is_some_and(|subject| {
            rules
                .skip_prefixes
                .iter()
                .any(|prefix| subject.starts_with(prefix.as_str()))
        })
    }

    /// Rewrites the subject line using the configured subject format.
    ///
    /// A subject that already contains an issue number is left alone, even
    /// when it names a different issue than `issue_number`.
    pub fn insert_issue_number(
        &mut self,
        issue_number: &IssueNumber,
        rules: &MessageRules,
    ) -> InsertOutcome {
        let Some(index) = self.subject_line_index(rules) else {
            return InsertOutcome::MissingSubject;
        };

        if let Some(existing) = match_issue_number(&self.lines[index], rules) {
            return InsertOutcome::AlreadyReferenced(existing);
        }

        // {subject} goes last so braces in the author's text stay literal.
        let rewritten = rules
            .subject_format
            .replace(ISSUE_NUMBER_PLACEHOLDER, issue_number.as_str())
            .replace(SUBJECT_PLACEHOLDER, &self.lines[index]);
        self.lines[index] = rewritten;

        InsertOutcome::Inserted
    }
}

impl fmt::Display for CommitMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.lines.join("\n"))
    }
}

fn is_blank_or_comment(line: &str, comment_char: char) -> bool {
    let content = line.trim_start();
    content.is_empty() || content.starts_with(comment_char)
}

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::{HookError, Result};

/// Environment variable that points at a configuration file.
///
/// Git runs hooks without extra arguments, so this is the usual way to
/// select a non-default configuration from a hook installation.
pub const CONFIG_ENV_VAR: &str = "COMMIT_MSG_HOOK_CONFIG";

/// Name of the project-local configuration file.
pub const LOCAL_CONFIG_FILE: &str = "commit-msg-hook.toml";

/// Placeholder replaced by the extracted issue number in `subject_format`.
pub const ISSUE_NUMBER_PLACEHOLDER: &str = "{issue_number}";

/// Placeholder replaced by the original subject line in `subject_format`.
pub const SUBJECT_PLACEHOLDER: &str = "{subject}";

/// Name of the optional capture group selecting the issue number.
pub const ISSUE_NUMBER_GROUP: &str = "issue_number";

/// Represents the complete configuration for the commit-msg hook.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub issue: IssueConfig,

    #[serde(default)]
    pub message: MessageConfig,

    #[serde(default)]
    pub git: GitConfig,
}

fn default_issue_pattern() -> String {
    "[A-Z]+-[0-9]+".to_string()
}

fn default_subject_format() -> String {
    format!("{} {}", ISSUE_NUMBER_PLACEHOLDER, SUBJECT_PLACEHOLDER)
}

fn default_comment_char() -> char {
    '#'
}

fn default_skip_prefixes() -> Vec<String> {
    vec!["fixup!".to_string()]
}

fn default_rebase_dirs() -> Vec<String> {
    vec!["rebase-merge".to_string(), "rebase-apply".to_string()]
}

/// How issue numbers are recognised in branch names and subject lines.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct IssueConfig {
    #[serde(default = "default_issue_pattern")]
    pub pattern: String,
}

impl Default for IssueConfig {
    fn default() -> Self {
        IssueConfig {
            pattern: default_issue_pattern(),
        }
    }
}

/// How the commit message is inspected and rewritten.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct MessageConfig {
    #[serde(default = "default_subject_format")]
    pub subject_format: String,

    #[serde(default = "default_comment_char")]
    pub comment_char: char,

    /// Subjects starting with any of these are left untouched.
    #[serde(default = "default_skip_prefixes")]
    pub skip_prefixes: Vec<String>,
}

impl Default for MessageConfig {
    fn default() -> Self {
        MessageConfig {
            subject_format: default_subject_format(),
            comment_char: default_comment_char(),
            skip_prefixes: default_skip_prefixes(),
        }
    }
}

/// Which implementation answers version-control queries.
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum GitBackend {
    /// Spawn the `git` executable
    #[default]
    Cli,
    /// Open the repository in-process with libgit2
    Libgit2,
}

/// Version-control settings.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct GitConfig {
    #[serde(default)]
    pub backend: GitBackend,

    /// Rebase state directories, queried in order.
    #[serde(default = "default_rebase_dirs")]
    pub rebase_dirs: Vec<String>,
}

impl Default for GitConfig {
    fn default() -> Self {
        GitConfig {
            backend: GitBackend::default(),
            rebase_dirs: default_rebase_dirs(),
        }
    }
}

/// Compiled, immutable rules derived from [`Config`].
///
/// Built once per run and passed to every operation that inspects or
/// rewrites a commit message.
#[derive(Debug, Clone)]
pub struct MessageRules {
    pub issue_pattern: Regex,
    pub subject_format: String,
    pub comment_char: char,
    pub skip_prefixes: Vec<String>,
}

impl MessageRules {
    /// Compile the rules from a loaded configuration.
    ///
    /// # Returns
    /// * `Err` - If the issue pattern is not a valid regex or the subject
    ///   format has no `{subject}` placeholder
    pub fn from_config(config: &Config) -> Result<Self> {
        let issue_pattern = Regex::new(&config.issue.pattern)?;

        if !config.message.subject_format.contains(SUBJECT_PLACEHOLDER) {
            return Err(HookError::config(format!(
                "subject_format '{}' must contain {}",
                config.message.subject_format, SUBJECT_PLACEHOLDER
            )));
        }

        Ok(MessageRules {
            issue_pattern,
            subject_format: config.message.subject_format.clone(),
            comment_char: config.message.comment_char,
            skip_prefixes: config.message.skip_prefixes.clone(),
        })
    }
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. Path in the `COMMIT_MSG_HOOK_CONFIG` environment variable
/// 3. `commit-msg-hook.toml` in current directory
/// 4. `.commit-msg-hook.toml` in the user config directory
/// 5. Default configuration if no file found
///
/// # Returns
/// * `Ok(Config)` - Loaded or default configuration
/// * `Err` - If a file exists but cannot be read or parsed
pub fn load_config(config_path: Option<&str>) -> Result<Config> {
    let env_path = std::env::var(CONFIG_ENV_VAR)
        .ok()
        .filter(|p| !p.is_empty());
    let local_path = Path::new(".").join(LOCAL_CONFIG_FILE);

    let config_str = if let Some(path) = config_path.map(str::to_string).or(env_path) {
        fs::read_to_string(&path)
            .map_err(|e| HookError::config(format!("Cannot read '{}': {}", path, e)))?
    } else if local_path.exists() {
        fs::read_to_string(&local_path)?
    } else if let Some(config_dir) = dirs::config_dir() {
        let config_path = config_dir.join(format!(".{}", LOCAL_CONFIG_FILE));
        if config_path.exists() {
            fs::read_to_string(config_path)?
        } else {
            return Ok(Config::default());
        }
    } else {
        return Ok(Config::default());
    };

    parse_config(&config_str)
}

/// Parses configuration from a TOML string.
pub fn parse_config(config_str: &str) -> Result<Config> {
    toml::from_str(config_str).map_err(|e| HookError::config(e.to_string()))
}

// tests/integration_test.rs
//
// End-to-end runs against real repositories. These need the `git`
// executable on PATH.
#![cfg(unix)]

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use commit_msg_hook::git::{resolve_branch_name, CommandRepository, Git2Repository};
use tempfile::TempDir;

const HOOK_BIN: &str = env!("CARGO_BIN_EXE_commit-msg");

fn rebase_dirs() -> Vec<String> {
    vec!["rebase-merge".to_string(), "rebase-apply".to_string()]
}

/// A throwaway repository driven through the git CLI
struct TempRepo {
    dir: TempDir,
}

impl TempRepo {
    fn new() -> Self {
        let dir = TempDir::new().expect("Could not create temp dir");
        let repo = TempRepo { dir };
        repo.git(&["init", "-q"]);
        repo
    }

    fn path(&self) -> &Path {
        self.dir.path()
    }

    fn git_output(&self, args: &[&str]) -> Output {
        let hooks_path = self.path().join(".git").join("hooks");
        Command::new("git")
            .arg("-c")
            .arg(format!("core.hooksPath={}", hooks_path.display()))
            .args(["-c", "commit.gpgsign=false"])
            .args(args)
            .current_dir(self.path())
            .env("GIT_AUTHOR_NAME", "Test User")
            .env("GIT_AUTHOR_EMAIL", "test@example.com")
            .env("GIT_COMMITTER_NAME", "Test User")
            .env("GIT_COMMITTER_EMAIL", "test@example.com")
            .output()
            .expect("Failed to execute git")
    }

    fn git(&self, args: &[&str]) -> String {
        let output = self.git_output(args);
        assert!(
            output.status.success(),
            "git {:?} failed: {}",
            args,
            String::from_utf8_lossy(&output.stderr)
        );
        String::from_utf8(output.stdout).unwrap()
    }

    fn create_branch(&self, branch_name: &str) {
        self.git(&["checkout", "-q", "-b", branch_name]);
    }

    fn add_file(&self, name: &str) {
        fs::write(self.path().join(name), "").unwrap();
        self.git(&["add", name]);
    }

    fn install_hook(&self) {
        let hooks_dir = self.path().join(".git").join("hooks");
        fs::create_dir_all(&hooks_dir).unwrap();
        fs::copy(HOOK_BIN, hooks_dir.join("commit-msg")).expect("Could not install hook");
    }

    fn last_subject(&self) -> String {
        self.git(&["log", "--pretty=format:%s", "-n", "1"])
    }

    fn write_message(&self, text: &str) -> PathBuf {
        let path = self.path().join(".git").join("COMMIT_EDITMSG");
        fs::write(&path, text).unwrap();
        path
    }

    fn run_hook(&self, args: &[&str]) -> Output {
        Command::new(HOOK_BIN)
            .args(args)
            .current_dir(self.path())
            .env_remove("COMMIT_MSG_HOOK_CONFIG")
            .output()
            .expect("Failed to run hook binary")
    }

    /// Detach HEAD and fake an interactive rebase of `branch_ref`
    fn start_fake_rebase(&self, state_dir: &str, branch_ref: &str) {
        self.git(&["checkout", "-q", "--detach"]);
        let dir = self.path().join(".git").join(state_dir);
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("head-name"), format!("{}\n", branch_ref)).unwrap();
    }
}

#[test]
fn test_get_branch_name() {
    let repo = TempRepo::new();
    repo.create_branch("foo-bar-baz-PRESS-123");

    let branch = resolve_branch_name(&CommandRepository::new(repo.path()), &rebase_dirs()).unwrap();
    assert_eq!(branch.as_str(), "foo-bar-baz-PRESS-123");

    let branch = resolve_branch_name(&Git2Repository::open(repo.path()).unwrap(), &rebase_dirs())
        .unwrap();
    assert_eq!(branch.as_str(), "foo-bar-baz-PRESS-123");
}

#[test]
fn test_commit_gets_issue_number() {
    let repo = TempRepo::new();
    repo.install_hook();
    repo.create_branch("foo-bar-baz-PRESS-123");

    repo.add_file("main.rs");
    repo.git(&["commit", "-q", "-m", "Oops, forgot the issue number"]);

    assert_eq!(repo.last_subject(), "PRESS-123 Oops, forgot the issue number");
}

#[test]
fn test_fixup_commits_are_untouched() {
    let repo = TempRepo::new();
    repo.install_hook();
    repo.create_branch("foo-bar-baz-PRESS-123");

    repo.add_file("main.rs");
    repo.git(&["commit", "-q", "--no-verify", "-m", "Oops, forgot the issue number"]);
    repo.add_file("foo.rs");
    repo.git(&["commit", "-q", "--fixup", "HEAD"]);

    assert_eq!(repo.last_subject(), "fixup! Oops, forgot the issue number");
}

#[test]
fn test_branch_without_issue_number_rejects_commit() {
    let repo = TempRepo::new();
    repo.install_hook();
    repo.create_branch("no-ticket-here");

    repo.add_file("main.rs");
    let output = repo.git_output(&["commit", "-q", "-m", "Add main"]);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("no issue number found"), "stderr: {}", stderr);
}

#[test]
fn test_rebase_fallback_with_cli_backend() {
    let repo = TempRepo::new();
    repo.create_branch("feature/PRESS-42-rework");
    repo.add_file("main.rs");
    repo.git(&["commit", "-q", "-m", "Initial"]);
    repo.start_fake_rebase("rebase-merge", "refs/heads/feature/PRESS-42-rework");

    let cli = CommandRepository::new(repo.path());
    let branch = resolve_branch_name(&cli, &rebase_dirs()).unwrap();
    assert_eq!(branch.as_str(), "PRESS-42-rework");

    let message = repo.write_message("Reword during rebase\n");
    let output = repo.run_hook(&[message.to_str().unwrap()]);

    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));
    assert_eq!(
        fs::read_to_string(&message).unwrap(),
        "PRESS-42 Reword during rebase\n"
    );
}

#[test]
fn test_rebase_fallback_with_libgit2_backend() {
    let repo = TempRepo::new();
    repo.create_branch("OPS-7-rotate-keys");
    repo.add_file("main.rs");
    repo.git(&["commit", "-q", "-m", "Initial"]);
    repo.start_fake_rebase("rebase-apply", "refs/heads/OPS-7-rotate-keys");

    let config_path = repo.path().join("hook.toml");
    fs::write(&config_path, "[git]\nbackend = \"libgit2\"\n").unwrap();

    let message = repo.write_message("Split commit\n\nBody text\n");
    let output = repo.run_hook(&[
        "--config",
        config_path.to_str().unwrap(),
        message.to_str().unwrap(),
    ]);

    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));
    assert_eq!(
        fs::read_to_string(&message).unwrap(),
        "OPS-7 Split commit\n\nBody text\n"
    );
}

#[test]
fn test_detached_head_without_rebase_fails() {
    let repo = TempRepo::new();
    repo.create_branch("PRESS-1");
    repo.add_file("main.rs");
    repo.git(&["commit", "-q", "-m", "Initial"]);
    repo.git(&["checkout", "-q", "--detach"]);

    let message = repo.write_message("Detached work\n");
    let output = repo.run_hook(&[message.to_str().unwrap()]);

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("could not determine branch name"));
    assert_eq!(fs::read_to_string(&message).unwrap(), "Detached work\n");
}

#[test]
fn test_missing_subject_warns_and_succeeds() {
    let repo = TempRepo::new();
    repo.create_branch("PRESS-5-empty");

    let text = "\n# Please enter the commit message for your changes.\n#\n";
    let message = repo.write_message(text);
    let output = repo.run_hook(&[message.to_str().unwrap()]);

    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Could not find commit subject line"));
    assert_eq!(fs::read_to_string(&message).unwrap(), text);
}

#[test]
fn test_dry_run_prints_without_writing() {
    let repo = TempRepo::new();
    repo.create_branch("PRESS-9-preview");

    let message = repo.write_message("Preview me\n");
    let output = repo.run_hook(&["--dry-run", message.to_str().unwrap()]);

    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), "PRESS-9 Preview me\n");
    assert_eq!(fs::read_to_string(&message).unwrap(), "Preview me\n");
}

#[test]
fn test_unreadable_message_file_fails() {
    let repo = TempRepo::new();
    repo.create_branch("PRESS-3");

    let missing = repo.path().join("no-such-message");
    let output = repo.run_hook(&[missing.to_str().unwrap()]);

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("I/O error"));
    assert!(!missing.exists());
}

//! Diagnostics for the hook.
//!
//! Everything goes to stderr: git shows it to the committer, and stdout is
//! left free for `--dry-run` output. `console` drops the styling when stderr
//! is not a terminal.

use console::style;

use crate::warning::HookWarning;

pub fn display_error(message: &str) {
    eprintln!("{} {}", style("ERROR:").red().bold(), message);
}

pub fn display_warning(warning: &HookWarning) {
    eprintln!("{} {}", style("Warning:").yellow().bold(), warning);
}

pub fn display_success(message: &str) {
    eprintln!("{} {}", style("✓").green(), message);
}

pub fn display_status(message: &str) {
    eprintln!("{} {}", style("→").yellow(), message);
}

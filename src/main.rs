use anyhow::Result;
use clap::Parser;
use std::path::{Path, PathBuf};

use commit_msg_hook::cli::{run_commit_msg_workflow, WorkflowArgs, WorkflowOutcome};
use commit_msg_hook::config::{self, MessageRules};
use commit_msg_hook::{git, ui};

#[derive(clap::Parser)]
#[command(
    name = "commit-msg",
    version,
    about = "Git commit-msg hook that prefixes the subject line with the branch's issue number"
)]
struct Args {
    #[arg(help = "Temporary file containing the commit message")]
    file: PathBuf,

    #[arg(short, long, help = "Custom configuration file path")]
    config: Option<String>,

    #[arg(long, help = "Print the resulting message instead of writing it")]
    dry_run: bool,

    #[arg(short, long, help = "Report what the hook did")]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    if let Err(e) = run(&args) {
        ui::display_error(&format!("{:#}", e));
        std::process::exit(1);
    }

    Ok(())
}

fn run(args: &Args) -> Result<()> {
    let config = config::load_config(args.config.as_deref())?;
    let rules = MessageRules::from_config(&config)?;
    let repo = git::open_repository(config.git.backend, Path::new("."))?;

    let workflow_args = WorkflowArgs {
        message_file: args.file.clone(),
        dry_run: args.dry_run,
    };
    let result = run_commit_msg_workflow(
        &workflow_args,
        repo.as_ref(),
        &rules,
        &config.git.rebase_dirs,
    )?;

    if let Some(warning) = &result.warning {
        ui::display_warning(warning);
    }

    if args.verbose {
        let issue = result
            .issue_number
            .as_ref()
            .map(|i| i.to_string())
            .unwrap_or_default();
        match result.outcome {
            WorkflowOutcome::SkippedFixup => {
                ui::display_status("Fixup commit, message left unchanged")
            }
            WorkflowOutcome::Inserted => {
                ui::display_success(&format!("Prefixed subject with {}", issue))
            }
            WorkflowOutcome::AlreadyReferenced => {
                ui::display_status("Subject already references an issue, message left unchanged")
            }
            WorkflowOutcome::MissingSubject => {}
        }
    }

    if args.dry_run {
        print!("{}", result.message);
    }

    Ok(())
}

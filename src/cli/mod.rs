pub mod orchestration;

pub use orchestration::{run_commit_msg_workflow, WorkflowArgs, WorkflowOutcome, WorkflowResult};

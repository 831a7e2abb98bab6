use spektrum_sdk::SpektrumClient;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::{CommentArgs, CreateTaskArgs};
use crate::output::output;

/// Handle `spk create-task`.
pub async fn handle_create(
    args: &CreateTaskArgs,
    client: &SpektrumClient,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let task = client
        .create_task(&args.project_id, &args.title, &args.description)
        .await?;
    output(&task, flags.format)
}

/// Handle `spk comment`.
pub async fn handle_comment(
    args: &CommentArgs,
    client: &SpektrumClient,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let task = client
        .leave_comment(&args.task_id, &args.text, &args.author)
        .await?;
    output(&task, flags.format)
}

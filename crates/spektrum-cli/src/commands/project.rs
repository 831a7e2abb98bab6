use spektrum_sdk::SpektrumClient;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::CreateProjectArgs;
use crate::output::output;

/// Handle `spk create-project`.
pub async fn handle_create(
    args: &CreateProjectArgs,
    client: &SpektrumClient,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let project = client.create_project(&args.owner).await?;
    output(&project, flags.format)
}

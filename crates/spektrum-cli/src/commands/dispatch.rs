use spektrum_sdk::SpektrumClient;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;

/// Dispatch a parsed command to the corresponding handler module.
pub async fn dispatch(
    command: Commands,
    client: &SpektrumClient,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match command {
        Commands::CreateProject(args) => commands::project::handle_create(&args, client, flags).await,
        Commands::CreateTask(args) => commands::task::handle_create(&args, client, flags).await,
        Commands::Comment(args) => commands::task::handle_comment(&args, client, flags).await,
        Commands::AppUrl(args) => commands::deployment::handle_app_url(&args, client).await,
        Commands::Deploy(args) => commands::deployment::handle_deploy(&args, client, flags).await,
    }
}

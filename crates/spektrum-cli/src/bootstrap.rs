use anyhow::Context;
use spektrum_sdk::{ClientOptions, SpektrumClient};

use crate::cli::GlobalFlags;

/// Resolve options (flags, then `.env` and process env) and build the client.
pub fn build_client(flags: &GlobalFlags) -> anyhow::Result<SpektrumClient> {
    let options = ClientOptions {
        api_key: flags.api_key.clone(),
        endpoint: flags.endpoint.clone(),
    };

    let config = options
        .resolve_with_dotenv()
        .context("failed to resolve spektrum configuration")?;
    tracing::debug!(endpoint = config.endpoint(), "resolved configuration");

    SpektrumClient::from_config(config).context("failed to build spektrum client")
}

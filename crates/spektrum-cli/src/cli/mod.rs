use clap::Parser;

pub mod global;
pub mod root_commands;

pub use global::{GlobalFlags, OutputFormat};
pub use root_commands::Commands;

/// Top-level CLI parser for the `spk` binary.
#[derive(Debug, Parser)]
#[command(name = "spk", version, about = "Spektrum - project planning and deployment client")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format: json, raw
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// API key (defaults to SPEKTRUM_API_KEY)
    #[arg(long, global = true)]
    pub api_key: Option<String>,

    /// API endpoint (defaults to SPEKTRUM_ENDPOINT, then the hosted platform)
    #[arg(long, global = true)]
    pub endpoint: Option<String>,
}

impl Cli {
    /// Extract ergonomic global flags struct for command handlers.
    #[must_use]
    pub fn global_flags(&self) -> GlobalFlags {
        GlobalFlags {
            format: self.format,
            quiet: self.quiet,
            verbose: self.verbose,
            api_key: self.api_key.clone(),
            endpoint: self.endpoint.clone(),
        }
    }
}

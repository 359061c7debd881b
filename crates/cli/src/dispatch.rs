//! Command dispatch logic.
//!
//! Responsibilities:
//! - Load the configuration described by the global flags.
//! - Route parsed CLI arguments to the appropriate command handler.
//!
//! Does NOT handle:
//! - CLI structure definitions (see `args` module).
//! - Exit code selection (see `error` module).
//!
//! Invariants:
//! - The configuration is loaded exactly once per invocation.
//! - Command arguments are validated before the configuration is loaded.

use anyhow::{Result, anyhow};

use crate::args::{Cli, Commands};
use crate::commands;
use crate::config_context::load_config;
use crate::overrides::parse_key_path;

/// Dispatch CLI commands to their respective handlers.
pub(crate) fn run_command(cli: Cli) -> Result<()> {
    match &cli.command {
        Commands::Show { section } => {
            let config = load_config(&cli)?;
            commands::show::run(&config, section.as_deref(), cli.output)
        }
        Commands::Get { key } => {
            let (section, key) = parse_key_path(key).map_err(|e| anyhow!(e))?;
            let config = load_config(&cli)?;
            commands::get::run(&config, &section, &key, cli.output)
        }
        Commands::Sources => {
            let config = load_config(&cli)?;
            commands::sources::run(&config, cli.output)
        }
    }
}

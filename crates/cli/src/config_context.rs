//! Resolution context construction from CLI flags.
//!
//! Responsibilities:
//! - Translate global flags into a `ResolutionContext`.
//! - Relocate the system-wide files when `--system-config-dir` is given.
//! - Load the configuration once for every command.
//!
//! Does NOT handle:
//! - Filesystem layout or merging (see `kiln_config`).
//!
//! Invariants:
//! - `--no-project` wins over the current-directory default.
//! - Overrides are applied in the order they were given.

use anyhow::{Context, Result};
use kiln_config::{ConfigLoader, ConfigLocations, ResolutionContext, ResolvedConfig};

use crate::args::Cli;
use crate::overrides::to_config_values;

/// Build the context described by the global flags.
pub(crate) fn resolution_context(cli: &Cli) -> Result<ResolutionContext> {
    let mut context = ResolutionContext::new()
        .with_global_config(!cli.no_global_config)
        .with_overrides(to_config_values(&cli.overrides));

    if !cli.no_project {
        let root = match &cli.project_root {
            Some(root) => root.clone(),
            None => std::env::current_dir().context("Failed to determine current directory")?,
        };
        context = context.with_project_root(root);
    }

    Ok(context)
}

/// Filesystem locations, with the system-wide pair moved under `--system-config-dir`.
pub(crate) fn config_locations(cli: &Cli) -> ConfigLocations {
    let locations = ConfigLocations::default();
    match &cli.system_config_dir {
        Some(dir) => {
            let file = dir.join("kilnconfig");
            let fragments = dir.join("kilnconfig.d");
            locations.with_global_file(file).with_global_dir(fragments)
        }
        None => locations,
    }
}

/// Load the configuration for this invocation.
pub(crate) fn load_config(cli: &Cli) -> Result<ResolvedConfig> {
    let context = resolution_context(cli)?;
    tracing::debug!(
        global = context.use_global_config(),
        project_root = ?context.project_root(),
        "Resolving configuration"
    );
    ConfigLoader::new()
        .with_locations(config_locations(cli))
        .load(context)
        .context("Failed to load configuration")
}

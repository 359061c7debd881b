//! `sources`: list the layers that produced the configuration.

use anyhow::Result;
use kiln_config::ResolvedConfig;

use crate::formatters::{OutputFormat, get_formatter};

pub fn run(config: &ResolvedConfig, format: OutputFormat) -> Result<()> {
    let output = get_formatter(format).format_sources(config.sources())?;
    print!("{}", output);
    if format == OutputFormat::Json {
        println!();
    }
    Ok(())
}

//! `show`: print the resolved configuration or one section of it.

use anyhow::Result;
use kiln_config::ResolvedConfig;

use crate::error::CliError;
use crate::formatters::{OutputFormat, get_formatter};

pub fn run(config: &ResolvedConfig, section: Option<&str>, format: OutputFormat) -> Result<()> {
    let formatter = get_formatter(format);
    let output = match section {
        Some(name) => {
            let entries = config
                .section(name)
                .ok_or_else(|| CliError::SectionNotFound(name.to_string()))?;
            formatter.format_section(name, entries)?
        }
        None => formatter.format_config(config)?,
    };
    print!("{}", output);
    if format == OutputFormat::Json {
        println!();
    }
    Ok(())
}

//! `get`: print a single value.

use anyhow::Result;
use kiln_config::ResolvedConfig;

use crate::error::CliError;
use crate::formatters::{OutputFormat, get_formatter};

pub fn run(config: &ResolvedConfig, section: &str, key: &str, format: OutputFormat) -> Result<()> {
    let value = lookup(config, section, key)?;

    let output = get_formatter(format).format_value(section, key, value)?;
    print!("{}", output);
    if format == OutputFormat::Json {
        println!();
    }
    Ok(())
}

fn lookup<'a>(config: &'a ResolvedConfig, section: &str, key: &str) -> Result<&'a str, CliError> {
    config.get(section, key).ok_or_else(|| CliError::KeyNotFound {
        section: section.to_string(),
        key: key.to_string(),
    })
}

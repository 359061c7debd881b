//! Text formatter implementation.
//!
//! Responsibilities:
//! - Print configurations as INI-style sections.
//! - Print single values bare, for shell substitution.
//!
//! Does NOT handle:
//! - Quoting or escaping; values are printed as stored.

use std::collections::BTreeMap;
use std::fmt::Write;

use anyhow::Result;
use kiln_config::{ConfigSource, ResolvedConfig};

use crate::formatters::Formatter;

/// INI-style text formatter.
pub struct TextFormatter;

impl Formatter for TextFormatter {
    fn format_config(&self, config: &ResolvedConfig) -> Result<String> {
        let mut output = String::new();
        for (index, section) in config.sections().enumerate() {
            if index > 0 {
                output.push('\n');
            }
            if let Some(entries) = config.section(section) {
                output.push_str(&self.format_section(section, entries)?);
            }
        }
        Ok(output)
    }

    fn format_section(&self, section: &str, entries: &BTreeMap<String, String>) -> Result<String> {
        let mut output = String::new();
        writeln!(output, "[{}]", section)?;
        for (key, value) in entries {
            if value.is_empty() {
                writeln!(output, "{} =", key)?;
            } else {
                writeln!(output, "{} = {}", key, value)?;
            }
        }
        Ok(output)
    }

    fn format_value(&self, _section: &str, _key: &str, value: &str) -> Result<String> {
        Ok(format!("{}\n", value))
    }

    fn format_sources(&self, sources: &[ConfigSource]) -> Result<String> {
        let mut output = String::new();
        for source in sources {
            match &source.path {
                Some(path) => writeln!(output, "{:<16}{}", source.origin, path.display())?,
                None => writeln!(output, "{}", source.origin)?,
            }
        }
        Ok(output)
    }
}

//! Output formatters for CLI commands.
//!
//! Responsibilities:
//! - Provide the text (INI-style) and JSON output formats.
//! - Render whole configurations, single sections, single values and layer lists.
//!
//! Does NOT handle:
//! - Direct printing to stdout (returns formatted strings).
//!
//! Invariants:
//! - Sections and keys are printed in sorted order in every format.
//! - Text output of `format_config` reads back as the same configuration, except
//!   for values containing ` #` or ` ;`, which the reader treats as inline comments.
//!
//! ## Empty-State Handling
//!
//! | Format | Empty State Behavior |
//! |--------|---------------------|
//! | JSON | `{}` or `[]` |
//! | Text | Empty output |

mod json;
mod text;

use std::collections::BTreeMap;

use anyhow::Result;
use clap::ValueEnum;
use kiln_config::{ConfigSource, ResolvedConfig};

pub use json::JsonFormatter;
pub use text::TextFormatter;

/// Supported output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Trait for formatting command output.
pub trait Formatter {
    /// Format every section of a resolved configuration.
    fn format_config(&self, config: &ResolvedConfig) -> Result<String>;

    /// Format one section's entries.
    fn format_section(&self, section: &str, entries: &BTreeMap<String, String>) -> Result<String>;

    /// Format a single value.
    fn format_value(&self, section: &str, key: &str, value: &str) -> Result<String>;

    /// Format the ordered list of layers.
    fn format_sources(&self, sources: &[ConfigSource]) -> Result<String>;
}

/// Get a formatter for the specified output format.
pub fn get_formatter(format: OutputFormat) -> Box<dyn Formatter> {
    match format {
        OutputFormat::Text => Box::new(TextFormatter),
        OutputFormat::Json => Box::new(JsonFormatter),
    }
}

#[cfg(test)]
mod tests;

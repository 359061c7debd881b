//! JSON formatter implementation.
//!
//! Responsibilities:
//! - Format configurations, values and layer lists as pretty-printed JSON.

use std::collections::BTreeMap;

use anyhow::Result;
use kiln_config::{ConfigSource, ResolvedConfig};
use serde::Serialize;

use crate::formatters::Formatter;

/// JSON formatter.
pub struct JsonFormatter;

#[derive(Serialize)]
struct ValueOutput<'a> {
    section: &'a str,
    key: &'a str,
    value: &'a str,
}

impl Formatter for JsonFormatter {
    fn format_config(&self, config: &ResolvedConfig) -> Result<String> {
        Ok(serde_json::to_string_pretty(config.raw())?)
    }

    fn format_section(&self, _section: &str, entries: &BTreeMap<String, String>) -> Result<String> {
        Ok(serde_json::to_string_pretty(entries)?)
    }

    fn format_value(&self, section: &str, key: &str, value: &str) -> Result<String> {
        Ok(serde_json::to_string_pretty(&ValueOutput {
            section,
            key,
            value,
        })?)
    }

    fn format_sources(&self, sources: &[ConfigSource]) -> Result<String> {
        Ok(serde_json::to_string_pretty(sources)?)
    }
}

//! The final, read-only configuration handed to the rest of the tool.
//!
//! Responsibilities:
//! - Expose section/key lookups over the merged values.
//! - Keep the `ResolutionContext` and layer list that produced the values.
//! - Offer typed accessors for booleans, integers and comma separated lists.
//!
//! Does NOT handle:
//! - Loading or merging (see `loader`).
//!
//! Invariants:
//! - Only the loader can construct a `ResolvedConfig`; there is no `Default`.
//! - No method mutates a `ResolvedConfig` after construction.

use std::collections::BTreeMap;
use std::path::Path;

use serde::Serialize;

use super::context::ResolutionContext;
use super::raw::RawConfig;
use super::source::ConfigSource;
use crate::loader::ConfigError;

/// Merged configuration plus the inputs it was resolved from.
#[derive(Debug, Clone, Serialize)]
pub struct ResolvedConfig {
    values: RawConfig,
    #[serde(skip)]
    context: ResolutionContext,
    sources: Vec<ConfigSource>,
}

impl ResolvedConfig {
    pub(crate) fn new(
        values: RawConfig,
        context: ResolutionContext,
        sources: Vec<ConfigSource>,
    ) -> Self {
        Self {
            values,
            context,
            sources,
        }
    }

    /// Look up the value stored at `(section, key)`.
    pub fn get(&self, section: &str, key: &str) -> Option<&str> {
        self.values.get(section, key)
    }

    /// All entries of a section, if the section exists.
    pub fn section(&self, section: &str) -> Option<&BTreeMap<String, String>> {
        self.values.section(section)
    }

    /// Section names in sorted order.
    pub fn sections(&self) -> impl Iterator<Item = &str> {
        self.values.sections()
    }

    /// Key names of a section in sorted order.
    pub fn keys<'a>(&'a self, section: &str) -> impl Iterator<Item = &'a str> + use<'a> {
        self.values.keys(section)
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// The merged values.
    pub fn raw(&self) -> &RawConfig {
        &self.values
    }

    /// The context this configuration was resolved from.
    pub fn context(&self) -> &ResolutionContext {
        &self.context
    }

    /// Project root used during resolution, for resolving project-relative paths.
    pub fn project_root(&self) -> Option<&Path> {
        self.context.project_root()
    }

    /// Layers that contributed, in the order they were applied.
    pub fn sources(&self) -> &[ConfigSource] {
        &self.sources
    }

    /// Read a boolean value.
    ///
    /// Accepts `true/false`, `yes/no`, `on/off` and `1/0`, ignoring case.
    pub fn get_bool(&self, section: &str, key: &str) -> Result<Option<bool>, ConfigError> {
        let Some(raw) = self.get(section, key) else {
            return Ok(None);
        };
        match raw.trim().to_ascii_lowercase().as_str() {
            "true" | "yes" | "on" | "1" => Ok(Some(true)),
            "false" | "no" | "off" | "0" => Ok(Some(false)),
            _ => Err(invalid_value(section, key, raw, "expected a boolean")),
        }
    }

    /// Read an unsigned integer value.
    pub fn get_u64(&self, section: &str, key: &str) -> Result<Option<u64>, ConfigError> {
        let Some(raw) = self.get(section, key) else {
            return Ok(None);
        };
        raw.trim()
            .parse::<u64>()
            .map(Some)
            .map_err(|e| invalid_value(section, key, raw, &e.to_string()))
    }

    /// Read a comma separated list. Items are trimmed and empty items dropped.
    pub fn get_list(&self, section: &str, key: &str) -> Option<Vec<String>> {
        self.get(section, key).map(|raw| {
            raw.split(',')
                .map(str::trim)
                .filter(|item| !item.is_empty())
                .map(String::from)
                .collect()
        })
    }
}

fn invalid_value(section: &str, key: &str, value: &str, message: &str) -> ConfigError {
    ConfigError::InvalidValue {
        section: section.to_string(),
        key: key.to_string(),
        value: value.to_string(),
        message: message.to_string(),
    }
}

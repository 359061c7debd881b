//! Layered key/value store for raw configuration values.
//!
//! Responsibilities:
//! - Define `ConfigValues`, the two-level section → key → value mapping.
//! - Provide `RawConfigBuilder`, the mutable accumulator used while loading.
//! - Provide `RawConfig`, the frozen snapshot handed to consumers.
//!
//! Does NOT handle:
//! - Reading or parsing files (see `ini` and `loader`).
//! - Deciding layer order (see `resolver`).
//!
//! Invariants:
//! - `put_all` merges per key: a layer that sets one key in a section never
//!   removes other keys already present in that section.
//! - `build()` copies; later puts on the builder are invisible through
//!   snapshots that were already built.
//! - Merging is pure: the same sequence of layers always yields the same result.

use std::collections::BTreeMap;

use serde::Serialize;

/// Mapping from section name to a mapping from key name to value.
pub type ConfigValues = BTreeMap<String, BTreeMap<String, String>>;

/// Accumulator for configuration layers.
///
/// Later layers overwrite earlier ones key by key.
#[derive(Debug, Clone, Default)]
pub struct RawConfigBuilder {
    values: ConfigValues,
}

impl RawConfigBuilder {
    /// Create an empty accumulator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a single value, replacing any previous value for `(section, key)`.
    pub fn put(
        &mut self,
        section: impl Into<String>,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> &mut Self {
        self.values
            .entry(section.into())
            .or_default()
            .insert(key.into(), value.into());
        self
    }

    /// Merge a whole layer into the accumulator.
    ///
    /// Every `(section, key)` in `layer` replaces the existing value; keys the
    /// layer does not mention are left untouched. A section that is present
    /// but empty in `layer` still shows up in the result.
    pub fn put_all(&mut self, layer: &ConfigValues) -> &mut Self {
        for (section, entries) in layer {
            let target = self.values.entry(section.clone()).or_default();
            for (key, value) in entries {
                target.insert(key.clone(), value.clone());
            }
        }
        self
    }

    /// Produce an immutable snapshot of everything merged so far.
    pub fn build(&self) -> RawConfig {
        RawConfig {
            values: self.values.clone(),
        }
    }
}

/// Immutable result of merging configuration layers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct RawConfig {
    values: ConfigValues,
}

impl RawConfig {
    /// Look up the value stored at `(section, key)`.
    pub fn get(&self, section: &str, key: &str) -> Option<&str> {
        self.values
            .get(section)
            .and_then(|entries| entries.get(key))
            .map(String::as_str)
    }

    /// All entries of a section, if the section exists.
    pub fn section(&self, section: &str) -> Option<&BTreeMap<String, String>> {
        self.values.get(section)
    }

    /// Section names in sorted order.
    pub fn sections(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }

    /// Key names of a section in sorted order. Empty when the section is absent.
    pub fn keys<'a>(&'a self, section: &str) -> impl Iterator<Item = &'a str> + use<'a> {
        self.values
            .get(section)
            .into_iter()
            .flat_map(|entries| entries.keys().map(String::as_str))
    }

    /// Number of sections.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Borrow the underlying mapping.
    pub fn values(&self) -> &ConfigValues {
        &self.values
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layer(entries: &[(&str, &str, &str)]) -> ConfigValues {
        let mut values = ConfigValues::new();
        for (section, key, value) in entries {
            values
                .entry(section.to_string())
                .or_default()
                .insert(key.to_string(), value.to_string());
        }
        values
    }

    #[test]
    fn test_put_all_merges_keys_within_section() {
        let mut builder = RawConfigBuilder::new();
        builder.put_all(&layer(&[("A", "x", "1")]));
        builder.put_all(&layer(&[("A", "y", "2")]));

        let raw = builder.build();
        assert_eq!(raw.get("A", "x"), Some("1"));
        assert_eq!(raw.get("A", "y"), Some("2"));
        assert_eq!(raw.keys("A").collect::<Vec<_>>(), vec!["x", "y"]);
    }

    #[test]
    fn test_later_layer_replaces_value() {
        let mut builder = RawConfigBuilder::new();
        builder
            .put_all(&layer(&[("core", "threads", "4"), ("core", "mode", "fast")]))
            .put_all(&layer(&[("core", "threads", "8")]));

        let raw = builder.build();
        assert_eq!(raw.get("core", "threads"), Some("8"));
        assert_eq!(raw.get("core", "mode"), Some("fast"));
    }

    #[test]
    fn test_build_is_a_snapshot() {
        let mut builder = RawConfigBuilder::new();
        builder.put("core", "threads", "4");
        let first = builder.build();

        builder.put("core", "threads", "16").put("cache", "dir", "/tmp");
        let second = builder.build();

        assert_eq!(first.get("core", "threads"), Some("4"));
        assert!(first.section("cache").is_none());
        assert_eq!(second.get("core", "threads"), Some("16"));
        assert_eq!(second.get("cache", "dir"), Some("/tmp"));
    }

    #[test]
    fn test_empty_builder_builds_empty_config() {
        let raw = RawConfigBuilder::new().build();
        assert!(raw.is_empty());
        assert_eq!(raw.len(), 0);
        assert_eq!(raw.sections().count(), 0);
    }

    #[test]
    fn test_empty_section_is_kept() {
        let mut values = ConfigValues::new();
        values.insert("empty".to_string(), BTreeMap::new());

        let mut builder = RawConfigBuilder::new();
        builder.put_all(&values);
        let raw = builder.build();

        assert_eq!(raw.sections().collect::<Vec<_>>(), vec!["empty"]);
        assert_eq!(raw.keys("empty").count(), 0);
    }

    #[test]
    fn test_missing_lookups_return_none() {
        let mut builder = RawConfigBuilder::new();
        builder.put("core", "threads", "4");
        let raw = builder.build();

        assert_eq!(raw.get("core", "missing"), None);
        assert_eq!(raw.get("missing", "threads"), None);
        assert_eq!(raw.keys("missing").count(), 0);
    }

    #[test]
    fn test_same_sequence_yields_same_result() {
        let layers = [
            layer(&[("a", "k", "1"), ("b", "k", "2")]),
            layer(&[("a", "k", "3")]),
            layer(&[("c", "k", "4"), ("b", "j", "5")]),
        ];

        let run = || {
            let mut builder = RawConfigBuilder::new();
            for l in &layers {
                builder.put_all(l);
            }
            builder.build()
        };

        assert_eq!(run(), run());
    }

    #[test]
    fn test_serializes_as_nested_map() {
        let mut builder = RawConfigBuilder::new();
        builder.put("core", "threads", "4");
        let json = serde_json::to_value(builder.build()).unwrap();
        assert_eq!(json, serde_json::json!({"core": {"threads": "4"}}));
    }
}

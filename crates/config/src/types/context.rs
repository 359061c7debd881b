//! Inputs that decide which configuration sources participate in a load.
//!
//! Responsibilities:
//! - Carry the global-config switch, the optional project root and the override layer.
//!
//! Does NOT handle:
//! - Turning these inputs into paths (see `resolver`).
//! - Parsing command-line arguments into overrides (see the CLI crate).
//!
//! Invariants:
//! - The override layer is always applied last by the loader, whatever else is set.

use std::path::{Path, PathBuf};

use serde::Serialize;

use super::raw::ConfigValues;

/// Describes what a configuration load should consult.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolutionContext {
    use_global_config: bool,
    project_root: Option<PathBuf>,
    overrides: ConfigValues,
}

impl Default for ResolutionContext {
    fn default() -> Self {
        Self::new()
    }
}

impl ResolutionContext {
    /// Global and per-user configuration enabled, no project root, no overrides.
    pub fn new() -> Self {
        Self {
            use_global_config: true,
            project_root: None,
            overrides: ConfigValues::new(),
        }
    }

    /// Enable or disable the system-wide and per-user layers.
    pub fn with_global_config(mut self, enabled: bool) -> Self {
        self.use_global_config = enabled;
        self
    }

    /// Set the project root whose `.kilnconfig` files participate.
    pub fn with_project_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.project_root = Some(root.into());
        self
    }

    /// Replace the whole override layer.
    pub fn with_overrides(mut self, overrides: ConfigValues) -> Self {
        self.overrides = overrides;
        self
    }

    /// Add a single override value.
    pub fn with_override(
        mut self,
        section: impl Into<String>,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        self.overrides
            .entry(section.into())
            .or_default()
            .insert(key.into(), value.into());
        self
    }

    pub fn use_global_config(&self) -> bool {
        self.use_global_config
    }

    pub fn project_root(&self) -> Option<&Path> {
        self.project_root.as_deref()
    }

    pub fn overrides(&self) -> &ConfigValues {
        &self.overrides
    }
}

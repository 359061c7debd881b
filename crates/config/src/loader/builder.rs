//! Configuration loader builder implementation.
//!
//! Responsibilities:
//! - Provide a builder-pattern `ConfigLoader` for layered configuration merging.
//! - Read every resolved candidate file and merge it into a fresh `RawConfigBuilder`.
//! - Apply the override layer and produce the final `ResolvedConfig`.
//!
//! Does NOT handle:
//! - Deciding which files exist or their order (see `resolver`).
//! - INI syntax (see `ini`).
//!
//! Invariants / Assumptions:
//! - Files are merged in candidate order; later files win per key.
//! - The override layer is applied after every file, so overrides always win.
//! - A read or parse failure on any candidate aborts the whole load.
//! - Each file handle is closed before the next file is opened.
//! - Every `load` call owns its accumulator; nothing is shared between calls.

use std::fs::File;
use std::io::BufReader;

use super::error::ConfigError;
use crate::ini::{IniError, read_ini};
use crate::resolver::{CandidateFile, ConfigLocations, resolve_candidates};
use crate::types::{
    ConfigSource, ConfigValues, RawConfigBuilder, ResolutionContext, ResolvedConfig,
};

/// Loads configuration from the layered file locations.
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    locations: ConfigLocations,
}

impl ConfigLoader {
    /// Create a loader using the system default locations.
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the filesystem locations (primarily for testing).
    pub fn with_locations(mut self, locations: ConfigLocations) -> Self {
        self.locations = locations;
        self
    }

    pub fn locations(&self) -> &ConfigLocations {
        &self.locations
    }

    /// Resolve, read and merge every configuration source for `context`.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - A fragment directory exists but cannot be listed (`ConfigError::DirectoryRead`)
    /// - Global configuration is enabled without a home directory (`ConfigError::HomeDirUnavailable`)
    /// - A candidate file cannot be read (`ConfigError::ConfigFileRead`)
    /// - A candidate file is not valid configuration text (`ConfigError::ConfigFileParse`)
    ///
    /// Missing files and directories are not errors.
    pub fn load(&self, context: ResolutionContext) -> Result<ResolvedConfig, ConfigError> {
        let candidates = resolve_candidates(&context, &self.locations)?;

        let mut builder = RawConfigBuilder::new();
        let mut sources = Vec::with_capacity(candidates.len() + 1);

        for candidate in candidates {
            let layer = read_candidate(&candidate)?;
            tracing::debug!(
                path = %candidate.path.display(),
                origin = %candidate.origin,
                sections = layer.len(),
                "Loaded a configuration file"
            );
            builder.put_all(&layer);
            sources.push(ConfigSource::file(candidate.origin, candidate.path));
        }

        apply_overrides(&mut builder, &mut sources, context.overrides());

        Ok(ResolvedConfig::new(builder.build(), context, sources))
    }

    /// Build a configuration whose only layer is `values`.
    ///
    /// The values are recorded as the override layer of a context with
    /// global configuration disabled and no project root.
    pub fn from_values(values: ConfigValues) -> ResolvedConfig {
        let context = ResolutionContext::new()
            .with_global_config(false)
            .with_overrides(values);

        let mut builder = RawConfigBuilder::new();
        let mut sources = Vec::with_capacity(1);
        apply_overrides(&mut builder, &mut sources, context.overrides());

        ResolvedConfig::new(builder.build(), context, sources)
    }
}

fn apply_overrides(
    builder: &mut RawConfigBuilder,
    sources: &mut Vec<ConfigSource>,
    overrides: &ConfigValues,
) {
    tracing::debug!(sections = overrides.len(), "Adding configuration overrides");
    builder.put_all(overrides);
    if !overrides.is_empty() {
        sources.push(ConfigSource::overrides());
    }
}

/// Read and parse one candidate. The file is closed when this returns.
fn read_candidate(candidate: &CandidateFile) -> Result<ConfigValues, ConfigError> {
    let path = &candidate.path;
    let file = File::open(path).map_err(|source| ConfigError::ConfigFileRead {
        path: path.clone(),
        source,
    })?;

    read_ini(BufReader::new(file)).map_err(|e| match e {
        IniError::Io(source) => ConfigError::ConfigFileRead {
            path: path.clone(),
            source,
        },
        syntax @ IniError::Syntax(_) => ConfigError::ConfigFileParse {
            path: path.clone(),
            source: syntax,
        },
    })
}

//! Layered configuration for kiln.
//!
//! This crate discovers `.kilnconfig` files from a fixed precedence chain
//! (system, user, project, command-line overrides), merges them key by key
//! and exposes the result as an immutable `ResolvedConfig`.

pub mod constants;
pub mod ini;
mod loader;
pub mod resolver;
pub mod types;

pub use ini::{IniError, read_ini};
pub use loader::{ConfigError, ConfigLoader};
pub use resolver::{CandidateFile, ConfigLocations, resolve_candidates};
pub use types::{
    ConfigOrigin, ConfigSource, ConfigValues, RawConfig, RawConfigBuilder, ResolutionContext,
    ResolvedConfig,
};

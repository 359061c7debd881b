//! Configuration type definitions for kiln.
//!
//! Responsibilities:
//! - Define the layered store (`RawConfigBuilder` and the frozen `RawConfig`).
//! - Define the `ResolutionContext` a load is driven by.
//! - Define the `ResolvedConfig` handed to the rest of the tool, with its provenance.
//!
//! Does NOT handle:
//! - Locating files (see `resolver` module).
//! - Reading files or ordering layers (see `loader` module).
//!
//! Invariants:
//! - The accumulator and the snapshot are distinct types; snapshots expose no mutators.

mod context;
mod raw;
mod resolved;
mod source;

pub use context::ResolutionContext;
pub use raw::{ConfigValues, RawConfig, RawConfigBuilder};
pub use resolved::ResolvedConfig;
pub use source::{ConfigOrigin, ConfigSource};

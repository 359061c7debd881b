//! Configuration loader for the layered `.kilnconfig` files.
//!
//! Responsibilities:
//! - Provide a builder-pattern `ConfigLoader` for layered configuration merging.
//! - Define the `ConfigError` type shared by the resolver and the loader.
//!
//! Does NOT handle:
//! - Computing candidate paths (see `resolver`).
//! - INI parsing (see `ini`).
//!
//! Invariants / Assumptions:
//! - Layers are applied lowest precedence first; the override layer is always last.
//! - Loading is all-or-nothing: there is no partial result and no retry.

mod builder;
mod error;

pub use builder::ConfigLoader;
pub use error::ConfigError;

#[cfg(test)]
mod tests;

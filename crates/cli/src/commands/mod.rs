//! CLI command implementations.

pub mod get;
pub mod show;
pub mod sources;

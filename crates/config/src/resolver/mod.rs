//! Configuration location resolution.
//!
//! Responsibilities:
//! - Describe where configuration files live (`ConfigLocations`).
//! - Compute the ordered candidate files for a `ResolutionContext`.
//!
//! Does NOT handle:
//! - Reading or parsing files (see `loader`).
//! - Merging values (see `types::RawConfigBuilder`).
//!
//! Invariants:
//! - Candidates are returned lowest precedence first.
//! - Only paths that exist as regular files are returned.

mod candidates;
mod locations;

pub use candidates::{CandidateFile, list_fragment_files, resolve_candidates};
pub use locations::ConfigLocations;

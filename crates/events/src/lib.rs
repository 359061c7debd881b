//! Event records published by kiln operations.
//!
//! Responsibilities:
//! - Define the `KilnEvent` trait shared by every event record.
//! - Define install notifications (`InstallStarted` / `InstallFinished`).
//! - Define the identifiers events carry (`EventKey`, `BuildTarget`).
//!
//! Does NOT handle:
//! - Transporting events (event bus, listeners, log sinks).
//!
//! Invariants:
//! - A started event is finished at most once; a second finish is a programming error.
//! - A finished event shares the key and build target of its started event.

mod error;
mod event;
pub mod install;
mod key;
mod target;

pub use error::EventError;
pub use event::KilnEvent;
pub use install::{InstallEvent, InstallFinished, InstallStarted};
pub use key::EventKey;
pub use target::BuildTarget;

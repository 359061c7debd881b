//! Error types for event construction.

use thiserror::Error;

use crate::key::EventKey;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EventError {
    #[error("Invalid build target '{target}': {message}")]
    InvalidBuildTarget { target: String, message: String },

    #[error("Multiple conflicting Finished events detected for event {key}")]
    AlreadyFinished { key: EventKey },
}

//! Unique identifiers linking related events.

use std::fmt;

use serde::Serialize;
use uuid::Uuid;

/// Identifier shared by a started event and the event that finishes it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct EventKey(Uuid);

impl EventKey {
    /// A fresh key that no other event carries.
    pub fn unique() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl fmt::Display for EventKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

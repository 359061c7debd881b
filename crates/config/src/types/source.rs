//! Provenance of configuration layers.

use std::fmt;
use std::path::PathBuf;

use serde::Serialize;

/// Where a configuration layer came from, lowest precedence first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ConfigOrigin {
    /// A file inside the system-wide fragment directory.
    GlobalFragment,
    /// The system-wide configuration file.
    Global,
    /// A file inside the per-user fragment directory.
    UserFragment,
    /// The per-user configuration file.
    User,
    /// The project's checked-in configuration file.
    Project,
    /// The project's local override file.
    ProjectLocal,
    /// Values supplied by the caller, usually from the command line.
    Overrides,
}

impl ConfigOrigin {
    pub fn as_str(self) -> &'static str {
        match self {
            ConfigOrigin::GlobalFragment => "global_fragment",
            ConfigOrigin::Global => "global",
            ConfigOrigin::UserFragment => "user_fragment",
            ConfigOrigin::User => "user",
            ConfigOrigin::Project => "project",
            ConfigOrigin::ProjectLocal => "project_local",
            ConfigOrigin::Overrides => "overrides",
        }
    }
}

impl fmt::Display for ConfigOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A layer that contributed to a resolved configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConfigSource {
    pub origin: ConfigOrigin,
    /// File the layer was read from. `None` for the override layer.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
}

impl ConfigSource {
    pub(crate) fn file(origin: ConfigOrigin, path: PathBuf) -> Self {
        Self {
            origin,
            path: Some(path),
        }
    }

    pub(crate) fn overrides() -> Self {
        Self {
            origin: ConfigOrigin::Overrides,
            path: None,
        }
    }
}

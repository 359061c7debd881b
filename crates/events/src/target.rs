//! Build target identifiers carried by events.

use std::fmt;

use serde::Serialize;

use crate::error::EventError;

/// A fully qualified build target such as `//apps/demo:demo`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BuildTarget {
    base_path: String,
    short_name: String,
}

impl BuildTarget {
    /// Parse `//base/path:name`. The base path may be empty (`//:name`).
    pub fn parse(target: &str) -> Result<Self, EventError> {
        let invalid = |message: &str| EventError::InvalidBuildTarget {
            target: target.to_string(),
            message: message.to_string(),
        };

        let rest = target
            .strip_prefix("//")
            .ok_or_else(|| invalid("must start with '//'"))?;
        let (base_path, short_name) = rest
            .split_once(':')
            .ok_or_else(|| invalid("missing ':' before the target name"))?;

        if short_name.is_empty() {
            return Err(invalid("target name is empty"));
        }
        if short_name.contains([':', '/']) {
            return Err(invalid("target name may not contain ':' or '/'"));
        }
        if base_path.ends_with('/') {
            return Err(invalid("base path may not end with '/'"));
        }

        Ok(Self {
            base_path: base_path.to_string(),
            short_name: short_name.to_string(),
        })
    }

    pub fn base_path(&self) -> &str {
        &self.base_path
    }

    pub fn short_name(&self) -> &str {
        &self.short_name
    }

    /// `//base/path:name`
    pub fn fully_qualified_name(&self) -> String {
        format!("//{}:{}", self.base_path, self.short_name)
    }
}

impl fmt::Display for BuildTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.fully_qualified_name())
    }
}

impl Serialize for BuildTarget {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.fully_qualified_name())
    }
}

//! Error types for configuration loading.
//!
//! Responsibilities:
//! - Define error variants for all configuration loading failures.
//! - Attach the offending path, section or key to each failure.
//!
//! Does NOT handle:
//! - INI syntax errors themselves (see `ini::IniError`, carried as a source).
//!
//! Invariants:
//! - Missing optional files and directories never produce an error.
//! - Every filesystem variant names the path it concerns.

use std::path::PathBuf;
use thiserror::Error;

use crate::ini::IniError;

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Unable to determine home directory for per-user configuration")]
    HomeDirUnavailable,

    #[error("Failed to list configuration directory {path}: {source}")]
    DirectoryRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to read config file at {path}: {source}")]
    ConfigFileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {path}: {source}")]
    ConfigFileParse {
        path: PathBuf,
        #[source]
        source: IniError,
    },

    #[error("Invalid value '{value}' for {section}.{key}: {message}")]
    InvalidValue {
        section: String,
        key: String,
        value: String,
        message: String,
    },
}

impl ConfigError {
    /// Path of the file or directory this error concerns, if any.
    pub fn path(&self) -> Option<&std::path::Path> {
        match self {
            ConfigError::DirectoryRead { path, .. }
            | ConfigError::ConfigFileRead { path, .. }
            | ConfigError::ConfigFileParse { path, .. } => Some(path),
            ConfigError::HomeDirUnavailable | ConfigError::InvalidValue { .. } => None,
        }
    }
}

//! CLI exit codes for scripting and automation.
//!
//! Responsibilities:
//! - Define structured exit codes that scripts can use to distinguish error types.
//! - Map `ConfigError` and `CliError` to exit codes.
//!
//! Does NOT handle:
//! - Error message formatting (handled by anyhow Display).
//!
//! Invariants:
//! - Exit code 2 belongs to clap for usage errors and is never produced here.

use kiln_config::ConfigError;

/// Errors raised by the commands themselves.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("Key '{section}.{key}' is not set")]
    KeyNotFound { section: String, key: String },

    #[error("Section '{0}' is not set")]
    SectionNotFound(String),
}

/// Structured exit codes for kiln-config.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// Success - command completed successfully.
    Success = 0,

    /// General error - unhandled or generic failure.
    GeneralError = 1,

    /// A configuration file or directory could not be read or parsed.
    ///
    /// Scripts should fix the named file; retrying will not help.
    ConfigLoadFailed = 3,

    /// The requested section or key is not set.
    NotFound = 4,
}

impl ExitCode {
    /// Convert the exit code to an i32 for use with std::process::exit().
    pub const fn as_i32(self) -> i32 {
        self as u8 as i32
    }
}

impl From<&ConfigError> for ExitCode {
    fn from(err: &ConfigError) -> Self {
        match err {
            ConfigError::HomeDirUnavailable
            | ConfigError::DirectoryRead { .. }
            | ConfigError::ConfigFileRead { .. }
            | ConfigError::ConfigFileParse { .. } => ExitCode::ConfigLoadFailed,
            // A typed accessor rejected a value; the load itself succeeded.
            ConfigError::InvalidValue { .. } => ExitCode::GeneralError,
        }
    }
}

impl From<&CliError> for ExitCode {
    fn from(err: &CliError) -> Self {
        match err {
            CliError::KeyNotFound { .. } | CliError::SectionNotFound(_) => ExitCode::NotFound,
        }
    }
}

/// Extension trait for anyhow::Error to extract exit codes.
pub trait ExitCodeExt {
    /// Returns ExitCode::GeneralError if no known error is in the chain.
    fn exit_code(&self) -> ExitCode;
}

impl ExitCodeExt for anyhow::Error {
    fn exit_code(&self) -> ExitCode {
        for cause in self.chain() {
            if let Some(config_err) = cause.downcast_ref::<ConfigError>() {
                return ExitCode::from(config_err);
            }
            if let Some(cli_err) = cause.downcast_ref::<CliError>() {
                return ExitCode::from(cli_err);
            }
        }

        ExitCode::GeneralError
    }
}

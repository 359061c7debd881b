//! Centralized constants for the kiln configuration layout.
//!
//! These are the documented defaults for `ConfigLocations`. Nothing in the
//! crate reads these paths directly; they only seed `ConfigLocations::default()`.

// =============================================================================
// Tool identity
// =============================================================================

/// Tool name used to derive every configuration file name.
pub const DEFAULT_TOOL_NAME: &str = "kiln";

// =============================================================================
// System-wide locations
// =============================================================================

/// System-wide configuration file.
pub const GLOBAL_CONFIG_FILE_PATH: &str = "/etc/kilnconfig";

/// System-wide fragment directory. Every regular file inside is a layer.
pub const GLOBAL_CONFIG_DIRECTORY_PATH: &str = "/etc/kilnconfig.d";

// =============================================================================
// Per-user and per-project file names
// =============================================================================

/// Name of the per-user and per-project configuration file.
pub const CONFIG_FILE_NAME: &str = ".kilnconfig";

/// Name of the per-project override file, normally kept out of version control.
pub const CONFIG_OVERRIDE_FILE_NAME: &str = ".kilnconfig.local";

/// Name of the per-user fragment directory.
pub const CONFIG_DIRECTORY_NAME: &str = ".kilnconfig.d";

// =============================================================================
// Ini reader
// =============================================================================

/// Section that receives keys declared before any `[section]` header.
pub const DEFAULT_SECTION: &str = "default";

//! Filesystem locations consulted during resolution.
//!
//! Responsibilities:
//! - Hold the system-wide paths, the home directory and the per-user/per-project file names.
//! - Provide the documented defaults and a way to derive them for another tool name.
//!
//! Does NOT handle:
//! - Existence checks or directory listing (see `candidates`).
//!
//! Invariants:
//! - Nothing here touches the filesystem except home directory discovery in `Default`.

use std::path::{Path, PathBuf};

use crate::constants::{
    CONFIG_DIRECTORY_NAME, CONFIG_FILE_NAME, CONFIG_OVERRIDE_FILE_NAME,
    GLOBAL_CONFIG_DIRECTORY_PATH, GLOBAL_CONFIG_FILE_PATH,
};

/// Where configuration files live.
///
/// Tests point these at temporary directories; production code uses
/// `ConfigLocations::default()`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigLocations {
    global_file: PathBuf,
    global_dir: PathBuf,
    home_dir: Option<PathBuf>,
    file_name: String,
    directory_name: String,
    override_file_name: String,
}

impl Default for ConfigLocations {
    /// `/etc/kilnconfig`, `/etc/kilnconfig.d`, and `.kilnconfig*` names under
    /// the current user's home directory.
    fn default() -> Self {
        Self {
            global_file: PathBuf::from(GLOBAL_CONFIG_FILE_PATH),
            global_dir: PathBuf::from(GLOBAL_CONFIG_DIRECTORY_PATH),
            home_dir: default_home_dir(),
            file_name: CONFIG_FILE_NAME.to_string(),
            directory_name: CONFIG_DIRECTORY_NAME.to_string(),
            override_file_name: CONFIG_OVERRIDE_FILE_NAME.to_string(),
        }
    }
}

impl ConfigLocations {
    /// Same layout as the default, derived from another tool name:
    /// `/etc/<tool>config`, `/etc/<tool>config.d`, `.<tool>config`,
    /// `.<tool>config.d` and `.<tool>config.local`.
    pub fn for_tool(tool: &str) -> Self {
        let file_name = format!(".{tool}config");
        Self {
            global_file: PathBuf::from(format!("/etc/{tool}config")),
            global_dir: PathBuf::from(format!("/etc/{tool}config.d")),
            home_dir: default_home_dir(),
            directory_name: format!("{file_name}.d"),
            override_file_name: format!("{file_name}.local"),
            file_name,
        }
    }

    pub fn with_global_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.global_file = path.into();
        self
    }

    pub fn with_global_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.global_dir = path.into();
        self
    }

    pub fn with_home_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.home_dir = Some(path.into());
        self
    }

    /// Forget the home directory; per-user layers then cannot be resolved.
    pub fn without_home_dir(mut self) -> Self {
        self.home_dir = None;
        self
    }

    pub fn global_file(&self) -> &Path {
        &self.global_file
    }

    pub fn global_dir(&self) -> &Path {
        &self.global_dir
    }

    pub fn home_dir(&self) -> Option<&Path> {
        self.home_dir.as_deref()
    }

    /// `<home>/.kilnconfig`
    pub fn user_file(&self) -> Option<PathBuf> {
        self.home_dir.as_ref().map(|home| home.join(&self.file_name))
    }

    /// `<home>/.kilnconfig.d`
    pub fn user_dir(&self) -> Option<PathBuf> {
        self.home_dir
            .as_ref()
            .map(|home| home.join(&self.directory_name))
    }

    /// `<root>/.kilnconfig`
    pub fn project_file(&self, root: &Path) -> PathBuf {
        root.join(&self.file_name)
    }

    /// `<root>/.kilnconfig.local`
    pub fn project_override_file(&self, root: &Path) -> PathBuf {
        root.join(&self.override_file_name)
    }
}

fn default_home_dir() -> Option<PathBuf> {
    directories::BaseDirs::new().map(|dirs| dirs.home_dir().to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_locations() {
        let locations = ConfigLocations::default().with_home_dir("/home/alex");

        assert_eq!(locations.global_file(), Path::new("/etc/kilnconfig"));
        assert_eq!(locations.global_dir(), Path::new("/etc/kilnconfig.d"));
        assert_eq!(
            locations.user_file(),
            Some(PathBuf::from("/home/alex/.kilnconfig"))
        );
        assert_eq!(
            locations.user_dir(),
            Some(PathBuf::from("/home/alex/.kilnconfig.d"))
        );
        assert_eq!(
            locations.project_file(Path::new("/proj")),
            PathBuf::from("/proj/.kilnconfig")
        );
        assert_eq!(
            locations.project_override_file(Path::new("/proj")),
            PathBuf::from("/proj/.kilnconfig.local")
        );
    }

    #[test]
    fn test_for_tool_matches_default_for_kiln() {
        let derived = ConfigLocations::for_tool(crate::constants::DEFAULT_TOOL_NAME);
        assert_eq!(derived, ConfigLocations::default());
    }

    #[test]
    fn test_for_tool_derives_names() {
        let locations = ConfigLocations::for_tool("buck").with_home_dir("/home/alex");

        assert_eq!(locations.global_file(), Path::new("/etc/buckconfig"));
        assert_eq!(locations.global_dir(), Path::new("/etc/buckconfig.d"));
        assert_eq!(
            locations.user_dir(),
            Some(PathBuf::from("/home/alex/.buckconfig.d"))
        );
        assert_eq!(
            locations.project_override_file(Path::new("/repo")),
            PathBuf::from("/repo/.buckconfig.local")
        );
    }

    #[test]
    fn test_without_home_dir_has_no_user_paths() {
        let locations = ConfigLocations::default().without_home_dir();
        assert!(locations.home_dir().is_none());
        assert!(locations.user_file().is_none());
        assert!(locations.user_dir().is_none());
    }
}

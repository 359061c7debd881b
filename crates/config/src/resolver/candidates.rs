//! Ordered list of configuration files to read.
//!
//! Responsibilities:
//! - Turn a `ResolutionContext` and `ConfigLocations` into candidate files, lowest precedence first.
//! - List fragment directories in lexicographic path order.
//!
//! Does NOT handle:
//! - Reading or parsing any file (see `loader`).
//!
//! Invariants:
//! - Only regular files are returned (symlinks are followed).
//! - A missing or non-directory fragment path contributes nothing.
//! - Any other directory listing failure is fatal.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::loader::ConfigError;
use crate::types::{ConfigOrigin, ResolutionContext};

use super::locations::ConfigLocations;

/// A configuration file that exists and will be read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateFile {
    pub path: PathBuf,
    pub origin: ConfigOrigin,
}

impl CandidateFile {
    fn new(path: PathBuf, origin: ConfigOrigin) -> Self {
        Self { path, origin }
    }
}

/// Compute every configuration file that should be merged, in merge order.
///
/// 1. With global configuration enabled: regular files in the global fragment
///    directory, the global file, regular files in `<home>/.kilnconfig.d`,
///    then `<home>/.kilnconfig`.
/// 2. With a project root: `<root>/.kilnconfig`, then `<root>/.kilnconfig.local`.
///
/// # Errors
///
/// - `ConfigError::HomeDirUnavailable` when global configuration is enabled
///   but no home directory is known.
/// - `ConfigError::DirectoryRead` when a fragment directory exists but cannot be listed.
pub fn resolve_candidates(
    context: &ResolutionContext,
    locations: &ConfigLocations,
) -> Result<Vec<CandidateFile>, ConfigError> {
    let mut candidates = Vec::new();

    if context.use_global_config() {
        push_fragments(
            &mut candidates,
            locations.global_dir(),
            ConfigOrigin::GlobalFragment,
        )?;
        push_if_file(
            &mut candidates,
            locations.global_file().to_path_buf(),
            ConfigOrigin::Global,
        );

        let (Some(user_dir), Some(user_file)) = (locations.user_dir(), locations.user_file())
        else {
            return Err(ConfigError::HomeDirUnavailable);
        };
        push_fragments(&mut candidates, &user_dir, ConfigOrigin::UserFragment)?;
        push_if_file(&mut candidates, user_file, ConfigOrigin::User);
    }

    if let Some(root) = context.project_root() {
        push_if_file(
            &mut candidates,
            locations.project_file(root),
            ConfigOrigin::Project,
        );
        push_if_file(
            &mut candidates,
            locations.project_override_file(root),
            ConfigOrigin::ProjectLocal,
        );
    }

    Ok(candidates)
}

fn push_if_file(candidates: &mut Vec<CandidateFile>, path: PathBuf, origin: ConfigOrigin) {
    if path.is_file() {
        candidates.push(CandidateFile::new(path, origin));
    } else {
        tracing::trace!(path = %path.display(), %origin, "Configuration file not present");
    }
}

fn push_fragments(
    candidates: &mut Vec<CandidateFile>,
    dir: &Path,
    origin: ConfigOrigin,
) -> Result<(), ConfigError> {
    candidates.extend(
        list_fragment_files(dir)?
            .into_iter()
            .map(|path| CandidateFile::new(path, origin)),
    );
    Ok(())
}

/// Regular files directly inside `dir`, sorted by path.
///
/// Returns an empty list when `dir` does not exist or is not a directory.
pub fn list_fragment_files(dir: &Path) -> Result<Vec<PathBuf>, ConfigError> {
    let directory_error = |source: std::io::Error| ConfigError::DirectoryRead {
        path: dir.to_path_buf(),
        source,
    };

    let entries = match std::fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) if e.kind() == ErrorKind::NotFound || e.kind() == ErrorKind::NotADirectory => {
            return Ok(Vec::new());
        }
        Err(e) => return Err(directory_error(e)),
    };

    let mut files = Vec::new();
    for entry in entries {
        let path = entry.map_err(directory_error)?.path();
        if path.is_file() {
            files.push(path);
        } else {
            tracing::trace!(path = %path.display(), "Skipping non-regular fragment entry");
        }
    }
    files.sort();
    Ok(files)
}

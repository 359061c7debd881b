//! Shared test utilities for kiln-config integration tests.
//!
//! Responsibilities:
//! - Provide a hermetic command factory rooted in a temporary home and project.
//!
//! Invariants / Assumptions:
//! - `HOME` points at a fresh temporary directory, so per-user files never leak in.
//! - `KILN_SYSTEM_CONFIG_DIR` points at the sandbox's `etc/`, so `/etc/kilnconfig*` is never read.
//! - The command runs inside the temporary project directory.
//! - `KILN_PROJECT_ROOT` and `RUST_LOG` are cleared.

use std::path::{Path, PathBuf};

use assert_cmd::Command;
use tempfile::TempDir;

/// A temporary home directory plus project directory.
pub struct Sandbox {
    root: TempDir,
}

impl Sandbox {
    pub fn new() -> Self {
        let root = TempDir::new().expect("create sandbox");
        std::fs::create_dir_all(root.path().join("etc")).expect("create etc");
        std::fs::create_dir_all(root.path().join("home")).expect("create home");
        std::fs::create_dir_all(root.path().join("proj")).expect("create project");
        Self { root }
    }

    pub fn home(&self) -> PathBuf {
        self.root.path().join("home")
    }

    /// Stands in for `/etc`.
    pub fn etc(&self) -> PathBuf {
        self.root.path().join("etc")
    }

    pub fn project(&self) -> PathBuf {
        self.root.path().join("proj")
    }

    /// Write `contents` to `path` (relative to the sandbox root), creating parents.
    pub fn write(&self, path: impl AsRef<Path>, contents: &str) -> PathBuf {
        let full = self.root.path().join(path);
        if let Some(parent) = full.parent() {
            std::fs::create_dir_all(parent).expect("create parent");
        }
        std::fs::write(&full, contents).expect("write file");
        full
    }

    /// Returns a hermetic `kiln-config` command for integration testing.
    pub fn kiln_cmd(&self) -> Command {
        let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("kiln-config");
        cmd.current_dir(self.project())
            .env("HOME", self.home())
            .env("KILN_SYSTEM_CONFIG_DIR", self.etc())
            .env_remove("KILN_PROJECT_ROOT")
            .env_remove("RUST_LOG");
        cmd
    }
}

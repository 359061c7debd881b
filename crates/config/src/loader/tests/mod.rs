//! Tests for the configuration loader.
//!
//! Responsibilities:
//! - Test layer ordering across global, user, project and override sources.
//! - Test fragment directory handling.
//! - Test that read and parse failures abort the load.
//! - Test default locations driven by `HOME`.
//!
//! Invariants:
//! - Every test works inside its own `tempfile` root; nothing reads `/etc`.
//! - Tests that change `HOME` are `#[serial]` and scoped with `temp-env`.

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

use crate::resolver::ConfigLocations;


/// A synthetic filesystem with `etc/`, `home/` and `proj/` under one temp root.
pub struct Fixture {
    temp: TempDir,
}

impl Fixture {
    pub fn new() -> Self {
        let temp = TempDir::new().expect("create temp dir");
        for dir in ["etc", "home", "proj"] {
            fs::create_dir_all(temp.path().join(dir)).expect("create fixture dir");
        }
        Self { temp }
    }

    pub fn root(&self) -> &Path {
        self.temp.path()
    }

    pub fn project(&self) -> PathBuf {
        self.root().join("proj")
    }

    /// Write `contents` to `relative`, creating parent directories.
    pub fn write(&self, relative: &str, contents: &str) -> PathBuf {
        let path = self.root().join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("create parent dir");
        }
        fs::write(&path, contents).expect("write fixture file");
        path
    }

    pub fn locations(&self) -> ConfigLocations {
        ConfigLocations::default()
            .with_global_file(self.root().join("etc/kilnconfig"))
            .with_global_dir(self.root().join("etc/kilnconfig.d"))
            .with_home_dir(self.root().join("home"))
    }
}

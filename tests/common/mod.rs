#![allow(dead_code)]

use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// Creates an `assert_cmd` Command for the dirsift binary.
#[macro_export]
macro_rules! dirsift {
    () => {
        assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("dirsift"))
    };
}

/// Creates a temporary directory tree for integration tests.
pub struct TestFixture {
    pub dir: TempDir,
}

impl TestFixture {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Creates an empty file, creating parent directories as needed.
    pub fn create_file(&self, relative_path: &str) {
        let path = self.dir.path().join(relative_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        fs::write(&path, "").expect("Failed to write file");
    }

    pub fn create_dir(&self, relative_path: &str) {
        let path = self.dir.path().join(relative_path);
        fs::create_dir_all(&path).expect("Failed to create directory");
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Canonical root, the form in which matched paths are reported.
    pub fn root(&self) -> PathBuf {
        dunce::canonicalize(self.dir.path()).expect("Failed to canonicalize temp dir")
    }

    /// Canonical absolute path of a fixture entry.
    pub fn abs(&self, relative_path: &str) -> PathBuf {
        self.root().join(relative_path)
    }
}

/// Order-insensitive view of a result list.
pub fn as_set(paths: &[PathBuf]) -> BTreeSet<PathBuf> {
    paths.iter().cloned().collect()
}

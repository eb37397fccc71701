use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::error::{DirsiftError, Result};
use crate::matcher::{PatternSet, extension_of};

/// Scans a single directory for matching files.
///
/// Implementations must not recurse; the coordinator enumerates the tree.
pub trait FolderScanner: Send + Sync {
    /// List the immediate entries of `dir` and return the canonical paths of
    /// the regular files that match.
    ///
    /// # Errors
    /// Returns `FolderAccess` if the directory cannot be listed.
    fn scan(&self, dir: &Path) -> Result<Vec<PathBuf>>;
}

/// Filesystem-backed scanner applying the file and extension predicates.
#[derive(Debug, Clone)]
pub struct DirectoryScanner {
    patterns: Arc<PatternSet>,
}

impl DirectoryScanner {
    #[must_use]
    pub const fn new(patterns: Arc<PatternSet>) -> Self {
        Self { patterns }
    }

    fn matches(&self, file_name: &str) -> bool {
        self.patterns.matches_file(file_name, extension_of(file_name))
    }
}

impl FolderScanner for DirectoryScanner {
    fn scan(&self, dir: &Path) -> Result<Vec<PathBuf>> {
        let access_error = |source| DirsiftError::FolderAccess {
            path: dir.to_path_buf(),
            source,
        };

        let mut matched = Vec::new();
        for entry in fs::read_dir(dir).map_err(access_error)? {
            let entry = entry.map_err(access_error)?;
            if !self.matches(&entry.file_name().to_string_lossy()) {
                continue;
            }

            let path = entry.path();
            if is_regular_file(&entry, &path) {
                matched.push(resolve(path));
            }
        }

        Ok(matched)
    }
}

/// Links to files count, links to directories do not. Only links cost an
/// extra stat.
fn is_regular_file(entry: &fs::DirEntry, path: &Path) -> bool {
    match entry.file_type() {
        Ok(file_type) if file_type.is_symlink() => {
            fs::metadata(path).is_ok_and(|meta| meta.is_file())
        }
        Ok(file_type) => file_type.is_file(),
        Err(_) => false,
    }
}

/// Canonical absolute path, or the listed path if the file vanished meanwhile.
fn resolve(path: PathBuf) -> PathBuf {
    dunce::canonicalize(&path).unwrap_or(path)
}

#[cfg(test)]
#[path = "folder_tests.rs"]
mod tests;

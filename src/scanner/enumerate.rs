use std::collections::HashSet;
use std::path::{Path, PathBuf};

use walkdir::{DirEntry, WalkDir};

use crate::error::{DirsiftError, Result};

/// Every directory found under a base path, plus the subtrees that could not
/// be read.
#[derive(Debug, Default)]
pub struct Enumeration {
    pub directories: Vec<PathBuf>,
    pub errors: Vec<DirsiftError>,
}

/// Sequentially enumerate `base` and all directories below it.
///
/// The base directory itself is the first entry. Directory symlinks are
/// listed as candidates but only descended into when `follow_links` is set.
/// Unreadable subdirectories are collected in `errors` and left out of
/// `directories`.
///
/// # Errors
/// Returns `Traversal` if the base directory itself cannot be read.
pub fn enumerate_directories(base: &Path, follow_links: bool) -> Result<Enumeration> {
    let mut enumeration = Enumeration::default();
    let mut unreadable = HashSet::new();

    for entry in WalkDir::new(base).follow_links(follow_links) {
        match entry {
            Ok(entry) if is_directory(&entry) => {
                enumeration.directories.push(entry.into_path());
            }
            Ok(_) => {}
            Err(source) => {
                let at_base = source.depth() == 0 || source.path().is_none_or(|p| p == base);
                let path = source.path().unwrap_or(base).to_path_buf();
                if at_base {
                    return Err(DirsiftError::Traversal { path, source });
                }
                unreadable.insert(path.clone());
                enumeration.errors.push(DirsiftError::Traversal { path, source });
            }
        }
    }

    // A directory whose listing failed is already reported once.
    if !unreadable.is_empty() {
        enumeration
            .directories
            .retain(|dir| !unreadable.contains(dir));
    }

    Ok(enumeration)
}

fn is_directory(entry: &DirEntry) -> bool {
    entry.file_type().is_dir() || (entry.path_is_symlink() && entry.path().is_dir())
}

#[cfg(test)]
#[path = "enumerate_tests.rs"]
mod tests;

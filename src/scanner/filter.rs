use std::path::Path;

use crate::matcher::PatternSet;

/// Decides whether a directory's own files are scanned.
///
/// The decision never gates descent: every directory is enumerated whether or
/// not it passes, so matching folders below non-matching parents are found.
pub trait FolderFilter {
    fn should_traverse(&self, dir: &Path) -> bool;
}

impl FolderFilter for PatternSet {
    fn should_traverse(&self, dir: &Path) -> bool {
        dir.file_name()
            .is_some_and(|name| self.matches_folder(&name.to_string_lossy()))
    }
}

#[cfg(test)]
#[path = "filter_tests.rs"]
mod tests;

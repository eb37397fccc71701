use std::num::NonZeroUsize;
use std::path::PathBuf;

/// Construction parameters for a [`DirectoryWalker`](super::DirectoryWalker).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WalkerOptions {
    pub base_path: PathBuf,
    /// OR-combined folder-name patterns. Empty means no folder is eligible.
    pub folder_patterns: Vec<String>,
    pub file_pattern: String,
    /// Matched against the dot-inclusive extension, e.g. `.txt`.
    pub extension_pattern: Option<String>,
    /// Worker count; `None` uses [`default_worker_count`].
    pub workers: Option<usize>,
    /// Emit started/progress/completed events.
    pub progress: bool,
    pub follow_links: bool,
}

impl WalkerOptions {
    #[must_use]
    pub fn new(base_path: impl Into<PathBuf>, file_pattern: impl Into<String>) -> Self {
        Self {
            base_path: base_path.into(),
            folder_patterns: Vec::new(),
            file_pattern: file_pattern.into(),
            extension_pattern: None,
            workers: None,
            progress: true,
            follow_links: false,
        }
    }

    #[must_use]
    pub fn with_folder_patterns<I, S>(mut self, patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.folder_patterns = patterns.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn with_extension_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.extension_pattern = Some(pattern.into());
        self
    }

    #[must_use]
    pub fn with_workers(mut self, workers: usize) -> Self {
        self.workers = Some(workers);
        self
    }

    #[must_use]
    pub fn with_progress(mut self, progress: bool) -> Self {
        self.progress = progress;
        self
    }

    #[must_use]
    pub fn with_follow_links(mut self, follow_links: bool) -> Self {
        self.follow_links = follow_links;
        self
    }
}

/// Available parallelism minus two, keeping headroom on the host, never below one.
#[must_use]
pub fn default_worker_count() -> usize {
    std::thread::available_parallelism()
        .map_or(1, NonZeroUsize::get)
        .saturating_sub(2)
        .max(1)
}

#[cfg(test)]
#[path = "options_tests.rs"]
mod tests;

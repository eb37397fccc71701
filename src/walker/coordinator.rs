use std::path::{Path, PathBuf};
use std::sync::{Arc, mpsc};
use std::time::{Duration, Instant};

use rayon::{ThreadPool, ThreadPoolBuilder};

use crate::error::{DirsiftError, Result};
use crate::matcher::PatternSet;
use crate::output::{Reporter, SilentReporter, WalkEvent};
use crate::scanner::{DirectoryScanner, FolderFilter, FolderScanner, enumerate_directories};

use super::options::{WalkerOptions, default_worker_count};
use super::progress::ProgressState;

/// Outcome of one complete walk.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WalkReport {
    /// Matched files in completion order. No ordering is guaranteed.
    pub files: Vec<PathBuf>,
    pub directories_visited: usize,
    pub eligible_folders: usize,
    /// Folders and subtrees that could not be read.
    pub skipped_folders: usize,
    pub elapsed: Duration,
}

/// Finds files whose parent folder and own name match the configured patterns.
///
/// The tree is enumerated once, sequentially. Each eligible folder becomes an
/// independent scan task on a bounded worker pool; results are merged on the
/// calling thread as tasks finish.
pub struct DirectoryWalker<S: FolderScanner = DirectoryScanner> {
    base_path: PathBuf,
    patterns: Arc<PatternSet>,
    scanner: S,
    pool: ThreadPool,
    workers: usize,
    progress: bool,
    follow_links: bool,
    reporter: Box<dyn Reporter>,
}

impl DirectoryWalker {
    /// Validate `options`, compile patterns and build the worker pool.
    ///
    /// # Errors
    /// - `InvalidPattern` if any pattern fails to compile.
    /// - `PathNotFound` if the base path is missing or not a directory.
    /// - `Config` if the worker count is zero.
    /// - `ThreadPool` if the worker threads cannot be spawned.
    pub fn new(options: WalkerOptions) -> Result<Self> {
        let patterns = Arc::new(PatternSet::new(
            &options.folder_patterns,
            &options.file_pattern,
            options.extension_pattern.as_deref(),
        )?);

        let base_path = resolve_base_path(&options.base_path)?;

        let workers = match options.workers {
            Some(0) => {
                return Err(DirsiftError::Config(
                    "worker count must be at least 1".to_string(),
                ));
            }
            Some(n) => n,
            None => default_worker_count(),
        };

        let pool = ThreadPoolBuilder::new()
            .num_threads(workers)
            .thread_name(|i| format!("dirsift-scan-{i}"))
            .build()?;

        Ok(Self {
            base_path,
            scanner: DirectoryScanner::new(Arc::clone(&patterns)),
            patterns,
            pool,
            workers,
            progress: options.progress,
            follow_links: options.follow_links,
            reporter: Box::new(SilentReporter),
        })
    }
}

impl<S: FolderScanner> DirectoryWalker<S> {
    #[must_use]
    pub fn with_reporter(mut self, reporter: impl Reporter + 'static) -> Self {
        self.reporter = Box::new(reporter);
        self
    }

    /// Replace the per-folder scanner, keeping every other setting.
    #[must_use]
    pub fn with_scanner<T: FolderScanner>(self, scanner: T) -> DirectoryWalker<T> {
        DirectoryWalker {
            base_path: self.base_path,
            patterns: self.patterns,
            scanner,
            pool: self.pool,
            workers: self.workers,
            progress: self.progress,
            follow_links: self.follow_links,
            reporter: self.reporter,
        }
    }

    /// Canonical base path.
    #[must_use]
    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    #[must_use]
    pub const fn patterns(&self) -> &Arc<PatternSet> {
        &self.patterns
    }

    #[must_use]
    pub const fn workers(&self) -> usize {
        self.workers
    }

    /// Paths of all matching files, in no particular order.
    ///
    /// # Errors
    /// Returns an error if the base path disappeared or cannot be read.
    pub fn find_matching_files(&self) -> Result<Vec<PathBuf>> {
        self.walk().map(|report| report.files)
    }

    /// Run one walk and return the matches with traversal counters.
    ///
    /// # Errors
    /// - `PathNotFound` if the base path is no longer a directory.
    /// - `Traversal` if the base directory itself cannot be read.
    pub fn walk(&self) -> Result<WalkReport> {
        let start = Instant::now();

        if !self.base_path.is_dir() {
            return Err(DirsiftError::PathNotFound(self.base_path.clone()));
        }

        let enumeration = enumerate_directories(&self.base_path, self.follow_links)?;
        for error in &enumeration.errors {
            self.reporter.report(&WalkEvent::FolderSkipped { error });
        }

        let directories_visited = enumeration.directories.len();
        let eligible: Vec<PathBuf> = enumeration
            .directories
            .into_iter()
            .filter(|dir| self.patterns.should_traverse(dir))
            .collect();

        let mut progress = ProgressState::new(eligible.len());
        self.emit_progress(&WalkEvent::Started {
            total_folders: progress.total(),
        });

        let (files, failed) = self.scan_all(eligible, &mut progress);

        self.emit_progress(&WalkEvent::Completed {
            matched_files: files.len(),
            processed: progress.processed(),
        });

        Ok(WalkReport {
            files,
            directories_visited,
            eligible_folders: progress.total(),
            skipped_folders: enumeration.errors.len() + failed,
            elapsed: start.elapsed(),
        })
    }

    /// Fan eligible folders out to the pool and merge results as they arrive.
    ///
    /// Workers only send results back; the aggregate and the progress counters
    /// are touched on this thread alone.
    fn scan_all(
        &self,
        eligible: Vec<PathBuf>,
        progress: &mut ProgressState,
    ) -> (Vec<PathBuf>, usize) {
        let scanner = &self.scanner;
        let mut files = Vec::new();
        let mut failed = 0;

        self.pool.in_place_scope(|scope| {
            let (tx, rx) = mpsc::channel();
            for dir in eligible {
                let tx = tx.clone();
                scope.spawn(move |_| {
                    // The receiver is drained until every sender is dropped.
                    let _ = tx.send(scanner.scan(&dir));
                });
            }
            drop(tx);

            for outcome in rx {
                match outcome {
                    Ok(found) => files.extend(found),
                    Err(error) => {
                        failed += 1;
                        self.reporter.report(&WalkEvent::FolderSkipped { error: &error });
                    }
                }

                if progress.advance() {
                    self.emit_progress(&WalkEvent::Progress {
                        processed: progress.processed(),
                        total: progress.total(),
                    });
                }
            }
        });

        (files, failed)
    }

    fn emit_progress(&self, event: &WalkEvent<'_>) {
        if self.progress {
            self.reporter.report(event);
        }
    }
}

fn resolve_base_path(path: &Path) -> Result<PathBuf> {
    match dunce::canonicalize(path) {
        Ok(resolved) if resolved.is_dir() => Ok(resolved),
        _ => Err(DirsiftError::PathNotFound(path.to_path_buf())),
    }
}

#[cfg(test)]
#[path = "coordinator_tests.rs"]
mod tests;

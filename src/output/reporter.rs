use std::fmt;
use std::path::Path;
use std::sync::Arc;

use crate::error::DirsiftError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventLevel {
    Info,
    Warning,
}

/// Something worth telling the user about while a walk runs.
#[derive(Debug)]
pub enum WalkEvent<'a> {
    /// Enumeration finished; `total_folders` folders are about to be scanned.
    Started { total_folders: usize },
    Progress { processed: usize, total: usize },
    /// A folder or subtree could not be read and contributed no matches.
    FolderSkipped { error: &'a DirsiftError },
    Completed { matched_files: usize, processed: usize },
    ResultsWritten { path: &'a Path, count: usize },
    WriteFailed { error: &'a DirsiftError },
}

impl WalkEvent<'_> {
    #[must_use]
    pub const fn level(&self) -> EventLevel {
        match self {
            Self::FolderSkipped { .. } | Self::WriteFailed { .. } => EventLevel::Warning,
            _ => EventLevel::Info,
        }
    }
}

impl fmt::Display for WalkEvent<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Started { total_folders } => {
                write!(f, "Scanning {total_folders} eligible folders")
            }
            Self::Progress { processed, total } => {
                write!(f, "Progress: {processed}/{total} folders processed")
            }
            Self::FolderSkipped { error } => write!(f, "Skipped folder: {error}"),
            Self::Completed { .. } => write!(f, "File matching completed"),
            Self::ResultsWritten { path, .. } => {
                write!(f, "Results written to {}", path.display())
            }
            Self::WriteFailed { error } => write!(f, "Failed to write results: {error}"),
        }
    }
}

/// Receives walk events. Injected into the walker instead of global logging
/// state so independent walkers never share a sink by accident.
pub trait Reporter: Send + Sync {
    fn report(&self, event: &WalkEvent<'_>);
}

impl<R: Reporter + ?Sized> Reporter for Arc<R> {
    fn report(&self, event: &WalkEvent<'_>) {
        (**self).report(event);
    }
}

impl<R: Reporter + ?Sized> Reporter for &R {
    fn report(&self, event: &WalkEvent<'_>) {
        (**self).report(event);
    }
}

/// Discards every event.
#[derive(Debug, Default, Clone, Copy)]
pub struct SilentReporter;

impl Reporter for SilentReporter {
    fn report(&self, _event: &WalkEvent<'_>) {}
}

/// Prints events to stderr, prefixing warnings.
#[derive(Debug, Default, Clone, Copy)]
pub struct StderrReporter;

impl StderrReporter {
    #[must_use]
    pub fn render(event: &WalkEvent<'_>) -> String {
        match event.level() {
            EventLevel::Info => event.to_string(),
            EventLevel::Warning => format!("Warning: {event}"),
        }
    }
}

impl Reporter for StderrReporter {
    fn report(&self, event: &WalkEvent<'_>) {
        eprintln!("{}", Self::render(event));
    }
}

#[cfg(test)]
#[path = "reporter_tests.rs"]
mod tests;

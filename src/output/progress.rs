use std::io::IsTerminal;

use indicatif::{ProgressBar, ProgressStyle};

use super::reporter::{Reporter, StderrReporter, WalkEvent};

/// Progress bar for folder scanning.
///
/// The bar is drawn on stderr and only when stderr is a TTY. Progress events
/// move the bar; every other event is printed above it.
pub struct ProgressBarReporter {
    progress_bar: ProgressBar,
}

impl ProgressBarReporter {
    #[must_use]
    pub fn new() -> Self {
        Self::new_with_visibility(std::io::stderr().is_terminal())
    }

    /// Explicit visibility control so the hidden path can be tested without a TTY.
    fn new_with_visibility(is_tty: bool) -> Self {
        let progress_bar = if is_tty {
            Self::create_visible_progress_bar()
        } else {
            ProgressBar::hidden()
        };

        Self { progress_bar }
    }

    /// # Panics
    ///
    /// Panics if the template is invalid; it is a compile-time constant.
    fn create_visible_progress_bar() -> ProgressBar {
        let pb = ProgressBar::new(0);
        pb.set_style(
            ProgressStyle::default_bar()
                .template(
                    "{spinner:.green} Scanning [{bar:40.cyan/blue}] {pos}/{len} folders ({percent}%)",
                )
                // SAFETY: Template is a static string with valid format specifiers
                .expect("valid template")
                .progress_chars("█▓░"),
        );
        pb
    }

    fn print(&self, event: &WalkEvent<'_>) {
        let line = StderrReporter::render(event);
        if self.progress_bar.is_hidden() {
            eprintln!("{line}");
        } else {
            self.progress_bar.println(line);
        }
    }

    #[cfg(test)]
    fn position(&self) -> u64 {
        self.progress_bar.position()
    }

    #[cfg(test)]
    fn length(&self) -> Option<u64> {
        self.progress_bar.length()
    }
}

impl Default for ProgressBarReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl Reporter for ProgressBarReporter {
    fn report(&self, event: &WalkEvent<'_>) {
        match event {
            WalkEvent::Started { total_folders } => {
                self.progress_bar.set_length(*total_folders as u64);
                self.progress_bar.set_position(0);
            }
            WalkEvent::Progress { processed, .. } => {
                self.progress_bar.set_position(*processed as u64);
            }
            WalkEvent::Completed { .. } => {
                self.progress_bar.finish_and_clear();
                self.print(event);
            }
            _ => self.print(event),
        }
    }
}

#[cfg(test)]
#[path = "progress_tests.rs"]
mod tests;

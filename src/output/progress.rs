use std::io::IsTerminal;

use indicatif::{ProgressBar, ProgressStyle};

/// Progress bar for per-repository language lookups.
///
/// The progress bar is automatically disabled in quiet mode or when stderr is not a TTY.
pub struct FetchProgress {
    progress_bar: ProgressBar,
}

impl FetchProgress {
    /// Creates a new progress bar for `total` repositories.
    ///
    /// The progress bar outputs to stderr to avoid interfering with the summary table.
    #[must_use]
    pub fn new(total: u64, quiet: bool) -> Self {
        let is_tty = std::io::stderr().is_terminal();
        Self::new_with_visibility(total, quiet, is_tty)
    }

    fn new_with_visibility(total: u64, quiet: bool, is_tty: bool) -> Self {
        let progress_bar = if quiet || !is_tty {
            ProgressBar::hidden()
        } else {
            Self::create_visible_progress_bar(total)
        };

        Self { progress_bar }
    }

    fn create_visible_progress_bar(total: u64) -> ProgressBar {
        let pb = ProgressBar::new(total);
        let style = ProgressStyle::default_bar()
            .template("{spinner:.green} Fetching languages [{bar:40.cyan/blue}] {pos}/{len} repos {msg}")
            .map_or_else(|_| ProgressStyle::default_bar(), |s| s.progress_chars("█▓░"));
        pb.set_style(style);
        pb
    }

    /// Marks one repository as done and shows its name.
    pub fn inc(&self, repository: &str) {
        self.progress_bar.set_message(repository.to_string());
        self.progress_bar.inc(1);
    }

    /// Finishes the progress bar and clears it from the terminal.
    pub fn finish(&self) {
        self.progress_bar.finish_and_clear();
    }
}

#[cfg(test)]
#[path = "progress_tests.rs"]
mod tests;

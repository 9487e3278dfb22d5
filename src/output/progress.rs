use std::io::IsTerminal;

use indicatif::{ProgressBar, ProgressStyle};

/// Progress bar for the sweep loop.
///
/// The bar outputs to stderr so it never interferes with the report on
/// stdout, and collapses to a hidden bar when stderr is not a TTY.
pub struct SweepProgress {
    bar: ProgressBar,
}

impl SweepProgress {
    /// Creates a progress bar sized to the number of files to sweep.
    ///
    /// # Panics
    ///
    /// This function will panic if the progress bar template is invalid.
    /// The template is a compile-time constant, so this should never happen.
    #[must_use]
    pub fn new(total: u64) -> Self {
        let is_tty = std::io::stderr().is_terminal();
        Self::with_visibility(total, is_tty)
    }

    /// Internal constructor that allows testing the visible path even in
    /// non-TTY environments.
    fn with_visibility(total: u64, visible: bool) -> Self {
        let bar = if visible {
            Self::create_visible_bar(total)
        } else {
            ProgressBar::hidden()
        };

        Self { bar }
    }

    fn create_visible_bar(total: u64) -> ProgressBar {
        let bar = ProgressBar::new(total);
        bar.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} Sweeping [{bar:40.cyan/blue}] {pos}/{len} files")
                // Template is a static string with valid format specifiers
                .expect("valid template")
                .progress_chars("█▓░"),
        );
        bar
    }

    /// Advances the bar by one file.
    pub fn inc(&self) {
        self.bar.inc(1);
    }

    /// Finishes the progress bar and clears it from the terminal.
    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }
}

#[cfg(test)]
#[path = "progress_tests.rs"]
mod tests;

use std::io::Write;

use crate::report::RunReport;

/// Color output mode for terminal display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorMode {
    /// Auto-detect: use colors if stdout is a TTY and `NO_COLOR` is not set
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// ANSI color codes
mod ansi {
    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const RESET: &str = "\x1b[0m";
}

pub struct TextReporter {
    use_colors: bool,
    verbose: bool,
    preview: bool,
}

impl TextReporter {
    #[must_use]
    pub fn new(mode: ColorMode) -> Self {
        Self::with_verbose(mode, false)
    }

    #[must_use]
    pub fn with_verbose(mode: ColorMode, verbose: bool) -> Self {
        let use_colors = Self::should_use_colors(mode);
        Self {
            use_colors,
            verbose,
            preview: false,
        }
    }

    /// Append a preview note to reports whose changes were not written.
    #[must_use]
    pub const fn with_preview(mut self, preview: bool) -> Self {
        self.preview = preview;
        self
    }

    fn should_use_colors(mode: ColorMode) -> bool {
        match mode {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => {
                // Respect NO_COLOR environment variable
                if std::env::var("NO_COLOR").is_ok() {
                    return false;
                }
                // Check if stdout is a TTY
                std::io::IsTerminal::is_terminal(&std::io::stdout())
            }
        }
    }

    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.use_colors {
            return text.to_string();
        }
        format!("{color}{text}{}", ansi::RESET)
    }

    /// Render the end-of-run report: the numbered table in verbose mode,
    /// then the completion line.
    #[must_use]
    pub fn format(&self, report: &RunReport) -> String {
        let mut output = Vec::new();

        if self.verbose && !report.records.is_empty() {
            writeln!(output).ok();
            writeln!(output, "Summary:").ok();
            for (i, record) in report.records.iter().enumerate() {
                writeln!(
                    output,
                    "  {}. {} ({} removed)",
                    i + 1,
                    record.path.display(),
                    record.removed
                )
                .ok();
            }
        }

        let statements = self.colorize(&report.statements_removed.to_string(), ansi::YELLOW);
        let files = self.colorize(&report.files_modified.to_string(), ansi::GREEN);
        writeln!(output).ok();
        writeln!(
            output,
            "Operation completed. {statements} console statement(s) removed from {files} file(s)."
        )
        .ok();

        if self.preview && report.files_modified > 0 {
            writeln!(output, "(preview: no files were written)").ok();
        }

        String::from_utf8_lossy(&output).to_string()
    }
}

impl Default for TextReporter {
    fn default() -> Self {
        Self::new(ColorMode::Auto)
    }
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;

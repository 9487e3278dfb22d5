use std::fs;
use std::path::Path;

use crate::cli::RunOptions;
use crate::error::{ConsoleSweepError, Result};
use crate::transform::StatementStripper;

/// Substring a file must contain before the stripper is worth running.
const CALL_PREFIX: &str = "console.";

/// Per-file result of one sweep step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FileOutcome {
    /// Whether the rewritten content differs from the original.
    pub modified: bool,
    /// Number of lines that contained a matching call.
    pub removed: usize,
}

/// Read one file, strip matching calls, and write the result back when
/// saving is enabled.
///
/// Content without the `console.` substring is skipped without running the
/// stripper; no pattern can match such content, so the short-circuit does
/// not change the outcome. A file whose rewritten content equals the
/// original is reported as unmodified even if the stripper matched lines.
///
/// # Errors
/// Returns `FileRead` or `FileWrite` with the offending path; the sweep
/// does not retry.
pub fn process_file(
    path: &Path,
    stripper: &StatementStripper<'_>,
    options: &RunOptions,
) -> Result<FileOutcome> {
    let content = fs::read_to_string(path).map_err(|e| ConsoleSweepError::FileRead {
        path: path.to_path_buf(),
        source: e,
    })?;

    if !content.contains(CALL_PREFIX) {
        return Ok(FileOutcome::default());
    }

    let result = stripper.strip(&content);
    if result.content == content {
        return Ok(FileOutcome::default());
    }

    if options.save {
        fs::write(path, &result.content).map_err(|e| ConsoleSweepError::FileWrite {
            path: path.to_path_buf(),
            source: e,
        })?;
    }

    Ok(FileOutcome {
        modified: true,
        removed: result.removed,
    })
}

#[cfg(test)]
#[path = "processor_tests.rs"]
mod tests;

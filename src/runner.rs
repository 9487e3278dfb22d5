use std::path::Path;

use crate::cli::RunOptions;
use crate::error::Result;
use crate::output::SweepProgress;
use crate::pattern::StatementMatcher;
use crate::processor::process_file;
use crate::report::RunReport;
use crate::scanner::{FileScanner, SourceFilter, SourceScanner};
use crate::transform::StatementStripper;

/// Sweep the tree under `root`: collect eligible source files, strip
/// matching calls from each in turn, and fold the outcomes into a report.
///
/// Files are processed sequentially in walk order. In verbose mode each
/// modified file is echoed as soon as it is processed.
///
/// # Errors
/// Propagates the first traversal, read, or write failure. Files already
/// rewritten earlier in the run stay rewritten.
pub fn run_sweep(root: &Path, options: &RunOptions) -> Result<RunReport> {
    // 1. Compile the matcher for the requested target
    let matcher = StatementMatcher::for_target(&options.target)?;
    let stripper = StatementStripper::new(&matcher);

    // 2. Collect eligible files, pruning excluded subtrees during the walk
    let scanner = SourceScanner::new(SourceFilter::new());
    let files = scanner.scan(root)?;

    // 3. Process each file and accumulate the report
    let progress = SweepProgress::new(files.len() as u64);
    let mut report = RunReport::default();

    for path in files {
        let outcome = process_file(&path, &stripper, options)?;
        progress.inc();

        if outcome.modified {
            if options.verbose {
                println!("Modified: {} ({} removed)", path.display(), outcome.removed);
            }
            report.record(path, outcome.removed);
        }
    }
    progress.finish();

    Ok(report)
}

#[cfg(test)]
#[path = "runner_tests.rs"]
mod tests;

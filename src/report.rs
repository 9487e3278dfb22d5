use std::path::PathBuf;

/// One modified file, as listed in the verbose summary table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileRecord {
    pub path: PathBuf,
    pub removed: usize,
}

/// Aggregated result of one sweep over a directory tree.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunReport {
    /// Files whose content changed.
    pub files_modified: usize,
    /// Total lines removed across all modified files.
    pub statements_removed: usize,
    /// Per-file entries, in the order files were processed.
    pub records: Vec<FileRecord>,
}

impl RunReport {
    /// Fold one modified file into the totals.
    pub fn record(&mut self, path: PathBuf, removed: usize) {
        self.files_modified += 1;
        self.statements_removed += removed;
        self.records.push(FileRecord { path, removed });
    }
}

#[cfg(test)]
#[path = "report_tests.rs"]
mod tests;

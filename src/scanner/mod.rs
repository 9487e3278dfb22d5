mod filter;

pub use filter::{EXCLUDED_DIRS, FileFilter, SOURCE_EXTENSIONS, SourceFilter};

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::error::Result;

/// Trait for scanning directories and finding files.
pub trait FileScanner {
    /// Scan a directory tree and return eligible file paths in walk order.
    ///
    /// # Errors
    /// Returns an error if a directory entry cannot be read.
    fn scan(&self, root: &Path) -> Result<Vec<PathBuf>>;
}

pub struct SourceScanner<F: FileFilter> {
    filter: F,
}

impl<F: FileFilter> SourceScanner<F> {
    #[must_use]
    pub const fn new(filter: F) -> Self {
        Self { filter }
    }
}

impl<F: FileFilter> FileScanner for SourceScanner<F> {
    fn scan(&self, root: &Path) -> Result<Vec<PathBuf>> {
        let walker = WalkDir::new(root).into_iter().filter_entry(|entry| {
            // The root entry is exempt from exclusion; pruning applies to
            // the directories discovered beneath it.
            entry.depth() == 0
                || !(entry.file_type().is_dir() && self.filter.is_excluded_dir(entry.path()))
        });

        let mut files = Vec::new();
        for entry in walker {
            let entry = entry?;
            if entry.file_type().is_file() && self.filter.is_source_file(entry.path()) {
                files.push(entry.path().to_path_buf());
            }
        }

        Ok(files)
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;

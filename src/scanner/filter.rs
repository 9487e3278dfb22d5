use std::path::Path;

/// Extensions recognized as JavaScript-family sources.
pub const SOURCE_EXTENSIONS: &[&str] = &["js", "ts", "jsx", "tsx", "mjs"];

/// Directory names whose subtrees are skipped during the walk.
///
/// Exclusion is a plain substring test against the directory path, not a
/// segment comparison, so `my-node_modules-backup` is skipped too.
pub const EXCLUDED_DIRS: &[&str] = &[
    "node_modules",
    "dist",
    ".next",
    ".git",
    "build",
    ".nuxt",
    "public/build",
    "out",
    ".vercel",
    ".output",
    ".svelte-kit",
];

pub trait FileFilter {
    /// Whether a directory path should be pruned from the walk.
    fn is_excluded_dir(&self, path: &Path) -> bool;

    /// Whether a file path is an eligible source file.
    fn is_source_file(&self, path: &Path) -> bool;
}

/// Filter over the built-in extension and exclusion lists.
#[derive(Debug, Clone, Copy, Default)]
pub struct SourceFilter;

impl SourceFilter {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl FileFilter for SourceFilter {
    fn is_excluded_dir(&self, path: &Path) -> bool {
        let path = path.to_string_lossy();
        EXCLUDED_DIRS.iter().any(|dir| path.contains(dir))
    }

    fn is_source_file(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| SOURCE_EXTENSIONS.contains(&ext))
    }
}

#[cfg(test)]
#[path = "filter_tests.rs"]
mod tests;

use std::path::Path;

use super::*;

#[test]
fn recognizes_all_source_extensions() {
    let filter = SourceFilter::new();
    for name in ["a.js", "a.ts", "a.jsx", "a.tsx", "a.mjs"] {
        assert!(filter.is_source_file(Path::new(name)), "{name}");
    }
}

#[test]
fn rejects_other_extensions() {
    let filter = SourceFilter::new();
    for name in ["a.json", "a.md", "a.rs", "a.cjs", "noext", ".env"] {
        assert!(!filter.is_source_file(Path::new(name)), "{name}");
    }
}

#[test]
fn extension_matching_is_case_sensitive() {
    let filter = SourceFilter::new();
    assert!(!filter.is_source_file(Path::new("APP.JS")));
}

#[test]
fn nested_source_files_are_recognized() {
    let filter = SourceFilter::new();
    assert!(filter.is_source_file(Path::new("src/components/App.test.jsx")));
}

#[test]
fn excludes_well_known_directories() {
    let filter = SourceFilter::new();
    for path in ["node_modules", "frontend/dist", ".git", "app/.next", ".svelte-kit"] {
        assert!(filter.is_excluded_dir(Path::new(path)), "{path}");
    }
}

#[test]
fn exclusion_matches_anywhere_in_the_path() {
    let filter = SourceFilter::new();
    assert!(filter.is_excluded_dir(Path::new("packages/app/node_modules/left-pad")));
    assert!(filter.is_excluded_dir(Path::new("public/build")));
}

#[test]
fn exclusion_is_substring_based() {
    let filter = SourceFilter::new();
    // `out` is on the exclusion list, so any name containing it is skipped.
    assert!(filter.is_excluded_dir(Path::new("src/layout")));
    assert!(filter.is_excluded_dir(Path::new("src/about")));
    assert!(filter.is_excluded_dir(Path::new("my-node_modules-backup")));
}

#[test]
fn unrelated_directories_are_kept() {
    let filter = SourceFilter::new();
    for path in ["src", "lib/components", "app/pages", "tests"] {
        assert!(!filter.is_excluded_dir(Path::new(path)), "{path}");
    }
}

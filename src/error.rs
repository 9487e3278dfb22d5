use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConsoleSweepError {
    #[error("Failed to read file: {path}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write file: {path}")]
    FileWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid statement pattern for target '{target}'")]
    Pattern {
        target: String,
        #[source]
        source: regex::Error,
    },

    #[error("Directory walk error: {0}")]
    Walk(#[from] walkdir::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ConsoleSweepError>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;

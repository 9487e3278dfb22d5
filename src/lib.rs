pub mod cli;
pub mod error;
pub mod output;
pub mod pattern;
pub mod processor;
pub mod report;
pub mod runner;
pub mod scanner;
pub mod transform;

pub use error::{ConsoleSweepError, Result};

pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_FAILURE: i32 = 1;

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;

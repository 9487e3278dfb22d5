mod progress;
mod text;

pub use progress::SweepProgress;
pub use text::{ColorMode, TextReporter};

use clap::Parser;

/// Method removed when `--target` is not given.
pub const DEFAULT_TARGET: &str = "log";

#[derive(Parser, Debug)]
#[command(name = "console-sweep")]
#[command(author, version, about = "Remove console debug statements from a source tree")]
#[command(long_about = "Recursively sweeps the current working directory for JavaScript and \
    TypeScript sources (.js, .ts, .jsx, .tsx, .mjs) and removes console statements line by \
    line. Matching is lexical: calls that span multiple lines or carry a literal ')' inside \
    their arguments are left untouched.\n\n\
    Exit codes:\n  \
    0 - Sweep completed (including sweeps that removed nothing)\n  \
    1 - Runtime error (unreadable directory or file)")]
pub struct Cli {
    /// Console method to remove (e.g. log, warn, error); `all` removes every method
    #[arg(long, default_value = DEFAULT_TARGET)]
    pub target: String,

    /// Preview the sweep without writing any file
    #[arg(long)]
    pub no_save: bool,

    /// Print each modified file and a summary table
    #[arg(long)]
    pub verbose: bool,

    /// Print package name, version, author and license, then exit
    #[arg(long)]
    pub about: bool,
}

/// Resolved run configuration threaded through the sweep.
#[derive(Debug, Clone)]
pub struct RunOptions {
    /// Console method to remove, or `all`.
    pub target: String,
    /// Whether modified files are written back to disk.
    pub save: bool,
    /// Whether per-file lines and the summary table are printed.
    pub verbose: bool,
}

impl RunOptions {
    #[must_use]
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            target: cli.target.clone(),
            save: !cli.no_save,
            verbose: cli.verbose,
        }
    }
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;

use std::path::Path;

use clap::Parser;

use console_sweep::cli::{Cli, RunOptions};
use console_sweep::output::{ColorMode, TextReporter};
use console_sweep::runner::run_sweep;
use console_sweep::{EXIT_FAILURE, EXIT_SUCCESS};

fn main() {
    let cli = Cli::parse();
    std::process::exit(run(&cli));
}

fn run(cli: &Cli) -> i32 {
    if cli.about {
        print!("{}", about_text());
        return EXIT_SUCCESS;
    }

    match run_impl(cli) {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            EXIT_FAILURE
        }
    }
}

fn run_impl(cli: &Cli) -> console_sweep::Result<()> {
    // 1. Resolve run configuration from the parsed flags
    let options = RunOptions::from_cli(cli);

    // 2. Sweep the current working directory
    let report = run_sweep(Path::new("."), &options)?;

    // 3. Print the report
    let reporter =
        TextReporter::with_verbose(ColorMode::Auto, options.verbose).with_preview(!options.save);
    print!("{}", reporter.format(&report));

    Ok(())
}

fn about_text() -> String {
    format!(
        "Name: {}\nVersion: {}\nAuthor: {}\nLicense: {}\n",
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION"),
        env!("CARGO_PKG_AUTHORS"),
        env!("CARGO_PKG_LICENSE"),
    )
}

#[cfg(test)]
#[path = "main_tests.rs"]
mod tests;

use clap::Parser;

use console_sweep::EXIT_SUCCESS;
use console_sweep::cli::Cli;

use crate::{about_text, run};

#[test]
fn about_text_lists_package_metadata() {
    let text = about_text();
    assert!(text.contains("Name: console-sweep"));
    assert!(text.contains(&format!("Version: {}", env!("CARGO_PKG_VERSION"))));
    assert!(text.contains("License: Apache-2.0"));
}

#[test]
fn about_flag_short_circuits_successfully() {
    let cli = Cli::parse_from(["console-sweep", "--about"]);
    assert_eq!(run(&cli), EXIT_SUCCESS);
}

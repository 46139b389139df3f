//! Frontcfg - command-line tool for inspecting and validating front-end build configuration

use std::process::ExitCode;

use frontcfg::cli;

fn main() -> ExitCode {
    cli::run()
}

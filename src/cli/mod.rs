//! Command-line interface implementation
//!
//! This module provides the CLI entry point and dispatches to submodules
//! for specific command implementations.

mod init;
mod show;

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;

use crate::config::CliOverrides;

/// Exit codes
pub(crate) const EXIT_SUCCESS: u8 = 0;
pub(crate) const EXIT_ERROR: u8 = 1;
pub(crate) const EXIT_INVALID_ARGS: u8 = 2;

/// Frontcfg - resolve front-end build and dev-server configuration
#[derive(Parser)]
#[command(name = "fcfg")]
#[command(about = "Frontcfg - resolve front-end build and dev-server configuration")]
#[command(version)]
pub struct Cli {
    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Config file selection and per-field overrides shared by show/check
#[derive(Args, Debug, Default, Clone)]
pub struct ConfigArgs {
    /// Config file (default: search upward for frontcfg.toml / frontcfg.json5)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Override the source root directory
    #[arg(long)]
    pub root_dir: Option<PathBuf>,

    /// Override the build output directory
    #[arg(short, long)]
    pub output_dir: Option<PathBuf>,

    /// Override the dev-server port (1-65535)
    #[arg(short, long)]
    pub port: Option<i64>,

    /// Open a browser when the dev server starts
    #[arg(long, overrides_with = "no_open")]
    pub open: bool,

    /// Do not open a browser when the dev server starts
    #[arg(long, overrides_with = "open")]
    pub no_open: bool,

    /// Purge the output directory before each build
    #[arg(long, overrides_with = "keep_output")]
    pub empty_output: bool,

    /// Keep existing files in the output directory
    #[arg(long, overrides_with = "empty_output")]
    pub keep_output: bool,
}

impl ConfigArgs {
    /// Collect the overrides actually given on the command line
    pub fn overrides(&self) -> CliOverrides {
        CliOverrides {
            root_dir: self.root_dir.clone(),
            output_dir: self.output_dir.clone(),
            empty_output: flag_pair(self.empty_output, self.keep_output),
            port: self.port,
            open: flag_pair(self.open, self.no_open),
        }
    }
}

fn flag_pair(on: bool, off: bool) -> Option<bool> {
    match (on, off) {
        (true, _) => Some(true),
        (_, true) => Some(false),
        _ => None,
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the effective configuration
    Show {
        #[command(flatten)]
        args: ConfigArgs,

        /// Output format: text, toml, json
        #[arg(short, long, default_value = "text")]
        format: String,
    },

    /// Validate the configuration without printing it
    Check {
        #[command(flatten)]
        args: ConfigArgs,
    },

    /// Write a starter config file holding the default values
    Init {
        /// Directory to write into (default: current directory)
        path: Option<PathBuf>,

        /// File format: toml, json5
        #[arg(short, long, default_value = "toml")]
        format: String,

        /// Overwrite an existing config file
        #[arg(long)]
        force: bool,
    },
}

/// Parse arguments, set up logging, and run the selected command
pub fn run() -> ExitCode {
    let cli = Cli::parse();
    crate::logging::init_logging(cli.verbose);

    match cli.command {
        Commands::Show { args, format } => show::run_show(&args, &format),
        Commands::Check { args } => show::run_check(&args),
        Commands::Init { path, format, force } => init::run_init(path.as_deref(), &format, force),
    }
}

//! Frontcfg - configuration resolution for front-end build tooling
//!
//! This library provides functionality to:
//! - Load declared options from `frontcfg.toml` or `frontcfg.json5`
//! - Resolve them against a base directory into an immutable effective config
//! - Validate directory nesting and the dev-server port

pub mod cli;
pub mod config;
pub mod init;
pub mod logging;

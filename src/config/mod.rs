//! Configuration module for frontcfg
//!
//! Declared options (`frontcfg.toml` / `frontcfg.json5`) are loaded, merged
//! with command-line overrides, and resolved into an immutable
//! [`EffectiveConfig`] for the build and dev-server subsystems.

pub mod error;
pub mod loader;
pub mod resolve;
pub mod schema;

pub use error::ConfigError;
pub use loader::{
    find_config_from, load_declared, load_effective, parse_declared, CliOverrides,
    ConfigFormat, LoadedConfig, CONFIG_FILE_NAMES,
};
pub use resolve::{normalize_lexically, resolve, resolve_path, ConfigResolver};
pub use schema::*;

//! Configuration discovery and loading for `frontcfg.toml` / `frontcfg.json5`
//!
//! This is the only part of the config layer that touches the filesystem.
//! It finds and reads a config file, layers command-line overrides on top,
//! and hands the result to the resolver.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use super::error::ConfigError;
use super::resolve::{resolve, resolve_path};
use super::schema::{DeclaredOptions, EffectiveConfig};

/// Recognized config file names, in lookup order
pub const CONFIG_FILE_NAMES: [&str; 3] = ["frontcfg.toml", "frontcfg.json5", "frontcfg.json"];

/// On-disk config syntax
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Toml,
    /// Also used for plain `.json`, which is a JSON5 subset
    Json5,
}

impl ConfigFormat {
    /// Detect the format from a file extension
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        match path.extension().and_then(|e| e.to_str()) {
            Some("toml") => Ok(ConfigFormat::Toml),
            Some("json5") | Some("json") => Ok(ConfigFormat::Json5),
            _ => Err(ConfigError::UnsupportedFormat { path: path.to_path_buf() }),
        }
    }
}

/// Command-line arguments that can override config values
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    /// Override source root
    pub root_dir: Option<PathBuf>,
    /// Override output directory
    pub output_dir: Option<PathBuf>,
    /// Override output purging
    pub empty_output: Option<bool>,
    /// Override dev-server port
    pub port: Option<i64>,
    /// Override browser launch
    pub open: Option<bool>,
}

impl From<&CliOverrides> for DeclaredOptions {
    fn from(overrides: &CliOverrides) -> Self {
        DeclaredOptions {
            root_dir: overrides.root_dir.clone(),
            output_dir: overrides.output_dir.clone(),
            empty_output_before_build: overrides.empty_output,
            server_port: overrides.port,
            open_browser_on_start: overrides.open,
        }
    }
}

/// A resolved config together with where it came from
#[derive(Debug, Clone)]
pub struct LoadedConfig {
    /// The effective configuration
    pub config: EffectiveConfig,
    /// Config file that was read, if any
    pub source: Option<PathBuf>,
    /// Directory relative paths were resolved against
    pub base_dir: PathBuf,
}

/// Find a config file by walking up from a specific directory.
///
/// Within a directory, names are tried in [`CONFIG_FILE_NAMES`] order.
pub fn find_config_from(start: PathBuf) -> Option<PathBuf> {
    let mut current = start;

    loop {
        for name in CONFIG_FILE_NAMES {
            let candidate = current.join(name);
            if candidate.is_file() {
                return Some(candidate);
            }
        }

        if !current.pop() {
            return None;
        }
    }
}

/// Parse declared options from config text.
pub fn parse_declared(
    contents: &str,
    format: ConfigFormat,
) -> Result<DeclaredOptions, ConfigError> {
    match format {
        ConfigFormat::Toml => Ok(toml::from_str(contents)?),
        ConfigFormat::Json5 => Ok(json5::from_str(contents)?),
    }
}

/// Load declared options from a config file.
pub fn load_declared(path: &Path) -> Result<DeclaredOptions, ConfigError> {
    let format = ConfigFormat::from_path(path)?;
    debug!(path = %path.display(), ?format, "reading config file");
    let contents = fs::read_to_string(path)?;
    parse_declared(&contents, format)
}

/// Load, merge and resolve the effective configuration.
///
/// The config file is `explicit` if given (relative paths are taken from
/// `start_dir`), otherwise the first one found walking up from `start_dir`.
/// Its directory becomes the base directory; with no file, `start_dir` is.
///
/// # Example
/// ```ignore
/// let overrides = CliOverrides { port: Some(8080), ..Default::default() };
/// let loaded = load_effective(None, &std::env::current_dir()?, &overrides)?;
/// println!("serving on {}", loaded.config.server_port());
/// ```
pub fn load_effective(
    explicit: Option<&Path>,
    start_dir: &Path,
    overrides: &CliOverrides,
) -> Result<LoadedConfig, ConfigError> {
    let source = match explicit {
        Some(path) => Some(resolve_path(start_dir, path)),
        None => find_config_from(start_dir.to_path_buf()),
    };

    let (declared, base_dir) = match &source {
        Some(path) => {
            debug!(path = %path.display(), "using config file");
            let base = path.parent().map(Path::to_path_buf).unwrap_or_else(|| start_dir.into());
            (load_declared(path)?, base)
        }
        None => {
            debug!(dir = %start_dir.display(), "no config file found, using defaults");
            (DeclaredOptions::default(), start_dir.to_path_buf())
        }
    };

    if !base_dir.is_dir() {
        return Err(ConfigError::invalid_path(
            "base_dir",
            base_dir,
            "must be an existing directory",
        ));
    }

    let declared = declared.overlay(DeclaredOptions::from(overrides));
    let config = resolve(&declared, &base_dir)?;

    Ok(LoadedConfig { config, source, base_dir })
}

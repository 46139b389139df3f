//! Starter config generation for `fcfg init`

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::debug;

use crate::config::{ConfigFormat, DEFAULTS};

/// Error during config initialization
#[derive(Debug, Error)]
pub enum InitError {
    /// Target directory does not exist
    #[error("Directory not found: {}", .0.display())]
    MissingDirectory(PathBuf),
    /// A config file is already present and `force` was not set
    #[error("Config file already exists: {}", .0.display())]
    FileExists(PathBuf),
    /// Failed to write the file
    #[error("Failed to write config: {0}")]
    WriteFile(#[from] std::io::Error),
}

/// File name written for a given format
pub fn config_file_name(format: ConfigFormat) -> &'static str {
    match format {
        ConfigFormat::Toml => "frontcfg.toml",
        ConfigFormat::Json5 => "frontcfg.json5",
    }
}

/// Starter config text spelling out every default
pub fn starter_config(format: ConfigFormat) -> String {
    match format {
        ConfigFormat::Toml => format!(
            r#"# frontcfg configuration
# Relative paths are resolved against the directory holding this file.

root_dir = "{root}"
output_dir = "{out}"
empty_output_before_build = {empty}
server_port = {port}
open_browser_on_start = {open}
"#,
            root = DEFAULTS.root_dir,
            out = DEFAULTS.output_dir,
            empty = DEFAULTS.empty_output_before_build,
            port = DEFAULTS.server_port,
            open = DEFAULTS.open_browser_on_start,
        ),
        ConfigFormat::Json5 => format!(
            r#"// frontcfg configuration
// Relative paths are resolved against the directory holding this file.
{{
  rootDir: "{root}",
  outputDir: "{out}",
  emptyOutputBeforeBuild: {empty},
  serverPort: {port},
  openBrowserOnStart: {open},
}}
"#,
            root = DEFAULTS.root_dir,
            out = DEFAULTS.output_dir,
            empty = DEFAULTS.empty_output_before_build,
            port = DEFAULTS.server_port,
            open = DEFAULTS.open_browser_on_start,
        ),
    }
}

/// Write a starter config into `dir`.
///
/// Refuses to replace an existing file unless `force` is set.
/// Returns the path written.
pub fn init_config(dir: &Path, format: ConfigFormat, force: bool) -> Result<PathBuf, InitError> {
    if !dir.is_dir() {
        return Err(InitError::MissingDirectory(dir.to_path_buf()));
    }

    let path = dir.join(config_file_name(format));
    if path.exists() && !force {
        return Err(InitError::FileExists(path));
    }

    fs::write(&path, starter_config(format))?;
    debug!(path = %path.display(), "wrote starter config");
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{parse_declared, resolve, DeclaredOptions};
    use tempfile::TempDir;

    #[test]
    fn test_starter_configs_resolve_to_defaults() {
        let base = Path::new("/site");
        let expected = resolve(&DeclaredOptions::default(), base).unwrap();

        for format in [ConfigFormat::Toml, ConfigFormat::Json5] {
            let declared = parse_declared(&starter_config(format), format).unwrap();
            assert_eq!(resolve(&declared, base).unwrap(), expected, "{:?}", format);
        }
    }

    #[test]
    fn test_init_writes_file() {
        let temp = TempDir::new().expect("should create temp dir");
        let path = init_config(temp.path(), ConfigFormat::Toml, false).unwrap();
        assert_eq!(path, temp.path().join("frontcfg.toml"));
        assert!(fs::read_to_string(&path).unwrap().contains("server_port = 3000"));
    }

    #[test]
    fn test_init_refuses_overwrite() {
        let temp = TempDir::new().expect("should create temp dir");
        let existing = temp.path().join("frontcfg.json5");
        fs::write(&existing, "{ serverPort: 1234 }").unwrap();

        let result = init_config(temp.path(), ConfigFormat::Json5, false);
        assert!(matches!(result, Err(InitError::FileExists(_))));
        assert_eq!(fs::read_to_string(&existing).unwrap(), "{ serverPort: 1234 }");
    }

    #[test]
    fn test_init_force_overwrites() {
        let temp = TempDir::new().expect("should create temp dir");
        let existing = temp.path().join("frontcfg.toml");
        fs::write(&existing, "server_port = 1234").unwrap();

        init_config(temp.path(), ConfigFormat::Toml, true).unwrap();
        assert!(fs::read_to_string(&existing).unwrap().contains("server_port = 3000"));
    }

    #[test]
    fn test_init_missing_directory() {
        let temp = TempDir::new().expect("should create temp dir");
        let result = init_config(&temp.path().join("absent"), ConfigFormat::Toml, false);
        assert!(matches!(result, Err(InitError::MissingDirectory(_))));
    }
}

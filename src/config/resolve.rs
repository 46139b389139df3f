//! Resolution of declared options into an [`EffectiveConfig`]
//!
//! Resolution is a pure transformation: it joins paths onto the base
//! directory, fills defaults, and validates. It never touches the filesystem.

use std::path::{Component, Path, PathBuf};

use tracing::debug;

use super::error::ConfigError;
use super::schema::{DeclaredOptions, Defaults, EffectiveConfig, DEFAULTS};

/// Resolves declared options against a fixed base directory and default record
#[derive(Debug, Clone, Copy)]
pub struct ConfigResolver<'a> {
    base_dir: &'a Path,
    defaults: &'a Defaults,
}

impl<'a> ConfigResolver<'a> {
    /// Create a resolver using the built-in [`DEFAULTS`]
    pub fn new(base_dir: &'a Path) -> Self {
        Self { base_dir, defaults: &DEFAULTS }
    }

    /// Use a different default record
    pub fn with_defaults(mut self, defaults: &'a Defaults) -> Self {
        self.defaults = defaults;
        self
    }

    /// Merge `declared` over the defaults and validate the result.
    pub fn resolve(&self, declared: &DeclaredOptions) -> Result<EffectiveConfig, ConfigError> {
        if !self.base_dir.is_absolute() {
            return Err(ConfigError::invalid_path(
                "base_dir",
                self.base_dir,
                "must be an absolute path",
            ));
        }

        let root_dir =
            self.resolve_dir("root_dir", declared.root_dir.as_deref(), self.defaults.root_dir)?;
        let output_dir = self.resolve_dir(
            "output_dir",
            declared.output_dir.as_deref(),
            self.defaults.output_dir,
        )?;
        check_nesting(&root_dir, &output_dir)?;

        let server_port = match declared.server_port {
            Some(port) => validate_port(port)?,
            None => validate_port(i64::from(self.defaults.server_port))?,
        };
        let empty_output_before_build = declared
            .empty_output_before_build
            .unwrap_or(self.defaults.empty_output_before_build);
        let open_browser_on_start =
            declared.open_browser_on_start.unwrap_or(self.defaults.open_browser_on_start);

        debug!(
            root_dir = %root_dir.display(),
            output_dir = %output_dir.display(),
            empty_output_before_build,
            server_port,
            open_browser_on_start,
            "resolved configuration"
        );

        Ok(EffectiveConfig::new(
            root_dir,
            output_dir,
            empty_output_before_build,
            server_port,
            open_browser_on_start,
        ))
    }

    fn resolve_dir(
        &self,
        field: &'static str,
        declared: Option<&Path>,
        default: &str,
    ) -> Result<PathBuf, ConfigError> {
        let path = declared.unwrap_or_else(|| Path::new(default));
        validate_path(field, path)?;
        Ok(resolve_path(self.base_dir, path))
    }
}

/// Resolve `declared` against `base_dir` with the built-in defaults.
///
/// # Example
/// ```ignore
/// let config = resolve(&DeclaredOptions::default(), Path::new("/project"))?;
/// assert_eq!(config.output_dir(), Path::new("/project/dist"));
/// ```
pub fn resolve(
    declared: &DeclaredOptions,
    base_dir: &Path,
) -> Result<EffectiveConfig, ConfigError> {
    ConfigResolver::new(base_dir).resolve(declared)
}

/// Resolve a path relative to a base directory.
///
/// If the path is absolute, returns it unchanged.
/// If relative, joins it with the base.
pub fn resolve_path(base_dir: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        base_dir.join(path)
    }
}

/// Collapse `.` and `..` components without consulting the filesystem.
///
/// `..` at the root stays at the root.
pub fn normalize_lexically(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                if matches!(out.components().next_back(), Some(Component::Normal(_))) {
                    out.pop();
                } else if !out.has_root() {
                    out.push("..");
                }
            }
            other => out.push(other.as_os_str()),
        }
    }
    out
}

fn validate_path(field: &'static str, path: &Path) -> Result<(), ConfigError> {
    if path.as_os_str().is_empty() {
        return Err(ConfigError::invalid_path(field, path, "must not be empty"));
    }
    if path.to_string_lossy().contains('\0') {
        return Err(ConfigError::invalid_path(field, path, "must not contain NUL bytes"));
    }
    Ok(())
}

fn validate_port(port: i64) -> Result<u16, ConfigError> {
    match u16::try_from(port) {
        Ok(p) if p != 0 => Ok(p),
        _ => Err(ConfigError::InvalidPort { port }),
    }
}

// Purging the output directory must never reach the sources, and output
// written under the root would be picked up as sources on the next build.
fn check_nesting(root_dir: &Path, output_dir: &Path) -> Result<(), ConfigError> {
    let root = normalize_lexically(root_dir);
    let out = normalize_lexically(output_dir);

    if out == root {
        return Err(ConfigError::invalid_path(
            "output_dir",
            output_dir,
            "must not be the same directory as root_dir",
        ));
    }
    if root.starts_with(&out) {
        return Err(ConfigError::invalid_path(
            "output_dir",
            output_dir,
            format!("must not contain root_dir ({})", root_dir.display()),
        ));
    }
    if out.starts_with(&root) {
        return Err(ConfigError::invalid_path(
            "output_dir",
            output_dir,
            format!("must not lie inside root_dir ({})", root_dir.display()),
        ));
    }
    Ok(())
}

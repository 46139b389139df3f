//! Init command implementation

use std::io;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use tracing::debug;

use crate::config::ConfigFormat;
use crate::init::{init_config, InitError};

use super::{EXIT_ERROR, EXIT_INVALID_ARGS, EXIT_SUCCESS};

/// Directory to initialize: the given path, or the current directory
fn target_dir(path: Option<&Path>) -> io::Result<PathBuf> {
    match path {
        Some(p) => Ok(p.to_path_buf()),
        None => std::env::current_dir(),
    }
}

/// Run the init command
pub fn run_init(path: Option<&Path>, format: &str, force: bool) -> ExitCode {
    let format = match format.to_lowercase().as_str() {
        "toml" => ConfigFormat::Toml,
        "json5" | "json" => ConfigFormat::Json5,
        _ => {
            eprintln!("Error: Unknown format '{}'. Available: toml, json5", format);
            return ExitCode::from(EXIT_INVALID_ARGS);
        }
    };

    let dir = match target_dir(path) {
        Ok(dir) => dir,
        Err(e) => {
            eprintln!("Error: Cannot determine current directory: {}", e);
            return ExitCode::from(EXIT_ERROR);
        }
    };

    match init_config(&dir, format, force) {
        Ok(written) => {
            println!("Created {}", written.display());
            ExitCode::from(EXIT_SUCCESS)
        }
        Err(InitError::FileExists(existing)) => {
            eprintln!("Error: {} already exists", existing.display());
            eprintln!("Use --force to overwrite it");
            ExitCode::from(EXIT_ERROR)
        }
        Err(e) => {
            debug!(error = %e, "init failed");
            eprintln!("Error: {}", e);
            ExitCode::from(EXIT_ERROR)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_target_dir_prefers_explicit_path() {
        let dir = target_dir(Some(Path::new("/srv/site"))).unwrap();
        assert_eq!(dir, PathBuf::from("/srv/site"));
    }

    #[test]
    fn test_target_dir_defaults_to_current_dir() {
        let dir = target_dir(None).unwrap();
        assert_eq!(dir, std::env::current_dir().unwrap());
    }
}

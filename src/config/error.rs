//! Error types for configuration loading and resolution

use std::path::PathBuf;
use thiserror::Error;

/// Configuration error
///
/// Every failure aborts resolution; no partially resolved config is returned.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// A path field is unusable or violates the root/output nesting rule
    #[error("Invalid path for '{field}' ({}): {reason}", path.display())]
    InvalidPath {
        /// Name of the offending field (e.g. "output_dir")
        field: &'static str,
        /// The path as declared or resolved
        path: PathBuf,
        /// Human-readable explanation
        reason: String,
    },
    /// Server port outside the TCP range
    #[error("Invalid server port {port}: must be between 1 and 65535")]
    InvalidPort {
        /// The declared value
        port: i64,
    },
    /// File I/O error
    #[error("Failed to read config: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error (includes unknown fields)
    #[error("Failed to parse TOML config: {0}")]
    ParseToml(#[from] toml::de::Error),
    /// JSON5 parsing error (includes unknown fields)
    #[error("Failed to parse JSON5 config: {0}")]
    ParseJson5(#[from] json5::Error),
    /// Config file extension not recognized
    #[error("Unsupported config format: {} (expected .toml, .json5 or .json)", path.display())]
    UnsupportedFormat {
        /// The config file path
        path: PathBuf,
    },
}

impl ConfigError {
    pub(crate) fn invalid_path(
        field: &'static str,
        path: impl Into<PathBuf>,
        reason: impl Into<String>,
    ) -> Self {
        Self::InvalidPath { field, path: path.into(), reason: reason.into() }
    }

    /// Whether this error was raised by validation rather than by I/O or parsing
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::InvalidPath { .. } | Self::InvalidPort { .. })
    }
}

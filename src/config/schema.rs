//! Configuration schema types
//!
//! `DeclaredOptions` is what a user writes in `frontcfg.toml` (or `.json5`):
//! every field optional, unknown fields rejected. `EffectiveConfig` is what
//! the build and dev-server subsystems read: every field present, paths
//! absolute, invariants checked.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Fixed defaults applied to any field left undeclared
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Defaults {
    /// Source root, relative to the base directory
    pub root_dir: &'static str,
    /// Output directory, relative to the base directory
    pub output_dir: &'static str,
    /// Purge the output directory before each build
    pub empty_output_before_build: bool,
    /// Dev-server TCP port
    pub server_port: u16,
    /// Launch a browser when the dev server starts
    pub open_browser_on_start: bool,
}

/// The default record merged under every declaration
pub const DEFAULTS: Defaults = Defaults {
    root_dir: "public",
    output_dir: "dist",
    empty_output_before_build: true,
    server_port: 3000,
    open_browser_on_start: true,
};

/// User-declared options before defaulting and path resolution
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DeclaredOptions {
    /// Project source root
    #[serde(default, alias = "rootDir", skip_serializing_if = "Option::is_none")]
    pub root_dir: Option<PathBuf>,
    /// Build output destination
    #[serde(default, alias = "outputDir", skip_serializing_if = "Option::is_none")]
    pub output_dir: Option<PathBuf>,
    /// Purge stale output before each build
    #[serde(default, alias = "emptyOutputBeforeBuild", skip_serializing_if = "Option::is_none")]
    pub empty_output_before_build: Option<bool>,
    /// Dev-server port; signed so that out-of-range values reach validation
    #[serde(default, alias = "serverPort", skip_serializing_if = "Option::is_none")]
    pub server_port: Option<i64>,
    /// Auto-launch a browser on server start
    #[serde(default, alias = "openBrowserOnStart", skip_serializing_if = "Option::is_none")]
    pub open_browser_on_start: Option<bool>,
}

impl DeclaredOptions {
    /// Layer `over` on top of `self`, field by field.
    ///
    /// Any field set in `over` wins; unset fields keep the value from `self`.
    pub fn overlay(self, over: DeclaredOptions) -> DeclaredOptions {
        DeclaredOptions {
            root_dir: over.root_dir.or(self.root_dir),
            output_dir: over.output_dir.or(self.output_dir),
            empty_output_before_build: over
                .empty_output_before_build
                .or(self.empty_output_before_build),
            server_port: over.server_port.or(self.server_port),
            open_browser_on_start: over.open_browser_on_start.or(self.open_browser_on_start),
        }
    }
}

/// Fully resolved, immutable configuration
///
/// Only [`crate::config::resolve`] constructs this, so every instance holds
/// absolute, non-nesting directories and a valid port.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EffectiveConfig {
    root_dir: PathBuf,
    output_dir: PathBuf,
    empty_output_before_build: bool,
    server_port: u16,
    open_browser_on_start: bool,
}

impl EffectiveConfig {
    pub(crate) fn new(
        root_dir: PathBuf,
        output_dir: PathBuf,
        empty_output_before_build: bool,
        server_port: u16,
        open_browser_on_start: bool,
    ) -> Self {
        Self { root_dir, output_dir, empty_output_before_build, server_port, open_browser_on_start }
    }

    pub fn root_dir(&self) -> &Path {
        &self.root_dir
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    pub fn empty_output_before_build(&self) -> bool {
        self.empty_output_before_build
    }

    pub fn server_port(&self) -> u16 {
        self.server_port
    }

    pub fn open_browser_on_start(&self) -> bool {
        self.open_browser_on_start
    }

    /// The subset read by the build subsystem
    pub fn build(&self) -> BuildSettings<'_> {
        BuildSettings {
            root_dir: &self.root_dir,
            output_dir: &self.output_dir,
            empty_output_before_build: self.empty_output_before_build,
        }
    }

    /// The subset read by the dev-server subsystem
    pub fn server(&self) -> ServerSettings {
        ServerSettings { port: self.server_port, open_browser: self.open_browser_on_start }
    }
}

/// Build-side view of an [`EffectiveConfig`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuildSettings<'a> {
    pub root_dir: &'a Path,
    pub output_dir: &'a Path,
    pub empty_output_before_build: bool,
}

/// Server-side view of an [`EffectiveConfig`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServerSettings {
    pub port: u16,
    pub open_browser: bool,
}

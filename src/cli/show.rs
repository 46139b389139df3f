//! Show and check command implementations

use std::env;
use std::process::ExitCode;

use tracing::debug;

use crate::config::{load_effective, ConfigError, EffectiveConfig, LoadedConfig};

use super::{ConfigArgs, EXIT_ERROR, EXIT_INVALID_ARGS, EXIT_SUCCESS};

fn load(args: &ConfigArgs) -> Result<LoadedConfig, ConfigError> {
    let start_dir = env::current_dir()?;
    load_effective(args.config.as_deref(), &start_dir, &args.overrides())
}

fn report_error(e: &ConfigError) -> ExitCode {
    debug!(error = %e, "configuration rejected");
    eprintln!("Error: {}", e);
    ExitCode::from(EXIT_ERROR)
}

/// Render the effective config as aligned `key: value` lines
pub fn format_text(loaded: &LoadedConfig) -> String {
    let config = &loaded.config;
    let source = match &loaded.source {
        Some(path) => path.display().to_string(),
        None => "(none, defaults)".to_string(),
    };

    let mut out = String::new();
    out.push_str(&format!("{:<27}{}\n", "config:", source));
    out.push_str(&format!("{:<27}{}\n", "base_dir:", loaded.base_dir.display()));
    out.push_str(&format!("{:<27}{}\n", "root_dir:", config.root_dir().display()));
    out.push_str(&format!("{:<27}{}\n", "output_dir:", config.output_dir().display()));
    out.push_str(&format!(
        "{:<27}{}\n",
        "empty_output_before_build:",
        config.empty_output_before_build()
    ));
    out.push_str(&format!("{:<27}{}\n", "server_port:", config.server_port()));
    out.push_str(&format!("{:<27}{}\n", "open_browser_on_start:", config.open_browser_on_start()));
    out
}

fn format_structured(config: &EffectiveConfig, format: &str) -> Result<String, String> {
    match format {
        "toml" => toml::to_string_pretty(config).map_err(|e| e.to_string()),
        "json" => serde_json::to_string_pretty(config).map(|s| s + "\n").map_err(|e| e.to_string()),
        other => Err(format!("unsupported output format '{}'", other)),
    }
}

/// Execute the show command
pub fn run_show(args: &ConfigArgs, format: &str) -> ExitCode {
    if !matches!(format, "text" | "toml" | "json") {
        eprintln!("Error: --format must be 'text', 'toml' or 'json'");
        return ExitCode::from(EXIT_INVALID_ARGS);
    }

    let loaded = match load(args) {
        Ok(loaded) => loaded,
        Err(e) => return report_error(&e),
    };

    if format == "text" {
        print!("{}", format_text(&loaded));
        return ExitCode::from(EXIT_SUCCESS);
    }

    match format_structured(&loaded.config, format) {
        Ok(text) => {
            print!("{}", text);
            ExitCode::from(EXIT_SUCCESS)
        }
        Err(e) => {
            debug!(error = %e, "failed to serialize configuration");
            eprintln!("Error: {}", e);
            ExitCode::from(EXIT_ERROR)
        }
    }
}

/// Execute the check command
pub fn run_check(args: &ConfigArgs) -> ExitCode {
    match load(args) {
        Ok(loaded) => {
            match &loaded.source {
                Some(path) => println!("OK: {}", path.display()),
                None => println!("OK: no config file, defaults are valid"),
            }
            ExitCode::from(EXIT_SUCCESS)
        }
        Err(e) => report_error(&e),
    }
}

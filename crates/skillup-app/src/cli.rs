//! CLI argument definitions for the SkillUp assistant.
//!
//! Priority resolution: CLI args > env vars > config file > defaults.

use clap::Parser;
use std::path::PathBuf;

/// SkillUp assistant: ask about courses, career paths and the platform.
#[derive(Parser, Debug)]
#[command(name = "skillup", version, about)]
pub struct CliArgs {
    /// Path to the configuration file.
    #[arg(short = 'c', long = "config")]
    pub config: Option<PathBuf>,

    /// Course catalog TOML file (overrides the config file).
    #[arg(long = "catalog")]
    pub catalog: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error).
    #[arg(short = 'l', long = "log-level")]
    pub log_level: Option<String>,

    /// Answer as a logged-in member.
    #[arg(short = 'a', long = "authenticated")]
    pub authenticated: bool,

    /// Print responses as JSON.
    #[arg(long = "json")]
    pub json: bool,

    /// Filter the course list like the header search box and exit.
    #[arg(long = "find", value_name = "TERM")]
    pub find: Option<String>,

    /// Ask a single question and exit. Without it, read questions from stdin.
    pub query: Vec<String>,
}

impl CliArgs {
    /// Resolve the configuration file path.
    ///
    /// Priority: --config flag > SKILLUP_CONFIG env var > ~/.skillup/config.toml.
    pub fn resolve_config_path(&self) -> PathBuf {
        if let Some(ref p) = self.config {
            return p.clone();
        }
        if let Ok(p) = std::env::var("SKILLUP_CONFIG") {
            return PathBuf::from(p);
        }
        default_config_path()
    }

    /// Resolve the catalog file.
    ///
    /// Priority: --catalog flag > config file value. `None` means built-in.
    pub fn resolve_catalog_path(&self, config_path: Option<&str>) -> Option<PathBuf> {
        self.catalog
            .clone()
            .or_else(|| config_path.map(PathBuf::from))
    }

    /// Resolve the log level: --log-level flag > config file value.
    pub fn resolve_log_level(&self, config_level: &str) -> String {
        self.log_level
            .clone()
            .unwrap_or_else(|| config_level.to_string())
    }

    /// The one-shot question, if any words were given.
    pub fn one_shot_query(&self) -> Option<String> {
        if self.query.is_empty() {
            None
        } else {
            Some(self.query.join(" "))
        }
    }
}

fn default_config_path() -> PathBuf {
    #[cfg(target_os = "windows")]
    if let Ok(home) = std::env::var("USERPROFILE") {
        return PathBuf::from(home).join(".skillup").join("config.toml");
    }
    #[cfg(not(target_os = "windows"))]
    if let Ok(home) = std::env::var("HOME") {
        return PathBuf::from(home).join(".skillup").join("config.toml");
    }
    PathBuf::from("config.toml")
}

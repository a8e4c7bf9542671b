//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/coursecat/coursecat.toml`
//! 3. Environment variables: `COURSECAT_*` prefix
//!
//! The per-invocation `--catalog` flag (and its `COURSECAT_CATALOG`
//! companion, handled by clap) sits above all of these.

use std::path::PathBuf;

use config::{Config, ConfigError, Environment, File};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::application::ApplicationError;

/// Catalog source read when no `--catalog` flag is given.
pub const DEFAULT_CATALOG: &str = "courses.csv";

/// Unified configuration for coursecat.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Catalog source file read by list/show/menu (default: courses.csv)
    pub catalog_path: PathBuf,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            catalog_path: PathBuf::from(DEFAULT_CATALOG),
        }
    }
}

/// Get the XDG config directory for coursecat.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "coursecat").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("coursecat.toml"))
}

impl Settings {
    /// Load settings with layered precedence.
    ///
    /// # Precedence (lowest to highest)
    /// 1. Compiled defaults
    /// 2. Global config: `$XDG_CONFIG_HOME/coursecat/coursecat.toml`
    /// 3. Environment variables: `COURSECAT_*` prefix
    pub fn load() -> Result<Self, ApplicationError> {
        let mut builder = Config::builder()
            .set_default("catalog_path", DEFAULT_CATALOG)
            .map_err(config_err)?;

        if let Some(global_path) = global_config_path() {
            builder = builder.add_source(File::from(global_path).required(false));
        }

        builder = builder.add_source(Environment::with_prefix("COURSECAT"));

        let config = builder.build().map_err(config_err)?;
        let mut settings: Self = config.try_deserialize().map_err(config_err)?;

        // Expand ~ and $VAR in path-like fields
        settings.expand_paths();

        Ok(settings)
    }

    /// Expand shell variables and tilde in path-like fields.
    ///
    /// Handles `~`, `$VAR`, and `${VAR}` syntax.
    fn expand_paths(&mut self) {
        let expanded = expand_env_vars(self.catalog_path.to_string_lossy().as_ref());
        self.catalog_path = PathBuf::from(expanded);
    }

    /// Show the effective configuration as TOML.
    pub fn to_toml(&self) -> Result<String, ApplicationError> {
        toml::to_string_pretty(self).map_err(|e| ApplicationError::Config {
            message: format!("serialize config: {e}"),
        })
    }

    /// Generate a template config file.
    pub fn template() -> String {
        r#"# coursecat configuration
#
# Locations (by precedence, lowest to highest):
#   Global: ~/.config/coursecat/coursecat.toml
#   Env:    COURSECAT_* environment variables
#   Flag:   --catalog on the command line (or COURSECAT_CATALOG)

# Catalog source file read by list/show/menu.
# Supports ~ and $VAR expansion.
# catalog_path = "courses.csv"
"#
        .to_string()
    }
}

/// Expand environment variables in a path string.
///
/// Unknown variables leave the input unchanged rather than failing: a
/// literal path with a `$` in it should still be usable.
fn expand_env_vars(path: &str) -> String {
    shellexpand::full(path)
        .map(|s| s.into_owned())
        .unwrap_or_else(|_| path.to_string())
}

fn config_err(e: ConfigError) -> ApplicationError {
    ApplicationError::Config {
        message: e.to_string(),
    }
}

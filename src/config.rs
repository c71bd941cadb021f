//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/animal-search/animal-search.toml`
//! 3. Explicit config file: path from `ANIMAL_SEARCH_CONFIG` (or passed to `load`)
//! 4. Environment variables: `ANIMAL_SEARCH_*` prefix

use std::path::{Path, PathBuf};

use config::{Config, ConfigError, Environment};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::application::ApplicationError;

/// Environment variable naming an explicit config file.
pub const CONFIG_PATH_ENV: &str = "ANIMAL_SEARCH_CONFIG";

/// Invocation shown in the usage diagnostic unless configured otherwise.
pub const DEFAULT_USAGE_PROGRAM: &str = "node app.js";

/// Unified configuration for animal-search.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Dataset JSON file (default: the embedded dataset)
    pub data_file: Option<PathBuf>,
    /// Invocation shown in `Usage: <usage_program> --filter=my-pattern`
    pub usage_program: String,
    /// Spaces per indentation level of the JSON output
    pub indent: usize,
    /// Log level used when RUST_LOG is not set
    pub log_level: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            data_file: None,
            usage_program: DEFAULT_USAGE_PROGRAM.to_string(),
            indent: 2,
            log_level: "warn".to_string(),
        }
    }
}

/// Raw settings for intermediate parsing (`None` means "not specified, inherit").
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct RawSettings {
    pub data_file: Option<PathBuf>,
    pub usage_program: Option<String>,
    pub indent: Option<usize>,
    pub log_level: Option<String>,
}

/// Get the XDG config directory for animal-search.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "animal-search").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("animal-search.toml"))
}

/// Load a TOML file into RawSettings for manual merging.
fn load_raw_settings(path: &Path) -> Result<RawSettings, ApplicationError> {
    let content = std::fs::read_to_string(path).map_err(|e| ApplicationError::Config {
        message: format!("read {}: {}", path.display(), e),
    })?;
    toml::from_str(&content).map_err(|e| ApplicationError::Config {
        message: format!("parse {}: {}", path.display(), e),
    })
}

impl Settings {
    /// Overlay wins where it specifies a value.
    ///
    /// A relative `data_file` is resolved against `base_dir` (the directory of
    /// the config file that named it).
    fn merge_with(&self, overlay: &RawSettings, base_dir: Option<&Path>) -> Self {
        let data_file = overlay
            .data_file
            .as_ref()
            .map(|p| match base_dir {
                Some(dir) if p.is_relative() => dir.join(p),
                _ => p.clone(),
            })
            .or_else(|| self.data_file.clone());

        Self {
            data_file,
            usage_program: overlay
                .usage_program
                .clone()
                .unwrap_or_else(|| self.usage_program.clone()),
            indent: overlay.indent.unwrap_or(self.indent),
            log_level: overlay
                .log_level
                .clone()
                .unwrap_or_else(|| self.log_level.clone()),
        }
    }

    /// Load settings with layered precedence.
    ///
    /// # Arguments
    /// * `config_file` - Optional explicit config file; when `None`, the path in
    ///   `ANIMAL_SEARCH_CONFIG` is used if set
    ///
    /// An explicit config file that does not exist is an error; a missing
    /// global config is not.
    pub fn load(config_file: Option<&Path>) -> Result<Self, ApplicationError> {
        // 1. Start with defaults
        let mut current = Self::default();

        // 2. Global config
        if let Some(global_path) = global_config_path() {
            if global_path.exists() {
                debug!("load: global config {}", global_path.display());
                let raw = load_raw_settings(&global_path)?;
                current = current.merge_with(&raw, global_path.parent());
            }
        }

        // 3. Explicit config file
        let explicit = config_file
            .map(Path::to_path_buf)
            .or_else(|| std::env::var_os(CONFIG_PATH_ENV).map(PathBuf::from));
        if let Some(path) = explicit {
            debug!("load: explicit config {}", path.display());
            let raw = load_raw_settings(&path)?;
            current = current.merge_with(&raw, path.parent());
        }

        // 4. Environment variables (explicit override)
        current = Self::apply_env_overrides(current)?;

        Ok(current)
    }

    /// Apply ANIMAL_SEARCH_* environment variables as explicit overrides.
    fn apply_env_overrides(mut settings: Self) -> Result<Self, ApplicationError> {
        let builder = Config::builder().add_source(
            Environment::with_prefix("ANIMAL_SEARCH")
                .prefix_separator("_")
                .separator("__"),
        );

        let config = builder.build().map_err(config_err)?;

        if let Ok(val) = config.get_string("data_file") {
            settings.data_file = Some(PathBuf::from(val));
        }
        if let Ok(val) = config.get_string("usage_program") {
            settings.usage_program = val;
        }
        match config.get_int("indent") {
            Ok(val) => {
                settings.indent = usize::try_from(val).map_err(|e| ApplicationError::Config {
                    message: format!("ANIMAL_SEARCH_INDENT: {e}"),
                })?;
            }
            Err(ConfigError::NotFound(_)) => {}
            Err(e) => return Err(config_err(e)),
        }
        if let Ok(val) = config.get_string("log_level") {
            settings.log_level = val;
        }

        Ok(settings)
    }
}

fn config_err(e: ConfigError) -> ApplicationError {
    ApplicationError::Config {
        message: e.to_string(),
    }
}

//! Config struct and loading logic.
//!
//! Priority (highest to lowest):
//! 1. CLI flags
//! 2. Environment variables
//! 3. `.opdispatch.toml` in the working directory
//! 4. `~/.config/opdispatch/config.toml` (global defaults)
//! 5. Built-in defaults
//!
//! Each file is read as a [`PartialConfig`]; only keys a file actually sets
//! are overlaid, so a later layer can restore a built-in default.

use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, warn};

use crate::constants;
use crate::env::Env;
use crate::filter::Condition;
use crate::models::OutputFormat;

/// Errors during config loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    ReadFile {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config file {path}: {source}")]
    ParseFile {
        path: PathBuf,
        source: toml::de::Error,
    },
}

/// Top-level configuration, fully resolved.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Config {
    pub output: OutputConfig,
    pub filter: FilterConfig,
}

/// Output configuration.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OutputConfig {
    pub format: OutputFormat,
}

/// Default range and threshold for the filter command.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterConfig {
    pub from: i64,
    pub to: i64,
    pub threshold: i64,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            from: 1,
            to: 100,
            threshold: Condition::DEFAULT_THRESHOLD,
        }
    }
}

/// One config file as written: `None` means the key was absent.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct PartialConfig {
    pub output: Option<PartialOutput>,
    pub filter: Option<PartialFilter>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct PartialOutput {
    pub format: Option<OutputFormat>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct PartialFilter {
    pub from: Option<i64>,
    pub to: Option<i64>,
    pub threshold: Option<i64>,
}

impl Config {
    /// Load configuration with proper layering.
    ///
    /// Reads the global config, then `dir`'s local config, then applies
    /// environment variable overrides.
    pub fn load(dir: Option<&Path>, env: &Env) -> Result<Self, ConfigError> {
        let global = Self::global_config_path();
        Self::load_layers(global.as_deref(), dir, env)
    }

    /// Layered load with an explicit global config path.
    fn load_layers(
        global_path: Option<&Path>,
        dir: Option<&Path>,
        env: &Env,
    ) -> Result<Self, ConfigError> {
        let mut config = Config::default();

        // Layer 4: global config
        if let Some(global_path) = global_path {
            if global_path.exists() {
                debug!(path = %global_path.display(), "loading global config");
                config.merge(Self::load_layer(global_path)?);
            }
        }

        // Layer 3: local config
        if let Some(dir) = dir {
            let local_path = dir.join(constants::CONFIG_FILENAME);
            if local_path.exists() {
                debug!(path = %local_path.display(), "loading local config");
                config.merge(Self::load_layer(&local_path)?);
            }
        }

        // Layer 2: environment variables
        config.apply_env_vars(env);

        Ok(config)
    }

    /// Read a single config file without applying it.
    pub fn load_layer(path: &Path) -> Result<PartialConfig, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadFile {
            path: path.to_path_buf(),
            source: e,
        })?;
        toml::from_str(&content).map_err(|e| ConfigError::ParseFile {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Get the global config file path.
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join(constants::CONFIG_DIR).join("config.toml"))
    }

    /// Overlay every key the layer sets, whatever its value.
    fn merge(&mut self, layer: PartialConfig) {
        if let Some(output) = layer.output {
            if let Some(format) = output.format {
                self.output.format = format;
            }
        }

        if let Some(filter) = layer.filter {
            if let Some(from) = filter.from {
                self.filter.from = from;
            }
            if let Some(to) = filter.to {
                self.filter.to = to;
            }
            if let Some(threshold) = filter.threshold {
                self.filter.threshold = threshold;
            }
        }
    }

    /// Apply environment variable overrides. Invalid values are ignored with a warning.
    fn apply_env_vars(&mut self, env: &Env) {
        match env.parsed::<OutputFormat>(constants::ENV_FORMAT) {
            Some(Ok(format)) => self.output.format = format,
            Some(Err(raw)) => warn!("ignoring invalid {} value: {raw}", constants::ENV_FORMAT),
            None => {}
        }
        match env.parsed::<i64>(constants::ENV_FILTER_FROM) {
            Some(Ok(from)) => self.filter.from = from,
            Some(Err(raw)) => warn!("ignoring invalid {} value: {raw}", constants::ENV_FILTER_FROM),
            None => {}
        }
        match env.parsed::<i64>(constants::ENV_FILTER_TO) {
            Some(Ok(to)) => self.filter.to = to,
            Some(Err(raw)) => warn!("ignoring invalid {} value: {raw}", constants::ENV_FILTER_TO),
            None => {}
        }
    }
}

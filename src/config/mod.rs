//! Configuration module for the prefix matcher.
//!
//! This module provides a configuration system that can load settings from
//! files (TOML, YAML, JSON) and override them with environment variables.
//! All configuration values are validated for correctness before use.

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use config::{Config, ConfigError as ExternalConfigError, Environment, File};
use once_cell::sync::OnceCell;
use serde::{Deserialize, Serialize};

use crate::error::config::ConfigError;

/// Result type for configuration operations.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Default configuration location
const DEFAULT_CONFIG_PATH: &str = "config/default.toml";

/// Default environment variable prefix for configuration overrides
const ENV_PREFIX: &str = "PREFIX_MATCHER";

/// A trait for types that can be validated.
pub trait Validate {
    /// Validates that the configuration is correct.
    ///
    /// # Returns
    ///
    /// * `Ok(())` if the configuration is valid
    /// * `Err(ConfigError)` if the configuration is invalid
    fn validate(&self) -> ConfigResult<()>;
}

/// Main configuration for the prefix matcher.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct MatcherConfig {
    /// Prefix source configuration
    pub prefixes: PrefixSourceConfig,

    /// Log configuration
    pub log: LogConfig,
}

impl Validate for MatcherConfig {
    fn validate(&self) -> ConfigResult<()> {
        self.prefixes.validate()?;
        self.log.validate()?;
        Ok(())
    }
}

/// Configuration for the prefix source file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PrefixSourceConfig {
    /// Path to the line-delimited prefix file
    pub file: PathBuf,
}

impl Default for PrefixSourceConfig {
    fn default() -> Self {
        Self {
            file: PathBuf::from("prefixes.txt"),
        }
    }
}

impl Validate for PrefixSourceConfig {
    fn validate(&self) -> ConfigResult<()> {
        if self.file.as_os_str().is_empty() {
            return Err(ConfigError::ValidationError(
                "prefixes.file must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,

    /// Whether to log in JSON format
    pub json: bool,

    /// Whether to include source code locations in logs
    pub source_location: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: false,
            source_location: true,
        }
    }
}

impl Validate for LogConfig {
    fn validate(&self) -> ConfigResult<()> {
        match self.level.as_str() {
            "trace" | "debug" | "info" | "warn" | "error" => {}
            _ => {
                return Err(ConfigError::ValidationError(format!(
                    "Invalid log level: {}",
                    self.level
                )))
            }
        }
        Ok(())
    }
}

/// Initialize the default configuration for the prefix matcher.
///
/// This loads the default configuration file and merges it with any
/// environment variables. A missing default file is tolerated: defaults are
/// used and a warning is logged.
///
/// # Returns
///
/// * `Ok(())` if the configuration was successfully initialized
/// * `Err(ConfigError)` if there was an error initializing the configuration
pub fn init_default_config() -> ConfigResult<()> {
    let config_path = PathBuf::from(DEFAULT_CONFIG_PATH);
    let loader = ConfigLoader::new(Some(config_path), ENV_PREFIX);

    let config = match loader.load() {
        Ok(config) => config,
        Err(ConfigError::FileNotFound(_)) => {
            tracing::warn!(
                "Default configuration file not found at: {}",
                DEFAULT_CONFIG_PATH
            );
            MatcherConfig::default()
        }
        Err(e) => return Err(e),
    };

    init_global_config(config);

    Ok(())
}

/// Configuration loader for the prefix matcher.
#[derive(Debug)]
pub struct ConfigLoader {
    config_path: Option<PathBuf>,
    env_prefix: String,
}

impl ConfigLoader {
    /// Creates a new configuration loader.
    ///
    /// # Arguments
    ///
    /// * `config_path` - Optional path to the configuration file
    /// * `env_prefix` - Prefix for environment variables that override configuration values
    pub fn new<P: AsRef<Path>>(config_path: Option<P>, env_prefix: &str) -> Self {
        Self {
            config_path: config_path.map(|p| p.as_ref().to_path_buf()),
            env_prefix: env_prefix.to_string(),
        }
    }

    /// Loads the configuration from a file and environment variables.
    ///
    /// # Returns
    ///
    /// * `Ok(MatcherConfig)` if the configuration was loaded successfully
    /// * `Err(ConfigError)` if there was an error loading the configuration
    pub fn load(&self) -> ConfigResult<MatcherConfig> {
        let mut builder = Config::builder();

        // Add default configuration values
        builder = builder.add_source(
            Config::try_from(&MatcherConfig::default())
                .map_err(|e| ConfigError::ParseError(e.to_string()))?,
        );

        // Add configuration from file if provided
        if let Some(path) = &self.config_path {
            if !path.exists() {
                return Err(ConfigError::FileNotFound(path.clone()));
            }

            builder = match path.extension().and_then(|ext| ext.to_str()) {
                Some("toml") => builder.add_source(File::from(path.clone())),
                Some("json") => {
                    builder.add_source(File::from(path.clone()).format(config::FileFormat::Json))
                }
                Some("yaml" | "yml") => {
                    builder.add_source(File::from(path.clone()).format(config::FileFormat::Yaml))
                }
                _ => {
                    return Err(ConfigError::ParseError(format!(
                        "Unsupported file extension for: {path:?}"
                    )))
                }
            };
        }

        // Add environment variables with prefix
        builder = builder.add_source(
            Environment::with_prefix(&self.env_prefix)
                .separator("__")
                .try_parsing(true),
        );

        // Build the configuration
        let config = builder.build().map_err(|e| match e {
            ExternalConfigError::NotFound(path) => ConfigError::FileNotFound(PathBuf::from(path)),
            ExternalConfigError::Message(msg) => ConfigError::ParseError(msg),
            other => ConfigError::ParseError(other.to_string()),
        })?;

        // Deserialize the configuration
        let matcher_config: MatcherConfig = config
            .try_deserialize()
            .map_err(|e| ConfigError::ParseError(e.to_string()))?;

        // Validate the configuration
        matcher_config.validate()?;

        Ok(matcher_config)
    }
}

/// Global configuration accessor.
#[derive(Debug, Clone)]
pub struct GlobalConfig {
    config: Arc<MatcherConfig>,
}

impl GlobalConfig {
    /// Creates a new global configuration.
    ///
    /// # Arguments
    ///
    /// * `config` - The configuration to use
    pub fn new(config: MatcherConfig) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    /// Returns a reference to the configuration.
    pub fn get(&self) -> &MatcherConfig {
        &self.config
    }
}

/// Global configuration instance.
static GLOBAL_CONFIG: OnceCell<Mutex<GlobalConfig>> = OnceCell::new();

/// Initialize the global configuration.
///
/// # Arguments
///
/// * `config` - The configuration to set as global
pub fn init_global_config(config: MatcherConfig) {
    if GLOBAL_CONFIG
        .set(Mutex::new(GlobalConfig::new(config)))
        .is_err()
    {
        tracing::warn!("Global configuration was already initialized, ignoring new configuration");
    }
}

/// Get a clone of the global configuration, if it has been initialized.
pub fn global_config() -> Option<GlobalConfig> {
    GLOBAL_CONFIG
        .get()
        .and_then(|lock| lock.lock().ok().map(|guard| guard.clone()))
}

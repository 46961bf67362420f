//! Configuration management.

mod file_config;

pub use file_config::{default_config_path, find_config_file, read_config_file, write_default_config};

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::sources::StrategyKind;
use crate::utils::{Pacer, DEFAULT_USER_AGENT};

/// Environment variable prefix, e.g. `PAPER_HUNTER__PACING__MIN_DELAY_MS`
pub const ENV_PREFIX: &str = "PAPER_HUNTER";

/// Application configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Where titles come from
    #[serde(default)]
    pub source: SourceConfig,

    /// Courtesy delay between requests
    #[serde(default)]
    pub pacing: PacingConfig,

    /// HTTP client settings
    #[serde(default)]
    pub http: HttpConfig,

    /// Logging settings
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Remote source settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourceConfig {
    /// Locate strategy: "api" or "pages"
    #[serde(default)]
    pub strategy: StrategyKind,

    /// DBLP search API endpoint
    #[serde(default = "default_api_url")]
    pub api_url: String,

    /// Base URL of the DBLP conference table-of-contents tree
    #[serde(default = "default_toc_base_url")]
    pub toc_base_url: String,

    /// Result cap for one API query
    #[serde(default = "default_max_results")]
    pub max_results: usize,

    /// Highest continuation page probed
    #[serde(default = "default_max_subpage")]
    pub max_subpage: u32,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            strategy: StrategyKind::default(),
            api_url: default_api_url(),
            toc_base_url: default_toc_base_url(),
            max_results: default_max_results(),
            max_subpage: default_max_subpage(),
        }
    }
}

fn default_api_url() -> String {
    "https://dblp.org/search/publ/api".to_string()
}

fn default_toc_base_url() -> String {
    "https://dblp.org/db/conf".to_string()
}

fn default_max_results() -> usize {
    1000
}

fn default_max_subpage() -> u32 {
    5
}

/// Pacing configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PacingConfig {
    #[serde(default = "default_min_delay")]
    pub min_delay_ms: u64,

    #[serde(default = "default_max_delay")]
    pub max_delay_ms: u64,
}

impl PacingConfig {
    pub fn pacer(&self) -> Pacer {
        Pacer::new(self.min_delay_ms, self.max_delay_ms)
    }
}

impl Default for PacingConfig {
    fn default() -> Self {
        Self {
            min_delay_ms: default_min_delay(),
            max_delay_ms: default_max_delay(),
        }
    }
}

fn default_min_delay() -> u64 {
    500
}

fn default_max_delay() -> u64 {
    1500
}

/// HTTP client configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HttpConfig {
    /// Whole-request timeout
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,

    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_secs: u64,

    /// Retries after the first attempt of a content fetch
    #[serde(default = "default_max_retries")]
    pub max_retries: u32,

    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout_secs: default_timeout(),
            connect_timeout_secs: default_connect_timeout(),
            max_retries: default_max_retries(),
            user_agent: default_user_agent(),
        }
    }
}

fn default_timeout() -> u64 {
    30
}

fn default_connect_timeout() -> u64 {
    10
}

fn default_max_retries() -> u32 {
    3
}

fn default_user_agent() -> String {
    DEFAULT_USER_AGENT.to_string()
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    /// "text" or "json"
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl LoggingConfig {
    pub fn is_json(&self) -> bool {
        self.format.eq_ignore_ascii_case("json")
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String {
    "warn".to_string()
}

fn default_log_format() -> String {
    "text".to_string()
}

impl Config {
    /// Reject settings the pipeline cannot run with
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.pacing.min_delay_ms > self.pacing.max_delay_ms {
            return Err(ConfigError::Invalid(format!(
                "pacing.min_delay_ms ({}) exceeds pacing.max_delay_ms ({})",
                self.pacing.min_delay_ms, self.pacing.max_delay_ms
            )));
        }
        if self.source.max_results == 0 {
            return Err(ConfigError::Invalid(
                "source.max_results must be at least 1".to_string(),
            ));
        }
        if self.source.max_subpage == 0 {
            return Err(ConfigError::Invalid(
                "source.max_subpage must be at least 1".to_string(),
            ));
        }
        if self.http.timeout_secs == 0 {
            return Err(ConfigError::Invalid(
                "http.timeout_secs must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    Load(#[from] config::ConfigError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Serialize error: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),

    #[error("Configuration file already exists: {0}")]
    AlreadyExists(String),
}

/// Load configuration from an optional TOML file layered under
/// `PAPER_HUNTER__SECTION__KEY` environment variables
pub fn load_config(path: Option<&Path>) -> Result<Config, ConfigError> {
    load_with_environment(path, environment())
}

fn environment() -> config::Environment {
    config::Environment::with_prefix(ENV_PREFIX)
        .prefix_separator("__")
        .separator("__")
        .try_parsing(true)
}

fn load_with_environment(
    path: Option<&Path>,
    environment: config::Environment,
) -> Result<Config, ConfigError> {
    let mut builder = config::Config::builder();
    if let Some(path) = path {
        builder = builder.add_source(config::File::from(path));
    }

    let settings = builder.add_source(environment).build()?;
    let config: Config = settings.try_deserialize()?;
    config.validate()?;
    Ok(config)
}

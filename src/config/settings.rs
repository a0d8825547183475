//! Application settings and configuration management

use crate::error::{AppError, Result};
use config::{Config, Environment, File};
use reqwest::Url;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Prefix for environment overrides, e.g. `PLACEHOLDER_GATEWAY__UPSTREAM__BASE_URL`
pub const ENV_PREFIX: &str = "PLACEHOLDER_GATEWAY";

/// Environment variable naming an alternative configuration file
pub const CONFIG_PATH_ENV: &str = "PLACEHOLDER_GATEWAY_CONFIG";

const DEFAULT_CONFIG_PATH: &str = "config/default.toml";

/// Root configuration structure
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Settings {
    pub server: ServerConfig,
    pub upstream: UpstreamConfig,
    pub probe: ProbeConfig,
    pub logging: LoggingConfig,
}

/// Server configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8000
}

/// Upstream REST service the gateway relays to
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct UpstreamConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_upstream_timeout")]
    pub timeout_ms: u64,
}

fn default_base_url() -> String {
    "https://jsonplaceholder.typicode.com".to_string()
}

fn default_upstream_timeout() -> u64 {
    5000
}

impl UpstreamConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

/// Health probe target.
///
/// The default host assumes the probe runs in a container and the gateway on
/// the container's host. Use `http://127.0.0.1` when both share a host, or the
/// gateway's service name when both run as containers on one network.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ProbeConfig {
    /// Full target URL; takes precedence over host/port/path
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default = "default_probe_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default = "default_probe_path")]
    pub path: String,
    #[serde(default = "default_probe_timeout")]
    pub timeout_secs: u64,
}

fn default_probe_host() -> String {
    "http://host.docker.internal".to_string()
}

fn default_probe_path() -> String {
    "/".to_string()
}

fn default_probe_timeout() -> u64 {
    10
}

impl ProbeConfig {
    /// Address the probe issues its GET against
    pub fn target_url(&self) -> String {
        match &self.url {
            Some(url) => url.clone(),
            None => format!(
                "{}:{}{}",
                self.host.trim_end_matches('/'),
                self.port,
                self.path
            ),
        }
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "json".to_string()
}

impl Settings {
    /// Load settings from the configuration file and environment variables.
    ///
    /// The file defaults to `config/default.toml` and may be moved with
    /// `PLACEHOLDER_GATEWAY_CONFIG`; it is optional.
    pub fn load() -> Result<Self> {
        let path = std::env::var(CONFIG_PATH_ENV).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
        Self::load_from_path(path)
    }

    /// Load settings from a specific configuration file path
    pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::load_with_env_prefix(path, ENV_PREFIX)
    }

    /// Load settings, reading environment overrides under `prefix`
    pub fn load_with_env_prefix<P: AsRef<Path>>(path: P, prefix: &str) -> Result<Self> {
        let path = path.as_ref().to_str().ok_or_else(|| {
            AppError::Config(config::ConfigError::Message(
                "Configuration path is not valid UTF-8".to_string(),
            ))
        })?;

        let config = Config::builder()
            // Start with default values
            .set_default("server.host", default_host())?
            .set_default("server.port", default_port() as i64)?
            .set_default("upstream.base_url", default_base_url())?
            .set_default("upstream.timeout_ms", default_upstream_timeout() as i64)?
            .set_default("probe.host", default_probe_host())?
            .set_default("probe.port", default_port() as i64)?
            .set_default("probe.path", default_probe_path())?
            .set_default("probe.timeout_secs", default_probe_timeout() as i64)?
            .set_default("logging.level", default_log_level())?
            .set_default("logging.format", default_log_format())?
            // Load from configuration file
            .add_source(File::with_name(path).required(false))
            // Override with environment variables
            .add_source(
                Environment::with_prefix(prefix)
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let settings: Settings = config.try_deserialize()?;
        settings.validate()?;
        Ok(settings)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.server.port == 0 {
            return Err(invalid("Server port cannot be 0".to_string()));
        }

        Url::parse(&self.upstream.base_url).map_err(|e| {
            invalid(format!(
                "Upstream base_url '{}' is not a valid URL: {}",
                self.upstream.base_url, e
            ))
        })?;

        if self.upstream.timeout_ms == 0 {
            return Err(invalid("Upstream timeout_ms must be greater than 0".to_string()));
        }

        let target = self.probe.target_url();
        Url::parse(&target)
            .map_err(|e| invalid(format!("Probe target '{}' is not a valid URL: {}", target, e)))?;

        if self.probe.timeout_secs == 0 {
            return Err(invalid("Probe timeout_secs must be greater than 0".to_string()));
        }

        if !["json", "pretty"].contains(&self.logging.format.as_str()) {
            return Err(invalid(format!(
                "Invalid log format '{}'. Must be 'json' or 'pretty'",
                self.logging.format
            )));
        }

        Ok(())
    }
}

fn invalid(message: String) -> AppError {
    AppError::Config(config::ConfigError::Message(message))
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                host: default_host(),
                port: default_port(),
            },
            upstream: UpstreamConfig {
                base_url: default_base_url(),
                timeout_ms: default_upstream_timeout(),
            },
            probe: ProbeConfig {
                url: None,
                host: default_probe_host(),
                port: default_port(),
                path: default_probe_path(),
                timeout_secs: default_probe_timeout(),
            },
            logging: LoggingConfig {
                level: default_log_level(),
                format: default_log_format(),
            },
        }
    }
}

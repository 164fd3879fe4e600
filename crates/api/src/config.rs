//! Application configuration.
//!
//! Sources, later ones winning:
//! 1. built-in defaults
//! 2. TOML file at `$CONFIG_PATH` (default `config.toml`, skipped if that default file is absent)
//! 3. environment variables (`APP_HOST`, `APP_PORT`, `METRICS_FILE_PATH`,
//!    `METRICS_FILE_REPORTING_INTERVAL_SECS`, `METRICS_FILE_ENABLED`)

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result, anyhow};
use serde::Deserialize;

const DEFAULT_CONFIG_PATH: &str = "config.toml";

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub metrics_file: MetricsFileConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".into(),
            port: 8080,
        }
    }
}

impl ServerConfig {
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct MetricsFileConfig {
    pub path: PathBuf,
    pub reporting_interval_secs: u64,
    pub enabled: bool,
}

impl Default for MetricsFileConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("metrics.log"),
            reporting_interval_secs: 30,
            enabled: true,
        }
    }
}

impl MetricsFileConfig {
    pub fn reporting_interval(&self) -> Duration {
        Duration::from_secs(self.reporting_interval_secs)
    }
}

impl AppConfig {
    /// Load from the process environment.
    pub fn load() -> Result<Self> {
        Self::load_with(|key| std::env::var(key).ok())
    }

    /// Load using `env` as the environment lookup.
    pub fn load_with(env: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let explicit_path = env("CONFIG_PATH");
        let path = explicit_path
            .clone()
            .unwrap_or_else(|| DEFAULT_CONFIG_PATH.to_string());

        let mut cfg = match std::fs::read_to_string(&path) {
            Ok(content) => Self::from_toml(&content).with_context(|| format!("invalid config file {path}"))?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound && explicit_path.is_none() => Self::default(),
            Err(e) => return Err(anyhow!("cannot read config file {path}: {e}")),
        };

        cfg.apply_env(&env)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    fn apply_env(&mut self, env: &impl Fn(&str) -> Option<String>) -> Result<()> {
        if let Some(host) = env("APP_HOST") {
            self.server.host = host;
        }
        if let Some(port) = env("APP_PORT") {
            self.server.port = parse_var("APP_PORT", &port)?;
        }
        if let Some(path) = env("METRICS_FILE_PATH") {
            self.metrics_file.path = PathBuf::from(path);
        }
        if let Some(secs) = env("METRICS_FILE_REPORTING_INTERVAL_SECS") {
            self.metrics_file.reporting_interval_secs =
                parse_var("METRICS_FILE_REPORTING_INTERVAL_SECS", &secs)?;
        }
        if let Some(enabled) = env("METRICS_FILE_ENABLED") {
            self.metrics_file.enabled = parse_var("METRICS_FILE_ENABLED", &enabled)?;
        }
        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        if self.server.host.trim().is_empty() {
            return Err(anyhow!("server.host must not be empty"));
        }
        if self.server.port == 0 {
            return Err(anyhow!("server.port must be in 1..=65535"));
        }
        if self.metrics_file.reporting_interval_secs == 0 {
            return Err(anyhow!("metrics_file.reporting_interval_secs must be positive"));
        }
        if self.metrics_file.path.as_os_str().is_empty() {
            return Err(anyhow!("metrics_file.path must not be empty"));
        }
        Ok(())
    }
}

fn parse_var<T>(name: &str, raw: &str) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    raw.trim()
        .parse()
        .map_err(|e| anyhow!("{name}={raw:?} is invalid: {e}"))
}

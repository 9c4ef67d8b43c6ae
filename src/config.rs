use serde::Deserialize;
use std::path::Path;
use std::time::Duration;
use config::Config;
use crate::error::Result;
use tracing::debug;

pub const DEFAULT_PROXY_PREFIX: &str = "/api/supabase-proxy";

#[derive(Debug, Deserialize, Clone, Default)]
#[serde(default)]
pub struct Settings {
    pub server: ServerConfig,
    pub upstream: UpstreamConfig,
    pub proxy: ProxyConfig,
    pub cors: CorsConfig,
    pub notifier: NotifierConfig,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
        }
    }
}

/// Where the relay forwards to. Both values may be absent at startup; the
/// relay then fails each forward instead of refusing to boot.
#[derive(Debug, Deserialize, Clone, Default)]
#[serde(default)]
pub struct UpstreamConfig {
    pub base_url: Option<String>,
    pub api_key: Option<String>,
    pub timeout_secs: Option<u64>,
}

impl UpstreamConfig {
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct ProxyConfig {
    pub prefix: String,
}

impl Default for ProxyConfig {
    fn default() -> Self {
        Self {
            prefix: DEFAULT_PROXY_PREFIX.to_string(),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct CorsConfig {
    pub allowed_origin: String,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allowed_origin: "http://localhost:5173".to_string(),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct NotifierConfig {
    pub delay_ms: u64,
    pub jitter_ms: u64,
}

impl Default for NotifierConfig {
    fn default() -> Self {
        Self {
            delay_ms: 1000,
            jitter_ms: 0,
        }
    }
}

impl Settings {
    /// Loads `config/default.yaml` (if present) overlaid with `APP_*`
    /// environment variables, e.g. `APP_UPSTREAM__BASE_URL`.
    pub fn new() -> Result<Self> {
        let builder = Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(
                config::Environment::with_prefix("APP")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            );

        Self::from_config(builder.build()?)
    }

    /// Loads a single configuration file, ignoring the environment.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let config = Config::builder()
            .add_source(config::File::from(path.as_ref()))
            .build()?;

        Self::from_config(config)
    }

    fn from_config(config: Config) -> Result<Self> {
        let settings: Settings = config.try_deserialize()?;

        debug!(
            upstream = ?settings.upstream.base_url,
            api_key_set = settings.upstream.api_key.is_some(),
            prefix = %settings.proxy.prefix,
            origin = %settings.cors.allowed_origin,
            "Loaded settings"
        );

        Ok(settings)
    }
}

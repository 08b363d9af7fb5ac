//! Storefront settings: `tienda.toml` plus `TIENDA_*` environment overrides.
//!
//! The file is optional and every key has a default. Overrides are read
//! through a lookup function so tests never touch the process environment.
//! A malformed override is an error rather than being silently ignored.

use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing_subscriber::EnvFilter;

/// Settings file looked up in the working directory.
pub const CONFIG_FILE: &str = "tienda.toml";

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub catalog: CatalogConfig,
    pub logging: LoggingConfig,
}

/// Where the storefront listens.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

/// Where the product rows come from.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// JSON export of the catalog sheet.
    pub path: PathBuf,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// `tracing` filter directive, e.g. `tiendad=debug`.
    pub filter: String,
}

impl Config {
    /// Read [`CONFIG_FILE`] and the process environment.
    ///
    /// # Errors
    ///
    /// See [`Config::resolve`].
    pub fn load() -> Result<Self, ConfigError> {
        Self::resolve(Path::new(CONFIG_FILE), |name| std::env::var(name).ok())
    }

    /// Read settings from `path` (defaults when absent), apply overrides
    /// found through `env`, and validate the result.
    ///
    /// # Errors
    ///
    /// Fails on an unreadable or malformed file, an unparsable override,
    /// or settings the storefront cannot start with.
    pub fn resolve(
        path: &Path,
        env: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        let mut config = match std::fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content)?,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Self::default(),
            Err(err) => return Err(err.into()),
        };
        config.apply_env(env)?;
        config.validate()?;
        Ok(config)
    }

    /// Apply `TIENDA_*` overrides.
    ///
    /// `TIENDA_BIND` (`host:port`) wins over `TIENDA_HOST`/`TIENDA_PORT`;
    /// `TIENDA_LOG` wins over `RUST_LOG`.
    fn apply_env(&mut self, env: impl Fn(&str) -> Option<String>) -> Result<(), ConfigError> {
        if let Some(host) = env("TIENDA_HOST") {
            self.server.host = host;
        }
        if let Some(port) = env("TIENDA_PORT") {
            self.server.port = port.parse().map_err(|_| ConfigError::Env {
                var: "TIENDA_PORT",
                value: port,
            })?;
        }
        if let Some(bind) = env("TIENDA_BIND") {
            let addr: SocketAddr = bind.parse().map_err(|_| ConfigError::Env {
                var: "TIENDA_BIND",
                value: bind,
            })?;
            self.server.host = addr.ip().to_string();
            self.server.port = addr.port();
        }
        if let Some(path) = env("TIENDA_CATALOG") {
            self.catalog.path = PathBuf::from(path);
        }
        if let Some(filter) = env("TIENDA_LOG").or_else(|| env("RUST_LOG")) {
            self.logging.filter = filter;
        }
        Ok(())
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::Validation("port must be non-zero".to_string()));
        }
        if self.catalog.path.as_os_str().is_empty() {
            return Err(ConfigError::Validation(
                "catalog path must not be empty".to_string(),
            ));
        }
        self.logging.env_filter()?;
        Ok(())
    }

    /// `host:port` to bind the listener to; IPv6 hosts are bracketed.
    #[must_use]
    pub fn bind_addr(&self) -> String {
        let ServerConfig { host, port } = &self.server;
        if host.contains(':') {
            format!("[{host}]:{port}")
        } else {
            format!("{host}:{port}")
        }
    }
}

impl LoggingConfig {
    /// Build the subscriber filter from [`LoggingConfig::filter`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Validation`] when the directive does not parse.
    pub fn env_filter(&self) -> Result<EnvFilter, ConfigError> {
        EnvFilter::try_new(&self.filter).map_err(|err| {
            ConfigError::Validation(format!("invalid log filter {:?}: {err}", self.filter))
        })
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
        }
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("catalog.json"),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "tiendad=info,tienda=info,tower_http=debug".to_string(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to parse tienda.toml")]
    Parse(#[from] toml::de::Error),
    #[error("failed to read tienda.toml")]
    Io(#[from] std::io::Error),
    #[error("invalid value {value:?} for {var}")]
    Env { var: &'static str, value: String },
    #[error("invalid configuration: {0}")]
    Validation(String),
}

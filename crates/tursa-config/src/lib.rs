//! Configuration loading for the TURSA site.
//! Reads tursa.toml from the current directory or the path in the TURSA_CONFIG env var,
//! then applies TURSA_* environment overrides.

use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const CONFIG_ENV: &str = "TURSA_CONFIG";
pub const DEFAULT_CONFIG_PATH: &str = "tursa.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Config file not found: {0}")]
    NotFound(PathBuf),

    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

pub type Result<T> = std::result::Result<T, ConfigError>;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub site: SiteConfig,
    #[serde(default)]
    pub contact: ContactConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_bind")]
    pub bind: String,
    /// Directory served under `<base>/assets`. Defaults to the web crate's bundled `static/`.
    #[serde(default)]
    pub assets_dir: Option<String>,
}

fn default_bind() -> String { "127.0.0.1:3001".to_string() }

impl Default for ServerConfig {
    fn default() -> Self {
        Self { bind: default_bind(), assets_dir: None }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteConfig {
    /// URL prefix the site is mounted under, e.g. `/CompanyPortfolio`. Empty or `/` for the domain root.
    #[serde(default = "default_base_path")]
    pub base_path: String,
    #[serde(default = "default_brand")]
    pub brand: String,
}

fn default_base_path() -> String { "/CompanyPortfolio".to_string() }
fn default_brand()     -> String { "TURSA".to_string() }

impl Default for SiteConfig {
    fn default() -> Self {
        Self { base_path: default_base_path(), brand: default_brand() }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactConfig {
    /// Third-party form intake URL that receives `{name, email, message}` as JSON.
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    /// Request timeout. `None` keeps the HTTP client's default.
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

fn default_endpoint() -> String { "https://formspree.io/f/your-form-id".to_string() }

impl Default for ContactConfig {
    fn default() -> Self {
        Self { endpoint: default_endpoint(), timeout_secs: None }
    }
}

impl Config {
    /// Load configuration.
    ///
    /// A path named by TURSA_CONFIG must exist. The default `tursa.toml` is
    /// optional; when it is absent the built-in defaults are used.
    pub fn load() -> Result<Self> {
        let explicit = std::env::var(CONFIG_ENV).ok();
        let path = explicit.clone().unwrap_or_else(|| DEFAULT_CONFIG_PATH.to_string());

        let mut config = if Path::new(&path).exists() {
            Self::from_file(&path)?
        } else if explicit.is_some() {
            return Err(ConfigError::NotFound(PathBuf::from(path)));
        } else {
            tracing::debug!("{} not found, using defaults", path);
            Self::default()
        };

        config.apply_env(|key| std::env::var(key).ok());
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Apply TURSA_BIND, TURSA_BASE_PATH and TURSA_CONTACT_ENDPOINT overrides.
    pub fn apply_env<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(bind) = lookup("TURSA_BIND") {
            self.server.bind = bind;
        }
        if let Some(base) = lookup("TURSA_BASE_PATH") {
            self.site.base_path = base;
        }
        if let Some(endpoint) = lookup("TURSA_CONTACT_ENDPOINT") {
            self.contact.endpoint = endpoint;
        }
    }

    pub fn validate(&self) -> Result<()> {
        self.bind_addr()?;

        let endpoint = self.contact.endpoint.trim();
        if !(endpoint.starts_with("http://") || endpoint.starts_with("https://")) {
            return Err(ConfigError::Invalid(format!(
                "contact.endpoint must be an http(s) URL, got {:?}",
                self.contact.endpoint
            )));
        }

        if !is_plain_base_path(&self.site.base_path) {
            return Err(ConfigError::Invalid(format!(
                "site.base_path must be `/` or `/`-separated segments of [A-Za-z0-9._~-], got {:?}",
                self.site.base_path
            )));
        }

        if self.contact.timeout_secs == Some(0) {
            return Err(ConfigError::Invalid("contact.timeout_secs must be positive".into()));
        }

        Ok(())
    }

    pub fn bind_addr(&self) -> Result<SocketAddr> {
        self.server.bind.parse().map_err(|_| {
            ConfigError::Invalid(format!("server.bind is not a socket address: {:?}", self.server.bind))
        })
    }
}

/// Empty, `/`, or non-empty segments of unreserved URL characters. The value
/// ends up inside route patterns, so nothing the router treats specially
/// (`{`, `*`, `//`) may pass.
fn is_plain_base_path(raw: &str) -> bool {
    let trimmed = raw.trim().trim_matches('/');
    trimmed.is_empty()
        || trimmed.split('/').all(|segment| {
            !segment.is_empty()
                && segment
                    .chars()
                    .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '~' | '-'))
        })
}

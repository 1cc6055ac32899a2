//! Application configuration structs
//!
//! Loads configuration from environment variables (optionally seeded from a
//! `.env` file).

use serde::Deserialize;
use std::env;
use std::path::PathBuf;

/// Main application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub app: AppSettings,
    pub api: ServerConfig,
    pub storage: StorageConfig,
    pub access: AccessConfig,
    pub cors: CorsConfig,
}

/// General application settings
#[derive(Debug, Clone, Deserialize)]
pub struct AppSettings {
    #[serde(default = "default_app_name")]
    pub name: String,
    #[serde(default = "default_env")]
    pub env: Environment,
}

/// Environment type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Staging,
    Production,
}

impl Environment {
    #[must_use]
    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }

    #[must_use]
    pub fn is_development(&self) -> bool {
        matches!(self, Self::Development)
    }

    fn parse(value: &str) -> Option<Self> {
        match value.to_lowercase().as_str() {
            "production" => Some(Self::Production),
            "staging" => Some(Self::Staging),
            "development" => Some(Self::Development),
            _ => None,
        }
    }
}

/// HTTP server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

impl ServerConfig {
    #[must_use]
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// JSON document location
#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    #[serde(default = "default_data_file")]
    pub data_file: PathBuf,
}

/// Access gate configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AccessConfig {
    /// Public reads are open unless this is false
    #[serde(default = "default_true")]
    pub allow_public_read: bool,
    /// Public writes are open unless this is true
    #[serde(default)]
    pub public_write_requires_whitelist: bool,
    #[serde(default)]
    pub whitelist_keys: Vec<String>,
    /// SHA-256 hex digests of accepted keys
    #[serde(default)]
    pub whitelist_key_hashes: Vec<String>,
    #[serde(default)]
    pub whitelist_ips: Vec<String>,
    /// Peer addresses allowed to mint new API keys
    #[serde(default)]
    pub keygen_allowed_ips: Vec<String>,
    /// Take the caller address from `X-Forwarded-For` when present
    #[serde(default = "default_true")]
    pub trust_proxy: bool,
}

impl Default for AccessConfig {
    fn default() -> Self {
        Self {
            allow_public_read: true,
            public_write_requires_whitelist: false,
            whitelist_keys: Vec::new(),
            whitelist_key_hashes: Vec::new(),
            whitelist_ips: Vec::new(),
            keygen_allowed_ips: Vec::new(),
            trust_proxy: true,
        }
    }
}

/// CORS configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CorsConfig {
    #[serde(default)]
    pub allowed_origins: Vec<String>,
}

// Default value functions
fn default_app_name() -> String {
    "marine-listings".to_string()
}

fn default_env() -> Environment {
    Environment::Development
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_data_file() -> PathBuf {
    PathBuf::from("data/db.json")
}

fn default_true() -> bool {
    true
}

/// Split a comma list, trimming entries and dropping empty ones
fn parse_list(value: Option<String>) -> Vec<String> {
    value
        .map(|s| {
            s.split(',')
                .map(str::trim)
                .filter(|item| !item.is_empty())
                .map(String::from)
                .collect()
        })
        .unwrap_or_default()
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// A `.env` file is read first if present; `ENV_FILE` names an explicit
    /// file instead.
    ///
    /// # Errors
    /// Returns an error if a variable holds an unusable value
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        match env::var("ENV_FILE") {
            Ok(path) => {
                let _ = dotenvy::from_path(path);
            }
            Err(_) => {
                let _ = dotenvy::dotenv();
            }
        }

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable source
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = match lookup("PORT") {
            Some(raw) => raw
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidValue("PORT", raw))?,
            None => default_port(),
        };

        Ok(Self {
            app: AppSettings {
                name: lookup("APP_NAME").unwrap_or_else(default_app_name),
                env: lookup("APP_ENV")
                    .and_then(|s| Environment::parse(&s))
                    .unwrap_or_default(),
            },
            api: ServerConfig {
                host: lookup("HOST").unwrap_or_else(default_host),
                port,
            },
            storage: StorageConfig {
                data_file: lookup("DATA_FILE")
                    .map(PathBuf::from)
                    .unwrap_or_else(default_data_file),
            },
            access: AccessConfig {
                allow_public_read: lookup("ALLOW_PUBLIC_READ").as_deref() != Some("false"),
                public_write_requires_whitelist: lookup("PUBLIC_WRITE_REQUIRES_WHITELIST")
                    .as_deref()
                    == Some("true"),
                whitelist_keys: parse_list(lookup("WHITELIST_KEYS")),
                whitelist_key_hashes: parse_list(lookup("WHITELIST_KEY_HASHES")),
                whitelist_ips: parse_list(lookup("WHITELIST_IPS")),
                keygen_allowed_ips: parse_list(lookup("KEYGEN_ALLOWED_IPS")),
                trust_proxy: lookup("TRUST_PROXY").as_deref() != Some("false"),
            },
            cors: CorsConfig {
                allowed_origins: parse_list(lookup("CORS_ALLOWED_ORIGINS")),
            },
        })
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}: {1}")]
    InvalidValue(&'static str, String),
}

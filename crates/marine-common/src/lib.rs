//! # marine-common
//!
//! Shared utilities including configuration, error handling, the access gate
//! primitives, and telemetry.

pub mod auth;
pub mod config;
pub mod error;
pub mod telemetry;

// Re-export commonly used types at crate root
pub use auth::{
    generate_api_key, is_keygen_address_allowed, normalize_ip, sha256_hex, ApiKey, Credentials,
    Whitelist,
};
pub use config::{
    AccessConfig, AppConfig, AppSettings, ConfigError, CorsConfig, Environment, ServerConfig,
    StorageConfig,
};
pub use error::{AppError, AppResult, ErrorResponse};
pub use telemetry::{try_init_tracing_with_config, TracingConfig, TracingError};

//! Marine listings API entry point
//!
//! Run with:
//! ```bash
//! cargo run -p marine-api
//! ```
//!
//! Configuration is loaded from environment variables or a `.env` file.

use marine_common::{try_init_tracing_with_config, AppConfig, TracingConfig};
use tracing::{error, info};

#[tokio::main]
async fn main() {
    // Configuration decides the log format, so load it before tracing
    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    if let Err(e) = try_init_tracing_with_config(&TracingConfig::for_environment(config.app.env)) {
        eprintln!("Warning: Failed to initialize tracing: {e}");
    }

    info!(
        app = %config.app.name,
        env = ?config.app.env,
        port = config.api.port,
        data_file = %config.storage.data_file.display(),
        "Configuration loaded"
    );

    if let Err(e) = marine_api::run(config).await {
        error!(error = %e, "Server failed to start");
        std::process::exit(1);
    }
}

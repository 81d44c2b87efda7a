//! Invitation API server entry point
//!
//! Run with:
//! ```bash
//! cargo run -p invite-api
//! ```
//!
//! Configuration is loaded from environment variables or a `.env` file.

use invite_common::{try_init_tracing_with_config, AppConfig, TracingConfig};
use tracing::{error, info};

#[tokio::main]
async fn main() {
    // Load configuration before tracing so the log format follows APP_ENV
    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    // Initialize tracing
    let tracing_config = TracingConfig::for_environment(config.app.env, config.app.log_format);
    if let Err(e) = try_init_tracing_with_config(tracing_config) {
        eprintln!("Warning: Failed to initialize tracing: {}", e);
    }

    // Run the server
    if let Err(e) = run(config).await {
        error!(error = %e, "Server failed to start");
        std::process::exit(1);
    }
}

async fn run(config: AppConfig) -> Result<(), Box<dyn std::error::Error>> {
    info!(
        name = %config.app.name,
        env = ?config.app.env,
        port = config.api.port,
        backend = ?config.store.backend,
        lookup = %config.store.lookup,
        "Configuration loaded"
    );

    invite_api::run(config).await?;

    Ok(())
}

//! Auth API Server entry point
//!
//! Run with:
//! ```bash
//! cargo run -p auth-api
//! ```
//!
//! Configuration is loaded from environment variables and an optional `.env`.

use auth_common::{try_init_tracing, try_init_tracing_with_config, AppConfig, TracingConfig};
use tracing::{error, info};

#[tokio::main]
async fn main() {
    // Run the server
    if let Err(e) = run().await {
        error!(error = %e, "Server failed to start");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration; fall back to default logging so the failure is visible
    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            if let Err(e) = try_init_tracing() {
                eprintln!("Warning: Failed to initialize tracing: {}", e);
            }
            error!(error = %e, "Failed to load configuration");
            return Err(e.into());
        }
    };

    // Initialize tracing
    if let Err(e) = try_init_tracing_with_config(&TracingConfig::from_settings(&config.app)) {
        eprintln!("Warning: Failed to initialize tracing: {}", e);
    }

    info!(
        name = %config.app.name,
        env = ?config.app.env,
        address = %config.api.address(),
        "Starting Auth API Server..."
    );

    // Run the server
    auth_api::run(config).await?;

    Ok(())
}

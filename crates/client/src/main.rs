//! Cat Trap client binary.
//!
//! # Architecture
//!
//! This binary is the composition root that assembles:
//! 1. Runtime (server connection and session state) via `Runtime::builder()`
//! 2. Frontend (UI) - CLI, GUI, etc.
//!
//! Both are built independently and injected into the Client container.
//!
//! # Features
//!
//! - `frontend-cli`: Terminal-based UI (default)
//!
//! # Examples
//!
//! ```bash
//! CATTRAP_SERVER_URL=ws://localhost:8765 cargo run -p cattrap-client
//! ```

use anyhow::Result;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    #[cfg(feature = "frontend-cli")]
    {
        run_cli().await?;
    }

    #[cfg(not(feature = "frontend-cli"))]
    {
        compile_error!("At least one frontend feature must be enabled (frontend-cli, ...)");
    }

    Ok(())
}

/// Run the CLI frontend.
#[cfg(feature = "frontend-cli")]
async fn run_cli() -> Result<()> {
    use cattrap_client::Client;
    use client_frontend_cli::{CliConfig, CliFrontend, FrontendConfig, logging};
    use runtime::{Runtime, RuntimeConfig};

    // 1. Load configuration from environment
    let runtime_config = RuntimeConfig::from_env();
    let frontend_config = FrontendConfig::from_env();
    let cli_config = CliConfig::from_env();

    // 2. Setup logging
    logging::setup_logging(runtime_config.session_id.as_deref())?;

    tracing::info!("Starting Cat Trap client");
    tracing::info!("Server: {}", runtime_config.server_url);
    tracing::info!(
        "Reconnect delay: {} ms",
        runtime_config.reconnect_delay.as_millis()
    );

    // 3. Build Runtime (independent layer); the connection worker starts here
    let runtime = Runtime::builder().config(runtime_config).build();

    // 4. Build Frontend (independent layer)
    tracing::debug!("Building CLI frontend...");
    let frontend = CliFrontend::new(frontend_config, cli_config);

    // 5. Build and run
    let client = Client::builder()
        .runtime(runtime)
        .frontend(frontend)
        .build()?;

    tracing::info!("Client assembled, starting...");
    client.run().await?;

    tracing::info!("Client shutdown complete");
    Ok(())
}

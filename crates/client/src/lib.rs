//! Top-level client orchestrating the host Runtime and a Frontend.
//!
//! # Architecture
//!
//! ```text
//! Client (Top-level container)
//!   ├─→ Runtime (Server connection, waiting gate, last known board)
//!   └─→ Frontend (UI layer - CLI, GUI, etc.)
//! ```
//!
//! # Separation of Concerns
//!
//! - **Client**: Composition root, lifecycle management
//! - **Runtime**: WebSocket link, reconnect loop, request gating, event emission
//! - **Frontend**: User interaction, event consumption, rendering (via RuntimeHandle only)

mod builder;

pub use builder::ClientBuilder;

// Re-export Frontend trait from client-frontend-core
pub use client_frontend_core::Frontend;

use anyhow::Result;

/// Top-level client container.
///
/// # Lifecycle
///
/// 1. Client::builder() assembles the layers; the runtime worker is already running
/// 2. Client::run() transfers control to the frontend (blocking)
/// 3. On frontend exit the runtime is shut down, cancelling any pending
///    reconnect and closing the socket
pub struct Client {
    runtime: runtime::Runtime,
    frontend: Box<dyn Frontend>,
}

impl Client {
    /// Create a new ClientBuilder.
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    /// Run the frontend until the user quits, then stop the runtime.
    ///
    /// # Errors
    ///
    /// Returns the frontend error if it failed, otherwise any error from
    /// shutting the runtime down.
    pub async fn run(self) -> Result<()> {
        let Client {
            runtime,
            mut frontend,
        } = self;

        // Run frontend (blocks until user quits)
        let frontend_result = frontend.run(runtime.handle()).await;

        let shutdown_result = runtime.shutdown().await;
        if let Err(e) = &shutdown_result {
            tracing::error!("Runtime shutdown error: {}", e);
        }

        frontend_result?;
        shutdown_result?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use async_trait::async_trait;
    use runtime::{
        ConnectionError, ConnectionStatus, Connector, Runtime, RuntimeHandle, Transport,
    };

    use super::*;

    struct Unreachable;

    #[async_trait]
    impl Connector for Unreachable {
        async fn connect(&self, _url: &str) -> Result<Box<dyn Transport>, ConnectionError> {
            Err(ConnectionError::Refused("offline".into()))
        }
    }

    /// Frontend that reads one snapshot and hands its handle back for inspection.
    struct Probe {
        seen: Arc<Mutex<Option<(ConnectionStatus, RuntimeHandle)>>>,
    }

    #[async_trait]
    impl Frontend for Probe {
        async fn run(&mut self, handle: RuntimeHandle) -> Result<()> {
            let snapshot = handle.query_status().await?;
            *self.seen.lock().unwrap() = Some((snapshot.status, handle));
            Ok(())
        }
    }

    #[test]
    fn build_requires_runtime_and_frontend() {
        let error = Client::builder().build().err().expect("missing runtime");
        assert!(error.to_string().contains("Runtime is required"));
    }

    #[tokio::test(start_paused = true)]
    async fn runtime_stops_when_the_frontend_returns() {
        let seen = Arc::new(Mutex::new(None));
        let runtime = Runtime::builder().connector(Unreachable).build();

        Client::builder()
            .runtime(runtime)
            .frontend(Probe {
                seen: Arc::clone(&seen),
            })
            .build()
            .unwrap()
            .run()
            .await
            .unwrap();

        let (status, handle) = seen.lock().unwrap().take().expect("frontend ran");
        assert_ne!(status, ConnectionStatus::Connected);
        assert!(handle.query_status().await.is_err());
    }
}

//! High-level runtime orchestrator.
//!
//! The runtime owns the connection worker, wires up command/event channels,
//! and exposes a builder-based API for clients to drive the session.

use std::sync::Arc;

use rand::SeedableRng;
use rand::rngs::StdRng;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::api::{Result, RuntimeError, RuntimeHandle};
use crate::config::RuntimeConfig;
use crate::events::EventBus;
use crate::session::Session;
use crate::transport::{Connector, WsConnector};
use crate::workers::ConnectionWorker;

/// Host controller for one game session.
///
/// Design: Runtime owns the worker task.
/// [`RuntimeHandle`] provides a cloneable façade for clients.
pub struct Runtime {
    handle: RuntimeHandle,
    worker_handle: Option<JoinHandle<()>>,
}

impl Runtime {
    /// Create a new runtime builder
    pub fn builder() -> RuntimeBuilder {
        RuntimeBuilder::new()
    }

    /// Get a cloneable handle to this runtime
    ///
    /// The handle can be shared across clients and async tasks.
    pub fn handle(&self) -> RuntimeHandle {
        self.handle.clone()
    }

    /// Wait for the connection worker to stop.
    pub async fn run(&mut self) -> Result<()> {
        if let Some(worker) = self.worker_handle.take() {
            worker.await.map_err(RuntimeError::WorkerJoin)?;
        }
        Ok(())
    }

    /// Shutdown the runtime gracefully
    ///
    /// Cancels a pending reconnect, closes the open socket and waits for the
    /// worker to finish.
    pub async fn shutdown(mut self) -> Result<()> {
        match self.handle.shutdown().await {
            Ok(()) | Err(RuntimeError::CommandChannelClosed) => {}
            Err(RuntimeError::ReplyChannelClosed(_)) => {}
            Err(error) => return Err(error),
        }
        self.run().await
    }
}

/// Builder for [`Runtime`] with flexible configuration.
pub struct RuntimeBuilder {
    config: RuntimeConfig,
    connector: Option<Arc<dyn Connector>>,
    seed: Option<u64>,
}

impl RuntimeBuilder {
    fn new() -> Self {
        Self {
            config: RuntimeConfig::default(),
            connector: None,
            seed: None,
        }
    }

    /// Override runtime configuration
    pub fn config(mut self, config: RuntimeConfig) -> Self {
        self.config = config;
        self
    }

    /// Replace the WebSocket connector (tests use in-memory links).
    pub fn connector(mut self, connector: impl Connector + 'static) -> Self {
        self.connector = Some(Arc::new(connector));
        self
    }

    /// Seed the generator behind fresh boards.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Spawn the connection worker. Must be called inside a Tokio runtime.
    pub fn build(self) -> Runtime {
        let RuntimeBuilder {
            config,
            connector,
            seed,
        } = self;

        let (command_tx, command_rx) = mpsc::channel(config.command_buffer_size.max(1));
        let event_bus = EventBus::with_capacity(config.event_buffer_size);
        let handle = RuntimeHandle::new(command_tx, event_bus.clone());

        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        let worker = ConnectionWorker::new(
            Session::new(config.theme),
            connector.unwrap_or_else(|| Arc::new(WsConnector)),
            config.server_url,
            config.reconnect_delay,
            command_rx,
            event_bus,
            rng,
        );

        tracing::debug!("spawning connection worker");
        let worker_handle = tokio::spawn(worker.run());

        Runtime {
            handle,
            worker_handle: Some(worker_handle),
        }
    }
}

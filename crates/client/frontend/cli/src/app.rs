//! Glue code tying the runtime handle and terminal UI together.
use anyhow::{Context, Result};
use async_trait::async_trait;

use game_core::HexLayout;
use runtime::RuntimeHandle;

use crate::config::CliConfig;
use crate::event::{CliEventConsumer, EventLoop};
use crate::presentation::terminal;
use client_frontend_core::{Frontend, FrontendConfig, message::MessageLog, view_model::ViewModel};

/// Terminal frontend (ratatui + crossterm).
pub struct CliFrontend {
    frontend_config: FrontendConfig,
    cli_config: CliConfig,
}

impl CliFrontend {
    pub fn new(frontend_config: FrontendConfig, cli_config: CliConfig) -> Self {
        Self {
            frontend_config,
            cli_config,
        }
    }
}

#[async_trait]
impl Frontend for CliFrontend {
    async fn run(&mut self, handle: RuntimeHandle) -> Result<()> {
        tracing::info!("CLI frontend starting...");

        let layout = HexLayout::with_radius(self.cli_config.ui.hex_radius)
            .context("invalid hex radius")?;

        // Subscribe before the snapshot so no event falls in between.
        let events = handle.subscribe();
        let snapshot = handle
            .query_status()
            .await
            .context("failed to read the initial session state")?;

        let mut view_model = ViewModel::new(self.frontend_config.controls.clone());
        view_model.apply_snapshot(snapshot);

        let mut messages = MessageLog::new(self.frontend_config.messages.capacity);
        messages.info("Welcome to Cat Trap. Press n to start a new game.");

        let event_loop = EventLoop::new(
            events,
            handle,
            CliEventConsumer::new(messages),
            view_model,
            layout,
            self.cli_config.clone(),
        );

        let mut terminal = terminal::init()?;
        let _guard = terminal::TerminalGuard;

        let result = event_loop.run(&mut terminal).await;

        terminal::restore()?;
        tracing::info!("CLI frontend exiting");

        result.map(|_consumer| ())
    }
}

//! Event loop orchestrating host events, user input, and rendering.
//!
//! This module coordinates three main concerns:
//! - Host event consumption and ViewModel updates
//! - Keyboard and mouse input (controls, board clicks)
//! - Rendering, followed by reporting the drawn board back to the host

use anyhow::Result;
use game_core::HexLayout;
use runtime::{Event as HostEvent, RuntimeHandle};
use tokio::{
    sync::broadcast::{self, error::RecvError},
    time::{self, Duration},
};

use crate::{
    config::CliConfig,
    input::InputHandler,
    presentation::{terminal::Tui, viewport::BoardViewport},
};
use client_frontend_core::{EventConsumer, view_model::ViewModel};

const FRAME_INTERVAL_MS: u64 = 16;

/// Event loop owning the renderer state.
///
/// This is the main orchestrator that:
/// - Owns the ViewModel (single source of truth for presentation state)
/// - Applies host events to it and redraws on change
/// - Turns clicks into requests and forwards them through the handle
pub struct EventLoop<C>
where
    C: EventConsumer,
{
    pub(crate) events: broadcast::Receiver<HostEvent>,
    pub(crate) handle: RuntimeHandle,
    pub(crate) input: InputHandler,
    pub(crate) consumer: C,
    pub(crate) view_model: ViewModel,
    pub(crate) layout: HexLayout,
    /// Where the board was last drawn; `None` until it fits on screen.
    pub(crate) viewport: Option<BoardViewport>,
    pub(crate) cli_config: CliConfig,
}

impl<C> EventLoop<C>
where
    C: EventConsumer,
{
    pub fn new(
        events: broadcast::Receiver<HostEvent>,
        handle: RuntimeHandle,
        consumer: C,
        view_model: ViewModel,
        layout: HexLayout,
        cli_config: CliConfig,
    ) -> Self {
        Self {
            events,
            handle,
            input: InputHandler::new(),
            consumer,
            view_model,
            layout,
            viewport: None,
            cli_config,
        }
    }

    pub async fn run(mut self, terminal: &mut Tui) -> Result<C> {
        self.redraw(terminal).await?;

        loop {
            tokio::select! {
                result = self.events.recv() => {
                    if self.handle_host_event(result, terminal).await? {
                        break;
                    }
                }
                _ = time::sleep(Duration::from_millis(FRAME_INTERVAL_MS)) => {
                    if self.handle_input_tick(terminal).await? {
                        break;
                    }
                }
            }
        }

        Ok(self.consumer)
    }

    /// Fold a host event into the ViewModel and redraw if anything changed.
    async fn handle_host_event(
        &mut self,
        result: Result<HostEvent, RecvError>,
        terminal: &mut Tui,
    ) -> Result<bool> {
        match result {
            Ok(event) => {
                let impact = self.consumer.on_event(&event);
                let scope = self.view_model.apply(&event);

                if impact.requires_redraw || !scope.is_empty() {
                    self.redraw(terminal).await?;
                }
                Ok(false)
            }
            Err(RecvError::Closed) => {
                tracing::warn!("Event stream closed");
                Ok(true)
            }
            Err(RecvError::Lagged(skipped)) => {
                tracing::warn!("Dropped {} stale events; resyncing", skipped);
                let snapshot = self.handle.query_status().await?;
                self.view_model.apply_snapshot(snapshot);
                self.redraw(terminal).await?;
                Ok(false)
            }
        }
    }
}

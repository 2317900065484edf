//! Requests forwarded to the host.

use anyhow::Result;
use client_frontend_core::{ClickOutcome, EventConsumer, IgnoreReason};
use game_core::{Request, TilePos};
use runtime::Dispatch;

use super::super::EventLoop;
use crate::presentation::terminal::Tui;

impl<C> EventLoop<C>
where
    C: EventConsumer,
{
    /// Run a board click through the interpreter and send the resulting request.
    pub(in crate::event) async fn submit_click(
        &mut self,
        tile: Option<TilePos>,
        terminal: &mut Tui,
    ) -> Result<()> {
        let (outcome, _scope) = self.view_model.click(tile);

        let request = match outcome {
            ClickOutcome::Dispatch(request) => request,
            ClickOutcome::Ignored(IgnoreReason::Waiting) => {
                tracing::warn!("Click ignored: waiting for server response");
                return Ok(());
            }
            ClickOutcome::Ignored(reason) => {
                tracing::debug!(?tile, "Click ignored: {}", reason);
                return Ok(());
            }
        };

        // Show the optimistic mark and the waiting state before the request leaves.
        self.redraw(terminal).await?;

        let label = request.label();
        let dispatch = match request {
            Request::Move(request) => self.handle.submit_move(request).await?,
            Request::Edit(request) => self.handle.submit_edit(request).await?,
        };

        self.view_model.settle(dispatch);
        if !dispatch.is_sent() {
            tracing::warn!(?dispatch, "{} request was not sent", label);
            self.consumer
                .message_log_mut()
                .warn(format!("{label} not sent: {}", describe(dispatch)));
            // The redraw also reports the restored board back to the host.
            self.redraw(terminal).await?;
        }
        Ok(())
    }

    /// Reset local edit state and ask the host for a fresh board.
    pub(in crate::event) async fn start_new_game(&mut self) -> Result<()> {
        self.view_model.begin_new_game();
        let size = self.view_model.controls.size;

        match self.handle.start_game(size).await? {
            Dispatch::Sent => {
                tracing::info!(size, "New game requested");
            }
            Dispatch::Offline => {
                self.consumer
                    .message_log_mut()
                    .warn("Server offline: showing a local board only.");
            }
            Dispatch::Busy => {}
        }
        Ok(())
    }
}

fn describe(dispatch: Dispatch) -> &'static str {
    match dispatch {
        Dispatch::Sent => "sent",
        Dispatch::Busy => "still waiting for the server",
        Dispatch::Offline => "server offline",
    }
}
